//! Command parsing and dispatch.
//!
//! A raw input line is parsed into a [`GameCommand`] by [`parse_command`]
//! (pure, no state), then [`Game::process_command`] runs the matching action
//! against the world and the player. Every line produces exactly one reply;
//! rejected commands reply with the [`GameError`] text and change nothing.

use log::{debug, info};

use crate::game::errors::GameError;
use crate::game::inventory::{equip_from_room, format_inventory, transfer_to_inventory};
use crate::game::types::{Item, PlayerRecord};
use crate::game::world::{World, START_LOCATION};
use crate::logutil::escape_log;

pub const VERB_LOOK: &str = "осмотреться";
pub const VERB_MOVE: &str = "идти";
pub const VERB_TAKE: &str = "взять";
pub const VERB_WEAR: &str = "надеть";
pub const VERB_APPLY: &str = "применить";
pub const VERB_INVENTORY: &str = "инвентарь";
pub const VERB_HELP: &str = "помощь";

/// Parsed form of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Look,                                    // осмотреться
    Move(String),                            // идти <куда>
    Take(String),                            // взять <что>
    Wear(String),                            // надеть <что>
    Apply { item: String, target: String },  // применить <что> <к чему>
    Inventory,                               // инвентарь
    Help,                                    // помощь

    /// Known verb, not enough arguments. Carries the usage reply.
    MissingArgument(&'static str),

    /// Unrecognized verb
    Unknown(String),
}

/// Parse raw input into a command.
///
/// Tokens are split on single spaces only, so `"идти  коридор"` has an empty
/// second token. Extra trailing tokens are ignored.
pub fn parse_command(input: &str) -> GameCommand {
    let parts: Vec<&str> = input.split(' ').collect();
    let arg = |idx: usize| parts.get(idx).map(|s| s.to_string());

    match parts[0] {
        VERB_LOOK => GameCommand::Look,
        VERB_MOVE => match arg(1) {
            Some(target) => GameCommand::Move(target),
            None => GameCommand::MissingArgument("не указано куда идти"),
        },
        VERB_TAKE => match arg(1) {
            Some(item) => GameCommand::Take(item),
            None => GameCommand::MissingArgument("не указано что взять"),
        },
        VERB_WEAR => match arg(1) {
            Some(item) => GameCommand::Wear(item),
            None => GameCommand::MissingArgument("не указано что надеть"),
        },
        VERB_APPLY => match (arg(1), arg(2)) {
            (Some(item), Some(target)) => GameCommand::Apply { item, target },
            _ => GameCommand::MissingArgument("применить что и к чему?"),
        },
        VERB_INVENTORY => GameCommand::Inventory,
        VERB_HELP => GameCommand::Help,
        other => GameCommand::Unknown(other.to_string()),
    }
}

/// One play session: the world and the single player in it.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: PlayerRecord,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh world, player in the kitchen with empty hands.
    pub fn new() -> Self {
        Self::with_state(World::new(), PlayerRecord::new(START_LOCATION))
    }

    pub fn with_state(world: World, player: PlayerRecord) -> Self {
        info!("New game started in {}", player.current_room);
        Self { world, player }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    /// Process one raw input line and return the reply to show.
    pub fn process_command(&mut self, input: &str) -> String {
        let command = parse_command(input);
        debug!(
            "Command parsed: input={} room={} command={:?}",
            escape_log(input),
            self.player.current_room,
            command
        );

        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Command rejected: {:?}", e);
                e.to_string()
            }
        }
    }

    /// Current room's live description.
    pub fn look_around(&self) -> String {
        self.handle_look().unwrap_or_else(|e| e.to_string())
    }

    fn execute(&mut self, command: GameCommand) -> Result<String, GameError> {
        match command {
            GameCommand::Look => self.handle_look(),
            GameCommand::Move(target) => self.handle_move(&target),
            GameCommand::Take(item) => self.handle_take(&item),
            GameCommand::Wear(item) => self.handle_wear(&item),
            GameCommand::Apply { item, target } => self.handle_apply(&item, &target),
            GameCommand::Inventory => Ok(format_inventory(&self.player)),
            GameCommand::Help => Ok(help_text()),
            GameCommand::MissingArgument(usage) => Err(GameError::MissingArgument(usage)),
            GameCommand::Unknown(verb) => Err(GameError::UnknownCommand(verb)),
        }
    }

    fn handle_look(&self) -> Result<String, GameError> {
        self.world.describe(self.player.current_room, &self.player)
    }

    /// Entering a room shows its fixed blurb, not the live description.
    fn handle_move(&mut self, target: &str) -> Result<String, GameError> {
        let room = self.world.get_room(self.player.current_room)?;
        let destination = room
            .exit_to(target)
            .ok_or_else(|| GameError::NoPath(target.to_string()))?;
        if room.is_locked(target) {
            return Err(GameError::ExitLocked(target.to_string()));
        }

        let reply = self.world.get_room(destination)?.enter_description.clone();
        debug!("Player moved {} -> {}", self.player.current_room, destination);
        self.player.move_to(destination);
        Ok(reply)
    }

    fn handle_take(&mut self, name: &str) -> Result<String, GameError> {
        let room = self.world.get_room(self.player.current_room)?;
        let item = match name.parse::<Item>() {
            Ok(item) if room.has_item(item) => item,
            _ => return Err(GameError::NoSuchItem(name.to_string())),
        };
        if !self.player.has_container {
            return Err(GameError::NoContainer);
        }

        if !transfer_to_inventory(&mut self.world, &mut self.player, item) {
            return Err(GameError::NoSuchItem(name.to_string()));
        }
        Ok(format!("предмет добавлен в инвентарь: {item}"))
    }

    fn handle_wear(&mut self, name: &str) -> Result<String, GameError> {
        let item = match name.parse::<Item>() {
            Ok(item) if item.is_container() => item,
            _ => return Err(GameError::NotWearable(name.to_string())),
        };
        if !self.world.get_room(self.player.current_room)?.has_item(item) {
            return Err(GameError::NoSuchItem(name.to_string()));
        }

        if !equip_from_room(&mut self.world, &mut self.player, item) {
            return Err(GameError::NoSuchItem(name.to_string()));
        }
        Ok(format!("вы надели: {item}"))
    }

    /// Possession is checked before any room handler is consulted.
    fn handle_apply(&mut self, name: &str, target: &str) -> Result<String, GameError> {
        let item = match name.parse::<Item>() {
            Ok(item) if self.player.is_carrying(&[item]) => item,
            _ => return Err(GameError::NotInInventory(name.to_string())),
        };

        self.world
            .special_action(self.player.current_room, &self.player, item, target)
            .ok_or(GameError::NothingToApply)
    }
}

pub fn help_text() -> String {
    format!(
        "команды: {VERB_LOOK}, {VERB_MOVE} <куда>, {VERB_TAKE} <что>, {VERB_WEAR} <что>, \
         {VERB_APPLY} <что> <к чему>, {VERB_INVENTORY}, {VERB_HELP}"
    )
}
