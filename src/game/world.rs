//! World model: the room graph, its mutable item and lock state, and the
//! per-room behavior (dynamic descriptions and special interactions).
//!
//! Topology is fixed once [`World::new`] returns. During play only three
//! things change: items leave rooms, locked exits are unlocked, and the
//! player's container flag is set (that last one lives on the player).

use std::collections::BTreeMap;

use log::debug;

use crate::game::errors::GameError;
use crate::game::types::{Item, Location, PlayerRecord, RoomRecord, DOOR_KEYWORD};

/// Where every new game starts.
pub const START_LOCATION: Location = Location::Kitchen;

/// Exit keyword on the street that leads back into the flat.
pub const HOME_EXIT: &str = "домой";

/// Suffix shared by every description of a room whose only exit is the hallway.
const TO_HALLWAY: &str = "можно пройти - коридор";

/// Build the rooms of the world in their initial state.
pub fn canonical_world_seed() -> Vec<RoomRecord> {
    vec![
        RoomRecord::new(
            Location::Kitchen,
            "кухня, ничего интересного. можно пройти - коридор",
        )
        .with_item(Item::Tea)
        .with_exit(Location::Hallway),
        RoomRecord::new(
            Location::Hallway,
            "ничего интересного. можно пройти - кухня, комната, улица",
        )
        .with_exit(Location::Kitchen)
        .with_exit(Location::Room)
        .with_exit(Location::Street)
        .with_locked_exit(Location::Street.keyword()),
        RoomRecord::new(Location::Room, "ты в своей комнате. можно пройти - коридор")
            .with_item(Item::Keys)
            .with_item(Item::Notes)
            .with_item(Item::Backpack)
            .with_exit(Location::Hallway),
        RoomRecord::new(Location::Street, "на улице весна. можно пройти - домой")
            .with_named_exit(HOME_EXIT, Location::Hallway),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: BTreeMap<Location, RoomRecord>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::from_rooms(canonical_world_seed())
    }

    pub fn from_rooms(rooms: impl IntoIterator<Item = RoomRecord>) -> Self {
        Self {
            rooms: rooms.into_iter().map(|room| (room.location, room)).collect(),
        }
    }

    pub fn get_room(&self, location: Location) -> Result<&RoomRecord, GameError> {
        self.rooms
            .get(&location)
            .ok_or(GameError::RoomNotFound(location))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomRecord> {
        self.rooms.values()
    }

    /// Remove `item` from the room at `location`. Returns false (and changes
    /// nothing) when the item was not there.
    pub fn remove_item(&mut self, location: Location, item: Item) -> bool {
        let removed = self
            .rooms
            .get_mut(&location)
            .is_some_and(|room| room.items.remove(&item));
        if removed {
            debug!("Item {} left room {}", item, location);
        }
        removed
    }

    /// Unlock an exit of the room at `location`. Returns false when the exit
    /// was not locked. Locks are never added back.
    pub fn unlock_exit(&mut self, location: Location, exit: &str) -> bool {
        let unlocked = self
            .rooms
            .get_mut(&location)
            .is_some_and(|room| room.locked_exits.remove(exit));
        if unlocked {
            debug!("Exit {} of room {} unlocked", exit, location);
        }
        unlocked
    }

    /// Render the room as it looks right now. Recomputed on every call.
    pub fn describe(&self, location: Location, player: &PlayerRecord) -> Result<String, GameError> {
        let room = self.get_room(location)?;
        let text = match location {
            Location::Kitchen => describe_kitchen(player),
            Location::Room => describe_bedroom(room),
            Location::Hallway | Location::Street => room.enter_description.clone(),
        };
        Ok(text)
    }

    /// Room-scoped interaction for applying `item` to `target`.
    ///
    /// `None` means the room has nothing special for that pair and the caller
    /// should fall back to its generic reply.
    pub fn special_action(
        &mut self,
        location: Location,
        player: &PlayerRecord,
        item: Item,
        target: &str,
    ) -> Option<String> {
        match location {
            Location::Hallway => self.hallway_action(player, item, target),
            Location::Kitchen | Location::Room | Location::Street => None,
        }
    }

    fn hallway_action(&mut self, player: &PlayerRecord, item: Item, target: &str) -> Option<String> {
        if item != Item::Keys || target != DOOR_KEYWORD {
            return None;
        }
        if !player.is_carrying(&[Item::Keys]) {
            return Some(GameError::NotInInventory(Item::Keys.to_string()).to_string());
        }
        self.unlock_exit(Location::Hallway, Location::Street.keyword());
        Some("дверь открыта".to_string())
    }
}

fn describe_kitchen(player: &PlayerRecord) -> String {
    let ready = player.has_container && player.is_carrying(&[Item::Keys, Item::Notes]);
    let todo = if ready {
        "надо идти в универ"
    } else {
        "надо собрать рюкзак и идти в универ"
    };
    format!("ты находишься на кухне, на столе: чай, {todo}. {TO_HALLWAY}")
}

/// Objects on the table are listed together; the backpack sits on the chair.
fn describe_bedroom(room: &RoomRecord) -> String {
    let on_table: Vec<&str> = room
        .items
        .iter()
        .filter(|item| !item.is_container())
        .map(|item| item.keyword())
        .collect();
    let backpack = room.items.iter().find(|item| item.is_container());

    if on_table.is_empty() && backpack.is_none() {
        return format!("пустая комната. {TO_HALLWAY}");
    }

    let mut parts = Vec::new();
    if !on_table.is_empty() {
        parts.push(format!("на столе: {}", on_table.join(", ")));
    }
    if let Some(backpack) = backpack {
        parts.push(format!("на стуле: {backpack}"));
    }
    format!("{}. {TO_HALLWAY}", parts.join(", "))
}
