//! Game engine: world model, player state, room behavior and the verb
//! dispatcher. Everything here is synchronous and owned by a single [`Game`].

pub mod commands;
pub mod errors;
pub mod inventory;
pub mod types;
pub mod world;

pub use commands::{help_text, parse_command, Game, GameCommand};
pub use errors::GameError;
pub use inventory::{equip_from_room, format_inventory, transfer_to_inventory};
pub use types::{Item, Location, PlayerRecord, RoomRecord, DOOR_KEYWORD};
pub use world::{canonical_world_seed, World, HOME_EXIT, START_LOCATION};
