use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::game::errors::GameError;

/// Keyword players type to refer to the door in the hallway.
pub const DOOR_KEYWORD: &str = "дверь";

/// Every location in the world. The set is closed, so exits and special
/// actions are matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    Kitchen,
    Hallway,
    Room,
    Street,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Kitchen,
        Location::Hallway,
        Location::Room,
        Location::Street,
    ];

    /// The word used for this location in commands and descriptions.
    pub fn keyword(self) -> &'static str {
        match self {
            Location::Kitchen => "кухня",
            Location::Hallway => "коридор",
            Location::Room => "комната",
            Location::Street => "улица",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Portable things found in the world. Declaration order is listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Tea,
    Keys,
    Notes,
    Backpack,
}

impl Item {
    pub const ALL: [Item; 4] = [Item::Tea, Item::Keys, Item::Notes, Item::Backpack];

    pub fn keyword(self) -> &'static str {
        match self {
            Item::Tea => "чай",
            Item::Keys => "ключи",
            Item::Notes => "конспекты",
            Item::Backpack => "рюкзак",
        }
    }

    /// Only the backpack can be worn; wearing it is what lets the player carry things.
    pub fn is_container(self) -> bool {
        matches!(self, Item::Backpack)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Item {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Item::ALL
            .into_iter()
            .find(|item| item.keyword() == s)
            .ok_or_else(|| GameError::NoSuchItem(s.to_string()))
    }
}

/// A single location: its static topology plus the state that changes in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub location: Location,
    pub enter_description: String,
    pub items: BTreeSet<Item>,
    /// Exit keyword -> destination.
    pub exits: BTreeMap<String, Location>,
    /// Always a subset of the keys of `exits`; only ever shrinks.
    pub locked_exits: BTreeSet<String>,
}

impl RoomRecord {
    pub fn new(location: Location, enter_description: &str) -> Self {
        Self {
            location,
            enter_description: enter_description.to_string(),
            items: BTreeSet::new(),
            exits: BTreeMap::new(),
            locked_exits: BTreeSet::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item);
        self
    }

    /// Add an exit named after its destination.
    pub fn with_exit(self, destination: Location) -> Self {
        self.with_named_exit(destination.keyword(), destination)
    }

    pub fn with_named_exit(mut self, keyword: &str, destination: Location) -> Self {
        self.exits.insert(keyword.to_string(), destination);
        self
    }

    /// Lock an existing exit. Keywords that are not exits are ignored so the
    /// lock set can never escape the exit set.
    pub fn with_locked_exit(mut self, keyword: &str) -> Self {
        if self.exits.contains_key(keyword) {
            self.locked_exits.insert(keyword.to_string());
        }
        self
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn exit_to(&self, keyword: &str) -> Option<Location> {
        self.exits.get(keyword).copied()
    }

    pub fn is_locked(&self, keyword: &str) -> bool {
        self.locked_exits.contains(keyword)
    }
}

/// The player's mutable state. A plain data holder: callers validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub current_room: Location,
    pub inventory: BTreeSet<Item>,
    pub has_container: bool,
}

impl PlayerRecord {
    pub fn new(starting_room: Location) -> Self {
        Self {
            current_room: starting_room,
            inventory: BTreeSet::new(),
            has_container: false,
        }
    }

    /// True only when every listed item is held.
    pub fn is_carrying(&self, items: &[Item]) -> bool {
        items.iter().all(|item| self.inventory.contains(item))
    }

    pub fn move_to(&mut self, location: Location) {
        self.current_room = location;
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.insert(item);
    }

    /// Once equipped the container stays on for the rest of the session.
    pub fn equip(&mut self) {
        self.has_container = true;
    }
}
