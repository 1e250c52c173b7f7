/// Moving items between rooms and the player, and rendering what the player holds.
use super::types::{Item, PlayerRecord};
use super::world::World;

// ============================================================================
// Item transfer
// ============================================================================

/// Move `item` from the player's current room into the inventory.
///
/// Returns false and leaves both sides untouched when the room does not have
/// the item, so an item is never in two places or in none.
pub fn transfer_to_inventory(world: &mut World, player: &mut PlayerRecord, item: Item) -> bool {
    if !world.remove_item(player.current_room, item) {
        return false;
    }
    player.add_item(item);
    true
}

/// Take the container out of the current room and put it on.
pub fn equip_from_room(world: &mut World, player: &mut PlayerRecord, item: Item) -> bool {
    if !item.is_container() || !world.remove_item(player.current_room, item) {
        return false;
    }
    player.equip();
    true
}

// ============================================================================
// Display
// ============================================================================

/// One line describing the inventory, in item declaration order.
pub fn format_inventory(player: &PlayerRecord) -> String {
    let mut response = if player.inventory.is_empty() {
        "инвентарь пуст".to_string()
    } else {
        let names: Vec<&str> = player.inventory.iter().map(|item| item.keyword()).collect();
        format!("в инвентаре: {}", names.join(", "))
    };
    if player.has_container {
        response.push_str(&format!(", на тебе: {}", Item::Backpack));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Location;

    fn test_player(at: Location) -> PlayerRecord {
        PlayerRecord::new(at)
    }

    #[test]
    fn transfer_moves_item_exactly_once() {
        let mut world = World::new();
        let mut player = test_player(Location::Room);

        assert!(transfer_to_inventory(&mut world, &mut player, Item::Keys));
        assert!(player.inventory.contains(&Item::Keys));
        assert!(!world.get_room(Location::Room).unwrap().has_item(Item::Keys));

        // Second attempt finds nothing and changes nothing.
        assert!(!transfer_to_inventory(&mut world, &mut player, Item::Keys));
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn transfer_of_absent_item_is_a_no_op() {
        let mut world = World::new();
        let mut player = test_player(Location::Kitchen);
        assert!(!transfer_to_inventory(&mut world, &mut player, Item::Keys));
        assert!(player.inventory.is_empty());
        assert!(world.get_room(Location::Room).unwrap().has_item(Item::Keys));
    }

    #[test]
    fn equip_only_accepts_the_container() {
        let mut world = World::new();
        let mut player = test_player(Location::Room);

        assert!(!equip_from_room(&mut world, &mut player, Item::Notes));
        assert!(!player.has_container);
        assert!(world.get_room(Location::Room).unwrap().has_item(Item::Notes));

        assert!(equip_from_room(&mut world, &mut player, Item::Backpack));
        assert!(player.has_container);
        assert!(!player.inventory.contains(&Item::Backpack));
        assert!(!world.get_room(Location::Room).unwrap().has_item(Item::Backpack));
    }

    #[test]
    fn inventory_rendering() {
        let mut player = test_player(Location::Room);
        assert_eq!(format_inventory(&player), "инвентарь пуст");

        player.equip();
        assert_eq!(format_inventory(&player), "инвентарь пуст, на тебе: рюкзак");

        player.add_item(Item::Notes);
        player.add_item(Item::Keys);
        assert_eq!(
            format_inventory(&player),
            "в инвентаре: ключи, конспекты, на тебе: рюкзак"
        );
    }
}
