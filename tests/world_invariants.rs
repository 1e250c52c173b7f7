/// State invariants checked after every command of many deterministic
/// command sequences.
use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use textquest::game::{Game, Item, Location};

const VOCABULARY: &[&str] = &[
    "осмотреться",
    "идти коридор",
    "идти комната",
    "идти кухня",
    "идти улица",
    "идти домой",
    "надеть рюкзак",
    "надеть ключи",
    "взять ключи",
    "взять конспекты",
    "взять чай",
    "взять рюкзак",
    "применить ключи дверь",
    "применить конспекты дверь",
    "инвентарь",
    "прыгать",
];

/// Reproducible command sequence for a seed.
fn script(seed: u64, len: usize) -> Vec<&'static str> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .filter_map(|_| VOCABULARY.choose(&mut rng).copied())
        .collect()
}

#[test]
fn scripts_are_reproducible() {
    assert_eq!(script(42, 30), script(42, 30));
    assert_eq!(script(42, 30).len(), 30);
    assert_ne!(script(1, 30), script(2, 30));
}

fn room_items(game: &Game) -> Vec<Item> {
    game.world().rooms().flat_map(|room| room.items.iter().copied()).collect()
}

fn locked_exits(game: &Game) -> BTreeSet<(Location, String)> {
    game.world()
        .rooms()
        .flat_map(|room| room.locked_exits.iter().map(move |exit| (room.location, exit.clone())))
        .collect()
}

fn assert_item_exclusivity(game: &Game) {
    let in_rooms = room_items(game);
    let held: Vec<Item> = game.player().inventory.iter().copied().collect();
    for item in Item::ALL {
        let in_room_count = in_rooms.iter().filter(|i| **i == item).count();
        let held_count = held.iter().filter(|i| **i == item).count();
        let worn = usize::from(item.is_container() && game.player().has_container);
        assert_eq!(
            in_room_count + held_count + worn,
            1,
            "{item} must be in exactly one place"
        );
    }
}

#[test]
fn invariants_hold_for_many_sequences() {
    for seed in 0..200 {
        let mut game = Game::new();
        let mut locks = locked_exits(&game);
        let mut had_container = false;

        for line in script(seed, 60) {
            let before = game.player().current_room;
            let before_inventory = game.player().inventory.clone();
            let reply = game.process_command(line);
            assert!(!reply.is_empty(), "every command gets a reply");

            assert_item_exclusivity(&game);

            // Locks only ever go away.
            let now = locked_exits(&game);
            assert!(now.is_subset(&locks), "lock set grew after {line}");
            locks = now;

            // The container flag never reverts.
            assert!(!had_container || game.player().has_container);
            had_container = game.player().has_container;

            // The current room always resolves.
            assert!(game.world().get_room(game.player().current_room).is_ok());

            if reply.starts_with("нет пути в ") || reply == "дверь закрыта" {
                assert_eq!(game.player().current_room, before, "rejected move relocated");
            }
            if reply == "некуда класть" {
                assert_eq!(game.player().inventory, before_inventory);
            }
        }
    }
}

#[test]
fn look_around_is_idempotent() {
    for seed in 0..50 {
        let mut game = Game::new();
        for line in script(seed, 20) {
            game.process_command(line);
            let first = game.process_command("осмотреться");
            let second = game.process_command("осмотреться");
            assert_eq!(first, second);
        }
    }
}

#[test]
fn take_without_container_leaves_item_in_room() {
    let mut game = Game::new();
    game.process_command("идти коридор");
    game.process_command("идти комната");
    for item in ["ключи", "конспекты", "рюкзак"] {
        assert_eq!(game.process_command(&format!("взять {item}")), "некуда класть");
    }
    let room = game.world().get_room(Location::Room).unwrap();
    assert!(room.has_item(Item::Keys));
    assert!(room.has_item(Item::Notes));
    assert!(room.has_item(Item::Backpack));
    assert!(game.player().inventory.is_empty());
}

#[test]
fn topology_never_changes() {
    let mut game = Game::new();
    let exits_before: Vec<_> = game.world().rooms().map(|room| room.exits.clone()).collect();
    for line in script(7, 200) {
        game.process_command(line);
    }
    let exits_after: Vec<_> = game.world().rooms().map(|room| room.exits.clone()).collect();
    assert_eq!(exits_before, exits_after);
}
