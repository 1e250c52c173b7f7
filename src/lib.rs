//! # textquest - a tiny text adventure engine
//!
//! A player wakes up in a flat, has to pack a backpack with keys and lecture
//! notes, unlock the front door and get out to the street. The interesting
//! part is the engine: a fixed room graph with mutable items and locks, the
//! player's state, per-room live descriptions, and a verb dispatcher that
//! turns one line of text into one state change and one reply.
//!
//! ## Quick Start
//!
//! ```rust
//! use textquest::game::Game;
//!
//! let mut game = Game::new();
//! println!("{}", game.look_around());
//! assert_eq!(
//!     game.process_command("идти коридор"),
//!     "ничего интересного. можно пройти - кухня, комната, улица"
//! );
//! assert_eq!(game.process_command("идти улица"), "дверь закрыта");
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world model, player state, room behavior, command dispatch
//! - [`shell`] - the read-evaluate-print loop driving a [`game::Game`]
//! - [`config`] - TOML configuration for the shell and logging
//! - [`logutil`] - helpers for keeping player input readable in logs
//!
//! ```text
//! input line ─► parse_command ─► Game::process_command ─► World / PlayerRecord
//!                                         │
//!                                         ▼
//!                                    reply string ─► shell prints it
//! ```

pub mod config;
pub mod game;
pub mod logutil;
pub mod shell;
