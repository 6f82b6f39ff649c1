#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const CAVERN_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod enemy;
pub mod item;
pub mod loader;
pub mod map;
pub mod npc;
pub mod player;
pub mod repl;
pub mod style;
pub mod tile;
pub mod trade;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use enemy::{Enemy, EnemyKind};
pub use item::{Item, ItemCapability, ItemHolder};
pub use loader::load_world;
pub use map::{InvalidMapError, parse_world};
pub use npc::Merchant;
pub use player::Player;
pub use repl::{GameOutcome, run_repl};
pub use tile::{Tile, TileKind};
pub use view::{View, ViewItem};
pub use world::World;
