//! Tile types and entry effects.
//!
//! A `Tile` is one addressable cell of the cave. What happens when the player
//! steps onto it depends on its [`TileKind`].

use log::info;
use rand::Rng;
use variantly::Variantly;

use crate::enemy::Enemy;
use crate::npc::Merchant;
use crate::player::Player;
use crate::view::{View, ViewItem};

pub const START_TEXT: &str = "You find yourself in a cave with a flickering torch on the wall. \
    You can make out four paths, each equally as dark and foreboding.";
pub const VICTORY_TEXT: &str = "You see a bright light in the distance... it grows as you get closer! \
    It's sunlight! Victory is yours!";
pub const UNREMARKABLE_TEXT: &str = "Another unremarkable part of the labyrinth. You must proceed ahead.";
pub const GOLD_TEXT: &str = "Someone dropped some gold. You pick it up.";
pub const TRADER_TEXT: &str = "A strange not-quite-human, not-quite-creature squats in the corner \
    clinking his gold coins together. He looks willing to trade.";
/// Narration for positions with no tile at all.
pub const NOTHING_HERE_TEXT: &str = "Solid rock surrounds you. There is nothing here.";

/// Range of gold a find-gold tile can hold when generated randomly.
pub const GOLD_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// The behavior carried by a tile, with any state private to that behavior.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum TileKind {
    Start,
    Victory,
    Enemy(Enemy),
    FindGold { gold: u32, claimed: bool },
    Empty,
    Trader(Merchant),
}

/// One cell of the grid. `x` and `y` always match its grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(x: i32, y: i32, kind: TileKind) -> Tile {
        Tile { x, y, kind }
    }

    pub fn start(x: i32, y: i32) -> Tile {
        Tile::new(x, y, TileKind::Start)
    }

    pub fn victory(x: i32, y: i32) -> Tile {
        Tile::new(x, y, TileKind::Victory)
    }

    pub fn empty(x: i32, y: i32) -> Tile {
        Tile::new(x, y, TileKind::Empty)
    }

    pub fn trading_post(x: i32, y: i32) -> Tile {
        Tile::new(x, y, TileKind::Trader(Merchant::new()))
    }

    /// Enemy tile with an enemy drawn from the weighted kind table.
    pub fn spawn_enemy(x: i32, y: i32, rng: &mut impl Rng) -> Tile {
        Tile::enemy_with(x, y, Enemy::spawn(rng))
    }

    pub fn enemy_with(x: i32, y: i32, enemy: Enemy) -> Tile {
        Tile::new(x, y, TileKind::Enemy(enemy))
    }

    /// Find-gold tile holding a random amount from [`GOLD_RANGE`].
    pub fn find_gold(x: i32, y: i32, rng: &mut impl Rng) -> Tile {
        Tile::find_gold_with(x, y, rng.random_range(GOLD_RANGE))
    }

    pub fn find_gold_with(x: i32, y: i32, gold: u32) -> Tile {
        Tile::new(x, y, TileKind::FindGold { gold, claimed: false })
    }

    /// Narrates the tile in its current state.
    pub fn describe(&self) -> &str {
        match &self.kind {
            TileKind::Start => START_TEXT,
            TileKind::Victory => VICTORY_TEXT,
            TileKind::Enemy(enemy) => enemy.text(),
            TileKind::FindGold { claimed: true, .. } | TileKind::Empty => UNREMARKABLE_TEXT,
            TileKind::FindGold { claimed: false, .. } => GOLD_TEXT,
            TileKind::Trader(_) => TRADER_TEXT,
        }
    }

    /// Applies the tile's effect on a player who has just arrived (or stayed).
    pub fn on_enter(&mut self, player: &mut Player, view: &mut View) {
        match &mut self.kind {
            TileKind::Victory => {
                if !player.victory {
                    info!("player reached victory tile at ({}, {})", self.x, self.y);
                }
                player.victory = true;
            },
            TileKind::Enemy(enemy) if enemy.is_alive() => {
                player.hp -= enemy.damage();
                info!(
                    "{} hit player for {} at ({}, {}), player hp now {}",
                    enemy.name(),
                    enemy.damage(),
                    self.x,
                    self.y,
                    player.hp
                );
                view.push(ViewItem::PlayerHarmed {
                    enemy: enemy.name().to_string(),
                    damage: enemy.damage(),
                    hp_left: player.hp,
                });
            },
            TileKind::FindGold { gold, claimed } if !*claimed => {
                *claimed = true;
                player.gold += *gold;
                info!("player claimed {gold} gold at ({}, {})", self.x, self.y);
                view.push(ViewItem::GoldFound(*gold));
            },
            _ => {},
        }
    }

    /// The enemy on this tile, if it is an enemy tile.
    pub fn enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            TileKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.kind {
            TileKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    /// The merchant on this tile, if trading is possible here.
    pub fn trader(&self) -> Option<&Merchant> {
        match &self.kind {
            TileKind::Trader(merchant) => Some(merchant),
            _ => None,
        }
    }

    pub fn trader_mut(&mut self) -> Option<&mut Merchant> {
        match &mut self.kind {
            TileKind::Trader(merchant) => Some(merchant),
            _ => None,
        }
    }
}
