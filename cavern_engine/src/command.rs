//! Command module
//!
//! Describes the actions a player may take on a turn, and which of them are
//! on offer at the player's current position.
use variantly::Variantly;

use crate::player::{MAX_HP, Player};
use crate::world::World;

/// Actions that can be chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Command {
    MoveNorth,
    MoveSouth,
    MoveEast,
    MoveWest,
    Attack,
    Heal,
    Trade,
    Inventory,
    Quit,
}

impl Command {
    /// The single key that selects this command.
    pub fn key(self) -> char {
        match self {
            Command::MoveNorth => 'n',
            Command::MoveSouth => 's',
            Command::MoveEast => 'e',
            Command::MoveWest => 'w',
            Command::Attack => 'a',
            Command::Heal => 'h',
            Command::Trade => 't',
            Command::Inventory => 'i',
            Command::Quit => 'q',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::MoveNorth => "Go north",
            Command::MoveSouth => "Go south",
            Command::MoveEast => "Go east",
            Command::MoveWest => "Go west",
            Command::Attack => "Attack",
            Command::Heal => "Heal",
            Command::Trade => "Trade",
            Command::Inventory => "Print inventory",
            Command::Quit => "Quit",
        }
    }

    /// Position delta for movement commands.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Command::MoveNorth => Some((0, -1)),
            Command::MoveSouth => Some((0, 1)),
            Command::MoveEast => Some((1, 0)),
            Command::MoveWest => Some((-1, 0)),
            _ => None,
        }
    }
}

/// Parses an input line into a `Command`, ignoring case and surrounding whitespace.
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "n" | "north" => Some(Command::MoveNorth),
        "s" | "south" => Some(Command::MoveSouth),
        "e" | "east" => Some(Command::MoveEast),
        "w" | "west" => Some(Command::MoveWest),
        "a" | "attack" => Some(Command::Attack),
        "h" | "heal" => Some(Command::Heal),
        "t" | "trade" => Some(Command::Trade),
        "i" | "inventory" | "inv" => Some(Command::Inventory),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Lists the commands on offer at the player's position.
///
/// Movement is withheld while a living enemy blocks the way, and only leads
/// to mapped neighbours. Off the map, every direction is offered so the
/// player can find their way back.
pub fn available_actions(world: &World, player: &Player) -> Vec<Command> {
    let mut actions = vec![Command::Inventory];
    let tile = world.tile_at(player.x, player.y);

    if tile.is_some_and(|t| t.trader().is_some()) {
        actions.push(Command::Trade);
    }

    if tile.is_some_and(|t| t.enemy().is_some_and(|e| e.is_alive())) {
        actions.push(Command::Attack);
    } else {
        for dir in [
            Command::MoveNorth,
            Command::MoveSouth,
            Command::MoveEast,
            Command::MoveWest,
        ] {
            if let Some((dx, dy)) = dir.delta()
                && (tile.is_none() || world.tile_at(player.x + dx, player.y + dy).is_some())
            {
                actions.push(dir);
            }
        }
    }

    if player.hp < MAX_HP {
        actions.push(Command::Heal);
    }
    actions.push(Command::Quit);
    actions
}
