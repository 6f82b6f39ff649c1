//! The turn loop.
//!
//! Each turn narrates the tile under the player, applies its entry effect,
//! then asks for one action. The loop ends on death, victory, or quit.

pub mod input;

use anyhow::Result;
use log::info;
use variantly::Variantly;

use crate::command::{Command, available_actions, parse_command};
use crate::player::Player;
use crate::tile::NOTHING_HERE_TEXT;
use crate::view::{View, ViewItem};
use crate::world::World;

use input::{InputEvent, InputSource};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GameOutcome {
    Victory,
    Defeat,
    Quit,
}

/// Control flow signal used by action handlers to exit the loop.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Narrate the player's tile and apply its effect.
pub fn enter_tile(world: &mut World, player: &mut Player, view: &mut View) {
    match world.tile_at_mut(player.x, player.y) {
        Some(tile) => {
            view.push(ViewItem::TileIntro(tile.describe().to_string()));
            tile.on_enter(player, view);
        },
        None => view.push(ViewItem::TileIntro(NOTHING_HERE_TEXT.to_string())),
    }
}

/// Run the game until the player dies, wins, or quits.
///
/// # Errors
/// Propagates failures from the input source.
pub fn run_repl(
    world: &mut World,
    player: &mut Player,
    input: &mut dyn InputSource,
    view: &mut View,
) -> Result<GameOutcome> {
    let mut turn = 0_usize;
    loop {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        enter_tile(world, player, view);

        if !player.is_alive() {
            info!("player died on turn {turn} at ({}, {})", player.x, player.y);
            view.push(ViewItem::PlayerDied);
            view.flush();
            return Ok(GameOutcome::Defeat);
        }
        if player.victory {
            info!("player won on turn {turn}");
            view.push(ViewItem::VictoryReached);
            view.flush();
            return Ok(GameOutcome::Victory);
        }

        let Some(command) = choose_action(world, player, input, view)? else {
            view.flush();
            return Ok(GameOutcome::Quit);
        };
        if let ReplControl::Quit = dispatch(command, world, player, input, view)? {
            view.push(ViewItem::EngineMessage("You sit down in the dark and give up.".into()));
            view.flush();
            return Ok(GameOutcome::Quit);
        }
    }
}

/// Offer the available actions until the player picks one of them.
/// Returns `None` when input runs out.
fn choose_action(
    world: &World,
    player: &Player,
    input: &mut dyn InputSource,
    view: &mut View,
) -> Result<Option<Command>> {
    let actions = available_actions(world, player);
    view.push(ViewItem::ActionMenu(actions.clone()));
    loop {
        view.flush();
        let line = match input.read_line("Action: ")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(None),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".into()));
                continue;
            },
        };
        match parse_command(&line) {
            Some(command) if actions.contains(&command) => return Ok(Some(command)),
            _ => view.push(ViewItem::InvalidChoice("Invalid action!".into())),
        }
    }
}

fn dispatch(
    command: Command,
    world: &mut World,
    player: &mut Player,
    input: &mut dyn InputSource,
    view: &mut View,
) -> Result<ReplControl> {
    match command {
        Command::MoveNorth => player.move_north(),
        Command::MoveSouth => player.move_south(),
        Command::MoveEast => player.move_east(),
        Command::MoveWest => player.move_west(),
        Command::Attack => player.attack(world, view),
        Command::Heal => player.heal(input, view)?,
        Command::Trade => player.trade(world, input, view)?,
        Command::Inventory => player.show_inventory(view),
        Command::Quit => return Ok(ReplControl::Quit),
    }
    Ok(ReplControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{Enemy, EnemyKind};
    use crate::tile::Tile;
    use input::ScriptedInput;

    fn corridor(middle: Tile) -> World {
        World::from_rows(
            vec![vec![Some(Tile::start(0, 0)), Some(middle), Some(Tile::victory(2, 0))]],
            (0, 0),
        )
    }

    #[test]
    fn walking_to_victory_wins() {
        let mut world = corridor(Tile::empty(1, 0));
        let mut player = Player::new(&world);
        let mut input = ScriptedInput::new(["e", "E"]);
        let mut view = View::captured();

        let outcome = run_repl(&mut world, &mut player, &mut input, &mut view).unwrap();
        assert_eq!(outcome, GameOutcome::Victory);
        assert!(player.victory);
        assert!(view.contains(ViewItem::is_victory_reached));
    }

    #[test]
    fn unavailable_action_is_rejected() {
        let mut world = corridor(Tile::empty(1, 0));
        let mut player = Player::new(&world);
        // north leads nowhere from the start tile
        let mut input = ScriptedInput::new(["n", "q"]);
        let mut view = View::captured();

        let outcome = run_repl(&mut world, &mut player, &mut input, &mut view).unwrap();
        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!((player.x, player.y), (0, 0));
        assert!(view.contains(ViewItem::is_invalid_choice));
    }

    #[test]
    fn enemy_strikes_every_turn_it_lives() {
        let mut world = corridor(Tile::enemy_with(1, 0, Enemy::new(EnemyKind::GiantSpider)));
        let mut player = Player::new(&world);
        let mut input = ScriptedInput::new(["e", "a", "a", "e"]);
        let mut view = View::captured();

        let outcome = run_repl(&mut world, &mut player, &mut input, &mut view).unwrap();
        assert_eq!(outcome, GameOutcome::Victory);
        // hit on arrival and after the first (non-lethal) attack
        assert_eq!(player.hp, 96);
        assert!(view.contains(ViewItem::is_enemy_killed));
    }

    #[test]
    fn running_out_of_health_is_defeat() {
        let mut world = corridor(Tile::enemy_with(1, 0, Enemy::new(EnemyKind::RockMonster)));
        let mut player = Player::new(&world);
        player.hp = 15;
        let mut input = ScriptedInput::new(["e"]);
        let mut view = View::captured();

        let outcome = run_repl(&mut world, &mut player, &mut input, &mut view).unwrap();
        assert_eq!(outcome, GameOutcome::Defeat);
        assert!(!player.is_alive());
        assert!(view.contains(ViewItem::is_player_died));
    }

    #[test]
    fn end_of_input_quits() {
        let mut world = corridor(Tile::empty(1, 0));
        let mut player = Player::new(&world);
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut view = View::captured();
        assert_eq!(
            run_repl(&mut world, &mut player, &mut input, &mut view).unwrap(),
            GameOutcome::Quit
        );
    }

    #[test]
    fn off_map_position_narrates_nothing_here() {
        let mut world = corridor(Tile::empty(1, 0));
        let mut player = Player::new(&world);
        player.y = 3;
        let mut view = View::captured();
        enter_tile(&mut world, &mut player, &mut view);
        assert_eq!(view.items, vec![ViewItem::TileIntro(NOTHING_HERE_TEXT.to_string())]);
        assert_eq!(player.hp, 100);
    }
}
