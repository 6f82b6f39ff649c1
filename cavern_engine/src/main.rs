#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Cavern **
//! A short crawl through a dark cave

use cavern_engine::repl::input::InputManager;
use cavern_engine::style::GameStyle;
use cavern_engine::{GameOutcome, Player, View, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading cave...");
    let mut world = load_world().context("while loading world")?;
    info!("World loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    println!("{:^60}", "ESCAPE FROM CAVE TERROR".bright_yellow().underline());
    println!(
        "{}\n",
        "Find your way out of the cave. Gold, a merchant and worse wait in the dark.".description_style()
    );

    let mut player = Player::new(&world);
    let mut input = InputManager::new().context("while setting up terminal input")?;
    let mut view = View::new();
    let outcome = run_repl(&mut world, &mut player, &mut input, &mut view)?;
    info!("game over: {outcome:?}");
    if outcome == GameOutcome::Victory {
        println!("\nYou escaped with {} gold.", player.gold.to_string().gold_style());
    }
    Ok(())
}
