//! Building the `World` the game starts with.
//!
//! A `cave.map` in the data directory replaces the built-in map, so players
//! can design their own caves without recompiling.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::data_paths::data_path;
use crate::map::{DEFAULT_MAP, parse_world_default};
use crate::world::World;

/// Name of the optional map file inside the data directory.
pub const MAP_FILE: &str = "cave.map";

/// Load the world from the data directory's map file, or the built-in map
/// if there is none.
///
/// # Errors
/// Fails if the map file exists but can't be read or is malformed.
pub fn load_world() -> Result<World> {
    let map_path = data_path(MAP_FILE);
    if map_path.is_file() {
        load_world_from(&map_path)
    } else {
        warn!("no map file at {}; using the built-in cave", map_path.display());
        default_world()
    }
}

/// Load and parse a map file.
///
/// # Errors
/// Fails on I/O errors or an invalid map.
pub fn load_world_from(path: &Path) -> Result<World> {
    let dsl = fs::read_to_string(path).with_context(|| format!("while reading map file {}", path.display()))?;
    let world = parse_world_default(&dsl).with_context(|| format!("while parsing map file {}", path.display()))?;
    info!("world loaded from {}", path.display());
    Ok(world)
}

/// Build the world from the built-in map.
///
/// # Errors
/// Only fails if the built-in map itself is invalid.
pub fn default_world() -> Result<World> {
    parse_world_default(DEFAULT_MAP).context("while parsing built-in map")
}
