//! Data structures representing the game world.
//!
//! This module defines [`World`]: the fixed grid of tiles built by the map
//! parser, together with the player's spawn point.

use log::info;

use crate::tile::Tile;

/// The cave. Shape is fixed once built; individual tiles keep their own
/// mutable state (enemy hp, claimed gold, merchant stock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    grid: Vec<Vec<Option<Tile>>>,
    spawn: (i32, i32),
}

impl World {
    /// Assemble a world from already-built rows (`rows[y][x]`).
    ///
    /// Normally called by [`crate::map::parse_world`], which guarantees the
    /// structural invariants (one start tile, at least one victory tile,
    /// equal row widths).
    pub fn from_rows(grid: Vec<Vec<Option<Tile>>>, spawn: (i32, i32)) -> World {
        let world = World { grid, spawn };
        info!(
            "world built: {}x{} grid, {} tiles, spawn at {:?}",
            world.width(),
            world.height(),
            world.tile_count(),
            world.spawn
        );
        world
    }

    /// Coordinates of the unique start tile.
    pub fn spawn(&self) -> (i32, i32) {
        self.spawn
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Look up the tile at (x, y). Off-grid positions and empty cells yield `None`.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.grid.get(y)?.get(x)?.as_ref()
    }

    pub fn tile_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.grid.get_mut(y)?.get_mut(x)?.as_mut()
    }

    /// Iterate over every occupied cell, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.iter().flatten().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> World {
        World::from_rows(
            vec![
                vec![Some(Tile::start(0, 0)), None],
                vec![Some(Tile::empty(0, 1)), Some(Tile::victory(1, 1))],
            ],
            (0, 0),
        )
    }

    #[test]
    fn tile_lookup_uses_x_then_y() {
        let world = small_world();
        assert_eq!(world.tile_at(1, 1), Some(&Tile::victory(1, 1)));
        assert_eq!(world.tile_at(0, 1), Some(&Tile::empty(0, 1)));
    }

    #[test]
    fn out_of_range_and_empty_cells_are_none() {
        let world = small_world();
        assert!(world.tile_at(1, 0).is_none());
        assert!(world.tile_at(-1, 0).is_none());
        assert!(world.tile_at(0, -1).is_none());
        assert!(world.tile_at(2, 0).is_none());
        assert!(world.tile_at(0, 2).is_none());
    }

    #[test]
    fn shape_and_counts() {
        let world = small_world();
        assert_eq!(world.width(), 2);
        assert_eq!(world.height(), 2);
        assert_eq!(world.tile_count(), 3);
        assert_eq!(world.spawn(), (0, 0));
    }
}
