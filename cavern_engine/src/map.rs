//! Map grammar parser.
//!
//! A map is plain text: one line per row, cells delimited by `|`, each cell a
//! two-character tile code or two spaces for "no tile here". For example:
//!
//! ```text
//! |VT|EN|FG|
//! |  |ST|TT|
//! ```
//!
//! The whole description is validated before any tile is built, so a
//! malformed map never yields a partial [`World`].

use log::info;
use rand::Rng;
use thiserror::Error;

use crate::tile::Tile;
use crate::world::World;

/// Separator between cells within a row.
pub const CELL_SEPARATOR: char = '|';

/// The built-in cave, eight rows of six cells.
pub const DEFAULT_MAP: &str = "
|VT|EN|FG|EN|EN|ET|
|EN|  |  |  |EN|FG|
|EN|FG|EN|  |  |EN|
|TT|EN|FG|FG|EN|FG|
|FG|  |EN|  |ET|EN|
|EN|EN|FG|EN|EN|FG|
|FG|  |EN|  |ST|EN|
|ET|EN|FG|EN|ET|FG|
";

/// Structural problems that make a map unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMapError {
    #[error("map contains no rows")]
    Empty,
    #[error("map must contain exactly one start tile (ST), found {0}")]
    StartCount(usize),
    #[error("map must contain at least one victory tile (VT)")]
    NoVictory,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown tile code '{code}' at ({x}, {y})")]
    UnknownCode { code: String, x: usize, y: usize },
}

/// Tile codes understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileCode {
    Start,
    Victory,
    Enemy,
    FindGold,
    Empty,
    Trader,
    Vacant,
}

impl TileCode {
    fn lookup(code: &str) -> Option<TileCode> {
        match code {
            "ST" => Some(TileCode::Start),
            "VT" => Some(TileCode::Victory),
            "EN" => Some(TileCode::Enemy),
            "FG" => Some(TileCode::FindGold),
            "ET" => Some(TileCode::Empty),
            "TT" => Some(TileCode::Trader),
            "  " => Some(TileCode::Vacant),
            _ => None,
        }
    }

    fn build(self, x: i32, y: i32, rng: &mut impl Rng) -> Option<Tile> {
        match self {
            TileCode::Start => Some(Tile::start(x, y)),
            TileCode::Victory => Some(Tile::victory(x, y)),
            TileCode::Enemy => Some(Tile::spawn_enemy(x, y, rng)),
            TileCode::FindGold => Some(Tile::find_gold(x, y, rng)),
            TileCode::Empty => Some(Tile::empty(x, y)),
            TileCode::Trader => Some(Tile::trading_post(x, y)),
            TileCode::Vacant => None,
        }
    }
}

/// Split a map description into rows of raw cell codes, skipping empty lines.
///
/// Lines are not trimmed: two spaces are a cell of their own, even at the
/// edge of a row written without outer separators.
fn tokenize(dsl: &str) -> Vec<Vec<&str>> {
    dsl.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(CELL_SEPARATOR).filter(|cell| !cell.is_empty()).collect())
        .collect()
}

/// Check the structural rules: one start, at least one victory, equal row widths.
///
/// # Errors
/// Returns the first [`InvalidMapError`] found.
pub fn validate(dsl: &str) -> Result<(), InvalidMapError> {
    validate_rows(&tokenize(dsl))
}

fn validate_rows(rows: &[Vec<&str>]) -> Result<(), InvalidMapError> {
    let Some(first) = rows.first() else {
        return Err(InvalidMapError::Empty);
    };
    let cells = || rows.iter().flatten();

    let starts = cells().filter(|cell| **cell == "ST").count();
    if starts != 1 {
        return Err(InvalidMapError::StartCount(starts));
    }
    if !cells().any(|cell| *cell == "VT") {
        return Err(InvalidMapError::NoVictory);
    }
    let expected = first.len();
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != expected)
    {
        return Err(InvalidMapError::RaggedRow { row, expected, found });
    }
    Ok(())
}

/// Parse a map description into a [`World`], drawing enemies and gold from `rng`.
///
/// # Errors
/// Returns [`InvalidMapError`] if the map breaks a structural rule or uses an
/// unknown tile code.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn parse_world(dsl: &str, rng: &mut impl Rng) -> Result<World, InvalidMapError> {
    let rows = tokenize(dsl);
    validate_rows(&rows)?;

    let mut spawn = (0, 0);
    let mut grid = Vec::with_capacity(rows.len());
    for (y, cells) in rows.iter().enumerate() {
        let mut row = Vec::with_capacity(cells.len());
        for (x, cell) in cells.iter().enumerate() {
            let code = TileCode::lookup(cell).ok_or_else(|| InvalidMapError::UnknownCode {
                code: (*cell).to_string(),
                x,
                y,
            })?;
            let (tx, ty) = (x as i32, y as i32);
            if code == TileCode::Start {
                spawn = (tx, ty);
            }
            row.push(code.build(tx, ty, rng));
        }
        grid.push(row);
    }
    info!("parsed map with {} rows, spawn at {spawn:?}", grid.len());
    Ok(World::from_rows(grid, spawn))
}

/// Parse a map description using the thread-local random number generator.
///
/// # Errors
/// See [`parse_world`].
pub fn parse_world_default(dsl: &str) -> Result<World, InvalidMapError> {
    parse_world(dsl, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse(dsl: &str) -> Result<World, InvalidMapError> {
        parse_world(dsl, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn default_map_parses() {
        let world = parse(DEFAULT_MAP).expect("built-in map is valid");
        assert_eq!(world.height(), 8);
        assert_eq!(world.width(), 6);
        assert_eq!(world.spawn(), (4, 6));
        assert!(matches!(world.tile_at(0, 0).map(|t| &t.kind), Some(TileKind::Victory)));
        assert!(matches!(world.tile_at(0, 3).map(|t| &t.kind), Some(TileKind::Trader(_))));
        assert!(world.tile_at(1, 1).is_none());
    }

    #[test]
    fn tiles_carry_their_grid_coordinates() {
        let world = parse(DEFAULT_MAP).expect("built-in map is valid");
        for tile in world.tiles() {
            assert_eq!(world.tile_at(tile.x, tile.y), Some(tile));
        }
    }

    #[test]
    fn zero_start_tiles_is_invalid() {
        assert_eq!(parse("|VT|ET|\n|EN|FG|").unwrap_err(), InvalidMapError::StartCount(0));
    }

    #[test]
    fn two_start_tiles_is_invalid() {
        assert_eq!(parse("|VT|ST|\n|ST|FG|").unwrap_err(), InvalidMapError::StartCount(2));
    }

    #[test]
    fn missing_victory_is_invalid() {
        assert_eq!(parse("|ST|ET|\n|EN|FG|").unwrap_err(), InvalidMapError::NoVictory);
    }

    #[test]
    fn unequal_rows_are_invalid() {
        assert_eq!(
            parse("|ST|ET|\n|EN|FG|VT|").unwrap_err(),
            InvalidMapError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn unknown_code_is_invalid() {
        assert_eq!(
            parse("|ST|XX|\n|VT|FG|").unwrap_err(),
            InvalidMapError::UnknownCode {
                code: "XX".into(),
                x: 1,
                y: 0
            }
        );
    }

    #[test]
    fn blank_input_is_invalid() {
        assert_eq!(parse("\n\n\n").unwrap_err(), InvalidMapError::Empty);
    }

    #[test]
    fn whitespace_only_line_is_a_row() {
        assert_eq!(
            parse("|ST|VT|\n   \n").unwrap_err(),
            InvalidMapError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn vacant_cells_at_unbracketed_row_edges() {
        let world = parse("ST|VT\n  |ET").expect("valid map");
        assert_eq!(world.width(), 2);
        assert!(world.tile_at(0, 1).is_none());
        assert!(matches!(world.tile_at(1, 1).map(|t| &t.kind), Some(TileKind::Empty)));

        let world = parse("ST|VT\nET|  ").expect("valid map");
        assert!(matches!(world.tile_at(0, 1).map(|t| &t.kind), Some(TileKind::Empty)));
        assert!(world.tile_at(1, 1).is_none());
    }

    #[test]
    fn vacant_cells_and_blank_lines() {
        let world = parse("\n|ST|  |\n\n|  |VT|\n").expect("valid map");
        assert_eq!(world.height(), 2);
        assert!(world.tile_at(1, 0).is_none());
        assert!(world.tile_at(0, 1).is_none());
        assert_eq!(world.tile_count(), 2);
    }

    #[test]
    fn validate_alone_builds_nothing() {
        assert!(validate(DEFAULT_MAP).is_ok());
        assert_eq!(validate("|ST|"), Err(InvalidMapError::NoVictory));
    }

    #[test]
    fn random_gold_stays_in_range() {
        let world = parse(DEFAULT_MAP).expect("built-in map is valid");
        for tile in world.tiles() {
            if let TileKind::FindGold { gold, claimed } = tile.kind {
                assert!((1..=50).contains(&gold));
                assert!(!claimed);
            }
        }
    }
}
