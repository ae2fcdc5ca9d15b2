//! Shared fixtures and oracles for the lock tests.
//!
//! Everything here is deliberately independent of the search engine's
//! internals so the tests compare two separate computations.

#![forbid(unsafe_code)]

pub mod oracle;
pub mod recording;

use maze_kernel::grid::Grid;

/// 3×3, no walls.
pub const OPEN_3X3: &str = "S..\n...\n..E";

/// 3×3, middle row walled except (1,1).
pub const GATE_3X3: &str = "S..\n#.#\n..E";

/// Start boxed in by walls.
pub const ENCLOSED: &str = "S#..\n##..\n...E";

/// A winding 6×8 maze; the shortest route is 15 moves.
pub const WINDING: &str = "\
S.#.....
#.#.###.
..#...#.
.####.#.
......#E
.####...";

/// Parse one of the layouts above.
///
/// # Panics
///
/// Panics if `ascii` is not a valid layout.
#[must_use]
pub fn layout(ascii: &str) -> Grid {
    Grid::from_ascii(ascii).unwrap_or_else(|e| panic!("bad fixture layout: {e}"))
}
