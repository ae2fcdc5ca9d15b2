//! Reference shortest-path distance by fixed-point relaxation.
//!
//! Slow (`O((rows·cols)²)` worst case) but shares no code with the queue
//! based search, so agreement between the two means something.

use maze_kernel::grid::{Cell, Grid, Position};

/// Number of moves on a shortest Start→End route, or `None` if End is
/// unreachable or an endpoint is missing.
#[must_use]
pub fn shortest_distance(grid: &Grid) -> Option<usize> {
    let (start, end) = (grid.start()?, grid.end()?);
    let (rows, cols) = (grid.rows(), grid.cols());
    let open = |r: usize, c: usize| {
        grid.cell_at(Position::new(r, c))
            .is_ok_and(|cell| cell != Cell::Wall)
    };

    let mut dist: Vec<Vec<Option<usize>>> = vec![vec![None; cols]; rows];
    dist[start.row][start.col] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for r in 0..rows {
            for c in 0..cols {
                if !open(r, c) {
                    continue;
                }
                let mut best = dist[r][c];
                let neighbours = [
                    r.checked_sub(1).map(|nr| (nr, c)),
                    (r + 1 < rows).then_some((r + 1, c)),
                    c.checked_sub(1).map(|nc| (r, nc)),
                    (c + 1 < cols).then_some((r, c + 1)),
                ];
                for (nr, nc) in neighbours.into_iter().flatten() {
                    if let Some(d) = dist[nr][nc] {
                        if best.is_none() || Some(d + 1) < best {
                            best = Some(d + 1);
                        }
                    }
                }
                if best != dist[r][c] {
                    dist[r][c] = best;
                    changed = true;
                }
            }
        }
    }
    dist[end.row][end.col]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_three_by_three() {
        let grid = Grid::from_ascii(crate::OPEN_3X3).unwrap();
        assert_eq!(shortest_distance(&grid), Some(4));
    }

    #[test]
    fn enclosed_is_unreachable() {
        let grid = Grid::from_ascii(crate::ENCLOSED).unwrap();
        assert_eq!(shortest_distance(&grid), None);
    }
}
