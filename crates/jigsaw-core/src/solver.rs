//! Constraint checking and exhaustive search over partial grids.
//!
//! One backtracking skeleton serves two modes: construction (find one full
//! solution, shuffled candidate order so repeated runs produce varied grids)
//! and counting (count completions up to a cutoff, the uniqueness test the
//! reducer leans on). Both branch on the empty cell with the fewest legal
//! symbols; with irregular regions a naive scan order is infeasibly slow.

use crate::error::{Error, Result};
use crate::grid::{Grid, Position, SymbolSet};
use crate::region::RegionMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// Symbols that may legally be placed at `pos`: those not already present in
/// its row, its column, or its region. Filled cells get the empty set; check
/// `grid.get(pos) == 0` before branching on the result.
pub fn legal_symbols(grid: &Grid, regions: &RegionMap, pos: Position) -> SymbolSet {
    if grid.get(pos) != 0 {
        return SymbolSet::empty();
    }
    let size = grid.size();
    let mut set = SymbolSet::full(size);
    for i in 0..size {
        let in_row = grid.get(Position::new(pos.row, i));
        if in_row != 0 {
            set.remove(in_row);
        }
        let in_col = grid.get(Position::new(i, pos.col));
        if in_col != 0 {
            set.remove(in_col);
        }
    }
    for &cell in regions.region_cells(regions.region_of(pos)) {
        let in_region = grid.get(cell);
        if in_region != 0 {
            set.remove(in_region);
        }
    }
    set
}

/// Whether a fully assigned grid carries every symbol exactly once in every
/// row, column, and region.
pub fn is_valid_solution(grid: &Grid, regions: &RegionMap) -> bool {
    if !grid.is_complete() {
        return false;
    }
    let size = grid.size();
    let full = SymbolSet::full(size);
    for i in 0..size {
        let mut row_seen = SymbolSet::empty();
        let mut col_seen = SymbolSet::empty();
        let mut region_seen = SymbolSet::empty();
        for j in 0..size {
            row_seen.insert(grid.get(Position::new(i, j)));
            col_seen.insert(grid.get(Position::new(j, i)));
            region_seen.insert(grid.get(regions.region_cells(i as u8)[j]));
        }
        if row_seen != full || col_seen != full || region_seen != full {
            return false;
        }
    }
    true
}

/// Exhaustive backtracking search driven by [`legal_symbols`].
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Construction mode: fill every empty cell of `grid`, returning the
    /// completed copy, or `None` when no completion exists from this state.
    /// The input grid is never modified.
    pub fn solve<R: Rng>(&self, grid: &Grid, regions: &RegionMap, rng: &mut R) -> Option<Grid> {
        let mut working = grid.clone();
        if Self::solve_recursive(&mut working, regions, rng) {
            Some(working)
        } else {
            None
        }
    }

    /// Construction from an empty grid. A well-formed region map always
    /// admits a full assignment; an error here signals a degenerate map, and
    /// callers recover by generating a fresh one.
    pub fn synthesize<R: Rng>(&self, regions: &RegionMap, rng: &mut R) -> Result<Grid> {
        self.solve(&Grid::empty(regions.size()), regions, rng)
            .ok_or(Error::NoSolutionFound)
    }

    /// Counting mode: the number of distinct completions, capped at `limit`.
    /// Search stops the moment the cap is reached, which is what keeps the
    /// reducer's repeated uniqueness checks affordable.
    pub fn count_solutions(&self, grid: &Grid, regions: &RegionMap, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        Self::count_recursive(&mut working, regions, &mut count, limit);
        count
    }

    /// Exactly one completion, tested with cutoff 2.
    pub fn has_unique_solution(&self, grid: &Grid, regions: &RegionMap) -> bool {
        self.count_solutions(grid, regions, 2) == 1
    }

    /// The empty cell with the fewest legal symbols, or `None` on a complete
    /// grid. A cell with no legal symbols is returned as soon as it is seen:
    /// the current assignment is a dead end and the caller must backtrack.
    fn most_constrained_cell(grid: &Grid, regions: &RegionMap) -> Option<(Position, SymbolSet)> {
        let mut best: Option<(Position, SymbolSet)> = None;
        for pos in grid.positions() {
            if grid.get(pos) != 0 {
                continue;
            }
            let candidates = legal_symbols(grid, regions, pos);
            if candidates.is_empty() {
                return Some((pos, candidates));
            }
            let better = match best {
                Some((_, held)) => candidates.count() < held.count(),
                None => true,
            };
            if better {
                best = Some((pos, candidates));
            }
        }
        best
    }

    fn solve_recursive<R: Rng>(grid: &mut Grid, regions: &RegionMap, rng: &mut R) -> bool {
        let (pos, candidates) = match Self::most_constrained_cell(grid, regions) {
            Some(found) => found,
            None => return true,
        };
        let mut symbols: Vec<u8> = candidates.iter().collect();
        symbols.shuffle(rng);
        for symbol in symbols {
            grid.set(pos, symbol);
            if Self::solve_recursive(grid, regions, rng) {
                return true;
            }
            grid.clear(pos);
        }
        false
    }

    fn count_recursive(grid: &mut Grid, regions: &RegionMap, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }
        let (pos, candidates) = match Self::most_constrained_cell(grid, regions) {
            Some(found) => found,
            None => {
                *count += 1;
                return;
            }
        };
        for symbol in candidates.iter() {
            if *count >= limit {
                break;
            }
            grid.set(pos, symbol);
            Self::count_recursive(grid, regions, count, limit);
            grid.clear(pos);
        }
    }
}
