//! Region maps: the partition of the grid into same-size contiguous groups.
//!
//! A region plays the same role as a box in classic sudoku: its cells must
//! carry pairwise distinct symbols. The canonical axis-aligned tiling is a
//! closed-form function of the cell coordinates; irregular partitions are
//! grown by randomized multi-source growth with rejection sampling.

use crate::error::{Error, Result};
use crate::grid::Position;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dimensions of one box in the canonical axis-aligned tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxShape {
    pub rows: usize,
    pub cols: usize,
}

impl BoxShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Region id of `pos` in the canonical tiling of a `size`x`size` grid.
    pub fn id_of(self, size: usize, pos: Position) -> u8 {
        ((pos.row / self.rows) * (size / self.cols) + pos.col / self.cols) as u8
    }
}

/// Assigns each cell a region id in `[0, size)`.
///
/// Invariants, enforced by every constructor: each id claims exactly `size`
/// cells, and the cells of one region form a single 4-connected group. The
/// per-region member lists are precomputed here once so the solver can scan a
/// region in O(size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMap {
    size: usize,
    ids: Vec<u8>,
    members: Vec<Vec<Position>>,
}

impl RegionMap {
    /// The canonical axis-aligned box tiling.
    pub fn boxes(size: usize, shape: BoxShape) -> Self {
        assert_eq!(shape.rows * shape.cols, size, "one box per symbol");
        assert!(
            size % shape.rows == 0 && size % shape.cols == 0,
            "boxes must tile the grid"
        );
        let mut ids = Vec::with_capacity(size * size);
        let mut members = vec![Vec::with_capacity(size); size];
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                let id = shape.id_of(size, pos);
                ids.push(id);
                members[id as usize].push(pos);
            }
        }
        Self { size, ids, members }
    }

    /// Build a map from row-major region ids, validating the region
    /// invariants. Returns `None` when an id is out of range, a region has
    /// the wrong cell count, or a region is not 4-connected.
    pub fn from_ids(size: usize, ids: Vec<u8>) -> Option<Self> {
        if ids.len() != size * size {
            return None;
        }
        let mut members = vec![Vec::with_capacity(size); size];
        for (i, &id) in ids.iter().enumerate() {
            if id as usize >= size {
                return None;
            }
            members[id as usize].push(Position::new(i / size, i % size));
        }
        if members.iter().any(|cells| cells.len() != size) {
            return None;
        }
        let map = Self { size, ids, members };
        if (0..size).all(|id| map.region_is_connected(id as u8)) {
            Some(map)
        } else {
            None
        }
    }

    fn region_is_connected(&self, id: u8) -> bool {
        let cells = &self.members[id as usize];
        let mut seen = vec![false; self.size * self.size];
        let mut stack = vec![cells[0]];
        seen[cells[0].row * self.size + cells[0].col] = true;
        let mut reached = 0;
        while let Some(pos) = stack.pop() {
            reached += 1;
            for neighbor in pos.neighbors(self.size) {
                let idx = neighbor.row * self.size + neighbor.col;
                if !seen[idx] && self.ids[idx] == id {
                    seen[idx] = true;
                    stack.push(neighbor);
                }
            }
        }
        reached == cells.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of regions; always equal to the grid size.
    pub fn region_count(&self) -> usize {
        self.size
    }

    pub fn region_of(&self, pos: Position) -> u8 {
        self.ids[pos.row * self.size + pos.col]
    }

    /// The cells of one region, precomputed at construction.
    pub fn region_cells(&self, id: u8) -> &[Position] {
        &self.members[id as usize]
    }

    /// Whether this map is cell-for-cell the canonical box tiling.
    pub fn matches_boxes(&self, shape: BoxShape) -> bool {
        self.members
            .iter()
            .enumerate()
            .all(|(id, cells)| {
                cells
                    .iter()
                    .all(|&pos| shape.id_of(self.size, pos) == id as u8)
            })
    }

    /// How many regions occupy cells from more than one canonical box.
    pub fn cross_box_regions(&self, shape: BoxShape) -> usize {
        self.members
            .iter()
            .filter(|cells| {
                let first = shape.id_of(self.size, cells[0]);
                cells.iter().any(|&pos| shape.id_of(self.size, pos) != first)
            })
            .count()
    }
}

/// Tuning for randomized irregular region growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularConfig {
    /// Minimum number of regions that must span more than one canonical box.
    pub min_cross_regions: usize,
    /// Attempt budget before giving up with `GenerationExhausted`.
    pub max_restarts: usize,
}

impl Default for IrregularConfig {
    fn default() -> Self {
        Self {
            min_cross_regions: 4,
            max_restarts: 300,
        }
    }
}

/// Grow `size` irregular contiguous regions of `size` cells each.
///
/// Seeds one random cell per region, then claims frontier cells sweep by
/// sweep, always serving the currently smallest regions first so no region
/// starves. An attempt is abandoned whole when a region is sealed off short
/// of full size, or when the finished map fails validation against the
/// `canonical` tiling (it must differ from it, and at least
/// `min_cross_regions` regions must span more than one canonical box).
/// Growth restarts from fresh seeds rather than patching a bad partial
/// partition; after `max_restarts` abandoned attempts the budget is spent.
pub fn generate_regions<R: Rng>(
    size: usize,
    canonical: BoxShape,
    config: &IrregularConfig,
    rng: &mut R,
) -> Result<RegionMap> {
    let mut all_cells: Vec<Position> = (0..size)
        .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
        .collect();

    'attempt: for _ in 0..config.max_restarts {
        all_cells.shuffle(rng);
        let mut owner: Vec<Option<u8>> = vec![None; size * size];
        let mut members: Vec<Vec<Position>> = vec![Vec::with_capacity(size); size];
        for (id, &seed) in all_cells[..size].iter().enumerate() {
            owner[seed.row * size + seed.col] = Some(id as u8);
            members[id].push(seed);
        }

        while members.iter().any(|cells| cells.len() < size) {
            // Smallest regions claim first; the stable sort keeps the
            // shuffled order among regions of equal size.
            let mut order: Vec<usize> = (0..size).collect();
            order.shuffle(rng);
            order.sort_by_key(|&id| members[id].len());

            for id in order {
                if members[id].len() >= size {
                    continue;
                }
                let frontier = region_frontier(size, &members[id], &owner);
                if frontier.is_empty() {
                    // Sealed off short of full size; the attempt is dead.
                    continue 'attempt;
                }
                let claimed = best_frontier_cell(size, &frontier, &owner, rng);
                owner[claimed.row * size + claimed.col] = Some(id as u8);
                members[id].push(claimed);
            }
        }

        let mut ids = vec![0u8; size * size];
        for (id, cells) in members.iter().enumerate() {
            for &pos in cells {
                ids[pos.row * size + pos.col] = id as u8;
            }
        }
        let map = match RegionMap::from_ids(size, ids) {
            Some(map) => map,
            None => continue,
        };
        if map.matches_boxes(canonical)
            || map.cross_box_regions(canonical) < config.min_cross_regions
        {
            continue;
        }
        return Ok(map);
    }

    Err(Error::GenerationExhausted)
}

/// Unclaimed 4-neighbors of a region's cells, without duplicates.
fn region_frontier(size: usize, cells: &[Position], owner: &[Option<u8>]) -> Vec<Position> {
    let mut seen = vec![false; size * size];
    let mut frontier = Vec::new();
    for &pos in cells {
        for neighbor in pos.neighbors(size) {
            let idx = neighbor.row * size + neighbor.col;
            if owner[idx].is_none() && !seen[idx] {
                seen[idx] = true;
                frontier.push(neighbor);
            }
        }
    }
    frontier
}

/// The frontier cell with the most unclaimed neighbors; ties break at random.
fn best_frontier_cell<R: Rng>(
    size: usize,
    frontier: &[Position],
    owner: &[Option<u8>],
    rng: &mut R,
) -> Position {
    let open_neighbors = |pos: Position| {
        pos.neighbors(size)
            .filter(|n| owner[n.row * size + n.col].is_none())
            .count()
    };
    let best = frontier.iter().map(|&pos| open_neighbors(pos)).max().unwrap_or(0);
    let tied: Vec<Position> = frontier
        .iter()
        .copied()
        .filter(|&pos| open_neighbors(pos) == best)
        .collect();
    tied.choose(rng).copied().unwrap_or(frontier[0])
}
