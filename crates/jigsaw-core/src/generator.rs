//! Puzzle generation: clue reduction plus the full pipeline that strings
//! region map, solution synthesis, and reduction together.

use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};
use crate::region::{generate_regions, BoxShape, IrregularConfig, RegionMap};
use crate::solver::Solver;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How the grid is partitioned into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionLayout {
    /// The canonical axis-aligned box tiling.
    Boxes(BoxShape),
    /// Randomly grown contiguous regions, validated against the canonical
    /// tiling so growth cannot silently reproduce it.
    Irregular {
        canonical: BoxShape,
        growth: IrregularConfig,
    },
}

/// Configuration for one generation pipeline.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub size: usize,
    pub layout: RegionLayout,
    pub difficulty: Difficulty,
    /// Clue count the reducer drives toward. An attempt whose reduction
    /// cannot reach it is discarded whole and the pipeline retried.
    pub target_clues: usize,
    /// Full-pipeline retry budget.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// The 6x6 variant with 2x3 boxes; difficulty maps to empty cells.
    pub fn mini(difficulty: Difficulty) -> Self {
        Self {
            size: 6,
            layout: RegionLayout::Boxes(BoxShape::new(2, 3)),
            difficulty,
            target_clues: 36 - difficulty.mini_empty_cells(),
            max_attempts: 100,
        }
    }

    /// The 9x9 jigsaw variant with irregular regions; difficulty maps to
    /// remaining clues.
    pub fn jigsaw(difficulty: Difficulty) -> Self {
        Self {
            size: 9,
            layout: RegionLayout::Irregular {
                canonical: BoxShape::new(3, 3),
                growth: IrregularConfig::default(),
            },
            difficulty,
            target_clues: difficulty.jigsaw_clues(),
            max_attempts: 100,
        }
    }
}

/// A finished puzzle together with everything the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Grid,
    /// The full grid the puzzle was carved from. Reduction never modifies
    /// it, and the puzzle's unique completion equals it.
    pub solution: Grid,
    pub regions: RegionMap,
    pub difficulty: Difficulty,
}

/// Carve a puzzle out of `solution` by clearing cells in random order.
///
/// Each cell is visited at most once. A removal survives only if the grid
/// still has exactly one completion (counting cutoff 2); otherwise the clue
/// is restored on the spot. Stops once `target_clues` remain or the visit
/// order is exhausted, so the result is best-effort: the clue count never
/// drops below `target_clues` but may end above it. The returned puzzle is
/// an independent grid; `solution` is left untouched.
pub fn reduce_to_puzzle<R: Rng>(
    solution: &Grid,
    regions: &RegionMap,
    target_clues: usize,
    rng: &mut R,
) -> Grid {
    let solver = Solver::new();
    let mut puzzle = solution.clone();
    let mut clues = puzzle.clue_count();

    let mut order: Vec<Position> = puzzle.positions().collect();
    order.shuffle(rng);

    for pos in order {
        if clues <= target_clues {
            break;
        }
        let saved = puzzle.get(pos);
        if saved == 0 {
            continue;
        }
        puzzle.clear(pos);
        if solver.count_solutions(&puzzle, regions, 2) == 1 {
            clues -= 1;
        } else {
            puzzle.set(pos, saved);
        }
    }
    puzzle
}

/// Drives the whole pipeline: region map, full solution, reduction.
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible pipeline for a fixed seed.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one puzzle. Attempts whose reduction falls short of the
    /// target clue count are discarded whole; after `max_attempts` of those
    /// the budget is spent and `GenerationExhausted` is reported.
    pub fn generate(&mut self) -> Result<GeneratedPuzzle> {
        let solver = Solver::new();
        for _ in 0..self.config.max_attempts {
            let regions = match self.config.layout {
                RegionLayout::Boxes(shape) => RegionMap::boxes(self.config.size, shape),
                RegionLayout::Irregular { canonical, growth } => {
                    match generate_regions(self.config.size, canonical, &growth, &mut self.rng) {
                        Ok(map) => map,
                        Err(_) => continue,
                    }
                }
            };
            let solution = match solver.synthesize(&regions, &mut self.rng) {
                Ok(grid) => grid,
                Err(_) => continue,
            };
            let puzzle =
                reduce_to_puzzle(&solution, &regions, self.config.target_clues, &mut self.rng);
            if puzzle.clue_count() != self.config.target_clues {
                continue;
            }
            return Ok(GeneratedPuzzle {
                puzzle,
                solution,
                regions,
                difficulty: self.config.difficulty,
            });
        }
        Err(Error::GenerationExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::is_valid_solution;

    const SOLVED_6X6: &str = "123456456123231564564231312645645312";

    #[test]
    fn test_reduce_keeps_a_unique_subset() {
        let regions = RegionMap::boxes(6, BoxShape::new(2, 3));
        let solution = Grid::from_string(6, SOLVED_6X6).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let puzzle = reduce_to_puzzle(&solution, &regions, 30, &mut rng);

        assert!(puzzle.clue_count() >= 30);
        for pos in puzzle.positions() {
            let clue = puzzle.get(pos);
            assert!(clue == 0 || clue == solution.get(pos));
        }
        let solver = Solver::new();
        assert!(solver.has_unique_solution(&puzzle, &regions));
        // the solution grid is untouched
        assert!(solution.is_complete());
    }

    #[test]
    fn test_reduce_with_full_target_removes_nothing() {
        let regions = RegionMap::boxes(6, BoxShape::new(2, 3));
        let solution = Grid::from_string(6, SOLVED_6X6).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let puzzle = reduce_to_puzzle(&solution, &regions, 36, &mut rng);
        assert_eq!(puzzle, solution);
    }

    #[test]
    fn test_generate_mini_level_one() {
        let difficulty = Difficulty::new(1).unwrap();
        let mut generator = Generator::with_seed(GeneratorConfig::mini(difficulty), 42);
        let generated = generator.generate().unwrap();

        assert_eq!(generated.puzzle.empty_count(), difficulty.mini_empty_cells());
        assert!(is_valid_solution(&generated.solution, &generated.regions));

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&generated.puzzle, &generated.regions));
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let config = GeneratorConfig::mini(Difficulty::new(2).unwrap());
        let first = Generator::with_seed(config, 9).generate().unwrap();
        let second = Generator::with_seed(config, 9).generate().unwrap();
        assert_eq!(first, second);
    }
}
