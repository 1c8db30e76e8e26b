//! Generation engine for box and jigsaw sudoku puzzles.
//!
//! The engine covers three coupled pieces of work: randomized growth of
//! irregular region partitions, synthesis of a full valid grid by randomized
//! backtracking, and reduction of that grid to a puzzle whose unique
//! solvability is re-proven after every tentative clue removal. It is
//! parameterized over the grid size and the region layout, so the classic
//! 6x6 box variant and the 9x9 jigsaw variant run through the same code.
//!
//! The engine performs no I/O and no logging. Rendering, file handling, and
//! argument parsing live in the `jigsaw-cli` crate, which consumes the
//! [`GeneratedPuzzle`] this crate hands back.
//!
//! ```
//! use jigsaw_core::{Difficulty, Generator, GeneratorConfig};
//!
//! let difficulty = Difficulty::new(1).unwrap();
//! let mut generator = Generator::with_seed(GeneratorConfig::mini(difficulty), 7);
//! let generated = generator.generate().unwrap();
//! assert_eq!(generated.puzzle.empty_count(), difficulty.mini_empty_cells());
//! ```

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod grid;
pub mod region;
pub mod solver;

pub use difficulty::Difficulty;
pub use error::{Error, Result};
pub use generator::{reduce_to_puzzle, GeneratedPuzzle, Generator, GeneratorConfig, RegionLayout};
pub use grid::{Grid, Position, SymbolSet};
pub use region::{generate_regions, BoxShape, IrregularConfig, RegionMap};
pub use solver::{is_valid_solution, legal_symbols, Solver};
