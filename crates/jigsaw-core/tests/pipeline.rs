//! Full-pipeline scenarios for both observed variants.

use jigsaw_core::{
    is_valid_solution, BoxShape, Difficulty, Generator, GeneratorConfig, Solver,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn mini_medium_leaves_twenty_empty_cells() {
    let difficulty = Difficulty::new(3).unwrap();
    let mut generator = Generator::with_seed(GeneratorConfig::mini(difficulty), 1);
    let generated = generator.generate().unwrap();

    assert_eq!(generated.puzzle.empty_count(), 20);
    assert_eq!(generated.puzzle.clue_count(), 16);
    assert!(is_valid_solution(&generated.solution, &generated.regions));
    assert!(generated.regions.matches_boxes(BoxShape::new(2, 3)));

    let solver = Solver::new();
    assert_eq!(
        solver.count_solutions(&generated.puzzle, &generated.regions, 2),
        1
    );
}

#[test]
fn jigsaw_level_one_keeps_forty_five_clues() {
    let difficulty = Difficulty::new(1).unwrap();
    let mut generator = Generator::with_seed(GeneratorConfig::jigsaw(difficulty), 2);
    let generated = generator.generate().unwrap();

    assert_eq!(generated.puzzle.clue_count(), 45);
    assert!(is_valid_solution(&generated.solution, &generated.regions));

    let canonical = BoxShape::new(3, 3);
    assert!(!generated.regions.matches_boxes(canonical));
    assert!(generated.regions.cross_box_regions(canonical) >= 4);
    for id in 0..9 {
        assert_eq!(generated.regions.region_cells(id).len(), 9);
    }

    // The unique completion of the puzzle is the retained solution.
    let solver = Solver::new();
    assert!(solver.has_unique_solution(&generated.puzzle, &generated.regions));
    let mut rng = StdRng::seed_from_u64(99);
    let resolved = solver
        .solve(&generated.puzzle, &generated.regions, &mut rng)
        .unwrap();
    assert_eq!(resolved, generated.solution);
}

// Devilish reduction runs the counting solver against near-minimal grids and
// takes a while; run with `cargo test -- --ignored` when touching the reducer.
#[test]
#[ignore]
fn jigsaw_devilish_keeps_twenty_six_clues() {
    let difficulty = Difficulty::new(6).unwrap();
    let mut generator = Generator::with_seed(GeneratorConfig::jigsaw(difficulty), 3);
    let generated = generator.generate().unwrap();

    assert_eq!(generated.puzzle.clue_count(), 26);
    let solver = Solver::new();
    assert!(solver.has_unique_solution(&generated.puzzle, &generated.regions));
}

#[test]
fn out_of_range_difficulty_is_rejected() {
    assert_eq!(
        Difficulty::new(0),
        Err(jigsaw_core::Error::InvalidDifficulty(0))
    );
    assert_eq!(
        Difficulty::new(7),
        Err(jigsaw_core::Error::InvalidDifficulty(7))
    );
}

#[test]
fn generated_puzzle_serializes_to_json() {
    let difficulty = Difficulty::new(1).unwrap();
    let mut generator = Generator::with_seed(GeneratorConfig::mini(difficulty), 4);
    let generated = generator.generate().unwrap();

    let json = serde_json::to_string(&generated).unwrap();
    let back: jigsaw_core::GeneratedPuzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, generated);
}
