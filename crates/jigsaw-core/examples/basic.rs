//! Basic example of using the puzzle engine.

use jigsaw_core::{Difficulty, Generator, GeneratorConfig, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let difficulty = Difficulty::new(3).expect("level 3 is in range");

    println!("Generating a {} jigsaw puzzle...\n", difficulty);
    let mut generator = Generator::new(GeneratorConfig::jigsaw(difficulty));
    let generated = match generator.generate() {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("generation failed: {}", err);
            return;
        }
    };

    println!("Puzzle ({} clues):", generated.puzzle.clue_count());
    print!("{}", generated.puzzle);
    println!();
    println!("Solution:");
    print!("{}", generated.solution);

    let solver = Solver::new();
    println!(
        "\nCompletions found with cutoff 2: {}",
        solver.count_solutions(&generated.puzzle, &generated.regions, 2)
    );

    let mut rng = StdRng::seed_from_u64(1);
    if let Some(resolved) = solver.solve(&generated.puzzle, &generated.regions, &mut rng) {
        println!(
            "Re-solved grid matches the stored solution: {}",
            resolved == generated.solution
        );
    }
}
