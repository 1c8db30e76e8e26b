//! Command-line generator: produces puzzle/solution SVG sheet pairs and
//! prints the boards to the console. All I/O lives here; the engine crate
//! only computes.

mod svg;

use clap::{Parser, ValueEnum};
use jigsaw_core::{Difficulty, GeneratedPuzzle, Generator, GeneratorConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_LENGTH: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "jigsaw", about = "Generate box or jigsaw sudoku sheets as SVG.")]
struct Cli {
    /// Puzzle variant to generate.
    #[arg(short, long, value_enum, default_value_t = Variant::Jigsaw)]
    variant: Variant,

    /// Difficulty level, 1 (really easy) to 6 (devilish).
    #[arg(short, long, default_value_t = 3)]
    difficulty: u8,

    /// Number of puzzles to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Output directory for the SVG files.
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Print puzzles as JSON to stdout instead of writing SVG files.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// 6x6 grid with 2x3 boxes.
    Mini,
    /// 9x9 grid with irregular regions.
    Jigsaw,
}

impl Variant {
    fn config(self, difficulty: Difficulty) -> GeneratorConfig {
        match self {
            Variant::Mini => GeneratorConfig::mini(difficulty),
            Variant::Jigsaw => GeneratorConfig::jigsaw(difficulty),
        }
    }

    fn file_prefix(self) -> &'static str {
        match self {
            Variant::Mini => "sudoku6x6",
            Variant::Jigsaw => "jigsaw",
        }
    }
}

/// JSON document emitted by `--json`.
#[derive(Debug, Serialize)]
struct PuzzleDocument<'a> {
    id: &'a str,
    #[serde(flatten)]
    generated: &'a GeneratedPuzzle,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let difficulty = Difficulty::new(cli.difficulty)?;
    let mut id_rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !cli.json {
        fs::create_dir_all(&cli.output)?;
    }

    for n in 0..cli.count {
        let config = cli.variant.config(difficulty);
        let mut generator = match cli.seed {
            Some(seed) => Generator::with_seed(config, seed.wrapping_add(n as u64)),
            None => Generator::new(config),
        };

        let started = Instant::now();
        let generated = generator.generate()?;
        log::info!(
            "generated {} puzzle {}/{} in {:.2?}",
            difficulty.name(),
            n + 1,
            cli.count,
            started.elapsed()
        );

        let puzzle_id = new_puzzle_id(&mut id_rng);
        if cli.json {
            let document = PuzzleDocument {
                id: &puzzle_id,
                generated: &generated,
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
            continue;
        }

        println!("Puzzle ID: {}", puzzle_id);
        print!("{}", generated.puzzle);
        println!();
        println!("Solution for ID: {}", puzzle_id);
        print!("{}", generated.solution);
        println!();

        let puzzle_path = sheet_path(&cli.output, cli.variant, difficulty, &puzzle_id, "puzzle");
        let solution_path =
            sheet_path(&cli.output, cli.variant, difficulty, &puzzle_id, "solution");
        fs::write(
            &puzzle_path,
            svg::render(&generated.puzzle, &generated.regions, difficulty, &puzzle_id),
        )?;
        fs::write(
            &solution_path,
            svg::render(&generated.solution, &generated.regions, difficulty, &puzzle_id),
        )?;
        println!(
            "Generated: {} and {}",
            puzzle_path.display(),
            solution_path.display()
        );
    }

    Ok(())
}

fn sheet_path(
    dir: &Path,
    variant: Variant,
    difficulty: Difficulty,
    puzzle_id: &str,
    kind: &str,
) -> PathBuf {
    dir.join(format!(
        "{}-{}-{}-{}.svg",
        variant.file_prefix(),
        difficulty.level(),
        puzzle_id,
        kind
    ))
}

/// An 8-character uppercase alphanumeric identifier, generated outside the
/// engine so naming schemes can change without touching it.
fn new_puzzle_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_id_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let id = new_puzzle_id(&mut rng);
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_puzzle_ids_vary() {
        let mut rng = StdRng::seed_from_u64(0);
        let first = new_puzzle_id(&mut rng);
        let second = new_puzzle_id(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_sheet_path_layout() {
        let difficulty = Difficulty::new(4).unwrap();
        let path = sheet_path(
            Path::new("out"),
            Variant::Jigsaw,
            difficulty,
            "A1B2C3D4",
            "puzzle",
        );
        assert_eq!(path, PathBuf::from("out/jigsaw-4-A1B2C3D4-puzzle.svg"));
    }
}
