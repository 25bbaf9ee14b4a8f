//! Command-line interface for generating, storing, and checking puzzles

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::generator::{GenerationOptions, PlacementStrategy, generate};
use crate::io::catalog::{Catalog, Theme};
use crate::io::configuration::DEFAULT_STORE_ROOT;
use crate::io::error::{PuzzleError, Result, invalid_option};
use crate::io::progress::ProgressManager;
use crate::io::store::{ArtifactStore, StackedStore, StoredPuzzle};
use crate::play;
use crate::spatial::grid::Coord;

#[derive(Parser)]
#[command(name = "gridseek")]
#[command(
    author,
    version,
    about = "Generate and check word-search puzzles from themed word lists"
)]
/// Command-line arguments for the puzzle toolkit
pub struct Cli {
    /// Root directory for the artifact store
    #[arg(long, value_name = "DIR", default_value = DEFAULT_STORE_ROOT, global = true)]
    pub store: PathBuf,

    /// Catalog JSON file extending the built-in themes
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress progress and result output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Toolkit operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate one puzzle from a theme or an explicit word list
    Generate(GenerateArgs),
    /// Generate a puzzle for every catalog theme
    Batch(BatchArgs),
    /// Print a stored puzzle by id
    Show {
        /// Artifact identifier
        id: String,
        /// Also print the solution paths
        #[arg(long)]
        solution: bool,
    },
    /// Check whether a word belongs to a stored puzzle
    Validate {
        /// Artifact identifier
        id: String,
        /// Candidate word as the player submitted it
        word: String,
    },
    /// List the available themes
    Themes,
}

/// Single-puzzle generation options
// Generation naturally exposes several independent boolean toggles
#[allow(clippy::struct_excessive_bools)]
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Theme id supplying the word list
    #[arg(short, long, conflicts_with = "words")]
    pub theme: Option<String>,

    /// Explicit comma-separated word list
    #[arg(short, long, value_delimiter = ',')]
    pub words: Vec<String>,

    /// Grid edge length (defaults from the theme's difficulty)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Random seed for reproducible generation (clock-derived if absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Restrict placement to horizontal and vertical lines
    #[arg(long)]
    pub no_diagonals: bool,

    /// Never store words reversed
    #[arg(long)]
    pub no_reverse: bool,

    /// Fail unless every candidate word places
    #[arg(long)]
    pub strict: bool,
}

/// Batch generation options
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Base seed; each theme adds its catalog index
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid edge length overriding every theme's difficulty default
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Restrict placement to horizontal and vertical lines
    #[arg(long)]
    pub no_diagonals: bool,

    /// Regenerate themes that already have a stored puzzle
    #[arg(long)]
    pub no_skip: bool,
}

/// Orchestrates command execution against the store and catalog
pub struct App {
    cli: Cli,
}

impl App {
    /// Create an application from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns any engine, store, or catalog error raised by the command.
    pub fn run(self) -> Result<()> {
        let store = StackedStore::at_root(&self.cli.store);
        let catalog = load_catalog(self.cli.catalog.as_deref())?;
        let quiet = self.cli.quiet;

        match self.cli.command {
            Command::Generate(args) => generate_command(&store, &catalog, &args, quiet),
            Command::Batch(args) => batch_command(&store, &catalog, &self.cli.store, &args, quiet),
            Command::Show { id, solution } => show_command(&store, &id, solution),
            Command::Validate { id, word } => validate_command(&store, &id, &word),
            Command::Themes => themes_command(&catalog),
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = path {
        catalog.extend(Catalog::from_json_file(path)?);
    }
    Ok(catalog)
}

/// Seed for callers that did not supply one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn resolve_theme<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Theme> {
    catalog
        .get(id)
        .ok_or_else(|| PuzzleError::UnknownTheme { name: id.to_string() })
}

fn generate_command(
    store: &StackedStore,
    catalog: &Catalog,
    args: &GenerateArgs,
    quiet: bool,
) -> Result<()> {
    let (words, theme_tag, default_size) = match &args.theme {
        Some(id) => {
            let theme = resolve_theme(catalog, id)?;
            (
                theme.words.clone(),
                theme.id.clone(),
                theme.difficulty.default_size(),
            )
        }
        None => {
            if args.words.is_empty() {
                return Err(invalid_option(
                    "words",
                    &"<empty>",
                    &"supply --theme or a non-empty --words list",
                ));
            }
            (
                args.words.clone(),
                "custom".to_string(),
                GenerationOptions::default().size,
            )
        }
    };

    let options = GenerationOptions {
        size: args.size.unwrap_or(default_size),
        diagonals: !args.no_diagonals,
        reverse: !args.no_reverse,
        strategy: if args.strict {
            PlacementStrategy::Strict
        } else {
            PlacementStrategy::Greedy
        },
        ..GenerationOptions::default()
    };

    let seed = args.seed.unwrap_or_else(clock_seed);
    let puzzle = generate(&words, &options, seed)?;
    let record = StoredPuzzle::new(puzzle, theme_tag);
    store.save(&record)?;

    if !quiet {
        print_record(&record, false);
    }
    Ok(())
}

fn batch_command(
    store: &StackedStore,
    catalog: &Catalog,
    store_root: &Path,
    args: &BatchArgs,
    quiet: bool,
) -> Result<()> {
    let mut progress = (!quiet).then(ProgressManager::new);

    let themes: Vec<&Theme> = catalog
        .themes()
        .iter()
        .filter(|theme| args.no_skip || !theme_already_stored(store_root, &theme.id))
        .collect();

    if let Some(ref mut pm) = progress {
        pm.initialize(themes.len());
    }

    let base_seed = args.seed.unwrap_or_else(clock_seed);
    for (index, theme) in themes.iter().enumerate() {
        if let Some(ref mut pm) = progress {
            pm.start_theme(index, &theme.name, theme.words.len());
        }

        let options = GenerationOptions {
            size: args.size.unwrap_or_else(|| theme.difficulty.default_size()),
            diagonals: !args.no_diagonals,
            ..GenerationOptions::default()
        };
        let puzzle = generate(&theme.words, &options, base_seed.wrapping_add(index as u64))?;
        let placed = puzzle.words.len();
        store.save(&StoredPuzzle::new(puzzle, theme.id.clone()))?;

        if let Some(ref mut pm) = progress {
            pm.complete_theme(index, placed);
        }
    }

    if let Some(ref pm) = progress {
        pm.finish();
    }
    Ok(())
}

/// Whether the primary store already holds an artifact tagged with the theme
fn theme_already_stored(store_root: &Path, theme_id: &str) -> bool {
    let Ok(entries) = std::fs::read_dir(store_root) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let Ok(text) = std::fs::read_to_string(&path) else {
            continue;
        };
        if serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|value| value.get("theme").and_then(|t| t.as_str().map(String::from)))
            .is_some_and(|tag| tag == theme_id)
        {
            return true;
        }
    }
    false
}

fn show_command(store: &StackedStore, id: &str, solution: bool) -> Result<()> {
    let record = store.load(id)?;
    print_record(&record, solution);
    Ok(())
}

// Validation output is the command's result, printed for the caller
#[allow(clippy::print_stdout)]
fn validate_command(store: &StackedStore, id: &str, word: &str) -> Result<()> {
    let record = store.load(id)?;
    if play::is_placed_word(&record.puzzle, word) {
        println!("'{word}' is in puzzle {id}");
    } else {
        println!("'{word}' is not in puzzle {id}");
    }
    Ok(())
}

// Listing output is the command's result, printed for the caller
#[allow(clippy::print_stdout)]
fn themes_command(catalog: &Catalog) -> Result<()> {
    for theme in catalog.themes() {
        println!(
            "{:<14} {:<14} {:>2} words  {}",
            theme.id,
            theme.name,
            theme.words.len(),
            theme.description
        );
    }
    Ok(())
}

// Puzzle output is the command's result, printed for the caller
#[allow(clippy::print_stdout)]
fn print_record(record: &StoredPuzzle, solution: bool) {
    let puzzle = &record.puzzle;
    println!(
        "puzzle {} ({}x{}, {:?}, theme '{}', seed {})",
        puzzle.id, puzzle.size, puzzle.size, record.difficulty, record.theme, puzzle.seed
    );
    println!();

    for row in &puzzle.grid {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        println!("  {}", spaced.join(" "));
    }
    println!();
    println!("find: {}", puzzle.words.join(", "));

    if solution {
        println!();
        for path in play::solution_paths(puzzle) {
            let (first, last) = endpoints(&path.cells);
            println!(
                "  {:<14} ({},{}) -> ({},{})",
                path.word, first.row, first.col, last.row, last.col
            );
        }
    }
}

/// First and last cell of a non-empty path, origin cell twice when empty
fn endpoints(cells: &[Coord]) -> (Coord, Coord) {
    let first = cells.first().copied().unwrap_or(Coord::new(0, 0));
    let last = cells.last().copied().unwrap_or(first);
    (first, last)
}
