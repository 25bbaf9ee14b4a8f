//! Engine constants and runtime configuration defaults

/// Letters eligible for placement and filler cells
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Placement policy
/// Placement attempts per word before the word is dropped
pub const PLACEMENT_ATTEMPTS: usize = 150;

/// Reshuffle rounds attempted by the strict placement strategy
pub const STRICT_ROUNDS: usize = 20;

/// Minimum accepted word length after normalization
pub const MIN_WORD_LEN: usize = 2;

/// Default cap on word length before the grid-ratio bound applies
pub const DEFAULT_MAX_WORD_LEN: usize = 15;

// Words longer than this fraction of the grid edge rarely place cleanly
/// Word length bound as a fraction of grid size (numerator, denominator)
pub const SIZE_RATIO: (usize, usize) = (3, 5);

// Grid size bounds are policy, not structural limits
/// Smallest accepted grid edge
pub const MIN_GRID_SIZE: usize = 5;
/// Largest accepted grid edge
pub const MAX_GRID_SIZE: usize = 30;
/// Grid edge used when neither the caller nor the theme supplies one
pub const DEFAULT_GRID_SIZE: usize = 15;

// Difficulty labels derived from grid size at the persistence boundary
/// Largest grid edge still labeled easy
pub const EASY_SIZE_CEILING: usize = 10;
/// Largest grid edge still labeled medium
pub const MEDIUM_SIZE_CEILING: usize = 15;

// Storage layout
/// Directory used by the primary store when none is configured
pub const DEFAULT_STORE_ROOT: &str = "puzzles";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
