//! Batch-generation progress tracking with automatic batching for large sets

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

/// Coordinates progress display for batch generation runs
///
/// Small batches get one bar per theme; large batches collapse into a
/// single batch bar to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    theme_bars: Vec<ProgressBar>,
    /// Stores (`theme name`, `placed`, `total words`) per theme
    theme_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static THEME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Themes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            theme_bars: Vec::new(),
            theme_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on theme count
    pub fn initialize(&mut self, theme_count: usize) {
        if theme_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(theme_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = theme_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let bar = ProgressBar::new(0);
            bar.set_style(THEME_STYLE.clone());
            self.theme_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a theme about to be generated
    pub fn start_theme(&mut self, index: usize, name: &str, word_count: usize) {
        if index >= self.theme_states.len() {
            self.theme_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.theme_states.get_mut(index) {
            *state = (name.to_string(), 0, word_count);
        }
        self.update_bars();
    }

    /// Mark a theme as generated, recording how many words placed
    pub fn complete_theme(&mut self, index: usize, placed: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.theme_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = placed;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All themes generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update bars to show the last N active themes
    fn update_bars(&self) {
        let mut active = Vec::new();
        for (name, placed, total) in &self.theme_states {
            if !name.is_empty() {
                active.push((name.clone(), *placed, *total));
            }
        }

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, placed, total)) in visible.iter().enumerate() {
            if let Some(bar) = self.theme_bars.get(bar_idx) {
                bar.set_length(*total as u64);
                bar.set_position(*placed as u64);
                bar.set_message(format!("{placed}/{total} words"));
                bar.set_prefix(name.clone());
            }
        }

        for bar_idx in visible.len()..self.theme_bars.len() {
            if let Some(bar) = self.theme_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
