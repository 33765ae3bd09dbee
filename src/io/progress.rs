//! Step progress for multi-asset generation

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Assets: [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many output files of a run have been written
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display with no steps yet
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STEP_STYLE.clone());
        Self { bar }
    }

    /// Create a progress display that never draws, for tests and piped output
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Set the number of files the run will write
    pub fn initialize(&self, total_steps: usize) {
        self.bar.set_length(total_steps as u64);
        self.bar.set_position(0);
    }

    /// Record one written file
    pub fn complete_step(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
        self.bar.inc(1);
    }

    /// Number of steps recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total steps announced by [`Self::initialize`]
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or_default()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
