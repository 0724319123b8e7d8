//! Progress display for the board sweep

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the boards visited by a sweep
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar sized to the number of boards the sweep will visit
    pub fn new(board_count: usize) -> Self {
        let bar = ProgressBar::new(board_count as u64);
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Record one completed board
    pub fn record(&self, height: usize, width: usize, solved: bool) {
        let status = if solved { "tiled" } else { "exhausted" };
        self.bar.set_message(format!("{height}x{width} {status}"));
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
