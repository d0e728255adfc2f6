//! Progress display for generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} cells")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over collapsed cells for one generation run
///
/// Quiet mode swaps in a hidden bar so call sites stay unconditional. The
/// position tracks collapsed cells, which can drop back to zero when the
/// solver retries after a contradiction.
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar spanning the grid's total cell count
    pub fn new(total_cells: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total_cells as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Update after one step
    pub fn update(&self, collapsed_cells: usize, message: &str) {
        self.bar.set_position(collapsed_cells as u64);
        self.bar.set_message(message.to_string());
    }

    /// Finish the bar with a terminal message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
