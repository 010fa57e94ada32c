//! Terminal progress display for a generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static CANVAS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cards: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks canvases produced during a run
///
/// Advisory lines are printed above the bar so they do not tear it.
pub struct ProgressManager {
    bar: ProgressBar,
    saved: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no work registered yet
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            saved: Vec::new(),
        }
    }

    /// Show a bar for `canvas_count` canvases
    pub fn initialize(&mut self, canvas_count: usize) {
        let bar = ProgressBar::new(canvas_count as u64);
        bar.set_style(CANVAS_STYLE.clone());
        self.bar = bar;
        self.saved.clear();
    }

    /// Report that canvas `index` (zero-based) is being composed
    pub fn start_canvas(&self, index: usize) {
        self.bar
            .set_message(format!("Producing bingo card #{}...", index + 1));
    }

    /// Whether the bar draws nothing, e.g. before `initialize` or when
    /// stderr is not a terminal
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Report that a canvas was written to `path`
    ///
    /// The "Saving" line goes above the bar, or straight to stderr when the
    /// bar is hidden.
    // Allow print for the advisory line when there is no bar to print through
    #[allow(clippy::print_stderr)]
    pub fn complete_canvas(&mut self, path: &Path) {
        let display = path.display().to_string();
        if self.is_hidden() {
            eprintln!("Saving {display}");
        } else {
            self.bar.println(format!("Saving {display}"));
        }
        self.bar.inc(1);
        self.saved.push(display);
    }

    /// Paths reported as saved since the last `initialize`
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    /// Complete the bar with a summary message
    pub fn finish(&self) {
        let count = self.saved.len();
        self.bar
            .finish_with_message(format!("{count} file(s) written"));
    }
}
