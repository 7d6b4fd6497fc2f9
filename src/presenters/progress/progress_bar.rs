use std::io::Write;

use crate::controllers::ports::progress_reporter::ProgressReporter;

const DEFAULT_WIDTH: usize = 40;

/// Redraws `prefix |████----| 50.0%` on one terminal line.
pub struct ProgressBar<W: Write> {
    out: W,
    prefix: String,
    width: usize,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self {
            out,
            prefix: prefix.into(),
            width: DEFAULT_WIDTH,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One rendered line, without the carriage return.
#[must_use]
pub fn render_bar(prefix: &str, current: usize, total: usize, width: usize) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        (current as f64 / total as f64).clamp(0.0, 1.0)
    };
    // partial cells stay empty until complete
    let filled = if total == 0 { width } else { current.min(total) * width / total };

    format!(
        "{prefix} |{}{}| {:.1}%",
        "█".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0
    )
}

impl<W: Write> ProgressReporter for ProgressBar<W> {
    fn report(&mut self, current: usize, total: usize) {
        let line = render_bar(&self.prefix, current, total, self.width);
        let ending = if current >= total { "\n" } else { "" };

        // best effort
        let _ = write!(self.out, "\r{line}{ending}").and_then(|()| self.out.flush());
    }
}
