use std::io::{self, Write};

use crate::train::iteration_stats::IterationStats;

/// Formats the running status line for one iteration.
pub fn format_status(stats: &IterationStats) -> String {
    format!(
        "Iter:{} Loss:{} Synthetic Loss:{}",
        stats.iteration, stats.loss, stats.synthetic_loss
    )
}

/// Writes the status line to stdout in place, overwriting via `\r`, and
/// commits it with a newline after every `newline_every`-th iteration.
pub struct ConsoleReporter {
    newline_every: usize,
    dangling: bool,
}

impl ConsoleReporter {
    pub fn new(newline_every: usize) -> ConsoleReporter {
        assert!(newline_every > 0, "newline_every must be at least 1");
        ConsoleReporter {
            newline_every,
            dangling: false,
        }
    }

    pub fn update(&mut self, stats: &IterationStats) {
        print!("\r{}", format_status(stats));
        let _ = io::stdout().flush();

        if (stats.iteration + 1) % self.newline_every == 0 {
            println!();
            self.dangling = false;
        } else {
            self.dangling = true;
        }
    }

    /// Terminates a dangling status line, for runs whose length is not a
    /// multiple of `newline_every`.
    pub fn finish(&mut self) {
        if self.dangling {
            println!();
            self.dangling = false;
        }
    }
}
