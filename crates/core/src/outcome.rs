//! Per-statement outcome classification and run counters.

/// Error substrings that mark a statement as already applied.
pub const TOLERATED_MARKERS: [&str; 2] = ["does not exist", "already exists"];

/// Result of executing one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded.
    Ok,
    /// The remote call failed with an existence conflict; counted as success.
    Tolerated,
    /// Any other failure.
    Failed,
}

/// Classify a remote error message.
pub fn classify(message: &str) -> Outcome {
    if TOLERATED_MARKERS.iter().any(|m| message.contains(m)) {
        Outcome::Tolerated
    } else {
        Outcome::Failed
    }
}

/// Counters for a deployment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploySummary {
    pub success: usize,
    pub failed: usize,
}

impl DeploySummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Ok | Outcome::Tolerated => self.success += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Statements attempted so far.
    pub fn attempted(&self) -> usize {
        self.success + self.failed
    }
}
