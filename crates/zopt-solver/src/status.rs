//! Check result types.

/// Tri-state outcome of a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatResult {
    /// The assertions are satisfiable; a model is available.
    Sat,
    /// The hard assertions are unsatisfiable.
    Unsat,
    /// The engine could not decide (resource limit, incomplete theory, ...).
    Unknown,
}

impl SatResult {
    /// Check if the result is satisfiable.
    pub fn is_sat(self) -> bool {
        matches!(self, SatResult::Sat)
    }

    /// Check if the result is unsatisfiable.
    pub fn is_unsat(self) -> bool {
        matches!(self, SatResult::Unsat)
    }

    /// Check if the engine gave up without an answer.
    pub fn is_unknown(self) -> bool {
        matches!(self, SatResult::Unknown)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SatResult::Sat => "sat",
            SatResult::Unsat => "unsat",
            SatResult::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
