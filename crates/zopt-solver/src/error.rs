//! Binding error types.

/// Error type for engine binding operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The engine returned a null handle where an object was expected.
    NullHandle {
        /// The binding operation that received the null handle.
        operation: &'static str,
        /// Engine error message recorded for the failed call, if any.
        message: Option<String>,
    },
    /// A string argument contains a NUL byte and cannot cross the C boundary.
    InteriorNul {
        /// The binding operation whose argument was rejected.
        operation: &'static str,
        /// Byte offset of the first NUL.
        position: usize,
    },
    /// The engine recorded an error code for a forwarded call.
    Engine {
        /// The binding operation that observed the error.
        operation: &'static str,
        /// Engine error code name.
        code: String,
        /// Engine error message.
        message: String,
    },
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::NullHandle { .. } => "HANDLE_NULL",
            SolverError::InteriorNul { .. } => "STRING_INTERIOR_NUL",
            SolverError::Engine { .. } => "ENGINE_ERROR",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::NullHandle { operation, message } => match message {
                Some(message) => write!(
                    f,
                    "[{}] {} returned a null handle: {}",
                    self.code(),
                    operation,
                    message
                ),
                None => write!(f, "[{}] {} returned a null handle", self.code(), operation),
            },
            SolverError::InteriorNul {
                operation,
                position,
            } => write!(
                f,
                "[{}] {} argument contains a NUL byte at offset {}",
                self.code(),
                operation,
                position
            ),
            SolverError::Engine {
                operation,
                code,
                message,
            } => write!(
                f,
                "[{}] {} failed with {}: {}",
                self.code(),
                operation,
                code,
                message
            ),
        }
    }
}

impl std::error::Error for SolverError {}
