//! Scoped conversion of Rust strings into C strings.

use std::ffi::CString;
use tracing::warn;
use z3_sys::Z3_string;
use zopt_solver::SolverError;

/// Lend `text` to `call` as a NUL-terminated C string.
///
/// The temporary buffer lives exactly as long as `call` and is freed when it
/// returns or unwinds. The pointer must not escape the closure.
///
/// # Errors
///
/// Returns [`SolverError::InteriorNul`] if `text` contains a NUL byte; `call`
/// is not invoked in that case.
pub(crate) fn with_c_str<R>(
    operation: &'static str,
    text: &str,
    call: impl FnOnce(Z3_string) -> R,
) -> Result<R, SolverError> {
    let buffer = CString::new(text).map_err(|err| {
        warn!(
            component = "marshal",
            operation,
            status = "error",
            position = err.nul_position(),
            "String argument contains an interior NUL byte"
        );
        SolverError::InteriorNul {
            operation,
            position: err.nul_position(),
        }
    })?;
    Ok(call(buffer.as_ptr()))
}
