//! Owning wrapper around a reference-counted Z3 context.
#![allow(unsafe_code)]

use crate::ffi::engine_string;
use crate::marshal::with_c_str;
use std::fmt;
use tracing::{debug, trace, warn};
use z3_sys::{
    ErrorCode, Z3_context, Z3_del_config, Z3_del_context, Z3_get_error_code, Z3_get_error_msg,
    Z3_mk_config, Z3_mk_context_rc, Z3_set_error_handler, Z3_set_param_value,
};
use zopt_solver::{ContextConfig, SolverError};

/// A Z3 context created in reference-counted mode.
///
/// Every handle created from a context borrows it, so the context outlives
/// all of them. Dropping the context deletes it; it does not release
/// handles on their behalf.
///
/// The engine's default error handler terminates the process. It is removed
/// on creation, so failed calls only record an error code that
/// [`Context::last_error`] reports.
pub struct Context {
    raw: Z3_context,
}

impl Context {
    /// Create a context from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration entry cannot be marshalled or the
    /// engine fails to allocate the configuration or the context.
    pub fn new(config: &ContextConfig) -> Result<Self, SolverError> {
        let raw_config = unsafe { Z3_mk_config() };
        if raw_config.is_null() {
            warn!(
                component = "context",
                operation = "mk_config",
                status = "error",
                "Z3 returned a null configuration"
            );
            return Err(SolverError::NullHandle {
                operation: "mk_config",
                message: None,
            });
        }

        for (key, value) in config.entries() {
            trace!(
                component = "context",
                operation = "set_param_value",
                status = "success",
                key = key.as_str(),
                value = value.as_str(),
                "Applying context parameter"
            );
            let applied = with_c_str("set_param_value", &key, |key_ptr| {
                with_c_str("set_param_value", &value, |value_ptr| unsafe {
                    Z3_set_param_value(raw_config, key_ptr, value_ptr)
                })
            });
            if let Err(err) = applied.and_then(|inner| inner) {
                unsafe { Z3_del_config(raw_config) };
                return Err(err);
            }
        }

        let raw = unsafe { Z3_mk_context_rc(raw_config) };
        unsafe { Z3_del_config(raw_config) };
        if raw.is_null() {
            warn!(
                component = "context",
                operation = "mk_context_rc",
                status = "error",
                "Z3 returned a null context"
            );
            return Err(SolverError::NullHandle {
                operation: "mk_context_rc",
                message: None,
            });
        }
        unsafe { Z3_set_error_handler(raw, None) };

        debug!(
            component = "context",
            operation = "create",
            status = "success",
            params = config.entries().len(),
            "Created Z3 context"
        );
        Ok(Context { raw })
    }

    /// Raw context handle for FFI calls.
    pub(crate) fn raw(&self) -> Z3_context {
        self.raw
    }

    /// Error recorded by the most recent engine call on this context.
    ///
    /// Z3 resets the error slot at the start of most calls, so this reflects
    /// the last forwarded operation only.
    pub fn last_error(&self) -> Option<SolverError> {
        self.engine_error("last_error")
    }

    /// Log and return the engine error left by `operation`, if any.
    pub(crate) fn check_error(&self, operation: &'static str) -> Option<SolverError> {
        let err = self.engine_error(operation)?;
        warn!(
            component = "context",
            operation,
            status = "error",
            error = %err,
            "Z3 recorded an error"
        );
        Some(err)
    }

    /// Build the error for a null handle returned by `operation`.
    pub(crate) fn null_handle(&self, operation: &'static str) -> SolverError {
        let message = self.engine_error(operation).and_then(|err| match err {
            SolverError::Engine { message, .. } => Some(message),
            _ => None,
        });
        warn!(
            component = "context",
            operation,
            status = "error",
            message = message.as_deref().unwrap_or(""),
            "Z3 returned a null handle"
        );
        SolverError::NullHandle { operation, message }
    }

    fn engine_error(&self, operation: &'static str) -> Option<SolverError> {
        let code = unsafe { Z3_get_error_code(self.raw) };
        if code == ErrorCode::OK {
            return None;
        }
        let message = unsafe { engine_string(Z3_get_error_msg(self.raw, code)) }
            .unwrap_or_else(|| "no message".to_string());
        Some(SolverError::Engine {
            operation,
            code: format!("{code:?}"),
            message,
        })
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { Z3_del_context(self.raw) };
        debug!(
            component = "context",
            operation = "release",
            status = "success",
            "Deleted Z3 context"
        );
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("raw", &self.raw).finish()
    }
}
