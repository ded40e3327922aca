//! Owning wrapper around a Z3 optimize instance.
//!
//! An [`Optimize`] accumulates hard and weighted soft constraints, runs the
//! engine's optimizing check and hands out models. The native instance is
//! reference counted: one reference is taken on creation and released exactly
//! once, when the wrapper is closed or dropped.
//!
//! Releasing consumes the wrapper, so calls after release are rejected by the
//! compiler:
//!
//! ```compile_fail
//! use zopt_z3::{Context, ContextConfig, Optimize};
//!
//! let ctx = Context::new(&ContextConfig::new()).unwrap();
//! let mut opt = Optimize::new(&ctx).unwrap();
//! opt.close();
//! opt.check();
//! ```
//!
//! # Preconditions
//!
//! Terms and symbols passed in must come from the same [`Context`] as the
//! optimize instance. This is not checked; mixing contexts is undefined
//! behaviour at the engine level.
#![allow(unsafe_code)]

use crate::ast::{Ast, Symbol};
use crate::context::Context;
use crate::ffi::engine_string;
use crate::marshal::with_c_str;
use crate::model::Model;
use crate::status::lbool_to_result;
use std::fmt;
use std::ptr;
use std::time::Instant;
use tracing::{debug, trace, warn};
use z3_sys::{
    Z3_mk_optimize, Z3_optimize, Z3_optimize_assert, Z3_optimize_assert_soft, Z3_optimize_check,
    Z3_optimize_dec_ref, Z3_optimize_get_model, Z3_optimize_get_reason_unknown,
    Z3_optimize_inc_ref, Z3_optimize_maximize, Z3_optimize_minimize, Z3_optimize_pop,
    Z3_optimize_push, Z3_optimize_to_string,
};
use zopt_solver::{SatResult, SolverError};

/// A Z3 optimize instance bound to a [`Context`].
///
/// Not thread-safe: the wrapper is neither `Send` nor `Sync`, and mutating
/// calls take `&mut self`.
pub struct Optimize<'ctx> {
    ctx: &'ctx Context,
    raw: Z3_optimize,
}

impl<'ctx> Optimize<'ctx> {
    /// Create a new optimize instance.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NullHandle`] if the engine fails to allocate
    /// the instance. There is no retry.
    pub fn new(ctx: &'ctx Context) -> Result<Self, SolverError> {
        let raw = unsafe { Z3_mk_optimize(ctx.raw()) };
        if raw.is_null() {
            return Err(ctx.null_handle("mk_optimize"));
        }
        unsafe { Z3_optimize_inc_ref(ctx.raw(), raw) };
        debug!(
            component = "optimize",
            operation = "create",
            status = "success",
            "Created optimize instance"
        );
        Ok(Optimize { ctx, raw })
    }

    /// Release the native instance.
    ///
    /// Equivalent to dropping the wrapper; provided to make the end of the
    /// instance's life explicit at the call site.
    pub fn close(self) {
        drop(self);
    }

    /// Add a hard constraint.
    pub fn assert(&mut self, constraint: &Ast<'ctx>) {
        trace!(
            component = "optimize",
            operation = "assert",
            status = "success",
            %constraint,
            "Asserting hard constraint"
        );
        unsafe { Z3_optimize_assert(self.ctx.raw(), self.raw, constraint.raw()) };
        self.ctx.check_error("optimize_assert");
    }

    /// Add a soft constraint with a textual `weight` to the group `id`.
    ///
    /// The weight is forwarded as-is; the engine parses it. The temporary C
    /// string holding it is freed as soon as the engine call returns.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InteriorNul`] if `weight` contains a NUL byte.
    /// Nothing is forwarded to the engine in that case.
    pub fn assert_soft(
        &mut self,
        constraint: &Ast<'ctx>,
        weight: &str,
        id: Symbol<'ctx>,
    ) -> Result<(), SolverError> {
        trace!(
            component = "optimize",
            operation = "assert_soft",
            status = "success",
            %constraint,
            weight,
            "Asserting soft constraint"
        );
        with_c_str("assert_soft", weight, |weight_ptr| unsafe {
            Z3_optimize_assert_soft(
                self.ctx.raw(),
                self.raw,
                constraint.raw(),
                weight_ptr,
                id.raw(),
            )
        })?;
        self.ctx.check_error("optimize_assert_soft");
        Ok(())
    }

    /// Add an objective to minimize. Returns the engine's objective index.
    pub fn minimize(&mut self, term: &Ast<'ctx>) -> u32 {
        let index = unsafe { Z3_optimize_minimize(self.ctx.raw(), self.raw, term.raw()) };
        self.ctx.check_error("optimize_minimize");
        index
    }

    /// Add an objective to maximize. Returns the engine's objective index.
    pub fn maximize(&mut self, term: &Ast<'ctx>) -> u32 {
        let index = unsafe { Z3_optimize_maximize(self.ctx.raw(), self.raw, term.raw()) };
        self.ctx.check_error("optimize_maximize");
        index
    }

    /// Open a backtracking scope.
    pub fn push(&mut self) {
        unsafe { Z3_optimize_push(self.ctx.raw(), self.raw) };
        self.ctx.check_error("optimize_push");
    }

    /// Drop every assertion made since the matching [`Optimize::push`].
    pub fn pop(&mut self) {
        unsafe { Z3_optimize_pop(self.ctx.raw(), self.raw) };
        self.ctx.check_error("optimize_pop");
    }

    /// Check the asserted constraints and optimize the objectives.
    ///
    /// No assumptions are passed. The call blocks until the engine answers;
    /// there is no timeout and no way to cancel it from this wrapper.
    pub fn check(&mut self) -> SatResult {
        let start = Instant::now();
        let raw = unsafe { Z3_optimize_check(self.ctx.raw(), self.raw, 0, ptr::null()) };
        let result = lbool_to_result(raw);
        if result.is_unknown() {
            warn!(
                component = "optimize",
                operation = "check",
                status = "unknown",
                reason = %self.reason_unknown(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Check returned unknown"
            );
        } else {
            debug!(
                component = "optimize",
                operation = "check",
                status = "success",
                result = result.as_str(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Check finished"
            );
        }
        result
    }

    /// Model of the most recent check, as a new owned reference.
    ///
    /// Every call takes its own reference, even when it returns the same
    /// native model as an earlier call. The result of the last check is not
    /// inspected; after `unsat` or `unknown` the engine decides what comes
    /// back (typically an empty model).
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NullHandle`] if the engine returns no model
    /// object at all.
    pub fn model(&self) -> Result<Model<'ctx>, SolverError> {
        let raw = unsafe { Z3_optimize_get_model(self.ctx.raw(), self.raw) };
        Model::wrap(self.ctx, raw, "optimize_get_model")
    }

    /// Engine explanation for the last `unknown` result.
    pub fn reason_unknown(&self) -> String {
        unsafe {
            engine_string(Z3_optimize_get_reason_unknown(
                self.ctx.raw(),
                self.raw,
            ))
        }
        .unwrap_or_default()
    }
}

impl Drop for Optimize<'_> {
    fn drop(&mut self) {
        unsafe { Z3_optimize_dec_ref(self.ctx.raw(), self.raw) };
        debug!(
            component = "optimize",
            operation = "release",
            status = "success",
            "Released optimize instance"
        );
    }
}

impl fmt::Display for Optimize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = unsafe { engine_string(Z3_optimize_to_string(self.ctx.raw(), self.raw)) };
        f.write_str(text.as_deref().unwrap_or("<invalid>"))
    }
}

impl fmt::Debug for Optimize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimize")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}
