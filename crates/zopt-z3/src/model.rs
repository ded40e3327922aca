//! Owned Z3 models.
#![allow(unsafe_code)]

use crate::ast::Ast;
use crate::context::Context;
use crate::ffi::engine_string;
use std::fmt;
use std::ptr;
use tracing::debug;
use z3_sys::{
    Z3_ast, Z3_model, Z3_model_dec_ref, Z3_model_eval, Z3_model_get_num_consts, Z3_model_inc_ref,
    Z3_model_to_string,
};
use zopt_solver::SolverError;

/// A model returned by a check, holding its own native reference.
///
/// A model borrows only the context, so it stays valid after the optimize
/// instance that produced it has been released.
pub struct Model<'ctx> {
    ctx: &'ctx Context,
    raw: Z3_model,
}

impl<'ctx> Model<'ctx> {
    /// Take a new reference to a model returned by the engine.
    ///
    /// Engine getters do not retain their result, so the reference is taken
    /// here unconditionally.
    pub(crate) fn wrap(
        ctx: &'ctx Context,
        raw: Z3_model,
        operation: &'static str,
    ) -> Result<Self, SolverError> {
        if raw.is_null() {
            return Err(ctx.null_handle(operation));
        }
        unsafe { Z3_model_inc_ref(ctx.raw(), raw) };
        debug!(
            component = "model",
            operation,
            status = "success",
            "Acquired model reference"
        );
        Ok(Model { ctx, raw })
    }

    /// Evaluate `term` in this model.
    ///
    /// With `model_completion` set, constants the model leaves unconstrained
    /// are assigned a default value instead of being returned unevaluated.
    /// Returns `None` if the engine cannot evaluate the term.
    pub fn eval(&self, term: &Ast<'ctx>, model_completion: bool) -> Option<Ast<'ctx>> {
        let mut value: Z3_ast = ptr::null_mut();
        let ok = unsafe {
            Z3_model_eval(
                self.ctx.raw(),
                self.raw,
                term.raw(),
                model_completion,
                &raw mut value,
            )
        };
        if !ok {
            self.ctx.check_error("model_eval");
            return None;
        }
        Ast::wrap(self.ctx, value, "model_eval").ok()
    }

    /// Number of constants the model interprets.
    pub fn num_consts(&self) -> u32 {
        unsafe { Z3_model_get_num_consts(self.ctx.raw(), self.raw) }
    }
}

impl Drop for Model<'_> {
    fn drop(&mut self) {
        unsafe { Z3_model_dec_ref(self.ctx.raw(), self.raw) };
        debug!(
            component = "model",
            operation = "release",
            status = "success",
            "Released model reference"
        );
    }
}

impl fmt::Display for Model<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = unsafe { engine_string(Z3_model_to_string(self.ctx.raw(), self.raw)) };
        f.write_str(text.as_deref().unwrap_or("<invalid>"))
    }
}

impl fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("num_consts", &self.num_consts())
            .finish_non_exhaustive()
    }
}
