//! Terms and symbols.
//!
//! Only the constructors needed to state integer and boolean constraints are
//! bound here. Every term owns one native reference for its whole lifetime.
#![allow(unsafe_code)]

use crate::context::Context;
use crate::ffi::engine_string;
use crate::marshal::with_c_str;
use std::fmt;
use std::os::raw::{c_int, c_uint};
use tracing::trace;
use z3_sys::{
    Z3_ast, Z3_ast_to_string, Z3_context, Z3_dec_ref, Z3_get_numeral_int64, Z3_inc_ref,
    Z3_is_numeral_ast, Z3_mk_and, Z3_mk_bool_sort, Z3_mk_const, Z3_mk_eq, Z3_mk_ge, Z3_mk_gt,
    Z3_mk_int_sort, Z3_mk_int_symbol, Z3_mk_int64, Z3_mk_le, Z3_mk_lt, Z3_mk_not,
    Z3_mk_string_symbol, Z3_symbol,
};
use zopt_solver::SolverError;

type BinaryOp = unsafe extern "C" fn(Z3_context, Z3_ast, Z3_ast) -> Z3_ast;

/// A Z3 symbol, used to name constants and soft-constraint groups.
///
/// Symbols are interned by the engine and not reference counted, so the
/// wrapper is `Copy`.
#[derive(Clone, Copy)]
pub struct Symbol<'ctx> {
    ctx: &'ctx Context,
    raw: Z3_symbol,
}

impl<'ctx> Symbol<'ctx> {
    /// Create a string symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` contains a NUL byte or the engine returns
    /// a null symbol.
    pub fn named(ctx: &'ctx Context, name: &str) -> Result<Self, SolverError> {
        let raw = with_c_str("mk_string_symbol", name, |name_ptr| unsafe {
            Z3_mk_string_symbol(ctx.raw(), name_ptr)
        })?;
        Self::wrap(ctx, raw, "mk_string_symbol")
    }

    /// Create an integer symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine returns a null symbol.
    pub fn numbered(ctx: &'ctx Context, number: i32) -> Result<Self, SolverError> {
        let raw = unsafe { Z3_mk_int_symbol(ctx.raw(), number as c_int) };
        Self::wrap(ctx, raw, "mk_int_symbol")
    }

    fn wrap(
        ctx: &'ctx Context,
        raw: Z3_symbol,
        operation: &'static str,
    ) -> Result<Self, SolverError> {
        if raw.is_null() {
            return Err(ctx.null_handle(operation));
        }
        Ok(Symbol { ctx, raw })
    }

    pub(crate) fn raw(&self) -> Z3_symbol {
        self.raw
    }
}

impl fmt::Debug for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("ctx", &self.ctx.raw())
            .field("raw", &self.raw)
            .finish()
    }
}

/// An owned reference to a Z3 term.
///
/// Cloning takes another native reference; dropping releases one.
pub struct Ast<'ctx> {
    ctx: &'ctx Context,
    raw: Z3_ast,
}

impl<'ctx> Ast<'ctx> {
    /// Take a reference to a term freshly returned by the engine.
    pub(crate) fn wrap(
        ctx: &'ctx Context,
        raw: Z3_ast,
        operation: &'static str,
    ) -> Result<Self, SolverError> {
        if raw.is_null() {
            return Err(ctx.null_handle(operation));
        }
        unsafe { Z3_inc_ref(ctx.raw(), raw) };
        trace!(
            component = "ast",
            operation,
            status = "success",
            "Wrapped term"
        );
        Ok(Ast { ctx, raw })
    }

    /// Declare an integer constant.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` contains a NUL byte or the engine rejects
    /// the declaration.
    pub fn int_const(ctx: &'ctx Context, name: &str) -> Result<Self, SolverError> {
        let symbol = Symbol::named(ctx, name)?;
        let raw = unsafe { Z3_mk_const(ctx.raw(), symbol.raw(), Z3_mk_int_sort(ctx.raw())) };
        Self::wrap(ctx, raw, "mk_const")
    }

    /// Declare a boolean constant.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` contains a NUL byte or the engine rejects
    /// the declaration.
    pub fn bool_const(ctx: &'ctx Context, name: &str) -> Result<Self, SolverError> {
        let symbol = Symbol::named(ctx, name)?;
        let raw = unsafe { Z3_mk_const(ctx.raw(), symbol.raw(), Z3_mk_bool_sort(ctx.raw())) };
        Self::wrap(ctx, raw, "mk_const")
    }

    /// Integer numeral.
    pub fn int(ctx: &'ctx Context, value: i64) -> Result<Self, SolverError> {
        let raw = unsafe { Z3_mk_int64(ctx.raw(), value, Z3_mk_int_sort(ctx.raw())) };
        Self::wrap(ctx, raw, "mk_int64")
    }

    /// `self > other`
    pub fn gt(&self, other: &Ast<'ctx>) -> Result<Self, SolverError> {
        self.binary(other, Z3_mk_gt, "mk_gt")
    }

    /// `self < other`
    pub fn lt(&self, other: &Ast<'ctx>) -> Result<Self, SolverError> {
        self.binary(other, Z3_mk_lt, "mk_lt")
    }

    /// `self >= other`
    pub fn ge(&self, other: &Ast<'ctx>) -> Result<Self, SolverError> {
        self.binary(other, Z3_mk_ge, "mk_ge")
    }

    /// `self <= other`
    pub fn le(&self, other: &Ast<'ctx>) -> Result<Self, SolverError> {
        self.binary(other, Z3_mk_le, "mk_le")
    }

    /// `self == other`
    pub fn eq(&self, other: &Ast<'ctx>) -> Result<Self, SolverError> {
        self.binary(other, Z3_mk_eq, "mk_eq")
    }

    /// Boolean negation.
    pub fn not(&self) -> Result<Self, SolverError> {
        let raw = unsafe { Z3_mk_not(self.ctx.raw(), self.raw) };
        Self::wrap(self.ctx, raw, "mk_not")
    }

    /// Conjunction of `terms`. An empty slice yields `true`.
    pub fn and(ctx: &'ctx Context, terms: &[&Ast<'ctx>]) -> Result<Self, SolverError> {
        let raws: Vec<Z3_ast> = terms.iter().map(|term| term.raw).collect();
        let raw = unsafe { Z3_mk_and(ctx.raw(), raws.len() as c_uint, raws.as_ptr()) };
        Self::wrap(ctx, raw, "mk_and")
    }

    /// Read an integer numeral that fits in `i64`.
    ///
    /// Returns `None` for terms that are not numerals or do not fit.
    pub fn as_i64(&self) -> Option<i64> {
        if !unsafe { Z3_is_numeral_ast(self.ctx.raw(), self.raw) } {
            return None;
        }
        let mut value: i64 = 0;
        let ok = unsafe { Z3_get_numeral_int64(self.ctx.raw(), self.raw, &raw mut value) };
        ok.then_some(value)
    }

    pub(crate) fn raw(&self) -> Z3_ast {
        self.raw
    }

    fn binary(
        &self,
        other: &Ast<'ctx>,
        op: BinaryOp,
        operation: &'static str,
    ) -> Result<Self, SolverError> {
        let raw = unsafe { op(self.ctx.raw(), self.raw, other.raw) };
        Self::wrap(self.ctx, raw, operation)
    }
}

impl Clone for Ast<'_> {
    fn clone(&self) -> Self {
        unsafe { Z3_inc_ref(self.ctx.raw(), self.raw) };
        Ast {
            ctx: self.ctx,
            raw: self.raw,
        }
    }
}

impl Drop for Ast<'_> {
    fn drop(&mut self) {
        unsafe { Z3_dec_ref(self.ctx.raw(), self.raw) };
    }
}

impl fmt::Display for Ast<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = unsafe { engine_string(Z3_ast_to_string(self.ctx.raw(), self.raw)) };
        f.write_str(text.as_deref().unwrap_or("<invalid>"))
    }
}

impl fmt::Debug for Ast<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ast").field(&self.to_string()).finish()
    }
}
