//! Owning Rust wrappers over the Z3 optimize API.
//!
//! Z3 does all constraint solving and optimization; this crate owns native
//! handles, marshals arguments across the C boundary and keeps Z3's
//! reference counts balanced. Each wrapper takes one native reference when it
//! is created and releases it exactly once when dropped.
//!
//! ```no_run
//! use zopt_z3::{Ast, Context, ContextConfig, Optimize, SatResult, Symbol};
//!
//! # fn main() -> Result<(), zopt_z3::SolverError> {
//! let ctx = Context::new(&ContextConfig::new())?;
//! let mut opt = Optimize::new(&ctx)?;
//! let x = Ast::int_const(&ctx, "x")?;
//! opt.assert(&x.gt(&Ast::int(&ctx, 0)?)?);
//! opt.assert_soft(&x.lt(&Ast::int(&ctx, 5)?)?, "1", Symbol::named(&ctx, "g")?)?;
//! if opt.check() == SatResult::Sat {
//!     let model = opt.model()?;
//!     println!("{model}");
//! }
//! opt.close();
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod context;
pub mod ffi;
pub mod logging;
mod marshal;
pub mod model;
pub mod optimize;
mod status;

pub use ast::{Ast, Symbol};
pub use context::Context;
pub use ffi::{estimated_alloc_size, z3_version};
pub use logging::{LoggingError, enable_logging};
pub use model::Model;
pub use optimize::Optimize;
pub use zopt_solver::{ContextConfig, SatResult, SolverError};
