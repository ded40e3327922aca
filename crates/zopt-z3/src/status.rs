//! Conversions between Z3's lifted booleans and check results.

use tracing::warn;
use z3_sys::{Z3_L_FALSE, Z3_L_TRUE, Z3_L_UNDEF, Z3_lbool};
use zopt_solver::SatResult;

pub(crate) fn lbool_to_result(value: Z3_lbool) -> SatResult {
    match value {
        Z3_L_TRUE => SatResult::Sat,
        Z3_L_FALSE => SatResult::Unsat,
        Z3_L_UNDEF => SatResult::Unknown,
        other => {
            warn!(
                component = "optimize",
                operation = "check",
                status = "unknown",
                value = other,
                "Unexpected lifted boolean from Z3"
            );
            SatResult::Unknown
        }
    }
}
