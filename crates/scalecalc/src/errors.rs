//! Error handling and exit codes.

use scalecalc_core::constants::exit_codes;
use scalecalc_core::ScalingError;

/// Map a run failure to the process exit code.
///
/// Invalid workload or flag values exit with [`exit_codes::ERROR_CONFIG`];
/// anything else (I/O, rendering) exits with [`exit_codes::ERROR_GENERIC`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ScalingError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
