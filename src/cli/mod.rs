pub mod commands;
pub mod init;
pub mod nutrition;
pub mod plan;
pub mod recipe;

pub use commands::*;

use crate::error::MealplanError;
use crate::output;

/// Turn a command result into an exit code, reporting the error on the way.
pub(crate) fn finish(result: Result<i32, MealplanError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "command failed");
            output::report_error(&e, json_output);
            1
        }
    }
}
