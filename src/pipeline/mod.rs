//! Pipeline orchestration shared by the CLI handlers.
//!
//! Loading recipes and catalogs with context, choosing an output format and
//! writing the rendered report.

mod load;
mod output;
mod report_stage;

pub use load::{load_catalog, load_recipe_with_context, read_recipe_str};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{log_unresolved, output_profile_reports};

/// Exit codes for scripting and CI use
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Validation failed, or unresolved references under `--strict`
    pub const VALIDATION_FAILED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::VALIDATION_FAILED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
