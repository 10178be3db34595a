use crate::error::DisplayError;
use std::io;

/// Helper functions for standardizing terminal error conversions.
/// Convert output IO errors to DisplayError
pub fn convert_io_to_display_error(error: io::Error, operation: &str) -> DisplayError {
    DisplayError::TerminalOutput(format!("{}: {}", operation, error))
}

/// Convert input IO errors to DisplayError
pub fn convert_input_error(error: io::Error, operation: &str) -> DisplayError {
    DisplayError::TerminalInput(format!("{}: {}", operation, error))
}

/// Helper macro for display errors
#[macro_export]
macro_rules! map_display_error {
    ($result:expr, $operation:expr) => {
        $result
            .map_err(|e| $crate::utils::error_helpers::convert_io_to_display_error(e, $operation))
    };
}

/// Helper macro for terminal input errors
#[macro_export]
macro_rules! map_input_error {
    ($result:expr, $operation:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_input_error(e, $operation))
    };
}
