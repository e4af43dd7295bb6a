//! Input validation utilities
//!
//! Provides input validation and sanitization functions.

/// Validate that a command line is not empty and doesn't contain control characters
pub fn is_valid_input(input: &str) -> bool {
    !input.trim().is_empty()
        && !input.contains('\0')
        && !input.trim_end_matches(['\r', '\n']).contains(['\r', '\n'])
}

/// Strip the line terminator; file content keeps any other whitespace
pub fn sanitize_input(input: &str) -> String {
    input.trim_end_matches(['\r', '\n']).to_string()
}
