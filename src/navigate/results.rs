//! Result types for navigate operations

/// Result of a print-working-directory query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwdResult {
    pub path: String,
}

/// Result of a change-directory operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwdResult {
    pub path: String,
    pub changed: bool,
}
