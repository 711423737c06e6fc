

/// Booth multiplication.
pub mod booth;
