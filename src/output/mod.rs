//! Output formatting and persistence for the versioned stats documents.

pub mod error;
pub mod precision;
pub mod response;
pub mod writer;
