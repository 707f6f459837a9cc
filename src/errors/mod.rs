//! Error types for the parser.
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of parse failure
//! - Error names and suggestions for diagnostic display

pub mod errors;
