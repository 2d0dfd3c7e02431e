//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics accumulated during parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the recoverable parse failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
