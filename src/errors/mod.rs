//! Error types and error handling for the front end.
//!
//! Parse errors are data, not control flow: the parser records an [`errors::Error`]
//! for every defect it finds and keeps going. This module defines:
//!
//! - Error structures with source position information
//! - One variant per defect class (unexpected peek token, missing prefix
//!   handler, malformed integer literal)
//! - Error names and suggestions for diagnostic rendering

pub mod errors;
