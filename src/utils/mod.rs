//! # Utilities
//!
//! - [`constant`] - Configuration defaults
//! - [`form`] - Request field extractor

pub mod constant;
pub mod form;
