//! # HTTP Request Handlers
//!
//! Translates requests into registry and service calls and renders their
//! results as plain text.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Registration** (`register`) - Mentor and student registration
//! - **Mentors** (`mentors`) - Lookup, listing, assignment and newsletter
//! - **Students** (`students`) - Student listing

mod health_check;
mod mentors;
mod register;
mod students;

pub use health_check::*;
pub use mentors::*;
pub use register::*;
pub use students::*;
