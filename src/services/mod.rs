//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Matcher** (`matcher`) - Pairs a student with a mentor
//! - **Newsletter** (`newsletter`) - Broadcast to subscribed mentors over a pluggable transport

pub mod matcher;
pub mod newsletter;
