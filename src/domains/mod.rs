//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool dispatcher and every tool definition
//! - **resources**: read-only documentation and server information

pub mod resources;
pub mod tools;
