//! Step definitions for task query behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
