//! Taskboard: per-user task-tracking query service.
//!
//! This crate provides the read side of a multi-user task tracker: an
//! authenticated owner retrieves either a filtered collection of their own
//! tasks or a single task by identifier. A user can never see another
//! user's tasks; every store lookup is scoped by owner.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Owner-scoped task retrieval and filtering

pub mod task;
