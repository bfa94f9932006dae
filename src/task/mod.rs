//! Owner-scoped task querying for taskboard.
//!
//! This module implements the per-user task retrieval contract: listing a
//! user's tasks through an optional status/search filter and fetching a
//! single task by identifier, with every lookup scoped to the acting user
//! at the store boundary. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
