//! Unit tests for the task query module.
