//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the key-value storage backends the location list is persisted to.

pub mod storage;
