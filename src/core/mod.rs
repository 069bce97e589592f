//! core
//!
//! Core engine, domain types and configuration for gitbind.
//!
//! # Modules
//!
//! - [`args`] - Declarations, positional allocation, constraints, rendering
//! - [`types`] - Strong types: BranchName, Oid
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Declarations are immutable once built and shared freely
//! - Schemas are strict and self-describing
//! - Binding is deterministic: the same call always yields the same tokens

pub mod args;
pub mod config;
pub mod types;
