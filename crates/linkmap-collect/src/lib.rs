//! Node and edge collection for graph rendering.
//!
//! This crate turns a `LinkTable` into a format-agnostic contracted graph
//! that renderers (DOT today) can consume.
//!
//! # Module Structure
//!
//! - [`types`]: Core types (FocusSpec, ContractedGraph, NodeRole)
//! - [`contract`]: Folding of unfocused routes and edge deduplication

mod contract;
mod types;

pub use contract::{Contractor, contract};
pub use types::{ContractedGraph, FocusSpec, NodeRole, OVERVIEW_PREFIXES};
