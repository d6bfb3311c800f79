//! Core functionality for warranty-sync
//!
//! This module contains the reconciliation logic and its collaborators.

pub mod batch;
pub mod cmdb;
pub mod dedup;
pub mod identifier;
pub mod models;
pub mod pipeline;
pub mod reconcile;
pub mod vendors;
