//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dispatch_gateway;
pub mod history_repository;
pub mod interaction_logger;
pub mod progress;
