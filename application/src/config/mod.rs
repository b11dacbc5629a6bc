//! Application-level configuration.
//!
//! - [`WorkflowConfig`]: rule-engine knobs shared by the use cases

pub mod workflow;

pub use workflow::WorkflowConfig;
