//! Progress notification port
//!
//! Defines the interface for reporting progress while prompts are
//! dispatched to one or more models.

use promptsmith_domain::CatalogModel;

/// Callback for progress updates during dispatch
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called before any model is contacted
    fn on_dispatch_start(&self, total_models: usize);

    /// Called when one model has answered or failed
    fn on_model_complete(&self, model: &CatalogModel, success: bool);

    /// Called once every model has finished
    fn on_dispatch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_models: usize) {}
    fn on_model_complete(&self, _model: &CatalogModel, _success: bool) {}
    fn on_dispatch_complete(&self) {}
}
