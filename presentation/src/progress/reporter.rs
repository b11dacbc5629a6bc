//! Progress reporting while prompts are dispatched

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use promptsmith_application::ports::progress::ProgressNotifier;
use promptsmith_domain::CatalogModel;
use std::sync::Mutex;
use std::time::Duration;

/// Progress bar over the models of one dispatch
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, total_models: usize) {
        let pb = ProgressBar::new(total_models as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Dispatching");
        pb.set_message("waiting for replies...");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_model_complete(&self, model: &CatalogModel, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), model)
            } else {
                format!("{} {}", "x".red(), model)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Plain line-per-model progress (no terminal control)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, total_models: usize) {
        println!(
            "{} {} ({} models)",
            "->".cyan(),
            "Dispatching".bold(),
            total_models
        );
    }

    fn on_model_complete(&self, model: &CatalogModel, success: bool) {
        if success {
            println!("  {} {}", "v".green(), model);
        } else {
            println!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_dispatch_complete(&self) {
        println!();
    }
}
