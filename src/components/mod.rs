pub mod dialog;
pub mod export_in_progress;
pub mod progress_bar;

pub use export_in_progress::ExportInProgress;
