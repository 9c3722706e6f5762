pub mod analysis;
pub mod core;
pub mod land;
pub mod sort;

pub use analysis::{analyze, analyze_report, AnalysisReport};
