pub mod driver;
pub mod input;
pub mod report;

pub use driver::{analyze, analyze_interactive, analyze_report};
pub use input::{load_rectangle_file, parse_barren_area, read_interactive, PROMPT};
pub use report::{AnalysisReport, ComponentSummary, RejectedSpec};
