pub mod analyzer;
pub mod args;
pub mod input;
pub mod report;
pub mod result;
pub mod utils;

pub use analyzer::analyze;
pub use args::{Args, OutputFormat};
pub use input::{DateInput, Field, InputError};
pub use report::analyze_date;
pub use result::{AnalysisResult, DateReport};
