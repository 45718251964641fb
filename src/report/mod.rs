pub mod builder;
pub mod errors;
pub mod expand;
pub mod types;

pub use builder::build_report;
pub use types::{ColumnSet, Report, ReportRequest, ZoneInfo};
