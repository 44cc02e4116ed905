//! Reading name lists and writing match reports.
//!
//! Both ends accept either a file path or `-` for the standard streams.

pub mod input;
pub mod report;

pub use input::{parse_names, read_names, read_names_from};
pub use report::{render_report, write_report};
