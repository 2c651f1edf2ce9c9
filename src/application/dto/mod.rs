/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod graph_request;
mod output_format;
mod report_request;

pub use graph_request::{DisplayOptions, GraphRequest, GraphView};
pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
