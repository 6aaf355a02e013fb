pub mod request;
pub mod section;
pub mod summary;

pub use request::{AnalysisRequest, NewRequest, RequestStatus};
pub use section::ReportSection;
pub use summary::StructuredSummary;
