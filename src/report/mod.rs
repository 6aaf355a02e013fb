//! 报告生成引擎 - 上下文检索、章节Agent、编排与产出

pub mod agent;
pub mod agent_executor;
pub mod agents;
pub mod context;
pub mod notify;
pub mod orchestrator;
pub mod publish;
pub mod research;
pub mod retrieval;
pub mod sections;
pub mod summary;

pub use context::ReportContext;
pub use orchestrator::Orchestrator;
pub use sections::SectionKind;
