use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 报告章节记录
///
/// 同一请求下章节名唯一，重复写入时按名称覆盖内容。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub request_id: Uuid,
    /// 章节键名（如executive_summary_investment_rationale）
    pub name: String,
    /// Markdown章节内容
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportSection {
    pub fn new(request_id: Uuid, name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            request_id,
            name: name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
