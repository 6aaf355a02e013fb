use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 结构化摘要记录
///
/// 按deal键维度存储，同一deal重复生成时覆盖数据并保留创建时间。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredSummary {
    /// deal键（外部deal_id，或回退的请求ID字符串）
    pub deal_id: String,
    /// 产生本摘要的请求ID
    pub request_id: Uuid,
    /// 各章节抽取出的结构化字段（JSON对象）
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StructuredSummary {
    pub fn new(deal_id: impl Into<String>, request_id: Uuid, data: Value) -> Self {
        let now = Utc::now();
        Self {
            deal_id: deal_id.into(),
            request_id,
            data,
            created_at: now,
            updated_at: now,
        }
    }
}
