use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 报告请求的生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// 已创建，等待生成
    Pending,
    /// 生成流程进行中
    Processing,
    /// 达到完成阈值，报告可用
    Completed,
    /// 生成失败，error_message中记录原因
    Failed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Processing => "processing",
            RequestStatus::Completed => "completed",
            RequestStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// 新建报告请求的提交载荷
///
/// 来自CLI内联参数或JSON请求文件，尚未分配ID与状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequest {
    /// 提交人标识（可选）
    pub submitter_id: Option<String>,
    /// 创始人姓名
    pub founder_name: String,
    /// 公司名称
    pub company_name: String,
    /// 公司简介
    #[serde(default)]
    pub company_description: String,
    /// 参考文档URL（pitch deck等）
    pub reference_url: Option<String>,
    /// 对外deal标识
    pub deal_id: Option<String>,
    /// 报告标题（缺省时按公司名生成）
    pub title: Option<String>,
}

/// 报告请求记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub submitter_id: Option<String>,
    pub founder_name: String,
    pub company_name: String,
    pub company_description: String,
    pub reference_url: Option<String>,
    pub deal_id: Option<String>,
    pub title: String,
    pub status: RequestStatus,
    /// 生成过程的附加参数（JSON对象，只增不改）
    pub parameters: Value,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnalysisRequest {
    /// 由提交载荷创建新请求，初始状态为pending
    pub fn from_spec(spec: NewRequest) -> Self {
        let now = Utc::now();
        let title = spec
            .title
            .unwrap_or_else(|| format!("Investment Readiness Report - {}", spec.company_name));
        Self {
            id: Uuid::new_v4(),
            submitter_id: spec.submitter_id,
            founder_name: spec.founder_name,
            company_name: spec.company_name,
            company_description: spec.company_description,
            reference_url: spec.reference_url,
            deal_id: spec.deal_id,
            title,
            status: RequestStatus::Pending,
            parameters: Value::Object(serde_json::Map::new()),
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 摘要与成果记录使用的deal键：未提供deal_id时回退到请求ID
    pub fn deal_key(&self) -> String {
        self.deal_id
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> NewRequest {
        NewRequest {
            submitter_id: None,
            founder_name: "Jane Doe".to_string(),
            company_name: "Acme Analytics".to_string(),
            company_description: "B2B data tooling".to_string(),
            reference_url: None,
            deal_id: None,
            title: None,
        }
    }

    #[test]
    fn test_from_spec_defaults() {
        let request = AnalysisRequest::from_spec(spec());

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.title, "Investment Readiness Report - Acme Analytics");
        assert!(request.error_message.is_none());
        assert!(request.parameters.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_deal_key_falls_back_to_request_id() {
        let request = AnalysisRequest::from_spec(spec());
        assert_eq!(request.deal_key(), request.id.to_string());

        let mut with_deal = spec();
        with_deal.deal_id = Some("deal-042".to_string());
        let request = AnalysisRequest::from_spec(with_deal);
        assert_eq!(request.deal_key(), "deal-042");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&RequestStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");

        let status: RequestStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, RequestStatus::Failed);
    }

    #[test]
    fn test_explicit_title_is_kept() {
        let mut with_title = spec();
        with_title.title = Some("Custom Title".to_string());
        let request = AnalysisRequest::from_spec(with_title);
        assert_eq!(request.title, "Custom Title");
    }
}
