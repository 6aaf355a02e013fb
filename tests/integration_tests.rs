use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use readiness_rs::config::{Config, StoreConfig};
use readiness_rs::report::agent::SectionAgent;
use readiness_rs::report::context::ReportContext;
use readiness_rs::report::orchestrator::GenerationBackend;
use readiness_rs::report::sections::SectionKind;
use readiness_rs::service::{NewRequest, Service};
use readiness_rs::types::{ReportSection, RequestStatus, StructuredSummary};

/// 脚本化生成后端：章节文本与摘要本地生成，
/// 上下文检索与成果物发布走真实实现
struct StubGeneration {
    fail: Vec<SectionKind>,
}

impl StubGeneration {
    fn passing() -> Self {
        Self { fail: vec![] }
    }
}

#[async_trait]
impl GenerationBackend for StubGeneration {
    async fn generate_section(
        &self,
        _context: &ReportContext,
        agent: &SectionAgent,
    ) -> Result<String> {
        if self.fail.contains(&agent.kind()) {
            Err(anyhow!("scripted generation failure"))
        } else {
            Ok(format!(
                "### {}\n\nAssessment for this area. 🟢 Strong signals observed.",
                agent.kind().title()
            ))
        }
    }

    async fn summarize(
        &self,
        context: &ReportContext,
        sections: &[ReportSection],
    ) -> StructuredSummary {
        let mut data = serde_json::Map::new();
        for section in sections {
            data.insert(section.name.clone(), json!({ "summary": "ok" }));
        }
        StructuredSummary::new(
            context.request.deal_key(),
            context.request.id,
            serde_json::Value::Object(data),
        )
    }
}

/// 指向临时目录的完整配置，发布与通知保持默认行为
fn config(temp: &TempDir) -> Config {
    let mut config = Config::default();
    config.output_path = temp.path().join("output");
    config.internal_path = temp.path().join(".readiness");
    config.cache.cache_dir = temp.path().join(".readiness/cache");
    config.store = StoreConfig {
        store_dir: temp.path().join(".readiness/store"),
    };
    config.retrieval.fetch_timeout_seconds = 1;
    config
}

fn new_request() -> NewRequest {
    NewRequest {
        submitter_id: Some("analyst-7".to_string()),
        founder_name: "Jane Doe".to_string(),
        company_name: "Acme Analytics".to_string(),
        company_description: "B2B data tooling for mid-market retailers".to_string(),
        reference_url: None,
        deal_id: Some("deal-042".to_string()),
        title: None,
    }
}

#[tokio::test]
async fn test_full_report_pipeline() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let service = Service::new(config.clone());

    // 提交请求，初始为pending
    let request = service.submit_request(new_request()).await.unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(
        service.query_status(request.id).await.unwrap().progress_percent,
        0
    );

    // 触发生成
    let ack = service
        .trigger_generation_with(request.id, &StubGeneration::passing())
        .await
        .unwrap();
    assert_eq!(ack.status, RequestStatus::Completed);

    let status = service.query_status(request.id).await.unwrap();
    assert_eq!(status.status, RequestStatus::Completed);
    assert_eq!(status.progress_percent, 100);

    // 内容查询：7个固定章节，按展示顺序返回，内容非空
    let content = service.query_content(request.id).await.unwrap();
    assert_eq!(content.sections.len(), SectionKind::ALL.len());
    for (section, kind) in content.sections.iter().zip(SectionKind::ALL) {
        assert_eq!(section.key, kind.key());
        assert_eq!(section.title, kind.title());
        assert!(!section.content.trim().is_empty());
    }

    // 成果物已落盘
    let report_path = config
        .output_path
        .join(request.id.to_string())
        .join("report.html");
    assert!(report_path.exists());
    let artifact_url = content.artifact_url.unwrap();
    assert!(artifact_url.starts_with("file://"));
    assert!(artifact_url.ends_with("report.html"));

    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("Acme Analytics"));
}

#[tokio::test]
async fn test_unreachable_reference_url_degrades_gracefully() {
    let temp = TempDir::new().unwrap();
    let service = Service::new(config(&temp));

    // 端口9基本无监听，拉取参考资料会失败
    let mut spec = new_request();
    spec.reference_url = Some("http://127.0.0.1:9/pitch-deck.pdf".to_string());

    let request = service.submit_request(spec).await.unwrap();
    let ack = service
        .trigger_generation_with(request.id, &StubGeneration::passing())
        .await
        .unwrap();

    // 检索失败只降级为空上下文，报告仍然完成
    assert_eq!(ack.status, RequestStatus::Completed);
    let content = service.query_content(request.id).await.unwrap();
    assert_eq!(content.sections.len(), SectionKind::ALL.len());
}

#[tokio::test]
async fn test_failed_run_can_be_retriggered() {
    let temp = TempDir::new().unwrap();
    let service = Service::new(config(&temp));
    let request = service.submit_request(new_request()).await.unwrap();

    // 4个章节失败，低于完成阈值
    let flaky = StubGeneration {
        fail: vec![
            SectionKind::MarketOpportunity,
            SectionKind::FinancialPerformance,
            SectionKind::GoToMarket,
            SectionKind::LeadershipTeam,
        ],
    };
    let ack = service
        .trigger_generation_with(request.id, &flaky)
        .await
        .unwrap();
    assert_eq!(ack.status, RequestStatus::Failed);

    let failed = service.store().get_request(request.id).await.unwrap().unwrap();
    assert!(failed.error_message.is_some());

    // 重新触发后补齐全部章节
    let ack = service
        .trigger_generation_with(request.id, &StubGeneration::passing())
        .await
        .unwrap();
    assert_eq!(ack.status, RequestStatus::Completed);

    let content = service.query_content(request.id).await.unwrap();
    assert_eq!(content.sections.len(), SectionKind::ALL.len());

    let recovered = service.store().get_request(request.id).await.unwrap().unwrap();
    assert!(recovered.error_message.is_none());
}

#[tokio::test]
async fn test_summary_persisted_for_deal() {
    let temp = TempDir::new().unwrap();
    let service = Service::new(config(&temp));
    let request = service.submit_request(new_request()).await.unwrap();

    service
        .trigger_generation_with(request.id, &StubGeneration::passing())
        .await
        .unwrap();

    let summary = service
        .store()
        .get_summary("deal-042")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.request_id, request.id);
    assert!(summary.data.is_object());
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_path, std::path::PathBuf::from("./readiness.out"));
    assert_eq!(config.internal_path, std::path::PathBuf::from("./.readiness"));
    assert_eq!(config.completion_threshold, 4);
    assert!(config.publish.enabled);
    assert!(config.notify.webhook_url.is_none());
    assert!(config.retrieval.vector_endpoint.is_none());
}
