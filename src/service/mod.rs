//! 对外服务接口 - 提交、触发、状态与内容查询、完成回调
//!
//! 二进制入口与嵌入方都通过这里使用报告引擎。

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::config::Config;
use crate::report::context::ReportContext;
use crate::report::orchestrator::{GenerationBackend, LiveBackend, Orchestrator};
use crate::report::sections::SectionKind;
use crate::store::{JsonFileStore, ReportStore, StoreError};
use crate::types::{AnalysisRequest, RequestStatus, StructuredSummary};

pub use crate::types::NewRequest;

/// 进度核算的粗粒度步数：7个章节 + 摘要 + 发布
const PROGRESS_STEPS: usize = SectionKind::ALL.len() + 2;

/// 触发结果回执
#[derive(Debug, Clone, Serialize)]
pub struct TriggerAck {
    pub request_id: Uuid,
    pub status: RequestStatus,
}

/// 状态查询视图
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub request_id: Uuid,
    pub status: RequestStatus,
    /// 基于已持久化状态推导，单调不减，仅completed时为100
    pub progress_percent: u8,
}

/// 内容查询视图
#[derive(Debug, Clone, Serialize)]
pub struct ContentView {
    pub request_id: Uuid,
    pub sections: Vec<SectionView>,
    pub artifact_url: Option<String>,
}

/// 单章节内容
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub key: String,
    pub title: String,
    pub content: String,
}

/// 完成回调载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionCallback {
    pub request_id: Uuid,
    pub deal_id: String,
    pub artifact_url: Option<String>,
    pub summary: Value,
}

/// 报告服务
pub struct Service {
    config: Config,
    store: Arc<dyn ReportStore>,
}

impl Service {
    /// 按配置创建服务，使用JSON文件存储
    pub fn new(config: Config) -> Self {
        let store = Arc::new(JsonFileStore::new(&config.store));
        Self { config, store }
    }

    /// 注入存储实现创建服务
    pub fn with_store(config: Config, store: Arc<dyn ReportStore>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> Arc<dyn ReportStore> {
        self.store.clone()
    }

    /// 创建新的报告请求，初始状态pending
    pub async fn submit_request(&self, spec: NewRequest) -> Result<AnalysisRequest> {
        let request = AnalysisRequest::from_spec(spec);
        self.store.create_request(&request).await?;
        println!("📋 报告请求已创建: {} ({})", request.title, request.id);
        Ok(request)
    }

    /// 触发一次报告生成，生成在调用内完成
    pub async fn trigger_generation(&self, id: Uuid) -> Result<TriggerAck> {
        let context = self.build_context(id).await?;
        context.llm_client.check_connection().await?;
        self.run(context, &LiveBackend).await
    }

    /// 注入后端触发生成
    pub async fn trigger_generation_with(
        &self,
        id: Uuid,
        backend: &dyn GenerationBackend,
    ) -> Result<TriggerAck> {
        let context = self.build_context(id).await?;
        self.run(context, backend).await
    }

    async fn build_context(&self, id: Uuid) -> Result<ReportContext> {
        let request = self
            .store
            .get_request(id)
            .await?
            .ok_or(StoreError::RequestNotFound(id))?;
        ReportContext::new(self.config.clone(), request)
    }

    async fn run(
        &self,
        context: ReportContext,
        backend: &dyn GenerationBackend,
    ) -> Result<TriggerAck> {
        if self.config.force_regenerate {
            let cache = context.cache_manager.read().await;
            cache.clear_all().await?;
            println!("🧹 已清除缓存，强制重新生成");
        }

        let orchestrator = Orchestrator::new(self.store.clone());
        let status = orchestrator
            .run_generation_with(&context, backend)
            .await?;

        Ok(TriggerAck {
            request_id: context.request.id,
            status,
        })
    }

    /// 查询请求状态与进度
    pub async fn query_status(&self, id: Uuid) -> Result<StatusView> {
        let request = self
            .store
            .get_request(id)
            .await?
            .ok_or(StoreError::RequestNotFound(id))?;

        let progress_percent = match request.status {
            RequestStatus::Pending => 0,
            RequestStatus::Completed => 100,
            RequestStatus::Processing | RequestStatus::Failed => {
                self.persisted_progress(&request).await?
            }
        };

        Ok(StatusView {
            request_id: request.id,
            status: request.status,
            progress_percent,
        })
    }

    /// 基于已持久化的章节、摘要与成果物推导进度，completed之前封顶99
    async fn persisted_progress(&self, request: &AnalysisRequest) -> Result<u8> {
        let mut steps = self
            .store
            .get_sections(request.id)
            .await?
            .len()
            .min(SectionKind::ALL.len());

        if let Some(summary) = self.store.get_summary(&request.deal_key()).await? {
            if summary.request_id == request.id {
                steps += 1;
            }
        }
        if request.parameters.get("artifact_url").is_some() {
            steps += 1;
        }

        Ok(((steps * 100 / PROGRESS_STEPS) as u8).min(99))
    }

    /// 查询报告内容：固定章节顺序 + 成果物URL
    pub async fn query_content(&self, id: Uuid) -> Result<ContentView> {
        let request = self
            .store
            .get_request(id)
            .await?
            .ok_or(StoreError::RequestNotFound(id))?;

        let sections = self
            .store
            .get_sections(id)
            .await?
            .into_iter()
            .map(|s| {
                let title = SectionKind::from_key(&s.name)
                    .map(|k| k.title().to_string())
                    .unwrap_or_else(|| s.name.clone());
                SectionView {
                    key: s.name,
                    title,
                    content: s.content,
                }
            })
            .collect();

        let artifact_url = request
            .parameters
            .get("artifact_url")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Ok(ContentView {
            request_id: id,
            sections,
            artifact_url,
        })
    }

    /// 处理完成回调：写入结构化摘要与deal对应记录，可重复投递
    pub async fn handle_completion_callback(&self, callback: CompletionCallback) -> Result<()> {
        let summary = StructuredSummary::new(
            callback.deal_id.clone(),
            callback.request_id,
            callback.summary,
        );
        self.store.upsert_summary(summary).await?;
        self.store
            .record_deal_report(&callback.deal_id, callback.request_id)
            .await?;

        if let Some(url) = callback.artifact_url {
            self.store
                .append_parameters(callback.request_id, json!({ "artifact_url": url }))
                .await?;
        }

        println!("📨 完成回调已处理: deal {}", callback.deal_id);
        Ok(())
    }
}

/// 启动一次完整的报告生成流水线：提交 + 触发 + 控制台汇总
pub async fn launch(config: &Config, spec: NewRequest) -> Result<()> {
    let service = Service::new(config.clone());

    let request = service.submit_request(spec).await?;
    let ack = service.trigger_generation(request.id).await?;

    let status = service.query_status(request.id).await?;
    let content = service.query_content(request.id).await?;

    println!("\n📈 生成结束: {} (进度 {}%)", ack.status, status.progress_percent);
    println!("   章节数量: {}", content.sections.len());
    for section in &content.sections {
        println!("   - {} ({} 字符)", section.title, section.content.chars().count());
    }
    if let Some(url) = &content.artifact_url {
        println!("   成果物: {}", url);
    }

    Ok(())
}
