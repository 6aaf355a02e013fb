//! 报告生成编排器
//!
//! 完整的一次生成：幂等守卫、状态迁移、检索上下文、七章节顺序生成、
//! 结构化摘要、成果物发布与完成通知。章节级失败相互隔离，
//! 持久化失败立即上浮。

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::memory::SCOPE_SECTIONS;
use crate::report::agent::SectionAgent;
use crate::report::context::ReportContext;
use crate::report::sections::SectionKind;
use crate::report::{notify, publish, retrieval, summary};
use crate::store::{ReportStore, StoreError};
use crate::types::{ReportSection, RequestStatus, StructuredSummary};

/// 生成过程的外部调用面
///
/// 默认实现直连检索、LLM与发布模块；测试注入脚本化实现。
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn gather_context(&self, context: &ReportContext) -> Result<()> {
        retrieval::execute(context).await
    }

    async fn generate_section(
        &self,
        context: &ReportContext,
        agent: &SectionAgent,
    ) -> Result<String> {
        agent.execute(context).await
    }

    async fn summarize(
        &self,
        context: &ReportContext,
        sections: &[ReportSection],
    ) -> StructuredSummary {
        summary::execute(context, sections).await
    }

    async fn publish(&self, context: &ReportContext, sections: &[ReportSection])
    -> Option<String> {
        publish::execute(context, sections).await
    }

    async fn notify(
        &self,
        context: &ReportContext,
        status: RequestStatus,
        artifact_url: Option<String>,
    ) {
        notify::execute(context, status, artifact_url).await
    }
}

/// 直连各模块的默认后端
pub struct LiveBackend;

#[async_trait]
impl GenerationBackend for LiveBackend {}

/// 报告生成编排器
pub struct Orchestrator {
    store: Arc<dyn ReportStore>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// 执行一次完整生成，返回最终状态
    pub async fn run_generation(&self, context: &ReportContext) -> Result<RequestStatus> {
        self.run_generation_with(context, &LiveBackend).await
    }

    pub async fn run_generation_with(
        &self,
        context: &ReportContext,
        backend: &dyn GenerationBackend,
    ) -> Result<RequestStatus> {
        let request_id = context.request.id;

        // 幂等守卫：pending或failed才允许进入，先到者完成CAS迁移
        let request = match self
            .store
            .update_status(request_id, RequestStatus::Pending, RequestStatus::Processing)
            .await
        {
            Ok(request) => request,
            Err(StoreError::StatusConflict {
                actual: RequestStatus::Failed,
                ..
            }) => {
                self.store
                    .update_status(request_id, RequestStatus::Failed, RequestStatus::Processing)
                    .await?
            }
            Err(e) => return Err(e.into()),
        };
        println!("🚀 开始生成报告: {} ({})", request.title, request_id);

        let context = ReportContext {
            request,
            ..context.clone()
        };

        // 检索上下文缺失只降级，不阻塞生成
        if let Err(e) = backend.gather_context(&context).await {
            eprintln!("   ⚠️ 检索上下文收集失败，使用空上下文继续: {}", e);
        }

        let mut generated: Vec<ReportSection> = Vec::new();
        let mut failed: Vec<SectionKind> = Vec::new();

        for kind in SectionKind::GENERATION_ORDER {
            let agent = SectionAgent::for_section(kind);
            match backend.generate_section(&context, &agent).await {
                Ok(content) => {
                    if let Err(e) = context
                        .store_to_memory(SCOPE_SECTIONS, kind.key(), &content)
                        .await
                    {
                        eprintln!("   ⚠️ 章节写入Memory失败: {}", e);
                    }

                    let section = ReportSection::new(request_id, kind.key(), content);
                    if let Err(e) = self
                        .store
                        .upsert_sections(request_id, vec![section.clone()])
                        .await
                    {
                        self.fail_request(request_id, &format!("section persistence failed: {}", e))
                            .await;
                        return Err(e.into());
                    }
                    generated.push(section);
                }
                Err(e) => {
                    eprintln!("   ❌ 章节 [{}] 生成失败: {}", kind.title(), e);
                    failed.push(kind);
                }
            }
        }

        if !generated.is_empty() {
            let summary = backend.summarize(&context, &generated).await;
            if let Err(e) = self.store.upsert_summary(summary).await {
                self.fail_request(request_id, &format!("summary persistence failed: {}", e))
                    .await;
                return Err(e.into());
            }
        }

        let artifact_url = backend.publish(&context, &generated).await;
        if let Some(url) = &artifact_url {
            if let Err(e) = self
                .store
                .append_parameters(request_id, json!({ "artifact_url": url }))
                .await
            {
                self.fail_request(request_id, &format!("artifact url persistence failed: {}", e))
                    .await;
                return Err(e.into());
            }
        }

        let threshold = context.config.completion_threshold;
        let final_status = if generated.len() >= threshold {
            self.store
                .update_status(request_id, RequestStatus::Processing, RequestStatus::Completed)
                .await?;
            println!(
                "🎉 报告生成完成: {} / {} 章节成功",
                generated.len(),
                SectionKind::ALL.len()
            );
            RequestStatus::Completed
        } else {
            let failed_keys: Vec<&str> = failed.iter().map(|k| k.key()).collect();
            let message = format!(
                "only {} of {} sections succeeded (threshold {}); failed sections: {}",
                generated.len(),
                SectionKind::ALL.len(),
                threshold,
                failed_keys.join(", ")
            );
            eprintln!("❌ 报告未达完成阈值: {}", message);
            self.store.mark_failed(request_id, &message).await?;
            RequestStatus::Failed
        };

        // 通知尽力而为，投递结果不改变最终状态
        backend
            .notify(&context, final_status, artifact_url)
            .await;

        Ok(final_status)
    }

    /// 尽力标记失败；二次失败只能记录日志
    async fn fail_request(&self, request_id: uuid::Uuid, message: &str) {
        if let Err(e) = self.store.mark_failed(request_id, message).await {
            eprintln!("   ⚠️ 失败状态写入未成功: {}", e);
        }
    }
}
