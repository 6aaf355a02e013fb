//! 检索上下文提供者
//!
//! 参考资料抓取与向量检索是同一trait背后的两个独立来源，
//! 编排器不感知哪个来源生效。任一来源失败都只降级，不中断报告生成。

use std::time::Duration;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RetrievalConfig;
use crate::memory::SCOPE_CONTEXT;
use crate::report::context::ReportContext;
use crate::report::research;
use crate::utils::token_estimator::TokenEstimator;

/// 检索上下文在Memory中的键名
pub const RETRIEVED_CONTEXT_KEY: &str = "retrieved_context";

/// 研究Agent失败时拼入上下文的降级标记
pub const RESEARCHER_ERROR_MARKER: &str = "[Warning: ResearcherAgent encountered an error.]";

/// 单个检索材料来源
///
/// 返回Ok(None)表示本来源未配置或无命中，返回Err表示获取失败；
/// 两者都由调用方降级处理。
#[async_trait]
pub trait ContextSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, context: &ReportContext) -> Result<Option<String>>;
}

/// 收集检索上下文并写入Memory
///
/// 没有任何可用材料时不写入，章节Agent会自然跳过检索上下文段落。
pub async fn execute(context: &ReportContext) -> Result<()> {
    let sources: Vec<Box<dyn ContextSource>> =
        vec![Box::new(ReferenceDocumentSource), Box::new(VectorSearchSource)];
    execute_with_sources(context, &sources).await
}

pub async fn execute_with_sources(
    context: &ReportContext,
    sources: &[Box<dyn ContextSource>],
) -> Result<()> {
    println!("🔍 开始收集检索上下文...");
    let mut parts: Vec<String> = Vec::new();

    for source in sources {
        match source.fetch(context).await {
            Ok(Some(text)) => {
                println!(
                    "   📄 [{}] 材料就绪（{} 字符）",
                    source.name(),
                    text.chars().count()
                );
                parts.push(text);
            }
            Ok(None) => println!("   ⚠️ [{}] 无可用材料，跳过", source.name()),
            Err(e) => eprintln!("   ⚠️ [{}] 获取失败，继续生成: {}", source.name(), e),
        }
    }

    let raw_material = parts.join("\n\n");
    if raw_material.trim().is_empty() {
        println!("   ⚠️ 无原始材料，跳过研究Agent");
    } else {
        match research::run(context, &raw_material).await {
            Ok(findings) => parts.push(format!("RESEARCHER FINDINGS:\n{}", findings)),
            Err(e) => {
                eprintln!("   ⚠️ 研究Agent执行失败，继续生成: {}", e);
                parts.push(RESEARCHER_ERROR_MARKER.to_string());
            }
        }
    }

    if parts.is_empty() {
        println!("   ⚠️ 无可用检索上下文");
        return Ok(());
    }

    let combined = enforce_token_budget(
        parts.join("\n\n"),
        context.config.retrieval.context_token_budget,
    );
    context
        .store_to_memory(SCOPE_CONTEXT, RETRIEVED_CONTEXT_KEY, combined)
        .await?;
    println!("✅ 检索上下文就绪");
    Ok(())
}

/// 参考资料URL来源（pitch deck等）
pub struct ReferenceDocumentSource;

#[async_trait]
impl ContextSource for ReferenceDocumentSource {
    fn name(&self) -> &'static str {
        "reference_document"
    }

    async fn fetch(&self, context: &ReportContext) -> Result<Option<String>> {
        let Some(url) = context.request.reference_url.as_deref() else {
            return Ok(None);
        };
        let retrieval = &context.config.retrieval;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(retrieval.fetch_timeout_seconds))
            .build()
            .context("failed to build the reference document HTTP client")?;

        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to reference URL failed: {}", url))?
            .error_for_status()
            .with_context(|| format!("reference URL returned an error status: {}", url))?;

        let text = response
            .text()
            .await
            .context("failed to read the reference document body")?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}

/// 向量检索来源
pub struct VectorSearchSource;

#[derive(Debug, Serialize)]
struct VectorQuery<'a> {
    query: &'a str,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct VectorResponse {
    #[serde(default)]
    matches: Vec<VectorMatch>,
}

#[derive(Debug, Deserialize)]
struct VectorMatch {
    text: String,
}

#[async_trait]
impl ContextSource for VectorSearchSource {
    fn name(&self) -> &'static str {
        "vector_search"
    }

    async fn fetch(&self, context: &ReportContext) -> Result<Option<String>> {
        let retrieval = &context.config.retrieval;
        let Some(endpoint) = retrieval.vector_endpoint.as_deref() else {
            return Ok(None);
        };

        let query = build_vector_query(context);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(retrieval.fetch_timeout_seconds))
            .build()
            .context("failed to build the vector search HTTP client")?;

        let response: VectorResponse = client
            .post(endpoint)
            .json(&VectorQuery {
                query: &query,
                top_k: retrieval.vector_top_k,
            })
            .send()
            .await
            .context("vector search request failed")?
            .error_for_status()
            .context("vector search endpoint returned an error status")?
            .json()
            .await
            .context("failed to decode the vector search response")?;

        let snippets: Vec<String> = response
            .matches
            .into_iter()
            .map(|m| m.text)
            .filter(|t| !t.trim().is_empty())
            .collect();

        if snippets.is_empty() {
            Ok(None)
        } else {
            Ok(Some(format_vector_block(&snippets)))
        }
    }
}

/// 向量检索的查询语句：公司名 + 业务描述
fn build_vector_query(context: &ReportContext) -> String {
    let request = &context.request;
    if request.company_description.is_empty() {
        request.company_name.clone()
    } else {
        format!("{} {}", request.company_name, request.company_description)
    }
}

/// 拼装向量检索片段块
fn format_vector_block(snippets: &[String]) -> String {
    format!("Relevant Context:\n{}", snippets.join("\n---\n"))
}

/// 按token预算截断文本，保留头部内容
fn enforce_token_budget(text: String, budget: usize) -> String {
    let estimator = TokenEstimator::new();
    let estimated = estimator.estimate_tokens(&text);
    if estimated <= budget {
        return text;
    }

    let keep_ratio = budget as f64 / estimated as f64;
    let keep_chars = (text.chars().count() as f64 * keep_ratio).floor() as usize;
    let truncated: String = text.chars().take(keep_chars).collect();
    println!(
        "   ✂️ 检索上下文超出预算（约 {} tokens），截断至约 {} tokens",
        estimated, budget
    );
    format!("{}\n\n[Context truncated]", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vector_block() {
        let snippets = vec!["first snippet".to_string(), "second snippet".to_string()];
        let block = format_vector_block(&snippets);
        assert!(block.starts_with("Relevant Context:\n"));
        assert!(block.contains("first snippet\n---\nsecond snippet"));
    }

    #[test]
    fn test_enforce_token_budget_passthrough() {
        let text = "short text".to_string();
        let result = enforce_token_budget(text.clone(), 4000);
        assert_eq!(result, text);
    }

    #[test]
    fn test_enforce_token_budget_truncates() {
        let text = "word ".repeat(10_000);
        let original_len = text.chars().count();
        let result = enforce_token_budget(text, 100);
        assert!(result.chars().count() < original_len);
        assert!(result.ends_with("[Context truncated]"));
    }

    #[test]
    fn test_vector_response_decoding() {
        let json = r#"{"matches": [{"text": "alpha"}, {"text": "  "}]}"#;
        let response: VectorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.matches.len(), 2);

        let empty: VectorResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.matches.is_empty());
    }
}
