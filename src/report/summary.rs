//! 结构化摘要抽取
//!
//! 对每个已生成章节做一次schema抽取，汇总为按deal键存储的StructuredSummary。
//! 单个章节抽取失败只记录日志并留空该字段，不中断摘要写入。

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::memory::SCOPE_SUMMARY;
use crate::report::agent_executor::{self, AgentExecuteParams};
use crate::report::context::ReportContext;
use crate::report::sections::SectionKind;
use crate::types::{ReportSection, StructuredSummary};

const DIGEST_SYSTEM_PROMPT: &str = r#"You are a data extraction specialist. Extract structured facts from the investment report section provided. Only use information present in the section. Keep entries short."#;

/// 单个章节的结构化摘录
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionDigest {
    /// Two to three sentence summary of the section
    pub summary: String,
    /// Key data points, metrics, or facts stated in the section
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Risks or concerns raised in the section
    #[serde(default)]
    pub risks: Vec<String>,
    /// Assessment table entries found in the section
    #[serde(default)]
    pub assessments: Vec<AssessmentEntry>,
}

/// 评估表中的一行
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentEntry {
    /// Assessment category name
    pub category: String,
    /// Rating or verdict as written in the section
    pub rating: String,
}

/// 对全部已生成章节执行摘要抽取，返回待落库的StructuredSummary
///
/// 返回的data对象只包含抽取成功的章节键。
pub async fn execute(context: &ReportContext, sections: &[ReportSection]) -> StructuredSummary {
    println!("📊 开始结构化摘要抽取...");
    let mut data = Map::new();

    for section in sections {
        let Some(kind) = SectionKind::from_key(&section.name) else {
            eprintln!("   ⚠️ 未知章节键 {}，跳过摘要抽取", section.name);
            continue;
        };

        match extract_section_digest(context, kind, &section.content).await {
            Ok(digest) => match serde_json::to_value(&digest) {
                Ok(value) => {
                    if let Err(e) = context
                        .store_to_memory(SCOPE_SUMMARY, kind.key(), &digest)
                        .await
                    {
                        eprintln!("   ⚠️ 摘要写入Memory失败: {}", e);
                    }
                    data.insert(kind.key().to_string(), value);
                }
                Err(e) => eprintln!("   ⚠️ [{}] 摘要序列化失败，字段留空: {}", kind.title(), e),
            },
            Err(e) => eprintln!("   ⚠️ [{}] 摘要抽取失败，字段留空: {}", kind.title(), e),
        }
    }

    println!("✅ 结构化摘要抽取完成（{} / {} 章节）", data.len(), sections.len());
    StructuredSummary::new(
        context.request.deal_key(),
        context.request.id,
        Value::Object(data),
    )
}

/// 对单个章节执行schema抽取
async fn extract_section_digest(
    context: &ReportContext,
    kind: SectionKind,
    content: &str,
) -> Result<SectionDigest> {
    let user_prompt = format!(
        "Extract the structured digest of the report section below.\n\nSection {}: {}\n\n{}",
        kind.number(),
        kind.title(),
        content
    );

    let params = AgentExecuteParams {
        prompt_sys: DIGEST_SYSTEM_PROMPT.to_string(),
        prompt_user: user_prompt,
        cache_scope: format!("summary/{}", kind.key()),
        log_tag: format!("Digest {}", kind.title()),
    };

    agent_executor::extract(context, params).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_tolerates_missing_optional_fields() {
        let json = r#"{"summary": "Strong traction in a growing market."}"#;
        let digest: SectionDigest = serde_json::from_str(json).unwrap();
        assert!(digest.highlights.is_empty());
        assert!(digest.risks.is_empty());
        assert!(digest.assessments.is_empty());
    }

    #[test]
    fn test_digest_round_trip() {
        let digest = SectionDigest {
            summary: "Revenue grew 3x year over year.".to_string(),
            highlights: vec!["ARR $1.2M".to_string()],
            risks: vec!["Customer concentration".to_string()],
            assessments: vec![AssessmentEntry {
                category: "Revenue Growth Potential".to_string(),
                rating: "Strong".to_string(),
            }],
        };

        let value = serde_json::to_value(&digest).unwrap();
        let back: SectionDigest = serde_json::from_value(value).unwrap();
        assert_eq!(back.summary, digest.summary);
        assert_eq!(back.assessments.len(), 1);
    }
}
