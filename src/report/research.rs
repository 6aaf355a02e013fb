//! 研究Agent - 对原始检索材料做一次事实梳理
//!
//! 产出的是结构化的事实罗列，供各章节Agent引用，而不是成稿。

use anyhow::Result;

use crate::report::agent_executor::{self, AgentExecuteParams};
use crate::report::context::ReportContext;

const RESEARCHER_SYSTEM_PROMPT: &str = r#"You are a specialized research agent. Extract and present factual details from the provided context. Do not write a report. Do not invent data. If a research objective cannot be answered from the context, state that the information was not provided."#;

/// 基于原始材料执行研究梳理，返回事实清单文本
///
/// 失败由调用方决定降级策略，这里只负责执行与缓存。
pub async fn run(context: &ReportContext, raw_material: &str) -> Result<String> {
    let request = &context.request;

    let mut user_prompt = String::new();
    user_prompt.push_str(&format!(
        "Gather factual findings about the company below from the provided material.\n\nThe company details:\n- Founder Name: {}\n- Company Name: {}\n",
        request.founder_name, request.company_name
    ));
    if !request.company_description.is_empty() {
        user_prompt.push_str(&format!(
            "- Company Provides: {}\n",
            request.company_description
        ));
    }
    user_prompt.push_str(
        r#"
Research Objectives:
1) Market & Industry Overview
2) Customer Traction & Revenue
3) Financial & Growth Indicators
4) Go-To-Market & Competitive Position
5) Leadership & Team
6) Investor Alignment & Risks
7) Recommendations or Next Steps (High-Level)

Material:
"#,
    );
    user_prompt.push_str(raw_material);
    user_prompt.push_str(
        r#"

Instructions:
1. Present data points, numbers, names, and quotes as found in the material.
2. Group findings under the research objectives above.
3. Do not produce narrative prose or a formatted report.
4. If an objective has no supporting data, write: 'the user did not provide the relevant information'."#,
    );

    let params = AgentExecuteParams {
        prompt_sys: RESEARCHER_SYSTEM_PROMPT.to_string(),
        prompt_user: user_prompt,
        cache_scope: "research".to_string(),
        log_tag: "Researcher".to_string(),
    };

    agent_executor::prompt(context, params).await
}
