//! 章节Agent - 数据驱动的章节生成框架
//!
//! 七个章节共用同一个Agent类型，差异全部收敛到各自的SectionProfile剖面里，
//! 避免七份近乎相同的控制流。

use anyhow::Result;

use crate::memory::SCOPE_SECTIONS;
use crate::report::agent_executor::{self, AgentExecuteParams};
use crate::report::agents;
use crate::report::context::ReportContext;
use crate::report::retrieval::RETRIEVED_CONTEXT_KEY;
use crate::report::sections::SectionKind;

/// Prompt模板配置
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// 系统提示词
    pub system_prompt: String,
    /// 开头的说明性指令
    pub opening_instruction: String,
    /// 结尾的强调性指令（含章节Markdown模板）
    pub closing_instruction: String,
}

/// 单个章节的生成剖面
///
/// 声明章节身份、上下文依赖与prompt模板，prompt拼装与LLM调用由SectionAgent完成。
pub struct SectionProfile {
    /// 剖面对应的章节
    pub kind: SectionKind,
    /// 依赖的前序章节，拼入prompt；缺失的依赖跳过而不报错
    pub context_sections: &'static [SectionKind],
    /// 是否在prompt中包含检索上下文
    pub include_retrieval_context: bool,
    /// Prompt模板配置
    pub template: PromptTemplate,
}

/// 章节Agent：按剖面拼装prompt并执行带缓存的LLM调用
pub struct SectionAgent {
    profile: SectionProfile,
}

impl SectionAgent {
    pub fn new(profile: SectionProfile) -> Self {
        Self { profile }
    }

    /// 按章节构造Agent，剖面来自agents模块的剖面表
    pub fn for_section(kind: SectionKind) -> Self {
        Self::new(agents::profile_for(kind))
    }

    pub fn kind(&self) -> SectionKind {
        self.profile.kind
    }

    pub fn profile(&self) -> &SectionProfile {
        &self.profile
    }

    /// 拼装用户提示词：公司信息 + 检索上下文 + 前序章节 + 模板指令
    pub async fn build_user_prompt(&self, context: &ReportContext) -> String {
        let template = &self.profile.template;
        let request = &context.request;
        let mut prompt = String::new();

        prompt.push_str(&template.opening_instruction);
        prompt.push_str("\n\n");

        prompt.push_str("The company details:\n");
        prompt.push_str(&format!("- Founder Name: {}\n", request.founder_name));
        prompt.push_str(&format!("- Company Name: {}\n", request.company_name));
        if !request.company_description.is_empty() {
            prompt.push_str(&format!(
                "- Company Provides: {}\n",
                request.company_description
            ));
        }
        prompt.push('\n');

        if self.profile.include_retrieval_context {
            if let Some(retrieved) = context
                .get_from_memory::<String>(crate::memory::SCOPE_CONTEXT, RETRIEVED_CONTEXT_KEY)
                .await
            {
                prompt.push_str("Retrieved Context:\n");
                prompt.push_str(&retrieved);
                prompt.push_str("\n\n");
            }
        }

        for dep in self.profile.context_sections {
            if let Some(content) = context
                .get_from_memory::<String>(SCOPE_SECTIONS, dep.key())
                .await
            {
                prompt.push_str(&format!(
                    "SECTION {}: {}\n{}\n\n",
                    dep.number(),
                    dep.title(),
                    content
                ));
            }
        }

        prompt.push_str(&template.closing_instruction);
        prompt
    }

    /// 拼装prompt并执行带缓存的LLM调用，返回章节Markdown
    pub async fn execute(&self, context: &ReportContext) -> Result<String> {
        let user_prompt = self.build_user_prompt(context).await;

        let params = AgentExecuteParams {
            prompt_sys: self.profile.template.system_prompt.clone(),
            prompt_user: user_prompt,
            cache_scope: format!("sections/{}", self.kind().key()),
            log_tag: self.kind().title().to_string(),
        };

        let content = agent_executor::prompt(context, params).await?;
        println!("✅ Section Agent [{}] 执行完成", self.kind().title());
        Ok(content)
    }
}
