//! Agent执行辅助 - 带缓存的LLM调用封装

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::context::ReportContext;

/// Agent执行参数
pub struct AgentExecuteParams {
    /// 系统提示词
    pub prompt_sys: String,
    /// 用户提示词
    pub prompt_user: String,
    /// 缓存分类键
    pub cache_scope: String,
    /// 日志标识
    pub log_tag: String,
}

impl AgentExecuteParams {
    fn cache_key(&self) -> String {
        format!("{}\n\n{}", self.prompt_sys, self.prompt_user)
    }
}

/// 执行文本生成调用，命中缓存时跳过LLM
pub async fn prompt(context: &ReportContext, params: AgentExecuteParams) -> Result<String> {
    let cache_key = params.cache_key();

    {
        let cache = context.cache_manager.read().await;
        if let Some(cached) = cache.get::<String>(&params.cache_scope, &cache_key).await? {
            return Ok(cached);
        }
    }

    println!("   🤖 [{}] 调用LLM生成中...", params.log_tag);
    let result = context
        .llm_client
        .prompt(&params.prompt_sys, &params.prompt_user)
        .await?;

    let cache = context.cache_manager.read().await;
    cache.set(&params.cache_scope, &cache_key, &result).await?;
    Ok(result)
}

/// 执行结构化抽取调用，命中缓存时跳过LLM
pub async fn extract<T>(context: &ReportContext, params: AgentExecuteParams) -> Result<T>
where
    T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
{
    let cache_key = params.cache_key();

    {
        let cache = context.cache_manager.read().await;
        if let Some(cached) = cache.get::<T>(&params.cache_scope, &cache_key).await? {
            return Ok(cached);
        }
    }

    println!("   🤖 [{}] 调用LLM抽取中...", params.log_tag);
    let result: T = context
        .llm_client
        .extract(&params.prompt_sys, &params.prompt_user)
        .await?;

    let cache = context.cache_manager.read().await;
    cache.set(&params.cache_scope, &cache_key, &result).await?;
    Ok(result)
}
