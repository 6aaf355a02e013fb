use crate::config::{Config, LLMProvider};
use crate::service::NewRequest;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Readiness-RS - 由Rust与AI驱动的投资就绪度报告生成引擎
#[derive(Parser, Debug)]
#[command(name = "readiness-rs")]
#[command(
    about = "AI-based generation engine for investment readiness reports. It assembles retrieval context from reference materials, drives per-section AI agents, and persists structured report output."
)]
#[command(version)]
pub struct Args {
    /// 报告请求描述文件（JSON）
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long, default_value = "./readiness.out")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 创始人姓名（未提供请求文件时使用）
    #[arg(long)]
    pub founder: Option<String>,

    /// 公司名称（未提供请求文件时使用）
    #[arg(long)]
    pub company: Option<String>,

    /// 公司简介（未提供请求文件时使用）
    #[arg(long)]
    pub description: Option<String>,

    /// 参考文档URL（pitch deck）
    #[arg(long)]
    pub reference_url: Option<String>,

    /// 对外deal标识
    #[arg(long)]
    pub deal_id: Option<String>,

    /// 报告完成阈值：至少多少个章节成功才算 completed
    #[arg(long)]
    pub completion_threshold: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 高能效模型，优先用于常规章节生成任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于结构化摘要抽取，以及作为efficient失效情况下的兜底
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// LLM Provider (openai, mistral, openrouter, anthropic, deepseek)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 完成通知Webhook地址
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// 跳过产出物渲染与发布
    #[arg(long)]
    pub no_publish: bool,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 强制重新生成（清除缓存）
    #[arg(long)]
    pub force_regenerate: bool,
}

impl Args {
    /// 解析报告请求：优先使用请求文件，否则由内联参数构造
    pub fn request_spec(&self) -> Result<NewRequest> {
        if let Some(ref request_path) = self.request {
            let content = std::fs::read_to_string(request_path)
                .context(format!("Failed to read request file: {:?}", request_path))?;
            let spec: NewRequest =
                serde_json::from_str(&content).context("Failed to parse request file")?;
            return Ok(spec);
        }

        let founder = self
            .founder
            .clone()
            .context("Either --request or --founder/--company must be provided")?;
        let company = self
            .company
            .clone()
            .context("Either --request or --founder/--company must be provided")?;

        Ok(NewRequest {
            submitter_id: None,
            founder_name: founder,
            company_name: company,
            company_description: self.description.clone().unwrap_or_default(),
            reference_url: self.reference_url.clone(),
            deal_id: self.deal_id.clone(),
            title: None,
        })
    }

    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            return Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}，使用默认配置", config_path)
            });
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("readiness.toml");

            if default_config_path.exists() {
                return Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}，使用默认配置",
                        default_config_path
                    )
                });
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        config.request_path = self.request;
        config.output_path = self.output_path;
        config.cache.cache_dir = config.internal_path.join("cache");
        config.store.store_dir = config.internal_path.join("store");

        if let Some(threshold) = self.completion_threshold {
            config.completion_threshold = threshold;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
        }
        if let Some(model_powerful) = self.model_powerful {
            config.llm.model_powerful = model_powerful;
        } else {
            config.llm.model_powerful = config.llm.model_efficient.to_string();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 通知与发布配置
        if let Some(webhook_url) = self.webhook_url {
            config.notify.webhook_url = Some(webhook_url);
        }
        if self.no_publish {
            config.publish.enabled = false;
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 其他配置
        config.force_regenerate = self.force_regenerate;
        config.verbose = self.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
