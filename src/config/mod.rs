use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "mistral")]
    Mistral,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Mistral => write!(f, "mistral"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "mistral" => Ok(LLMProvider::Mistral),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 请求描述文件路径（JSON格式的报告请求）
    pub request_path: Option<PathBuf>,

    /// 产出物输出路径
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.readiness)
    pub internal_path: PathBuf,

    /// 报告完成阈值：至少多少个章节成功才算 completed
    pub completion_threshold: usize,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 持久化存储配置
    pub store: StoreConfig,

    /// 检索上下文配置
    pub retrieval: RetrievalConfig,

    /// 产出物发布配置
    pub publish: PublishConfig,

    /// 完成通知配置
    pub notify: NotifyConfig,

    /// 强制重新生成（清除缓存）
    pub force_regenerate: bool,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 高能效模型，优先用于常规章节生成任务
    pub model_efficient: String,

    /// 高质量模型，用于结构化摘要抽取，以及作为efficient失效情况下的兜底
    pub model_powerful: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 单个章节调用的重试上限
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

/// 持久化存储配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// 存储目录，每条记录一个JSON文档
    pub store_dir: PathBuf,
}

/// 检索上下文配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RetrievalConfig {
    /// 注入提示词的上下文token预算
    pub context_token_budget: usize,

    /// 参考文档下载超时（秒）
    pub fetch_timeout_seconds: u64,

    /// 向量检索服务地址，未配置时跳过向量增强
    pub vector_endpoint: Option<String>,

    /// 向量检索返回的片段数量
    pub vector_top_k: usize,
}

/// 产出物发布配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PublishConfig {
    /// 是否渲染并发布报告产出物
    pub enabled: bool,

    /// 上传端点，未配置时写入本地输出目录
    pub upload_url: Option<String>,

    /// 对外可访问的URL前缀
    pub public_url_base: Option<String>,

    /// 报告落款（编制方）
    pub prepared_by: Option<String>,
}

/// 完成通知配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotifyConfig {
    /// Webhook地址，未配置时不发送通知
    pub webhook_url: Option<String>,

    /// 通知尝试次数
    pub attempts: u32,

    /// 通知重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 单次通知超时（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_path: None,
            output_path: PathBuf::from("./readiness.out"),
            internal_path: PathBuf::from("./.readiness"),
            completion_threshold: 4,
            llm: LLMConfig::default(),
            cache: CacheConfig::default(),
            store: StoreConfig::default(),
            retrieval: RetrievalConfig::default(),
            publish: PublishConfig::default(),
            notify: NotifyConfig::default(),
            force_regenerate: false,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("READINESS_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api-inference.modelscope.cn/v1"),
            model_efficient: String::from("Qwen/Qwen3-Next-80B-A3B-Instruct"),
            model_powerful: String::from("Qwen/Qwen3-235B-A22B-Instruct-2507"),
            max_tokens: 131072,
            temperature: 0.1,
            retry_attempts: 3,
            retry_delay_ms: 5000,
            timeout_seconds: 300,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".readiness/cache"),
            expire_hours: 8760,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".readiness/store"),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            context_token_budget: 4000,
            fetch_timeout_seconds: 30,
            vector_endpoint: None,
            vector_top_k: 5,
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            upload_url: None,
            public_url_base: None,
            prepared_by: None,
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            attempts: 3,
            retry_delay_ms: 2000,
            timeout_seconds: 10,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
