#[cfg(test)]
mod tests {
    use crate::config::{
        CacheConfig, Config, LLMConfig, LLMProvider, NotifyConfig, PublishConfig, RetrievalConfig,
        StoreConfig,
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.request_path.is_none());
        assert_eq!(config.output_path, PathBuf::from("./readiness.out"));
        assert_eq!(config.internal_path, PathBuf::from("./.readiness"));
        assert_eq!(config.completion_threshold, 4);
        assert!(!config.force_regenerate);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "mistral".parse::<LLMProvider>().unwrap(),
            LLMProvider::Mistral
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "gemini".parse::<LLMProvider>().unwrap(),
            LLMProvider::Gemini
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Mistral.to_string(), "mistral");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Gemini.to_string(), "gemini");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model_efficient.is_empty());
        assert!(!config.model_powerful.is_empty());
        assert_eq!(config.max_tokens, 131072);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delay_ms, 5000);
        assert_eq!(config.timeout_seconds, 300);
    }

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();

        assert!(config.enabled);
        assert_eq!(config.cache_dir, PathBuf::from(".readiness/cache"));
        assert_eq!(config.expire_hours, 8760); // 1 year
    }

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.store_dir, PathBuf::from(".readiness/store"));
    }

    #[test]
    fn test_retrieval_config_default() {
        let config = RetrievalConfig::default();

        assert_eq!(config.context_token_budget, 4000);
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert!(config.vector_endpoint.is_none());
        assert_eq!(config.vector_top_k, 5);
    }

    #[test]
    fn test_publish_config_default() {
        let config = PublishConfig::default();

        assert!(config.enabled);
        assert!(config.upload_url.is_none());
        assert!(config.public_url_base.is_none());
        assert!(config.prepared_by.is_none());
    }

    #[test]
    fn test_notify_config_default() {
        let config = NotifyConfig::default();

        assert!(config.webhook_url.is_none());
        assert_eq!(config.attempts, 3);
        assert_eq!(config.retry_delay_ms, 2000);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("readiness.toml");

        let config_content = r#"output_path = "./out"
internal_path = "./.work"
completion_threshold = 7
force_regenerate = false
verbose = true

[llm]
provider = "openai"
api_key = "test-key"
api_base_url = "https://api.example.com/v1"
model_efficient = "efficient-model"
model_powerful = "powerful-model"
max_tokens = 8192
temperature = 0.2
retry_attempts = 2
retry_delay_ms = 100
timeout_seconds = 30

[cache]
enabled = false
cache_dir = "./.work/cache"
expire_hours = 24

[store]
store_dir = "./.work/store"

[retrieval]
context_token_budget = 2000
fetch_timeout_seconds = 5
vector_top_k = 3

[publish]
enabled = false

[notify]
attempts = 1
retry_delay_ms = 50
timeout_seconds = 5
"#;

        std::fs::write(&config_path, config_content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert_eq!(config.output_path, PathBuf::from("./out"));
        assert_eq!(config.completion_threshold, 7);
        assert!(config.verbose);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.retry_attempts, 2);
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.expire_hours, 24);
        assert_eq!(config.store.store_dir, PathBuf::from("./.work/store"));
        assert_eq!(config.retrieval.context_token_budget, 2000);
        assert_eq!(config.retrieval.vector_top_k, 3);
        assert!(!config.publish.enabled);
        assert_eq!(config.notify.attempts, 1);
    }

    #[test]
    fn test_config_from_missing_file() {
        let path = PathBuf::from("/nonexistent/readiness.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_config_fields() {
        let mut config = Config::default();

        config.completion_threshold = 7;
        config.force_regenerate = true;
        config.verbose = true;
        config.retrieval.vector_endpoint = Some("https://vectors.example.com".to_string());
        config.notify.webhook_url = Some("https://hooks.example.com/reports".to_string());

        assert_eq!(config.completion_threshold, 7);
        assert!(config.force_regenerate);
        assert!(config.verbose);
        assert!(config.retrieval.vector_endpoint.is_some());
        assert!(config.notify.webhook_url.is_some());
    }
}
