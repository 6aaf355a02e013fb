#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(&["readiness-rs"]).unwrap();

        assert!(args.request.is_none());
        assert_eq!(args.output_path, PathBuf::from("./readiness.out"));
        assert!(args.founder.is_none());
        assert!(args.company.is_none());
        assert!(!args.verbose);
        assert!(!args.force_regenerate);
        assert!(!args.no_cache);
        assert!(!args.no_publish);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "-r", "/test/request.json",
            "-o", "/test/output",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.request, Some(PathBuf::from("/test/request.json")));
        assert_eq!(args.output_path, PathBuf::from("/test/output"));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_inline_request_options() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "--founder", "Jane Doe",
            "--company", "Acme Analytics",
            "--description", "B2B data tooling",
            "--reference-url", "https://decks.example.com/acme.pdf",
            "--deal-id", "deal-042",
        ])
        .unwrap();

        assert_eq!(args.founder, Some("Jane Doe".to_string()));
        assert_eq!(args.company, Some("Acme Analytics".to_string()));
        assert_eq!(args.description, Some("B2B data tooling".to_string()));
        assert_eq!(
            args.reference_url,
            Some("https://decks.example.com/acme.pdf".to_string())
        );
        assert_eq!(args.deal_id, Some("deal-042".to_string()));
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "--llm-provider", "openai",
            "--llm-api-key", "test-key",
            "--llm-api-base-url", "https://api.openai.com",
            "--model-efficient", "gpt-3.5-turbo",
            "--model-powerful", "gpt-4",
            "--max-tokens", "2048",
            "--temperature", "0.7",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("openai".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(
            args.llm_api_base_url,
            Some("https://api.openai.com".to_string())
        );
        assert_eq!(args.model_efficient, Some("gpt-3.5-turbo".to_string()));
        assert_eq!(args.model_powerful, Some("gpt-4".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
    }

    #[test]
    fn test_request_spec_from_inline_args() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "--founder", "Jane Doe",
            "--company", "Acme Analytics",
            "--description", "B2B data tooling",
        ])
        .unwrap();

        let spec = args.request_spec().unwrap();

        assert_eq!(spec.founder_name, "Jane Doe");
        assert_eq!(spec.company_name, "Acme Analytics");
        assert_eq!(spec.company_description, "B2B data tooling");
        assert!(spec.reference_url.is_none());
        assert!(spec.deal_id.is_none());
    }

    #[test]
    fn test_request_spec_requires_founder_and_company() {
        let args = Args::try_parse_from(&["readiness-rs"]).unwrap();
        assert!(args.request_spec().is_err());

        let args = Args::try_parse_from(&["readiness-rs", "--founder", "Jane Doe"]).unwrap();
        assert!(args.request_spec().is_err());
    }

    #[test]
    fn test_request_spec_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let request_path = temp_dir.path().join("request.json");

        let request_json = r#"{
  "submitter_id": "user-7",
  "founder_name": "Jane Doe",
  "company_name": "Acme Analytics",
  "company_description": "B2B data tooling",
  "reference_url": "https://decks.example.com/acme.pdf",
  "deal_id": "deal-042",
  "title": "Investment Readiness Report - Acme Analytics"
}"#;
        std::fs::write(&request_path, request_json).unwrap();

        let args = Args::try_parse_from(&[
            "readiness-rs",
            "-r",
            request_path.to_str().unwrap(),
        ])
        .unwrap();

        let spec = args.request_spec().unwrap();

        assert_eq!(spec.submitter_id, Some("user-7".to_string()));
        assert_eq!(spec.founder_name, "Jane Doe");
        assert_eq!(spec.company_name, "Acme Analytics");
        assert_eq!(spec.deal_id, Some("deal-042".to_string()));
    }

    #[test]
    fn test_into_config_basic() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "-o", "/test/output",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.output_path, PathBuf::from("/test/output"));
        assert_eq!(config.cache.cache_dir, config.internal_path.join("cache"));
        assert_eq!(config.store.store_dir, config.internal_path.join("store"));
        assert!(!config.force_regenerate);
        assert!(!config.verbose);
    }

    #[test]
    fn test_into_config_with_overrides() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "--completion-threshold", "7",
            "--force-regenerate",
            "--verbose",
            "--llm-provider", "openai",
            "--model-efficient", "gpt-3.5-turbo",
            "--webhook-url", "https://hooks.example.com/reports",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.completion_threshold, 7);
        assert!(config.force_regenerate);
        assert!(config.verbose);
        assert_eq!(config.llm.provider, crate::config::LLMProvider::OpenAI);
        assert_eq!(config.llm.model_efficient, "gpt-3.5-turbo");
        assert_eq!(
            config.notify.webhook_url,
            Some("https://hooks.example.com/reports".to_string())
        );
    }

    #[test]
    fn test_into_config_no_cache() {
        let args = Args::try_parse_from(&["readiness-rs", "--no-cache"]).unwrap();

        let config = args.into_config();
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_into_config_no_publish() {
        let args = Args::try_parse_from(&["readiness-rs", "--no-publish"]).unwrap();

        let config = args.into_config();
        assert!(!config.publish.enabled);
    }

    #[test]
    fn test_into_config_powerful_falls_back_to_efficient() {
        let args = Args::try_parse_from(&[
            "readiness-rs",
            "--model-efficient", "gpt-3.5-turbo",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.model_powerful, "gpt-3.5-turbo");
    }
}
