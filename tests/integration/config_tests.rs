//! Configuration loading tests
//!
//! File loading, environment overlays, and building a working adapter from
//! the loaded configuration.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use pagescribe::config::LogFormat;
    use pagescribe::{AppError, Config, GeminiProvider, ModelProvider, OperationMode};
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/pagescribe.example.yaml");
        let config = Config::from_file(path).await.unwrap();

        assert_eq!(config.mode, OperationMode::Ocr);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.generation_params["maxOutputTokens"], json!(8192));
        // The example leaves the key to the environment
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_file_then_env_builds_provider() {
        let file = write_config(
            r#"
gemini:
  api_key: "from-file"
  generation_params:
    temperature: 0.1
    topK: 40
mode: ocr
"#,
        );
        let mut config = Config::from_file(file.path()).await.unwrap();

        let vars: HashMap<&str, &str> = [
            ("GOOGLE_API_KEY", "from-env"),
            ("PAGESCRIBE_MODE", "extract"),
            ("PAGESCRIBE_MODEL", "gemini-1.5-flash"),
        ]
        .into_iter()
        .collect();
        config
            .apply_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        config.validate().unwrap();

        assert_eq!(config.gemini.api_key, "from-env");
        assert_eq!(config.mode, OperationMode::Extraction);

        let provider = GeminiProvider::new(config.gemini.clone(), config.mode).unwrap();
        assert_eq!(provider.mode(), OperationMode::Extraction);
        assert_eq!(provider.model(), "gemini-1.5-flash");
        assert_eq!(provider.generation_config().get("top_k"), Some(&json!(40)));
    }

    #[test]
    fn test_gemini_key_preferred_over_google_key() {
        let vars: HashMap<&str, &str> = [("GEMINI_API_KEY", "gemini"), ("GOOGLE_API_KEY", "google")]
            .into_iter()
            .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.gemini.api_key, "gemini");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_missing_key_in_env() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let mut config = Config::from_yaml("gemini:\n  api_key: k\n").unwrap();
        let err = config
            .apply_lookup(|key| (key == "PAGESCRIBE_LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config =
            Config::from_yaml("gemini:\n  api_key: k\n  base_url: \"not a url\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    }
}
