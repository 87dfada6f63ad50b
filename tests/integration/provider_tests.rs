//! Adapter dispatch tests
//!
//! Every test goes through `ModelProvider::get_completion` with a scripted
//! vendor double, checking both the returned value and the payload that
//! reached the vendor.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pagescribe::core::prompts::{EXTRACTION_PROMPT, OCR_SYSTEM_PROMPT, consistency_prompt};
    use pagescribe::core::providers::gemini::{GenerateContentResponse, Part};
    use pagescribe::{
        CompletionRequest, GeminiProvider, ModelProvider, ModelResponse, OperationMode,
        ProviderError,
    };
    use serde_json::json;

    use crate::common::fixtures::TEST_MODEL;
    use crate::common::{PageFactory, RecordingGenerator, ResponseFactory};
    use crate::{assert_err, assert_ok};

    fn adapter(mode: OperationMode, generator: &Arc<RecordingGenerator>) -> GeminiProvider {
        GeminiProvider::with_generator(PageFactory::config(), mode, generator.clone())
    }

    // ==================== OCR ====================

    #[tokio::test]
    async fn test_ocr_returns_text_and_usage() {
        let generator = Arc::new(
            RecordingGenerator::new().respond(ResponseFactory::text("# Invoice\n\nTotal: 42", 1200, 85)),
        );
        let provider = adapter(OperationMode::Ocr, &generator);

        let response = assert_ok!(provider.get_completion(PageFactory::ocr().into()).await);

        let result = response.into_completion().expect("completion result");
        assert_eq!(result.content, "# Invoice\n\nTotal: 42");
        assert_eq!(result.input_tokens, 1200);
        assert_eq!(result.output_tokens, 85);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_ocr_payload_without_consistency() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("text", 1, 1)));
        let provider = adapter(OperationMode::Ocr, &generator);

        assert_ok!(provider.get_completion(PageFactory::ocr().into()).await);

        let (model, payload) = generator.last_call().unwrap();
        assert_eq!(model, TEST_MODEL);

        let parts: Vec<&Part> = payload.parts().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some(OCR_SYSTEM_PROMPT));
        let image = parts[1].as_inline_data().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, PageFactory::image().data);
    }

    #[tokio::test]
    async fn test_ocr_payload_with_consistency_prompt() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("text", 1, 1)));
        let provider = adapter(OperationMode::Ocr, &generator);
        let prior = "## Section 2\n\n| a | b |\n|---|---|";

        assert_ok!(provider.get_completion(PageFactory::ocr_following(prior).into()).await);

        let (_, payload) = generator.last_call().unwrap();
        let parts: Vec<&Part> = payload.parts().collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].as_text(), Some(OCR_SYSTEM_PROMPT));
        assert_eq!(parts[1].as_text(), Some(consistency_prompt(prior).as_str()));
        assert!(parts[2].as_inline_data().is_some());
    }

    #[tokio::test]
    async fn test_ocr_prior_page_ignored_without_flag() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("text", 1, 1)));
        let provider = adapter(OperationMode::Ocr, &generator);

        let mut request = PageFactory::ocr();
        request.prior_page = Some("# Previous".to_string());
        assert_ok!(provider.get_completion(request.into()).await);

        let (_, payload) = generator.last_call().unwrap();
        assert_eq!(payload.parts().count(), 2);
    }

    #[tokio::test]
    async fn test_ocr_empty_prior_page_adds_nothing() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("text", 1, 1)));
        let provider = adapter(OperationMode::Ocr, &generator);

        assert_ok!(provider.get_completion(PageFactory::ocr_following("").into()).await);

        let (_, payload) = generator.last_call().unwrap();
        assert_eq!(payload.parts().count(), 2);
    }

    #[tokio::test]
    async fn test_generation_params_translated_to_snake_case() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("text", 1, 1)));
        let provider = adapter(OperationMode::Ocr, &generator);

        assert_ok!(provider.get_completion(PageFactory::ocr().into()).await);

        let (_, payload) = generator.last_call().unwrap();
        let config = &payload.generation_config;
        assert_eq!(config.get("temperature"), Some(&json!(0)));
        assert_eq!(config.get("max_output_tokens"), Some(&json!(8192)));
        assert_eq!(config.get("top_p"), Some(&json!(0.95)));
        assert!(config.get("maxOutputTokens").is_none());
        assert!(config.response_mime_type().is_none());
    }

    #[tokio::test]
    async fn test_missing_usage_reports_zero() {
        let generator = Arc::new(RecordingGenerator::new().respond(GenerateContentResponse::from_text("page")));
        let provider = adapter(OperationMode::Ocr, &generator);

        let response = assert_ok!(provider.get_completion(PageFactory::ocr().into()).await);
        assert_eq!(response.usage().input_tokens, 0);
        assert_eq!(response.usage().output_tokens, 0);
    }

    #[tokio::test]
    async fn test_ocr_without_candidates_is_empty_text() {
        let generator = Arc::new(RecordingGenerator::new().respond(GenerateContentResponse::default()));
        let provider = adapter(OperationMode::Ocr, &generator);

        let response = assert_ok!(provider.get_completion(PageFactory::ocr().into()).await);
        assert_eq!(response.into_completion().unwrap().content, "");
    }

    // ==================== Extraction ====================

    #[tokio::test]
    async fn test_extraction_parses_json() {
        let body = r#"{"invoiceNumber": "INV-7", "totalAmount": 42.5, "lineItems": []}"#;
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text(body, 900, 40)));
        let provider = adapter(OperationMode::Extraction, &generator);

        let response = assert_ok!(provider.get_completion(PageFactory::extraction().into()).await);

        match response {
            ModelResponse::Extraction(result) => {
                assert_eq!(
                    result.extracted,
                    json!({"invoiceNumber": "INV-7", "totalAmount": 42.5, "lineItems": []})
                );
                assert_eq!(result.input_tokens, 900);
                assert_eq!(result.output_tokens, 40);
            }
            other => panic!("Expected extraction result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extraction_payload_carries_schema_verbatim() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("{}", 1, 1)));
        let provider = adapter(OperationMode::Extraction, &generator);

        assert_ok!(provider.get_completion(PageFactory::extraction().into()).await);

        let (_, payload) = generator.last_call().unwrap();
        let parts: Vec<&Part> = payload.parts().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some(EXTRACTION_PROMPT));
        assert!(parts[1].as_inline_data().is_some());

        let config = &payload.generation_config;
        assert_eq!(config.response_mime_type(), Some("application/json"));
        // Schema property names are the caller's, not translated
        assert_eq!(config.response_schema(), Some(&PageFactory::invoice_schema()));
        assert_eq!(config.get("max_output_tokens"), Some(&json!(8192)));
    }

    #[tokio::test]
    async fn test_extraction_rejects_invalid_json() {
        let generator = Arc::new(
            RecordingGenerator::new().respond(ResponseFactory::text("Here is the data: {invoice", 10, 5)),
        );
        let provider = adapter(OperationMode::Extraction, &generator);

        let err = assert_err!(provider.get_completion(PageFactory::extraction().into()).await);
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_extraction_rejects_null_reply() {
        let generator = Arc::new(RecordingGenerator::new().respond(ResponseFactory::text("null", 900, 1)));
        let provider = adapter(OperationMode::Extraction, &generator);

        let err = assert_err!(provider.get_completion(PageFactory::extraction().into()).await);
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
        assert!(!err.is_vendor_error());
    }

    #[tokio::test]
    async fn test_extraction_rejects_empty_text() {
        let generator = Arc::new(RecordingGenerator::new().respond(GenerateContentResponse::default()));
        let provider = adapter(OperationMode::Extraction, &generator);

        let err = assert_err!(provider.get_completion(PageFactory::extraction().into()).await);
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    // ==================== Dispatch and failures ====================

    #[tokio::test]
    async fn test_mode_mismatch_makes_no_vendor_call() {
        let generator = Arc::new(RecordingGenerator::new());

        let ocr = adapter(OperationMode::Ocr, &generator);
        let err = assert_err!(ocr.get_completion(PageFactory::extraction().into()).await);
        match err {
            ProviderError::UnsupportedMode { mode, .. } => assert_eq!(mode, "ocr"),
            other => panic!("Expected UnsupportedMode, got {:?}", other),
        }

        let extraction = adapter(OperationMode::Extraction, &generator);
        let err = assert_err!(extraction.get_completion(PageFactory::ocr().into()).await);
        assert!(matches!(err, ProviderError::UnsupportedMode { .. }));

        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_vendor_error_propagates_unchanged() {
        let generator = Arc::new(
            RecordingGenerator::new().fail(ProviderError::rate_limit("gemini", Some(37))),
        );
        let provider = adapter(OperationMode::Ocr, &generator);

        let err = assert_err!(provider.get_completion(PageFactory::ocr().into()).await);
        match err {
            ProviderError::RateLimit { retry_after, .. } => assert_eq!(retry_after, Some(37)),
            other => panic!("Expected RateLimit, got {:?}", other),
        }
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_adapter_serves_concurrent_pages() {
        let mut generator = RecordingGenerator::new();
        for page in 0..4 {
            generator = generator.respond(ResponseFactory::text(&format!("page {}", page), 10, 2));
        }
        let generator = Arc::new(generator);
        let provider = Arc::new(adapter(OperationMode::Ocr, &generator));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = provider.clone();
                tokio::spawn(async move {
                    provider
                        .get_completion(CompletionRequest::new(PageFactory::image()).into())
                        .await
                })
            })
            .collect();

        for handle in handles {
            let response = handle.await.unwrap();
            assert!(response.unwrap().into_completion().unwrap().content.starts_with("page "));
        }
        assert_eq!(generator.call_count(), 4);
    }
}
