#[cfg(test)]
mod tests {
    use artstudio::app::gemini_client::{
        repair_request, request_body, strip_code_fences, GatewayError, GeminiClient,
        GenerateRequest, InlineData, API_KEY_ENV, REPAIR_MODEL,
    };

    #[test]
    fn test_generate_without_key_fails_before_network() {
        // An unreachable endpoint proves no request is attempted.
        let client = GeminiClient::with_key(None).with_endpoint("http://127.0.0.1:1");
        let request = GenerateRequest::new("gemini-3-flash-preview", "hello");

        let err = client.generate(&request).unwrap_err();
        assert_eq!(err, GatewayError::MissingApiKey);
    }

    #[test]
    fn test_missing_key_error_names_the_env_var() {
        let message = GatewayError::MissingApiKey.to_string();
        assert!(message.contains(API_KEY_ENV), "message was: {}", message);
    }

    #[test]
    fn test_blank_explicit_key_counts_as_missing() {
        assert!(!GeminiClient::with_key(Some("   ".to_string())).has_key());
        assert!(!GeminiClient::with_key(None).has_key());
        assert!(GeminiClient::with_key(Some("abc".to_string())).has_key());
    }

    #[test]
    fn test_request_body_text_only() {
        let request = GenerateRequest::new("gemini-3-flash-preview", "describe a cat");
        let body = request_body(&request);

        assert_eq!(body["contents"][0]["parts"][0]["text"], "describe a cat");
        assert!(body.get("systemInstruction").is_none());
        assert!(body["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn test_request_body_with_system_instruction() {
        let mut request = GenerateRequest::new("gemini-3-pro-preview", "hi");
        request.system_instruction = Some("You are terse.".to_string());
        let body = request_body(&request);

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are terse."
        );
    }

    #[test]
    fn test_request_body_orders_inline_data_before_text() {
        let mut request = GenerateRequest::new("gemini-2.5-flash-image", "what is this?");
        request.inline_data = Some(InlineData {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        });
        let body = request_body(&request);

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "aGVsbG8=");
        assert_eq!(parts[1]["text"], "what is this?");
    }

    #[test]
    fn test_repair_request_shape() {
        let request = repair_request("- broken: [yaml", false);

        assert_eq!(request.model, REPAIR_MODEL);
        assert!(request.prompt.contains("fix the following YAML"));
        assert!(request.prompt.contains("no markdown fencing"));
        assert!(request.prompt.ends_with("- broken: [yaml"));
        assert!(request.system_instruction.is_some());
        assert!(!request.prompt.contains("Standardize"));
    }

    #[test]
    fn test_repair_request_standardize_adds_field_requirements() {
        let request = repair_request("stuff", true);
        assert!(request.prompt.contains("Standardize"));
        assert!(request.prompt.contains("systemPrompt"));
    }

    #[test]
    fn test_strip_code_fences_plain_text_passes_through() {
        assert_eq!(strip_code_fences("- id: a\n"), "- id: a");
        assert_eq!(strip_code_fences("  hello  "), "hello");
    }

    #[test]
    fn test_strip_code_fences_removes_tagged_fence() {
        let fenced = "```yaml\n- id: a\n  name: A\n```";
        assert_eq!(strip_code_fences(fenced), "- id: a\n  name: A");
    }

    #[test]
    fn test_strip_code_fences_removes_bare_fence() {
        let fenced = "```\ncontent\n```";
        assert_eq!(strip_code_fences(fenced), "content");
    }

    #[test]
    fn test_strip_code_fences_tolerates_missing_closing_fence() {
        let fenced = "```yaml\n- id: a";
        assert_eq!(strip_code_fences(fenced), "- id: a");
    }

    #[test]
    fn test_generate_async_delivers_error_on_channel() {
        let client = GeminiClient::with_key(None);
        let rx = client.generate_async(GenerateRequest::new("gemini-3-flash-preview", "hi"));

        let result = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("worker should answer");
        assert_eq!(result.unwrap_err(), GatewayError::MissingApiKey);
    }
}
