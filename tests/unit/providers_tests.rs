/*!
 * Tests for the translation provider implementations
 *
 * Live API tests are marked #[ignore] and only run on demand:
 * `cargo test -- --ignored`
 */

use serde_json::json;

use xctranslate::errors::ProviderError;
use xctranslate::providers::google::GoogleTranslate;
use xctranslate::providers::libretranslate::{LibreTranslate, LibreTranslateRequest, LibreTranslateResponse};
use xctranslate::providers::mock::MockProvider;
use xctranslate::providers::{Provider, TranslationRequest};

/// Test request construction
#[test]
fn test_translation_request_withNew_shouldCarryAllFields() {
    let request = TranslationRequest::new("Hello", "en", "es");

    assert_eq!(request.text, "Hello");
    assert_eq!(request.source_language, "en");
    assert_eq!(request.target_language, "es");
}

/// Test extracting a single-segment Google response
#[test]
fn test_extract_translation_withSingleSegment_shouldReturnText() {
    let body = json!([[["Hola", "Hello", null, null, 10]], null, "en"]);

    let translated = GoogleTranslate::extract_translation(&body).unwrap();
    assert_eq!(translated, "Hola");
}

/// Test that multi-segment responses are concatenated in order
#[test]
fn test_extract_translation_withMultipleSegments_shouldConcatenate() {
    let body = json!([
        [["Hola ", "Hello ", null], ["mundo", "world", null]],
        null,
        "en"
    ]);

    let translated = GoogleTranslate::extract_translation(&body).unwrap();
    assert_eq!(translated, "Hola mundo");
}

/// Test that segments without a leading string are skipped
#[test]
fn test_extract_translation_withNonStringSegment_shouldSkipIt() {
    let body = json!([[["Hola", "Hello"], [null, "x"]], null, "en"]);

    let translated = GoogleTranslate::extract_translation(&body).unwrap();
    assert_eq!(translated, "Hola");
}

/// Test a response body that is not the expected nested array
#[test]
fn test_extract_translation_withUnexpectedShape_shouldFail() {
    let body = json!({"error": "quota exceeded"});

    let result = GoogleTranslate::extract_translation(&body);
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

/// Test a response with an empty segment list
#[test]
fn test_extract_translation_withEmptySegments_shouldFail() {
    let body = json!([[], null, "en"]);

    let result = GoogleTranslate::extract_translation(&body);
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

/// Test LibreTranslate request serialization without an API key
#[test]
fn test_libretranslate_request_withoutApiKey_shouldOmitField() {
    let request = LibreTranslateRequest::new("Hello", "en", "es", None);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"q": "Hello", "source": "en", "target": "es", "format": "text"})
    );
}

/// Test LibreTranslate request serialization with an API key
#[test]
fn test_libretranslate_request_withApiKey_shouldIncludeField() {
    let request = LibreTranslateRequest::new("Hello", "en", "es", Some("secret".to_string()));

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["api_key"], "secret");
    assert_eq!(value["format"], "text");
}

/// Test LibreTranslate response deserialization
#[test]
fn test_libretranslate_response_withTranslatedText_shouldDeserialize() {
    let response: LibreTranslateResponse =
        serde_json::from_str(r#"{"translatedText": "Hola"}"#).unwrap();

    assert_eq!(response.translated_text, "Hola");
}

/// Test that providers are usable through the trait object seam
#[tokio::test]
async fn test_provider_trait_withBoxedMock_shouldTranslate() {
    let provider: Box<dyn Provider> = Box::new(MockProvider::dictionary(&[("Hello", "Hola")]));

    let request = TranslationRequest::new("Hello", "en", "es");
    let translated = provider.translate(&request).await.unwrap();
    assert_eq!(translated, "Hola");
}

/// Test an actual Google Translate call, requires network access
#[tokio::test]
#[ignore]
async fn test_google_translate_withLiveEndpoint_shouldTranslate() {
    let provider = GoogleTranslate::with_default_endpoint(30);

    let request = TranslationRequest::new("Hello world", "en", "es");
    let translated = provider.translate(&request).await.unwrap();

    assert!(!translated.is_empty());
    assert_ne!(translated, "Hello world");
}

/// Test an actual LibreTranslate call against LIBRETRANSLATE_ENDPOINT
#[tokio::test]
#[ignore]
async fn test_libretranslate_withLiveEndpoint_shouldTranslate() {
    let endpoint = match std::env::var("LIBRETRANSLATE_ENDPOINT") {
        Ok(endpoint) => endpoint,
        Err(_) => {
            println!("Skipping test: LIBRETRANSLATE_ENDPOINT not set");
            return;
        }
    };
    let api_key = std::env::var("LIBRETRANSLATE_API_KEY").unwrap_or_default();
    let provider = LibreTranslate::new(endpoint, api_key, 30);

    let request = TranslationRequest::new("Hello world", "en", "es");
    let translated = provider.translate(&request).await.unwrap();

    assert!(!translated.is_empty());
}
