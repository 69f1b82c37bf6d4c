use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};
use serde_json::json;
use tolk::mcp::types::{LanguageParams, TranslationKeyParams, TranslationValueParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn key(language: &str, key: &str) -> Parameters<TranslationKeyParams> {
    Parameters(TranslationKeyParams {
        language: language.to_string(),
        namespace: None,
        key: key.to_string(),
    })
}

fn value(language: &str, key: &str, value: &str) -> Parameters<TranslationValueParams> {
    Parameters(TranslationValueParams {
        language: language.to_string(),
        namespace: None,
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[tokio::test]
async fn test_list_languages() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("hu", "general", "title", "Cím")
        .with_translation("en", "general", "title", "Title");
    let server = fixture.server().unwrap();

    let result = server.list_languages().await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["referenceLanguage"], "en");
    assert_eq!(json_result["languages"], json!(["en", "hu"]));
}

#[tokio::test]
async fn test_get_translations_grouped_by_namespace() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("en", "general", "title", "Title")
        .with_translation("en", "config", "save", "Save")
        .with_translation("hu", "general", "title", "Cím");
    let server = fixture.server().unwrap();

    let result = server
        .get_translations(Parameters(LanguageParams {
            language: "en".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["keyCount"], 2);
    assert_eq!(
        json_result["translations"],
        json!({ "config": { "save": "Save" }, "general": { "title": "Title" } })
    );
}

#[tokio::test]
async fn test_add_then_get_translation() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();

    let result = server
        .add_translation(value("en", "config:save", "Save"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["action"], "added");
    assert_eq!(json_result["namespace"], "config");
    assert_eq!(json_result["key"], "save");

    let result = server.get_translation(key("en", "config:save")).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["value"], "Save");
}

#[tokio::test]
async fn test_explicit_namespace_keeps_colons_in_key() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();

    server
        .add_translation(Parameters(TranslationValueParams {
            language: "en".to_string(),
            namespace: Some("time".to_string()),
            key: "format:short".to_string(),
            value: "HH:mm".to_string(),
        }))
        .await
        .unwrap();

    let result = server.get_translation(key("en", "time:format:short")).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["namespace"], "time");
    assert_eq!(json_result["key"], "format:short");
    assert_eq!(json_result["value"], "HH:mm");
}

#[tokio::test]
async fn test_add_duplicate_is_invalid_params() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("en", "general", "title", "Title");
    let server = fixture.server().unwrap();

    let err = server
        .add_translation(value("en", "title", "Other"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("already exists"));
}

#[tokio::test]
async fn test_update_translation() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("hu", "general", "dark", "Sotet");
    let server = fixture.server().unwrap();

    let result = server
        .update_translation(value("hu", "dark", "Sötét"))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["action"], "updated");

    let result = server.get_translation(key("hu", "dark")).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["value"], "Sötét");
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();

    let err = server
        .update_translation(value("hu", "dark", "Sötét"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("Translation not found"));
}

#[tokio::test]
async fn test_delete_translation() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("en", "general", "title", "Title");
    let server = fixture.server().unwrap();

    let result = server.delete_translation(key("en", "title")).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["action"], "deleted");

    let err = server.get_translation(key("en", "title")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server.delete_translation(key("en", "title")).await.unwrap_err();
    assert!(err.message.contains("Translation not found"));
}

#[tokio::test]
async fn test_invalid_language_code() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();

    let err = server
        .add_translation(value("../../etc", "title", "x"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_invalid_language_code_checked_before_lookup() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();

    let err = server.get_translation(key("e n", "title")).await.unwrap_err();
    assert!(err.message.contains("Language code"));

    let err = server
        .update_translation(value("e n", "title", "x"))
        .await
        .unwrap_err();
    assert!(err.message.contains("Language code"));

    let err = server.delete_translation(key("e n", "title")).await.unwrap_err();
    assert!(err.message.contains("Language code"));
}
