use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tolk::core::Status;
use tolk::mcp::types::{GetStatusParams, ListExtractedKeysParams};

use crate::{FORM_TSX, McpTestFixture, extract_tool_result_json};

fn list_params(
    namespace: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ListExtractedKeysParams> {
    Parameters(ListExtractedKeysParams {
        namespace: namespace.map(String::from),
        limit,
        offset,
    })
}

fn status_params(language: &str, status: Option<Status>) -> Parameters<GetStatusParams> {
    Parameters(GetStatusParams {
        language: language.to_string(),
        namespace: None,
        status,
        limit: None,
        offset: None,
    })
}

#[tokio::test]
async fn test_extract_keys_summary() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_source("src/components/Form.tsx", FORM_TSX).unwrap();
    fixture
        .write_source("src/components/Header.jsx", "const title = t('config:title')\n")
        .unwrap();
    let server = fixture.server().unwrap();

    let result = server.extract_keys().await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesScanned"], 2);
    assert_eq!(json_result["keysExtracted"], 3);
    assert_eq!(json_result["failedCount"], 0);
    assert_eq!(json_result["byNamespace"], json!({ "config": 2, "general": 1 }));
}

#[tokio::test]
async fn test_list_extracted_keys_with_reference_values() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("en", "general", "cancel", "Cancel");
    fixture.write_source("src/components/Form.tsx", FORM_TSX).unwrap();
    let server = fixture.server().unwrap();
    server.extract_keys().await.unwrap();

    let result = server
        .list_extracted_keys(list_params(None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["namespace"], "config");
    assert_eq!(items[0]["key"], "save");
    assert_eq!(items[0]["lineNumber"], 2);
    assert_eq!(items[0]["referenceValue"], serde_json::Value::Null);
    assert_eq!(items[1]["key"], "cancel");
    assert_eq!(items[1]["lineNumber"], 3);
    assert_eq!(items[1]["filePath"], "src/components/Form.tsx");
    assert_eq!(items[1]["referenceValue"], "Cancel");
    assert_eq!(json_result["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_list_extracted_keys_pagination_and_filter() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_source("src/lib/a.ts", "t('a')\nt('b')\nt('c')\nt('other:d')\n")
        .unwrap();
    let server = fixture.server().unwrap();
    server.extract_keys().await.unwrap();

    let result = server
        .list_extracted_keys(list_params(Some("general"), Some(2), Some(0)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_eq!(json_result["pagination"]["hasMore"], true);

    let result = server
        .list_extracted_keys(list_params(Some("general"), Some(2), Some(2)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"][0]["key"], "c");
    assert_eq!(json_result["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_get_status_end_to_end() {
    let fixture = McpTestFixture::new()
        .unwrap()
        .with_translation("en", "general", "cancel", "Cancel")
        .with_translation("hu", "legacy", "old", "Régi");
    fixture.write_source("src/components/Form.tsx", FORM_TSX).unwrap();
    let server = fixture.server().unwrap();
    server.extract_keys().await.unwrap();

    let result = server.get_status(status_params("en", None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["referenceLanguage"], "en");
    assert_eq!(json_result["items"][0]["key"], "save");
    assert_eq!(json_result["items"][0]["status"], "newInCode");
    assert_eq!(json_result["items"][1]["key"], "cancel");
    assert_eq!(json_result["items"][1]["status"], "normal");

    let result = server
        .get_status(status_params("hu", Some(Status::Missing)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["namespace"], "general");
    assert_eq!(json_result["items"][0]["key"], "cancel");
    assert_eq!(json_result["items"][0]["value"], "");
    assert_eq!(
        json_result["totals"],
        json!({ "normal": 0, "missing": 1, "newInCode": 1, "notUsed": 1 })
    );
}

#[tokio::test]
async fn test_extract_keys_missing_source_root_is_internal_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = fixture.server().unwrap();
    std::fs::remove_dir_all(fixture.root_path()).unwrap();

    let err = server.extract_keys().await.unwrap_err();
    assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("Extraction failed"));
}

#[tokio::test]
async fn test_extract_keys_scans_non_utf8_file() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::create_dir_all(fixture.root_path().join("src/lib")).unwrap();
    std::fs::write(
        fixture.root_path().join("src/lib/menu.js"),
        b"// Men\xe9s\nt('config:save')",
    )
    .unwrap();
    let server = fixture.server().unwrap();

    let result = server.extract_keys().await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["keysExtracted"], 1);
    assert_eq!(json_result["byNamespace"], json!({ "config": 1 }));
}
