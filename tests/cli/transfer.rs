use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_import_then_export() -> Result<()> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{ "general": { "title": "Title", "cancel": "Cancel" }, "config": { "save": "Save" } }"#,
    )?;
    test.write_file("locales/hu.json", r#"{ "general": { "title": "Cím" } }"#)?;

    let output = test.run(&["import", "locales"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Imported 2 language(s): 4 added, 0 updated"));

    let output = test.run(&["get", "hu", "title"])?;
    assert_eq!(stdout(&output), "Cím\n");

    let output = test.run(&["export", "out"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Exported 4 key(s) to 2 file(s)"));

    let en: Value = serde_json::from_str(&test.read_file("out/en.json")?)?;
    assert_eq!(
        en,
        json!({
            "config": { "save": "Save" },
            "general": { "cancel": "Cancel", "title": "Title" }
        })
    );
    assert!(test.read_file("out/hu.json")?.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_import_rejects_malformed_file() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{ "general": { "count": 3 } }"#)?;

    let output = test.run(&["import", "locales"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("general:count"));

    Ok(())
}
