use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, FORM_TSX, stderr, stdout};

#[test]
fn test_extract_reports_namespaces() -> Result<()> {
    let test = CliTest::with_file("src/components/Form.tsx", FORM_TSX)?;
    test.write_file("node_modules/lib/index.js", "t('vendor:key')")?;
    test.write_file("src/.cache/x.ts", "t('hidden')")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Extracted 2 key usage(s) from 1 file(s)"));
    assert!(out.contains("  config   1"));
    assert!(out.contains("  general  1"));
    assert!(test.root().join("translations.db").exists());

    Ok(())
}

#[test]
fn test_keys_json_has_locations() -> Result<()> {
    let test = CliTest::with_file("src/components/Form.tsx", FORM_TSX)?;
    test.run(&["extract"])?;

    let output = test.run(&["keys", "--json"])?;
    assert_eq!(output.status.code(), Some(0));

    let keys: Value = serde_json::from_str(&stdout(&output))?;
    let keys = keys.as_array().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0]["namespace"], "config");
    assert_eq!(keys[0]["key"], "save");
    assert_eq!(keys[0]["filePath"], "src/components/Form.tsx");
    assert_eq!(keys[0]["lineNumber"], 12);
    assert_eq!(keys[0]["usageCount"], 1);
    assert_eq!(keys[0]["referenceValue"], Value::Null);
    assert_eq!(keys[1]["namespace"], "general");
    assert_eq!(keys[1]["key"], "cancel");
    assert_eq!(keys[1]["lineNumber"], 20);

    Ok(())
}

#[test]
fn test_rerun_reflects_removed_usages() -> Result<()> {
    let test = CliTest::with_file("src/lib/a.ts", "t('x')\nt('x')\n")?;
    test.write_file("src/lib/b.ts", "t('y')\n")?;
    test.run(&["extract"])?;

    test.write_file("src/lib/b.ts", "// no keys\n")?;
    test.run(&["extract"])?;

    let output = test.run(&["keys"])?;
    let out = stdout(&output);
    assert!(out.contains("general:x"));
    assert!(out.contains("x2"));
    assert!(!out.contains("general:y"));
    assert!(out.contains("1 extracted key(s)"));

    Ok(())
}

#[test]
fn test_source_root_and_database_flags() -> Result<()> {
    let test = CliTest::with_file("web/src/app/App.tsx", "t('config:title')\n")?;

    let output = test.run(&["extract", "--source-root", "web", "--database", "data/t.db"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 1 key usage(s) from 1 file(s)"));
    assert!(test.root().join("data/t.db").exists());
    assert!(!test.root().join("translations.db").exists());

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::with_file(
        ".tolkrc.json",
        r#"{ "sourceRoot": "./app", "scanPatterns": ["**/*.vue"], "database": "i18n.db" }"#,
    )?;
    test.write_file("app/components/Header.vue", "{{ $t('nav:home') }} {{ t('nav:about') }}\n")?;
    test.write_file("app/components/Footer.tsx", "t('ignored')\n")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    // `$t(` is matched by the plain `t(` pattern too
    assert!(stdout(&output).contains("Extracted 2 key usage(s) from 1 file(s)"));
    assert!(test.root().join("i18n.db").exists());

    Ok(())
}
