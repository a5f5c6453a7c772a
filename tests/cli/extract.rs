use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, EMPTY_STORE, STORE_PATH, stderr, stdout};

/// Parse the JSON literal out of a store module.
fn store_literal(content: &str) -> Result<Value> {
    let body = content
        .strip_prefix("const translations = ")
        .context("store should start with the declaration")?;
    let body = body
        .strip_suffix(";\nexport default translations;\n")
        .context("store should end with the export statement")?;
    serde_json::from_str(body).context("store literal should be JSON")
}

fn store_keys(content: &str) -> Result<Vec<String>> {
    let literal = store_literal(content)?;
    let map = literal.as_object().context("store literal should be an object")?;
    Ok(map.keys().cloned().collect())
}

#[test]
fn test_missing_frontend_directory() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Please run locale-harvest from the project root (no 'frontend' directory found)

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_adds_keys_from_svelte_and_ts_files() -> Result<()> {
    let test = CliTest::with_store(
        r#"const translations = {
    "hello_world": {
        "it_IT": "Ciao mondo",
        "en_US": "Hello World"
    }
};
export default translations;
"#,
    )?;
    test.write_file(
        "frontend/src/routes/+page.svelte",
        r#"<script lang="ts">
    import { _ } from '$lib/i18n';
</script>

<h1>{_('Hello World')}</h1>
<button on:click={save}>{_( "Save" )}</button>
"#,
    )?;
    test.write_file(
        "frontend/src/lib/api.ts",
        "export const fail = () => toast(_('Network error'));\n",
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === frontend/src/routes/+page.svelte
    Added: save
    === frontend/src/lib/api.ts
    Added: network_error
    === frontend/src/lib/localization.ts
    Total changes: 2
    ✓ Updated frontend/src/lib/localization.ts

    ----- stderr -----
    ");

    let store = store_literal(&test.read_store()?)?;
    assert_eq!(
        store,
        json!({
            "hello_world": { "it_IT": "Ciao mondo", "en_US": "Hello World" },
            "save": {},
            "network_error": {}
        })
    );
    assert_eq!(
        store_keys(&test.read_store()?)?,
        vec!["hello_world", "save", "network_error"]
    );
    Ok(())
}

#[test]
fn test_written_store_layout() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file("frontend/src/App.svelte", "<p>{_('Hello World')}</p>")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_store()?,
        "const translations = {\n    \"hello_world\": {}\n};\nexport default translations;\n"
    );
    Ok(())
}

#[test]
fn test_same_phrase_in_both_quote_styles_adds_one_key() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file(
        "frontend/src/Confirm.svelte",
        r#"<p>{_('Are you sure?')}</p><p>{_("Are you sure?")}</p>"#,
    )?;

    let output = test.command().output()?;

    let out = stdout(&output);
    assert_eq!(out.matches("Added: are_you_sure").count(), 1);
    assert!(out.contains("Total changes: 1\n"));
    assert_eq!(store_keys(&test.read_store()?)?, vec!["are_you_sure"]);
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file("frontend/src/App.svelte", "{_('One')} {_('Two')}")?;

    let first = test.command().output()?;
    assert!(stdout(&first).contains("Total changes: 2"));
    let after_first = test.read_store()?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === frontend/src/App.svelte
    === frontend/src/lib/localization.ts
    No changes to localization.ts

    ----- stderr -----
    ");
    assert_eq!(test.read_store()?, after_first);
    Ok(())
}

#[test]
fn test_existing_entries_are_not_touched() -> Result<()> {
    let original = "const translations = {\"cancel\": {\"en_US\": \"Cancel\", \"it_IT\": \"Annulla\"}};\nexport default translations;\n";
    let test = CliTest::with_store(original)?;
    test.write_file("frontend/src/Dialog.svelte", "{_('Cancel')}")?;

    let output = test.command().output()?;

    assert!(stdout(&output).ends_with("No changes to localization.ts\n"));
    assert_eq!(test.read_store()?, original);
    Ok(())
}

#[test]
fn test_node_modules_are_never_scanned() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file(
        "frontend/node_modules/ui-kit/Button.svelte",
        "{_('Vendored label')}",
    )?;
    test.write_file(
        "frontend/src/node_modules/stub.ts",
        "_('Nested vendored')",
    )?;
    test.write_file("frontend/src/App.svelte", "{_('Own label')}")?;

    let output = test.command().output()?;

    let out = stdout(&output);
    assert!(!out.contains("node_modules"));
    assert_eq!(store_keys(&test.read_store()?)?, vec!["own_label"]);
    Ok(())
}

#[test]
fn test_dry_run() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file("frontend/src/App.svelte", "{_('Draft')}")?;

    assert_cmd_snapshot!(test.extract_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    === frontend/src/App.svelte
    Added: draft
    === frontend/src/lib/localization.ts
    Total changes: 1
    Dry run: localization.ts was not written (run without --dry-run to apply)

    ----- stderr -----
    ");
    assert_eq!(test.read_store()?, EMPTY_STORE);
    Ok(())
}

#[test]
fn test_verbose_reports_exclusions() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file("frontend/node_modules/pkg/index.ts", "")?;

    let output = test.command().arg("--verbose").output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("note: no config file found, using defaults"));
    assert!(err.contains("note: excluded frontend/node_modules"));
    Ok(())
}

#[test]
fn test_custom_frontend_root_and_store() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "web/src/i18n/strings.ts",
        "const translations = {};\nexport default translations;\n",
    )?;
    test.write_file("web/src/App.svelte", "{_('Custom')}")?;

    let output = test
        .extract_command()
        .args(["--frontend-root", "web", "--store", "src/i18n/strings.ts"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Updated web/src/i18n/strings.ts"));
    assert_eq!(
        store_keys(&test.read_file("web/src/i18n/strings.ts")?)?,
        vec!["custom"]
    );
    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "extensions": ["svelte"], "ignores": ["src/legacy/**"] }"#,
    )?;
    test.write_file("frontend/src/App.svelte", "{_('Kept')}")?;
    test.write_file("frontend/src/legacy/Old.svelte", "{_('Legacy')}")?;
    test.write_file("frontend/src/util.ts", "_('Not scanned')")?;

    let output = test.command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("=== ").count(), 1);
    assert_eq!(store_keys(&test.read_store()?)?, vec!["kept"]);
    Ok(())
}

#[test]
fn test_invalid_store_fails() -> Result<()> {
    let test = CliTest::with_store("export default { hello: {} };\n")?;
    test.write_file("frontend/src/App.svelte", "{_('Hello')}")?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse translation store: [PROJECT]/frontend/src/lib/localization.ts: Expected the store to start with `const translations =`
        ");
    });
    assert_eq!(
        test.read_file(STORE_PATH)?,
        "export default { hello: {} };\n"
    );
    Ok(())
}

#[test]
fn test_missing_store_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("frontend/src/App.svelte", "{_('Hello')}")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read translation store"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_store(EMPTY_STORE)?;
    test.write_file(".harvestrc.json", r#"{ "binding": "not valid" }"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'binding' must be a JavaScript identifier"));
    Ok(())
}
