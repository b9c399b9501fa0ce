use anyhow::Result;

use crate::{CliTest, NL_NL, VI_VN};

#[test]
fn test_check_reports_unfinished_as_warning() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;
    test.write_file("translations/vi_VN.ts", VI_VN)?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(
        out.stdout
            .contains("warning: BluetoothManagement: \"Forget device\"  unfinished")
    );
    assert!(out.stdout.contains("--> ./translations/nl_NL.ts:16:1"));
    assert!(out.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_clean_catalogs() -> Result<()> {
    let test = CliTest::with_file("translations/vi_VN.ts", VI_VN)?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Checked 1 catalog - no issues found\n");
    Ok(())
}

#[test]
fn test_check_numerus_and_empty_are_errors() -> Result<()> {
    let test = CliTest::with_file(
        "shell/translations/nl_NL.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="nl_NL">
<context>
    <name>Shell</name>
    <message numerus="yes">
        <source>%n update(s)</source>
        <translation>
            <numerusform>%n updates</numerusform>
        </translation>
    </message>
    <message>
        <source>Restart</source>
        <translation></translation>
    </message>
</context>
</TS>
"#,
    )?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("numerus-count"));
    assert!(out.stdout.contains("nl_NL expects 2 numerus form(s), found 1"));
    assert!(out.stdout.contains("empty-translation"));
    assert!(out.stdout.contains("2 problems (2 errors, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;

    let out = test.run(&["check", "numerus-count", "placeholder-mismatch"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_disabled_rules_from_config() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;
    test.write_file(".tscatrc.json", r#"{ "disabledRules": ["unfinished"] }"#)?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("unfinished"));
    Ok(())
}

#[test]
fn test_check_unknown_language_and_parse_error() -> Result<()> {
    let test = CliTest::with_file(
        "translations/xx.ts",
        r#"<TS version="2.1" language="xx_YY"></TS>"#,
    )?;
    test.write_file("translations/broken.ts", "<TS version=\"2.1\"><context></TS>")?;
    // TypeScript sources share the extension and are skipped.
    test.write_file("web/app.ts", "export const answer: number = 42;\n")?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"));
    assert!(out.stdout.contains("--> ./translations/broken.ts"));
    assert!(
        out.stdout
            .contains("catalog language 'xx_YY' is not recognized")
    );
    assert!(!out.stdout.contains("app.ts"));
    Ok(())
}

#[test]
fn test_check_path_and_root_arguments() -> Result<()> {
    let test = CliTest::with_file("project/ui/nl_NL.ts", NL_NL)?;
    test.write_file("project/vendor/nl_NL.ts", "<TS><broken></TS>")?;

    let project = test.root().join("project");
    let out = test.run(&[
        "check",
        "--path",
        project.to_str().unwrap(),
        "--root",
        "ui",
        "unfinished",
    ])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("ui/nl_NL.ts:16:1"));
    assert!(!out.stdout.contains("vendor"));
    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", r#"{ "disabledRules": ["nope"] }"#)?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Unknown rule in 'disabledRules'"));
    Ok(())
}
