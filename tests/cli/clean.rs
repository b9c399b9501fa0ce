use anyhow::Result;

use crate::{CliTest, NL_NL, VI_VN};

#[test]
fn test_clean_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;

    let out = test.run(&["clean"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(
        out.stdout
            .contains("./translations/nl_NL.ts:29  BluetoothManagement: \"Scanning…\" (vanished)")
    );
    assert!(out.stdout.contains("Would remove 1 message in 1 file."));
    assert_eq!(test.read_file("translations/nl_NL.ts")?, NL_NL);
    Ok(())
}

#[test]
fn test_clean_apply_rewrites_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;

    let out = test.run(&["clean", "--apply"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Removed 1 message in 1 file."));

    let content = test.read_file("translations/nl_NL.ts")?;
    assert!(!content.contains("Scanning"));
    assert!(content.contains("<translation type=\"unfinished\"></translation>"));
    assert!(content.contains("<numerusform>%n apparaten gevonden</numerusform>"));

    // Running again finds nothing left to remove.
    let out = test.run(&["clean"])?;
    assert!(out.stdout.contains("No obsolete or vanished messages found"));
    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("translations/vi_VN.ts", VI_VN)?;

    let out = test.run(&["clean", "--apply"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("No obsolete or vanished messages found"));
    assert_eq!(test.read_file("translations/vi_VN.ts")?, VI_VN);
    Ok(())
}

const VARIANTS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="nl_NL">
<context>
    <name>Toolbar</name>
    <message>
        <source>Settings</source>
        <translation variants="yes">
            <lengthvariant>Instellingen</lengthvariant>
            <lengthvariant>Inst.</lengthvariant>
        </translation>
    </message>
    <message>
        <source>Refresh</source>
        <translation type="vanished">Vernieuwen</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_apply_keeps_length_variants() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", VARIANTS)?;

    let out = test.run(&["clean", "--apply"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    let content = test.read_file("translations/nl_NL.ts")?;
    assert!(!content.contains("Refresh"));
    assert!(content.contains("<translation variants=\"yes\">"));
    assert!(content.contains("<lengthvariant>Instellingen</lengthvariant>"));
    assert!(content.contains("<lengthvariant>Inst.</lengthvariant>"));
    Ok(())
}

#[test]
fn test_clean_apply_refuses_lossy_rewrite() -> Result<()> {
    let lossy = VARIANTS.replace(
        "<source>Settings</source>",
        "<source>Settings</source>\n        <extra-po-flags>no-wrap</extra-po-flags>",
    );
    let test = CliTest::with_file("translations/nl_NL.ts", &lossy)?;

    // The preview still works.
    let out = test.run(&["clean"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Would remove 1 message in 1 file."));

    let out = test.run(&["clean", "--apply"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains(
        "Refusing to rewrite ./translations/nl_NL.ts: it contains content that would be lost (<extra-po-flags>)"
    ));
    assert_eq!(test.read_file("translations/nl_NL.ts")?, lossy);
    Ok(())
}
