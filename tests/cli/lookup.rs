use anyhow::Result;

use crate::{CliTest, NL_NL, VI_VN};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;
    test.write_file("translations/vi_VN.ts", VI_VN)?;
    Ok(test)
}

#[test]
fn test_lookup_finished_translation() -> Result<()> {
    let test = project()?;

    let out = test.run(&[
        "lookup",
        "--locale",
        "nl_NL",
        "--context",
        "BluetoothManagement",
        "Pair with %1",
    ])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "Koppelen met %1\n");
    Ok(())
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() -> Result<()> {
    let test = project()?;

    let out = test.run(&[
        "lookup",
        "--locale",
        "nl_NL",
        "--context",
        "BluetoothManagement",
        "Forget device",
    ])?;

    assert_eq!(out.stdout, "Forget device\n");
    Ok(())
}

#[test]
fn test_lookup_plural_forms() -> Result<()> {
    let test = project()?;
    let lookup = |locale: &str, n: &str| {
        test.run(&[
            "lookup",
            "--locale",
            locale,
            "--context",
            "BluetoothManagement",
            "-n",
            n,
            "%n device(s) found",
        ])
    };

    assert_eq!(lookup("nl_NL", "1")?.stdout, "1 apparaat gevonden\n");
    assert_eq!(lookup("nl_NL", "3")?.stdout, "3 apparaten gevonden\n");
    assert_eq!(lookup("vi_VN", "3")?.stdout, "Tìm thấy 3 thiết bị\n");
    Ok(())
}

#[test]
fn test_lookup_negotiates_same_language() -> Result<()> {
    let test = project()?;

    let out = test.run(&[
        "lookup",
        "--locale",
        "nl_BE",
        "--context",
        "BluetoothManagement",
        "-v",
        "Pair with %1",
    ])?;

    assert_eq!(out.stdout, "Koppelen met %1\n");
    assert!(out.stderr.contains("note: resolved with nl_NL"));
    Ok(())
}

#[test]
fn test_lookup_uses_environment_locale() -> Result<()> {
    let test = project()?;

    let out = test
        .command()
        .env("LANG", "vi_VN.UTF-8")
        .args(["lookup", "--context", "BluetoothManagement", "Pair with %1"])
        .output()?;

    assert_eq!(String::from_utf8(out.stdout)?, "Ghép nối với %1\n");
    Ok(())
}

#[test]
fn test_lookup_config_fallback_locale() -> Result<()> {
    let test = project()?;
    test.write_file(".tscatrc.json", r#"{ "fallbackLocale": "nl_NL" }"#)?;

    let out = test.run(&["lookup", "--context", "BluetoothManagement", "Bluetooth"])?;

    assert_eq!(out.stdout, "Bluetooth\n");
    let out = test.run(&["lookup", "--context", "BluetoothManagement", "Pair with %1"])?;
    assert_eq!(out.stdout, "Koppelen met %1\n");
    Ok(())
}

#[test]
fn test_lookup_without_catalog_returns_source() -> Result<()> {
    let test = project()?;

    let out = test.run(&[
        "lookup",
        "--locale",
        "de_DE",
        "--context",
        "BluetoothManagement",
        "Pair with %1",
    ])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Pair with %1\n");
    Ok(())
}

#[test]
fn test_lookup_invalid_locale() -> Result<()> {
    let test = project()?;

    let out = test.run(&["lookup", "--locale", "???", "--context", "A", "B"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Invalid --locale"));
    Ok(())
}
