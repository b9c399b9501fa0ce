use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, NL_NL, VI_VN};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;
    test.write_file("translations/vi_VN.ts", VI_VN)?;

    let out = test.run(&["stats"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    let lines: Vec<&str> = out.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Catalog"));
    assert!(lines[1].starts_with("./translations/nl_NL.ts"));
    assert!(lines[1].contains("nl_NL"));
    assert!(lines[1].ends_with("75.0%"));
    assert!(lines[2].ends_with("100.0%"));
    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;

    let out = test.run(&["stats", "--json"])?;

    assert_eq!(out.code, Some(0));
    let value: Value = serde_json::from_str(&out.stdout)?;
    let nl = &value[0];
    assert_eq!(nl["language"], "nl_NL");
    assert_eq!(nl["contexts"], 1);
    assert_eq!(nl["messages"], 5);
    assert_eq!(nl["finished"], 3);
    assert_eq!(nl["unfinished"], 1);
    assert_eq!(nl["retired"], 1);
    assert_eq!(nl["numerus"], 1);
    assert_eq!(nl["completion"], 75.0);
    Ok(())
}

#[test]
fn test_stats_json_keeps_parse_errors_off_stdout() -> Result<()> {
    let test = CliTest::with_file("translations/nl_NL.ts", NL_NL)?;
    test.write_file("translations/broken.ts", "<TS><context></TS>")?;

    let out = test.run(&["stats", "--json"])?;

    assert_eq!(out.code, Some(1));
    let value: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert!(out.stderr.contains("parse-error"));
    Ok(())
}
