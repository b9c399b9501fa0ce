use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, THESHELL_NL, THESHELL_VI};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("shell/translations/nl_NL.ts", THESHELL_NL)?;
    test.write_file("statuscenter/BluetoothPane/translations/vi_VN.ts", THESHELL_VI)?;
    Ok(test)
}

#[test]
fn test_check_theshell_catalogs() -> Result<()> {
    let test = project()?;

    let out = test.run(&["check"])?;

    assert_eq!(out.code, Some(1), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("empty-translation"));
    assert!(out.stdout.contains("--> ./shell/translations/nl_NL.ts:66:1"));
    assert!(out.stdout.contains("placeholder-mismatch"));
    assert!(
        out.stdout
            .contains("--> ./statuscenter/BluetoothPane/translations/vi_VN.ts:39:1")
    );
    assert!(!out.stdout.contains("numerus-count"));
    assert!(out.stdout.contains("13 problems (1 error, 12 warnings)"));
    Ok(())
}

#[test]
fn test_stats_theshell_catalogs() -> Result<()> {
    let test = project()?;

    let out = test.run(&["stats", "--json"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    let value: Value = serde_json::from_str(&out.stdout)?;
    let nl = &value[0];
    assert_eq!(nl["language"], "nl_NL");
    assert_eq!(nl["contexts"], 8);
    assert_eq!(nl["messages"], 37);
    assert_eq!(nl["unfinished"], 6);
    assert_eq!(nl["numerus"], 4);
    let vi = &value[1];
    assert_eq!(vi["language"], "vi_VN");
    assert_eq!(vi["messages"], 95);
    assert_eq!(vi["finished"], 90);
    Ok(())
}

#[test]
fn test_lookup_theshell_plural() -> Result<()> {
    let test = project()?;
    let lookup = |n: &str| {
        test.run(&[
            "lookup",
            "--locale",
            "nl_NL",
            "--context",
            "NotificationAppGroup",
            "-n",
            n,
            "+%n notifications collapsed",
        ])
    };

    assert_eq!(lookup("1")?.stdout, "+1 notificatie ingeklapt\n");
    assert_eq!(lookup("4")?.stdout, "+4 notificaties ingeklapt\n");
    Ok(())
}

#[test]
fn test_clean_theshell_catalogs_is_noop() -> Result<()> {
    let test = project()?;

    let out = test.run(&["clean", "--apply"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("No obsolete or vanished messages found"));
    assert_eq!(test.read_file("shell/translations/nl_NL.ts")?, THESHELL_NL);
    Ok(())
}
