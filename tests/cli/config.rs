//! Tests for `.homecfg.toml` and `--root`.

use crate::support::*;

#[test]
fn test_config_file_paths_and_item() {
    let t = Test::new();
    t.write(
        ".homecfg.toml",
        "template = \"secrets.tpl\"\nconfig_dir = \"devices\"\nvault = \"abc123\"\nitem = \"Nodes\"\n",
    );

    let output = t.create_force("Loft", &[]);
    assert_success(&output);

    assert!(t.path("devices/loft.yaml").is_file());
    assert!(t
        .read("secrets.tpl")
        .contains("loft_encryption_key: \"{{ op://abc123/Nodes/Loft/encryption key }}\""));
    assert!(t.tool_log().contains("op [item] [edit] [Nodes] [--vault] [abc123]"));
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write(".homecfg.toml", "template = [\n");

    let output = t.create_force("Loft", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse");
    assert_eq!(t.tool_log(), "");
}

#[test]
fn test_root_flag() {
    let t = Test::new();
    let repo = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .arg("--root")
        .arg(repo.path())
        .args(["create-device", "Loft", "--force"])
        .output()
        .unwrap();

    assert_success(&output);
    assert!(repo.path().join("esphome/loft.yaml").is_file());
    assert!(t.entries().is_empty());
}
