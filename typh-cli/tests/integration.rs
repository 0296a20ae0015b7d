use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::tempdir;

fn typh() -> Command {
    Command::new(env!("CARGO_BIN_EXE_typh"))
}

#[test]
fn catalog_builds_generated_module_and_reports_count() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("webfonts.json");
    fs::write(
        &source,
        r#"{ "items": [
            { "family": "Lato", "variants": ["regular"], "category": "sans-serif" },
            { "family": "Inter", "variants": ["regular"], "category": "sans-serif" }
        ] }"#,
    )
    .expect("write source");

    let out = tmp.path().join("generated").join("catalog.rs");
    let output = typh()
        .arg("catalog")
        .arg(&source)
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run typh");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wrote 2 families"), "stdout: {stdout}");

    let module = fs::read_to_string(&out).expect("generated module exists");
    assert!(module.contains("pub static CATALOG"));
    let inter = module.find("Inter").expect("Inter present");
    let lato = module.find("Lato").expect("Lato present");
    assert!(inter < lato, "families should be sorted");
}

#[test]
fn catalog_exits_nonzero_on_missing_source() {
    let tmp = tempdir().expect("tempdir");
    let output = typh()
        .arg("catalog")
        .arg(tmp.path().join("absent.json"))
        .arg("--out")
        .arg(tmp.path().join("catalog.rs"))
        .output()
        .expect("run typh");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading source catalog"), "stderr: {stderr}");
}

#[test]
fn catalog_exits_nonzero_on_malformed_source() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("webfonts.json");
    fs::write(&source, r#"{ "kind": "no list here" }"#).expect("write source");

    let output = typh()
        .arg("catalog")
        .arg(&source)
        .arg("--out")
        .arg(tmp.path().join("catalog.rs"))
        .output()
        .expect("run typh");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("items"), "stderr: {stderr}");
}

#[test]
fn family_extracts_alias_from_file() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("raw.json");
    fs::write(
        &input,
        r#"{ "shift": 5, "arr": ["{typography.font}", "Roboto"] }"#,
    )
    .expect("write input");

    let output = typh().arg("family").arg(&input).output().expect("run typh");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "{typography.font}");
}

#[test]
fn scalar_reads_stdin_and_emits_json() {
    let mut child = typh()
        .args(["scalar", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn typh");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(br#"{ "value": 14, "shift": 5 }"#)
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait for typh");
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(parsed["value"], "14");
}

#[test]
fn family_not_found_is_silent_success() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("raw.json");
    fs::write(&input, r#"{ "hash": 3, "count": 2 }"#).expect("write input");

    let output = typh().arg("family").arg(&input).output().expect("run typh");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
