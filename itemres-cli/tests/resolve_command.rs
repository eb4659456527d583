//! Integration tests for the `resolve` and `candidates` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_display_name() {
    let env = TestEnv::new();

    env.resolve("/Noticias")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content/news"))
        .stdout(predicate::str::contains("id: {news}"))
        .stdout(predicate::str::contains("stage: display-name"));
}

#[test]
fn test_resolve_full_path_single_lookup() {
    let env = TestEnv::new();

    env.resolve("/sitecore/content")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content\n"))
        .stdout(predicate::str::contains("stage: direct-lookup"))
        .stdout(predicate::str::contains("lookups: 1"));
}

#[test]
fn test_resolve_encoded_path() {
    let env = TestEnv::new();

    env.resolve("/about%20us")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content/about us"))
        .stdout(predicate::str::contains("via: /sitecore/content/about us"));
}

#[test]
fn test_unresolved_exits_with_semantic_failure() {
    let env = TestEnv::new();

    env.resolve("/nothing/here")
        .arg("--no-site-start")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("node: (none)"))
        .stderr(predicate::str::contains("did not resolve (no matching node)"));
}

#[test]
fn test_site_start_fallback() {
    let env = TestEnv::new();

    env.resolve("/nothing/here")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content/home"))
        .stdout(predicate::str::contains("stage: site-start"));
}

#[test]
fn test_permission_denied() {
    let env = TestEnv::new();

    env.resolve("/Staff")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("permission denied"));

    env.resolve("/Staff")
        .args(["--user", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content/intranet"));
}

#[test]
fn test_wildcard_replaced() {
    let env = TestEnv::new();

    env.resolve("/sitecore/content/products/*")
        .args(["--local-path", "/products/Super Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: /sitecore/content/products/widget"));
}

#[test]
fn test_resolve_json() {
    let env = TestEnv::new();

    let output = env
        .resolve("/Noticias")
        .args(["--format", "json"])
        .output()
        .expect("Failed to run resolve");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(json["node"]["path"], "/sitecore/content/news");
    assert_eq!(json["node"]["display_name"], "Noticias");
    assert_eq!(json["stage"], "display-name");
    assert_eq!(json["permission_denied"], false);
}

#[test]
fn test_unknown_site() {
    let env = TestEnv::new();

    env.resolve("/home")
        .args(["--site", "intranet"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("site 'intranet'"));
}

#[test]
fn test_missing_fixture() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "--tree", "missing.yaml", "/home"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Fixture not found"));
}

#[test]
fn test_invalid_fixture() {
    let env = TestEnv::new();
    let bad = env.write_file("bad.yaml", "tree:\n  name: a/b\n");

    env.command()
        .arg("resolve")
        .arg("--tree")
        .arg(&bad)
        .arg("/home")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("invalid tree fixture"));
}

#[test]
fn test_candidates_order() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("candidates")
        .arg("--tree")
        .arg(&env.fixture)
        .arg("/about%20us")
        .output()
        .expect("Failed to run candidates");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "/about us\titem-path-decoded");
    assert_eq!(lines[1], "/about%20us\titem-path-raw");
    assert_eq!(lines[2], "/sitecore/content/about%20us\tsite-path-raw");
    assert_eq!(lines[3], "/sitecore/content/about us\tsite-path-decoded");
    assert!(lines.iter().skip(4).all(|line| line.ends_with("\tcross-product")));
}

#[test]
fn test_candidates_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("candidates")
        .arg("--tree")
        .arg(&env.fixture)
        .arg("/news")
        .arg("--json")
        .output()
        .expect("Failed to run candidates");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    let first = &json[0];
    assert_eq!(first["path"], "/news");
    assert_eq!(first["source"], "item-path-decoded");
}
