//! Integration tests for linesift

mod harness;

use harness::{TestTree, run_linesift};

#[test]
fn test_count_report() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "foo\nbar\nfoo2\n");

    let (stdout, _stderr, success) = run_linesift(tree.path(), &["proj", "-r", "+ t foo"]);
    assert!(success, "linesift should succeed");
    assert_eq!(stdout, "proj: 2 lines\n  a.txt: 2 lines\n");
}

#[test]
fn test_show_report_with_exclusion() {
    let tree = TestTree::new();
    tree.add_file("proj/keys.txt", "secret key\npublic data\n");

    let (stdout, _stderr, success) = run_linesift(
        tree.path(),
        &["proj", "-f", "show", "-r", "+ r .*", "-r", "- t secret"],
    );
    assert!(success);
    assert_eq!(stdout, "proj:\n  keys.txt:\n    2 public data\n");
}

#[test]
fn test_nested_count_is_pre_order_and_sorted() {
    let tree = TestTree::new();
    tree.add_file("root/zeta.txt", "x\nx\n");
    tree.add_file("root/alpha/one.txt", "x\ny\n");
    tree.add_file("root/alpha/two.txt", "x\n");
    tree.add_dir("root/empty");

    let (stdout, _stderr, success) = run_linesift(tree.path(), &["root", "-r", "+ t x"]);
    assert!(success);
    assert_eq!(
        stdout,
        "root: 4 lines\n  alpha: 2 lines\n    one.txt: 1 lines\n    two.txt: 1 lines\n  empty: 0 lines\n  zeta.txt: 2 lines\n"
    );
}

#[test]
fn test_no_rules_and_no_terminal_counts_every_line() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "one\ntwo\n\nfour\n");

    let (stdout, _stderr, success) = run_linesift(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj: 4 lines\n  a.txt: 4 lines\n");
}

#[test]
fn test_malformed_only_rule_falls_back_to_match_all() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "one\ntwo\n");

    let (stdout, stderr, success) = run_linesift(tree.path(), &["proj", "-r", "+x"]);
    assert!(success);
    assert_eq!(stdout, "proj: 2 lines\n  a.txt: 2 lines\n");
    assert!(
        stderr.contains("dropping criterion"),
        "should warn about the dropped rule: {}",
        stderr
    );
}

#[test]
fn test_rules_file() {
    let tree = TestTree::new();
    tree.add_file("proj/a.rs", "fn a() {}\n// fn hidden() {}\nfn b() {}\n");
    tree.add_file("rules.txt", "+ r fn \\w+\n\n- t //\n");

    let (stdout, _stderr, success) = run_linesift(
        tree.path(),
        &["proj", "--rules-file", "rules.txt", "-f", "show"],
    );
    assert!(success);
    assert_eq!(stdout, "proj:\n  a.rs:\n    1 fn a() {}\n    3 fn b() {}\n");
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "foo\nbar\n");

    let (stdout, _stderr, success) =
        run_linesift(tree.path(), &["proj", "--json", "-r", "+ t foo"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let lines = value["lines"].as_array().expect("lines array");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "count");
    assert_eq!(lines[0]["name"], "proj");
    assert_eq!(lines[0]["count"], 1);
    assert_eq!(lines[1]["name"], "a.txt");
    assert_eq!(lines[1]["depth"], 1);
}

#[test]
fn test_interactive_session_from_stdin() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "foo\nbar\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_linesift"))
        .args(["proj", "--interactive"])
        .current_dir(tree.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to run linesift");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"1\n+ t bar\n\n2\n2\n3\n4\n")
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Output format set to show"), "{}", stdout);
    assert!(stdout.contains("proj:\n  a.txt:\n    2 bar\n"), "{}", stdout);
    assert!(stdout.contains("Exiting..."));
}
