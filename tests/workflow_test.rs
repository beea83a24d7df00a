//! Workflow Integration Tests
//!
//! FormListWorkflow の統合テスト

mod common;

use clap::Parser;
use formlist::adapter::config::Config;
use formlist::driver::cli::Args;
use formlist::driver::workflow::{BatchSummary, FormListWorkflow};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use common::{write_corrupt, write_encrypted, write_text_form};

fn run(dir: &Path, extra: &[&str]) -> (BatchSummary, String) {
    let mut argv = vec!["formlist".to_string(), dir.to_string_lossy().to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    let args = Args::parse_from(argv);

    let workflow = FormListWorkflow::new(Config::default());
    let mut out = Vec::new();
    let summary = workflow
        .execute(&args, &mut out)
        .expect("workflow should succeed");

    (summary, String::from_utf8(out).unwrap())
}

fn field_lines(output: &str) -> usize {
    output.lines().filter(|l| l.starts_with("  Text: ")).count()
}

/// PDF names in the order the filesystem enumerates them
fn enumeration_order(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".pdf"))
        .collect()
}

#[test]
fn test_no_pdf_files_produces_no_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();

    let (summary, output) = run(temp_dir.path(), &[]);

    assert_eq!(summary, BatchSummary { files: 0, failed: 0 });
    assert!(output.is_empty(), "unexpected output: {}", output);
}

#[test]
fn test_small_form_lists_every_field() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "small.pdf", 3);

    let (summary, output) = run(temp_dir.path(), &[]);

    assert_eq!(summary, BatchSummary { files: 1, failed: 0 });
    assert!(output.starts_with("📄 small.pdf (3 fields)\n"));
    assert_eq!(field_lines(&output), 3);
    assert!(output.contains("  Text: \"field0\"\n"));
    assert!(output.contains("  Text: \"field2\"\n"));
    assert!(!output.contains("... and"));
}

#[test]
fn test_exactly_twenty_fields_has_no_remainder() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "twenty.pdf", 20);

    let (_, output) = run(temp_dir.path(), &[]);

    assert_eq!(field_lines(&output), 20);
    assert!(!output.contains("... and"));
}

#[test]
fn test_large_form_is_truncated() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "large.pdf", 27);

    let (_, output) = run(temp_dir.path(), &[]);

    assert!(output.starts_with("📄 large.pdf (27 fields)\n"));
    assert_eq!(field_lines(&output), 20);
    assert!(output.contains("  Text: \"field19\"\n"));
    assert!(!output.contains("\"field20\""));
    assert!(output.contains("  ... and 7 more\n"));
}

#[test]
fn test_max_fields_flag() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "large.pdf", 10);

    let (_, output) = run(temp_dir.path(), &["-n", "4"]);

    assert_eq!(field_lines(&output), 4);
    assert!(output.contains("  ... and 6 more\n"));
}

#[test]
fn test_corrupt_file_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    write_corrupt(temp_dir.path(), "broken.pdf");
    write_text_form(temp_dir.path(), "good.pdf", 2);

    let (summary, output) = run(temp_dir.path(), &[]);

    assert_eq!(summary, BatchSummary { files: 2, failed: 1 });
    assert!(output.contains("❌ broken.pdf: "));
    assert!(output.contains("📄 good.pdf (2 fields)\n"));
}

#[test]
fn test_encrypted_file_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    write_encrypted(temp_dir.path(), "locked.pdf");
    write_text_form(temp_dir.path(), "open.pdf", 2);

    let (summary, output) = run(temp_dir.path(), &[]);

    assert_eq!(summary, BatchSummary { files: 2, failed: 1 });
    assert!(output.contains("❌ locked.pdf: document is encrypted\n"), "{}", output);
    assert!(output.contains("📄 open.pdf (2 fields)\n"), "{}", output);
}

#[test]
fn test_reports_follow_enumeration_order() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "valid.pdf", 1);
    write_corrupt(temp_dir.path(), "corrupt.pdf");

    let (_, output) = run(temp_dir.path(), &[]);

    let reported: Vec<String> = output
        .lines()
        .filter_map(|line| {
            line.strip_prefix("📄 ")
                .map(|rest| rest.split(" (").next().unwrap_or("").to_string())
                .or_else(|| {
                    line.strip_prefix("❌ ")
                        .map(|rest| rest.split(": ").next().unwrap_or("").to_string())
                })
        })
        .collect();

    assert_eq!(reported, enumeration_order(temp_dir.path()));
}

#[test]
fn test_sort_flag_orders_naturally() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "form10.pdf", 1);
    write_text_form(temp_dir.path(), "form2.pdf", 1);
    write_text_form(temp_dir.path(), "form1.pdf", 1);

    let (_, output) = run(temp_dir.path(), &["--sort"]);

    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("📄 ")).collect();
    assert_eq!(
        headers,
        vec![
            "📄 form1.pdf (1 field)",
            "📄 form2.pdf (1 field)",
            "📄 form10.pdf (1 field)",
        ]
    );
}

#[test]
fn test_recursive_flag() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    write_text_form(&sub, "inner.pdf", 1);

    let (flat, _) = run(temp_dir.path(), &[]);
    let (deep, output) = run(temp_dir.path(), &["--recursive"]);

    assert_eq!(flat.files, 0);
    assert_eq!(deep.files, 1);
    let expected = format!(
        "📄 {} (1 field)",
        Path::new("nested").join("inner.pdf").display()
    );
    assert!(output.contains(&expected), "{}", output);
}

#[test]
fn test_json_format() {
    let temp_dir = TempDir::new().unwrap();
    write_text_form(temp_dir.path(), "large.pdf", 25);

    let (_, output) = run(temp_dir.path(), &["--format", "json"]);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let reports = value.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["file"], "large.pdf");
    assert_eq!(reports[0]["field_count"], 25);
    assert_eq!(reports[0]["fields"].as_array().unwrap().len(), 25);
    assert_eq!(reports[0]["fields"][0]["type"], "Text");
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let args = Args::parse_from([
        "formlist".to_string(),
        temp_dir.path().join("missing").to_string_lossy().to_string(),
    ]);
    let workflow = FormListWorkflow::new(Config::default());
    let mut out = Vec::new();

    let result = workflow.execute(&args, &mut out);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Directory does not exist"), "{}", message);
    assert!(out.is_empty());
}
