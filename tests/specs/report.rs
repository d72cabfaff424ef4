//! Behavioral specs for `tagwarden report`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const MIXED_SUMMARY: &str = "\n📊 Violations: 2\n\
❌ **Found 2 tag violation(s)**\n\
\n\
- **aws_s3_bucket.logs**\n\
\x20 - 📁 `/main.tf:1-9`\n\
\x20 - ❌ Ensure resource has all required tags\n\
- **aws_instance.web**\n\
\x20 - 📁 `/compute.tf:12-30`\n\
\x20 - ❌ Ensure resource has all required tags\n";

fn fixture_dir(name: &str) -> String {
    fixture(&format!("reports/{}", name))
        .to_string_lossy()
        .into_owned()
}

fn mixed_report() -> String {
    std::fs::read_to_string(fixture("reports/mixed/results_terraform.json")).unwrap()
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn violations_are_listed_and_fail_the_step() {
    let project = Project::empty();

    run_exits(project.cmd(&["report", &fixture_dir("mixed")]), 1).stdout_eq(MIXED_SUMMARY);
}

#[test]
fn clean_results_print_success_banner() {
    let project = Project::empty();

    run_exits(project.cmd(&["report", &fixture_dir("clean")]), 0)
        .stdout_eq("\n📊 Violations: 0\n✅ **All resources have required tags**\n");
}

#[test]
fn empty_directory_passes() {
    let project = Project::empty();

    run_exits(project.cmd(&["report", "."]), 0).stdout_has("📊 Violations: 0");
}

#[test]
fn terraform_dir_env_selects_directory() {
    let project = Project::empty();

    let mut cmd = project.cmd(&["report"]);
    cmd.env("TERRAFORM_DIR", fixture_dir("mixed"));
    run_exits(cmd, 1).stdout_has("📊 Violations: 2");
}

#[test]
fn only_matching_files_are_read() {
    let project = Project::empty();
    project.file("scan/results_a.json", &mixed_report());
    project.file("scan/other.json", &mixed_report());
    project.file("scan/nested/results_b.json", &mixed_report());

    run_exits(project.cmd(&["report", "scan"]), 1).stdout_has("📊 Violations: 2\n");
}

#[test]
fn array_of_reports_is_flattened() {
    let project = Project::empty();
    let report = mixed_report();
    project.file("results_all.json", &format!("[{}, {}]", report, report));

    run_exits(project.cmd(&["report", "."]), 1).stdout_has("📊 Violations: 4\n");
}

#[test]
fn output_is_identical_across_runs() {
    let project = Project::empty();
    project.file("results_b.json", &mixed_report());
    project.file(
        "results_a.json",
        r#"{"results": {"failed_checks": [{"check_id": "CKV_AWS_TAG_001", "resource": "aws_iam_role.ci"}]}}"#,
    );

    let first = run_exits(project.cmd(&["report", "."]), 1).stdout();
    let second = run_exits(project.cmd(&["report", "."]), 1).stdout();

    similar_asserts::assert_eq!(first, second);
    // results_a.json sorts first
    let role = first.find("aws_iam_role.ci").unwrap();
    let bucket = first.find("aws_s3_bucket.logs").unwrap();
    assert!(role < bucket);
}

#[test]
fn missing_fields_use_defaults() {
    let project = Project::empty();
    project.file(
        "results_x.json",
        r#"{"results": {"failed_checks": [{"check_id": "CKV_AWS_TAG_001"}]}}"#,
    );

    run_exits(project.cmd(&["report", "."]), 1)
        .stdout_has("- **Unknown**\n  - 📁 `Unknown:0`\n  - ❌ Missing required tags");
}

// =============================================================================
// Soft fail
// =============================================================================

#[test]
fn soft_fail_reports_but_exits_zero() {
    let project = Project::empty();

    run_exits(
        project.cmd(&["report", "--soft-fail", &fixture_dir("mixed")]),
        0,
    )
    .stdout_has("❌ **Found 2 tag violation(s)**");
}

#[test]
fn soft_fail_env_true_exits_zero() {
    let project = Project::empty();

    let mut cmd = project.cmd(&["report", &fixture_dir("mixed")]);
    cmd.env("SOFT_FAIL", "true");
    run_exits(cmd, 0);
}

#[test]
fn soft_fail_env_false_still_fails() {
    let project = Project::empty();

    let mut cmd = project.cmd(&["report", &fixture_dir("mixed")]);
    cmd.env("SOFT_FAIL", "false");
    run_exits(cmd, 1);
}

// =============================================================================
// Step outputs
// =============================================================================

#[test]
fn github_output_receives_step_outputs() {
    let project = Project::empty();
    project.file("github_output", "existing=1\n");

    let mut cmd = project.cmd(&["report", &fixture_dir("mixed")]);
    cmd.env("GITHUB_OUTPUT", project.path().join("github_output"));
    run_exits(cmd, 1);

    let written = project.read("github_output");
    assert!(written.starts_with("existing=1\nviolations_count=2\npassed=false\n"));
    assert!(written.contains("violations_summary<<EOF\n❌ **Found 2 tag violation(s)**\n"));
    assert!(written.ends_with("❌ Ensure resource has all required tags\nEOF\n"));
}

#[test]
fn github_output_reports_pass() {
    let project = Project::empty();

    run_exits(
        project.cmd(&[
            "report",
            "--github-output",
            "out.txt",
            &fixture_dir("clean"),
        ]),
        0,
    );

    similar_asserts::assert_eq!(
        project.read("out.txt"),
        "violations_count=0\npassed=true\nviolations_summary<<EOF\n\
         ✅ **All resources have required tags**\nEOF\n"
    );
}

// =============================================================================
// Malformed input and configuration
// =============================================================================

#[test]
fn malformed_file_is_skipped_with_warning() {
    let project = Project::empty();
    project.file("results_bad.json", "{ truncated");
    project.file("results_good.json", &mixed_report());

    run_exits(project.cmd(&["report", "."]), 1)
        .stdout_has("📊 Violations: 2\n")
        .stderr_has("warning: could not parse")
        .stderr_has("results_bad.json");
}

#[test]
fn configured_pattern_and_check_id() {
    let project = Project::empty();
    project.config("[report]\npattern = \"*.checkov.json\"\ncheck_id = \"CKV_AWS_20\"\n");
    project.file("main.checkov.json", &mixed_report());

    run_exits(project.cmd(&["report", "."]), 1)
        .stdout_has("📊 Violations: 1\n")
        .stdout_has("Ensure the S3 bucket does not allow READ permissions");
}

#[test]
fn invalid_pattern_exits_2() {
    let project = Project::empty();
    project.config("[report]\npattern = \"results_[.json\"\n");

    run_exits(project.cmd(&["report", "."]), 2);
}

#[test]
fn json_output_includes_violations() {
    let project = Project::empty();

    let result = run_exits(
        project.cmd(&["report", "-o", "json", &fixture_dir("mixed")]),
        1,
    );
    let json = result.json();

    assert_eq!(json["passed"], false);
    assert_eq!(json["violations_count"], 2);
    assert_eq!(json["files_read"], 1);
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations[0]["resource"], "aws_s3_bucket.logs");
    assert_eq!(violations[0]["start_line"], 1);
    assert_eq!(violations[0]["end_line"], 9);
    assert_eq!(
        violations[0]["details"],
        serde_json::json!(["tags", "tags_all"])
    );
    assert!(
        json["summary"]
            .as_str()
            .unwrap()
            .starts_with("❌ **Found 2 tag violation(s)**")
    );
}

#[test]
fn unrelated_malformed_check_keeps_tag_violations() {
    let project = Project::empty();
    project.file(
        "results_terraform.json",
        r#"{"results": {"failed_checks": [
            {"check_id": "CKV_AWS_TAG_001", "resource": "aws_s3_bucket.logs",
             "check_result": {"evaluated_keys": ["tags"]}},
            {"check_id": "CKV_AWS_18", "resource": "aws_s3_bucket.logs",
             "file_line_range": [null], "check_result": {"evaluated_keys": null}}
        ]}}"#,
    );

    run_exits(project.cmd(&["report", "."]), 1)
        .stdout_has("📊 Violations: 1\n")
        .stdout_has("- **aws_s3_bucket.logs**");
}

#[test]
fn soft_fail_env_other_values_still_fail() {
    let project = Project::empty();

    for value in ["yes", "1", "on"] {
        let mut cmd = project.cmd(&["report", &fixture_dir("mixed")]);
        cmd.env("SOFT_FAIL", value);
        run_exits(cmd, 1);
    }
}

#[test]
fn soft_fail_env_is_case_insensitive() {
    let project = Project::empty();

    let mut cmd = project.cmd(&["report", &fixture_dir("mixed")]);
    cmd.env("SOFT_FAIL", "TRUE");
    run_exits(cmd, 0);
}
