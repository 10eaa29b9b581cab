mod utils;

use assert_cmd::Command;
use predicates::str::contains;
use utils::bundled_dataset;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("salary-tables").unwrap();
    cmd.arg("--data").arg(bundled_dataset());
    cmd
}

#[test]
fn test_summary_table() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Year | Total Jobs | Avg Salary (in USD)"))
        .stdout(contains("2022 | 3          | 109667"));
}

#[test]
fn test_drill_down_table() {
    cmd()
        .args(["--select", "2023"])
        .assert()
        .success()
        .stdout(contains("Job Titles in 2023"))
        .stdout(contains("Data Engineer"))
        .stdout(contains("Page 1 of 1 (4 job titles)"));
}

#[test]
fn test_json_output() {
    let output = cmd()
        .args(["--json", "--select", "2024", "--sort", "count", "--desc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selected_year"], 2024);
    assert_eq!(value["years"][0]["year"], 2023);
    assert_eq!(value["job_titles"]["rows"][0]["category"], "Data Scientist");
    assert_eq!(value["job_titles"]["rows"][0]["count"], 2);
}

#[test]
fn test_title_filter() {
    cmd()
        .args(["--title", "Data Analyst"])
        .assert()
        .success()
        .stdout(contains("4 records with job title Data Analyst"));
}

#[test]
fn test_list_titles() {
    cmd()
        .arg("--list-titles")
        .assert()
        .success()
        .stdout(contains("Research Scientist"));
}

#[test]
fn test_unknown_sort_column_fails() {
    cmd().args(["--sort", "bogus"]).assert().failure();
}

#[test]
fn test_missing_dataset_fails() {
    Command::cargo_bin("salary-tables")
        .unwrap()
        .args(["--data", "does/not/exist.json"])
        .assert()
        .failure();
}

#[test]
fn test_json_list_titles() {
    let output = cmd().args(["--json", "--list-titles"]).output().unwrap();
    assert!(output.status.success());

    let titles: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0], "Data Scientist");
}

#[test]
fn test_drill_down_paging() {
    cmd()
        .args(["--select", "2023", "--page-size", "1", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("Page 2 of 4 (4 job titles)"))
        .stdout(contains("Data Analyst"));
}

#[test]
fn test_zero_page_is_rejected() {
    cmd().args(["--select", "2023", "--page", "0"]).assert().failure();
    cmd().args(["--select", "2023", "--page-size", "0"]).assert().failure();
}
