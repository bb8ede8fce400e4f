use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


const HEADER: &str = "Work_Experience,GPA,Certifications,Skills,Internships,Job_Changes,Networking_Score,\
Education_High School,Education_Master,Education_PhD,\
Industry_Finance,Industry_Healthcare,Industry_Retail,Industry_Tech,\
Location_Chicago,Location_Los Angeles,Location_New York,Location_San Francisco,Salary_at_30";

const ROWS: [&str; 4] = [
    "5,3.6,2,Python,1,1,72,False,True,False,False,False,False,True,False,False,False,True,98000",
    "2,3.1,0,Excel,0,2,40,True,False,False,False,False,True,False,True,False,False,False,47500",
    "7,3.9,4,Rust,2,0,85,False,False,True,True,False,False,False,False,False,True,False,121000",
    "3,3.4,1,SQL,1,1,55,False,True,False,False,True,False,False,False,True,False,False,68250",
];


fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("salaries.csv");
    let mut text = HEADER.to_string();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    fs::write(&path, text).unwrap();
    path
}


fn salary_dash() -> Command {
    let mut cmd = Command::cargo_bin("salary-dash").unwrap();
    cmd.env_remove("SALARY_DASH_DATA").env_remove("SALARY_DASH_BIND");
    cmd
}


#[test]
fn stats_prints_summary() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);

    salary_dash()
        .arg("stats")
        .arg("--data")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Professionals"))
        .stdout(predicate::str::contains("$121,000"))
        .stdout(predicate::str::contains("Mean Salary by Education Level"))
        .stdout(predicate::str::contains("San Francisco"));
}


#[test]
fn data_path_from_environment() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);

    salary_dash()
        .env("SALARY_DASH_DATA", &csv)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("$47,500"));
}


#[test]
fn malformed_bind_only_affects_serve() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);

    salary_dash()
        .env("SALARY_DASH_BIND", "localhost")
        .arg("stats")
        .arg("--data")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Professionals"));

    salary_dash()
        .env("SALARY_DASH_BIND", "localhost")
        .arg("serve")
        .arg("--data")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bind address 'localhost'"));
}


#[test]
fn missing_data_file_fails() {
    let dir = TempDir::new().unwrap();

    salary_dash()
        .arg("stats")
        .arg("--data")
        .arg(dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to open data file"));
}


#[test]
fn missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    fs::write(&path, "Work_Experience,GPA,Salary_at_30\n1,3.0,50000\n").unwrap();

    salary_dash()
        .arg("stats")
        .arg("--data")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column(s)"))
        .stderr(predicate::str::contains("Education_PhD"));
}


#[test]
fn strict_rejects_multi_flag_rows() {
    let dir = TempDir::new().unwrap();
    let bad = "4,3.5,1,Go,1,1,60,True,True,False,False,False,False,True,True,False,False,False,70000";
    let csv = write_csv(dir.path(), &[ROWS[0], bad]);

    salary_dash()
        .arg("stats")
        .arg("--data")
        .arg(&csv)
        .assert()
        .success();

    salary_dash()
        .arg("stats")
        .arg("--strict")
        .arg("--data")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("violate one-hot encoding"));
}


#[test]
fn export_heatmap_svg() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);
    let output = dir.path().join("heat.svg");

    salary_dash()
        .arg("export")
        .arg("correlation-heatmap")
        .arg("--svg")
        .arg("--output")
        .arg(&output)
        .arg("--data")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Salary_at_30"));
    assert!(svg.contains("1.00"));
}


#[test]
fn export_box_chart_png() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);
    let output = dir.path().join("industry.png");

    salary_dash()
        .args(["export", "industry-salary-box", "-o"])
        .arg(&output)
        .arg("--data")
        .arg(&csv)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}


#[test]
fn export_rejects_unknown_and_interactive_only_charts() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), &ROWS);

    salary_dash()
        .args(["export", "pie-chart", "--data"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chart 'pie-chart'"));

    salary_dash()
        .args(["export", "3d-scatter", "--data"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be exported"))
        .stderr(predicate::str::contains("correlation-heatmap"));
}
