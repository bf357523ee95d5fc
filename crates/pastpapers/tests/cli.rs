//! CLI integration tests for pastpapers commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// A small two-subject catalog.
const CATALOG: &str = r#"{
    "subjects": {
        "phy": {
            "name": "Physics",
            "units": [
                { "id": "u1", "name": "Unit 1", "order": 1 },
                { "id": "u2", "name": "Unit 2", "order": 2 }
            ],
            "papers": [
                { "id": "phy-u1-jan24", "unitId": "u1", "year": 2024, "session": "January",
                  "title": "Physics Unit 1 January 2024",
                  "questionPaperUrl": "https://example.org/phy-u1-jan24-qp.pdf",
                  "markingSchemeUrl": "https://example.org/phy-u1-jan24-ms.pdf" },
                { "id": "phy-u1-jun23", "unitId": "u1", "year": 2023, "session": "June",
                  "title": "Physics Unit 1 June 2023" },
                { "id": "phy-u2-jan24", "unitId": "u2", "year": 2024, "session": "January",
                  "title": "Physics Unit 2 January 2024" }
            ]
        },
        "chem": {
            "name": "Chemistry",
            "units": [{ "id": "u1", "name": "Unit 1", "order": 1 }],
            "papers": [
                { "id": "chem-u1-may23", "unitId": "u1", "year": 2023, "session": "May",
                  "title": "Chemistry Unit 1 May 2023" }
            ]
        }
    }
}"#;

/// Project config pointing at `papers.json` with a pinned reference year.
const CONFIG: &str = r#"root = true

[catalog]
path = "papers.json"

[search]
reference_year = 2025
"#;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a pastpapers command.
fn pastpapers() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pastpapers").unwrap()
}

/// Helper to run `pastpapers` with HOME isolated to the provided directory.
fn pastpapers_with_home(home: &Path) -> Command {
    let mut cmd = pastpapers();
    cmd.env("HOME", home);
    cmd.env_remove("PASTPAPERS_LOG");
    cmd
}

/// A project directory with a catalog and config, plus a separate empty home.
struct Project {
    /// Project directory holding `.pastpapers.toml` and `papers.json`.
    dir: tempfile::TempDir,
    /// Isolated home directory.
    home: tempfile::TempDir,
}

impl Project {
    /// Creates a project with the standard catalog.
    fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    /// Creates a project with the given catalog JSON.
    fn with_catalog(catalog: &str) -> Self {
        let dir = temp_dir();
        fs::write(dir.path().join("papers.json"), catalog).unwrap();
        fs::write(dir.path().join(".pastpapers.toml"), CONFIG).unwrap();
        Self {
            dir,
            home: temp_dir(),
        }
    }

    /// Returns a command running inside the project.
    fn cmd(&self) -> Command {
        let mut cmd = pastpapers_with_home(self.home.path());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Runs a command and parses its stdout as JSON.
    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(args).output().unwrap();
        assert!(output.status.success(), "command failed: {args:?}");
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Returns the paper ids of a JSON search output, in order.
fn result_ids(json: &Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["paper"]["id"].as_str().unwrap().to_string())
        .collect()
}

mod search {
    use super::*;

    #[test]
    fn finds_exact_paper() {
        let project = Project::new();
        let json = project.json(&["search", "phy", "u1", "jan", "24", "--json"]);

        assert_eq!(result_ids(&json), vec!["phy-u1-jan24"]);
        assert_eq!(json["parsed"]["subject"], "physics");
        assert_eq!(json["parsed"]["unit"], "Unit 1");
        assert_eq!(json["parsed"]["year"], 2024);
        assert_eq!(json["parsed"]["session"], "january");
        assert_eq!(json["total_matches"], 1);
        assert_eq!(json["query"]["text"], "phy u1 jan 24");
        assert_eq!(json["results"][0]["subject"]["name"], "Physics");
    }

    #[test]
    fn text_output_shows_links() {
        let project = Project::new();
        let output = project
            .cmd()
            .args(["search", "p1jan24"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Physics Unit 1 January 2024"));
        assert!(stdout.contains("https://example.org/phy-u1-jan24-qp.pdf"));
        assert!(stdout.contains("https://example.org/phy-u1-jan24-ms.pdf"));
    }

    #[test]
    fn recent_papers_rank_first() {
        let project = Project::new();
        let json = project.json(&["search", "phy", "--json"]);
        assert_eq!(
            result_ids(&json),
            vec!["phy-u1-jan24", "phy-u2-jan24", "phy-u1-jun23"]
        );
    }

    #[test]
    fn june_filter_finds_may_paper() {
        let project = Project::new();
        let json = project.json(&[
            "search",
            "--subject",
            "Chemistry",
            "--session",
            "June",
            "--json",
        ]);
        assert_eq!(result_ids(&json), vec!["chem-u1-may23"]);
    }

    #[test]
    fn repeated_unit_filters() {
        let project = Project::new();
        let json = project.json(&[
            "search", "phy", "--unit", "Unit 1", "--unit", "Unit 2", "--year", "2024", "--json",
        ]);
        assert_eq!(result_ids(&json), vec!["phy-u1-jan24", "phy-u2-jan24"]);
        let notes: Vec<&str> = json["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|s| s["type"] == "info")
            .map(|s| s["text"].as_str().unwrap())
            .collect();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("Unit 1"));
    }

    #[test]
    fn limit_truncates() {
        let project = Project::new();
        let json = project.json(&["search", "-n", "1", "--json"]);
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn empty_query_lists_everything() {
        let project = Project::new();
        let json = project.json(&["search", "--json"]);
        assert_eq!(json["results"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn miss_suggests_nearby_years() {
        let project = Project::new();
        let json = project.json(&["search", "phy", "2019", "--json"]);
        assert!(json["results"].as_array().unwrap().is_empty());

        let texts: Vec<&str> = json["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["text"].as_str().unwrap())
            .collect();
        assert!(texts.contains(&"Physics papers from 2023"));
        assert!(texts.contains(&"Physics Unit 2"));
    }

    #[test]
    fn miss_prints_suggestions() {
        let project = Project::new();
        let output = project
            .cmd()
            .args(["search", "phy", "2019"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("No papers found."));
        assert!(stdout.contains("Suggestions:"));
    }

    #[test]
    fn catalog_flag_overrides_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join("other.json"), CATALOG).unwrap();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .args(["search", "chem", "--catalog", "other.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chemistry Unit 1 May 2023"));
    }

    #[test]
    fn fails_without_catalog() {
        let dir = temp_dir();
        pastpapers_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "phy"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no catalog configured"));
    }

    #[test]
    fn fails_on_invalid_catalog() {
        let project = Project::with_catalog("{ not json");
        project
            .cmd()
            .args(["search", "phy"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse catalog file"));
    }
}

mod parse {
    use super::*;

    #[test]
    fn combined_token_json() {
        let dir = temp_dir();
        let output = pastpapers_with_home(dir.path())
            .current_dir(dir.path())
            .args(["parse", "p1jan21", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["subject"], "physics");
        assert_eq!(json["unit"], "Unit 1");
        assert_eq!(json["year"], 2021);
        assert_eq!(json["session"], "january");
        assert_eq!(json["text"], "");
    }

    #[test]
    fn max_year_flag() {
        let dir = temp_dir();
        let output = pastpapers_with_home(dir.path())
            .current_dir(dir.path())
            .args(["parse", "phy", "2026", "--max-year", "2026", "--json"])
            .output()
            .unwrap();
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["year"], 2026);
    }

    #[test]
    fn text_output() {
        let dir = temp_dir();
        pastpapers_with_home(dir.path())
            .current_dir(dir.path())
            .args(["parse", "chem", "organic"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chemistry"))
            .stdout(predicate::str::contains("organic"));
    }

    #[test]
    fn requires_query() {
        pastpapers().arg("parse").assert().failure();
    }
}

mod sessions {
    use super::*;

    #[test]
    fn june_includes_may() {
        pastpapers()
            .args(["sessions", "jun"])
            .assert()
            .success()
            .stdout("june\nmay\n");
    }

    #[test]
    fn january_is_alone() {
        pastpapers()
            .args(["sessions", "January"])
            .assert()
            .success()
            .stdout("january\n");
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_subjects() {
        let project = Project::new();
        project
            .cmd()
            .arg("ls")
            .assert()
            .success()
            .stdout(predicate::str::contains("Physics"))
            .stdout(predicate::str::contains("Chemistry"))
            .stdout(predicate::str::contains("2 subjects, 4 papers"));
    }

    #[test]
    fn lists_units_of_subject() {
        let project = Project::new();
        project
            .cmd()
            .args(["ls", "--subject", "phy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Unit 2"))
            .stdout(predicate::str::contains("2023-2024"));
    }

    #[test]
    fn unknown_subject_fails() {
        let project = Project::new();
        project
            .cmd()
            .args(["ls", "--subject", "biology"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no subject matching"));
    }
}

mod check {
    use super::*;

    #[test]
    fn clean_project_passes() {
        let project = Project::new();
        let output = project.cmd().arg("check").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("No issues found."));
        assert!(stdout.contains("2 subjects, 4 papers"));
    }

    #[test]
    fn reports_unresolved_units() {
        let project = Project::with_catalog(
            r#"{ "subjects": [{ "id": "phy", "name": "Physics",
                "units": [{ "id": "u1", "name": "Unit 1" }],
                "papers": [{ "id": "x", "unitId": "u9", "year": 2024,
                             "session": "January", "title": "Lost" }] }] }"#,
        );
        project
            .cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("unknown unit 'u9'"));
    }

    #[test]
    fn reports_missing_catalog() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(
            dir.path().join(".pastpapers.toml"),
            "root = true\n[catalog]\npath = \"absent.json\"\n",
        )
        .unwrap();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("[missing]"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        let home = temp_dir();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".pastpapers.toml")).unwrap();
        assert!(contents.contains("[catalog]"));
    }

    #[test]
    fn points_at_check_afterwards() {
        let dir = temp_dir();
        let home = temp_dir();

        let output = pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Configuration written:"));
        assert!(stdout.contains("run 'pastpapers check'"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".pastpapers.toml"), "existing").unwrap();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".pastpapers.toml"), "old content").unwrap();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".pastpapers.toml")).unwrap();
        assert!(contents.contains("[search]"));
    }

    #[test]
    fn global_writes_to_home() {
        let dir = temp_dir();
        let home = temp_dir();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".pastpapers.toml").exists());
        assert!(!dir.path().join(".pastpapers.toml").exists());
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_effective_settings() {
        let project = Project::new();
        let output = project.cmd().arg("config").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("result_limit = 20"));
        assert!(stdout.contains("reference_year = 2025"));
        assert!(stdout.contains("papers.json"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".pastpapers.toml"), "[search\n").unwrap();

        pastpapers_with_home(home.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
