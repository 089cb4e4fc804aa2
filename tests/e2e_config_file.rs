/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test runs the binary inside its own temporary directory so config
/// auto-discovery only sees the file the test wrote.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Copy the products sequence fixture into `dir` and return its path.
fn products_payload(dir: &Path) -> PathBuf {
    let target = dir.join("products.json");
    fs::copy(fixtures_path().join("products_sequence.json"), &target).unwrap();
    target
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format_and_sequence() {
        let dir = TempDir::new().unwrap();
        let payload = products_payload(dir.path());
        write_config(
            &dir.path().join("tanzu-records.config.yml"),
            "format: markdown\nsequence: true\n",
        );

        cargo_bin_cmd!("tanzu-records")
            .current_dir(dir.path())
            .args(["-k", "product"])
            .arg(&payload)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# Product (3)"));
    }

    #[test]
    fn test_auto_discovery_applies_pretty() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("tanzu-records.config.yml"), "pretty: true\n");

        cargo_bin_cmd!("tanzu-records")
            .current_dir(dir.path())
            .args(["-k", "release", "--json", r#"{"id": 1}"#])
            .assert()
            .success()
            .stdout("{\n  \"id\": 1\n}\n");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("tanzu-records")
            .current_dir(dir.path())
            .args(["-k", "release", "--json", r#"{"id": 1}"#])
            .assert()
            .success()
            .stdout("{\"id\":1}\n");
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: md\n");

        cargo_bin_cmd!("tanzu-records")
            .args(["-k", "eula", "--json", r#"{"slug": "vmware"}"#, "-c"])
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# EULA"))
            .stdout(predicate::str::contains("| slug | vmware |"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        cargo_bin_cmd!("tanzu-records")
            .args(["-k", "eula", "--json", "{}", "-c", "/nonexistent/tanzu.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("broken.yml");
        write_config(&config_path, "format: [markdown\n");

        cargo_bin_cmd!("tanzu-records")
            .args(["-k", "eula", "--json", "{}", "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: yaml\n");

        cargo_bin_cmd!("tanzu-records")
            .args(["-k", "eula", "--json", "{}", "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: json\nexclude_packages: [pip]\n");

        cargo_bin_cmd!("tanzu-records")
            .args(["-k", "eula", "--json", "{}", "-c"])
            .arg(&config_path)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'exclude_packages'",
            ));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("tanzu-records.config.yml"),
            "format: markdown\n",
        );

        cargo_bin_cmd!("tanzu-records")
            .current_dir(dir.path())
            .args(["-k", "release", "-f", "json", "--json", r#"{"id": 2}"#])
            .assert()
            .success()
            .stdout("{\"id\":2}\n");
    }

    #[test]
    fn test_explicit_config_replaces_discovered_one() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("tanzu-records.config.yml"),
            "format: markdown\n",
        );
        let explicit = dir.path().join("json.yml");
        write_config(&explicit, "format: json\n");

        cargo_bin_cmd!("tanzu-records")
            .current_dir(dir.path())
            .args(["-k", "release", "--json", r#"{"id": 3}"#, "-c"])
            .arg(&explicit)
            .assert()
            .success()
            .stdout("{\"id\":3}\n");
    }
}
