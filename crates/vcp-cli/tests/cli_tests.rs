//! Integration tests for the `vcp` binary
//!
//! Each test writes a config pointing at source files inside a temp dir, so
//! nothing on the machine running the tests is read.

use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct Setup {
    dir: TempDir,
    config: PathBuf,
}

impl Setup {
    /// Two recent folders and one Project Manager entry, all existing on disk
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        for name in ["blog", "api", "site"] {
            std::fs::create_dir_all(root.join(name)).unwrap();
        }

        let folder = |name: &str| {
            let path = path_str(&root.join(name));
            json!({
                "id": "openRecentFolder",
                "enabled": true,
                "label": format!("~/{name}"),
                "uri": { "path": path }
            })
        };
        let storage = json!({
            "lastKnownMenubarData": { "menus": { "File": { "items": [
                { "id": "submenuitem.recent", "submenu": { "items": [folder("blog"), folder("api")] } }
            ]}}}
        });
        let projects = json!([
            { "name": "Company Site", "rootPath": path_str(&root.join("site")), "tags": ["web"], "enabled": true }
        ]);

        std::fs::write(root.join("storage.json"), storage.to_string()).unwrap();
        std::fs::write(root.join("projects.json"), projects.to_string()).unwrap();

        let config = root.join("config.json");
        let config_json = json!({
            "storageFiles": [root.join("missing.json"), root.join("storage.json")],
            "projectManagerFile": root.join("projects.json"),
            "editorCommand": ["codium"]
        });
        std::fs::write(&config, config_json.to_string()).unwrap();

        Self { dir, config }
    }

    fn path(&self, name: &str) -> String {
        path_str(&self.dir.path().join(name))
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vcp"));
        cmd.arg("--config")
            .arg(&self.config)
            .env("HOME", self.dir.path())
            .env("RUST_LOG", "off");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        let output = self.command().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "vcp {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_query_prints_ranked_items() {
    let setup = Setup::new();

    let items = stdout_json(&setup.run(&["query", ""]));
    let names: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Company Site", "blog", "api"]);
}

#[test]
fn test_query_filters_and_uses_configured_editor() {
    let setup = Setup::new();

    let items = stdout_json(&setup.run(&["query", "API"]));

    assert_eq!(items.as_array().unwrap().len(), 1);
    let item = &items[0];
    assert_eq!(item["description"], setup.path("api"));
    assert_eq!(item["completion"], "vc api");
    assert_eq!(
        item["actions"][0]["execute"]["command"],
        json!(["codium", setup.path("api")])
    );
}

#[test]
fn test_query_plain_without_matches() {
    let setup = Setup::new();

    let output = setup.run(&["query", "--plain", "nothing-matches-this"]);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "No projects found."
    );
}

#[test]
fn test_serve_round_trip() {
    let setup = Setup::new();
    let mut child = setup
        .command()
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let api_id = format!("{}_api", setup.path("api"));
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, r#"{{"step":"initial"}}"#).unwrap();
        writeln!(stdin, r#"{{"step":"search","query":"web"}}"#).unwrap();
        writeln!(
            stdin,
            "{}",
            json!({"step": "action", "selected": {"id": api_id}})
        )
        .unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["items"].as_array().unwrap().len(), 3);
    assert_eq!(responses[1]["items"][0]["name"], "Company Site");
    assert_eq!(responses[2]["type"], "execute");
    assert_eq!(responses[2]["execute"]["cwd"], setup.path("api"));
    assert_eq!(responses[2]["close"], true);
}

#[test]
fn test_config_prints_effective_settings() {
    let setup = Setup::new();

    let config = stdout_json(&setup.run(&["config"]));

    assert_eq!(config["editorCommand"], json!(["codium"]));
    assert_eq!(config["trigger"], "vc ");
    assert_eq!(config["ranking"]["recent"], 200);
}

#[test]
fn test_manifest_has_trigger_prefix() {
    let setup = Setup::new();

    let manifest = stdout_json(&setup.run(&["manifest"]));

    assert_eq!(manifest["prefix"], "vc ");
    assert_eq!(manifest["handler"]["type"], "stdio");
    assert!(
        manifest["handler"]["command"]
            .as_str()
            .unwrap()
            .ends_with(" serve")
    );
}

#[test]
fn test_paths_reports_missing_candidates() {
    let setup = Setup::new();

    let output = String::from_utf8(setup.run(&["paths"]).stdout).unwrap();

    assert!(output.contains(&format!("missing  {}", setup.path("missing.json"))));
    assert!(output.contains(&format!("found    {}", setup.path("storage.json"))));
}

#[test]
fn test_missing_explicit_config_fails() {
    let setup = Setup::new();
    let output = Command::new(env!("CARGO_BIN_EXE_vcp"))
        .args(["--config", "/nonexistent/vcp.json", "query", ""])
        .env("HOME", setup.dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}
