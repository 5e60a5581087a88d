use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub editor_bin: PathBuf,
}

impl TestEnv {
    /// Fixture extension tree that clears every check: 31 branded themes,
    /// 2 snippet files, a complete manifest, no legacy paths, and a stub
    /// editor CLI that reports the extension as installed.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("ext");
        fs::create_dir_all(&root).expect("create extension root");

        write_theme_files(&root, 31, 0);
        write_snippet_files(&root);
        write_manifest(&root, 31, 2, 3);
        let editor_bin = write_stub_editor(tmp.path(), true);

        Self {
            _tmp: tmp,
            root,
            editor_bin,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("vsxcheck");
        cmd.arg("--root")
            .arg(&self.root)
            .arg("--editor-bin")
            .arg(&self.editor_bin);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_expect_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn write_theme_files(root: &Path, valid: usize, broken: usize) {
    let dir = root.join("themes");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create themes dir");
    for i in 0..valid {
        let theme = json!({
            "name": format!("TCT Theme {}", i),
            "colors": {
                "editorBracketHighlight.foreground1": "#ffd700",
                "editorBracketHighlight.foreground2": "#da70d6",
                "editorCursor.foreground": "#ff00ff",
                "editor.background": "#1e1e2e"
            }
        });
        fs::write(
            dir.join(format!("tct-theme-{:02}.json", i)),
            serde_json::to_string_pretty(&theme).expect("serialize theme"),
        )
        .expect("write theme file");
    }
    for i in 0..broken {
        fs::write(dir.join(format!("zz-broken-{:02}.json", i)), "{not json")
            .expect("write broken theme");
    }
}

pub fn write_snippet_files(root: &Path) {
    let dir = root.join("snippet");
    fs::create_dir_all(&dir).expect("create snippet dir");
    fs::write(
        dir.join("typescript.json"),
        json!({
            "Console Log": {"prefix": "clg", "body": ["console.log($1);"]},
            "Arrow Function": {"prefix": "arf", "body": ["($1) => {$2}"]}
        })
        .to_string(),
    )
    .expect("write snippet file");
    fs::write(
        dir.join("python.json"),
        json!({
            "Main Guard": {"prefix": "ifm", "body": ["if __name__ == \"__main__\":", "    $1"]}
        })
        .to_string(),
    )
    .expect("write snippet file");
}

pub fn write_manifest(root: &Path, themes: usize, snippets: usize, commands: usize) {
    let manifest = json!({
        "name": "compiled-thought-themes",
        "displayName": "Compiled Thought Themes",
        "version": "2.0.0",
        "contributes": {
            "themes": (0..themes)
                .map(|i| json!({
                    "label": format!("TCT Theme {}", i),
                    "uiTheme": "vs-dark",
                    "path": format!("./themes/tct-theme-{:02}.json", i)
                }))
                .collect::<Vec<_>>(),
            "snippets": (0..snippets)
                .map(|i| json!({"language": "any", "path": format!("./snippet/{}.json", i)}))
                .collect::<Vec<_>>(),
            "commands": (0..commands)
                .map(|i| json!({"command": format!("tct.command{}", i), "title": format!("TCT: Command {}", i)}))
                .collect::<Vec<_>>(),
        }
    });
    fs::write(
        root.join("package.json"),
        serde_json::to_string_pretty(&manifest).expect("serialize manifest"),
    )
    .expect("write manifest");
}

/// Stub `code --list-extensions` replacement.
pub fn write_stub_editor(base: &Path, installed: bool) -> PathBuf {
    let bin = base.join("bin");
    fs::create_dir_all(&bin).expect("create bin dir");
    let path = bin.join("code-stub");
    let listing = if installed {
        "echo 'Publisher.Compiled-Thought-Themes'\necho 'other.extension'\n"
    } else {
        "echo 'other.extension'\n"
    };
    fs::write(&path, format!("#!/usr/bin/env sh\n{}", listing)).expect("write stub editor");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod stub");
    }
    path
}
