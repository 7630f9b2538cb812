#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Cheat sheets written by [`corpus`], as `(slug, source)`.
#[allow(dead_code)]
pub const FIXTURES: &[(&str, &str)] = &[
    (
        "git",
        "---\ntitle: Git\ndate: 2020-11-18 18:11:18\nbackground: bg-[#d7593e]\ntags: [github, vcs]\nintro: |\n  This cheat sheet summarizes commonly used Git command line instructions.\n---\n\n## Getting Started {.cols-2}\n\nCreate a new local repository\n\n```shell\n$ git init [project name]\n```\n\n## Branches\n\nList branches with `git branch`.\n",
    ),
    (
        "docker",
        "---\ntitle: Docker\nbackground: bg-[#488fdf]\n---\n\n## Getting Started\n\n```\ndocker run -d -p 80:80 nginx\n```\n",
    ),
    ("bash", "---\ntitle: Bash\n---\n\n## Variables\n\n```bash\nNAME=\"John\"\n```\n"),
    ("vim", "---\ntitle: Vim\n---\n\n## Motion\n\nMove with h j k l\n"),
    ("mysql", "---\ntitle: MySQL\n---\n\n## Tables\n\nSHOW TABLES;\n"),
    (
        "linux-command",
        "---\ntitle: Linux Command\n---\n\n## Files\n\nls -la\n",
    ),
    ("react", "---\ntitle: React\n---\n\n## Components\n\nJSX\n"),
    (
        "python",
        "---\ntitle: Python\nbackground: bg-[#436b97]\n---\n\nIntro paragraph before any heading.\n\n## Examples\n\n```python\nprint(\"hi\")\n```\n\n## Lists {.cols-2}\n\n| Method | Description |\n|--------|-------------|\n| `append(x)` | Add an item |\n| `pop()` | Remove last |\n\n## Examples\n\nMore text\n",
    ),
];

/// Write [`FIXTURES`] into a fresh corpus directory.
#[allow(dead_code)]
pub fn corpus() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create corpus dir");
    for (slug, source) in FIXTURES {
        fs::write(dir.path().join(format!("{slug}.md")), source).unwrap();
    }
    dir
}

/// Create a configured `sheets` command isolated from the user's config.
#[allow(dead_code)]
pub fn sheets_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sheets"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("SHEETS_CONFIG");
    cmd.env_remove("SHEETS_CORPUS_DIR");
    cmd.env("SHEETS_CONFIG_DIR", config_dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `sheets` over `corpus`, with an empty config directory.
#[allow(dead_code)]
pub fn sheets_with_corpus(corpus: &Path, config_dir: &Path) -> Command {
    let mut cmd = sheets_cmd(config_dir);
    cmd.env("SHEETS_CORPUS_DIR", corpus);
    cmd
}

/// Parse stdout as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

/// Slugs of a JSON array of entries.
#[allow(dead_code)]
pub fn slugs(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["slug"].as_str().expect("slug").to_string())
        .collect()
}
