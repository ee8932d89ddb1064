use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Crates that must stay pure (no UI, platform or runtime dependencies)
const PURE_CRATES: &[&str] = &["kartsim-domain"];

/// Dependencies a pure crate may not pull in
const FORBIDDEN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "web-sys",
    "wasm-bindgen",
    "gloo-net",
    "gloo-timers",
    "tokio",
    "reqwest",
    "directories",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let mut violations = Vec::new();
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        violations.extend(forbidden_dependencies(package));

        let src_dir = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent directory")?;
        violations.extend(forbidden_imports(&package.name, &src_dir)?);
    }

    if violations.is_empty() {
        println!("arch-check: OK ({} pure crate(s) checked)", PURE_CRATES.len());
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} architecture violation(s)", violations.len())
    }
}

fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| FORBIDDEN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

fn forbidden_imports(package: &str, src_dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = import_pattern()?;
    let mut violations = Vec::new();

    for path in rust_files(src_dir)? {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        violations.extend(scan_source(&pattern, &source).into_iter().map(|(line, krate)| {
            format!("{package}: {}:{line} imports {krate}", path.display())
        }));
    }

    Ok(violations)
}

fn import_pattern() -> anyhow::Result<regex_lite::Regex> {
    let crates = FORBIDDEN_DEPS
        .iter()
        .map(|name| name.replace('-', "_"))
        .collect::<Vec<_>>()
        .join("|");
    regex_lite::Regex::new(&format!(r"^\s*(?:pub\s+)?use\s+::?({crates})\b"))
        .context("building import pattern")
}

/// Returns (1-based line, crate) for every forbidden `use` in `source`
fn scan_source(pattern: &regex_lite::Regex, source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            pattern
                .captures(line)
                .map(|caps| (index + 1, caps[1].to_string()))
        })
        .collect()
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
