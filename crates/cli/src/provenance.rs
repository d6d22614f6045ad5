use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of a `<artifact>.provenance.json` sidecar.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub command: String,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &str, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: gridcells::VERSION,
            command: command.to_string(),
            params,
            outputs: Vec::new(),
        }
    }
}

/// Record `artifact` as the output and write the sidecar next to it.
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    mut provenance: Provenance,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    provenance
        .outputs
        .push(artifact.to_string_lossy().into_owned());
    fs::write(&path, serde_json::to_vec_pretty(&provenance)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("grid"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_snapshot() {
        assert_eq!(
            provenance_path(Path::new("/tmp/out/grid.json")),
            Path::new("/tmp/out/grid.provenance.json")
        );
    }

    #[test]
    fn sidecar_lists_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("cells.json");
        fs::write(&artifact, "{}").unwrap();
        let prov = Provenance::new("random", json!({"seed": 7}));
        let path = write_sidecar(&artifact, prov).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "random");
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["version"], gridcells::VERSION);
    }
}
