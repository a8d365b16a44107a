use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the found hosts one per line, replacing any previous run's output.
pub fn write_hosts(path: impl AsRef<Path>, hosts: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::new();
    for host in hosts {
        out.push_str(host);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}
