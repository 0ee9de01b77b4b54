//! Deployment record storage

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::DeploymentRecord;

pub fn deployments_file(output_dir: &Path, record: &DeploymentRecord) -> PathBuf {
    output_dir
        .join("deployments")
        .join(format!("deployments_{}.jsonl", record.timestamp.format("%Y-%m-%d")))
}

/// Appends `record` as one JSON line and returns the file it was written to.
pub fn save_deployment_record(output_dir: &Path, record: &DeploymentRecord) -> Result<PathBuf> {
    let filename = deployments_file(output_dir, record);
    if let Some(parent) = filename.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(record)?)?;

    info!(
        record_id = %record.id,
        status = ?record.status,
        tx_hash = ?record.tx_hash,
        "Saved deployment record"
    );

    Ok(filename)
}
