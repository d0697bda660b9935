use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::analysis::validation::ValidationRecord;
use crate::models::selection::SiteSelection;

pub const SELECTIONS_FILE: &str = "wind_farm_demand_satisfaction_all_years.csv";
pub const VALIDATION_FILE: &str = "validation_report.csv";

/// Writes run outputs into an output directory, optionally under a
/// timestamped subdirectory so runs can sit side by side.
pub struct CsvExporter {
    output_dir: PathBuf,
    overwrite: bool,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>, overwrite: bool, timestamped: bool) -> Result<Self> {
        let mut output_dir = output_dir.as_ref().to_path_buf();
        if timestamped {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
            output_dir = output_dir.join(timestamp);
        }
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;
        Ok(Self { output_dir, overwrite })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Idempotent-write policy: an existing file is left untouched unless
    /// overwriting was requested. Returns whether a file was written.
    fn should_write(&self, path: &Path) -> bool {
        if path.exists() && !self.overwrite {
            info!(path = %path.display(), "output exists, skipping write (pass --overwrite to replace)");
            return false;
        }
        true
    }

    pub fn export_selections(&self, selections: &[SiteSelection]) -> Result<bool> {
        let path = self.output_dir.join(SELECTIONS_FILE);
        if !self.should_write(&path) {
            return Ok(false);
        }

        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for selection in selections {
            writer.serialize(selection)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = selections.len(), "wrote site selections");
        Ok(true)
    }

    pub fn export_validation(&self, records: &[ValidationRecord]) -> Result<bool> {
        let path = self.output_dir.join(VALIDATION_FILE);
        if !self.should_write(&path) {
            return Ok(false);
        }

        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = records.len(), "wrote validation report");
        Ok(true)
    }
}
