use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::arms::DEFAULT_ARM_LENGTH;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmJob {
    /// Display label; the sequence document's transcript id stays
    /// authoritative in machine output.
    pub name: Option<String>,
    pub sequence: PathBuf,
    pub overlap: PathBuf,
    pub arm_length: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    #[serde(default = "default_arm_length")]
    pub arm_length: i64,
    pub jobs: Vec<ArmJob>,
}

fn default_arm_length() -> i64 {
    DEFAULT_ARM_LENGTH
}

impl JobConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            bail!("config lists no jobs");
        }
        if self.arm_length < 1 {
            bail!("armLength must be at least 1, got {}", self.arm_length);
        }
        for job in &self.jobs {
            if let Some(length) = job.arm_length
                && length < 1
            {
                bail!(
                    "armLength must be at least 1, got {length} for job '{}'",
                    job.label()
                );
            }
        }
        Ok(())
    }

    /// Relative sequence/overlap paths resolve against the config's directory.
    fn resolve_paths(&mut self, base: &Path) {
        for job in &mut self.jobs {
            if job.sequence.is_relative() {
                job.sequence = base.join(&job.sequence);
            }
            if job.overlap.is_relative() {
                job.overlap = base.join(&job.overlap);
            }
        }
    }

    /// The arm length in effect for `job`.
    #[must_use]
    pub fn effective_arm_length(&self, job: &ArmJob) -> i64 {
        job.arm_length.unwrap_or(self.arm_length)
    }
}

impl ArmJob {
    /// The label shown in run output before the transcript id is known.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.sequence.display().to_string(),
        }
    }
}
