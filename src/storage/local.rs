//! Local filesystem CSV storage.
//!
//! ## Output Layout
//!
//! ```text
//! LINK,Title,Location,Need,Summary
//! /zf_user/jobs/relay/view?view_type=search&rec_idx=48213377,백엔드 개발자,서울 강남구,경력3년↑ 대학교(4년)↑,"서버개발, 백엔드 외"
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{CSV_HEADERS, ExtractedJob, OutputConfig, SiteConfig};
use crate::storage::{JobStorage, WriteSummary};

/// Writes the result set to a single CSV file, replacing previous contents.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    relay_path: String,
}

impl LocalStorage {
    /// Create a storage writing to `path`, building links from `relay_path`.
    pub fn new(path: impl Into<PathBuf>, relay_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relay_path: relay_path.into(),
        }
    }

    pub fn from_config(output: &OutputConfig, site: &SiteConfig) -> Self {
        Self::new(&output.path, &site.relay_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize jobs as CSV, header first.
    fn encode(&self, jobs: &[ExtractedJob]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for job in jobs {
            writer.write_record(job.to_record(&self.relay_path))?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl JobStorage for LocalStorage {
    async fn write_jobs(&self, jobs: &[ExtractedJob]) -> Result<WriteSummary> {
        let bytes = self.encode(jobs)?;
        self.write_bytes(&bytes).await?;

        log::info!("Wrote {} rows to {}", jobs.len(), self.path.display());

        Ok(WriteSummary {
            row_count: jobs.len(),
            location: self.path.display().to_string(),
        })
    }
}
