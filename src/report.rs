// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON reports of orbit certification runs.

use crate::certifier::{LoggedRecord, ObstructionLog};
use crate::config::EngineConfig;
use crate::digits::DigitSequence;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One orbit run: the configuration, summary counts and every record.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitReport {
    pub seed: DigitSequence,
    pub requested_iterations: usize,
    pub config: EngineConfig,
    pub iterations: usize,
    pub reached_palindrome_at: Option<usize>,
    pub summary: BTreeMap<String, u64>,
    pub results: Vec<LoggedRecord>,
}

impl OrbitReport {
    pub fn new(
        seed: DigitSequence,
        requested_iterations: usize,
        config: EngineConfig,
        log: ObstructionLog,
    ) -> Self {
        Self {
            seed,
            requested_iterations,
            config,
            iterations: log.len(),
            reached_palindrome_at: log.first_ring_solvable(),
            summary: log.summary(),
            results: log.into_records(),
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, replacing any existing file only once the
    /// new content is complete.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        let io_error = |source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_error)?;
        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            io_error(source)
        })
    }
}
