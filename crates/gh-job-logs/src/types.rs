//! Type definitions for workflow jobs and their fetched logs

use crate::error::ApiError;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A job of a workflow run as returned by the job listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobInfo {
    /// Job id assigned by GitHub
    pub id: u64,
    /// Display name shown in the Actions UI
    pub name: String,
}

/// Outcome of downloading the log of one job
///
/// Holds either the log text or the reason the download failed, never both.
#[derive(Debug)]
pub struct JobLogResult {
    pub job: JobInfo,
    pub outcome: Result<String, ApiError>,
}

impl JobLogResult {
    pub fn logs(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.as_ref().err()
    }
}

/// Coordinates of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRef {
    pub owner: String,
    pub repo: String,
    pub run_id: u64,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid repository '{0}', expected 'owner/repo'")]
pub struct RunRefError(pub String);

impl RunRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, run_id: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            run_id,
        }
    }

    /// Build from an `owner/repo` string such as `GITHUB_REPOSITORY`
    pub fn from_repository(repository: &str, run_id: u64) -> Result<Self, RunRefError> {
        let repository = repository.trim();
        match repository.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo, run_id))
            }
            _ => Err(RunRefError(repository.to_string())),
        }
    }
}

impl fmt::Display for RunRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.run_id)
    }
}
