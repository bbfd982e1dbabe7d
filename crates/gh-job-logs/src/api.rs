//! GitHub Actions API access
//!
//! [`JobsApi`] is the narrow view of GitHub this crate needs: list the jobs
//! of a run and download the log of one job. [`OctocrabJobsApi`] serves it
//! from a real `Octocrab` client.

use crate::error::ApiError;
use crate::types::{JobInfo, RunRef};
use octocrab::Octocrab;
use serde::Deserialize;

/// Read-only access to workflow jobs and their logs
#[allow(async_fn_in_trait)]
pub trait JobsApi {
    /// List the jobs of a workflow run with a single request
    async fn list_jobs(&self, run: &RunRef) -> Result<Vec<JobInfo>, ApiError>;

    /// Download the plain text log of one job
    async fn download_job_log(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct JobsResponse {
    jobs: Vec<JobInfo>,
}

/// [`JobsApi`] backed by octocrab
#[derive(Debug, Clone)]
pub struct OctocrabJobsApi {
    octocrab: Octocrab,
}

impl OctocrabJobsApi {
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with `token`
    ///
    /// `api_url` overrides `https://api.github.com`, as needed on GitHub
    /// Enterprise Server where the runner exports `GITHUB_API_URL`.
    pub fn from_token(token: &str, api_url: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url).map_err(ApiError::Client)?;
        }
        let octocrab = builder.build().map_err(ApiError::Client)?;
        Ok(Self::new(octocrab))
    }
}

impl JobsApi for OctocrabJobsApi {
    async fn list_jobs(&self, run: &RunRef) -> Result<Vec<JobInfo>, ApiError> {
        let route = format!(
            "/repos/{}/{}/actions/runs/{}/jobs",
            run.owner, run.repo, run.run_id
        );

        let response: JobsResponse = self
            .octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|e| ApiError::from_octocrab(e, format!("jobs of workflow run {run}")))?;

        Ok(response.jobs)
    }

    async fn download_job_log(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> Result<String, ApiError> {
        let resource = format!("log of job {job_id}");
        let route = format!("/repos/{owner}/{repo}/actions/jobs/{job_id}/logs");

        // GitHub answers with a redirect to the log blob
        let response = self
            .octocrab
            ._get(route)
            .await
            .map_err(|e| ApiError::from_octocrab(e, resource.as_str()))?;
        let response = self
            .octocrab
            .follow_location_to_data(response)
            .await
            .map_err(|e| ApiError::from_octocrab(e, resource.as_str()))?;
        let response = octocrab::map_github_error(response)
            .await
            .map_err(|e| ApiError::from_octocrab(e, resource.as_str()))?;

        self.octocrab
            .body_to_string(response)
            .await
            .map_err(|e| ApiError::from_octocrab(e, resource))
    }
}
