//! Sequential download of all job logs of a workflow run

use crate::api::JobsApi;
use crate::error::ApiError;
use crate::types::{JobInfo, JobLogResult, RunRef};
use log::debug;

/// Fetch the log of every job in `run`
///
/// Jobs are listed with a single request and their logs are downloaded one
/// after another, in listing order. A failed download is recorded in the
/// job's [`JobLogResult`] and the remaining jobs are still fetched. Only a
/// failure of the listing request itself is returned as an error.
pub async fn fetch_job_logs<A: JobsApi>(
    api: &A,
    run: &RunRef,
) -> Result<Vec<JobLogResult>, ApiError> {
    let jobs = api.list_jobs(run).await?;
    debug!("Jobs in workflow run {}: {:?}", run, jobs);

    let mut results = Vec::with_capacity(jobs.len());
    for job in jobs {
        results.push(fetch_job_log(api, run, job).await);
    }

    Ok(results)
}

async fn fetch_job_log<A: JobsApi>(api: &A, run: &RunRef, job: JobInfo) -> JobLogResult {
    let outcome = api.download_job_log(&run.owner, &run.repo, job.id).await;

    match &outcome {
        Ok(logs) => debug!("Job {} log: {} bytes", job.id, logs.len()),
        Err(err) => debug!("Job {} log download error: {}", job.id, err),
    }

    JobLogResult { job, outcome }
}
