use gh_actions_commands::{parse_command, WorkflowCommand};
use gh_job_logs::{
    fetch_job_logs, ApiError, ConsoleOutput, HandlerError, JobInfo, JobsApi, LogHandler, LogMode,
    PrintLogsHandler, RunRef,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory stand-in for the GitHub Actions API
#[derive(Default)]
struct FakeActions {
    jobs: Vec<JobInfo>,
    logs: HashMap<u64, String>,
    fail_listing: bool,
    requests: AtomicUsize,
}

impl FakeActions {
    fn with_jobs(jobs: &[(u64, &str)]) -> Self {
        Self {
            jobs: jobs
                .iter()
                .map(|(id, name)| JobInfo {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn log(mut self, job_id: u64, text: &str) -> Self {
        self.logs.insert(job_id, text.to_string());
        self
    }
}

impl JobsApi for FakeActions {
    async fn list_jobs(&self, run: &RunRef) -> Result<Vec<JobInfo>, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(ApiError::NotFound {
                resource: format!("jobs of workflow run {run}"),
            });
        }
        Ok(self.jobs.clone())
    }

    async fn download_job_log(
        &self,
        _owner: &str,
        _repo: &str,
        job_id: u64,
    ) -> Result<String, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.logs
            .get(&job_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("log of job {job_id}"),
            })
    }
}

fn run() -> RunRef {
    RunRef::new("octo-org", "octo-repo", 29679449)
}

type TestHandler = LogHandler<FakeActions, ConsoleOutput<Vec<u8>>>;

fn handler(mode: &str, api: FakeActions) -> TestHandler {
    LogHandler::from_mode(mode, || {
        Ok::<_, ApiError>(PrintLogsHandler::new(
            api,
            run(),
            ConsoleOutput::new(Vec::new()),
        ))
    })
    .unwrap()
}

fn printed(handler: TestHandler) -> String {
    match handler {
        LogHandler::Print(print) => String::from_utf8(print.into_output().into_inner()).unwrap(),
        LogHandler::NoOp => String::new(),
    }
}

#[tokio::test]
async fn test_prints_logs_and_warnings_per_job() {
    let api = FakeActions::with_jobs(&[(1, "build"), (2, "test")]).log(1, "ok");
    let mut handler = handler("print", api);

    handler.handle().await.unwrap();

    let output = printed(handler);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6, "unexpected output:\n{output}");

    assert_eq!(
        parse_command(lines[0]).unwrap().0,
        WorkflowCommand::group("Logs of job 'build'")
    );
    assert_eq!(lines[1], "ok");
    assert!(parse_command(lines[1]).is_none());
    assert_eq!(parse_command(lines[2]).unwrap().0, WorkflowCommand::GroupEnd);

    assert_eq!(
        parse_command(lines[3]).unwrap().0,
        WorkflowCommand::group("Logs of job 'test'")
    );
    assert_eq!(
        parse_command(lines[4]).unwrap().0,
        WorkflowCommand::warning("log of job 2 not found")
    );
    assert_eq!(parse_command(lines[5]).unwrap().0, WorkflowCommand::GroupEnd);
}

#[tokio::test]
async fn test_multiline_logs_are_printed_verbatim() {
    let log = "2024-01-01T00:00:00.0000000Z ##[group]Run cargo test\n\
               2024-01-01T00:00:01.0000000Z test result: ok";
    let api = FakeActions::with_jobs(&[(5, "test")]).log(5, log);
    let mut handler = handler("print", api);

    handler.handle().await.unwrap();

    let output = printed(handler);
    assert_eq!(
        output,
        format!("::group::Logs of job 'test'\n{log}\n::endgroup::\n")
    );
}

#[tokio::test]
async fn test_empty_log_prints_empty_group() {
    let api = FakeActions::with_jobs(&[(1, "skipped")]).log(1, "");
    let mut handler = handler("print", api);

    handler.handle().await.unwrap();

    assert_eq!(
        printed(handler),
        "::group::Logs of job 'skipped'\n::endgroup::\n"
    );
}

#[tokio::test]
async fn test_run_without_jobs_prints_nothing() {
    let mut handler = handler("print", FakeActions::default());

    handler.handle().await.unwrap();

    assert_eq!(printed(handler), "");
}

#[tokio::test]
async fn test_listing_failure_aborts_handler() {
    let api = FakeActions {
        fail_listing: true,
        ..FakeActions::with_jobs(&[(1, "build")]).log(1, "ok")
    };
    let mut handler = handler("print", api);

    let err = handler.handle().await.unwrap_err();

    assert!(matches!(err, HandlerError::Api(ApiError::NotFound { .. })));
    assert_eq!(printed(handler), "");
}

#[tokio::test]
async fn test_unknown_mode_is_silent() {
    for mode in ["silent", "", "Print", "off"] {
        let api = FakeActions::with_jobs(&[(1, "build")]).log(1, "ok");
        let mut handler = handler(mode, api);
        assert_eq!(handler.mode(), LogMode::Off);

        handler.handle().await.unwrap();

        assert!(matches!(handler, LogHandler::NoOp));
    }
}

#[tokio::test]
async fn test_unknown_mode_never_builds_print_handler() {
    let selected: TestHandler = LogHandler::from_mode("silent", || {
        Err::<PrintLogsHandler<FakeActions, ConsoleOutput<Vec<u8>>>, _>("must not be called")
    })
    .unwrap();

    assert!(matches!(selected, LogHandler::NoOp));
}

#[tokio::test]
async fn test_failed_job_does_not_stop_later_jobs() {
    let api = FakeActions::with_jobs(&[(1, "a"), (2, "b"), (3, "c"), (4, "d")])
        .log(1, "one")
        .log(4, "four");

    let results = fetch_job_logs(&api, &run()).await.unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(api.requests.load(Ordering::SeqCst), 5);

    let ids: Vec<u64> = results.iter().map(|r| r.job.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    assert_eq!(results[0].logs(), Some("one"));
    assert!(results[0].error().is_none());
    for failed in &results[1..3] {
        assert!(failed.logs().is_none());
        assert!(matches!(failed.error(), Some(ApiError::NotFound { .. })));
    }
    assert_eq!(results[3].logs(), Some("four"));
}
