use thiserror::Error;

/// Errors raised by calls against the GitHub Actions API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{resource} is gone (logs expired or were deleted)")]
    Gone { resource: String },

    #[error("permission denied for {resource}: {message}")]
    PermissionDenied { resource: String, message: String },

    #[error("GitHub API request for {resource} failed: {source}")]
    GitHub {
        resource: String,
        source: octocrab::Error,
    },

    #[error("Failed to create GitHub client: {0}")]
    Client(#[source] octocrab::Error),
}

impl ApiError {
    /// Classify an octocrab error by the HTTP status GitHub answered with
    pub fn from_octocrab(error: octocrab::Error, resource: impl Into<String>) -> Self {
        let resource = resource.into();
        let (status, message) = match &error {
            octocrab::Error::GitHub { source, .. } => {
                (Some(source.status_code.as_u16()), source.message.clone())
            }
            _ => (None, String::new()),
        };

        match status {
            Some(404) => Self::NotFound { resource },
            Some(410) => Self::Gone { resource },
            Some(401 | 403) => Self::PermissionDenied { resource, message },
            _ => Self::GitHub {
                resource,
                source: error,
            },
        }
    }
}

/// Errors that abort a handler run
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Failed to list jobs: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to write log output: {0}")]
    Output(#[from] std::io::Error),
}
