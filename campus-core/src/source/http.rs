//! Course source backed by a remote JSON endpoint

use std::time::Duration;

use async_trait::async_trait;

use crate::model::Course;

use super::{CourseSource, FetchError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches a course catalog from an HTTP endpoint serving JSON
///
/// The endpoint returns the full course sequence in one response; there
/// is no paging. A non-success status or a body that fails to parse is
/// a terminal [`FetchError::Http`] for that load attempt.
pub struct HttpCourseSource {
    url: String,
    timeout: Duration,
}

impl HttpCourseSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn http_error(&self, reason: impl ToString) -> FetchError {
        FetchError::Http {
            url: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("campus/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.http_error(e))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        if !response.status().is_success() {
            return Err(self.http_error(format!("HTTP {}", response.status())));
        }

        let courses: Vec<Course> = response
            .json()
            .await
            .map_err(|e| self.http_error(format!("invalid catalog body: {e}")))?;

        tracing::debug!("Fetched {} course(s) from {}", courses.len(), self.url);

        Ok(courses)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
