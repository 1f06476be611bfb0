//! REST client for the hosted progress store.
//!
//! Speaks a PostgREST-style dialect: rows are JSON objects, filters are
//! `column=eq.value` query parameters, inserts go to the collection path and
//! upsert when told to merge duplicates, updates are keyed PATCHes.

use reqwest::{Method, RequestBuilder};
use unitlab_types::{
    Handle, ModuleSlug, NewProgress, ProgressPatch, ProgressRecord, ServiceKey, Student, StudentId,
};
use url::Url;

use crate::retry::{RetryConfig, RetryOutcome, send_with_retry};
use crate::{ProgressStore, StoreError, http_client};

const STUDENT_COLUMNS: &str = "id,handle,name,coins,created_at";
const PROGRESS_COLUMNS: &str = "module_id,step_completed,completed,coins_earned";

/// Remote store client. Cheap to clone-by-construction: the HTTP client is
/// shared process-wide, this struct only carries endpoint and credential.
#[derive(Debug, Clone)]
pub struct RestStore {
    base: Url,
    key: ServiceKey,
    retry: RetryConfig,
}

impl RestStore {
    #[must_use]
    pub fn new(base: Url, key: ServiceKey) -> Self {
        Self {
            base,
            key,
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy (tests shrink the delays).
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn table(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("/rest/v1/{name}"));
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        http_client()
            .request(method, url)
            .header("apikey", self.key.as_str())
            .bearer_auth(self.key.as_str())
    }

    async fn send<F>(&self, build_request: F) -> Result<reqwest::Response, StoreError>
    where
        F: Fn() -> RequestBuilder,
    {
        match send_with_retry(build_request, &self.retry).await {
            RetryOutcome::Success(response) => Ok(response),
            RetryOutcome::HttpError(response) => Err(StoreError::from_response(response).await),
            RetryOutcome::ConnectionError { attempts, source } => {
                Err(StoreError::Unreachable { attempts, source })
            }
        }
    }
}

impl ProgressStore for RestStore {
    async fn find_student(&self, handle: &Handle) -> Result<Option<Student>, StoreError> {
        let url = self.table("students");
        let filter = format!("eq.{handle}");

        tracing::debug!(handle = %handle, "fetching learner row");
        let response = self
            .send(|| {
                self.request(Method::GET, url.clone()).query(&[
                    ("select", STUDENT_COLUMNS),
                    ("handle", filter.as_str()),
                    ("limit", "1"),
                ])
            })
            .await?;

        let rows: Vec<Student> = response.json().await.map_err(StoreError::Decode)?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_progress(&self, student: StudentId) -> Result<Vec<ProgressRecord>, StoreError> {
        let url = self.table("progress");
        let filter = format!("eq.{student}");

        tracing::debug!(student = %student, "fetching progress rows");
        let response = self
            .send(|| {
                self.request(Method::GET, url.clone()).query(&[
                    ("select", PROGRESS_COLUMNS),
                    ("student_id", filter.as_str()),
                ])
            })
            .await?;

        response.json().await.map_err(StoreError::Decode)
    }

    async fn insert_progress(&self, row: &NewProgress) -> Result<(), StoreError> {
        let url = self.table("progress");

        tracing::debug!(student = %row.student_id, module = %row.module, "inserting progress row");
        self.send(|| {
            self.request(Method::POST, url.clone())
                .query(&[("on_conflict", "student_id,module_id")])
                .header("Prefer", "resolution=merge-duplicates")
                .json(row)
        })
        .await?;

        Ok(())
    }

    async fn update_progress(
        &self,
        student: StudentId,
        module: ModuleSlug,
        patch: &ProgressPatch,
    ) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }

        let url = self.table("progress");
        let student_filter = format!("eq.{student}");
        let module_filter = format!("eq.{module}");

        tracing::debug!(student = %student, module = %module, "updating progress row");
        self.send(|| {
            self.request(Method::PATCH, url.clone())
                .query(&[
                    ("student_id", student_filter.as_str()),
                    ("module_id", module_filter.as_str()),
                ])
                .json(patch)
        })
        .await?;

        Ok(())
    }
}
