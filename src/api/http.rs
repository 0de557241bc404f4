//! REST implementation of [`ExpenseApi`] over reqwest

use std::time::Duration;

use reqwest::{Response, Url};
use tracing::{debug, error, warn};

use super::wire::{CreatedRecord, ErrorResponse, ExpenseRecord};
use super::ExpenseApi;
use crate::error::{ApiError, SpendError, SpendResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

/// Default base URL of the persistence API
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Client for the `expenses` collection of the persistence API
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    collection_url: Url,
    http: reqwest::Client,
}

impl HttpExpenseApi {
    /// Build a client for `base_url` (e.g. `http://localhost:5000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> SpendResult<Self> {
        let collection_url = collection_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpendError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            collection_url,
            http,
        })
    }

    /// URL of the expense collection
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn item_url(&self, id: &ExpenseId) -> Result<Url, ApiError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Unreachable("base URL cannot hold a path".into()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn fetch_all(&self) -> Result<Vec<Expense>, ApiError> {
        debug!(url = %self.collection_url, "GET expenses");
        let res = self
            .http
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(transport)?;
        let res = ensure_success(res).await?;

        let values: Vec<serde_json::Value> = res.json().await.map_err(decode)?;

        let mut expenses = Vec::with_capacity(values.len());
        for value in values {
            let record: ExpenseRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    warn!(error = %err, "skipping undecodable expense record");
                    continue;
                }
            };
            match Expense::try_from(record) {
                Ok(expense) => expenses.push(expense),
                Err(err) => warn!(error = %err, "skipping invalid expense record"),
            }
        }

        Ok(expenses)
    }

    async fn post(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        debug!(url = %self.collection_url, title = %draft.title, "POST expense");
        let res = self
            .http
            .post(self.collection_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        let res = ensure_success(res).await?;

        let created: CreatedRecord = res.json().await.map_err(decode)?;
        Ok(draft.clone().into_expense(created.id.into()))
    }

    async fn put(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        debug!(url = %url, "PUT expense");
        let res = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(res).await?;
        Ok(())
    }

    async fn remove(&self, id: &ExpenseId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        debug!(url = %url, "DELETE expense");
        let res = self.http.delete(url).send().await.map_err(transport)?;
        ensure_success(res).await?;
        Ok(())
    }
}

impl ExpenseApi for HttpExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        self.fetch_all()
            .await
            .inspect_err(|err| error!(operation = "list", error = %err, "expense API call failed"))
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        self.post(draft)
            .await
            .inspect_err(|err| error!(operation = "create", error = %err, "expense API call failed"))
    }

    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<(), ApiError> {
        self.put(id, draft).await.inspect_err(
            |err| error!(operation = "update", id = %id, error = %err, "expense API call failed"),
        )
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError> {
        self.remove(id).await.inspect_err(
            |err| error!(operation = "delete", id = %id, error = %err, "expense API call failed"),
        )
    }
}

fn collection_url(base_url: &str) -> SpendResult<Url> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|e| SpendError::Config(format!("invalid API URL '{}': {}", base_url, e)))?;

    if base.cannot_be_a_base() {
        return Err(SpendError::Config(format!(
            "invalid API URL '{}': not a base URL",
            base_url
        )));
    }

    // Url::join replaces the last segment unless the path ends with '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("expenses")
        .map_err(|e| SpendError::Config(format!("invalid API URL '{}': {}", base_url, e)))
}

async fn ensure_success(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let text = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| text.trim().to_string());
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        message
    };

    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Unreachable(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::MalformedResponse(err.to_string())
    } else {
        ApiError::Unreachable(err.to_string())
    }
}
