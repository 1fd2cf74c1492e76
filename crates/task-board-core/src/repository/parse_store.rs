//! Parse REST implementation of the Task store.
//!
//! Speaks the Parse Server REST API (`/classes/<name>`), the protocol the
//! hosted backend exposes. Connection parameters come from `StoreConfig`
//! at construction; nothing is global.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::error::{StoreError, StoreResult};
use super::traits::TaskStore;
use crate::config::StoreConfig;
use crate::domain::{NewTask, ObjectId, Task};

const APPLICATION_ID_HEADER: &str = "x-parse-application-id";
const JAVASCRIPT_KEY_HEADER: &str = "x-parse-javascript-key";
const REST_API_KEY_HEADER: &str = "x-parse-rest-api-key";

/// HTTP client bound to one Parse class
#[derive(Debug, Clone)]
pub struct ParseTaskStore {
    http: reqwest::Client,
    collection_url: Url,
}

#[derive(Deserialize)]
struct QueryResults {
    results: Vec<Task>,
}

#[derive(Deserialize)]
struct Created {
    #[serde(rename = "objectId")]
    object_id: ObjectId,
    #[serde(rename = "createdAt", default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: i64,
    error: String,
}

impl ParseTaskStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let collection_url = config
            .collection_url()
            .map_err(|e| StoreError::config(e.to_string()))?;

        let mut headers = HeaderMap::new();
        insert_header(&mut headers, APPLICATION_ID_HEADER, &config.application_id)?;
        if let Some(key) = non_empty(&config.javascript_key) {
            insert_header(&mut headers, JAVASCRIPT_KEY_HEADER, key)?;
        }
        if let Some(key) = non_empty(&config.rest_api_key) {
            insert_header(&mut headers, REST_API_KEY_HEADER, key)?;
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            collection_url,
        })
    }

    /// `<server>/classes/<name>`
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn object_url(&self, id: &ObjectId) -> StoreResult<Url> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::config("server URL cannot be a base"))?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl TaskStore for ParseTaskStore {
    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        debug!("GET {}", self.collection_url);
        let response = self.http.get(self.collection_url.clone()).send().await?;
        let body: QueryResults = read_json(response).await?;
        Ok(body.results)
    }

    async fn find_first(&self, field: &str, value: &str) -> StoreResult<Option<Task>> {
        let mut filter = serde_json::Map::new();
        filter.insert(field.to_string(), serde_json::Value::String(value.to_string()));
        let filter = serde_json::Value::Object(filter).to_string();

        debug!("GET {} where={}", self.collection_url, filter);
        let response = self
            .http
            .get(self.collection_url.clone())
            .query(&[("where", filter.as_str()), ("limit", "1")])
            .send()
            .await?;
        let body: QueryResults = read_json(response).await?;
        Ok(body.results.into_iter().next())
    }

    async fn create(&self, task: &NewTask) -> StoreResult<Task> {
        debug!("POST {}", self.collection_url);
        let response = self
            .http
            .post(self.collection_url.clone())
            .json(task)
            .send()
            .await?;
        let created: Created = read_json(response).await?;
        Ok(Task {
            id: created.object_id,
            description: task.description.clone(),
            created_at: created.created_at,
            updated_at: created.created_at,
        })
    }

    async fn destroy(&self, id: &ObjectId) -> StoreResult<()> {
        let url = self.object_url(id)?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        let _: serde_json::Value = read_json(response).await?;
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> StoreResult<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| StoreError::config(format!("invalid value for {}: {}", name, e)))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(error_from_body(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| StoreError::invalid_response(e.to_string()))
}

fn error_from_body(status: StatusCode, body: &str) -> StoreError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => StoreError::service(err.code, err.error),
        Err(_) => StoreError::Service {
            code: i64::from(status.as_u16()),
            message: format!("Request failed with status {}", status),
        },
    }
}
