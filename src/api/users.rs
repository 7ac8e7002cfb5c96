//! User Endpoints
//!
//! `reqwest`-backed implementation of [`UserApi`].

use async_trait::async_trait;
use rand::Rng;
use reqwest::Method;
use serde::Deserialize;

use super::{ApiError, ApiResult, Operation, UserApi};
use crate::config::ApiConfig;
use crate::models::{Company, UserDraft, UserPatch, UserPayload, UserRecord};

/// Upper bound (exclusive) for placeholder ids of locally created users
const PLACEHOLDER_ID_RANGE: u32 = 10_000;

/// Body echoed back by `POST /users`; its id is not durable and is dropped.
/// Fields the service leaves out fall back to the submitted draft.
#[derive(Deserialize)]
struct EchoedUser {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    company: Option<Company>,
}

impl EchoedUser {
    fn merge(self, id: u32, draft: &UserDraft) -> UserRecord {
        UserRecord {
            id,
            name: self.name.unwrap_or_else(|| draft.name.clone()),
            email: self.email.unwrap_or_else(|| draft.email.clone()),
            phone: self.phone.unwrap_or_else(|| draft.phone.clone()),
            website: self.website.unwrap_or_else(|| draft.website.clone()),
            company: self.company.unwrap_or_else(|| Company { name: draft.company_name.clone() }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpUserApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Issue one request, logging it and its response, and return the body
    async fn execute(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<&UserPayload<'_>>,
    ) -> ApiResult<String> {
        let url = self.config.url(path);
        log::info!("[API] Making {} request to: {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("[API] Request error: {}", e);
            ApiError::new(operation, e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            log::error!("[API] Response error: {} (body unreadable: {})", status.as_u16(), e);
            ApiError::new(operation, e)
        })?;

        if !status.is_success() {
            log::error!("[API] Response error: {} {}", status.as_u16(), text);
            return Err(ApiError::new(operation, format!("HTTP {}", status)));
        }

        log::info!("[API] Response received: {}", status.as_u16());
        log::debug!("[API] Response body: {}", text);
        Ok(text)
    }
}

fn placeholder_id() -> u32 {
    rand::thread_rng().gen_range(0..PLACEHOLDER_ID_RANGE)
}

fn decode<T: for<'de> Deserialize<'de>>(operation: Operation, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[API] Malformed {} response: {}", operation, e);
        ApiError::new(operation, e)
    })
}

#[async_trait(?Send)]
impl UserApi for HttpUserApi {
    async fn list(&self) -> ApiResult<Vec<UserRecord>> {
        let body = self.execute(Operation::Fetch, Method::GET, "/users", None).await?;
        decode(Operation::Fetch, &body)
    }

    async fn create(&self, draft: &UserDraft) -> ApiResult<UserRecord> {
        let payload = UserPayload::from(draft);
        let body = self
            .execute(Operation::Create, Method::POST, "/users", Some(&payload))
            .await?;
        let echoed: EchoedUser = decode(Operation::Create, &body)?;

        Ok(echoed.merge(placeholder_id(), draft))
    }

    async fn update(&self, id: u32, patch: &UserPatch) -> ApiResult<UserRecord> {
        let draft = patch.to_draft();
        let payload = UserPayload::from(&draft);
        // Response body is not trusted; the record is rebuilt from the request.
        self.execute(Operation::Update, Method::PUT, &format!("/users/{}", id), Some(&payload))
            .await?;
        Ok(draft.into_record(id))
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.execute(Operation::Delete, Method::DELETE, &format!("/users/{}", id), None)
            .await?;
        Ok(())
    }
}
