//! API ports and the reqwest-backed client.
//!
//! The client owns transport details only: URL building, JSON bodies and
//! mapping non-success statuses onto [`ClientError::Api`].

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::model::{
    CreatedTask, Identity, LoginRequest, NewTaskRequest, SignupOutcome, SignupRequest, Task,
};

/// Task endpoints used by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /api/tasks`, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;

    /// `POST /api/tasks`.
    async fn create_task(&self, request: &NewTaskRequest) -> Result<CreatedTask, ClientError>;

    /// `DELETE /api/tasks/{id}`.
    async fn delete_task(&self, id: &str) -> Result<(), ClientError>;
}

/// Account endpoints used by the session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/auth/signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome, ClientError>;

    /// `POST /api/auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<Identity, ClientError>;
}

/// JSON client for the task planner API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client rooted at `base_url`, e.g. `http://localhost:8080`.
    ///
    /// # Examples
    /// ```
    /// use task_board::HttpClient;
    ///
    /// let client = HttpClient::new("http://localhost:8080").expect("valid URL");
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    /// ```
    ///
    /// # Errors
    /// Returns [`ClientError::Url`] when `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Build a client reusing an existing reqwest [`Client`].
    ///
    /// # Errors
    /// Returns [`ClientError::Url`] when `base_url` does not parse.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let normalised = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalised).map_err(|err| ClientError::Url {
            message: err.to_string(),
        })?;
        Ok(Self { client, base_url })
    }

    /// Root every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::Url {
                message: err.to_string(),
            })
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "api request");
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        serde_json::from_slice(bytes.as_ref()).map_err(|err| ClientError::Decode {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl TaskApi for HttpClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.send::<(), _>(Method::GET, "api/tasks", None).await
    }

    async fn create_task(&self, request: &NewTaskRequest) -> Result<CreatedTask, ClientError> {
        self.send(Method::POST, "api/tasks", Some(request)).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        let _: Value = self
            .send::<(), _>(Method::DELETE, &format!("api/tasks/{id}"), None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for HttpClient {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome, ClientError> {
        self.send(Method::POST, "api/auth/signup", Some(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Identity, ClientError> {
        self.send(Method::POST, "api/auth/login", Some(request)).await
    }
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport {
        message: error.to_string(),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| body_preview(body));
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(PREVIEW_CHAR_LIMIT)
        .collect()
}
