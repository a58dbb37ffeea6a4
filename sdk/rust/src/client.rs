use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields left as `None` are not sent and stay unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// `error` field of the body when present, else the raw body.
    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn info(&self) -> Result<ServiceInfo, ClientError> {
        let resp = self.client.get(self.url("/")).send().await?;
        json(resp).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        json(resp).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self.client.get(self.url("/api/users")).send().await?;
        json(resp).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/api/users/{id}")))
            .send()
            .await?;
        json(resp).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let resp = self
            .client
            .post(self.url("/api/users"))
            .json(user)
            .send()
            .await?;
        json(resp).await
    }

    pub async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<User, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/api/users/{id}")))
            .json(patch)
            .send()
            .await?;
        json(resp).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/users/{id}")))
            .send()
            .await?;
        check(resp).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    };
    Err(ClientError::Api { status, message })
}

async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    Ok(check(resp).await?.json().await?)
}
