use reqwest::{Client, Response, StatusCode};

use crate::error::{Result, UsersError};
use crate::types::{User, UserPayload};

/// Thin wrapper over the `/api/users` REST collection.
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self
            .http
            .get(format!("{}/api/users", self.base_url))
            .send()
            .await?;

        let response = Self::check_status(response, None).await?;
        Ok(response.json().await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        let response = self
            .http
            .get(format!("{}/api/users/{id}", self.base_url))
            .send()
            .await?;

        let response = Self::check_status(response, Some(id)).await?;
        Ok(response.json().await?)
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User> {
        let response = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(payload)
            .send()
            .await?;

        let response = Self::check_status(response, None).await?;
        Ok(response.json().await?)
    }

    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<()> {
        let response = self
            .http
            .put(format!("{}/api/users/{id}", self.base_url))
            .json(payload)
            .send()
            .await?;

        Self::check_status(response, Some(id)).await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/api/users/{id}", self.base_url))
            .send()
            .await?;

        Self::check_status(response, Some(id)).await?;
        Ok(())
    }

    /// Map non-2xx responses to errors, recovering the plain-text body the
    /// server sends alongside error statuses.
    async fn check_status(response: Response, id: Option<i64>) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());

        Err(match (status, id) {
            (StatusCode::CONFLICT, _) => UsersError::Conflict,
            (StatusCode::NOT_FOUND, Some(id)) => UsersError::UserNotFound(id),
            _ => UsersError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}
