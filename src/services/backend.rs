//! Backend API client
//!
//! This service handles all HTTP traffic to the remote backend, including
//! client setup, response envelope decoding and error mapping. Dynamic
//! response shapes stop here: everything past this boundary is typed.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::user::{
    RegisterRequest, UpdateProfileRequest, UpdateUserDetailRequest, User, UserDetail, UserPatch,
};
use crate::utils::errors::{ApiError, ApiResult, AppError, Result};

/// Response envelope returned by every backend endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Payload of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// Typed client for the backend REST API
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new BackendClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("eventmate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginData> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send_request(Method::POST, "auth/login", None, &body)
            .await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        self.send_request(Method::POST, "auth/register", None, request)
            .await
    }

    /// PATCH /users/profile with bearer auth
    pub async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> ApiResult<UserPatch> {
        self.send_request(Method::PATCH, "users/profile", Some(token), request)
            .await
    }

    /// PATCH /users/profile/detail with bearer auth
    pub async fn update_user_detail(
        &self,
        token: &str,
        request: &UpdateUserDetailRequest,
    ) -> ApiResult<UserDetail> {
        self.send_request(Method::PATCH, "users/profile/detail", Some(token), request)
            .await
    }

    /// Send a request and decode the response envelope
    async fn send_request<B, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!(method = %method, url = %url, "Sending backend request");

        let mut request = self.client.request(method, &url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::ServiceUnavailable
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            warn!(status = %status, message = %message, "Backend rejected request");
            return Err(map_rejection(status, message));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if envelope.status != "success" {
            return Err(ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::InvalidResponse("missing data field in response".to_string()))
    }
}

/// Map a non-success response to the matching error variant. Credential and
/// duplicate-identity rejections each get their own variant so callers can
/// show distinct messages.
fn map_rejection(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::UNAUTHORIZED || message.contains("Invalid credentials") {
        ApiError::InvalidCredentials
    } else if message.contains("Email already exists") {
        ApiError::DuplicateEmail
    } else if message.contains("Username already exists") {
        ApiError::DuplicateUsername
    } else if status.is_client_error() {
        ApiError::Rejected(message)
    } else {
        ApiError::RequestFailed(format!("HTTP {status}: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"status": "success", "message": "ok", "data": {"token": "t", "user": {
            "id": 1, "email": "a@b.co", "username": "a", "firstName": "A", "lastName": "B",
            "isActive": true, "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"
        }}}"#;
        let envelope: ApiEnvelope<LoginData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "success");
        let data = envelope.data.unwrap();
        assert_eq!(data.token, "t");
        assert_eq!(data.user.id, 1);
    }

    #[test]
    fn test_envelope_without_data() {
        let json = r#"{"status": "error", "message": "Invalid credentials"}"#;
        let envelope: ApiEnvelope<LoginData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "error");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_rejection_mapping() {
        assert_matches!(
            map_rejection(StatusCode::UNAUTHORIZED, "whatever".to_string()),
            ApiError::InvalidCredentials
        );
        assert_matches!(
            map_rejection(StatusCode::BAD_REQUEST, "Email already exists".to_string()),
            ApiError::DuplicateEmail
        );
        assert_matches!(
            map_rejection(StatusCode::BAD_REQUEST, "Username already exists".to_string()),
            ApiError::DuplicateUsername
        );
        assert_matches!(
            map_rejection(StatusCode::BAD_REQUEST, "malformed body".to_string()),
            ApiError::Rejected(_)
        );
        assert_matches!(
            map_rejection(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            ApiError::RequestFailed(_)
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = BackendClient::new(&ApiConfig {
            base_url: "http://localhost:3000/api/".to_string(),
            timeout_seconds: 5,
        })
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }
}
