//! HTTP client for the resource endpoints

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{ApiResponse, ErrorCode, ResourceSchema};

use crate::{ClientConfig, ClientError, ClientResult, Record};

/// HTTP client for making requests to the admin server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Every row of a resource, typed
    pub async fn list_models<T: DeserializeOwned>(
        &self,
        schema: &ResourceSchema,
    ) -> ClientResult<Vec<T>> {
        self.get(&schema.api_path()).await
    }

    /// Create one row from a typed payload (e.g. `MenuItemCreate`)
    pub async fn create_model<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        schema: &ResourceSchema,
        payload: &B,
    ) -> ClientResult<T> {
        self.post(&schema.api_path(), payload).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies are [`ApiResponse`]s; anything else is reported as text.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(decode_error(status, &text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}")))
    }
}

/// Map a non-success response onto a [`ClientError`]
fn decode_error(status: StatusCode, text: &str) -> ClientError {
    let message = match serde_json::from_str::<ApiResponse>(text) {
        Ok(body) if status == StatusCode::BAD_REQUEST => {
            return ClientError::Validation(body.into_app_error(ErrorCode::ValidationFailed));
        }
        Ok(body) => body.message,
        Err(_) => format!("{status}: {text}"),
    };

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::METHOD_NOT_ALLOWED => ClientError::MethodNotAllowed(message),
        _ => ClientError::Internal(message),
    }
}

#[async_trait::async_trait]
impl crate::ResourceApi for HttpClient {
    async fn list(&self, schema: &ResourceSchema) -> ClientResult<Vec<Record>> {
        self.get(&schema.api_path()).await
    }

    async fn create(&self, schema: &ResourceSchema, body: &serde_json::Value) -> ClientResult<Record> {
        self.post(&schema.api_path(), body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_validation_error() {
        let body = r#"{"code":2,"message":"name is a required field","details":{"errors":{"name":"name is a required field"}}}"#;
        let err = decode_error(StatusCode::BAD_REQUEST, body);

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.field_errors().unwrap()["name"], "name is a required field");
    }

    #[test]
    fn test_decode_method_not_allowed() {
        let err = decode_error(
            StatusCode::METHOD_NOT_ALLOWED,
            r#"{"code":9,"message":"Method PUT not allowed"}"#,
        );
        assert!(matches!(err, ClientError::MethodNotAllowed(ref m) if m == "Method PUT not allowed"));
    }

    #[test]
    fn test_decode_plain_text_error() {
        let err = decode_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ClientError::Internal(ref m) if m == "502 Bad Gateway: upstream down"));
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_url_joins_single_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(
            client.url("/api/menu-items"),
            "http://localhost:3000/api/menu-items"
        );
    }
}
