//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use shared::client::{AddEmployeeResponse, ApiErrorBody};
use shared::models::{EmployeeCreate, EmployeeRecord};

use crate::store::RecordStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the Roster Server
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
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // 失败响应体是 { "message": ... }; 解析不了就退回原始文本
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.message)
                .unwrap_or(text);
            return Err(ClientError::Server(message));
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl RecordStore for HttpClient {
    async fn add_employee(&self, record: EmployeeCreate) -> ClientResult<AddEmployeeResponse> {
        self.post("/api/employees/add", &record).await
    }

    async fn list_employees(&self) -> ClientResult<Vec<EmployeeRecord>> {
        self.get("/api/employees/list").await
    }
}
