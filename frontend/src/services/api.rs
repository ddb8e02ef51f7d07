use gloo::net::http::Request;
use shared::{
    CreateDebtRequest, Debt, DebtListResponse, DeleteDebtResponse, UpdateDebtRequest,
};

/// API client for communicating with the backend server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Fetch the full debt list snapshot
    pub async fn list_debts(&self) -> Result<Vec<Debt>, String> {
        let url = format!("{}/api/debts", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<DebtListResponse>().await {
                Ok(data) => Ok(data.debts),
                Err(e) => Err(format!("Failed to parse debt list: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch debts: {}", e)),
        }
    }

    /// Create a new debt entry
    pub async fn create_debt(&self, request: CreateDebtRequest) -> Result<Debt, String> {
        let url = format!("{}/api/debts", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Debt>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Overwrite all fields of an existing debt
    pub async fn update_debt(&self, id: i64, request: UpdateDebtRequest) -> Result<Debt, String> {
        let url = format!("{}/api/debts/{}", self.base_url, id);

        match Request::put(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Debt>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a debt by id
    pub async fn delete_debt(&self, id: i64) -> Result<DeleteDebtResponse, String> {
        let url = format!("{}/api/debts/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<DeleteDebtResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Flip the status of a debt; the backend reads the stored status
    pub async fn toggle_status(&self, id: i64) -> Result<Debt, String> {
        let url = format!("{}/api/debts/{}/toggle", self.base_url, id);

        match Request::post(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Debt>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
