use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::error::{Context, Result};
use crate::records::{CellValue, DataTable};

use super::USER_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
}

/// One entry of the remote user directory. Unused upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Remote call failures. `Display` is the message shown in place of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Gagal mengambil data dari API: Status code {0}")]
    Status(u16),
    #[error("Error koneksi API: {0}")]
    Transport(String),
    #[error("Respons API tidak valid: {0}")]
    Decode(String),
}

pub type UsersOutcome = std::result::Result<Vec<UserRecord>, FetchError>;

/// Thin wrapper around a configured `reqwest::Client` for the users endpoint.
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    endpoint: String,
}

impl UsersClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .context("Failed to construct users HTTP client")?;
        Ok(Self {
            client,
            endpoint: api.users_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint. Every failure is returned as a [`FetchError`], never raised.
    pub async fn fetch(&self) -> UsersOutcome {
        debug!("Requesting users from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()));

        let outcome = match response {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => decode_users(status, &body),
                    Err(err) => Err(FetchError::Transport(err.to_string())),
                }
            }
            Err(err) => Err(err),
        };

        match &outcome {
            Ok(users) => info!("Fetched {} users from {}", users.len(), self.endpoint),
            Err(err) => warn!("Users request to {} failed: {}", self.endpoint, err),
        }
        outcome
    }
}

/// Interpret a finished response. Only `200 OK` bodies are decoded.
pub fn decode_users(status: StatusCode, body: &str) -> UsersOutcome {
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }
    serde_json::from_str::<Vec<UserRecord>>(body).map_err(|err| FetchError::Decode(err.to_string()))
}

pub fn users_table(users: &[UserRecord]) -> DataTable {
    let rows = users
        .iter()
        .map(|user| {
            vec![
                CellValue::Int(user.id as i64),
                CellValue::from(user.name.as_str()),
                CellValue::from(user.username.as_str()),
                CellValue::from(user.email.as_str()),
                CellValue::from(user.address.city.as_str()),
                CellValue::from(user.phone.as_str()),
                CellValue::from(user.website.as_str()),
                CellValue::from(user.company.name.as_str()),
            ]
        })
        .collect();

    DataTable::new(
        "Data Pengguna dari API Publik",
        USER_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    )
}
