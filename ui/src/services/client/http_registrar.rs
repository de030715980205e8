use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::registrar::AccountRegistrar;
use crate::features::registration::{NewUser, ServerFieldErrors};
use crate::services::config::ApiConfig;
use crate::services::errors::{RegistrationError, RegistrationResult};

/// Registrar that POSTs the new user as JSON to the configured endpoint
#[derive(Clone)]
pub struct HttpRegistrar {
    pub(crate) http_client: Client,
    pub(crate) register_url: String,
}

impl HttpRegistrar {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            register_url: api.register_url(),
        }
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

#[async_trait(?Send)]
impl AccountRegistrar for HttpRegistrar {
    #[instrument(skip(self, user), fields(username = %user.username), err)]
    async fn register(&self, user: &NewUser) -> RegistrationResult<()> {
        info!("Registering account at {}", self.register_url);

        let response = self
            .http_client
            .post(&self.register_url)
            .json(user)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = body_or_empty(status, response.text().await);

        let result = classify_response(status, &body);
        if let Err(e) = &result {
            warn!("Registration refused: {}", e);
        }
        result
    }
}

/// Map an HTTP status and body to the registration outcome.
///
/// 400, 409 and 422 are validation refusals whose body may name the taken
/// fields as `{ "username": bool, "email": bool, "message": string }`.
pub fn classify_response(status: u16, body: &str) -> RegistrationResult<()> {
    match status {
        200..=299 => Ok(()),
        400 | 409 | 422 => {
            let errors = serde_json::from_str::<ServerFieldErrors>(body)
                .ok()
                .filter(ServerFieldErrors::has_any)
                .unwrap_or_else(|| ServerFieldErrors::with_message(refusal_message(body)));
            Err(RegistrationError::Rejected(errors))
        }
        _ => Err(RegistrationError::Status {
            status,
            body: body.to_string(),
        }),
    }
}

/// A body that cannot be read is logged and treated as empty
fn body_or_empty<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read registration response body ({}): {}", status, e);
            String::new()
        }
    }
}

fn refusal_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        "Inscription refusée".to_string()
    } else {
        body.to_string()
    }
}
