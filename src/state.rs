use crate::config::Configuration;
use crate::db::Database;
use crate::errors::ServerError;
use crate::hospitable::HospitableClient;

/// Immutable per-process state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub hospitable: Option<HospitableClient>,
    pub revyoos_widget_code: String,
    pub hospitable_search_identifier: Option<String>,
}

impl AppState {
    pub fn new(db: Database, config: &Configuration) -> Result<Self, ServerError> {
        let hospitable = match config.hospitable_api_token() {
            Some(token) => Some(HospitableClient::new(config.hospitable_api_url(), token)?),
            None => {
                tracing::warn!("HOSPITABLE_API_TOKEN not set; proxy routes will fail");
                None
            }
        };

        Ok(Self {
            db,
            hospitable,
            revyoos_widget_code: config.revyoos_widget_code().to_string(),
            hospitable_search_identifier: config.hospitable_search_identifier().map(str::to_string),
        })
    }

    /// The proxy client, or a 500 when no API token was configured.
    pub fn hospitable(&self) -> Result<&HospitableClient, ServerError> {
        self.hospitable.as_ref().ok_or_else(|| {
            tracing::error!("Hospitable API token is not configured");
            ServerError::InternalError
        })
    }
}
