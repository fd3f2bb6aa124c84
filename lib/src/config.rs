use crate::environment::Environment;
use crate::error::AppError;

pub const WEBHOOK_URL_PARAMETER_PATH_ENV: &str = "PARAM_SSM_PATH_WEBHOOK_URL";
pub const HTTP_TIMEOUT_IN_MILLIS_ENV: &str = "HTTP_TIMEOUT_IN_MILLIS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub webhook_url_parameter_path: String,
    pub http_timeout_in_millis: Option<u64>,
}

impl RelayConfig {
    pub fn new(webhook_url_parameter_path: &str) -> Self {
        Self {
            webhook_url_parameter_path: webhook_url_parameter_path.to_string(),
            http_timeout_in_millis: None,
        }
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout_in_millis: u64,
    ) -> Self {
        Self {
            webhook_url_parameter_path: self.webhook_url_parameter_path,
            http_timeout_in_millis: Some(http_timeout_in_millis),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let webhook_url_parameter_path = Environment::required_string(WEBHOOK_URL_PARAMETER_PATH_ENV)?;
        let http_timeout_in_millis = Environment::optional_u64(HTTP_TIMEOUT_IN_MILLIS_ENV)?;

        Ok(Self {
            webhook_url_parameter_path,
            http_timeout_in_millis,
        })
    }
}
