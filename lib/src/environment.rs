use crate::error::AppError;
use std::env;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn optional_string(env_name: &str) -> Option<String> {
        env::var(env_name).ok().filter(|value| !value.trim().is_empty())
    }

    pub fn required_string(env_name: &str) -> Result<String, AppError> {
        Self::optional_string(env_name).ok_or_else(|| AppError::configuration(&format!("{env_name} is not set"), &format!("{env_name} must be configured")))
    }

    pub fn optional_u64(env_name: &str) -> Result<Option<u64>, AppError> {
        Self::optional_string(env_name)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|error| AppError::configuration(&error.to_string(), &format!("Failed to parse {env_name}={value} to u64")))
            })
            .transpose()
    }
}
