use std::time::Duration;

use crate::error::AppError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

#[derive(Clone)]
pub struct HttpGateway {
    pub client: ClientWithMiddleware,
}

impl HttpGateway {
    pub fn new(request_timeout_in_millis: Option<u64>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout_in_millis {
            builder = builder.timeout(Duration::from_millis(timeout));
        }

        let client = ClientBuilder::new(
            builder
                .build()
                .map_err(|error| AppError::internal(&error.to_string(), "Failed to create http gateway client"))?,
        )
        .build();

        Ok(Self { client })
    }
}
