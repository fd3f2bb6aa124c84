use std::borrow::Cow;
use std::env;
use std::future::Future;

use crate::error::AppError;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::Region;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata};

pub trait ParameterStore {
    fn get_parameter(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<String, AppError>> + Send;
}

#[derive(Clone)]
pub struct SsmClient {
    pub client: aws_sdk_ssm::Client,
}

impl SsmClient {
    pub async fn new(aws_config: &aws_config::SdkConfig) -> SsmClient {
        let endpoint = env::var("LOCAL_ENDPOINT").ok();
        let region = env::var("LOCAL_REGION").map(|region| Region::new(Cow::Owned(region))).ok();

        let client = match endpoint {
            None => aws_sdk_ssm::Client::new(aws_config),
            Some(url) => aws_sdk_ssm::Client::from_conf(
                aws_sdk_ssm::config::Builder::from(aws_config)
                    .endpoint_url(url)
                    .region(region)
                    .credentials_provider(DefaultCredentialsChain::builder().build().await)
                    .build(),
            ),
        };

        SsmClient { client }
    }
}

impl ParameterStore for SsmClient {
    async fn get_parameter(
        &self,
        name: &str,
    ) -> Result<String, AppError> {
        let output = self.client.get_parameter().name(name).with_decryption(true).send().await.map_err(|error| {
            let message = format!(
                "Failed to read parameter {} from SSM: {}",
                name,
                error.message().unwrap_or("unknown")
            );
            AppError::resolution(&DisplayErrorContext(&error).to_string(), &message)
        })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(|value| value.to_string())
            .ok_or_else(|| AppError::resolution("Parameter has no value", &format!("Failed to read parameter {name} from SSM")))
    }
}
