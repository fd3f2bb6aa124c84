use crate::aws::ParameterStore;
use crate::config::RelayConfig;
use crate::error::AppError;
use crate::http_gateway::HttpGateway;
use crate::notification::{NotificationBatch, NotificationResult, PostOutcome};
use crate::webhook_notification_service::WebhookNotificationService;
use serde_json::Value;
use tracing::{debug, info};

pub struct NotificationRelay<P> {
    config: RelayConfig,
    parameter_store: P,
    http_gateway: HttpGateway,
}

impl<P: ParameterStore> NotificationRelay<P> {
    pub fn new(
        config: RelayConfig,
        parameter_store: P,
        http_gateway: HttpGateway,
    ) -> Self {
        Self {
            config,
            parameter_store,
            http_gateway,
        }
    }

    pub async fn process(
        &self,
        event: &Value,
    ) -> Result<NotificationResult, AppError> {
        info!("Starting the operation.");

        let batch = NotificationBatch::validate(event)?;

        debug!("> Extracting webhook url from parameter store.");
        let webhook_url = self.resolve_endpoint().await?;

        debug!("> Processing {} records of event.", batch.records.len());
        let mut notification_result = NotificationResult::default();

        for record in batch.records {
            debug!(">> Processing SNS record with MessageId <{}>.", record.message_id);

            match WebhookNotificationService::send(&self.http_gateway, &webhook_url, &record.message).await {
                PostOutcome::Delivered { .. } => notification_result.sent.push(record),
                PostOutcome::Failed { .. } => notification_result.failed.push(record),
            }
        }

        info!(
            "Operation completed successfully. sent={} failed={}",
            notification_result.sent.len(),
            notification_result.failed.len()
        );

        Ok(notification_result)
    }

    pub async fn resolve_endpoint(&self) -> Result<String, AppError> {
        self.parameter_store.get_parameter(&self.config.webhook_url_parameter_path).await
    }
}
