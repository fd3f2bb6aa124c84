use crate::http_gateway::HttpGateway;
use crate::notification::PostOutcome;
use serde_json::json;
use tracing::{error, info, instrument};

pub struct WebhookNotificationService;

impl WebhookNotificationService {
    #[instrument(skip_all, name = "send_to_webhook")]
    pub async fn send(
        http_gateway: &HttpGateway,
        webhook_url: &str,
        message: &str,
    ) -> PostOutcome {
        let payload = json!({ "text": message });

        let result = http_gateway
            .client
            .post(webhook_url)
            .header("Content-Type", "application/json")
            .body(payload.to_string())
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    info!(">> Message posted successfully to webhook.");
                    PostOutcome::Delivered { status: status.as_u16() }
                } else {
                    let body = response.text().await.unwrap_or("unknown".to_string());
                    error!(">> Failed to post webhook message with status {} and body {}", status, body);
                    PostOutcome::Failed {
                        status: Some(status.as_u16()),
                        detail: body,
                    }
                }
            },
            Err(cause) => {
                let detail = cause.to_string();
                error!(">> Failed to post webhook message cause {}", detail);
                PostOutcome::Failed { status: None, detail }
            },
        }
    }
}
