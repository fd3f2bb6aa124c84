use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use sns_webhook_relay::aws::ParameterStore;
use sns_webhook_relay::relay::NotificationRelay;
use sns_webhook_relay::response::RelayResponse;
use tracing::info;

pub async fn handle_request<P: ParameterStore>(
    relay: &NotificationRelay<P>,
    event: LambdaEvent<Value>,
) -> Result<RelayResponse, Error> {
    let (payload, context) = event.into_parts();
    info!("Handling request {}", context.request_id);

    relay.process(&payload).await?;

    Ok(RelayResponse::ok())
}
