use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use sns_webhook_relay::aws::SsmClient;
use sns_webhook_relay::config::RelayConfig;
use sns_webhook_relay::environment::Environment;
use sns_webhook_relay::http_gateway::HttpGateway;
use sns_webhook_relay::relay::NotificationRelay;
use sns_webhook_relay_worker::handler::handle_request;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    let rust_log = Environment::string("RUST_LOG", "INFO");

    tracing_subscriber::registry()
        .with(EnvFilter::new(rust_log))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).without_time().with_writer(non_blocking))
        .init();

    info!("Starting...");

    let config = RelayConfig::from_env()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let ssm_client = SsmClient::new(&aws_config).await;
    let http_gateway = HttpGateway::new(config.http_timeout_in_millis)?;

    let relay = NotificationRelay::new(config, ssm_client, http_gateway);
    let relay = &relay;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move { handle_request(relay, event).await })).await?;

    info!("Stopped!");

    Ok(())
}
