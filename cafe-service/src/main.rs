use cafe_service::config::CafeConfig;
use cafe_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CafeConfig::load()?;
    init_tracing("cafe-service", &config.common.log_level);

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
