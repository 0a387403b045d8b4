use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use findspot_otp::config::config::Config;
use findspot_otp::config::routes::routes;
use findspot_otp::controllers::otp_controller::OtpController;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let otp_service = Arc::new(config.otp_service().await?);
    let controller = web::Data::new(OtpController::new(otp_service));

    info!(host = %config.host, port = config.port, "Starting OTP server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(controller.clone())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
