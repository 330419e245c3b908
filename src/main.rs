use twilio_voice_rs::config::Config;
use twilio_voice_rs::error::handle_error;

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true),
        )
        .with(tracing_subscriber::filter::Targets::new().with_targets([
            ("hyper", tracing_subscriber::filter::LevelFilter::OFF),
            (
                "twilio_voice_rs",
                tracing_subscriber::filter::LevelFilter::DEBUG,
            ),
        ]));
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
    if let Err(e) = dotenv {
        info!(error=%e, "no .env loaded");
    }

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            handle_error(e);
            std::process::exit(1);
        }
    };
    info!(addr=%config.listen_addr, path=%config.webhook_path, "serving voice webhooks");

    let app = twilio_voice_rs::app(config.clone());
    if let Err(e) = axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await
    {
        handle_error(e);
        std::process::exit(1);
    }
}
