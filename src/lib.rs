pub mod config;
pub mod error;
pub mod handlers;
pub mod twilio_types;
pub mod utils;

use crate::config::Config;

use axum::{routing::get, Router};
use std::sync::Arc;

/// Router serving the voice webhook acknowledgement for both GET and POST webhooks.
pub fn app(config: Arc<Config>) -> Router {
    let path = config.webhook_path.clone();
    Router::new()
        .route(
            &path,
            get(handlers::voice_webhook).post(handlers::voice_webhook),
        )
        .with_state(config)
}
