use crate::config::Config;
use crate::error::AppError;
use crate::twilio_types::{CallStatus, Response, ResponseAction, SayAction, VoiceRequest};
use crate::utils::wrap_twiml;

use axum::{
    async_trait,
    body::HttpBody,
    extract::{FromRequest, State},
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    response::IntoResponse,
    BoxError,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bind a urlencoded form body or query string onto a [`VoiceRequest`].
///
/// A key sent more than once keeps its first value.
pub fn bind_voice_request(raw: &str) -> Result<VoiceRequest, AppError> {
    let mut pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(raw)?;
    let mut seen = HashSet::new();
    pairs.retain(|(key, _)| {
        let first = seen.insert(key.clone());
        if !first {
            warn!(key=%key, "ignoring repeated voice webhook parameter");
        }
        first
    });
    let deduped = serde_urlencoded::to_string(&pairs)?;
    Ok(serde_urlencoded::from_str::<VoiceRequest>(&deduped)?)
}

/// Extracts the voice webhook parameters from the query string for GET webhooks, or from the
/// form body otherwise.
#[derive(Debug, Clone)]
pub struct VoiceWebhook(pub VoiceRequest);

#[async_trait]
impl<S, B> FromRequest<S, B> for VoiceWebhook
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        if req.method() == Method::GET || req.method() == Method::HEAD {
            let query = req.uri().query().unwrap_or_default();
            trace!(query=%query, "voice webhook query");
            return Ok(Self(bind_voice_request(query)?));
        }

        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            let mime = content_type.split(';').next().unwrap_or_default().trim();
            if !mime.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
                return Err(AppError::UnsupportedMediaType(content_type.to_string()));
            }
        }

        let body = String::from_request(req, state)
            .await
            .map_err(|e| AppError::Body(e.to_string()))?;
        trace!(body=%body, "voice webhook body");
        Ok(Self(bind_voice_request(&body)?))
    }
}

/// Acknowledge a voice webhook with TwiML, optionally greeting the caller.
pub async fn voice_webhook(
    State(config): State<Arc<Config>>,
    VoiceWebhook(request): VoiceWebhook,
) -> impl IntoResponse {
    info!(
        call_sid = ?request.call_sid,
        call_status = ?request.call_status,
        direction = ?request.direction,
        "received voice webhook"
    );
    debug!(request = ?request, "voice webhook parameters");
    if let Some(Err(e)) = request.call_status.as_deref().map(str::parse::<CallStatus>) {
        warn!(error=%e, "voice webhook carries an undocumented call status");
    }

    let actions = config
        .greeting
        .iter()
        .map(|greeting| {
            ResponseAction::Say(SayAction {
                text: greeting.clone(),
                ..Default::default()
            })
        })
        .collect();
    let twiml = wrap_twiml(xmlserde::xml_serialize(Response { actions }));
    trace!("twiml: '{}'", twiml);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/xml"),
    );
    (StatusCode::OK, headers, twiml)
}
