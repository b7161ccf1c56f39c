use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::youtube::{TranscriptError, TranscriptProvider};
use crate::{Segment, extract_video_id};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared per-server state, passed explicitly to the router at startup
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TranscriptProvider>,
    pub lang: String,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/transcribe", post(transcribe))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    debug!("Health check");
    Json(json!({ "status": "OK" }))
}

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    video_id: String,
    transcript: String,
    transcript_segments: Vec<Segment>,
}

fn error_response(status: StatusCode, message: String, video_id: Option<&str>) -> Response {
    let mut body = json!({ "error": message });
    if let Some(id) = video_id {
        body["video_id"] = json!(id);
    }
    (status, Json(body)).into_response()
}

async fn transcribe(
    State(state): State<AppState>,
    payload: Result<Json<TranscribeRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid request format. Expected JSON body.".to_string(),
            None,
        );
    };

    let url = match request.url {
        Some(ref url) if !url.is_empty() => url,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing 'url' field in request body.".to_string(),
                None,
            );
        }
    };

    let Some(video_id) = extract_video_id(url) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid YouTube URL format. Please provide a valid YouTube video URL.".to_string(),
            None,
        );
    };

    info!("Fetching transcript for video {video_id}");

    match state.provider.fetch_transcript(&video_id, &state.lang).await {
        Ok(segments) => {
            let transcript = segments
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            Json(TranscribeResponse {
                video_id,
                transcript,
                transcript_segments: segments,
            })
            .into_response()
        }
        Err(err) => {
            let (status, message) = match &err {
                TranscriptError::Disabled | TranscriptError::NotFound | TranscriptError::Unavailable => {
                    (StatusCode::NOT_FOUND, err.to_string())
                }
                TranscriptError::Other(e) => {
                    error!("Unexpected error fetching transcript for {video_id}: {e}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to fetch transcript: {e}"),
                    )
                }
            };
            error_response(status, message, Some(&video_id))
        }
    }
}
