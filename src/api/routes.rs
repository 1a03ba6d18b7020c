use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::models::{GenerateRequest, GenerateResponse};
use crate::api::response;
use crate::error::{AppError, Result};
use crate::prompt::{self, PromptSource};
use crate::{extract, present, AppState};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}

async fn generate_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<GenerateRequest>,
) -> impl IntoResponse {
    let (jar, session_id) = get_or_issue_session(jar);

    match process_generate(&state, &session_id, &req).await {
        Ok(data) => (jar, response::success(data)),
        Err(err) => {
            warn!(%session_id, error = %err, "generation failed");
            (jar, response::failure(err.status(), err.to_string()))
        }
    }
}

// Sessions are browser-session cookies: no max-age, so the id and its
// request log die together when the session ends.
fn get_or_issue_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = jar.get("session_id").map(|c| c.value().to_string()) {
        return (jar, id);
    }
    let session_id = Uuid::new_v4().to_string();
    let cookie = Cookie::build(("session_id", session_id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), session_id)
}

async fn process_generate(
    state: &AppState,
    session_id: &str,
    req: &GenerateRequest,
) -> Result<GenerateResponse> {
    let product = req.product.trim();
    let theme = req.theme.trim();
    let url = req.url.trim();

    if product.is_empty() && url.is_empty() {
        return Err(AppError::InputError(
            "Please enter a product/idea or a URL".to_string(),
        ));
    }

    {
        let mut limiter = state.limiter.lock().await;
        if !limiter.check(session_id) {
            return Err(AppError::RateLimitError(format!(
                "Max {} requests per {} sec",
                state.config.max_requests, state.config.time_window_seconds
            )));
        }
    }

    let style = state.config.prompt_style;
    let (source, prompt_source) = if !url.is_empty() {
        debug!(url, "fetching page content");
        let content = extract::extract(url, style.strips_brand_suffix()).await;
        if content.is_empty() {
            return Err(AppError::FetchError(
                "Could not fetch content from the URL".to_string(),
            ));
        }
        ("url", PromptSource::Page { content })
    } else {
        (
            "product",
            PromptSource::Product {
                product: product.to_string(),
                theme: theme.to_string(),
            },
        )
    };

    let full_prompt = prompt::build(style, &prompt_source);
    debug!(chars = full_prompt.len(), "built prompt");

    let body = state
        .llm
        .invoke(&full_prompt, style.max_tokens(), style.temperature())
        .await?;
    let lines = present::present(style, &body)?;

    info!(%session_id, source, lines = lines.len(), "generated");

    Ok(GenerateResponse {
        lines,
        source: source.to_string(),
        model_id: state.llm.model_id().to_string(),
        generated_at: Utc::now(),
    })
}
