use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::adapters::sessions::SessionCredentials;
use crate::domain::session::CurrentSession;
use crate::routes::AppState;
use crate::services::response::ServiceError;

/// Resolves the caller's session and hands it to the route as a
/// [`CurrentSession`] extension. A failing session backend ends the request.
pub async fn resolve_session<B>(
	State(state): State<AppState>,
	mut request: Request<B>,
	next: Next<B>,
) -> Result<Response, ServiceError> {
	let credentials = SessionCredentials::from_headers(request.headers());

	let session = state.sessions.resolve_session(&credentials).await.map_err(|err| {
		tracing::error!("Session lookup failed :{}", err);
		err
	})?;
	if session.is_none() {
		tracing::info!("Unknown browser Accessed!");
	}

	request.extensions_mut().insert(CurrentSession(session));

	Ok(next.run(request).await)
}
