mod create_post;

use std::sync::Arc;

use axum::{middleware, routing::post, Router};
use sqlx::PgPool;

use crate::{
	adapters::{
		repositories::{PgPostRepository, TPostRepository},
		sessions::{PgSessionProvider, TSessionProvider},
	},
	common::middleware_session::resolve_session,
};

/// Collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
	pub posts: Arc<dyn TPostRepository>,
	pub sessions: Arc<dyn TSessionProvider>,
}

impl AppState {
	pub fn new(
		posts: Arc<dyn TPostRepository>,
		sessions: Arc<dyn TSessionProvider>,
	) -> Self {
		Self { posts, sessions }
	}

	pub fn postgres(pool: PgPool) -> Self {
		Self::new(
			Arc::new(PgPostRepository::new(pool.clone())),
			Arc::new(PgSessionProvider::new(pool)),
		)
	}
}

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/api/post", post(create_post::create_post))
		.route_layer(middleware::from_fn_with_state(state.clone(), resolve_session))
		.with_state(state)
}

#[cfg(test)]
mod test {
	use std::sync::Arc;

	use axum::{
		body::Body,
		http::{header, Method, Request, StatusCode},
		Router,
	};
	use chrono::{Duration, Utc};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	use super::{create_routes, AppState};
	use crate::{
		adapters::{repositories::memory::InMemoryPostRepository, sessions::StaticSessionProvider},
		domain::session::{Session, SessionUser},
	};

	fn session_of(email: &str) -> Session {
		Session {
			user: Some(SessionUser {
				email: Some(email.into()),
				..Default::default()
			}),
			expires: Utc::now() + Duration::days(1),
		}
	}

	fn set_up(sessions: StaticSessionProvider) -> (Router, Arc<InMemoryPostRepository>) {
		let repo = Arc::new(InMemoryPostRepository::with_users(["alice@example.com"]));
		let state = AppState::new(repo.clone(), Arc::new(sessions));
		(create_routes(state), repo)
	}

	fn default_sessions() -> StaticSessionProvider {
		StaticSessionProvider::default()
			.with_session("alice-token", session_of("alice@example.com"))
			.with_session("bob-token", session_of("bob@example.com"))
	}

	fn post_request(
		cookie: Option<&str>,
		body: Value,
	) -> Request<Body> {
		let mut builder = Request::builder()
			.method(Method::POST)
			.uri("/api/post")
			.header(header::CONTENT_TYPE, "application/json");
		if let Some(cookie) = cookie {
			builder = builder.header(header::COOKIE, cookie);
		}
		builder.body(Body::from(body.to_string())).unwrap()
	}

	async fn json_body(response: axum::response::Response) -> Value {
		let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	#[tokio::test]
	async fn test_create_post_returns_stored_row() {
		'_given: {
			let (app, repo) = set_up(default_sessions());

			'_when: {
				let response = app
					.oneshot(post_request(
						Some("next-auth.session-token=alice-token"),
						json!({"title": "Hello", "content": "World"}),
					))
					.await
					.unwrap();

				assert_eq!(response.status(), StatusCode::OK);
				let body = json_body(response).await;
				assert_eq!(
					body,
					json!({"id": 1, "title": "Hello", "content": "World", "published": false, "authorId": 1})
				);
				assert_eq!(serde_json::to_value(&repo.posts().await[0]).unwrap(), body);
			}
		}
	}

	#[tokio::test]
	async fn test_bearer_token_is_accepted() {
		let (app, _repo) = set_up(default_sessions());
		let request = Request::builder()
			.method(Method::POST)
			.uri("/api/post")
			.header(header::CONTENT_TYPE, "application/json")
			.header(header::AUTHORIZATION, "Bearer alice-token")
			.body(Body::from(json!({"title": "Hello"}).to_string()))
			.unwrap();

		let response = app.oneshot(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(json_body(response).await["content"], Value::Null);
	}

	#[tokio::test]
	async fn test_anonymous_request_is_unauthorized() {
		'_given: {
			let (app, repo) = set_up(default_sessions());

			'_when: {
				let response = app.oneshot(post_request(None, json!({"title": "Hello"}))).await.unwrap();

				assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
				assert_eq!(repo.calls().await[0].author_email, None);
				assert!(repo.posts().await.is_empty());
			}
		}
	}

	#[tokio::test]
	async fn test_unknown_token_is_anonymous() {
		let (app, repo) = set_up(default_sessions());
		let response = app
			.oneshot(post_request(Some("next-auth.session-token=stale"), json!({"title": "Hello"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
		assert_eq!(repo.calls().await.len(), 1);
	}

	#[tokio::test]
	async fn test_session_without_user_record() {
		let (app, _repo) = set_up(default_sessions());
		let response = app
			.oneshot(post_request(Some("next-auth.session-token=bob-token"), json!({"title": "Hello"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(json_body(response).await["error"], "UnknownAuthor: bob@example.com");
	}

	#[tokio::test]
	async fn test_missing_title_is_rejected_by_storage() {
		let (app, repo) = set_up(default_sessions());
		let response = app
			.oneshot(post_request(Some("next-auth.session-token=alice-token"), json!({"content": "World"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(repo.calls().await[0].title, None);
	}

	#[tokio::test]
	async fn test_session_backend_failure() {
		let (app, repo) = set_up(StaticSessionProvider::unavailable());
		let response = app
			.oneshot(post_request(Some("next-auth.session-token=alice-token"), json!({"title": "Hello"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(repo.calls().await.is_empty());
	}

	#[tokio::test]
	async fn test_only_post_is_routed() {
		let (app, _repo) = set_up(default_sessions());
		let response = app
			.clone()
			.oneshot(Request::builder().uri("/api/post").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

		let response = app
			.oneshot(Request::builder().method(Method::POST).uri("/api/posts").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}
}
