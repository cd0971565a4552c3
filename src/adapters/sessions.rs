use async_trait::async_trait;
use axum::{
	headers::{authorization::Bearer, Authorization, Cookie, HeaderMapExt},
	http::HeaderMap,
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
	domain::session::{Session, SessionUser},
	services::response::ServiceError,
};

pub const SECURE_SESSION_COOKIE: &str = "__Secure-next-auth.session-token";
pub const SESSION_COOKIE: &str = "next-auth.session-token";

/// Credentials a request carries to identify its session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCredentials {
	pub token: Option<String>,
}

impl SessionCredentials {
	/// Session cookie first (secure variant wins), then a bearer token.
	pub fn from_headers(headers: &HeaderMap) -> Self {
		let from_cookie = headers.typed_get::<Cookie>().and_then(|cookie| {
			cookie
				.get(SECURE_SESSION_COOKIE)
				.filter(|value| !value.is_empty())
				.or_else(|| cookie.get(SESSION_COOKIE).filter(|value| !value.is_empty()))
				.map(str::to_string)
		});
		let token = from_cookie.or_else(|| {
			headers
				.typed_get::<Authorization<Bearer>>()
				.map(|Authorization(bearer)| bearer.token().to_string())
				.filter(|token| !token.is_empty())
		});
		Self { token }
	}
}

/// Authentication collaborator: turns request credentials into a session.
#[async_trait]
pub trait TSessionProvider: Send + Sync {
	async fn resolve_session(
		&self,
		credentials: &SessionCredentials,
	) -> Result<Option<Session>, ServiceError>;
}

/// Reads sessions persisted by the authentication backend.
#[derive(Clone)]
pub struct PgSessionProvider {
	pool: PgPool,
}

impl PgSessionProvider {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

type SessionRow = (DateTime<Utc>, Option<String>, Option<String>, Option<String>);

#[async_trait]
impl TSessionProvider for PgSessionProvider {
	async fn resolve_session(
		&self,
		credentials: &SessionCredentials,
	) -> Result<Option<Session>, ServiceError> {
		let Some(token) = credentials.token.as_deref() else {
			return Ok(None);
		};

		let row: Option<SessionRow> = sqlx::query_as(
			r#"
			SELECT s.expires, u.name, u.email, u.image
			FROM sessions s
			JOIN users u ON u.id = s.user_id
			WHERE s.session_token = $1 AND s.expires > NOW()
			"#,
		)
		.bind(token)
		.fetch_optional(&self.pool)
		.await?;

		Ok(row.map(|(expires, name, email, image)| Session {
			user: Some(SessionUser { name, email, image }),
			expires,
		}))
	}
}

#[cfg(any(test, feature = "test"))]
pub use self::fixture::StaticSessionProvider;

#[cfg(any(test, feature = "test"))]
mod fixture {
	use std::collections::HashMap;

	use async_trait::async_trait;

	use super::{SessionCredentials, TSessionProvider};
	use crate::{domain::session::Session, services::response::ServiceError};

	/// Fixed token -> session table.
	#[derive(Default)]
	pub struct StaticSessionProvider {
		sessions: HashMap<String, Session>,
		unavailable: bool,
	}

	impl StaticSessionProvider {
		pub fn with_session(
			mut self,
			token: &str,
			session: Session,
		) -> Self {
			self.sessions.insert(token.to_string(), session);
			self
		}

		/// Every lookup fails as if the backend were down.
		pub fn unavailable() -> Self {
			Self {
				unavailable: true,
				..Default::default()
			}
		}
	}

	#[async_trait]
	impl TSessionProvider for StaticSessionProvider {
		async fn resolve_session(
			&self,
			credentials: &SessionCredentials,
		) -> Result<Option<Session>, ServiceError> {
			if self.unavailable {
				return Err(ServiceError::DatabaseError("session backend unavailable".into()));
			}
			Ok(credentials.token.as_ref().and_then(|token| self.sessions.get(token)).cloned())
		}
	}
}
