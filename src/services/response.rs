use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;

pub type AnyError = dyn std::error::Error + Send + Sync + 'static;

#[derive(Debug)]
pub enum ServiceError {
	/// The post has no author-link: the caller carried no session email.
	AuthorUnresolved,
	/// No user owns the session email.
	UnknownAuthor(String),
	/// A column the storage schema declares `NOT NULL` was not given.
	MissingField(&'static str),
	DatabaseError(Box<AnyError>),
	ConfigError(String),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::AuthorUnresolved => StatusCode::UNAUTHORIZED,
			ServiceError::UnknownAuthor(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ServiceError::MissingField(_) => StatusCode::BAD_REQUEST,
			ServiceError::DatabaseError(_) | ServiceError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::AuthorUnresolved => write!(f, "AuthorUnresolved"),
			ServiceError::UnknownAuthor(email) => write!(f, "UnknownAuthor: {}", email),
			ServiceError::MissingField(field) => write!(f, "MissingField: {}", field),
			ServiceError::DatabaseError(res) => write!(f, "{}", res),
			ServiceError::ConfigError(res) => write!(f, "ConfigError: {}", res),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let message = if status.is_server_error() {
			tracing::error!("Request failed :{}", self);
			status.canonical_reason().unwrap_or("Internal Server Error").to_string()
		} else {
			self.to_string()
		};
		(status, Json(json!({ "error": message }))).into_response()
	}
}
