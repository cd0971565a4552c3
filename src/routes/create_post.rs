use axum::{extract::State, Extension, Json};
use axum_macros::debug_handler;

use crate::{
	domain::{
		post::{CreatePost, Post},
		session::CurrentSession,
	},
	services::{handlers::PostHandler, response::ServiceError},
};

use super::AppState;

// POST /api/post
#[debug_handler]
pub async fn create_post(
	State(state): State<AppState>,
	Extension(CurrentSession(session)): Extension<CurrentSession>,
	Json(cmd): Json<CreatePost>,
) -> Result<Json<Post>, ServiceError> {
	PostHandler::create_post(cmd, session, state.posts.as_ref()).await.map(Json)
}
