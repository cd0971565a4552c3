use crate::{
	adapters::repositories::TPostRepository,
	domain::{
		post::{CreatePost, Post},
		session::Session,
	},
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	/// Creates a post for the caller of `session`.
	///
	/// The body is passed through untouched and the author-link is the
	/// session's user email, or `None` without a session. Whatever the
	/// repository returns, post or error, is returned as is: one write
	/// attempt, no retry.
	pub async fn create_post(
		cmd: CreatePost,
		session: Option<Session>,
		repository: &dyn TPostRepository,
	) -> Result<Post, ServiceError> {
		let author_email = session.as_ref().and_then(Session::email).map(str::to_string);
		if author_email.is_none() {
			tracing::warn!("Creating post without a session email");
		}

		let post = repository.create_post(cmd.into_new_post(author_email)).await.map_err(|err| {
			tracing::error!("Post creation failed :{}", err);
			err
		})?;

		tracing::info!(post_id = post.id, author_id = post.author_id, "Post created");
		Ok(post)
	}
}
