pub mod post_repository;
#[cfg(any(test, feature = "test"))]
pub mod memory;

use async_trait::async_trait;

use crate::{
	domain::post::{NewPost, Post},
	services::response::ServiceError,
};

pub use self::post_repository::PgPostRepository;

/// Storage collaborator for posts.
///
/// `create_post` resolves the author-link before writing anything:
/// * no author email -> [`ServiceError::AuthorUnresolved`]
/// * no user with that email -> [`ServiceError::UnknownAuthor`]
/// * no title -> [`ServiceError::MissingField`]
///
/// Otherwise exactly one row is inserted with `published = false` and
/// returned as stored.
#[async_trait]
pub trait TPostRepository: Send + Sync {
	async fn create_post(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError>;
}
