use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::{
	database::DatabaseExecutor,
	domain::post::{NewPost, Post},
	services::response::ServiceError,
};

use super::TPostRepository;

#[derive(Clone)]
pub struct PgPostRepository {
	pool: PgPool,
}

impl PgPostRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	async fn insert(
		conn: &mut PgConnection,
		post: NewPost,
	) -> Result<Post, ServiceError> {
		let email = post.author_email.ok_or(ServiceError::AuthorUnresolved)?;

		let author_id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
			.bind(&email)
			.fetch_optional(&mut *conn)
			.await?;
		let author_id = author_id.ok_or(ServiceError::UnknownAuthor(email))?;

		let title = post.title.ok_or(ServiceError::MissingField("title"))?;

		let created = sqlx::query_as::<_, Post>(
			r#"
			INSERT INTO posts (title, content, published, author_id)
			VALUES ($1, $2, FALSE, $3)
			RETURNING id, title, content, published, author_id
			"#,
		)
		.bind(title)
		.bind(post.content)
		.bind(author_id)
		.fetch_one(&mut *conn)
		.await?;
		Ok(created)
	}
}

#[async_trait]
impl TPostRepository for PgPostRepository {
	async fn create_post(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError> {
		let mut executor = DatabaseExecutor::new(self.pool.clone());
		executor.begin().await?;

		let result = Self::insert(&mut **executor.transaction()?, post).await;
		match result {
			Ok(created) => {
				executor.commit().await?;
				Ok(created)
			}
			Err(err) => {
				if let Err(rollback_err) = executor.rollback().await {
					tracing::error!("Rollback failed after {} :{:?}", err, rollback_err);
				}
				Err(err)
			}
		}
	}
}
