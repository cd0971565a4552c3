use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
	domain::post::{NewPost, Post, User},
	services::response::ServiceError,
};

use super::TPostRepository;

/// Post storage kept in process, following the same author-link rules as
/// the Postgres repository. Every call it receives is recorded.
#[derive(Default)]
pub struct InMemoryPostRepository {
	state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
	users: Vec<User>,
	posts: Vec<Post>,
	calls: Vec<NewPost>,
	fail_next: Option<ServiceError>,
}

impl InMemoryPostRepository {
	pub fn with_users<'a>(emails: impl IntoIterator<Item = &'a str>) -> Self {
		let users = emails
			.into_iter()
			.enumerate()
			.map(|(idx, email)| User {
				id: idx as i64 + 1,
				email: Some(email.to_string()),
				..Default::default()
			})
			.collect();
		Self {
			state: Mutex::new(MemoryState {
				users,
				..Default::default()
			}),
		}
	}

	/// The next `create_post` call fails with `err` without writing.
	pub async fn fail_next_with(
		&self,
		err: ServiceError,
	) {
		self.state.lock().await.fail_next = Some(err);
	}

	pub async fn calls(&self) -> Vec<NewPost> {
		self.state.lock().await.calls.clone()
	}

	pub async fn posts(&self) -> Vec<Post> {
		self.state.lock().await.posts.clone()
	}
}

#[async_trait]
impl TPostRepository for InMemoryPostRepository {
	async fn create_post(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError> {
		let mut state = self.state.lock().await;
		state.calls.push(post.clone());
		if let Some(err) = state.fail_next.take() {
			return Err(err);
		}

		let email = post.author_email.ok_or(ServiceError::AuthorUnresolved)?;
		let author_id = state
			.users
			.iter()
			.find(|user| user.email.as_deref() == Some(email.as_str()))
			.map(|user| user.id)
			.ok_or(ServiceError::UnknownAuthor(email))?;
		let title = post.title.ok_or(ServiceError::MissingField("title"))?;

		let created = Post {
			id: state.posts.len() as i64 + 1,
			title,
			content: post.content,
			published: false,
			author_id,
		};
		state.posts.push(created.clone());
		Ok(created)
	}
}
