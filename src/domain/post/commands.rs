use serde::{Deserialize, Serialize};

/// Body of `POST /api/post`.
///
/// Both fields are taken as given. A missing field deserializes to `None`
/// and an empty string stays an empty string.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CreatePost {
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub content: Option<String>,
}

/// What the storage layer receives to create a post.
///
/// `author_email` is the author-link: the post is attached to the existing
/// user owning that email. `None` when the caller has no resolvable session.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NewPost {
	pub title: Option<String>,
	pub content: Option<String>,
	pub author_email: Option<String>,
}

impl CreatePost {
	pub fn into_new_post(
		self,
		author_email: Option<String>,
	) -> NewPost {
		NewPost {
			title: self.title,
			content: self.content,
			author_email,
		}
	}
}

#[test]
fn test_missing_fields_deserialize_to_none() {
	let cmd = serde_json::from_str::<CreatePost>(r#"{"title":"Hello"}"#).unwrap();
	assert_eq!(cmd.title.as_deref(), Some("Hello"));
	assert_eq!(cmd.content, None);

	let cmd = serde_json::from_str::<CreatePost>("{}").unwrap();
	assert_eq!(cmd, CreatePost::default());
}

#[test]
fn test_empty_title_is_kept() {
	let cmd = serde_json::from_str::<CreatePost>(r#"{"title":"","content":"World"}"#).unwrap();
	assert_eq!(cmd.title.as_deref(), Some(""));
	assert_eq!(cmd.content.as_deref(), Some("World"));
}
