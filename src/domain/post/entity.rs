use serde::{Deserialize, Serialize};

/// A stored post, serialized the way it is returned to clients.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: Option<String>,
	pub published: bool,
	pub author_id: i64,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct User {
	pub id: i64,
	pub name: Option<String>,
	pub email: Option<String>,
	pub image: Option<String>,
}
