// Session of the caller as resolved by the authentication backend
use chrono::{DateTime, Utc};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Session {
	pub user: Option<SessionUser>,
	pub expires: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SessionUser {
	pub name: Option<String>,
	pub email: Option<String>,
	pub image: Option<String>,
}

impl Session {
	pub fn email(&self) -> Option<&str> {
		self.user.as_ref().and_then(|user| user.email.as_deref())
	}
}

/// Session resolved for the current request, `None` for anonymous callers.
#[derive(Clone, Debug, Default)]
pub struct CurrentSession(pub Option<Session>);

impl From<Option<Session>> for CurrentSession {
	fn from(value: Option<Session>) -> Self {
		Self(value)
	}
}

#[test]
fn test_email_of_partial_sessions() {
	let expires = Utc::now();
	let anonymous = Session { user: None, expires };
	assert_eq!(anonymous.email(), None);

	let without_email = Session {
		user: Some(SessionUser {
			name: Some("Alice".into()),
			..Default::default()
		}),
		expires,
	};
	assert_eq!(without_email.email(), None);

	let full = Session {
		user: Some(SessionUser {
			email: Some("alice@example.com".into()),
			..Default::default()
		}),
		expires,
	};
	assert_eq!(full.email(), Some("alice@example.com"));
}
