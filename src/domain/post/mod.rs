pub mod commands;
pub mod entity;

pub use self::commands::{CreatePost, NewPost};
pub use self::entity::{Post, User};
