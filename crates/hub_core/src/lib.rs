pub mod error;
pub mod id;
pub mod types;

pub use error::Error;
pub use id::ArticleId;
pub use types::{Article, Bookmark, Source};

pub type Result<T> = std::result::Result<T, Error>;
