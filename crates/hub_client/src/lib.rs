pub mod debounce;
pub mod format;
pub mod headlines;
pub mod mock;
pub mod session;

pub use debounce::SearchDebouncer;
pub use headlines::{ClientConfig, HeadlinesClient};
pub use session::Session;

pub mod prelude {
    pub use super::{ClientConfig, HeadlinesClient, Session};
    pub use hub_core::{Article, ArticleId, Result};
}
