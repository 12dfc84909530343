pub mod config;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod input;
pub mod message;
pub mod presenter;
pub mod query;
pub mod render;
pub mod state;
pub mod template;
pub mod trace;
pub mod transport;
pub mod types;

pub use config::SearchConfig;
pub use coordinator::{InputEvent, SearchCoordinator};
pub use error::{Result, TransportError};
pub use presenter::Presenter;
pub use state::SearchState;
pub use transport::{Credentials, SearchTransport};
pub use types::{ArticleRecord, CollectionId, CollectionWhitelist, ResultSet};
