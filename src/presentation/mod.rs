pub mod config;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;

pub use config::{Environment, Page, Settings, UiSettings};
pub use router::create_router;
pub use session::SESSION_ID_HEADER;
pub use state::AppState;
