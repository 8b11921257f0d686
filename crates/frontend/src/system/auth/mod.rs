pub mod api;
pub mod context;
pub mod manager;
pub mod session;
pub mod storage;

pub use context::{use_api, use_auth, use_session_manager, AuthContext, AuthProvider};
pub use manager::SessionManager;
pub use session::{SessionError, SessionState, SessionStatus};
