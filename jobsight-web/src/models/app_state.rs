use shared::models::User;
use yewdux::Store;

/// Process-wide session state.
///
/// `user` is `Some` only while a server-confirmed session exists; it is
/// never persisted and is re-derived from `/auth/me` on every page load.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
}
