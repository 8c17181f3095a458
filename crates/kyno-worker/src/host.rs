//! Host runtime capabilities
//!
//! The slice of the platform a service worker script touches: notification
//! display, window-client enumeration and control, and the two lifecycle
//! signals. The worker sees nothing else of the host.

use kyno_push::NotificationOptions;

/// Identifies one window client within a host.
pub type ClientId = u64;

/// Identifies one shown notification within a host.
pub type NotificationId = u64;

/// Client kinds a query can match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientType {
    #[default]
    Window,
    All,
}

/// Filter for [`WorkerHost::window_clients`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientQuery {
    pub client_type: ClientType,
    pub include_uncontrolled: bool,
}

impl ClientQuery {
    /// Window clients, controlled or not. What the click router asks for.
    pub fn windows() -> Self {
        Self {
            client_type: ClientType::Window,
            include_uncontrolled: true,
        }
    }
}

/// Host errors. The worker treats every one of these as best-effort.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("notification display failed: {0}")]
    Display(String),

    #[error("client {0} is gone")]
    ClientGone(ClientId),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("opening a new window is not supported")]
    OpenWindowUnsupported,
}

/// Capabilities the host runtime provides to the worker.
pub trait WorkerHost {
    /// Let a freshly installed worker activate without waiting.
    fn skip_waiting(&mut self);

    /// Take control of all open clients immediately.
    fn claim_clients(&mut self);

    /// Display a notification, returning its handle.
    fn show_notification(
        &mut self,
        title: &str,
        options: NotificationOptions,
    ) -> Result<NotificationId, HostError>;

    /// Dismiss a shown notification. Returns false if it was already gone.
    fn close_notification(&mut self, id: NotificationId) -> bool;

    /// Enumerate clients matching the query, in platform order.
    fn window_clients(&self, query: ClientQuery) -> Vec<ClientId>;

    /// Whether the client supports programmatic navigation.
    fn can_navigate(&self, id: ClientId) -> bool;

    /// Navigate an existing client.
    fn navigate(&mut self, id: ClientId, url: &str) -> Result<(), HostError>;

    /// Whether the client can be brought to the foreground.
    fn can_focus(&self, id: ClientId) -> bool;

    /// Focus an existing client.
    fn focus(&mut self, id: ClientId) -> Result<(), HostError>;

    /// Whether the host can open new windows at all.
    fn supports_open_window(&self) -> bool;

    /// Open a new window at `url`.
    fn open_window(&mut self, url: &str) -> Result<ClientId, HostError>;
}
