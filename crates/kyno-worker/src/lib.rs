//! Kyno service worker
//!
//! Event handling for the Kyno web app's service worker: install/activate
//! lifecycle, push notification display, and notification-click routing.
//!
//! The host runtime is injected behind [`host::WorkerHost`]; the pure
//! payload and URL logic lives in `kyno-push`. [`clients::InMemoryHost`]
//! is a complete in-process host used by the tests and the demo binary.

pub mod host;
pub mod clients;
pub mod worker;

pub use host::{ClientId, ClientQuery, ClientType, HostError, NotificationId, WorkerHost};
pub use clients::{InMemoryHost, ShownNotification, WindowClient};
pub use worker::{PushWorker, WorkerEvent, WorkerLocation};
