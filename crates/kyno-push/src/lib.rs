//! Kyno push notifications
//!
//! Core logic of the Kyno service worker: push payload parsing,
//! notification construction, and click-target resolution.
//!
//! Everything here is a pure function over explicit inputs (payload bytes,
//! worker scope, worker location). Nothing in this crate talks to a host
//! runtime; the worker glue lives in `kyno-worker`.

pub mod payload;
pub mod notification;
pub mod route;

pub use payload::{PushPayload, DEFAULT_TITLE};
pub use notification::{Notification, NotificationData, NotificationOptions};
pub use route::{resolve_click_target, DEFAULT_ROUTE};
