//! Notification construction
//!
//! Builds the notification shown for a push event: the title, the display
//! options, and the data blob the click handler reads back later.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::payload::PushPayload;
use crate::route::DEFAULT_ROUTE;

/// Notification tag used when the payload names none. Notifications with
/// the same tag replace each other.
pub const DEFAULT_TAG: &str = "kyno";

/// App icon, relative to the worker scope.
pub const ICON_PATH: &str = "icons/Icon-192.png";

/// Data stored on a displayed notification and handed back on click.
/// Serializes as `{"url": ..., ...extra}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationData {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            extra: Map::new(),
        }
    }
}

/// Display options for one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationOptions {
    pub body: String,
    pub tag: String,
    pub icon: String,
    pub badge: String,
    pub data: NotificationData,
}

/// A notification ready to hand to the host for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub options: NotificationOptions,
}

impl Notification {
    /// Build the notification for a push payload against the worker scope.
    ///
    /// The stored click target is the payload's `url` (top-level wins over
    /// `data.url`), falling back to the default in-app route. Remaining
    /// `data` keys ride along in the notification data.
    pub fn from_payload(payload: &PushPayload, scope: &str) -> Self {
        let icon = resolve_asset(scope, ICON_PATH);
        let url = payload.click_target().unwrap_or(DEFAULT_ROUTE).to_string();

        let mut extra = payload.data.clone();
        extra.remove("url");

        Self {
            title: payload.title_or_default().to_string(),
            options: NotificationOptions {
                body: payload.body.clone().unwrap_or_default(),
                tag: payload
                    .tag
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(DEFAULT_TAG)
                    .to_string(),
                badge: icon.clone(),
                icon,
                data: NotificationData { url, extra },
            },
        }
    }
}

/// Resolve a relative asset path against the worker scope. The scope is
/// host-provided and well-formed in practice; if it is not, the relative
/// path is passed through so dispatch still succeeds.
fn resolve_asset(scope: &str, path: &str) -> String {
    match Url::parse(scope).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => path.to_string(),
    }
}
