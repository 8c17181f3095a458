//! Worker event handling
//!
//! The four events the Kyno service worker reacts to, and the handlers
//! behind them. Handlers never fail: every error path degrades to a safe
//! default and is logged.

use kyno_push::{resolve_click_target, Notification, NotificationData, PushPayload};
use url::Url;

use crate::host::{ClientQuery, NotificationId, WorkerHost};

/// Where the worker runs: its own script URL and registration scope.
#[derive(Debug, Clone)]
pub struct WorkerLocation {
    pub href: String,
    pub scope: Option<String>,
}

impl WorkerLocation {
    pub fn new(href: &str, scope: Option<&str>) -> Self {
        Self {
            href: href.to_string(),
            scope: scope.map(str::to_string),
        }
    }

    /// The registration scope, falling back to the origin root when the
    /// registration carries none.
    pub fn effective_scope(&self) -> String {
        if let Some(scope) = self.scope.as_deref() {
            if !scope.is_empty() {
                return scope.to_string();
            }
        }
        match Url::parse(&self.href) {
            Ok(url) => format!("{}/", url.origin().ascii_serialization()),
            Err(_) => "/".to_string(),
        }
    }
}

/// Events delivered by the host runtime.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Install,
    Activate,
    /// Push message, with the raw payload bytes if any.
    Push { payload: Option<Vec<u8>> },
    /// User clicked a shown notification.
    NotificationClick {
        notification: NotificationId,
        data: Option<NotificationData>,
    },
}

/// The Kyno service worker.
#[derive(Debug, Clone)]
pub struct PushWorker {
    location: WorkerLocation,
}

impl PushWorker {
    pub fn new(location: WorkerLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &WorkerLocation {
        &self.location
    }

    /// Dispatch one host event.
    pub fn handle_event(&self, host: &mut dyn WorkerHost, event: WorkerEvent) {
        match event {
            WorkerEvent::Install => self.handle_install(host),
            WorkerEvent::Activate => self.handle_activate(host),
            WorkerEvent::Push { payload } => self.handle_push(host, payload.as_deref()),
            WorkerEvent::NotificationClick { notification, data } => {
                self.handle_click(host, notification, data.as_ref())
            }
        }
    }

    /// Activate the new worker without waiting for old clients to unload.
    fn handle_install(&self, host: &mut dyn WorkerHost) {
        tracing::debug!("install: skipping waiting phase");
        host.skip_waiting();
    }

    /// Take over all open clients.
    fn handle_activate(&self, host: &mut dyn WorkerHost) {
        tracing::debug!("activate: claiming clients");
        host.claim_clients();
    }

    /// Show a notification for an incoming push message. The handler
    /// returns only after the display call settles, and it never fails:
    /// malformed payloads degrade to a default notification.
    fn handle_push(&self, host: &mut dyn WorkerHost, payload: Option<&[u8]>) {
        let payload = payload.map(PushPayload::parse).unwrap_or_default();
        let scope = self.location.effective_scope();
        let notification = Notification::from_payload(&payload, &scope);

        if let Err(err) = host.show_notification(&notification.title, notification.options) {
            tracing::warn!("push notification not shown: {}", err);
        }
    }

    /// Dismiss the clicked notification and bring one client to the
    /// stored target.
    fn handle_click(
        &self,
        host: &mut dyn WorkerHost,
        notification: NotificationId,
        data: Option<&NotificationData>,
    ) {
        // Close first, whatever routing does afterwards.
        host.close_notification(notification);

        let scope = self.location.effective_scope();
        let stored = data.map(|d| d.url.as_str()).filter(|u| !u.is_empty());
        let target = resolve_click_target(stored, &scope, &self.location.href);

        let clients = host.window_clients(ClientQuery::windows());
        let mut navigated = false;
        for id in clients.iter().copied() {
            if !navigated && host.can_navigate(id) {
                if let Err(err) = host.navigate(id, &target) {
                    tracing::warn!("client {} navigation failed: {}", id, err);
                }
                navigated = true;
            }
            if host.can_focus(id) {
                if let Err(err) = host.focus(id) {
                    tracing::warn!("client {} focus failed: {}", id, err);
                }
                return;
            }
        }

        if clients.is_empty() && host.supports_open_window() {
            if let Err(err) = host.open_window(&target) {
                tracing::warn!("open window at {} failed: {}", target, err);
            }
        }
    }
}
