//! Window clients and the in-memory host
//!
//! [`InMemoryHost`] is a self-contained host runtime: a list of window
//! clients plus a ledger of shown notifications. The tests and the demo
//! binary run the worker against it.

use std::collections::HashMap;

use kyno_push::NotificationOptions;

use crate::host::{ClientId, ClientQuery, HostError, NotificationId, WorkerHost};

/// One open tab or window the worker may control.
#[derive(Debug, Clone)]
pub struct WindowClient {
    pub id: ClientId,
    pub url: String,
    pub focused: bool,
    pub controlled: bool,
    /// Whether the client exposes programmatic navigation.
    pub navigable: bool,
    /// Whether the client can be brought to the foreground.
    pub focusable: bool,
}

/// A notification the host is currently displaying.
#[derive(Debug, Clone)]
pub struct ShownNotification {
    pub id: NotificationId,
    pub title: String,
    pub options: NotificationOptions,
}

/// In-process host runtime.
#[derive(Debug)]
pub struct InMemoryHost {
    clients: Vec<WindowClient>,
    next_client_id: ClientId,
    notifications: HashMap<NotificationId, ShownNotification>,
    next_notification_id: NotificationId,
    closed: Vec<NotificationId>,
    skipped_waiting: bool,
    claimed: bool,
    open_window_supported: bool,
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
            next_client_id: 1,
            notifications: HashMap::new(),
            next_notification_id: 1,
            closed: Vec::new(),
            skipped_waiting: false,
            claimed: false,
            open_window_supported: true,
        }
    }

    /// Same host, but unable to open new windows.
    pub fn without_open_window(mut self) -> Self {
        self.open_window_supported = false;
        self
    }

    /// Add an open window client with full capabilities. Returns its id.
    pub fn add_window(&mut self, url: &str) -> ClientId {
        self.add_window_with(url, true, true)
    }

    /// Add a window client with explicit capabilities.
    pub fn add_window_with(&mut self, url: &str, navigable: bool, focusable: bool) -> ClientId {
        let id = self.next_client_id;
        self.next_client_id += 1;
        self.clients.push(WindowClient {
            id,
            url: url.to_string(),
            focused: false,
            controlled: false,
            navigable,
            focusable,
        });
        id
    }

    pub fn client(&self, id: ClientId) -> Option<&WindowClient> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn clients(&self) -> &[WindowClient] {
        &self.clients
    }

    /// Notifications currently on screen, oldest first.
    pub fn shown(&self) -> Vec<&ShownNotification> {
        let mut shown: Vec<_> = self.notifications.values().collect();
        shown.sort_by_key(|n| n.id);
        shown
    }

    pub fn notification(&self, id: NotificationId) -> Option<&ShownNotification> {
        self.notifications.get(&id)
    }

    pub fn was_closed(&self, id: NotificationId) -> bool {
        self.closed.contains(&id)
    }

    pub fn skipped_waiting(&self) -> bool {
        self.skipped_waiting
    }

    pub fn claimed(&self) -> bool {
        self.claimed
    }

    fn client_mut(&mut self, id: ClientId) -> Result<&mut WindowClient, HostError> {
        self.clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(HostError::ClientGone(id))
    }
}

impl WorkerHost for InMemoryHost {
    fn skip_waiting(&mut self) {
        self.skipped_waiting = true;
    }

    fn claim_clients(&mut self) {
        self.claimed = true;
        for client in &mut self.clients {
            client.controlled = true;
        }
    }

    fn show_notification(
        &mut self,
        title: &str,
        options: NotificationOptions,
    ) -> Result<NotificationId, HostError> {
        // Same tag replaces the previous notification.
        self.notifications.retain(|_, n| n.options.tag != options.tag);

        let id = self.next_notification_id;
        self.next_notification_id += 1;
        tracing::debug!("showing notification {}: {}", id, title);
        self.notifications.insert(
            id,
            ShownNotification {
                id,
                title: title.to_string(),
                options,
            },
        );
        Ok(id)
    }

    fn close_notification(&mut self, id: NotificationId) -> bool {
        if self.notifications.remove(&id).is_some() {
            self.closed.push(id);
            true
        } else {
            false
        }
    }

    fn window_clients(&self, query: ClientQuery) -> Vec<ClientId> {
        // Every client here is a window, so only the controlled filter
        // applies.
        self.clients
            .iter()
            .filter(|c| query.include_uncontrolled || c.controlled)
            .map(|c| c.id)
            .collect()
    }

    fn can_navigate(&self, id: ClientId) -> bool {
        self.client(id).map(|c| c.navigable).unwrap_or(false)
    }

    fn navigate(&mut self, id: ClientId, url: &str) -> Result<(), HostError> {
        let client = self.client_mut(id)?;
        if !client.navigable {
            return Err(HostError::Navigation {
                url: url.to_string(),
                reason: "client does not support navigation".to_string(),
            });
        }
        client.url = url.to_string();
        Ok(())
    }

    fn can_focus(&self, id: ClientId) -> bool {
        self.client(id).map(|c| c.focusable).unwrap_or(false)
    }

    fn focus(&mut self, id: ClientId) -> Result<(), HostError> {
        if self.client(id).is_none() {
            return Err(HostError::ClientGone(id));
        }
        // Only one window holds focus at a time.
        for client in &mut self.clients {
            client.focused = client.id == id;
        }
        Ok(())
    }

    fn supports_open_window(&self) -> bool {
        self.open_window_supported
    }

    fn open_window(&mut self, url: &str) -> Result<ClientId, HostError> {
        if !self.open_window_supported {
            return Err(HostError::OpenWindowUnsupported);
        }
        let id = self.add_window(url);
        self.focus(id)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyno_push::{Notification, PushPayload};

    fn options(tag: &str) -> NotificationOptions {
        let payload = PushPayload::parse(format!(r#"{{"tag":"{tag}"}}"#).as_bytes());
        Notification::from_payload(&payload, "https://app.example/").options
    }

    #[test]
    fn test_same_tag_replaces() {
        let mut host = InMemoryHost::new();
        let first = host.show_notification("One", options("t")).unwrap();
        let second = host.show_notification("Two", options("t")).unwrap();

        assert_ne!(first, second);
        assert_eq!(host.shown().len(), 1);
        assert_eq!(host.shown()[0].title, "Two");
    }

    #[test]
    fn test_distinct_tags_stack() {
        let mut host = InMemoryHost::new();
        host.show_notification("One", options("a")).unwrap();
        host.show_notification("Two", options("b")).unwrap();

        assert_eq!(host.shown().len(), 2);
    }

    #[test]
    fn test_close_records_id() {
        let mut host = InMemoryHost::new();
        let id = host.show_notification("One", options("t")).unwrap();

        assert!(host.close_notification(id));
        assert!(host.was_closed(id));
        assert!(!host.close_notification(id));
        assert!(host.shown().is_empty());
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut host = InMemoryHost::new();
        let a = host.add_window("https://app.example/a");
        let b = host.add_window("https://app.example/b");

        host.focus(a).unwrap();
        host.focus(b).unwrap();

        assert!(!host.client(a).unwrap().focused);
        assert!(host.client(b).unwrap().focused);
    }

    #[test]
    fn test_claim_marks_clients_controlled() {
        let mut host = InMemoryHost::new();
        let id = host.add_window("https://app.example/");
        assert!(!host.client(id).unwrap().controlled);

        host.claim_clients();

        assert!(host.claimed());
        assert!(host.client(id).unwrap().controlled);
    }

    #[test]
    fn test_controlled_filter() {
        let mut host = InMemoryHost::new();
        host.add_window("https://app.example/");

        let controlled_only = ClientQuery {
            include_uncontrolled: false,
            ..ClientQuery::windows()
        };
        assert!(host.window_clients(controlled_only).is_empty());
        assert_eq!(host.window_clients(ClientQuery::windows()).len(), 1);
    }

    #[test]
    fn test_navigate_rejected_without_capability() {
        let mut host = InMemoryHost::new();
        let id = host.add_window_with("https://app.example/", false, true);

        assert!(!host.can_navigate(id));
        assert!(host.navigate(id, "https://app.example/x").is_err());
        assert_eq!(host.client(id).unwrap().url, "https://app.example/");
    }

    #[test]
    fn test_open_window_unsupported() {
        let mut host = InMemoryHost::new().without_open_window();

        assert!(!host.supports_open_window());
        assert!(matches!(
            host.open_window("https://app.example/"),
            Err(HostError::OpenWindowUnsupported)
        ));
    }
}
