//! Click-target resolution
//!
//! Turns the URL stored on a notification into an absolute target that is
//! safe to open. A target resolving outside the worker's origin is
//! rejected and replaced with the default in-app route.

use url::Url;

/// Default in-app route for notifications.
pub const DEFAULT_ROUTE: &str = "#/notifications";

/// Resolve a stored click target against the worker scope.
///
/// `scope` is itself resolved against `href`, the worker's own location.
/// The function is total: every failure path lands on the default route.
pub fn resolve_click_target(raw: Option<&str>, scope: &str, href: &str) -> String {
    if let Some(target) = scoped_target(raw, scope, href) {
        return target;
    }

    // Scope was unusable; fall back to the worker's own location.
    match Url::parse(href).and_then(|base| base.join(DEFAULT_ROUTE)) {
        Ok(url) => url.to_string(),
        Err(_) => DEFAULT_ROUTE.to_string(),
    }
}

fn scoped_target(raw: Option<&str>, scope: &str, href: &str) -> Option<String> {
    let base = Url::parse(href).ok()?.join(scope).ok()?;
    let candidate = base.join(raw.unwrap_or(DEFAULT_ROUTE)).ok()?;

    if candidate.origin() == base.origin() {
        return Some(candidate.to_string());
    }

    tracing::warn!("cross-origin click target rejected: {}", candidate);
    base.join(DEFAULT_ROUTE).ok().map(|url| url.to_string())
}
