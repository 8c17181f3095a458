//! Kyno service worker demo
//!
//! Simulates one push delivery and the user clicking the resulting
//! notification, against the in-memory host.

use kyno_worker::{InMemoryHost, PushWorker, WorkerEvent, WorkerLocation};

const SCOPE: &str = "https://app.kyno.example/";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Payload comes from the command line, or a canned sample.
    let payload = std::env::args().nth(1).unwrap_or_else(|| {
        r#"{"title":"Order shipped","body":"Order #5 is on its way","url":"/orders/5"}"#
            .to_string()
    });

    let mut host = InMemoryHost::new();
    host.add_window(SCOPE);

    let worker = PushWorker::new(WorkerLocation::new(
        &format!("{SCOPE}sw.js"),
        Some(SCOPE),
    ));

    worker.handle_event(&mut host, WorkerEvent::Install);
    worker.handle_event(&mut host, WorkerEvent::Activate);
    worker.handle_event(
        &mut host,
        WorkerEvent::Push {
            payload: Some(payload.into_bytes()),
        },
    );

    let shown = match host.shown().first() {
        Some(n) => (*n).clone(),
        None => {
            tracing::error!("no notification was shown");
            return;
        }
    };
    tracing::info!("shown notification \"{}\" ({})", shown.title, shown.options.data.url);

    worker.handle_event(
        &mut host,
        WorkerEvent::NotificationClick {
            notification: shown.id,
            data: Some(shown.options.data.clone()),
        },
    );

    for client in host.clients() {
        tracing::info!(
            "client {} at {} (focused: {})",
            client.id,
            client.url,
            client.focused
        );
    }
}
