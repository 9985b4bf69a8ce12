//! Signal handling for a clean exit

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for the first SIGTERM or SIGINT.
pub async fn shutdown_signal() {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])
    .expect("failed to register signal handlers");

    if let Some(signal) = signals.next().await {
        info!("received signal: {}", signal);
    }
}
