use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::decoder::config::debug_enabled;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `QR_DEBUG` switches this crate to debug.
pub fn setup_logging() {
    let dirs = if debug_enabled() {
        "warn,qr_payload=debug"
    } else {
        "warn"
    };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .try_init();
}
