//! Structured logging configuration.
//!
//! The server logs through `tracing`. Records emitted by the engine through
//! the `log` facade are forwarded into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var and default to
/// `info,hyper=warn`.
///
/// # Example
///
/// ```no_run
/// use lottery_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a draw lifecycle event with structured data
///
/// # Arguments
///
/// * `event` - Event name (`created`, `shuffled`, `winner`, `exported`, `removed`)
/// * `session_id` - Session the event belongs to
/// * `request_id` - Request that triggered the event
/// * `message` - Human readable detail
///
/// # Example
///
/// ```
/// use lottery_server::logging::log_draw_event;
///
/// log_draw_event("winner", "5f0c...", "9b1e...", "rank 1: REG-0042");
/// ```
pub fn log_draw_event(event: &str, session_id: &str, request_id: &str, message: &str) {
    tracing::info!(
        draw_event = event,
        session_id = session_id,
        request_id = request_id,
        "DRAW: {}",
        message
    );
}

/// Log a rejected API request
pub fn log_rejected_request(operation: &str, status_code: u16, reason: &str) {
    if status_code >= 500 {
        tracing::warn!(
            operation = operation,
            http_status = status_code,
            "Request rejected: {}",
            reason
        );
    } else {
        tracing::debug!(
            operation = operation,
            http_status = status_code,
            "Request rejected: {}",
            reason
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_draw_event() {
        // Just ensure it doesn't panic
        log_draw_event("created", "test-session", "test-request", "3 entries, 1 winner");
    }

    #[test]
    fn test_log_rejected_request() {
        log_rejected_request("draw_winner", 409, "Draw already complete");
        log_rejected_request("create_draw", 503, "Too many active draws");
    }
}
