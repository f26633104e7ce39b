// SPDX-License-Identifier: MPL-2.0
//! Process-wide `tracing` subscriber.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_folio=info,warn";

/// Installs the global subscriber. Call once, before the application starts.
///
/// A second call is ignored, which keeps integration tests that boot the
/// application more than once from panicking.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
