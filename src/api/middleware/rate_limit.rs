//! Per-client rate limiting for link creation.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Seconds after which one spent request is returned to a client's quota.
pub const CREATE_REPLENISH_SECS: u64 = 2;

/// Requests a client may issue in a burst before throttling starts.
pub const CREATE_BURST: u32 = 100;

/// Type of the layer returned by [`layer`].
pub type CreateRateLimit =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter applied to the two creation endpoints
/// (`POST /shorten` and `POST /api/shorten`).
///
/// Clients are keyed by the socket peer address, so the server must be
/// started with `into_make_service_with_connect_info::<SocketAddr>()`.
/// Requests over the limit receive `429 Too Many Requests`.
///
/// Lookups and previews are not throttled.
pub fn layer() -> CreateRateLimit {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(CREATE_REPLENISH_SECS)
            .burst_size(CREATE_BURST)
            .finish()
            .expect("non-zero rate limit settings"),
    );

    GovernorLayer::new(governor_conf)
}
