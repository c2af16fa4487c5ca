//! Rate limiting middleware using token bucket algorithm.
//!
//! Every relay call sends two emails, so the public endpoints are limited
//! per client IP.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type PeerIpLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;
type ProxiedIpLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Replenish one token every 10 seconds.
const PERIOD_SECS: u64 = 10;
/// Allow short bursts of 5 submissions.
const BURST: u32 = 5;

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 1 request per 10 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/relay", post(relay_post_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> PeerIpLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PERIOD_SECS)
            .burst_size(BURST)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` before falling back to the peer address.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
pub fn proxied_layer() -> ProxiedIpLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PERIOD_SECS)
            .burst_size(BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
