use governor::{clock::QuantaInstant, middleware::NoOpMiddleware};
use tower_governor::{
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

/// Moderate rate limiting for read endpoints (leaderboard, profiles).
/// 10 requests per second with burst of 20
pub fn general_rate_limit() -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>> {
    GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(20)
        .finish()
        .expect("Failed to build general rate limiter configuration")
}

/// Stricter rate limiting for the submission endpoints. A human answering
/// questions does not sustain more than a few submissions per second.
/// 5 requests per second with burst of 10
pub fn submission_rate_limit() -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>
{
    GovernorConfigBuilder::default()
        .per_second(5)
        .burst_size(10)
        .finish()
        .expect("Failed to build submission rate limiter configuration")
}
