//! HTTP client module
//!
//! Thin wrapper over reqwest with base-URL joining, default headers,
//! optional token-bucket rate limiting, and bearer-token authentication.
//!
//! The client performs no retries: each failure is classified (timeout,
//! non-2xx status, transport) and propagated so the host framework can
//! apply its own retry policy.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
