use log::trace;
use std::env;

/// Environment variable naming the current deployment host on Vercel.
pub const PLATFORM_HOST_VAR: &str = "VERCEL_URL";

/// Origin used when no other provider has anything to offer.
pub const LOCALHOST_ORIGIN: &str = "http://localhost:3000";

/// A source of a candidate base origin (scheme + host + port).
///
/// Providers are consulted in order by [`select_origin`]; the first one
/// returning `Some` wins.
pub trait OriginProvider {
    fn provide(&self) -> Option<String>;
}

/// Browser-like current-page origin, injected by the caller rather than read
/// from a hidden global.
pub struct PageOrigin(pub Option<String>);

impl OriginProvider for PageOrigin {
    fn provide(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Bare deployment hostname, following the `VERCEL_URL` convention: the
/// variable holds a host with no scheme, and the platform serves HTTPS.
pub struct PlatformHost(pub Option<String>);

impl PlatformHost {
    pub fn from_env() -> Self {
        PlatformHost(env::var(PLATFORM_HOST_VAR).ok().filter(|val| !val.is_empty()))
    }
}

impl OriginProvider for PlatformHost {
    fn provide(&self) -> Option<String> {
        self.0.as_ref().map(|host| format!("https://{host}"))
    }
}

/// Last-resort local development origin.
pub struct LocalhostFallback;

impl OriginProvider for LocalhostFallback {
    fn provide(&self) -> Option<String> {
        Some(LOCALHOST_ORIGIN.to_string())
    }
}

/// Returns the first origin any provider offers.
///
/// Callers terminate the chain with [`LocalhostFallback`], so selection is
/// total in practice; an empty or exhausted chain falls back to
/// [`LOCALHOST_ORIGIN`] all the same.
pub fn select_origin(providers: &[&dyn OriginProvider]) -> String {
    for provider in providers {
        if let Some(origin) = provider.provide() {
            trace!("Selected base origin: {origin}");
            return origin;
        }
    }
    LOCALHOST_ORIGIN.to_string()
}
