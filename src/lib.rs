mod origin;
mod resolver;

pub use crate::origin::{
    select_origin, LocalhostFallback, OriginProvider, PageOrigin, PlatformHost, LOCALHOST_ORIGIN,
    PLATFORM_HOST_VAR,
};
pub use crate::resolver::{
    resolve_maybe_url_arg, InvalidUrlError, ResolveContext, DEFAULT_API_PATH,
};

use url::Url;

/// Resolves `maybe_url` using the ambient environment: no page origin, host
/// override taken from `VERCEL_URL` when set.
///
/// # Errors
///
/// Returns [`InvalidUrlError`] if the input cannot be resolved into a URL.
pub fn resolve_from_env(maybe_url: Option<&str>) -> Result<Url, InvalidUrlError> {
    resolve_maybe_url_arg(maybe_url, &ResolveContext::from_env())
}
