use crate::origin::{select_origin, LocalhostFallback, PageOrigin, PlatformHost};
use log::trace;
use thiserror::Error;
use url::Url;

/// Path applied when resolution yields a URL with no path beyond the origin.
pub const DEFAULT_API_PATH: &str = "/api/uploadthing";

/// Raised when the combined origin and path cannot be parsed as a URL.
#[derive(Debug, Error)]
#[error("Invalid URL: unable to resolve ({input}) against ({base})")]
pub struct InvalidUrlError {
    input: String,
    base: String,
    #[source]
    source: url::ParseError,
}

/// Ambient state the resolver reads, passed in explicitly so the resolution
/// itself stays pure and testable without global mutation and cleanup.
#[derive(Clone, Debug, Default)]
pub struct ResolveContext {
    /// Browser-like current-page origin, when one exists.
    pub page_origin: Option<String>,

    /// Bare deployment hostname, following the `VERCEL_URL` convention.
    pub host_override: Option<String>,
}

impl ResolveContext {
    pub fn new() -> Self {
        ResolveContext::default()
    }

    /// Context as a server-side process sees it: no page origin, host taken
    /// from the `VERCEL_URL` environment variable when set and non-empty.
    pub fn from_env() -> Self {
        ResolveContext {
            page_origin: None,
            host_override: PlatformHost::from_env().0,
        }
    }
}

/// Resolves a possibly-relative URL string into an absolute URL.
///
/// An absent or empty input is treated as the path `/`. Relative inputs are
/// joined against the first origin the context offers: the page origin, then
/// `https://` plus the host override, then `http://localhost:3000`. Whatever
/// the route taken, a resolved URL whose path is empty or `/` receives
/// [`DEFAULT_API_PATH`]; a URL with any other path is returned exactly as
/// resolved, so `http://example.com` gains the default path while
/// `https://example.com/foo/bar` passes through untouched.
///
/// # Errors
///
/// Returns [`InvalidUrlError`] if the input, or the input combined with the
/// chosen base origin, cannot be parsed as a URL.
pub fn resolve_maybe_url_arg(
    maybe_url: Option<&str>,
    context: &ResolveContext,
) -> Result<Url, InvalidUrlError> {
    let input = match maybe_url {
        Some(value) if !value.is_empty() => value,
        _ => "/",
    };

    let page = PageOrigin(context.page_origin.clone());
    let platform = PlatformHost(context.host_override.clone());
    let base = select_origin(&[&page, &platform, &LocalhostFallback]);

    let mut resolved = match Url::parse(input) {
        Ok(value) => value,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&base)
            .and_then(|base_url| base_url.join(input))
            .map_err(|source| InvalidUrlError {
                input: input.to_string(),
                base: base.clone(),
                source,
            })?,
        Err(source) => {
            return Err(InvalidUrlError {
                input: input.to_string(),
                base,
                source,
            })
        }
    };

    if resolved.path().is_empty() || resolved.path() == "/" {
        resolved.set_path(DEFAULT_API_PATH);
    }
    trace!("Resolved ({input}) to ({resolved})");

    Ok(resolved)
}
