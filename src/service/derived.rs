// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure derivation of compound values from already-resolved inputs.
//!
//! Nothing here consults a source or caches; each function is a total
//! string transformation.

/// Joins a base URL and a fixed path suffix, stripping any trailing slash
/// from the base first.
///
/// # Examples
///
/// ```
/// use corecfg::service::derived::join_endpoint;
///
/// assert_eq!(
///     join_endpoint("http://core:8080/", "/service/token"),
///     "http://core:8080/service/token"
/// );
/// ```
pub fn join_endpoint(base: &str, suffix: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), suffix)
}

/// Strips the scheme from an endpoint, returning the text after the first
/// `://`.
///
/// An input without `://` is returned unchanged. This permissive splitting
/// is deliberate: malformed URLs pass through rather than erroring, and no
/// stricter URL parsing is intended.
///
/// # Examples
///
/// ```
/// use corecfg::service::derived::strip_scheme;
///
/// assert_eq!(strip_scheme("https://registry.example.com"), "registry.example.com");
/// assert_eq!(strip_scheme("registry.example.com"), "registry.example.com");
/// ```
pub fn strip_scheme(endpoint: &str) -> &str {
    match endpoint.split_once("://") {
        Some((_, rest)) => rest,
        None => endpoint,
    }
}
