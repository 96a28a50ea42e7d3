//! Active-item resolution: which navigation targets the current page is on.
//!
//! An item is active when the current path equals its target path, or lies
//! below it (`/collections/shoes/sale` is below `/collections/shoes`). Nested
//! targets therefore match together; no attempt is made to pick one.

use url::{ParseError, Url};

const FALLBACK_BASE: &str = "http://localhost/";

/// Resolve `href` against `base`, or against a neutral origin when the href
/// is relative and no base is known.
pub fn resolve_url(href: &str, base: Option<&Url>) -> Result<Url, ParseError> {
    match Url::parse(href) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(href),
            None => Url::parse(FALLBACK_BASE)?.join(href),
        },
        Err(err) => Err(err),
    }
}

/// Path component of the page location.
pub fn location_path(location: &str) -> String {
    resolve_url(location, None)
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| location.to_string())
}

/// Path component of an item's href, resolved against the page location.
pub fn href_path(href: &str, location: &str) -> Option<String> {
    let base = resolve_url(location, None).ok();
    match resolve_url(href, base.as_ref()) {
        Ok(url) => Some(url.path().to_string()),
        Err(err) => {
            log::debug!("[navstrip] unresolvable href {href:?}: {err}");
            None
        }
    }
}

/// Exact match, or `current_path` is a strict descendant of `item_path`.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Active flag per item, in item order. Items without a resolvable path are
/// never active.
pub fn resolve<'a>(
    item_paths: impl IntoIterator<Item = Option<&'a str>>,
    current_path: &str,
) -> Vec<bool> {
    item_paths
        .into_iter()
        .map(|path| path.is_some_and(|path| is_active(path, current_path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/collections/shoes", "/collections/shoes"));
    }

    #[test]
    fn test_descendant_match() {
        assert!(is_active("/collections/shoes", "/collections/shoes/sale"));
    }

    #[test]
    fn test_sibling_prefix_is_not_descendant() {
        assert!(!is_active("/collections/shoe", "/collections/shoes"));
    }

    #[test]
    fn test_root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/collections"));
    }

    #[test]
    fn test_location_path_strips_query_and_fragment() {
        assert_eq!(
            location_path("https://shop.example/collections/shoes?page=2#top"),
            "/collections/shoes"
        );
        assert_eq!(location_path("/collections/shoes?page=2"), "/collections/shoes");
    }

    #[test]
    fn test_href_path_relative_to_location() {
        assert_eq!(
            href_path("sale", "https://shop.example/collections/shoes/").as_deref(),
            Some("/collections/shoes/sale")
        );
        assert_eq!(
            href_path("https://shop.example/collections/hats", "/").as_deref(),
            Some("/collections/hats")
        );
    }
}
