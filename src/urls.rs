//! Pure URL composition helpers.
//!
//! Resource addresses are built by appending path segments to a parent URL,
//! so these helpers are string manipulation only — no I/O.

use url::Url;

use crate::Error;

/// Returns `base` with `segments` appended to its path.
///
/// Each segment is percent-encoded independently, so free-text values round
/// trip; the base itself is never re-encoded. A base that cannot carry path
/// segments (for example `mailto:`) is rejected.
pub fn append_segments(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| Error::NotHierarchical(base.clone()))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

/// Returns `base` with the query parameter `key` set to `value`.
///
/// Distinct keys accumulate across calls; setting an existing key replaces
/// its value rather than duplicating the pair. Key and value are both
/// URL-encoded.
#[must_use]
pub fn set_query_parameter(base: &Url, key: &str, value: &str) -> Url {
    let mut url = base.clone();
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(existing, _)| existing != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in &retained {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(key, value);
    }
    url
}
