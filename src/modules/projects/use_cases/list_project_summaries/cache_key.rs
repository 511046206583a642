// Cache key composition for project summaries.
//
// Keys are `projects.summaries:{owner}:v:{version}:search:{sha256|none}:limit:{n|all}`.
// The version component comes from the owner's live cache version, so a bump makes
// every older key unreachable.

use sha2::{Digest, Sha256};

const NONE: &str = "none";
const ALL: &str = "all";

/// Trims the search term; a blank term means no search.
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

pub fn filter_signature(search: Option<&str>) -> String {
    match search {
        Some(term) => hex::encode(Sha256::digest(term.as_bytes())),
        None => NONE.to_string(),
    }
}

fn limit_signature(limit: Option<usize>) -> String {
    limit.map_or_else(|| ALL.to_string(), |n| n.to_string())
}

pub fn summary_cache_key(
    owner_id: &str,
    search: Option<&str>,
    limit: Option<usize>,
    version: &str,
) -> String {
    format!(
        "projects.summaries:{owner_id}:v:{version}:search:{}:limit:{}",
        filter_signature(search),
        limit_signature(limit)
    )
}

/// Unversioned key holding the last computed value, read only by the stale fallback.
pub fn last_known_key(owner_id: &str, search: Option<&str>, limit: Option<usize>) -> String {
    format!(
        "projects.summaries.last:{owner_id}:search:{}:limit:{}",
        filter_signature(search),
        limit_signature(limit)
    )
}

#[cfg(test)]
mod summary_cache_key_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("  web "), Some("web"))]
    fn it_should_normalize_the_search_term(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(normalize_search(raw).as_deref(), expected);
    }

    #[rstest]
    fn it_should_use_sentinels_without_search_or_limit() {
        assert_eq!(
            summary_cache_key("user-1", None, None, "v1"),
            "projects.summaries:user-1:v:v1:search:none:limit:all"
        );
    }

    #[rstest]
    fn it_should_hash_the_search_term() {
        let key = summary_cache_key("user-1", Some("abc"), Some(10), "v1");
        assert_eq!(
            key,
            "projects.summaries:user-1:v:v1:search:\
             ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad:limit:10"
        );
    }

    #[rstest]
    fn it_should_separate_versions_owners_and_filters() {
        let base = summary_cache_key("user-1", Some("abc"), Some(10), "v1");
        assert_ne!(base, summary_cache_key("user-1", Some("abc"), Some(10), "v2"));
        assert_ne!(base, summary_cache_key("user-2", Some("abc"), Some(10), "v1"));
        assert_ne!(base, summary_cache_key("user-1", Some("abd"), Some(10), "v1"));
        assert_ne!(base, summary_cache_key("user-1", Some("abc"), None, "v1"));
    }

    #[rstest]
    fn it_should_keep_the_last_known_key_out_of_the_versioned_namespace() {
        let last = last_known_key("user-1", None, Some(10));
        assert_eq!(last, "projects.summaries.last:user-1:search:none:limit:10");
        assert!(!last.starts_with("projects.summaries:"));
    }
}
