//! # Query Strings
//!
//! `URLSearchParams`-compatible helpers: parsing and serialization use
//! `application/x-www-form-urlencoded` rules (`+` is a space).

/// Get the first value of `key` from a query string.
///
/// A leading `?` is ignored, so `location.search` can be passed as is.
///
/// ```rust
/// use lib_utils::query_param;
///
/// assert_eq!(query_param("?p=abc&x=1", "p").as_deref(), Some("abc"));
/// assert_eq!(query_param("?x=1", "p"), None);
/// ```
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    form_urlencoded::parse(query_string.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Set query parameters on a URL, keeping the ones already there.
///
/// Each key behaves like `URLSearchParams::set`: the first existing entry is
/// overwritten in place and later duplicates are dropped, otherwise the pair
/// is appended. The query is re-serialized, and a `#fragment` is kept at the
/// end.
///
/// ```rust
/// use lib_utils::append_search_params;
///
/// assert_eq!(
///     append_search_params("https://a.example/x?y=1", [("ext", "abc")]),
///     "https://a.example/x?y=1&ext=abc"
/// );
/// ```
pub fn append_search_params<'a>(
    url: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, search) = match without_fragment.split_once('?') {
        Some((base, search)) => (base, search),
        None => (without_fragment, ""),
    };

    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(search.as_bytes())
        .into_owned()
        .collect();

    for (key, value) in params {
        set_pair(&mut pairs, key, value);
    }

    let mut result = base.to_string();
    if !pairs.is_empty() {
        let new_search = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish();
        result.push('?');
        result.push_str(&new_search);
    }
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(name, _)| name == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut index = 0;
            pairs.retain(|(name, _)| {
                let keep = index <= first || name != key;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_decodes_values() {
        assert_eq!(query_param("?p=a%2Bb", "p").as_deref(), Some("a+b"));
        assert_eq!(query_param("p=a+b", "p").as_deref(), Some("a b"));
        assert_eq!(query_param("?p=1&p=2", "p").as_deref(), Some("1"));
        assert_eq!(query_param("?p", "p").as_deref(), Some(""));
        assert_eq!(query_param("", "p"), None);
    }

    #[test]
    fn test_append_without_existing_query() {
        assert_eq!(
            append_search_params("https://a.example/app", [("ext", "x1")]),
            "https://a.example/app?ext=x1"
        );
    }

    #[test]
    fn test_append_overwrites_existing_key() {
        assert_eq!(
            append_search_params("https://a.example/?ext=old&mt=8&ext=dup", [("ext", "new")]),
            "https://a.example/?ext=new&mt=8"
        );
    }

    #[test]
    fn test_append_encodes_value() {
        assert_eq!(
            append_search_params("https://a.example/", [("ext", "a b&c=d")]),
            "https://a.example/?ext=a+b%26c%3Dd"
        );
    }

    #[test]
    fn test_append_keeps_fragment() {
        assert_eq!(
            append_search_params("https://a.example/p?x=1#top", [("ext", "e")]),
            "https://a.example/p?x=1&ext=e#top"
        );
    }

    #[test]
    fn test_append_nothing_leaves_url() {
        assert_eq!(append_search_params("https://a.example/p", [] as [(&str, &str); 0]), "https://a.example/p");
    }
}
