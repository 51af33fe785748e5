//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from an endpoint name and its
/// parameters. Parameters are sorted first, so the key is stable
/// regardless of the order the caller assembled them in.
pub fn cache_key(endpoint: &str, params: &[(&str, String)]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(endpoint.as_bytes());
    hasher.update(b"|");

    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_param_order_independent() {
        let key1 = cache_key(
            "list_courses",
            &[("pageSize", "50".to_string()), ("page", "1".to_string())],
        );
        let key2 = cache_key(
            "list_courses",
            &[("page", "1".to_string()), ("pageSize", "50".to_string())],
        );

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_key_differs_by_endpoint() {
        let key1 = cache_key("list_courses", &[]);
        let key2 = cache_key("list_orders", &[]);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_differs_by_params() {
        let key1 = cache_key("list_courses", &[("page", "1".to_string())]);
        let key2 = cache_key("list_courses", &[("page", "2".to_string())]);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_deterministic() {
        let key1 = cache_key("list_tags", &[]);
        let key2 = cache_key("list_tags", &[]);

        assert_eq!(key1, key2);
    }
}
