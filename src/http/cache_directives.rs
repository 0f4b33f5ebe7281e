//! `Cache-Control` directives, from the IANA "HTTP Cache Directive Registry".

use crate::registry::Case;

string_table! {
    pub static CACHE_DIRECTIVES = "cache_directives", "Cache Directives",
        "https://www.iana.org/assignments/http-cache-directives", Case::Insensitive;
    IMMUTABLE => "immutable", "RFC 8246, Section 2";
    MAX_AGE => "max-age", "RFC 9111, Section 5.2.1.1";
    MAX_STALE => "max-stale", "RFC 9111, Section 5.2.1.2";
    MIN_FRESH => "min-fresh", "RFC 9111, Section 5.2.1.3";
    MUST_REVALIDATE => "must-revalidate", "RFC 9111, Section 5.2.2.2";
    MUST_UNDERSTAND => "must-understand", "RFC 9111, Section 5.2.2.3";
    NO_CACHE => "no-cache", "RFC 9111, Section 5.2.1.4";
    NO_STORE => "no-store", "RFC 9111, Section 5.2.1.5";
    NO_TRANSFORM => "no-transform", "RFC 9111, Section 5.2.1.6";
    ONLY_IF_CACHED => "only-if-cached", "RFC 9111, Section 5.2.1.7";
    PRIVATE => "private", "RFC 9111, Section 5.2.2.7";
    PROXY_REVALIDATE => "proxy-revalidate", "RFC 9111, Section 5.2.2.8";
    PUBLIC => "public", "RFC 9111, Section 5.2.2.9";
    S_MAXAGE => "s-maxage", "RFC 9111, Section 5.2.2.10";
    STALE_IF_ERROR => "stale-if-error", "RFC 5861, Section 4";
    STALE_WHILE_REVALIDATE => "stale-while-revalidate", "RFC 5861, Section 3";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_directive_names() {
        assert_eq!(NO_STORE, "no-store");
        assert_eq!(S_MAXAGE, "s-maxage");
        assert_eq!(STALE_WHILE_REVALIDATE, "stale-while-revalidate");
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&CACHE_DIRECTIVES);
    }
}
