//! HTTP field names.
//!
//! Snapshot of the IANA "Hypertext Transfer Protocol (HTTP) Field Name
//! Registry", extended with a handful of widely deployed `X-` fields that were
//! never registered. Field names compare case-insensitively, so
//! [`HEADER_FIELDS`] folds ASCII case on reverse lookup.
//!
//! ```
//! use httpconst::http::headers;
//!
//! assert_eq!(headers::CONTENT_TYPE, "Content-Type");
//! assert_eq!(headers::HEADER_FIELDS.find("content-type").map(|e| e.name), Some("CONTENT_TYPE"));
//! ```

use crate::registry::Case;

string_table! {
    /// Every field name declared in this module.
    pub static HEADER_FIELDS = "header_fields", "Header Fields",
        "https://www.iana.org/assignments/http-fields", Case::Insensitive;
    ACCEPT => "Accept", "RFC 9110, Section 12.5.1";
    ACCEPT_CH => "Accept-CH", "RFC 8942, Section 3.1";
    ACCEPT_CHARSET => "Accept-Charset", "RFC 9110, Section 12.5.2";
    ACCEPT_DATETIME => "Accept-Datetime", "RFC 7089, Section 2.1.1";
    ACCEPT_ENCODING => "Accept-Encoding", "RFC 9110, Section 12.5.3";
    ACCEPT_LANGUAGE => "Accept-Language", "RFC 9110, Section 12.5.4";
    ACCEPT_PATCH => "Accept-Patch", "RFC 5789, Section 3.1";
    ACCEPT_POST => "Accept-Post", "W3C Linked Data Platform 1.0, Section 7.1";
    ACCEPT_RANGES => "Accept-Ranges", "RFC 9110, Section 14.3";
    ACCEPT_SIGNATURE => "Accept-Signature", "RFC 9421, Section 5.1";
    ACCESS_CONTROL_ALLOW_CREDENTIALS => "Access-Control-Allow-Credentials", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_ALLOW_HEADERS => "Access-Control-Allow-Headers", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_ALLOW_METHODS => "Access-Control-Allow-Methods", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_ALLOW_ORIGIN => "Access-Control-Allow-Origin", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_EXPOSE_HEADERS => "Access-Control-Expose-Headers", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_MAX_AGE => "Access-Control-Max-Age", "Fetch Living Standard, Section 3.3.3";
    ACCESS_CONTROL_REQUEST_HEADERS => "Access-Control-Request-Headers", "Fetch Living Standard, Section 3.3.2";
    ACCESS_CONTROL_REQUEST_METHOD => "Access-Control-Request-Method", "Fetch Living Standard, Section 3.3.2";
    AGE => "Age", "RFC 9111, Section 5.1";
    ALLOW => "Allow", "RFC 9110, Section 10.2.1";
    ALPN => "ALPN", "RFC 7639, Section 2";
    ALT_SVC => "Alt-Svc", "RFC 7838, Section 3";
    ALT_USED => "Alt-Used", "RFC 7838, Section 5";
    ALTERNATES => "Alternates", "RFC 2295, Section 8.3";
    A_IM => "A-IM", "RFC 3229, Section 10.5.3";
    APPLY_TO_REDIRECT_REF => "Apply-To-Redirect-Ref", "RFC 4437";
    AUTHENTICATION_CONTROL => "Authentication-Control", "RFC 8053, Section 4";
    AUTHENTICATION_INFO => "Authentication-Info", "RFC 9110, Section 11.6.3";
    AUTHORIZATION => "Authorization", "RFC 9110, Section 11.6.2";
    AVAILABLE_DICTIONARY => "Available-Dictionary", "RFC 9842, Section 2.2";
    CACHE_CONTROL => "Cache-Control", "RFC 9111, Section 5.2";
    CACHE_STATUS => "Cache-Status", "RFC 9211, Section 2";
    CAL_MANAGED_ID => "Cal-Managed-ID", "RFC 8607, Section 5.1";
    CALDAV_TIMEZONES => "CalDAV-Timezones", "RFC 7809, Section 7.1";
    CAPSULE_PROTOCOL => "Capsule-Protocol", "RFC 9297, Section 3.4";
    CDN_CACHE_CONTROL => "CDN-Cache-Control", "RFC 9213, Section 2";
    CDN_LOOP => "CDN-Loop", "RFC 8586, Section 2";
    CERT_NOT_AFTER => "Cert-Not-After", "RFC 8739, Section 3.3";
    CERT_NOT_BEFORE => "Cert-Not-Before", "RFC 8739, Section 3.3";
    CLEAR_SITE_DATA => "Clear-Site-Data", "W3C Clear Site Data, Section 3.1";
    CLIENT_CERT => "Client-Cert", "RFC 9440, Section 2";
    CLIENT_CERT_CHAIN => "Client-Cert-Chain", "RFC 9440, Section 2";
    CONNECTION => "Connection", "RFC 9110, Section 7.6.1";
    CONTENT_DIGEST => "Content-Digest", "RFC 9530, Section 2";
    CONTENT_DISPOSITION => "Content-Disposition", "RFC 6266";
    CONTENT_ENCODING => "Content-Encoding", "RFC 9110, Section 8.4";
    CONTENT_LANGUAGE => "Content-Language", "RFC 9110, Section 8.5";
    CONTENT_LENGTH => "Content-Length", "RFC 9110, Section 8.6";
    CONTENT_LOCATION => "Content-Location", "RFC 9110, Section 8.7";
    CONTENT_MD5 => "Content-MD5", "RFC 2616, Section 14.15";
    CONTENT_RANGE => "Content-Range", "RFC 9110, Section 14.4";
    CONTENT_SECURITY_POLICY => "Content-Security-Policy", "W3C Content Security Policy Level 3, Section 3.1";
    CONTENT_SECURITY_POLICY_REPORT_ONLY => "Content-Security-Policy-Report-Only", "W3C Content Security Policy Level 3, Section 3.2";
    CONTENT_TYPE => "Content-Type", "RFC 9110, Section 8.3";
    COOKIE => "Cookie", "RFC 6265, Section 5.4";
    COOKIE2 => "Cookie2", "RFC 2965, Section 3.3.4";
    CROSS_ORIGIN_EMBEDDER_POLICY => "Cross-Origin-Embedder-Policy", "HTML Living Standard, Section 7.1.4";
    CROSS_ORIGIN_EMBEDDER_POLICY_REPORT_ONLY => "Cross-Origin-Embedder-Policy-Report-Only", "HTML Living Standard, Section 7.1.4";
    CROSS_ORIGIN_OPENER_POLICY => "Cross-Origin-Opener-Policy", "HTML Living Standard, Section 7.1.3";
    CROSS_ORIGIN_OPENER_POLICY_REPORT_ONLY => "Cross-Origin-Opener-Policy-Report-Only", "HTML Living Standard, Section 7.1.3";
    CROSS_ORIGIN_RESOURCE_POLICY => "Cross-Origin-Resource-Policy", "Fetch Living Standard, Section 3.7";
    DASL => "DASL", "RFC 5323, Section 3.2";
    DATE => "Date", "RFC 9110, Section 6.6.1";
    DAV => "DAV", "RFC 4918, Section 10.1";
    DELTA_BASE => "Delta-Base", "RFC 3229, Section 10.5.1";
    DEPRECATION => "Deprecation", "RFC 9745, Section 2";
    DEPTH => "Depth", "RFC 4918, Section 10.2";
    DESTINATION => "Destination", "RFC 4918, Section 10.3";
    DICTIONARY_ID => "Dictionary-ID", "RFC 9842, Section 2.3";
    DIGEST => "Digest", "RFC 3230, Section 4.3.2";
    DPOP => "DPoP", "RFC 9449, Section 4.1";
    DPOP_NONCE => "DPoP-Nonce", "RFC 9449, Section 8.1";
    EARLY_DATA => "Early-Data", "RFC 8470, Section 5.1";
    EDIINT_FEATURES => "EDIINT-Features", "RFC 6017, Section 5";
    ETAG => "ETag", "RFC 9110, Section 8.8.3";
    EXPECT => "Expect", "RFC 9110, Section 10.1.1";
    EXPECT_CT => "Expect-CT", "RFC 9163, Section 2.1";
    EXPIRES => "Expires", "RFC 9111, Section 5.3";
    FORWARDED => "Forwarded", "RFC 7239, Section 4";
    FROM => "From", "RFC 9110, Section 10.1.2";
    HOBAREG => "Hobareg", "RFC 7486, Section 6.1.1";
    HOST => "Host", "RFC 9110, Section 7.2";
    HTTP2_SETTINGS => "HTTP2-Settings", "RFC 7540, Section 3.2.1";
    IF => "If", "RFC 4918, Section 10.4";
    IF_MATCH => "If-Match", "RFC 9110, Section 13.1.1";
    IF_MODIFIED_SINCE => "If-Modified-Since", "RFC 9110, Section 13.1.3";
    IF_NONE_MATCH => "If-None-Match", "RFC 9110, Section 13.1.2";
    IF_RANGE => "If-Range", "RFC 9110, Section 13.1.5";
    IF_SCHEDULE_TAG_MATCH => "If-Schedule-Tag-Match", "RFC 6638, Section 8.3";
    IF_UNMODIFIED_SINCE => "If-Unmodified-Since", "RFC 9110, Section 13.1.4";
    IM => "IM", "RFC 3229, Section 10.5.2";
    INCLUDE_REFERRED_TOKEN_BINDING_ID => "Include-Referred-Token-Binding-ID", "RFC 8473, Section 5.3";
    KEEP_ALIVE => "Keep-Alive", "RFC 2068, Section 19.7.1.1";
    LABEL => "Label", "RFC 3253, Section 8.3";
    LAST_EVENT_ID => "Last-Event-ID", "HTML Living Standard, Section 9.2.4";
    LAST_MODIFIED => "Last-Modified", "RFC 9110, Section 8.8.2";
    LINK => "Link", "RFC 8288, Section 3";
    LINK_TEMPLATE => "Link-Template", "RFC 9652, Section 2";
    LOCATION => "Location", "RFC 9110, Section 10.2.2";
    LOCK_TOKEN => "Lock-Token", "RFC 4918, Section 10.5";
    MAX_FORWARDS => "Max-Forwards", "RFC 9110, Section 7.6.2";
    MEMENTO_DATETIME => "Memento-Datetime", "RFC 7089, Section 2.1.1";
    METER => "Meter", "RFC 2227, Section 3.1";
    MIME_VERSION => "MIME-Version", "RFC 9112, Appendix B.1";
    NEGOTIATE => "Negotiate", "RFC 2295, Section 8.4";
    NEL => "NEL", "W3C Network Error Logging, Section 5.1";
    ODATA_ENTITYID => "OData-EntityId", "OData Version 4.01 Part 1: Protocol, Section 8.3.4";
    ODATA_ISOLATION => "OData-Isolation", "OData Version 4.01 Part 1: Protocol, Section 8.2.3";
    ODATA_MAXVERSION => "OData-MaxVersion", "OData Version 4.01 Part 1: Protocol, Section 8.2.7";
    ODATA_VERSION => "OData-Version", "OData Version 4.01 Part 1: Protocol, Section 8.1.5";
    OPTIONAL_WWW_AUTHENTICATE => "Optional-WWW-Authenticate", "RFC 8053, Section 3";
    ORDERING_TYPE => "Ordering-Type", "RFC 3648, Section 5.1";
    ORIGIN => "Origin", "RFC 6454, Section 7";
    ORIGIN_AGENT_CLUSTER => "Origin-Agent-Cluster", "HTML Living Standard, Section 7.1.5";
    OSCORE => "OSCORE", "RFC 8613, Section 11.1";
    OVERWRITE => "Overwrite", "RFC 4918, Section 10.6";
    PERMISSIONS_POLICY => "Permissions-Policy", "W3C Permissions Policy, Section 5.2";
    PING_FROM => "Ping-From", "HTML Living Standard, Section 4.6.5";
    PING_TO => "Ping-To", "HTML Living Standard, Section 4.6.5";
    POSITION => "Position", "RFC 3648, Section 6.1";
    PRAGMA => "Pragma", "RFC 9111, Section 5.4";
    PREFER => "Prefer", "RFC 7240, Section 2";
    PREFERENCE_APPLIED => "Preference-Applied", "RFC 7240, Section 3";
    PRIORITY => "Priority", "RFC 9218, Section 5";
    PROXY_AUTHENTICATE => "Proxy-Authenticate", "RFC 9110, Section 11.7.1";
    PROXY_AUTHENTICATION_INFO => "Proxy-Authentication-Info", "RFC 9110, Section 11.7.3";
    PROXY_AUTHORIZATION => "Proxy-Authorization", "RFC 9110, Section 11.7.2";
    PROXY_STATUS => "Proxy-Status", "RFC 9209, Section 2";
    PUBLIC_KEY_PINS => "Public-Key-Pins", "RFC 7469, Section 2.1";
    PUBLIC_KEY_PINS_REPORT_ONLY => "Public-Key-Pins-Report-Only", "RFC 7469, Section 2.1";
    RANGE => "Range", "RFC 9110, Section 14.2";
    REDIRECT_REF => "Redirect-Ref", "RFC 4437";
    REFERER => "Referer", "RFC 9110, Section 10.1.3";
    REFERRER_POLICY => "Referrer-Policy", "W3C Referrer Policy, Section 4.1";
    REFRESH => "Refresh", "HTML Living Standard, Section 4.2.5.3";
    REPLAY_NONCE => "Replay-Nonce", "RFC 8555, Section 6.5.1";
    REPORTING_ENDPOINTS => "Reporting-Endpoints", "W3C Reporting API, Section 3.2";
    REPR_DIGEST => "Repr-Digest", "RFC 9530, Section 3";
    RETRY_AFTER => "Retry-After", "RFC 9110, Section 10.2.3";
    SCHEDULE_REPLY => "Schedule-Reply", "RFC 6638, Section 8.1";
    SCHEDULE_TAG => "Schedule-Tag", "RFC 6638, Section 8.2";
    SEC_FETCH_DEST => "Sec-Fetch-Dest", "W3C Fetch Metadata Request Headers, Section 2.1";
    SEC_FETCH_MODE => "Sec-Fetch-Mode", "W3C Fetch Metadata Request Headers, Section 2.2";
    SEC_FETCH_SITE => "Sec-Fetch-Site", "W3C Fetch Metadata Request Headers, Section 2.3";
    SEC_FETCH_USER => "Sec-Fetch-User", "W3C Fetch Metadata Request Headers, Section 2.4";
    SEC_PURPOSE => "Sec-Purpose", "Fetch Living Standard, Section 2.2.2";
    SEC_TOKEN_BINDING => "Sec-Token-Binding", "RFC 8473, Section 2";
    SEC_WEBSOCKET_ACCEPT => "Sec-WebSocket-Accept", "RFC 6455, Section 11.3.3";
    SEC_WEBSOCKET_EXTENSIONS => "Sec-WebSocket-Extensions", "RFC 6455, Section 11.3.2";
    SEC_WEBSOCKET_KEY => "Sec-WebSocket-Key", "RFC 6455, Section 11.3.1";
    SEC_WEBSOCKET_PROTOCOL => "Sec-WebSocket-Protocol", "RFC 6455, Section 11.3.4";
    SEC_WEBSOCKET_VERSION => "Sec-WebSocket-Version", "RFC 6455, Section 11.3.5";
    SERVER => "Server", "RFC 9110, Section 10.2.4";
    SERVER_TIMING => "Server-Timing", "W3C Server Timing, Section 3";
    SET_COOKIE => "Set-Cookie", "RFC 6265, Section 4.1";
    SET_COOKIE2 => "Set-Cookie2", "RFC 2965, Section 3.2.2";
    SIGNATURE => "Signature", "RFC 9421, Section 4.2";
    SIGNATURE_INPUT => "Signature-Input", "RFC 9421, Section 4.1";
    SLUG => "SLUG", "RFC 5023, Section 9.7";
    SOAPACTION => "SoapAction", "Simple Object Access Protocol (SOAP) 1.1, Section 6.1.1";
    STATUS_URI => "Status-URI", "RFC 2518, Section 9.7";
    STRICT_TRANSPORT_SECURITY => "Strict-Transport-Security", "RFC 6797, Section 6.1";
    SUNSET => "Sunset", "RFC 8594, Section 3";
    SURROGATE_CAPABILITY => "Surrogate-Capability", "W3C Edge Architecture Specification, Section 3.1";
    SURROGATE_CONTROL => "Surrogate-Control", "W3C Edge Architecture Specification, Section 3.2";
    TCN => "TCN", "RFC 2295, Section 8.5";
    TE => "TE", "RFC 9110, Section 10.1.4";
    TIMEOUT => "Timeout", "RFC 4918, Section 10.7";
    TIMING_ALLOW_ORIGIN => "Timing-Allow-Origin", "W3C Resource Timing, Section 4.5.1";
    TOPIC => "Topic", "RFC 8030, Section 5.4";
    TRACEPARENT => "Traceparent", "W3C Trace Context, Section 3.2";
    TRACESTATE => "Tracestate", "W3C Trace Context, Section 3.3";
    TRAILER => "Trailer", "RFC 9110, Section 6.6.2";
    TRANSFER_ENCODING => "Transfer-Encoding", "RFC 9112, Section 6.1";
    TTL => "TTL", "RFC 8030, Section 5.2";
    UPGRADE => "Upgrade", "RFC 9110, Section 7.8";
    UPGRADE_INSECURE_REQUESTS => "Upgrade-Insecure-Requests", "W3C Upgrade Insecure Requests, Section 3.2.1";
    URGENCY => "Urgency", "RFC 8030, Section 5.3";
    USE_AS_DICTIONARY => "Use-As-Dictionary", "RFC 9842, Section 2.1";
    USER_AGENT => "User-Agent", "RFC 9110, Section 10.1.5";
    VARIANT_VARY => "Variant-Vary", "RFC 2295, Section 8.6";
    VARY => "Vary", "RFC 9110, Section 12.5.5";
    VIA => "Via", "RFC 9110, Section 7.6.3";
    WANT_CONTENT_DIGEST => "Want-Content-Digest", "RFC 9530, Section 4";
    WANT_DIGEST => "Want-Digest", "RFC 3230, Section 4.3.1";
    WANT_REPR_DIGEST => "Want-Repr-Digest", "RFC 9530, Section 4";
    WARNING => "Warning", "RFC 9111, Section 5.5";
    WWW_AUTHENTICATE => "WWW-Authenticate", "RFC 9110, Section 11.6.1";
    X_CONTENT_TYPE_OPTIONS => "X-Content-Type-Options", "Fetch Living Standard, Section 3.5";
    X_FORWARDED_FOR => "X-Forwarded-For", "de facto, superseded by Forwarded (RFC 7239)";
    X_FORWARDED_HOST => "X-Forwarded-Host", "de facto, superseded by Forwarded (RFC 7239)";
    X_FORWARDED_PROTO => "X-Forwarded-Proto", "de facto, superseded by Forwarded (RFC 7239)";
    X_FRAME_OPTIONS => "X-Frame-Options", "RFC 7034, Section 2";
    X_REQUEST_ID => "X-Request-ID", "de facto request correlation identifier";
    X_REQUESTED_WITH => "X-Requested-With", "de facto, set by XMLHttpRequest libraries";
    X_XSS_PROTECTION => "X-XSS-Protection", "de facto, retired browser XSS filter control";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_core_field_names() {
        assert_eq!(CONTENT_TYPE, "Content-Type");
        assert_eq!(CONTENT_LENGTH, "Content-Length");
        assert_eq!(ETAG, "ETag");
        assert_eq!(WWW_AUTHENTICATE, "WWW-Authenticate");
        assert_eq!(TE, "TE");
        assert_eq!(SEC_WEBSOCKET_ACCEPT, "Sec-WebSocket-Accept");
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&HEADER_FIELDS);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let entry = HEADER_FIELDS.find("x-forwarded-for").unwrap();
        assert_eq!(entry.name, "X_FORWARDED_FOR");
        assert_eq!(entry.value, X_FORWARDED_FOR);
        assert!(HEADER_FIELDS.contains("ETAG"));
    }

    #[test]
    fn test_entries_carry_their_reference() {
        let entry = HEADER_FIELDS.get("CACHE_CONTROL").unwrap();
        assert_eq!(entry.defined_in, "RFC 9111, Section 5.2");
    }

    #[test]
    fn test_unregistered_field_is_absent() {
        assert!(HEADER_FIELDS.find("X-Made-Up").is_none());
    }
}
