//! Preference tokens for the `Prefer` header field, from the IANA "HTTP
//! Preferences" registry.
//!
//! `return` takes the values [`RETURN_MINIMAL`] and [`RETURN_REPRESENTATION`],
//! which are listed here too since they are fixed by RFC 7240.

use crate::registry::Case;

string_table! {
    pub static PREFERENCES = "preferences", "Preferences",
        "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
    DEPTH_NOROOT => "depth-noroot", "RFC 8144, Section 3.1";
    HANDLING => "handling", "RFC 7240, Section 4.4";
    ODATA_ALLOW_ENTITYREFERENCES => "odata.allow-entityreferences", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.1";
    ODATA_CALLBACK => "odata.callback", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.2";
    ODATA_CONTINUE_ON_ERROR => "odata.continue-on-error", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.3";
    ODATA_INCLUDE_ANNOTATIONS => "odata.include-annotations", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.4";
    ODATA_MAXPAGESIZE => "odata.maxpagesize", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.5";
    ODATA_TRACK_CHANGES => "odata.track-changes", "OData Version 4.01 Part 1: Protocol, Section 8.2.8.6";
    RESPOND_ASYNC => "respond-async", "RFC 7240, Section 4.1";
    RETURN => "return", "RFC 7240, Section 4.2";
    RETURN_MINIMAL => "return=minimal", "RFC 7240, Section 4.2";
    RETURN_REPRESENTATION => "return=representation", "RFC 7240, Section 4.2";
    SAFE => "safe", "RFC 8674, Section 2";
    WAIT => "wait", "RFC 7240, Section 4.3";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_preferences() {
        assert_eq!(RESPOND_ASYNC, "respond-async");
        assert_eq!(RETURN_MINIMAL, "return=minimal");
        invariants::check_all(&PREFERENCES);
    }
}
