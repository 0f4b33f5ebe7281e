//! Parameters of the `Forwarded` header field (RFC 7239).

use crate::registry::Case;

string_table! {
    pub static FORWARDED_PARAMETERS = "forwarded_parameters", "Forwarded Parameters",
        "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
    BY => "by", "RFC 7239, Section 5.1";
    FOR => "for", "RFC 7239, Section 5.2";
    HOST => "host", "RFC 7239, Section 5.3";
    PROTO => "proto", "RFC 7239, Section 5.4";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_parameters() {
        assert_eq!(FOR, "for");
        assert_eq!(FORWARDED_PARAMETERS.find("Proto").map(|e| e.name), Some("PROTO"));
        invariants::check_all(&FORWARDED_PARAMETERS);
    }
}
