//! Authentication scheme names, from the IANA "HTTP Authentication Scheme
//! Registry". Scheme names are case-insensitive tokens.

use crate::registry::Case;

string_table! {
    pub static AUTH_SCHEMES = "auth_schemes", "Authentication Schemes",
        "https://www.iana.org/assignments/http-authschemes", Case::Insensitive;
    AWS4_HMAC_SHA256 => "AWS4-HMAC-SHA256", "AWS Signature Version 4";
    BASIC => "Basic", "RFC 7617";
    BEARER => "Bearer", "RFC 6750";
    CONCEALED => "Concealed", "RFC 9729";
    DIGEST => "Digest", "RFC 7616";
    DPOP => "DPoP", "RFC 9449";
    GNAP => "GNAP", "RFC 9635";
    HOBA => "HOBA", "RFC 7486, Section 3";
    MUTUAL => "Mutual", "RFC 8120";
    NEGOTIATE => "Negotiate", "RFC 4559, Section 3";
    NTLM => "NTLM", "MS-NTHT, Section 2.1";
    OAUTH => "OAuth", "RFC 5849, Section 3.5.1";
    PRIVATE_TOKEN => "PrivateToken", "RFC 9577, Section 2";
    SCRAM_SHA_1 => "SCRAM-SHA-1", "RFC 7804";
    SCRAM_SHA_256 => "SCRAM-SHA-256", "RFC 7804";
    VAPID => "vapid", "RFC 8292, Section 3";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_scheme_names() {
        assert_eq!(BASIC, "Basic");
        assert_eq!(BEARER, "Bearer");
        assert_eq!(PRIVATE_TOKEN, "PrivateToken");
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&AUTH_SCHEMES);
    }

    #[test]
    fn test_schemes_compare_case_insensitively() {
        assert_eq!(AUTH_SCHEMES.find("bearer").map(|e| e.name), Some("BEARER"));
        assert_eq!(AUTH_SCHEMES.find("VAPID").map(|e| e.value), Some(VAPID));
    }
}
