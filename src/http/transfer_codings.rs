//! Transfer codings for `Transfer-Encoding` and `TE`, from the IANA "HTTP
//! Transfer Coding Registry".

use crate::registry::Case;

string_table! {
    pub static TRANSFER_CODINGS = "transfer_codings", "Transfer Codings",
        "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
    CHUNKED => "chunked", "RFC 9112, Section 7.1";
    COMPRESS => "compress", "RFC 9112, Section 7.2";
    DEFLATE => "deflate", "RFC 9112, Section 7.2";
    GZIP => "gzip", "RFC 9112, Section 7.2";
    TRAILERS => "trailers", "RFC 9110, Section 10.1.4";
    X_COMPRESS => "x-compress", "RFC 9112, Section 7.2";
    X_GZIP => "x-gzip", "RFC 9112, Section 7.2";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_chunked() {
        assert_eq!(CHUNKED, "chunked");
        assert!(TRANSFER_CODINGS.contains("Chunked"));
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&TRANSFER_CODINGS);
    }
}
