//! Content codings for `Content-Encoding` and `Accept-Encoding`, from the IANA
//! "HTTP Content Coding Registry".
//!
//! The `x-` spellings are registered as aliases of their unprefixed
//! counterparts but are kept as distinct entries here: [`GZIP`] is `gzip` and
//! [`X_GZIP`] is `x-gzip`.

use crate::registry::Case;

string_table! {
    pub static CONTENT_CODINGS = "content_codings", "Content Codings",
        "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
    AES128GCM => "aes128gcm", "RFC 8188, Section 2";
    BR => "br", "RFC 7932";
    COMPRESS => "compress", "RFC 9110, Section 8.4.1.1";
    DCB => "dcb", "RFC 9842, Section 4";
    DCZ => "dcz", "RFC 9842, Section 5";
    DEFLATE => "deflate", "RFC 9110, Section 8.4.1.2";
    EXI => "exi", "W3C Efficient XML Interchange (EXI) Format 1.0";
    GZIP => "gzip", "RFC 9110, Section 8.4.1.3";
    IDENTITY => "identity", "RFC 9110, Section 12.5.3";
    PACK200_GZIP => "pack200-gzip", "JSR 200: Network Transfer Format for Java Archives";
    X_COMPRESS => "x-compress", "RFC 9110, Section 8.4.1.1";
    X_GZIP => "x-gzip", "RFC 9110, Section 8.4.1.3";
    ZSTD => "zstd", "RFC 8878, Section 7.2";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_gzip_and_x_gzip_are_distinct() {
        assert_eq!(GZIP, "gzip");
        assert_eq!(X_GZIP, "x-gzip");
        assert_ne!(GZIP, X_GZIP);
        assert_eq!(CONTENT_CODINGS.find("x-gzip").map(|e| e.name), Some("X_GZIP"));
        assert_eq!(CONTENT_CODINGS.find("gzip").map(|e| e.name), Some("GZIP"));
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&CONTENT_CODINGS);
    }
}
