//! Range units for `Range`, `Content-Range` and `Accept-Ranges`.

use crate::registry::Case;

string_table! {
    pub static RANGE_UNITS = "range_units", "Range Units",
        "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
    BYTES => "bytes", "RFC 9110, Section 14.1.2";
    NONE => "none", "RFC 9110, Section 14.3";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_units() {
        assert_eq!(BYTES, "bytes");
        assert_eq!(NONE, "none");
        invariants::check_all(&RANGE_UNITS);
    }
}
