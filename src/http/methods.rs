//! Request methods, from the IANA "HTTP Method Registry".
//!
//! Method names are case-sensitive. Besides the string constants and the
//! [`METHODS`] table, every registered method has an [`HttpMethod`] variant
//! which knows the registry's "safe" and "idempotent" columns.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;
use crate::registry::Case;

macro_rules! methods {
    ( $( $variant:ident $konst:ident = $value:literal, safe: $safe:literal, idempotent: $idem:literal, $defined_in:literal; )* ) => {
        string_table! {
            pub static METHODS = "methods", "Request Methods",
                "https://www.iana.org/assignments/http-methods", Case::Sensitive;
            $( $konst => $value, $defined_in; )*
        }

        #[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum HttpMethod {
            $(
                #[doc = concat!("`", $value, "`, defined in ", $defined_in, ".")]
                $variant,
            )*
        }

        impl HttpMethod {
            pub const ALL: &'static [HttpMethod] = &[ $( HttpMethod::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( HttpMethod::$variant => $value, )*
                }
            }

            /// Whether the registry lists the method as safe (read-only).
            pub fn is_safe(self) -> bool {
                match self {
                    $( HttpMethod::$variant => $safe, )*
                }
            }

            /// Whether the registry lists the method as idempotent.
            pub fn is_idempotent(self) -> bool {
                match self {
                    $( HttpMethod::$variant => $idem, )*
                }
            }
        }

        /// Registered method for `method`, compared case-sensitively.
        pub fn http_method_from_str(method: &str) -> Option<HttpMethod> {
            match method {
                $( $value => Some(HttpMethod::$variant), )*
                _ => None,
            }
        }
    };
}

methods! {
    Acl ACL = "ACL", safe: false, idempotent: true, "RFC 3744, Section 8.1";
    BaselineControl BASELINE_CONTROL = "BASELINE-CONTROL", safe: false, idempotent: true, "RFC 3253, Section 12.6";
    Bind BIND = "BIND", safe: false, idempotent: true, "RFC 5842, Section 4";
    Checkin CHECKIN = "CHECKIN", safe: false, idempotent: true, "RFC 3253, Section 4.4";
    Checkout CHECKOUT = "CHECKOUT", safe: false, idempotent: true, "RFC 3253, Section 4.3";
    Connect CONNECT = "CONNECT", safe: false, idempotent: false, "RFC 9110, Section 9.3.6";
    Copy COPY = "COPY", safe: false, idempotent: true, "RFC 4918, Section 9.8";
    Delete DELETE = "DELETE", safe: false, idempotent: true, "RFC 9110, Section 9.3.5";
    Get GET = "GET", safe: true, idempotent: true, "RFC 9110, Section 9.3.1";
    Head HEAD = "HEAD", safe: true, idempotent: true, "RFC 9110, Section 9.3.2";
    Label LABEL = "LABEL", safe: false, idempotent: true, "RFC 3253, Section 8.2";
    Link LINK = "LINK", safe: false, idempotent: true, "RFC 2068, Section 19.6.1.2";
    Lock LOCK = "LOCK", safe: false, idempotent: false, "RFC 4918, Section 9.10";
    Merge MERGE = "MERGE", safe: false, idempotent: true, "RFC 3253, Section 11.2";
    MkActivity MKACTIVITY = "MKACTIVITY", safe: false, idempotent: true, "RFC 3253, Section 13.5";
    MkCalendar MKCALENDAR = "MKCALENDAR", safe: false, idempotent: true, "RFC 4791, Section 5.3.1";
    MkCol MKCOL = "MKCOL", safe: false, idempotent: true, "RFC 4918, Section 9.3";
    MkRedirectRef MKREDIRECTREF = "MKREDIRECTREF", safe: false, idempotent: true, "RFC 4437, Section 6";
    MkWorkspace MKWORKSPACE = "MKWORKSPACE", safe: false, idempotent: true, "RFC 3253, Section 6.3";
    Move MOVE = "MOVE", safe: false, idempotent: true, "RFC 4918, Section 9.9";
    Options OPTIONS = "OPTIONS", safe: true, idempotent: true, "RFC 9110, Section 9.3.7";
    OrderPatch ORDERPATCH = "ORDERPATCH", safe: false, idempotent: true, "RFC 3648, Section 7";
    Patch PATCH = "PATCH", safe: false, idempotent: false, "RFC 5789, Section 2";
    Post POST = "POST", safe: false, idempotent: false, "RFC 9110, Section 9.3.3";
    Pri PRI = "PRI", safe: true, idempotent: true, "RFC 9113, Section 3.4";
    PropFind PROPFIND = "PROPFIND", safe: true, idempotent: true, "RFC 4918, Section 9.1";
    PropPatch PROPPATCH = "PROPPATCH", safe: false, idempotent: true, "RFC 4918, Section 9.2";
    Put PUT = "PUT", safe: false, idempotent: true, "RFC 9110, Section 9.3.4";
    Rebind REBIND = "REBIND", safe: false, idempotent: true, "RFC 5842, Section 6";
    Report REPORT = "REPORT", safe: true, idempotent: true, "RFC 3253, Section 3.6";
    Search SEARCH = "SEARCH", safe: true, idempotent: true, "RFC 5323, Section 2";
    Trace TRACE = "TRACE", safe: true, idempotent: true, "RFC 9110, Section 9.3.8";
    Unbind UNBIND = "UNBIND", safe: false, idempotent: true, "RFC 5842, Section 5";
    Uncheckout UNCHECKOUT = "UNCHECKOUT", safe: false, idempotent: true, "RFC 3253, Section 4.5";
    Unlink UNLINK = "UNLINK", safe: false, idempotent: true, "RFC 2068, Section 19.6.1.3";
    Unlock UNLOCK = "UNLOCK", safe: false, idempotent: true, "RFC 4918, Section 9.11";
    Update UPDATE = "UPDATE", safe: false, idempotent: true, "RFC 3253, Section 7.1";
    UpdateRedirectRef UPDATEREDIRECTREF = "UPDATEREDIRECTREF", safe: false, idempotent: true, "RFC 4437, Section 7";
    VersionControl VERSION_CONTROL = "VERSION-CONTROL", safe: false, idempotent: true, "RFC 3253, Section 3.5";
}

impl FromStr for HttpMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        http_method_from_str(s).ok_or_else(|| CatalogError::UnknownMethod(s.to_string()))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HttpMethod> for &'static str {
    fn from(method: HttpMethod) -> &'static str {
        method.as_str()
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_method_constants() {
        assert_eq!(GET, "GET");
        assert_eq!(VERSION_CONTROL, "VERSION-CONTROL");
        assert_eq!(HttpMethod::VersionControl.as_str(), VERSION_CONTROL);
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&METHODS);
        assert_eq!(METHODS.len(), HttpMethod::ALL.len());
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(http_method_from_str("GET"), Some(HttpMethod::Get));
        assert_eq!(http_method_from_str("get"), None);
        assert!(METHODS.find("get").is_none());
        assert!(matches!("BREW".parse::<HttpMethod>(), Err(CatalogError::UnknownMethod(m)) if m == "BREW"));
    }

    #[test]
    fn test_enum_and_table_agree() {
        for (entry, method) in METHODS.iter().zip(HttpMethod::ALL) {
            assert_eq!(entry.value, method.as_str());
            assert_eq!(entry.value.parse::<HttpMethod>().unwrap(), *method);
        }
    }

    #[test]
    fn test_safe_and_idempotent() {
        assert!(HttpMethod::Get.is_safe());
        assert!(HttpMethod::Head.is_idempotent());
        assert!(!HttpMethod::Post.is_safe());
        assert!(!HttpMethod::Post.is_idempotent());
        assert!(!HttpMethod::Patch.is_idempotent());
        assert!(HttpMethod::Put.is_idempotent());
        assert!(!HttpMethod::Put.is_safe());
        // every safe method is idempotent
        for method in HttpMethod::ALL {
            assert!(!method.is_safe() || method.is_idempotent(), "{method}");
        }
    }

    #[test]
    fn test_serde_uses_method_name() {
        #[derive(Serialize, Deserialize)]
        struct Doc {
            method: HttpMethod,
        }

        let text = toml::to_string(&Doc { method: HttpMethod::PropFind }).unwrap();
        assert_eq!(text.trim(), "method = \"PROPFIND\"");
        let doc: Doc = toml::from_str("method = \"DELETE\"").unwrap();
        assert_eq!(doc.method, HttpMethod::Delete);
        assert!(toml::from_str::<Doc>("method = \"delete\"").is_err());
    }
}
