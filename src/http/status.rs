//! HTTP status codes and their reason phrases.
//!
//! There is one canonical table, [`STATUS_CODES`], holding the code, the
//! mnemonic, the reason phrase and the defining specification of every
//! registered status code. [`HttpStatus`] has one variant per row, so a code
//! can be named symbolically (`HttpStatus::NotFound`) while the mnemonic
//! (`"NOT_FOUND"`) and the phrase (`"Not Found"`) are looked up from the same
//! row instead of being repeated as separate constants.
//!
//! ```
//! use httpconst::http::status::{self, HttpStatus};
//!
//! assert_eq!(HttpStatus::Ok.code(), 200);
//! assert_eq!(status::reason_phrase(200), Some("OK"));
//! assert_eq!(status::by_mnemonic("NOT_FOUND"), Some(HttpStatus::NotFound));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One row of the status code registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub code: u16,
    /// Upper snake case name, e.g. `NOT_FOUND`.
    pub name: &'static str,
    /// Canonical reason phrase, e.g. `Not Found`.
    pub phrase: &'static str,
    pub defined_in: &'static str,
}

macro_rules! status_codes {
    ( $( $code:literal $variant:ident $name:ident $phrase:literal $defined_in:literal; )* ) => {
        /// Registered HTTP status codes.
        ///
        /// The discriminant is the numeric code, so `HttpStatus::Ok as u16 == 200`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "u16", into = "u16")]
        #[repr(u16)]
        pub enum HttpStatus {
            $(
                #[doc = concat!("`", stringify!($code), " ", $phrase, "`, defined in ", $defined_in, ".")]
                $variant = $code,
            )*
        }

        /// Every registered status code, in ascending order.
        pub static STATUS_CODES: &[StatusEntry] = &[
            $(
                StatusEntry {
                    code: $code,
                    name: stringify!($name),
                    phrase: $phrase,
                    defined_in: $defined_in,
                },
            )*
        ];

        impl HttpStatus {
            /// Every variant, in the same order as [`STATUS_CODES`].
            pub const ALL: &'static [HttpStatus] = &[ $( HttpStatus::$variant, )* ];

            /// Row of [`STATUS_CODES`] describing this status.
            pub fn entry(self) -> &'static StatusEntry {
                match self {
                    $(
                        HttpStatus::$variant => &StatusEntry {
                            code: $code,
                            name: stringify!($name),
                            phrase: $phrase,
                            defined_in: $defined_in,
                        },
                    )*
                }
            }

            /// Variant for a registered numeric code.
            pub fn from_code(code: u16) -> Result<Self, CatalogError> {
                match code {
                    $( $code => Ok(HttpStatus::$variant), )*
                    _ => Err(CatalogError::UnknownStatus(code)),
                }
            }
        }
    };
}

status_codes! {
    100 Continue CONTINUE "Continue" "RFC 9110, Section 15.2.1";
    101 SwitchingProtocols SWITCHING_PROTOCOLS "Switching Protocols" "RFC 9110, Section 15.2.2";
    102 Processing PROCESSING "Processing" "RFC 2518, Section 10.1";
    103 EarlyHints EARLY_HINTS "Early Hints" "RFC 8297, Section 2";

    200 Ok OK "OK" "RFC 9110, Section 15.3.1";
    201 Created CREATED "Created" "RFC 9110, Section 15.3.2";
    202 Accepted ACCEPTED "Accepted" "RFC 9110, Section 15.3.3";
    203 NonAuthoritativeInformation NON_AUTHORITATIVE_INFORMATION "Non-Authoritative Information" "RFC 9110, Section 15.3.4";
    204 NoContent NO_CONTENT "No Content" "RFC 9110, Section 15.3.5";
    205 ResetContent RESET_CONTENT "Reset Content" "RFC 9110, Section 15.3.6";
    206 PartialContent PARTIAL_CONTENT "Partial Content" "RFC 9110, Section 15.3.7";
    207 MultiStatus MULTI_STATUS "Multi-Status" "RFC 4918, Section 11.1";
    208 AlreadyReported ALREADY_REPORTED "Already Reported" "RFC 5842, Section 7.1";
    226 ImUsed IM_USED "IM Used" "RFC 3229, Section 10.4.1";

    300 MultipleChoices MULTIPLE_CHOICES "Multiple Choices" "RFC 9110, Section 15.4.1";
    301 MovedPermanently MOVED_PERMANENTLY "Moved Permanently" "RFC 9110, Section 15.4.2";
    302 Found FOUND "Found" "RFC 9110, Section 15.4.3";
    303 SeeOther SEE_OTHER "See Other" "RFC 9110, Section 15.4.4";
    304 NotModified NOT_MODIFIED "Not Modified" "RFC 9110, Section 15.4.5";
    305 UseProxy USE_PROXY "Use Proxy" "RFC 9110, Section 15.4.6";
    307 TemporaryRedirect TEMPORARY_REDIRECT "Temporary Redirect" "RFC 9110, Section 15.4.8";
    308 PermanentRedirect PERMANENT_REDIRECT "Permanent Redirect" "RFC 9110, Section 15.4.9";

    400 BadRequest BAD_REQUEST "Bad Request" "RFC 9110, Section 15.5.1";
    401 Unauthorized UNAUTHORIZED "Unauthorized" "RFC 9110, Section 15.5.2";
    402 PaymentRequired PAYMENT_REQUIRED "Payment Required" "RFC 9110, Section 15.5.3";
    403 Forbidden FORBIDDEN "Forbidden" "RFC 9110, Section 15.5.4";
    404 NotFound NOT_FOUND "Not Found" "RFC 9110, Section 15.5.5";
    405 MethodNotAllowed METHOD_NOT_ALLOWED "Method Not Allowed" "RFC 9110, Section 15.5.6";
    406 NotAcceptable NOT_ACCEPTABLE "Not Acceptable" "RFC 9110, Section 15.5.7";
    407 ProxyAuthenticationRequired PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required" "RFC 9110, Section 15.5.8";
    408 RequestTimeout REQUEST_TIMEOUT "Request Timeout" "RFC 9110, Section 15.5.9";
    409 Conflict CONFLICT "Conflict" "RFC 9110, Section 15.5.10";
    410 Gone GONE "Gone" "RFC 9110, Section 15.5.11";
    411 LengthRequired LENGTH_REQUIRED "Length Required" "RFC 9110, Section 15.5.12";
    412 PreconditionFailed PRECONDITION_FAILED "Precondition Failed" "RFC 9110, Section 15.5.13";
    413 ContentTooLarge CONTENT_TOO_LARGE "Content Too Large" "RFC 9110, Section 15.5.14";
    414 UriTooLong URI_TOO_LONG "URI Too Long" "RFC 9110, Section 15.5.15";
    415 UnsupportedMediaType UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type" "RFC 9110, Section 15.5.16";
    416 RangeNotSatisfiable RANGE_NOT_SATISFIABLE "Range Not Satisfiable" "RFC 9110, Section 15.5.17";
    417 ExpectationFailed EXPECTATION_FAILED "Expectation Failed" "RFC 9110, Section 15.5.18";
    418 ImATeapot IM_A_TEAPOT "I'm a teapot" "RFC 2324, Section 2.3.2";
    421 MisdirectedRequest MISDIRECTED_REQUEST "Misdirected Request" "RFC 9110, Section 15.5.20";
    422 UnprocessableContent UNPROCESSABLE_CONTENT "Unprocessable Content" "RFC 9110, Section 15.5.21";
    423 Locked LOCKED "Locked" "RFC 4918, Section 11.3";
    424 FailedDependency FAILED_DEPENDENCY "Failed Dependency" "RFC 4918, Section 11.4";
    425 TooEarly TOO_EARLY "Too Early" "RFC 8470, Section 5.2";
    426 UpgradeRequired UPGRADE_REQUIRED "Upgrade Required" "RFC 9110, Section 15.5.22";
    428 PreconditionRequired PRECONDITION_REQUIRED "Precondition Required" "RFC 6585, Section 3";
    429 TooManyRequests TOO_MANY_REQUESTS "Too Many Requests" "RFC 6585, Section 4";
    431 RequestHeaderFieldsTooLarge REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large" "RFC 6585, Section 5";
    451 UnavailableForLegalReasons UNAVAILABLE_FOR_LEGAL_REASONS "Unavailable For Legal Reasons" "RFC 7725, Section 3";

    500 InternalServerError INTERNAL_SERVER_ERROR "Internal Server Error" "RFC 9110, Section 15.6.1";
    501 NotImplemented NOT_IMPLEMENTED "Not Implemented" "RFC 9110, Section 15.6.2";
    502 BadGateway BAD_GATEWAY "Bad Gateway" "RFC 9110, Section 15.6.3";
    503 ServiceUnavailable SERVICE_UNAVAILABLE "Service Unavailable" "RFC 9110, Section 15.6.4";
    504 GatewayTimeout GATEWAY_TIMEOUT "Gateway Timeout" "RFC 9110, Section 15.6.5";
    505 HttpVersionNotSupported HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported" "RFC 9110, Section 15.6.6";
    506 VariantAlsoNegotiates VARIANT_ALSO_NEGOTIATES "Variant Also Negotiates" "RFC 2295, Section 8.1";
    507 InsufficientStorage INSUFFICIENT_STORAGE "Insufficient Storage" "RFC 4918, Section 11.5";
    508 LoopDetected LOOP_DETECTED "Loop Detected" "RFC 5842, Section 7.2";
    510 NotExtended NOT_EXTENDED "Not Extended" "RFC 2774, Section 7";
    511 NetworkAuthenticationRequired NETWORK_AUTHENTICATION_REQUIRED "Network Authentication Required" "RFC 6585, Section 6";
}

/// Names that earlier specifications used for codes which have since been
/// renamed. [`by_mnemonic`] accepts them alongside the current names.
pub static LEGACY_MNEMONICS: &[(&str, HttpStatus)] = &[
    ("REQUEST_ENTITY_TOO_LARGE", HttpStatus::ContentTooLarge),
    ("PAYLOAD_TOO_LARGE", HttpStatus::ContentTooLarge),
    ("REQUEST_URI_TOO_LONG", HttpStatus::UriTooLong),
    ("REQUESTED_RANGE_NOT_SATISFIABLE", HttpStatus::RangeNotSatisfiable),
    ("UNPROCESSABLE_ENTITY", HttpStatus::UnprocessableContent),
    ("MOVED_TEMPORARILY", HttpStatus::Found),
];

/// Response class, given by the first digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Informational,
    Successful,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    /// Class of any three-digit code, registered or not.
    pub fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(StatusClass::Informational),
            200..=299 => Some(StatusClass::Successful),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Informational => "Informational",
            StatusClass::Successful => "Successful",
            StatusClass::Redirection => "Redirection",
            StatusClass::ClientError => "Client Error",
            StatusClass::ServerError => "Server Error",
        }
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn reason_phrase(self) -> &'static str {
        self.entry().phrase
    }

    pub fn mnemonic(self) -> &'static str {
        self.entry().name
    }

    pub fn defined_in(self) -> &'static str {
        self.entry().defined_in
    }

    pub fn class(self) -> StatusClass {
        match self.code() / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    pub fn is_informational(self) -> bool {
        self.class() == StatusClass::Informational
    }

    pub fn is_success(self) -> bool {
        self.class() == StatusClass::Successful
    }

    pub fn is_redirection(self) -> bool {
        self.class() == StatusClass::Redirection
    }

    pub fn is_client_error(self) -> bool {
        self.class() == StatusClass::ClientError
    }

    pub fn is_server_error(self) -> bool {
        self.class() == StatusClass::ServerError
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = CatalogError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        HttpStatus::from_code(code)
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> u16 {
        status.code()
    }
}

/// Canonical reason phrase of a registered code.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    HttpStatus::from_code(code).ok().map(HttpStatus::reason_phrase)
}

/// Status for a mnemonic such as `NOT_FOUND` or a legacy name such as
/// `PAYLOAD_TOO_LARGE`. Matching ignores ASCII case.
pub fn by_mnemonic(name: &str) -> Option<HttpStatus> {
    HttpStatus::ALL
        .iter()
        .copied()
        .find(|status| status.mnemonic().eq_ignore_ascii_case(name))
        .or_else(|| {
            LEGACY_MNEMONICS
                .iter()
                .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
                .map(|&(_, status)| status)
        })
}

/// Status for a reason phrase, e.g. `"Not Found"`. Matching ignores ASCII case.
pub fn by_reason_phrase(phrase: &str) -> Option<HttpStatus> {
    HttpStatus::ALL
        .iter()
        .copied()
        .find(|status| status.reason_phrase().eq_ignore_ascii_case(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alias_and_code_agree() {
        assert_eq!(HttpStatus::Ok, HttpStatus::from_code(200).unwrap());
        assert_eq!(HttpStatus::Ok.code(), 200);
        assert_eq!(HttpStatus::Ok as u16, 200);
        assert_eq!(reason_phrase(200), Some(HttpStatus::Ok.reason_phrase()));
        assert_eq!(HttpStatus::Ok.reason_phrase(), "OK");
        assert_eq!(HttpStatus::NotFound.reason_phrase(), "Not Found");
    }

    #[test]
    fn test_table_and_enum_agree() {
        assert_eq!(STATUS_CODES.len(), HttpStatus::ALL.len());
        for (entry, status) in STATUS_CODES.iter().zip(HttpStatus::ALL) {
            assert_eq!(entry, status.entry());
            assert_eq!(HttpStatus::from_code(entry.code).unwrap(), *status);
            assert_eq!(by_mnemonic(entry.name), Some(*status));
        }
    }

    #[test]
    fn test_codes_names_and_phrases_are_unique() {
        let codes: HashSet<_> = STATUS_CODES.iter().map(|e| e.code).collect();
        let names: HashSet<_> = STATUS_CODES.iter().map(|e| e.name).collect();
        let phrases: HashSet<_> = STATUS_CODES.iter().map(|e| e.phrase).collect();
        assert_eq!(codes.len(), STATUS_CODES.len());
        assert_eq!(names.len(), STATUS_CODES.len());
        assert_eq!(phrases.len(), STATUS_CODES.len());
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(STATUS_CODES.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_unregistered_codes() {
        assert!(matches!(HttpStatus::from_code(306), Err(CatalogError::UnknownStatus(306))));
        assert!(HttpStatus::try_from(999).is_err());
        assert_eq!(reason_phrase(299), None);
    }

    #[test]
    fn test_legacy_mnemonics() {
        assert_eq!(by_mnemonic("PAYLOAD_TOO_LARGE"), Some(HttpStatus::ContentTooLarge));
        assert_eq!(by_mnemonic("unprocessable_entity"), Some(HttpStatus::UnprocessableContent));
        assert_eq!(by_mnemonic("NOT_A_STATUS"), None);
        for (legacy, _) in LEGACY_MNEMONICS {
            assert!(STATUS_CODES.iter().all(|e| e.name != *legacy));
        }
    }

    #[test]
    fn test_by_reason_phrase() {
        assert_eq!(by_reason_phrase("not found"), Some(HttpStatus::NotFound));
        assert_eq!(by_reason_phrase("I'm a teapot"), Some(HttpStatus::ImATeapot));
        assert_eq!(by_reason_phrase("Nope"), None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(HttpStatus::Continue.class(), StatusClass::Informational);
        assert!(HttpStatus::NoContent.is_success());
        assert!(HttpStatus::PermanentRedirect.is_redirection());
        assert!(HttpStatus::TooManyRequests.is_client_error());
        assert!(HttpStatus::LoopDetected.is_server_error());
        assert_eq!(StatusClass::of(299), Some(StatusClass::Successful));
        assert_eq!(StatusClass::of(600), None);
        assert_eq!(StatusClass::of(99), None);
        for status in HttpStatus::ALL {
            assert_eq!(StatusClass::of(status.code()), Some(status.class()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(HttpStatus::NotFound.to_string(), "404 Not Found");
        assert_eq!(StatusClass::ClientError.to_string(), "Client Error");
    }

    #[test]
    fn test_serde_uses_numeric_code() {
        #[derive(Serialize, Deserialize)]
        struct Doc {
            status: HttpStatus,
        }

        let text = toml::to_string(&Doc { status: HttpStatus::Created }).unwrap();
        assert_eq!(text.trim(), "status = 201");
        let doc: Doc = toml::from_str("status = 503").unwrap();
        assert_eq!(doc.status, HttpStatus::ServiceUnavailable);
        assert!(toml::from_str::<Doc>("status = 299").is_err());
    }
}
