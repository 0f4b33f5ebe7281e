//! Link relation types for the `Link` header field, from the IANA "Link
//! Relations" registry.
//!
//! Registered relation types compare case-insensitively (RFC 8288,
//! Section 2.1.1).

use crate::registry::Case;

string_table! {
    pub static LINK_RELATIONS = "link_relations", "Link Relations",
        "https://www.iana.org/assignments/link-relations", Case::Insensitive;
    ABOUT => "about", "RFC 6903, Section 2";
    ACL => "acl", "W3C Solid Protocol, Section 11.1";
    ALTERNATE => "alternate", "HTML Living Standard, Section 4.6.7.1";
    AMPHTML => "amphtml", "AMP HTML Specification";
    APPENDIX => "appendix", "HTML 4.01 Specification, Section 6.12";
    APPLE_TOUCH_ICON => "apple-touch-icon", "Apple Safari Web Content Guide";
    APPLE_TOUCH_STARTUP_IMAGE => "apple-touch-startup-image", "Apple Safari Web Content Guide";
    ARCHIVES => "archives", "HTML5 (2014), Section 4.8.4.1";
    AUTHOR => "author", "HTML Living Standard, Section 4.6.7.2";
    BLOCKED_BY => "blocked-by", "RFC 7725, Section 4";
    BOOKMARK => "bookmark", "HTML Living Standard, Section 4.6.7.3";
    CANONICAL => "canonical", "RFC 6596, Section 3";
    CHAPTER => "chapter", "HTML 4.01 Specification, Section 6.12";
    CITE_AS => "cite-as", "RFC 8574, Section 3";
    COLLECTION => "collection", "RFC 6573, Section 2.1";
    COMPRESSION_DICTIONARY => "compression-dictionary", "RFC 9842, Section 3";
    CONTENTS => "contents", "HTML 4.01 Specification, Section 6.12";
    CONVERTEDFROM => "convertedfrom", "RFC 7991, Section 2.2";
    COPYRIGHT => "copyright", "HTML 4.01 Specification, Section 6.12";
    CREATE_FORM => "create-form", "RFC 6861, Section 3.1";
    CURRENT => "current", "RFC 5005, Section 3";
    DESCRIBEDBY => "describedby", "W3C Protocol for Web Description Resources (POWDER), Appendix D";
    DESCRIBES => "describes", "RFC 6892, Section 2";
    DISCLOSURE => "disclosure", "RFC 6579, Section 3";
    DNS_PREFETCH => "dns-prefetch", "W3C Resource Hints, Section 2.1";
    DUPLICATE => "duplicate", "RFC 6249, Section 6";
    EDIT => "edit", "RFC 5023, Section 11.1";
    EDIT_FORM => "edit-form", "RFC 6861, Section 3.2";
    EDIT_MEDIA => "edit-media", "RFC 5023, Section 11.2";
    ENCLOSURE => "enclosure", "RFC 4287, Section 4.2.7.2";
    EXTERNAL => "external", "HTML Living Standard, Section 4.6.7.5";
    FIRST => "first", "RFC 8288, Section 6.2.2";
    GLOSSARY => "glossary", "HTML 4.01 Specification, Section 6.12";
    HELP => "help", "HTML Living Standard, Section 4.6.7.6";
    HOSTS => "hosts", "RFC 6690, Section 7.1";
    HUB => "hub", "W3C WebSub, Section 4";
    ICON => "icon", "HTML Living Standard, Section 4.6.7.7";
    INDEX => "index", "HTML 4.01 Specification, Section 6.12";
    INTERVALAFTER => "intervalafter", "W3C Time Ontology in OWL, Section 4.2.21";
    INTERVALBEFORE => "intervalbefore", "W3C Time Ontology in OWL, Section 4.2.22";
    INTERVALCONTAINS => "intervalcontains", "W3C Time Ontology in OWL, Section 4.2.23";
    INTERVALDISJOINT => "intervaldisjoint", "W3C Time Ontology in OWL, Section 4.2.24";
    INTERVALDURING => "intervalduring", "W3C Time Ontology in OWL, Section 4.2.25";
    INTERVALEQUALS => "intervalequals", "W3C Time Ontology in OWL, Section 4.2.26";
    INTERVALFINISHEDBY => "intervalfinishedby", "W3C Time Ontology in OWL, Section 4.2.27";
    INTERVALFINISHES => "intervalfinishes", "W3C Time Ontology in OWL, Section 4.2.28";
    INTERVALIN => "intervalin", "W3C Time Ontology in OWL, Section 4.2.29";
    INTERVALMEETS => "intervalmeets", "W3C Time Ontology in OWL, Section 4.2.30";
    INTERVALMETBY => "intervalmetby", "W3C Time Ontology in OWL, Section 4.2.31";
    INTERVALOVERLAPPEDBY => "intervaloverlappedby", "W3C Time Ontology in OWL, Section 4.2.32";
    INTERVALOVERLAPS => "intervaloverlaps", "W3C Time Ontology in OWL, Section 4.2.33";
    INTERVALSTARTEDBY => "intervalstartedby", "W3C Time Ontology in OWL, Section 4.2.34";
    INTERVALSTARTS => "intervalstarts", "W3C Time Ontology in OWL, Section 4.2.35";
    ITEM => "item", "RFC 6573, Section 2.2";
    LAST => "last", "RFC 8288, Section 6.2.2";
    LATEST_VERSION => "latest-version", "RFC 5829, Section 3.2";
    LICENSE => "license", "RFC 4946, Section 4";
    LINKSET => "linkset", "RFC 9264, Section 6";
    LRDD => "lrdd", "RFC 6415, Section 6.3";
    MANIFEST => "manifest", "W3C Web Application Manifest, Section 1.1";
    MASK_ICON => "mask-icon", "Apple Safari Pinned Tab Icons";
    ME => "me", "HTML Living Standard, Section 4.6.7";
    MEDIA_FEED => "media-feed", "Media Feeds Specification";
    MEMENTO => "memento", "RFC 7089, Section 2.2";
    MICROPUB => "micropub", "W3C Micropub, Section 5.3";
    MODULEPRELOAD => "modulepreload", "HTML Living Standard, Section 4.6.7.11";
    MONITOR => "monitor", "RFC 5989, Section 6.1";
    MONITOR_GROUP => "monitor-group", "RFC 5989, Section 6.2";
    NEXT => "next", "HTML Living Standard, Section 4.6.7.17";
    NEXT_ARCHIVE => "next-archive", "RFC 5005, Section 4";
    NOFOLLOW => "nofollow", "HTML Living Standard, Section 4.6.7.12";
    NOOPENER => "noopener", "HTML Living Standard, Section 4.6.7.13";
    NOREFERRER => "noreferrer", "HTML Living Standard, Section 4.6.7.14";
    OPENER => "opener", "HTML Living Standard, Section 4.6.7.15";
    OPENID2_LOCAL_ID => "openid2.local_id", "OpenID Authentication 2.0, Section 7.3.3";
    OPENID2_PROVIDER => "openid2.provider", "OpenID Authentication 2.0, Section 7.3.3";
    ORIGINAL => "original", "RFC 7089, Section 2.2";
    P3PV1 => "p3pv1", "W3C The Platform for Privacy Preferences 1.0 (P3P1.0), Section 2.2";
    PAYMENT => "payment", "Web Payments";
    PINGBACK => "pingback", "Pingback 1.0";
    PRECONNECT => "preconnect", "W3C Resource Hints, Section 3.1";
    PREDECESSOR_VERSION => "predecessor-version", "RFC 5829, Section 3.4";
    PREFETCH => "prefetch", "W3C Resource Hints, Section 4.1";
    PRELOAD => "preload", "W3C Preload, Section 2";
    PRERENDER => "prerender", "W3C Resource Hints, Section 5.1";
    PREV => "prev", "HTML Living Standard, Section 4.6.7.20";
    PREV_ARCHIVE => "prev-archive", "RFC 5005, Section 4";
    PREVIEW => "preview", "RFC 6903, Section 3";
    PREVIOUS => "previous", "HTML 4.01 Specification, Section 6.12";
    PRIVACY_POLICY => "privacy-policy", "RFC 6903, Section 4";
    PROFILE => "profile", "RFC 6906";
    PUBLICATION => "publication", "W3C Publication Manifest, Section 2.2";
    RELATED => "related", "RFC 4287, Section 4.2.7.2";
    REPLIES => "replies", "RFC 4685, Section 3";
    RESTCONF => "restconf", "RFC 8040, Section 3.1";
    RULEINPUT => "ruleinput", "IEEE 802.1 Task Group";
    SEARCH => "search", "HTML Living Standard, Section 4.6.7.19";
    SECTION => "section", "HTML 4.01 Specification, Section 6.12";
    SELF => "self", "RFC 4287, Section 4.2.7.2";
    SERVICE => "service", "RFC 5023, Section 8.3.1";
    SERVICE_DESC => "service-desc", "RFC 8631, Section 4.1";
    SERVICE_DOC => "service-doc", "RFC 8631, Section 4.2";
    SERVICE_META => "service-meta", "RFC 8631, Section 4.3";
    SIP_TRUNKING_CAPABILITY => "sip-trunking-capability", "RFC 9409, Section 3";
    SPONSORED => "sponsored", "Qualify your outbound links to Google";
    START => "start", "HTML 4.01 Specification, Section 6.12";
    STATUS => "status", "RFC 8631, Section 4.4";
    STYLESHEET => "stylesheet", "HTML Living Standard, Section 4.6.7.21";
    SUBSECTION => "subsection", "HTML 4.01 Specification, Section 6.12";
    SUCCESSOR_VERSION => "successor-version", "RFC 5829, Section 3.5";
    SUNSET => "sunset", "RFC 8594, Section 6";
    TAG => "tag", "HTML Living Standard, Section 4.6.7.22";
    TERMS_OF_SERVICE => "terms-of-service", "RFC 6903, Section 5";
    TIMEGATE => "timegate", "RFC 7089, Section 2.2";
    TIMEMAP => "timemap", "RFC 7089, Section 2.2";
    TYPE => "type", "RFC 6903, Section 6";
    UGC => "ugc", "Qualify your outbound links to Google";
    UP => "up", "RFC 8288, Section 6.2.2";
    VERSION_HISTORY => "version-history", "RFC 5829, Section 3.3";
    VIA => "via", "RFC 4287, Section 4.2.7.2";
    WEBMENTION => "webmention", "W3C Webmention, Section 3.1.2";
    WORKING_COPY => "working-copy", "RFC 5829, Section 3.1";
    WORKING_COPY_OF => "working-copy-of", "RFC 5829, Section 3.1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_relation_types() {
        assert_eq!(NEXT, "next");
        assert_eq!(SELF, "self");
        assert_eq!(SERVICE_DESC, "service-desc");
        assert_eq!(OPENID2_LOCAL_ID, "openid2.local_id");
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&LINK_RELATIONS);
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(LINK_RELATIONS.find("Canonical").map(|e| e.name), Some("CANONICAL"));
    }
}
