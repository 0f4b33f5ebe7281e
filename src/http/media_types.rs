//! Media types.
//!
//! A snapshot of the IANA "Media Types" registry across the application,
//! audio, font, image, message, model, multipart, text and video trees, plus a
//! few unregistered types every browser understands (`video/webm`,
//! `application/x-tar`). Media types are case-insensitive.
//!
//! Constant names are the type with every run of non-alphanumeric characters
//! replaced by `_`. Where two types would collide, `+` is spelled `PLUS`
//! (`AUDIO_AMR_WB` and `AUDIO_AMR_WB_PLUS`).
//!
//! The module also carries the file extension table used when a file has to be
//! labelled with a type, see [`from_extension`] and [`guess`].

use crate::registry::Case;

string_table! {
    pub static MEDIA_TYPES = "media_types", "Media Types",
        "https://www.iana.org/assignments/media-types", Case::Insensitive;
    APPLICATION_1D_INTERLEAVED_PARITYFEC => "application/1d-interleaved-parityfec", "IANA media type registration";
    APPLICATION_3GPDASH_QOE_REPORT_XML => "application/3gpdash-qoe-report+xml", "IANA media type registration";
    APPLICATION_3GPP_IMS_XML => "application/3gpp-ims+xml", "IANA media type registration";
    APPLICATION_3GPPHAL_JSON => "application/3gppHal+json", "IANA media type registration";
    APPLICATION_3GPPHALFORMS_JSON => "application/3gppHalForms+json", "IANA media type registration";
    APPLICATION_A2L => "application/A2L", "IANA media type registration";
    APPLICATION_ACE_CBOR => "application/ace+cbor", "IANA media type registration";
    APPLICATION_ACE_JSON => "application/ace+json", "IANA media type registration";
    APPLICATION_ACTIVEMESSAGE => "application/activemessage", "IANA media type registration";
    APPLICATION_ACTIVITY_JSON => "application/activity+json", "W3C Activity Streams 2.0, Section 2";
    APPLICATION_AIF_CBOR => "application/aif+cbor", "IANA media type registration";
    APPLICATION_AIF_JSON => "application/aif+json", "IANA media type registration";
    APPLICATION_ALTO_CDNI_JSON => "application/alto-cdni+json", "IANA media type registration";
    APPLICATION_ALTO_CDNIFILTER_JSON => "application/alto-cdnifilter+json", "IANA media type registration";
    APPLICATION_ALTO_COSTMAP_JSON => "application/alto-costmap+json", "IANA media type registration";
    APPLICATION_ALTO_COSTMAPFILTER_JSON => "application/alto-costmapfilter+json", "IANA media type registration";
    APPLICATION_ALTO_DIRECTORY_JSON => "application/alto-directory+json", "IANA media type registration";
    APPLICATION_ALTO_ENDPOINTCOST_JSON => "application/alto-endpointcost+json", "IANA media type registration";
    APPLICATION_ALTO_ENDPOINTCOSTPARAMS_JSON => "application/alto-endpointcostparams+json", "IANA media type registration";
    APPLICATION_ALTO_ENDPOINTPROP_JSON => "application/alto-endpointprop+json", "IANA media type registration";
    APPLICATION_ALTO_ENDPOINTPROPPARAMS_JSON => "application/alto-endpointpropparams+json", "IANA media type registration";
    APPLICATION_ALTO_ERROR_JSON => "application/alto-error+json", "IANA media type registration";
    APPLICATION_ALTO_NETWORKMAP_JSON => "application/alto-networkmap+json", "IANA media type registration";
    APPLICATION_ALTO_NETWORKMAPFILTER_JSON => "application/alto-networkmapfilter+json", "IANA media type registration";
    APPLICATION_ALTO_PROPMAP_JSON => "application/alto-propmap+json", "IANA media type registration";
    APPLICATION_ALTO_PROPMAPPARAMS_JSON => "application/alto-propmapparams+json", "IANA media type registration";
    APPLICATION_ALTO_UPDATESTREAMCONTROL_JSON => "application/alto-updatestreamcontrol+json", "IANA media type registration";
    APPLICATION_ALTO_UPDATESTREAMPARAMS_JSON => "application/alto-updatestreamparams+json", "IANA media type registration";
    APPLICATION_AML => "application/AML", "IANA media type registration";
    APPLICATION_ANDREW_INSET => "application/andrew-inset", "IANA media type registration";
    APPLICATION_ANNODEX => "application/annodex", "IANA media type registration";
    APPLICATION_APPLEFILE => "application/applefile", "IANA media type registration";
    APPLICATION_AT_JWT => "application/at+jwt", "RFC 9068, Section 4";
    APPLICATION_ATF => "application/ATF", "IANA media type registration";
    APPLICATION_ATFX => "application/ATFX", "IANA media type registration";
    APPLICATION_ATOM_XML => "application/atom+xml", "RFC 4287, Section 7";
    APPLICATION_ATOMCAT_XML => "application/atomcat+xml", "RFC 5023, Section 17.1";
    APPLICATION_ATOMDELETED_XML => "application/atomdeleted+xml", "IANA media type registration";
    APPLICATION_ATOMICMAIL => "application/atomicmail", "IANA media type registration";
    APPLICATION_ATOMSERV_XML => "application/atomserv+xml", "IANA media type registration";
    APPLICATION_ATOMSVC_XML => "application/atomsvc+xml", "RFC 5023, Section 17.2";
    APPLICATION_ATSC_DWD_XML => "application/atsc-dwd+xml", "IANA media type registration";
    APPLICATION_ATSC_DYNAMIC_EVENT_MESSAGE => "application/atsc-dynamic-event-message", "IANA media type registration";
    APPLICATION_ATSC_HELD_XML => "application/atsc-held+xml", "IANA media type registration";
    APPLICATION_ATSC_RDT_JSON => "application/atsc-rdt+json", "IANA media type registration";
    APPLICATION_ATSC_RSAT_XML => "application/atsc-rsat+xml", "IANA media type registration";
    APPLICATION_ATXML => "application/ATXML", "IANA media type registration";
    APPLICATION_AUTH_POLICY_XML => "application/auth-policy+xml", "IANA media type registration";
    APPLICATION_AUTOMATIONML_AML_XML => "application/automationml-aml+xml", "IANA media type registration";
    APPLICATION_AUTOMATIONML_AMLX_ZIP => "application/automationml-amlx+zip", "IANA media type registration";
    APPLICATION_BACNET_XDD_ZIP => "application/bacnet-xdd+zip", "IANA media type registration";
    APPLICATION_BATCH_SMTP => "application/batch-SMTP", "IANA media type registration";
    APPLICATION_BBOLIN => "application/bbolin", "IANA media type registration";
    APPLICATION_BEEP_XML => "application/beep+xml", "IANA media type registration";
    APPLICATION_CALENDAR_JSON => "application/calendar+json", "RFC 7265, Section 6";
    APPLICATION_CALENDAR_XML => "application/calendar+xml", "RFC 6321, Section 6";
    APPLICATION_CALL_COMPLETION => "application/call-completion", "IANA media type registration";
    APPLICATION_CALS_1840 => "application/CALS-1840", "IANA media type registration";
    APPLICATION_CAPTIVE_JSON => "application/captive+json", "IANA media type registration";
    APPLICATION_CBOR => "application/cbor", "RFC 8949, Section 9.5";
    APPLICATION_CBOR_SEQ => "application/cbor-seq", "RFC 8742, Section 6";
    APPLICATION_CCCEX => "application/cccex", "IANA media type registration";
    APPLICATION_CCMP_XML => "application/ccmp+xml", "IANA media type registration";
    APPLICATION_CCXML_XML => "application/ccxml+xml", "IANA media type registration";
    APPLICATION_CDA_XML => "application/cda+xml", "IANA media type registration";
    APPLICATION_CDFX_XML => "application/CDFX+XML", "IANA media type registration";
    APPLICATION_CDMI_CAPABILITY => "application/cdmi-capability", "IANA media type registration";
    APPLICATION_CDMI_CONTAINER => "application/cdmi-container", "IANA media type registration";
    APPLICATION_CDMI_DOMAIN => "application/cdmi-domain", "IANA media type registration";
    APPLICATION_CDMI_OBJECT => "application/cdmi-object", "IANA media type registration";
    APPLICATION_CDMI_QUEUE => "application/cdmi-queue", "IANA media type registration";
    APPLICATION_CDNI => "application/cdni", "IANA media type registration";
    APPLICATION_CEA => "application/CEA", "IANA media type registration";
    APPLICATION_CEA_2018_XML => "application/cea-2018+xml", "IANA media type registration";
    APPLICATION_CELLML_XML => "application/cellml+xml", "IANA media type registration";
    APPLICATION_CFW => "application/cfw", "IANA media type registration";
    APPLICATION_CITY_JSON => "application/city+json", "IANA media type registration";
    APPLICATION_CLR => "application/clr", "IANA media type registration";
    APPLICATION_CLUE_XML => "application/clue+xml", "IANA media type registration";
    APPLICATION_CLUE_INFO_XML => "application/clue_info+xml", "IANA media type registration";
    APPLICATION_CMS => "application/cms", "IANA media type registration";
    APPLICATION_CNRP_XML => "application/cnrp+xml", "IANA media type registration";
    APPLICATION_COAP_GROUP_JSON => "application/coap-group+json", "IANA media type registration";
    APPLICATION_COAP_PAYLOAD => "application/coap-payload", "IANA media type registration";
    APPLICATION_COMMONGROUND => "application/commonground", "IANA media type registration";
    APPLICATION_CONCISE_PROBLEM_DETAILS_CBOR => "application/concise-problem-details+cbor", "IANA media type registration";
    APPLICATION_CONFERENCE_INFO_XML => "application/conference-info+xml", "IANA media type registration";
    APPLICATION_COSE => "application/cose", "RFC 9052, Section 11.2";
    APPLICATION_COSE_KEY => "application/cose-key", "RFC 9052, Section 11.2";
    APPLICATION_COSE_KEY_SET => "application/cose-key-set", "RFC 9052, Section 11.2";
    APPLICATION_COSE_X509 => "application/cose-x509", "IANA media type registration";
    APPLICATION_CPL_XML => "application/cpl+xml", "IANA media type registration";
    APPLICATION_CSRATTRS => "application/csrattrs", "IANA media type registration";
    APPLICATION_CSTA_XML => "application/csta+xml", "IANA media type registration";
    APPLICATION_CSTADATA_XML => "application/CSTAdata+xml", "IANA media type registration";
    APPLICATION_CSVM_JSON => "application/csvm+json", "IANA media type registration";
    APPLICATION_CU_SEEME => "application/cu-seeme", "IANA media type registration";
    APPLICATION_CWL => "application/cwl", "IANA media type registration";
    APPLICATION_CWL_JSON => "application/cwl+json", "IANA media type registration";
    APPLICATION_CWT => "application/cwt", "RFC 8392, Section 9.3";
    APPLICATION_CYBERCASH => "application/cybercash", "IANA media type registration";
    APPLICATION_DASH_XML => "application/dash+xml", "IANA media type registration";
    APPLICATION_DASH_PATCH_XML => "application/dash-patch+xml", "IANA media type registration";
    APPLICATION_DASHDELTA => "application/dashdelta", "IANA media type registration";
    APPLICATION_DAVMOUNT_XML => "application/davmount+xml", "IANA media type registration";
    APPLICATION_DCA_RFT => "application/dca-rft", "IANA media type registration";
    APPLICATION_DCD => "application/DCD", "IANA media type registration";
    APPLICATION_DEC_DX => "application/dec-dx", "IANA media type registration";
    APPLICATION_DIALOG_INFO_XML => "application/dialog-info+xml", "IANA media type registration";
    APPLICATION_DICOM => "application/dicom", "RFC 3240";
    APPLICATION_DICOM_JSON => "application/dicom+json", "IANA media type registration";
    APPLICATION_DICOM_XML => "application/dicom+xml", "IANA media type registration";
    APPLICATION_DII => "application/DII", "IANA media type registration";
    APPLICATION_DIT => "application/DIT", "IANA media type registration";
    APPLICATION_DNS => "application/dns", "RFC 4027, Section 3";
    APPLICATION_DNS_JSON => "application/dns+json", "IANA media type registration";
    APPLICATION_DNS_MESSAGE => "application/dns-message", "RFC 8484, Section 6";
    APPLICATION_DOTS_CBOR => "application/dots+cbor", "IANA media type registration";
    APPLICATION_DSKPP_XML => "application/dskpp+xml", "IANA media type registration";
    APPLICATION_DSPTYPE => "application/dsptype", "IANA media type registration";
    APPLICATION_DSSC_DER => "application/dssc+der", "IANA media type registration";
    APPLICATION_DSSC_XML => "application/dssc+xml", "IANA media type registration";
    APPLICATION_DVCS => "application/dvcs", "IANA media type registration";
    APPLICATION_ECMASCRIPT => "application/ecmascript", "RFC 9239, Section 6";
    APPLICATION_EDI_CONSENT => "application/EDI-consent", "IANA media type registration";
    APPLICATION_EDI_X12 => "application/EDI-X12", "IANA media type registration";
    APPLICATION_EDIFACT => "application/EDIFACT", "IANA media type registration";
    APPLICATION_EFI => "application/efi", "IANA media type registration";
    APPLICATION_ELM_JSON => "application/elm+json", "IANA media type registration";
    APPLICATION_ELM_XML => "application/elm+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_CAP_XML => "application/EmergencyCallData.cap+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_COMMENT_XML => "application/EmergencyCallData.Comment+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_CONTROL_XML => "application/EmergencyCallData.Control+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_DEVICEINFO_XML => "application/EmergencyCallData.DeviceInfo+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_ECALL_MSD => "application/EmergencyCallData.eCall.MSD", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_LEGACYESN_JSON => "application/EmergencyCallData.LegacyESN+json", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_PROVIDERINFO_XML => "application/EmergencyCallData.ProviderInfo+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_SERVICEINFO_XML => "application/EmergencyCallData.ServiceInfo+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_SUBSCRIBERINFO_XML => "application/EmergencyCallData.SubscriberInfo+xml", "IANA media type registration";
    APPLICATION_EMERGENCYCALLDATA_VEDS_XML => "application/EmergencyCallData.VEDS+xml", "IANA media type registration";
    APPLICATION_EMMA_XML => "application/emma+xml", "IANA media type registration";
    APPLICATION_EMOTIONML_XML => "application/emotionml+xml", "IANA media type registration";
    APPLICATION_ENCAPRTP => "application/encaprtp", "IANA media type registration";
    APPLICATION_EPP_XML => "application/epp+xml", "IANA media type registration";
    APPLICATION_EPUB_ZIP => "application/epub+zip", "W3C EPUB 3.3, Section 4.2";
    APPLICATION_ESHOP => "application/eshop", "IANA media type registration";
    APPLICATION_EXAMPLE => "application/example", "IANA media type registration";
    APPLICATION_EXI => "application/exi", "IANA media type registration";
    APPLICATION_EXPECT_CT_REPORT_JSON => "application/expect-ct-report+json", "IANA media type registration";
    APPLICATION_EXPRESS => "application/express", "IANA media type registration";
    APPLICATION_FASTINFOSET => "application/fastinfoset", "IANA media type registration";
    APPLICATION_FASTSOAP => "application/fastsoap", "IANA media type registration";
    APPLICATION_FDF => "application/fdf", "IANA media type registration";
    APPLICATION_FDT_XML => "application/fdt+xml", "IANA media type registration";
    APPLICATION_FHIR_JSON => "application/fhir+json", "IANA media type registration";
    APPLICATION_FHIR_XML => "application/fhir+xml", "IANA media type registration";
    APPLICATION_FITS => "application/fits", "IANA media type registration";
    APPLICATION_FLEXFEC => "application/flexfec", "IANA media type registration";
    APPLICATION_FONT_TDPFR => "application/font-tdpfr", "IANA media type registration";
    APPLICATION_FRAMEWORK_ATTRIBUTES_XML => "application/framework-attributes+xml", "IANA media type registration";
    APPLICATION_FUTURESPLASH => "application/futuresplash", "IANA media type registration";
    APPLICATION_GEO_JSON => "application/geo+json", "RFC 7946, Section 12";
    APPLICATION_GEO_JSON_SEQ => "application/geo+json-seq", "IANA media type registration";
    APPLICATION_GEOPACKAGE_SQLITE3 => "application/geopackage+sqlite3", "IANA media type registration";
    APPLICATION_GEOXACML_XML => "application/geoxacml+xml", "IANA media type registration";
    APPLICATION_GLTF_BUFFER => "application/gltf-buffer", "IANA media type registration";
    APPLICATION_GML_XML => "application/gml+xml", "IANA media type registration";
    APPLICATION_GRAPHQL_RESPONSE_JSON => "application/graphql-response+json", "GraphQL over HTTP, Section 7.2";
    APPLICATION_GRPC => "application/grpc", "gRPC over HTTP2";
    APPLICATION_GZIP => "application/gzip", "RFC 6713, Section 3";
    APPLICATION_H224 => "application/H224", "IANA media type registration";
    APPLICATION_HAL_JSON => "application/hal+json", "draft-kelly-json-hal";
    APPLICATION_HELD_XML => "application/held+xml", "IANA media type registration";
    APPLICATION_HL7V2_XML => "application/hl7v2+xml", "IANA media type registration";
    APPLICATION_HTA => "application/hta", "IANA media type registration";
    APPLICATION_HTTP => "application/http", "RFC 9112, Section 10.2";
    APPLICATION_HYPERSTUDIO => "application/hyperstudio", "IANA media type registration";
    APPLICATION_IBE_KEY_REQUEST_XML => "application/ibe-key-request+xml", "IANA media type registration";
    APPLICATION_IBE_PKG_REPLY_XML => "application/ibe-pkg-reply+xml", "IANA media type registration";
    APPLICATION_IBE_PP_DATA => "application/ibe-pp-data", "IANA media type registration";
    APPLICATION_IGES => "application/iges", "IANA media type registration";
    APPLICATION_IM_ISCOMPOSING_XML => "application/im-iscomposing+xml", "IANA media type registration";
    APPLICATION_INDEX => "application/index", "IANA media type registration";
    APPLICATION_INDEX_CMD => "application/index.cmd", "IANA media type registration";
    APPLICATION_INDEX_OBJ => "application/index.obj", "IANA media type registration";
    APPLICATION_INDEX_RESPONSE => "application/index.response", "IANA media type registration";
    APPLICATION_INDEX_VND => "application/index.vnd", "IANA media type registration";
    APPLICATION_INKML_XML => "application/inkml+xml", "IANA media type registration";
    APPLICATION_IOTP => "application/IOTP", "IANA media type registration";
    APPLICATION_IPFIX => "application/ipfix", "IANA media type registration";
    APPLICATION_IPP => "application/ipp", "IANA media type registration";
    APPLICATION_ISUP => "application/ISUP", "IANA media type registration";
    APPLICATION_ITS_XML => "application/its+xml", "IANA media type registration";
    APPLICATION_JAVA_ARCHIVE => "application/java-archive", "JAR File Specification";
    APPLICATION_JAVA_SERIALIZED_OBJECT => "application/java-serialized-object", "IANA media type registration";
    APPLICATION_JAVA_VM => "application/java-vm", "IANA media type registration";
    APPLICATION_JAVASCRIPT => "application/javascript", "RFC 9239, Section 6";
    APPLICATION_JF2FEED_JSON => "application/jf2feed+json", "IANA media type registration";
    APPLICATION_JOSE => "application/jose", "RFC 7515, Section 9.2";
    APPLICATION_JOSE_JSON => "application/jose+json", "RFC 7515, Section 9.2";
    APPLICATION_JRD_JSON => "application/jrd+json", "RFC 6415, Section 6.2";
    APPLICATION_JSCALENDAR_JSON => "application/jscalendar+json", "RFC 8984, Section 8.1";
    APPLICATION_JSON => "application/json", "RFC 8259, Section 11";
    APPLICATION_JSON_PATCH_JSON => "application/json-patch+json", "RFC 6902, Section 6";
    APPLICATION_JSON_SEQ => "application/json-seq", "RFC 7464, Section 4";
    APPLICATION_JSONPATH => "application/jsonpath", "RFC 9535, Section 3.1";
    APPLICATION_JWK_JSON => "application/jwk+json", "RFC 7517, Section 8.5";
    APPLICATION_JWK_SET_JSON => "application/jwk-set+json", "RFC 7517, Section 8.5";
    APPLICATION_JWT => "application/jwt", "RFC 7519, Section 10.3";
    APPLICATION_KPML_REQUEST_XML => "application/kpml-request+xml", "IANA media type registration";
    APPLICATION_KPML_RESPONSE_XML => "application/kpml-response+xml", "IANA media type registration";
    APPLICATION_LD_JSON => "application/ld+json", "W3C JSON-LD 1.1, Appendix C";
    APPLICATION_LGR_XML => "application/lgr+xml", "IANA media type registration";
    APPLICATION_LINK_FORMAT => "application/link-format", "RFC 6690, Section 7.1";
    APPLICATION_LINKSET => "application/linkset", "RFC 9264, Section 7.2";
    APPLICATION_LINKSET_JSON => "application/linkset+json", "RFC 9264, Section 7.3";
    APPLICATION_LOAD_CONTROL_XML => "application/load-control+xml", "IANA media type registration";
    APPLICATION_LOGOUT_JWT => "application/logout+jwt", "IANA media type registration";
    APPLICATION_LOST_XML => "application/lost+xml", "IANA media type registration";
    APPLICATION_LOSTSYNC_XML => "application/lostsync+xml", "IANA media type registration";
    APPLICATION_LPF_ZIP => "application/lpf+zip", "IANA media type registration";
    APPLICATION_LXF => "application/LXF", "IANA media type registration";
    APPLICATION_M3G => "application/m3g", "IANA media type registration";
    APPLICATION_MAC_BINHEX40 => "application/mac-binhex40", "IANA media type registration";
    APPLICATION_MAC_COMPACTPRO => "application/mac-compactpro", "IANA media type registration";
    APPLICATION_MACWRITEII => "application/macwriteii", "IANA media type registration";
    APPLICATION_MADS_XML => "application/mads+xml", "IANA media type registration";
    APPLICATION_MANIFEST_JSON => "application/manifest+json", "W3C Web Application Manifest, Section 12";
    APPLICATION_MARC => "application/marc", "RFC 2220";
    APPLICATION_MARCXML_XML => "application/marcxml+xml", "IANA media type registration";
    APPLICATION_MATHEMATICA => "application/mathematica", "IANA media type registration";
    APPLICATION_MATHML_XML => "application/mathml+xml", "W3C MathML 3.0, Appendix B";
    APPLICATION_MATHML_CONTENT_XML => "application/mathml-content+xml", "IANA media type registration";
    APPLICATION_MATHML_PRESENTATION_XML => "application/mathml-presentation+xml", "IANA media type registration";
    APPLICATION_MBMS_ASSOCIATED_PROCEDURE_DESCRIPTION_XML => "application/mbms-associated-procedure-description+xml", "IANA media type registration";
    APPLICATION_MBMS_DEREGISTER_XML => "application/mbms-deregister+xml", "IANA media type registration";
    APPLICATION_MBMS_ENVELOPE_XML => "application/mbms-envelope+xml", "IANA media type registration";
    APPLICATION_MBMS_MSK_XML => "application/mbms-msk+xml", "IANA media type registration";
    APPLICATION_MBMS_MSK_RESPONSE_XML => "application/mbms-msk-response+xml", "IANA media type registration";
    APPLICATION_MBMS_PROTECTION_DESCRIPTION_XML => "application/mbms-protection-description+xml", "IANA media type registration";
    APPLICATION_MBMS_RECEPTION_REPORT_XML => "application/mbms-reception-report+xml", "IANA media type registration";
    APPLICATION_MBMS_REGISTER_XML => "application/mbms-register+xml", "IANA media type registration";
    APPLICATION_MBMS_REGISTER_RESPONSE_XML => "application/mbms-register-response+xml", "IANA media type registration";
    APPLICATION_MBMS_SCHEDULE_XML => "application/mbms-schedule+xml", "IANA media type registration";
    APPLICATION_MBMS_USER_SERVICE_DESCRIPTION_XML => "application/mbms-user-service-description+xml", "IANA media type registration";
    APPLICATION_MBOX => "application/mbox", "RFC 4155";
    APPLICATION_MEDIA_POLICY_DATASET_XML => "application/media-policy-dataset+xml", "IANA media type registration";
    APPLICATION_MEDIA_CONTROL_XML => "application/media_control+xml", "IANA media type registration";
    APPLICATION_MEDIASERVERCONTROL_XML => "application/mediaservercontrol+xml", "IANA media type registration";
    APPLICATION_MERGE_PATCH_JSON => "application/merge-patch+json", "RFC 7396, Section 4";
    APPLICATION_METALINK4_XML => "application/metalink4+xml", "IANA media type registration";
    APPLICATION_METS_XML => "application/mets+xml", "IANA media type registration";
    APPLICATION_MF4 => "application/MF4", "IANA media type registration";
    APPLICATION_MIKEY => "application/mikey", "IANA media type registration";
    APPLICATION_MIPC => "application/mipc", "IANA media type registration";
    APPLICATION_MISSING_BLOCKS_CBOR_SEQ => "application/missing-blocks+cbor-seq", "IANA media type registration";
    APPLICATION_MMT_AEI_XML => "application/mmt-aei+xml", "IANA media type registration";
    APPLICATION_MMT_USD_XML => "application/mmt-usd+xml", "IANA media type registration";
    APPLICATION_MODS_XML => "application/mods+xml", "IANA media type registration";
    APPLICATION_MOSS_KEYS => "application/moss-keys", "IANA media type registration";
    APPLICATION_MOSS_SIGNATURE => "application/moss-signature", "IANA media type registration";
    APPLICATION_MOSSKEY_DATA => "application/mosskey-data", "IANA media type registration";
    APPLICATION_MOSSKEY_REQUEST => "application/mosskey-request", "IANA media type registration";
    APPLICATION_MP21 => "application/mp21", "IANA media type registration";
    APPLICATION_MP4 => "application/mp4", "RFC 4337, Section 4";
    APPLICATION_MPEG4_GENERIC => "application/mpeg4-generic", "RFC 3640, Section 4.1";
    APPLICATION_MPEG4_IOD => "application/mpeg4-iod", "IANA media type registration";
    APPLICATION_MPEG4_IOD_XMT => "application/mpeg4-iod-xmt", "IANA media type registration";
    APPLICATION_MRB_CONSUMER_XML => "application/mrb-consumer+xml", "IANA media type registration";
    APPLICATION_MRB_PUBLISH_XML => "application/mrb-publish+xml", "IANA media type registration";
    APPLICATION_MSACCESS => "application/msaccess", "IANA media type registration";
    APPLICATION_MSC_IVR_XML => "application/msc-ivr+xml", "IANA media type registration";
    APPLICATION_MSC_MIXER_XML => "application/msc-mixer+xml", "IANA media type registration";
    APPLICATION_MSWORD => "application/msword", "IANA media type registration";
    APPLICATION_MUD_JSON => "application/mud+json", "IANA media type registration";
    APPLICATION_MULTIPART_CORE => "application/multipart-core", "RFC 8710, Section 5.1";
    APPLICATION_MXF => "application/mxf", "IANA media type registration";
    APPLICATION_N_QUADS => "application/n-quads", "W3C RDF 1.1 N-Quads, Appendix B";
    APPLICATION_N_TRIPLES => "application/n-triples", "W3C RDF 1.1 N-Triples, Appendix C";
    APPLICATION_NASDATA => "application/nasdata", "IANA media type registration";
    APPLICATION_NEWS_CHECKGROUPS => "application/news-checkgroups", "IANA media type registration";
    APPLICATION_NEWS_GROUPINFO => "application/news-groupinfo", "IANA media type registration";
    APPLICATION_NEWS_TRANSMISSION => "application/news-transmission", "IANA media type registration";
    APPLICATION_NLSML_XML => "application/nlsml+xml", "IANA media type registration";
    APPLICATION_NODE => "application/node", "IANA media type registration";
    APPLICATION_NSS => "application/nss", "IANA media type registration";
    APPLICATION_OAUTH_AUTHZ_REQ_JWT => "application/oauth-authz-req+jwt", "RFC 9101, Section 10.2";
    APPLICATION_OBLIVIOUS_DNS_MESSAGE => "application/oblivious-dns-message", "IANA media type registration";
    APPLICATION_OCSP_REQUEST => "application/ocsp-request", "RFC 6960, Appendix C.1";
    APPLICATION_OCSP_RESPONSE => "application/ocsp-response", "RFC 6960, Appendix C.2";
    APPLICATION_OCTET_STREAM => "application/octet-stream", "RFC 2046, Section 4.5.1";
    APPLICATION_ODA => "application/ODA", "IANA media type registration";
    APPLICATION_ODM_XML => "application/odm+xml", "IANA media type registration";
    APPLICATION_ODX => "application/ODX", "IANA media type registration";
    APPLICATION_OEBPS_PACKAGE_XML => "application/oebps-package+xml", "IANA media type registration";
    APPLICATION_OGG => "application/ogg", "RFC 5334, Section 10.1";
    APPLICATION_ONENOTE => "application/onenote", "IANA media type registration";
    APPLICATION_OPC_NODESET_XML => "application/opc-nodeset+xml", "IANA media type registration";
    APPLICATION_OSCORE => "application/oscore", "IANA media type registration";
    APPLICATION_OXPS => "application/oxps", "IANA media type registration";
    APPLICATION_P21 => "application/p21", "IANA media type registration";
    APPLICATION_P21_ZIP => "application/p21+zip", "IANA media type registration";
    APPLICATION_P2P_OVERLAY_XML => "application/p2p-overlay+xml", "IANA media type registration";
    APPLICATION_PARITYFEC => "application/parityfec", "IANA media type registration";
    APPLICATION_PASSPORT => "application/passport", "IANA media type registration";
    APPLICATION_PATCH_OPS_ERROR_XML => "application/patch-ops-error+xml", "IANA media type registration";
    APPLICATION_PDF => "application/pdf", "RFC 8118, Section 8";
    APPLICATION_PDX => "application/PDX", "IANA media type registration";
    APPLICATION_PEM_CERTIFICATE_CHAIN => "application/pem-certificate-chain", "RFC 8555, Section 9.1";
    APPLICATION_PGP_ENCRYPTED => "application/pgp-encrypted", "RFC 3156, Section 4";
    APPLICATION_PGP_KEYS => "application/pgp-keys", "RFC 3156, Section 7";
    APPLICATION_PGP_SIGNATURE => "application/pgp-signature", "RFC 3156, Section 5";
    APPLICATION_PICS_RULES => "application/pics-rules", "IANA media type registration";
    APPLICATION_PIDF_XML => "application/pidf+xml", "IANA media type registration";
    APPLICATION_PIDF_DIFF_XML => "application/pidf-diff+xml", "IANA media type registration";
    APPLICATION_PKCS10 => "application/pkcs10", "RFC 5967, Section 3";
    APPLICATION_PKCS12 => "application/pkcs12", "RFC 7292, Appendix D";
    APPLICATION_PKCS7_MIME => "application/pkcs7-mime", "RFC 8551, Section 3.2";
    APPLICATION_PKCS7_SIGNATURE => "application/pkcs7-signature", "RFC 8551, Section 3.2";
    APPLICATION_PKCS8 => "application/pkcs8", "RFC 5958, Section 7.1";
    APPLICATION_PKCS8_ENCRYPTED => "application/pkcs8-encrypted", "IANA media type registration";
    APPLICATION_PKIX_ATTR_CERT => "application/pkix-attr-cert", "IANA media type registration";
    APPLICATION_PKIX_CERT => "application/pkix-cert", "RFC 2585, Section 4.1";
    APPLICATION_PKIX_CRL => "application/pkix-crl", "RFC 2585, Section 4.2";
    APPLICATION_PKIX_PKIPATH => "application/pkix-pkipath", "RFC 6066, Section 8";
    APPLICATION_PKIXCMP => "application/pkixcmp", "IANA media type registration";
    APPLICATION_PLS_XML => "application/pls+xml", "IANA media type registration";
    APPLICATION_POC_SETTINGS_XML => "application/poc-settings+xml", "IANA media type registration";
    APPLICATION_POSTSCRIPT => "application/postscript", "RFC 2046, Section 4.5.2";
    APPLICATION_PPSP_TRACKER_JSON => "application/ppsp-tracker+json", "IANA media type registration";
    APPLICATION_PROBLEM_JSON => "application/problem+json", "RFC 9457, Section 6.1";
    APPLICATION_PROBLEM_XML => "application/problem+xml", "RFC 9457, Section 6.2";
    APPLICATION_PROVENANCE_XML => "application/provenance+xml", "IANA media type registration";
    APPLICATION_PRS_ALVESTRAND_TITRAX_SHEET => "application/prs.alvestrand.titrax-sheet", "IANA personal tree registration";
    APPLICATION_PRS_CWW => "application/prs.cww", "IANA personal tree registration";
    APPLICATION_PRS_CYN => "application/prs.cyn", "IANA personal tree registration";
    APPLICATION_PRS_HPUB_ZIP => "application/prs.hpub+zip", "IANA personal tree registration";
    APPLICATION_PRS_NPREND => "application/prs.nprend", "IANA personal tree registration";
    APPLICATION_PRS_PLUCKER => "application/prs.plucker", "IANA personal tree registration";
    APPLICATION_PRS_RDF_XML_CRYPT => "application/prs.rdf-xml-crypt", "IANA personal tree registration";
    APPLICATION_PRS_XSF_XML => "application/prs.xsf+xml", "IANA personal tree registration";
    APPLICATION_PSKC_XML => "application/pskc+xml", "IANA media type registration";
    APPLICATION_PVD_JSON => "application/pvd+json", "IANA media type registration";
    APPLICATION_QSIG => "application/QSIG", "IANA media type registration";
    APPLICATION_RAPTORFEC => "application/raptorfec", "IANA media type registration";
    APPLICATION_RDAP_JSON => "application/rdap+json", "IANA media type registration";
    APPLICATION_RDF_XML => "application/rdf+xml", "RFC 3870";
    APPLICATION_REGINFO_XML => "application/reginfo+xml", "IANA media type registration";
    APPLICATION_RELAX_NG_COMPACT_SYNTAX => "application/relax-ng-compact-syntax", "IANA media type registration";
    APPLICATION_REPORTS_JSON => "application/reports+json", "W3C Reporting API, Section 10.1";
    APPLICATION_REPUTON_JSON => "application/reputon+json", "IANA media type registration";
    APPLICATION_RESOURCE_LISTS_XML => "application/resource-lists+xml", "IANA media type registration";
    APPLICATION_RESOURCE_LISTS_DIFF_XML => "application/resource-lists-diff+xml", "IANA media type registration";
    APPLICATION_RFC_XML => "application/rfc+xml", "IANA media type registration";
    APPLICATION_RISCOS => "application/riscos", "IANA media type registration";
    APPLICATION_RLMI_XML => "application/rlmi+xml", "IANA media type registration";
    APPLICATION_RLS_SERVICES_XML => "application/rls-services+xml", "IANA media type registration";
    APPLICATION_ROUTE_APD_XML => "application/route-apd+xml", "IANA media type registration";
    APPLICATION_ROUTE_S_TSID_XML => "application/route-s-tsid+xml", "IANA media type registration";
    APPLICATION_ROUTE_USD_XML => "application/route-usd+xml", "IANA media type registration";
    APPLICATION_RPKI_CHECKLIST => "application/rpki-checklist", "IANA media type registration";
    APPLICATION_RPKI_GHOSTBUSTERS => "application/rpki-ghostbusters", "IANA media type registration";
    APPLICATION_RPKI_MANIFEST => "application/rpki-manifest", "IANA media type registration";
    APPLICATION_RPKI_PUBLICATION => "application/rpki-publication", "IANA media type registration";
    APPLICATION_RPKI_ROA => "application/rpki-roa", "IANA media type registration";
    APPLICATION_RPKI_UPDOWN => "application/rpki-updown", "IANA media type registration";
    APPLICATION_RSS_XML => "application/rss+xml", "RSS 2.0 Specification";
    APPLICATION_RTF => "application/rtf", "IANA media type registration";
    APPLICATION_RTPLOOPBACK => "application/rtploopback", "IANA media type registration";
    APPLICATION_RTX => "application/rtx", "IANA media type registration";
    APPLICATION_SAMLASSERTION_XML => "application/samlassertion+xml", "IANA media type registration";
    APPLICATION_SAMLMETADATA_XML => "application/samlmetadata+xml", "IANA media type registration";
    APPLICATION_SARIF_JSON => "application/sarif+json", "IANA media type registration";
    APPLICATION_SARIF_EXTERNAL_PROPERTIES_JSON => "application/sarif-external-properties+json", "IANA media type registration";
    APPLICATION_SBE => "application/sbe", "IANA media type registration";
    APPLICATION_SBML_XML => "application/sbml+xml", "IANA media type registration";
    APPLICATION_SCAIP_XML => "application/scaip+xml", "IANA media type registration";
    APPLICATION_SCIM_JSON => "application/scim+json", "RFC 7644, Section 8.1";
    APPLICATION_SCVP_CV_REQUEST => "application/scvp-cv-request", "IANA media type registration";
    APPLICATION_SCVP_CV_RESPONSE => "application/scvp-cv-response", "IANA media type registration";
    APPLICATION_SCVP_VP_REQUEST => "application/scvp-vp-request", "IANA media type registration";
    APPLICATION_SCVP_VP_RESPONSE => "application/scvp-vp-response", "IANA media type registration";
    APPLICATION_SDP => "application/sdp", "RFC 8866, Section 8.1";
    APPLICATION_SECEVENT_JWT => "application/secevent+jwt", "RFC 8417, Section 7.2";
    APPLICATION_SENML_CBOR => "application/senml+cbor", "RFC 8428, Section 12.3";
    APPLICATION_SENML_JSON => "application/senml+json", "RFC 8428, Section 12.3";
    APPLICATION_SENML_XML => "application/senml+xml", "IANA media type registration";
    APPLICATION_SENML_ETCH_CBOR => "application/senml-etch+cbor", "IANA media type registration";
    APPLICATION_SENML_ETCH_JSON => "application/senml-etch+json", "IANA media type registration";
    APPLICATION_SENML_EXI => "application/senml-exi", "IANA media type registration";
    APPLICATION_SENSML_CBOR => "application/sensml+cbor", "IANA media type registration";
    APPLICATION_SENSML_JSON => "application/sensml+json", "IANA media type registration";
    APPLICATION_SENSML_XML => "application/sensml+xml", "IANA media type registration";
    APPLICATION_SENSML_EXI => "application/sensml-exi", "IANA media type registration";
    APPLICATION_SEP_XML => "application/sep+xml", "IANA media type registration";
    APPLICATION_SEP_EXI => "application/sep-exi", "IANA media type registration";
    APPLICATION_SESSION_INFO => "application/session-info", "IANA media type registration";
    APPLICATION_SET_PAYMENT => "application/set-payment", "IANA media type registration";
    APPLICATION_SET_PAYMENT_INITIATION => "application/set-payment-initiation", "IANA media type registration";
    APPLICATION_SET_REGISTRATION => "application/set-registration", "IANA media type registration";
    APPLICATION_SET_REGISTRATION_INITIATION => "application/set-registration-initiation", "IANA media type registration";
    APPLICATION_SGML => "application/SGML", "IANA media type registration";
    APPLICATION_SGML_OPEN_CATALOG => "application/sgml-open-catalog", "IANA media type registration";
    APPLICATION_SHF_XML => "application/shf+xml", "IANA media type registration";
    APPLICATION_SIEVE => "application/sieve", "IANA media type registration";
    APPLICATION_SIMPLE_FILTER_XML => "application/simple-filter+xml", "IANA media type registration";
    APPLICATION_SIMPLE_MESSAGE_SUMMARY => "application/simple-message-summary", "IANA media type registration";
    APPLICATION_SIMPLESYMBOLCONTAINER => "application/simpleSymbolContainer", "IANA media type registration";
    APPLICATION_SIPC => "application/sipc", "IANA media type registration";
    APPLICATION_SLATE => "application/slate", "IANA media type registration";
    APPLICATION_SMIL_XML => "application/smil+xml", "IANA media type registration";
    APPLICATION_SMPTE336M => "application/smpte336m", "IANA media type registration";
    APPLICATION_SOAP_FASTINFOSET => "application/soap+fastinfoset", "IANA media type registration";
    APPLICATION_SOAP_XML => "application/soap+xml", "RFC 3902";
    APPLICATION_SPARQL_QUERY => "application/sparql-query", "W3C SPARQL 1.1 Query Language, Appendix C";
    APPLICATION_SPARQL_RESULTS_JSON => "application/sparql-results+json", "W3C SPARQL 1.1 Query Results JSON Format, Section 4";
    APPLICATION_SPARQL_RESULTS_XML => "application/sparql-results+xml", "W3C SPARQL Query Results XML Format, Section 5";
    APPLICATION_SPDX_JSON => "application/spdx+json", "IANA media type registration";
    APPLICATION_SPIRITS_EVENT_XML => "application/spirits-event+xml", "IANA media type registration";
    APPLICATION_SQL => "application/sql", "RFC 6922";
    APPLICATION_SRGS => "application/srgs", "IANA media type registration";
    APPLICATION_SRGS_XML => "application/srgs+xml", "IANA media type registration";
    APPLICATION_SRU_XML => "application/sru+xml", "IANA media type registration";
    APPLICATION_SSML_XML => "application/ssml+xml", "RFC 4267";
    APPLICATION_STIX_JSON => "application/stix+json", "IANA media type registration";
    APPLICATION_SWID_CBOR => "application/swid+cbor", "IANA media type registration";
    APPLICATION_SWID_XML => "application/swid+xml", "IANA media type registration";
    APPLICATION_TAMP_APEX_UPDATE => "application/tamp-apex-update", "IANA media type registration";
    APPLICATION_TAMP_APEX_UPDATE_CONFIRM => "application/tamp-apex-update-confirm", "IANA media type registration";
    APPLICATION_TAMP_COMMUNITY_UPDATE => "application/tamp-community-update", "IANA media type registration";
    APPLICATION_TAMP_COMMUNITY_UPDATE_CONFIRM => "application/tamp-community-update-confirm", "IANA media type registration";
    APPLICATION_TAMP_ERROR => "application/tamp-error", "IANA media type registration";
    APPLICATION_TAMP_SEQUENCE_ADJUST => "application/tamp-sequence-adjust", "IANA media type registration";
    APPLICATION_TAMP_SEQUENCE_ADJUST_CONFIRM => "application/tamp-sequence-adjust-confirm", "IANA media type registration";
    APPLICATION_TAMP_STATUS_QUERY => "application/tamp-status-query", "IANA media type registration";
    APPLICATION_TAMP_STATUS_RESPONSE => "application/tamp-status-response", "IANA media type registration";
    APPLICATION_TAMP_UPDATE => "application/tamp-update", "IANA media type registration";
    APPLICATION_TAMP_UPDATE_CONFIRM => "application/tamp-update-confirm", "IANA media type registration";
    APPLICATION_TAXII_JSON => "application/taxii+json", "IANA media type registration";
    APPLICATION_TD_JSON => "application/td+json", "IANA media type registration";
    APPLICATION_TEI_XML => "application/tei+xml", "IANA media type registration";
    APPLICATION_TETRA_ISI => "application/TETRA_ISI", "IANA media type registration";
    APPLICATION_THRAUD_XML => "application/thraud+xml", "IANA media type registration";
    APPLICATION_TIMESTAMP_QUERY => "application/timestamp-query", "IANA media type registration";
    APPLICATION_TIMESTAMP_REPLY => "application/timestamp-reply", "IANA media type registration";
    APPLICATION_TIMESTAMPED_DATA => "application/timestamped-data", "IANA media type registration";
    APPLICATION_TLSRPT_GZIP => "application/tlsrpt+gzip", "IANA media type registration";
    APPLICATION_TLSRPT_JSON => "application/tlsrpt+json", "IANA media type registration";
    APPLICATION_TM_JSON => "application/tm+json", "IANA media type registration";
    APPLICATION_TNAUTHLIST => "application/tnauthlist", "IANA media type registration";
    APPLICATION_TOKEN_INTROSPECTION_JWT => "application/token-introspection+jwt", "RFC 9701, Section 7.2";
    APPLICATION_TRICKLE_ICE_SDPFRAG => "application/trickle-ice-sdpfrag", "IANA media type registration";
    APPLICATION_TRIG => "application/trig", "IANA media type registration";
    APPLICATION_TTML_XML => "application/ttml+xml", "IANA media type registration";
    APPLICATION_TVE_TRIGGER => "application/tve-trigger", "IANA media type registration";
    APPLICATION_TZIF => "application/tzif", "IANA media type registration";
    APPLICATION_TZIF_LEAP => "application/tzif-leap", "IANA media type registration";
    APPLICATION_ULPFEC => "application/ulpfec", "IANA media type registration";
    APPLICATION_URC_GRPSHEET_XML => "application/urc-grpsheet+xml", "IANA media type registration";
    APPLICATION_URC_RESSHEET_XML => "application/urc-ressheet+xml", "IANA media type registration";
    APPLICATION_URC_TARGETDESC_XML => "application/urc-targetdesc+xml", "IANA media type registration";
    APPLICATION_URC_UISOCKETDESC_XML => "application/urc-uisocketdesc+xml", "IANA media type registration";
    APPLICATION_VCARD_JSON => "application/vcard+json", "RFC 7095, Section 10.1";
    APPLICATION_VCARD_XML => "application/vcard+xml", "IANA media type registration";
    APPLICATION_VEMMI => "application/vemmi", "IANA media type registration";
    APPLICATION_VND_1000MINDS_DECISION_MODEL_XML => "application/vnd.1000minds.decision-model+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PROSE_XML => "application/vnd.3gpp-prose+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PROSE_PC3A_XML => "application/vnd.3gpp-prose-pc3a+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PROSE_PC3ACH_XML => "application/vnd.3gpp-prose-pc3ach+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PROSE_PC3CH_XML => "application/vnd.3gpp-prose-pc3ch+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PROSE_PC8_XML => "application/vnd.3gpp-prose-pc8+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_V2X_LOCAL_SERVICE_INFORMATION => "application/vnd.3gpp-v2x-local-service-information", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_5GNAS => "application/vnd.3gpp.5gnas", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_ACCESS_TRANSFER_EVENTS_XML => "application/vnd.3gpp.access-transfer-events+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_BSF_XML => "application/vnd.3gpp.bsf+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_GMOP_XML => "application/vnd.3gpp.GMOP+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_GTPC => "application/vnd.3gpp.gtpc", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_INTERWORKING_DATA => "application/vnd.3gpp.interworking-data", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_LPP => "application/vnd.3gpp.lpp", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MC_SIGNALLING_EAR => "application/vnd.3gpp.mc-signalling-ear", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_AFFILIATION_COMMAND_XML => "application/vnd.3gpp.mcdata-affiliation-command+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_INFO_XML => "application/vnd.3gpp.mcdata-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_MSGSTORE_CTRL_REQUEST_XML => "application/vnd.3gpp.mcdata-msgstore-ctrl-request+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_PAYLOAD => "application/vnd.3gpp.mcdata-payload", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_REGROUP_XML => "application/vnd.3gpp.mcdata-regroup+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_SERVICE_CONFIG_XML => "application/vnd.3gpp.mcdata-service-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_SIGNALLING => "application/vnd.3gpp.mcdata-signalling", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_UE_CONFIG_XML => "application/vnd.3gpp.mcdata-ue-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCDATA_USER_PROFILE_XML => "application/vnd.3gpp.mcdata-user-profile+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_AFFILIATION_COMMAND_XML => "application/vnd.3gpp.mcptt-affiliation-command+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_FLOOR_REQUEST_XML => "application/vnd.3gpp.mcptt-floor-request+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_INFO_XML => "application/vnd.3gpp.mcptt-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_LOCATION_INFO_XML => "application/vnd.3gpp.mcptt-location-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_MBMS_USAGE_INFO_XML => "application/vnd.3gpp.mcptt-mbms-usage-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_SERVICE_CONFIG_XML => "application/vnd.3gpp.mcptt-service-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_SIGNED_XML => "application/vnd.3gpp.mcptt-signed+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_UE_CONFIG_XML => "application/vnd.3gpp.mcptt-ue-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_UE_INIT_CONFIG_XML => "application/vnd.3gpp.mcptt-ue-init-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCPTT_USER_PROFILE_XML => "application/vnd.3gpp.mcptt-user-profile+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_AFFILIATION_COMMAND_XML => "application/vnd.3gpp.mcvideo-affiliation-command+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_INFO_XML => "application/vnd.3gpp.mcvideo-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_LOCATION_INFO_XML => "application/vnd.3gpp.mcvideo-location-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_MBMS_USAGE_INFO_XML => "application/vnd.3gpp.mcvideo-mbms-usage-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_SERVICE_CONFIG_XML => "application/vnd.3gpp.mcvideo-service-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_TRANSMISSION_REQUEST_XML => "application/vnd.3gpp.mcvideo-transmission-request+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_UE_CONFIG_XML => "application/vnd.3gpp.mcvideo-ue-config+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MCVIDEO_USER_PROFILE_XML => "application/vnd.3gpp.mcvideo-user-profile+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_MID_CALL_XML => "application/vnd.3gpp.mid-call+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_NGAP => "application/vnd.3gpp.ngap", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PFCP => "application/vnd.3gpp.pfcp", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PIC_BW_LARGE => "application/vnd.3gpp.pic-bw-large", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PIC_BW_SMALL => "application/vnd.3gpp.pic-bw-small", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_PIC_BW_VAR => "application/vnd.3gpp.pic-bw-var", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_S1AP => "application/vnd.3gpp.s1ap", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_SMS => "application/vnd.3gpp.sms", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_SMS_XML => "application/vnd.3gpp.sms+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_SRVCC_EXT_XML => "application/vnd.3gpp.srvcc-ext+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_SRVCC_INFO_XML => "application/vnd.3gpp.SRVCC-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_STATE_AND_EVENT_INFO_XML => "application/vnd.3gpp.state-and-event-info+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP_USSD_XML => "application/vnd.3gpp.ussd+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP2_BCMCSINFO_XML => "application/vnd.3gpp2.bcmcsinfo+xml", "IANA vendor tree registration";
    APPLICATION_VND_3GPP2_SMS => "application/vnd.3gpp2.sms", "IANA vendor tree registration";
    APPLICATION_VND_3GPP2_TCAP => "application/vnd.3gpp2.tcap", "IANA vendor tree registration";
    APPLICATION_VND_3LIGHTSSOFTWARE_IMAGESCAL => "application/vnd.3lightssoftware.imagescal", "IANA vendor tree registration";
    APPLICATION_VND_3M_POST_IT_NOTES => "application/vnd.3M.Post-it-Notes", "IANA vendor tree registration";
    APPLICATION_VND_ACCPAC_SIMPLY_ASO => "application/vnd.accpac.simply.aso", "IANA vendor tree registration";
    APPLICATION_VND_ACCPAC_SIMPLY_IMP => "application/vnd.accpac.simply.imp", "IANA vendor tree registration";
    APPLICATION_VND_ACUCOBOL => "application/vnd.acucobol", "IANA vendor tree registration";
    APPLICATION_VND_ACUCORP => "application/vnd.acucorp", "IANA vendor tree registration";
    APPLICATION_VND_ADOBE_FLASH_MOVIE => "application/vnd.adobe.flash.movie", "IANA vendor tree registration";
    APPLICATION_VND_ADOBE_FORMSCENTRAL_FCDT => "application/vnd.adobe.formscentral.fcdt", "IANA vendor tree registration";
    APPLICATION_VND_ADOBE_FXP => "application/vnd.adobe.fxp", "IANA vendor tree registration";
    APPLICATION_VND_ADOBE_PARTIAL_UPLOAD => "application/vnd.adobe.partial-upload", "IANA vendor tree registration";
    APPLICATION_VND_ADOBE_XDP_XML => "application/vnd.adobe.xdp+xml", "IANA vendor tree registration";
    APPLICATION_VND_AETHER_IMP => "application/vnd.aether.imp", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_AFPLINEDATA => "application/vnd.afpc.afplinedata", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_AFPLINEDATA_PAGEDEF => "application/vnd.afpc.afplinedata-pagedef", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_CMOCA_CMRESOURCE => "application/vnd.afpc.cmoca-cmresource", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_FOCA_CHARSET => "application/vnd.afpc.foca-charset", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_FOCA_CODEDFONT => "application/vnd.afpc.foca-codedfont", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_FOCA_CODEPAGE => "application/vnd.afpc.foca-codepage", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA => "application/vnd.afpc.modca", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA_FORMDEF => "application/vnd.afpc.modca-formdef", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA_MEDIUMMAP => "application/vnd.afpc.modca-mediummap", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA_OBJECTCONTAINER => "application/vnd.afpc.modca-objectcontainer", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA_OVERLAY => "application/vnd.afpc.modca-overlay", "IANA vendor tree registration";
    APPLICATION_VND_AFPC_MODCA_PAGESEGMENT => "application/vnd.afpc.modca-pagesegment", "IANA vendor tree registration";
    APPLICATION_VND_AGE => "application/vnd.age", "IANA vendor tree registration";
    APPLICATION_VND_AH_BARCODE => "application/vnd.ah-barcode", "IANA vendor tree registration";
    APPLICATION_VND_AHEAD_SPACE => "application/vnd.ahead.space", "IANA vendor tree registration";
    APPLICATION_VND_AIRZIP_FILESECURE_AZF => "application/vnd.airzip.filesecure.azf", "IANA vendor tree registration";
    APPLICATION_VND_AIRZIP_FILESECURE_AZS => "application/vnd.airzip.filesecure.azs", "IANA vendor tree registration";
    APPLICATION_VND_AMADEUS_JSON => "application/vnd.amadeus+json", "IANA vendor tree registration";
    APPLICATION_VND_AMAZON_MOBI8_EBOOK => "application/vnd.amazon.mobi8-ebook", "IANA vendor tree registration";
    APPLICATION_VND_AMERICANDYNAMICS_ACC => "application/vnd.americandynamics.acc", "IANA vendor tree registration";
    APPLICATION_VND_AMIGA_AMI => "application/vnd.amiga.ami", "IANA vendor tree registration";
    APPLICATION_VND_AMUNDSEN_MAZE_XML => "application/vnd.amundsen.maze+xml", "IANA vendor tree registration";
    APPLICATION_VND_ANDROID_OTA => "application/vnd.android.ota", "IANA vendor tree registration";
    APPLICATION_VND_ANDROID_PACKAGE_ARCHIVE => "application/vnd.android.package-archive", "IANA vendor tree registration";
    APPLICATION_VND_ANKI => "application/vnd.anki", "IANA vendor tree registration";
    APPLICATION_VND_ANSER_WEB_CERTIFICATE_ISSUE_INITIATION => "application/vnd.anser-web-certificate-issue-initiation", "IANA vendor tree registration";
    APPLICATION_VND_ANSER_WEB_FUNDS_TRANSFER_INITIATION => "application/vnd.anser-web-funds-transfer-initiation", "IANA vendor tree registration";
    APPLICATION_VND_ANTIX_GAME_COMPONENT => "application/vnd.antix.game-component", "IANA vendor tree registration";
    APPLICATION_VND_APACHE_ARROW_FILE => "application/vnd.apache.arrow.file", "IANA vendor tree registration";
    APPLICATION_VND_APACHE_ARROW_STREAM => "application/vnd.apache.arrow.stream", "IANA vendor tree registration";
    APPLICATION_VND_APACHE_THRIFT_BINARY => "application/vnd.apache.thrift.binary", "IANA vendor tree registration";
    APPLICATION_VND_APACHE_THRIFT_COMPACT => "application/vnd.apache.thrift.compact", "IANA vendor tree registration";
    APPLICATION_VND_APACHE_THRIFT_JSON => "application/vnd.apache.thrift.json", "IANA vendor tree registration";
    APPLICATION_VND_APEXLANG => "application/vnd.apexlang", "IANA vendor tree registration";
    APPLICATION_VND_API_JSON => "application/vnd.api+json", "JSON:API 1.1";
    APPLICATION_VND_APLEXTOR_WARRP_JSON => "application/vnd.aplextor.warrp+json", "IANA vendor tree registration";
    APPLICATION_VND_APOTHEKENDE_RESERVATION_JSON => "application/vnd.apothekende.reservation+json", "IANA vendor tree registration";
    APPLICATION_VND_APPLE_INSTALLER_XML => "application/vnd.apple.installer+xml", "IANA vendor tree registration";
    APPLICATION_VND_APPLE_KEYNOTE => "application/vnd.apple.keynote", "IANA vendor tree registration";
    APPLICATION_VND_APPLE_MPEGURL => "application/vnd.apple.mpegurl", "RFC 8216, Section 4";
    APPLICATION_VND_APPLE_NUMBERS => "application/vnd.apple.numbers", "IANA vendor tree registration";
    APPLICATION_VND_APPLE_PAGES => "application/vnd.apple.pages", "IANA vendor tree registration";
    APPLICATION_VND_ARISTANETWORKS_SWI => "application/vnd.aristanetworks.swi", "IANA vendor tree registration";
    APPLICATION_VND_ARTISAN_JSON => "application/vnd.artisan+json", "IANA vendor tree registration";
    APPLICATION_VND_ARTSQUARE => "application/vnd.artsquare", "IANA vendor tree registration";
    APPLICATION_VND_ASTRAEA_SOFTWARE_IOTA => "application/vnd.astraea-software.iota", "IANA vendor tree registration";
    APPLICATION_VND_AUDIOGRAPH => "application/vnd.audiograph", "IANA vendor tree registration";
    APPLICATION_VND_AUTOPACKAGE => "application/vnd.autopackage", "IANA vendor tree registration";
    APPLICATION_VND_AVALON_JSON => "application/vnd.avalon+json", "IANA vendor tree registration";
    APPLICATION_VND_AVISTAR_XML => "application/vnd.avistar+xml", "IANA vendor tree registration";
    APPLICATION_VND_BALSAMIQ_BMML_XML => "application/vnd.balsamiq.bmml+xml", "IANA vendor tree registration";
    APPLICATION_VND_BALSAMIQ_BMPR => "application/vnd.balsamiq.bmpr", "IANA vendor tree registration";
    APPLICATION_VND_BANANA_ACCOUNTING => "application/vnd.banana-accounting", "IANA vendor tree registration";
    APPLICATION_VND_BBF_USP_ERROR => "application/vnd.bbf.usp.error", "IANA vendor tree registration";
    APPLICATION_VND_BBF_USP_MSG => "application/vnd.bbf.usp.msg", "IANA vendor tree registration";
    APPLICATION_VND_BBF_USP_MSG_JSON => "application/vnd.bbf.usp.msg+json", "IANA vendor tree registration";
    APPLICATION_VND_BEKITZUR_STECH_JSON => "application/vnd.bekitzur-stech+json", "IANA vendor tree registration";
    APPLICATION_VND_BELIGHTSOFT_LHZD_ZIP => "application/vnd.belightsoft.lhzd+zip", "IANA vendor tree registration";
    APPLICATION_VND_BELIGHTSOFT_LHZL_ZIP => "application/vnd.belightsoft.lhzl+zip", "IANA vendor tree registration";
    APPLICATION_VND_BINT_MED_CONTENT => "application/vnd.bint.med-content", "IANA vendor tree registration";
    APPLICATION_VND_BIOPAX_RDF_XML => "application/vnd.biopax.rdf+xml", "IANA vendor tree registration";
    APPLICATION_VND_BLINK_IDB_VALUE_WRAPPER => "application/vnd.blink-idb-value-wrapper", "IANA vendor tree registration";
    APPLICATION_VND_BLUEICE_MULTIPASS => "application/vnd.blueice.multipass", "IANA vendor tree registration";
    APPLICATION_VND_BLUETOOTH_EP_OOB => "application/vnd.bluetooth.ep.oob", "IANA vendor tree registration";
    APPLICATION_VND_BLUETOOTH_LE_OOB => "application/vnd.bluetooth.le.oob", "IANA vendor tree registration";
    APPLICATION_VND_BMI => "application/vnd.bmi", "IANA vendor tree registration";
    APPLICATION_VND_BPF => "application/vnd.bpf", "IANA vendor tree registration";
    APPLICATION_VND_BPF3 => "application/vnd.bpf3", "IANA vendor tree registration";
    APPLICATION_VND_BUSINESSOBJECTS => "application/vnd.businessobjects", "IANA vendor tree registration";
    APPLICATION_VND_BYU_UAPI_JSON => "application/vnd.byu.uapi+json", "IANA vendor tree registration";
    APPLICATION_VND_CAB_JSCRIPT => "application/vnd.cab-jscript", "IANA vendor tree registration";
    APPLICATION_VND_CANON_CPDL => "application/vnd.canon-cpdl", "IANA vendor tree registration";
    APPLICATION_VND_CANON_LIPS => "application/vnd.canon-lips", "IANA vendor tree registration";
    APPLICATION_VND_CAPASYSTEMS_PG_JSON => "application/vnd.capasystems-pg+json", "IANA vendor tree registration";
    APPLICATION_VND_CENDIO_THINLINC_CLIENTCONF => "application/vnd.cendio.thinlinc.clientconf", "IANA vendor tree registration";
    APPLICATION_VND_CENTURY_SYSTEMS_TCP_STREAM => "application/vnd.century-systems.tcp_stream", "IANA vendor tree registration";
    APPLICATION_VND_CHEMDRAW_XML => "application/vnd.chemdraw+xml", "IANA vendor tree registration";
    APPLICATION_VND_CHESS_PGN => "application/vnd.chess-pgn", "IANA vendor tree registration";
    APPLICATION_VND_CHIPNUTS_KARAOKE_MMD => "application/vnd.chipnuts.karaoke-mmd", "IANA vendor tree registration";
    APPLICATION_VND_CIEDI => "application/vnd.ciedi", "IANA vendor tree registration";
    APPLICATION_VND_CINDERELLA => "application/vnd.cinderella", "IANA vendor tree registration";
    APPLICATION_VND_CIRPACK_ISDN_EXT => "application/vnd.cirpack.isdn-ext", "IANA vendor tree registration";
    APPLICATION_VND_CITATIONSTYLES_STYLE_XML => "application/vnd.citationstyles.style+xml", "IANA vendor tree registration";
    APPLICATION_VND_CLAYMORE => "application/vnd.claymore", "IANA vendor tree registration";
    APPLICATION_VND_CLOANTO_RP9 => "application/vnd.cloanto.rp9", "IANA vendor tree registration";
    APPLICATION_VND_CLONK_C4GROUP => "application/vnd.clonk.c4group", "IANA vendor tree registration";
    APPLICATION_VND_CLUETRUST_CARTOMOBILE_CONFIG => "application/vnd.cluetrust.cartomobile-config", "IANA vendor tree registration";
    APPLICATION_VND_CLUETRUST_CARTOMOBILE_CONFIG_PKG => "application/vnd.cluetrust.cartomobile-config-pkg", "IANA vendor tree registration";
    APPLICATION_VND_CNCF_HELM_CHART_CONTENT_V1_TAR_GZIP => "application/vnd.cncf.helm.chart.content.v1.tar+gzip", "IANA vendor tree registration";
    APPLICATION_VND_CNCF_HELM_CHART_PROVENANCE_V1_PROV => "application/vnd.cncf.helm.chart.provenance.v1.prov", "IANA vendor tree registration";
    APPLICATION_VND_COFFEESCRIPT => "application/vnd.coffeescript", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_DOCUMENT => "application/vnd.collabio.xodocuments.document", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_DOCUMENT_TEMPLATE => "application/vnd.collabio.xodocuments.document-template", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_PRESENTATION => "application/vnd.collabio.xodocuments.presentation", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_PRESENTATION_TEMPLATE => "application/vnd.collabio.xodocuments.presentation-template", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_SPREADSHEET => "application/vnd.collabio.xodocuments.spreadsheet", "IANA vendor tree registration";
    APPLICATION_VND_COLLABIO_XODOCUMENTS_SPREADSHEET_TEMPLATE => "application/vnd.collabio.xodocuments.spreadsheet-template", "IANA vendor tree registration";
    APPLICATION_VND_COLLECTION_JSON => "application/vnd.collection+json", "IANA vendor tree registration";
    APPLICATION_VND_COLLECTION_DOC_JSON => "application/vnd.collection.doc+json", "IANA vendor tree registration";
    APPLICATION_VND_COLLECTION_NEXT_JSON => "application/vnd.collection.next+json", "IANA vendor tree registration";
    APPLICATION_VND_COMICBOOK_ZIP => "application/vnd.comicbook+zip", "IANA vendor tree registration";
    APPLICATION_VND_COMICBOOK_RAR => "application/vnd.comicbook-rar", "IANA vendor tree registration";
    APPLICATION_VND_COMMERCE_BATTELLE => "application/vnd.commerce-battelle", "IANA vendor tree registration";
    APPLICATION_VND_COMMONSPACE => "application/vnd.commonspace", "IANA vendor tree registration";
    APPLICATION_VND_CONTACT_CMSG => "application/vnd.contact.cmsg", "IANA vendor tree registration";
    APPLICATION_VND_COREOS_IGNITION_JSON => "application/vnd.coreos.ignition+json", "IANA vendor tree registration";
    APPLICATION_VND_COSMOCALLER => "application/vnd.cosmocaller", "IANA vendor tree registration";
    APPLICATION_VND_CRICK_CLICKER => "application/vnd.crick.clicker", "IANA vendor tree registration";
    APPLICATION_VND_CRICK_CLICKER_KEYBOARD => "application/vnd.crick.clicker.keyboard", "IANA vendor tree registration";
    APPLICATION_VND_CRICK_CLICKER_PALETTE => "application/vnd.crick.clicker.palette", "IANA vendor tree registration";
    APPLICATION_VND_CRICK_CLICKER_TEMPLATE => "application/vnd.crick.clicker.template", "IANA vendor tree registration";
    APPLICATION_VND_CRICK_CLICKER_WORDBANK => "application/vnd.crick.clicker.wordbank", "IANA vendor tree registration";
    APPLICATION_VND_CRITICALTOOLS_WBS_XML => "application/vnd.criticaltools.wbs+xml", "IANA vendor tree registration";
    APPLICATION_VND_CRYPTII_PIPE_JSON => "application/vnd.cryptii.pipe+json", "IANA vendor tree registration";
    APPLICATION_VND_CRYPTO_SHADE_FILE => "application/vnd.crypto-shade-file", "IANA vendor tree registration";
    APPLICATION_VND_CRYPTOMATOR_ENCRYPTED => "application/vnd.cryptomator.encrypted", "IANA vendor tree registration";
    APPLICATION_VND_CRYPTOMATOR_VAULT => "application/vnd.cryptomator.vault", "IANA vendor tree registration";
    APPLICATION_VND_CTC_POSML => "application/vnd.ctc-posml", "IANA vendor tree registration";
    APPLICATION_VND_CTCT_WS_XML => "application/vnd.ctct.ws+xml", "IANA vendor tree registration";
    APPLICATION_VND_CUPS_PDF => "application/vnd.cups-pdf", "IANA vendor tree registration";
    APPLICATION_VND_CUPS_POSTSCRIPT => "application/vnd.cups-postscript", "IANA vendor tree registration";
    APPLICATION_VND_CUPS_PPD => "application/vnd.cups-ppd", "IANA vendor tree registration";
    APPLICATION_VND_CUPS_RASTER => "application/vnd.cups-raster", "IANA vendor tree registration";
    APPLICATION_VND_CUPS_RAW => "application/vnd.cups-raw", "IANA vendor tree registration";
    APPLICATION_VND_CURL => "application/vnd.curl", "IANA vendor tree registration";
    APPLICATION_VND_CYAN_DEAN_ROOT_XML => "application/vnd.cyan.dean.root+xml", "IANA vendor tree registration";
    APPLICATION_VND_CYBANK => "application/vnd.cybank", "IANA vendor tree registration";
    APPLICATION_VND_CYCLONEDX_JSON => "application/vnd.cyclonedx+json", "IANA vendor tree registration";
    APPLICATION_VND_CYCLONEDX_XML => "application/vnd.cyclonedx+xml", "IANA vendor tree registration";
    APPLICATION_VND_D2L_COURSEPACKAGE1P0_ZIP => "application/vnd.d2l.coursepackage1p0+zip", "IANA vendor tree registration";
    APPLICATION_VND_D3M_DATASET => "application/vnd.d3m-dataset", "IANA vendor tree registration";
    APPLICATION_VND_D3M_PROBLEM => "application/vnd.d3m-problem", "IANA vendor tree registration";
    APPLICATION_VND_DART => "application/vnd.dart", "IANA vendor tree registration";
    APPLICATION_VND_DATA_VISION_RDZ => "application/vnd.data-vision.rdz", "IANA vendor tree registration";
    APPLICATION_VND_DATALOG => "application/vnd.datalog", "IANA vendor tree registration";
    APPLICATION_VND_DATAPACKAGE_JSON => "application/vnd.datapackage+json", "IANA vendor tree registration";
    APPLICATION_VND_DATARESOURCE_JSON => "application/vnd.dataresource+json", "IANA vendor tree registration";
    APPLICATION_VND_DBF => "application/vnd.dbf", "IANA vendor tree registration";
    APPLICATION_VND_DEBIAN_BINARY_PACKAGE => "application/vnd.debian.binary-package", "IANA vendor tree registration";
    APPLICATION_VND_DECE_DATA => "application/vnd.dece.data", "IANA vendor tree registration";
    APPLICATION_VND_DECE_TTML_XML => "application/vnd.dece.ttml+xml", "IANA vendor tree registration";
    APPLICATION_VND_DECE_UNSPECIFIED => "application/vnd.dece.unspecified", "IANA vendor tree registration";
    APPLICATION_VND_DECE_ZIP => "application/vnd.dece.zip", "IANA vendor tree registration";
    APPLICATION_VND_DENOVO_FCSELAYOUT_LINK => "application/vnd.denovo.fcselayout-link", "IANA vendor tree registration";
    APPLICATION_VND_DESMUME_MOVIE => "application/vnd.desmume.movie", "IANA vendor tree registration";
    APPLICATION_VND_DIR_BI_PLATE_DL_NOSUFFIX => "application/vnd.dir-bi.plate-dl-nosuffix", "IANA vendor tree registration";
    APPLICATION_VND_DM_DELEGATION_XML => "application/vnd.dm.delegation+xml", "IANA vendor tree registration";
    APPLICATION_VND_DNA => "application/vnd.dna", "IANA vendor tree registration";
    APPLICATION_VND_DOCUMENT_JSON => "application/vnd.document+json", "IANA vendor tree registration";
    APPLICATION_VND_DOLBY_MOBILE_1 => "application/vnd.dolby.mobile.1", "IANA vendor tree registration";
    APPLICATION_VND_DOLBY_MOBILE_2 => "application/vnd.dolby.mobile.2", "IANA vendor tree registration";
    APPLICATION_VND_DOREMIR_SCORECLOUD_BINARY_DOCUMENT => "application/vnd.doremir.scorecloud-binary-document", "IANA vendor tree registration";
    APPLICATION_VND_DPGRAPH => "application/vnd.dpgraph", "IANA vendor tree registration";
    APPLICATION_VND_DREAMFACTORY => "application/vnd.dreamfactory", "IANA vendor tree registration";
    APPLICATION_VND_DRIVE_JSON => "application/vnd.drive+json", "IANA vendor tree registration";
    APPLICATION_VND_DTG_LOCAL => "application/vnd.dtg.local", "IANA vendor tree registration";
    APPLICATION_VND_DTG_LOCAL_FLASH => "application/vnd.dtg.local.flash", "IANA vendor tree registration";
    APPLICATION_VND_DTG_LOCAL_HTML => "application/vnd.dtg.local.html", "IANA vendor tree registration";
    APPLICATION_VND_DVB_AIT => "application/vnd.dvb.ait", "IANA vendor tree registration";
    APPLICATION_VND_DVB_DVBISL_XML => "application/vnd.dvb.dvbisl+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_DVBJ => "application/vnd.dvb.dvbj", "IANA vendor tree registration";
    APPLICATION_VND_DVB_ESGCONTAINER => "application/vnd.dvb.esgcontainer", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPDCDFTNOTIFACCESS => "application/vnd.dvb.ipdcdftnotifaccess", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPDCESGACCESS => "application/vnd.dvb.ipdcesgaccess", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPDCESGACCESS2 => "application/vnd.dvb.ipdcesgaccess2", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPDCESGPDD => "application/vnd.dvb.ipdcesgpdd", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPDCROAMING => "application/vnd.dvb.ipdcroaming", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPTV_ALFEC_BASE => "application/vnd.dvb.iptv.alfec-base", "IANA vendor tree registration";
    APPLICATION_VND_DVB_IPTV_ALFEC_ENHANCEMENT => "application/vnd.dvb.iptv.alfec-enhancement", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_AGGREGATE_ROOT_XML => "application/vnd.dvb.notif-aggregate-root+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_CONTAINER_XML => "application/vnd.dvb.notif-container+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_GENERIC_XML => "application/vnd.dvb.notif-generic+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_IA_MSGLIST_XML => "application/vnd.dvb.notif-ia-msglist+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_IA_REGISTRATION_REQUEST_XML => "application/vnd.dvb.notif-ia-registration-request+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_IA_REGISTRATION_RESPONSE_XML => "application/vnd.dvb.notif-ia-registration-response+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_NOTIF_INIT_XML => "application/vnd.dvb.notif-init+xml", "IANA vendor tree registration";
    APPLICATION_VND_DVB_PFR => "application/vnd.dvb.pfr", "IANA vendor tree registration";
    APPLICATION_VND_DVB_SERVICE => "application/vnd.dvb.service", "IANA vendor tree registration";
    APPLICATION_VND_DXR => "application/vnd.dxr", "IANA vendor tree registration";
    APPLICATION_VND_DYNAGEO => "application/vnd.dynageo", "IANA vendor tree registration";
    APPLICATION_VND_DZR => "application/vnd.dzr", "IANA vendor tree registration";
    APPLICATION_VND_EASYKARAOKE_CDGDOWNLOAD => "application/vnd.easykaraoke.cdgdownload", "IANA vendor tree registration";
    APPLICATION_VND_ECDIS_UPDATE => "application/vnd.ecdis-update", "IANA vendor tree registration";
    APPLICATION_VND_ECIP_RLP => "application/vnd.ecip.rlp", "IANA vendor tree registration";
    APPLICATION_VND_ECLIPSE_DITTO_JSON => "application/vnd.eclipse.ditto+json", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_CHART => "application/vnd.ecowin.chart", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_FILEREQUEST => "application/vnd.ecowin.filerequest", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_FILEUPDATE => "application/vnd.ecowin.fileupdate", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_SERIES => "application/vnd.ecowin.series", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_SERIESREQUEST => "application/vnd.ecowin.seriesrequest", "IANA vendor tree registration";
    APPLICATION_VND_ECOWIN_SERIESUPDATE => "application/vnd.ecowin.seriesupdate", "IANA vendor tree registration";
    APPLICATION_VND_EFI_IMG => "application/vnd.efi.img", "IANA vendor tree registration";
    APPLICATION_VND_EFI_ISO => "application/vnd.efi.iso", "IANA vendor tree registration";
    APPLICATION_VND_ELN_ZIP => "application/vnd.eln+zip", "IANA vendor tree registration";
    APPLICATION_VND_EMCLIENT_ACCESSREQUEST_XML => "application/vnd.emclient.accessrequest+xml", "IANA vendor tree registration";
    APPLICATION_VND_ENLIVEN => "application/vnd.enliven", "IANA vendor tree registration";
    APPLICATION_VND_ENPHASE_ENVOY => "application/vnd.enphase.envoy", "IANA vendor tree registration";
    APPLICATION_VND_EPRINTS_DATA_XML => "application/vnd.eprints.data+xml", "IANA vendor tree registration";
    APPLICATION_VND_EPSON_ESF => "application/vnd.epson.esf", "IANA vendor tree registration";
    APPLICATION_VND_EPSON_MSF => "application/vnd.epson.msf", "IANA vendor tree registration";
    APPLICATION_VND_EPSON_QUICKANIME => "application/vnd.epson.quickanime", "IANA vendor tree registration";
    APPLICATION_VND_EPSON_SALT => "application/vnd.epson.salt", "IANA vendor tree registration";
    APPLICATION_VND_EPSON_SSF => "application/vnd.epson.ssf", "IANA vendor tree registration";
    APPLICATION_VND_ERICSSON_QUICKCALL => "application/vnd.ericsson.quickcall", "IANA vendor tree registration";
    APPLICATION_VND_ESPASS_ESPASS_ZIP => "application/vnd.espass-espass+zip", "IANA vendor tree registration";
    APPLICATION_VND_ESZIGNO3_XML => "application/vnd.eszigno3+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_AOC_XML => "application/vnd.etsi.aoc+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_ASIC_E_ZIP => "application/vnd.etsi.asic-e+zip", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_ASIC_S_ZIP => "application/vnd.etsi.asic-s+zip", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_CUG_XML => "application/vnd.etsi.cug+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVCOMMAND_XML => "application/vnd.etsi.iptvcommand+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVDISCOVERY_XML => "application/vnd.etsi.iptvdiscovery+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVPROFILE_XML => "application/vnd.etsi.iptvprofile+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVSAD_BC_XML => "application/vnd.etsi.iptvsad-bc+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVSAD_COD_XML => "application/vnd.etsi.iptvsad-cod+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVSAD_NPVR_XML => "application/vnd.etsi.iptvsad-npvr+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVSERVICE_XML => "application/vnd.etsi.iptvservice+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVSYNC_XML => "application/vnd.etsi.iptvsync+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_IPTVUEPROFILE_XML => "application/vnd.etsi.iptvueprofile+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_MCID_XML => "application/vnd.etsi.mcid+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_MHEG5 => "application/vnd.etsi.mheg5", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_OVERLOAD_CONTROL_POLICY_DATASET_XML => "application/vnd.etsi.overload-control-policy-dataset+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_PSTN_XML => "application/vnd.etsi.pstn+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_SCI_XML => "application/vnd.etsi.sci+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_SIMSERVS_XML => "application/vnd.etsi.simservs+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_TIMESTAMP_TOKEN => "application/vnd.etsi.timestamp-token", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_TSL_XML => "application/vnd.etsi.tsl+xml", "IANA vendor tree registration";
    APPLICATION_VND_ETSI_TSL_DER => "application/vnd.etsi.tsl.der", "IANA vendor tree registration";
    APPLICATION_VND_EU_KASPARIAN_CAR_JSON => "application/vnd.eu.kasparian.car+json", "IANA vendor tree registration";
    APPLICATION_VND_EUDORA_DATA => "application/vnd.eudora.data", "IANA vendor tree registration";
    APPLICATION_VND_EVOLV_ECIG_PROFILE => "application/vnd.evolv.ecig.profile", "IANA vendor tree registration";
    APPLICATION_VND_EVOLV_ECIG_SETTINGS => "application/vnd.evolv.ecig.settings", "IANA vendor tree registration";
    APPLICATION_VND_EVOLV_ECIG_THEME => "application/vnd.evolv.ecig.theme", "IANA vendor tree registration";
    APPLICATION_VND_EXSTREAM_EMPOWER_ZIP => "application/vnd.exstream-empower+zip", "IANA vendor tree registration";
    APPLICATION_VND_EXSTREAM_PACKAGE => "application/vnd.exstream-package", "IANA vendor tree registration";
    APPLICATION_VND_EZPIX_ALBUM => "application/vnd.ezpix-album", "IANA vendor tree registration";
    APPLICATION_VND_EZPIX_PACKAGE => "application/vnd.ezpix-package", "IANA vendor tree registration";
    APPLICATION_VND_F_SECURE_MOBILE => "application/vnd.f-secure.mobile", "IANA vendor tree registration";
    APPLICATION_VND_FAMILYSEARCH_GEDCOM_ZIP => "application/vnd.familysearch.gedcom+zip", "IANA vendor tree registration";
    APPLICATION_VND_FASTCOPY_DISK_IMAGE => "application/vnd.fastcopy-disk-image", "IANA vendor tree registration";
    APPLICATION_VND_FDSN_MSEED => "application/vnd.fdsn.mseed", "IANA vendor tree registration";
    APPLICATION_VND_FDSN_SEED => "application/vnd.fdsn.seed", "IANA vendor tree registration";
    APPLICATION_VND_FFSNS => "application/vnd.ffsns", "IANA vendor tree registration";
    APPLICATION_VND_FICLAB_FLB_ZIP => "application/vnd.ficlab.flb+zip", "IANA vendor tree registration";
    APPLICATION_VND_FILMIT_ZFC => "application/vnd.filmit.zfc", "IANA vendor tree registration";
    APPLICATION_VND_FINTS => "application/vnd.fints", "IANA vendor tree registration";
    APPLICATION_VND_FIREMONKEYS_CLOUDCELL => "application/vnd.firemonkeys.cloudcell", "IANA vendor tree registration";
    APPLICATION_VND_FLOGRAPHIT => "application/vnd.FloGraphIt", "IANA vendor tree registration";
    APPLICATION_VND_FLUXTIME_CLIP => "application/vnd.fluxtime.clip", "IANA vendor tree registration";
    APPLICATION_VND_FONT_FONTFORGE_SFD => "application/vnd.font-fontforge-sfd", "IANA vendor tree registration";
    APPLICATION_VND_FRAMEMAKER => "application/vnd.framemaker", "IANA vendor tree registration";
    APPLICATION_VND_FSC_WEBLAUNCH => "application/vnd.fsc.weblaunch", "IANA vendor tree registration";
    APPLICATION_VND_FUJIFILM_FB_DOCUWORKS => "application/vnd.fujifilm.fb.docuworks", "IANA vendor tree registration";
    APPLICATION_VND_FUJIFILM_FB_DOCUWORKS_BINDER => "application/vnd.fujifilm.fb.docuworks.binder", "IANA vendor tree registration";
    APPLICATION_VND_FUJIFILM_FB_DOCUWORKS_CONTAINER => "application/vnd.fujifilm.fb.docuworks.container", "IANA vendor tree registration";
    APPLICATION_VND_FUJIFILM_FB_JFI_XML => "application/vnd.fujifilm.fb.jfi+xml", "IANA vendor tree registration";
    APPLICATION_VND_FUJITSU_OASYS => "application/vnd.fujitsu.oasys", "IANA vendor tree registration";
    APPLICATION_VND_FUJITSU_OASYS2 => "application/vnd.fujitsu.oasys2", "IANA vendor tree registration";
    APPLICATION_VND_FUJITSU_OASYS3 => "application/vnd.fujitsu.oasys3", "IANA vendor tree registration";
    APPLICATION_VND_FUJITSU_OASYSGP => "application/vnd.fujitsu.oasysgp", "IANA vendor tree registration";
    APPLICATION_VND_FUJITSU_OASYSPRS => "application/vnd.fujitsu.oasysprs", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_ART_EX => "application/vnd.fujixerox.ART-EX", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_ART4 => "application/vnd.fujixerox.ART4", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_DDD => "application/vnd.fujixerox.ddd", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_DOCUWORKS => "application/vnd.fujixerox.docuworks", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_DOCUWORKS_BINDER => "application/vnd.fujixerox.docuworks.binder", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_DOCUWORKS_CONTAINER => "application/vnd.fujixerox.docuworks.container", "IANA vendor tree registration";
    APPLICATION_VND_FUJIXEROX_HBPL => "application/vnd.fujixerox.HBPL", "IANA vendor tree registration";
    APPLICATION_VND_FUT_MISNET => "application/vnd.fut-misnet", "IANA vendor tree registration";
    APPLICATION_VND_FUTOIN_CBOR => "application/vnd.futoin+cbor", "IANA vendor tree registration";
    APPLICATION_VND_FUTOIN_JSON => "application/vnd.futoin+json", "IANA vendor tree registration";
    APPLICATION_VND_FUZZYSHEET => "application/vnd.fuzzysheet", "IANA vendor tree registration";
    APPLICATION_VND_GENOMATIX_TUXEDO => "application/vnd.genomatix.tuxedo", "IANA vendor tree registration";
    APPLICATION_VND_GENOZIP => "application/vnd.genozip", "IANA vendor tree registration";
    APPLICATION_VND_GENTICS_GRD_JSON => "application/vnd.gentics.grd+json", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_CATMETADATA_XML => "application/vnd.gentoo.catmetadata+xml", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_EBUILD => "application/vnd.gentoo.ebuild", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_ECLASS => "application/vnd.gentoo.eclass", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_GPKG => "application/vnd.gentoo.gpkg", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_MANIFEST => "application/vnd.gentoo.manifest", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_PKGMETADATA_XML => "application/vnd.gentoo.pkgmetadata+xml", "IANA vendor tree registration";
    APPLICATION_VND_GENTOO_XPAK => "application/vnd.gentoo.xpak", "IANA vendor tree registration";
    APPLICATION_VND_GEOGEBRA_FILE => "application/vnd.geogebra.file", "IANA vendor tree registration";
    APPLICATION_VND_GEOGEBRA_SLIDES => "application/vnd.geogebra.slides", "IANA vendor tree registration";
    APPLICATION_VND_GEOGEBRA_TOOL => "application/vnd.geogebra.tool", "IANA vendor tree registration";
    APPLICATION_VND_GEOMETRY_EXPLORER => "application/vnd.geometry-explorer", "IANA vendor tree registration";
    APPLICATION_VND_GEONEXT => "application/vnd.geonext", "IANA vendor tree registration";
    APPLICATION_VND_GEOPLAN => "application/vnd.geoplan", "IANA vendor tree registration";
    APPLICATION_VND_GEOSPACE => "application/vnd.geospace", "IANA vendor tree registration";
    APPLICATION_VND_GERBER => "application/vnd.gerber", "IANA vendor tree registration";
    APPLICATION_VND_GLOBALPLATFORM_CARD_CONTENT_MGT => "application/vnd.globalplatform.card-content-mgt", "IANA vendor tree registration";
    APPLICATION_VND_GLOBALPLATFORM_CARD_CONTENT_MGT_RESPONSE => "application/vnd.globalplatform.card-content-mgt-response", "IANA vendor tree registration";
    APPLICATION_VND_GNU_TALER_EXCHANGE_JSON => "application/vnd.gnu.taler.exchange+json", "IANA vendor tree registration";
    APPLICATION_VND_GNU_TALER_MERCHANT_JSON => "application/vnd.gnu.taler.merchant+json", "IANA vendor tree registration";
    APPLICATION_VND_GOOGLE_EARTH_KML_XML => "application/vnd.google-earth.kml+xml", "IANA vendor tree registration";
    APPLICATION_VND_GOOGLE_EARTH_KMZ => "application/vnd.google-earth.kmz", "IANA vendor tree registration";
    APPLICATION_VND_GOV_SK_E_FORM_XML => "application/vnd.gov.sk.e-form+xml", "IANA vendor tree registration";
    APPLICATION_VND_GOV_SK_E_FORM_ZIP => "application/vnd.gov.sk.e-form+zip", "IANA vendor tree registration";
    APPLICATION_VND_GOV_SK_XMLDATACONTAINER_XML => "application/vnd.gov.sk.xmldatacontainer+xml", "IANA vendor tree registration";
    APPLICATION_VND_GPXSEE_MAP_XML => "application/vnd.gpxsee.map+xml", "IANA vendor tree registration";
    APPLICATION_VND_GRAFEQ => "application/vnd.grafeq", "IANA vendor tree registration";
    APPLICATION_VND_GRIDMP => "application/vnd.gridmp", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_ACCOUNT => "application/vnd.groove-account", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_HELP => "application/vnd.groove-help", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_IDENTITY_MESSAGE => "application/vnd.groove-identity-message", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_INJECTOR => "application/vnd.groove-injector", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_TOOL_MESSAGE => "application/vnd.groove-tool-message", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_TOOL_TEMPLATE => "application/vnd.groove-tool-template", "IANA vendor tree registration";
    APPLICATION_VND_GROOVE_VCARD => "application/vnd.groove-vcard", "IANA vendor tree registration";
    APPLICATION_VND_HAL_JSON => "application/vnd.hal+json", "IANA vendor tree registration";
    APPLICATION_VND_HAL_XML => "application/vnd.hal+xml", "IANA vendor tree registration";
    APPLICATION_VND_HANDHELD_ENTERTAINMENT_XML => "application/vnd.HandHeld-Entertainment+xml", "IANA vendor tree registration";
    APPLICATION_VND_HBCI => "application/vnd.hbci", "IANA vendor tree registration";
    APPLICATION_VND_HC_JSON => "application/vnd.hc+json", "IANA vendor tree registration";
    APPLICATION_VND_HCL_BIREPORTS => "application/vnd.hcl-bireports", "IANA vendor tree registration";
    APPLICATION_VND_HDT => "application/vnd.hdt", "IANA vendor tree registration";
    APPLICATION_VND_HEROKU_JSON => "application/vnd.heroku+json", "IANA vendor tree registration";
    APPLICATION_VND_HHE_LESSON_PLAYER => "application/vnd.hhe.lesson-player", "IANA vendor tree registration";
    APPLICATION_VND_HP_HPGL => "application/vnd.hp-HPGL", "IANA vendor tree registration";
    APPLICATION_VND_HP_HPID => "application/vnd.hp-hpid", "IANA vendor tree registration";
    APPLICATION_VND_HP_HPS => "application/vnd.hp-hps", "IANA vendor tree registration";
    APPLICATION_VND_HP_JLYT => "application/vnd.hp-jlyt", "IANA vendor tree registration";
    APPLICATION_VND_HP_PCL => "application/vnd.hp-PCL", "IANA vendor tree registration";
    APPLICATION_VND_HP_PCLXL => "application/vnd.hp-PCLXL", "IANA vendor tree registration";
    APPLICATION_VND_HTTPHONE => "application/vnd.httphone", "IANA vendor tree registration";
    APPLICATION_VND_HYDROSTATIX_SOF_DATA => "application/vnd.hydrostatix.sof-data", "IANA vendor tree registration";
    APPLICATION_VND_HYPER_JSON => "application/vnd.hyper+json", "IANA vendor tree registration";
    APPLICATION_VND_HYPER_ITEM_JSON => "application/vnd.hyper-item+json", "IANA vendor tree registration";
    APPLICATION_VND_HYPERDRIVE_JSON => "application/vnd.hyperdrive+json", "IANA vendor tree registration";
    APPLICATION_VND_HZN_3D_CROSSWORD => "application/vnd.hzn-3d-crossword", "IANA vendor tree registration";
    APPLICATION_VND_IBM_ELECTRONIC_MEDIA => "application/vnd.ibm.electronic-media", "IANA vendor tree registration";
    APPLICATION_VND_IBM_MINIPAY => "application/vnd.ibm.MiniPay", "IANA vendor tree registration";
    APPLICATION_VND_IBM_RIGHTS_MANAGEMENT => "application/vnd.ibm.rights-management", "IANA vendor tree registration";
    APPLICATION_VND_IBM_SECURE_CONTAINER => "application/vnd.ibm.secure-container", "IANA vendor tree registration";
    APPLICATION_VND_ICCPROFILE => "application/vnd.iccprofile", "IANA vendor tree registration";
    APPLICATION_VND_IEEE_1905 => "application/vnd.ieee.1905", "IANA vendor tree registration";
    APPLICATION_VND_IGLOADER => "application/vnd.igloader", "IANA vendor tree registration";
    APPLICATION_VND_IMAGEMETER_FOLDER_ZIP => "application/vnd.imagemeter.folder+zip", "IANA vendor tree registration";
    APPLICATION_VND_IMAGEMETER_IMAGE_ZIP => "application/vnd.imagemeter.image+zip", "IANA vendor tree registration";
    APPLICATION_VND_IMMERVISION_IVP => "application/vnd.immervision-ivp", "IANA vendor tree registration";
    APPLICATION_VND_IMMERVISION_IVU => "application/vnd.immervision-ivu", "IANA vendor tree registration";
    APPLICATION_VND_IMS_IMSCCV1P1 => "application/vnd.ims.imsccv1p1", "IANA vendor tree registration";
    APPLICATION_VND_IMS_IMSCCV1P2 => "application/vnd.ims.imsccv1p2", "IANA vendor tree registration";
    APPLICATION_VND_IMS_IMSCCV1P3 => "application/vnd.ims.imsccv1p3", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LIS_V2_RESULT_JSON => "application/vnd.ims.lis.v2.result+json", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LTI_V2_TOOLCONSUMERPROFILE_JSON => "application/vnd.ims.lti.v2.toolconsumerprofile+json", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LTI_V2_TOOLPROXY_JSON => "application/vnd.ims.lti.v2.toolproxy+json", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LTI_V2_TOOLPROXY_ID_JSON => "application/vnd.ims.lti.v2.toolproxy.id+json", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LTI_V2_TOOLSETTINGS_JSON => "application/vnd.ims.lti.v2.toolsettings+json", "IANA vendor tree registration";
    APPLICATION_VND_IMS_LTI_V2_TOOLSETTINGS_SIMPLE_JSON => "application/vnd.ims.lti.v2.toolsettings.simple+json", "IANA vendor tree registration";
    APPLICATION_VND_INFORMEDCONTROL_RMS_XML => "application/vnd.informedcontrol.rms+xml", "IANA vendor tree registration";
    APPLICATION_VND_INFOTECH_PROJECT => "application/vnd.infotech.project", "IANA vendor tree registration";
    APPLICATION_VND_INFOTECH_PROJECT_XML => "application/vnd.infotech.project+xml", "IANA vendor tree registration";
    APPLICATION_VND_INNOPATH_WAMP_NOTIFICATION => "application/vnd.innopath.wamp.notification", "IANA vendor tree registration";
    APPLICATION_VND_INSORS_IGM => "application/vnd.insors.igm", "IANA vendor tree registration";
    APPLICATION_VND_INTERCON_FORMNET => "application/vnd.intercon.formnet", "IANA vendor tree registration";
    APPLICATION_VND_INTERGEO => "application/vnd.intergeo", "IANA vendor tree registration";
    APPLICATION_VND_INTERTRUST_DIGIBOX => "application/vnd.intertrust.digibox", "IANA vendor tree registration";
    APPLICATION_VND_INTERTRUST_NNCP => "application/vnd.intertrust.nncp", "IANA vendor tree registration";
    APPLICATION_VND_INTU_QBO => "application/vnd.intu.qbo", "IANA vendor tree registration";
    APPLICATION_VND_INTU_QFX => "application/vnd.intu.qfx", "IANA vendor tree registration";
    APPLICATION_VND_IPLD_CAR => "application/vnd.ipld.car", "IANA vendor tree registration";
    APPLICATION_VND_IPLD_DAG_CBOR => "application/vnd.ipld.dag-cbor", "IANA vendor tree registration";
    APPLICATION_VND_IPLD_DAG_JSON => "application/vnd.ipld.dag-json", "IANA vendor tree registration";
    APPLICATION_VND_IPLD_RAW => "application/vnd.ipld.raw", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_CATALOGITEM_XML => "application/vnd.iptc.g2.catalogitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_CONCEPTITEM_XML => "application/vnd.iptc.g2.conceptitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_KNOWLEDGEITEM_XML => "application/vnd.iptc.g2.knowledgeitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_NEWSITEM_XML => "application/vnd.iptc.g2.newsitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_NEWSMESSAGE_XML => "application/vnd.iptc.g2.newsmessage+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_PACKAGEITEM_XML => "application/vnd.iptc.g2.packageitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPTC_G2_PLANNINGITEM_XML => "application/vnd.iptc.g2.planningitem+xml", "IANA vendor tree registration";
    APPLICATION_VND_IPUNPLUGGED_RCPROFILE => "application/vnd.ipunplugged.rcprofile", "IANA vendor tree registration";
    APPLICATION_VND_IREPOSITORY_PACKAGE_XML => "application/vnd.irepository.package+xml", "IANA vendor tree registration";
    APPLICATION_VND_IS_XPR => "application/vnd.is-xpr", "IANA vendor tree registration";
    APPLICATION_VND_ISAC_FCS => "application/vnd.isac.fcs", "IANA vendor tree registration";
    APPLICATION_VND_ISO11783_10_ZIP => "application/vnd.iso11783-10+zip", "IANA vendor tree registration";
    APPLICATION_VND_JAM => "application/vnd.jam", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_DIRECTORY_SERVICE => "application/vnd.japannet-directory-service", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_JPNSTORE_WAKEUP => "application/vnd.japannet-jpnstore-wakeup", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_PAYMENT_WAKEUP => "application/vnd.japannet-payment-wakeup", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_REGISTRATION => "application/vnd.japannet-registration", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_REGISTRATION_WAKEUP => "application/vnd.japannet-registration-wakeup", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_SETSTORE_WAKEUP => "application/vnd.japannet-setstore-wakeup", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_VERIFICATION => "application/vnd.japannet-verification", "IANA vendor tree registration";
    APPLICATION_VND_JAPANNET_VERIFICATION_WAKEUP => "application/vnd.japannet-verification-wakeup", "IANA vendor tree registration";
    APPLICATION_VND_JCP_JAVAME_MIDLET_RMS => "application/vnd.jcp.javame.midlet-rms", "IANA vendor tree registration";
    APPLICATION_VND_JISP => "application/vnd.jisp", "IANA vendor tree registration";
    APPLICATION_VND_JOOST_JODA_ARCHIVE => "application/vnd.joost.joda-archive", "IANA vendor tree registration";
    APPLICATION_VND_JSK_ISDN_NGN => "application/vnd.jsk.isdn-ngn", "IANA vendor tree registration";
    APPLICATION_VND_KAHOOTZ => "application/vnd.kahootz", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KARBON => "application/vnd.kde.karbon", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KCHART => "application/vnd.kde.kchart", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KFORMULA => "application/vnd.kde.kformula", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KIVIO => "application/vnd.kde.kivio", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KONTOUR => "application/vnd.kde.kontour", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KPRESENTER => "application/vnd.kde.kpresenter", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KSPREAD => "application/vnd.kde.kspread", "IANA vendor tree registration";
    APPLICATION_VND_KDE_KWORD => "application/vnd.kde.kword", "IANA vendor tree registration";
    APPLICATION_VND_KENAMEAAPP => "application/vnd.kenameaapp", "IANA vendor tree registration";
    APPLICATION_VND_KIDSPIRATION => "application/vnd.kidspiration", "IANA vendor tree registration";
    APPLICATION_VND_KINAR => "application/vnd.Kinar", "IANA vendor tree registration";
    APPLICATION_VND_KOAN => "application/vnd.koan", "IANA vendor tree registration";
    APPLICATION_VND_KODAK_DESCRIPTOR => "application/vnd.kodak-descriptor", "IANA vendor tree registration";
    APPLICATION_VND_LAS => "application/vnd.las", "IANA vendor tree registration";
    APPLICATION_VND_LAS_LAS_JSON => "application/vnd.las.las+json", "IANA vendor tree registration";
    APPLICATION_VND_LAS_LAS_XML => "application/vnd.las.las+xml", "IANA vendor tree registration";
    APPLICATION_VND_LASZIP => "application/vnd.laszip", "IANA vendor tree registration";
    APPLICATION_VND_LEAP_JSON => "application/vnd.leap+json", "IANA vendor tree registration";
    APPLICATION_VND_LIBERTY_REQUEST_XML => "application/vnd.liberty-request+xml", "IANA vendor tree registration";
    APPLICATION_VND_LLAMAGRAPHICS_LIFE_BALANCE_DESKTOP => "application/vnd.llamagraphics.life-balance.desktop", "IANA vendor tree registration";
    APPLICATION_VND_LLAMAGRAPHICS_LIFE_BALANCE_EXCHANGE_XML => "application/vnd.llamagraphics.life-balance.exchange+xml", "IANA vendor tree registration";
    APPLICATION_VND_LOGIPIPE_CIRCUIT_ZIP => "application/vnd.logipipe.circuit+zip", "IANA vendor tree registration";
    APPLICATION_VND_LOOM => "application/vnd.loom", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_1_2_3 => "application/vnd.lotus-1-2-3", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_APPROACH => "application/vnd.lotus-approach", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_FREELANCE => "application/vnd.lotus-freelance", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_NOTES => "application/vnd.lotus-notes", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_ORGANIZER => "application/vnd.lotus-organizer", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_SCREENCAM => "application/vnd.lotus-screencam", "IANA vendor tree registration";
    APPLICATION_VND_LOTUS_WORDPRO => "application/vnd.lotus-wordpro", "IANA vendor tree registration";
    APPLICATION_VND_MACPORTS_PORTPKG => "application/vnd.macports.portpkg", "IANA vendor tree registration";
    APPLICATION_VND_MAPBOX_VECTOR_TILE => "application/vnd.mapbox-vector-tile", "IANA vendor tree registration";
    APPLICATION_VND_MARLIN_DRM_ACTIONTOKEN_XML => "application/vnd.marlin.drm.actiontoken+xml", "IANA vendor tree registration";
    APPLICATION_VND_MARLIN_DRM_CONFTOKEN_XML => "application/vnd.marlin.drm.conftoken+xml", "IANA vendor tree registration";
    APPLICATION_VND_MARLIN_DRM_LICENSE_XML => "application/vnd.marlin.drm.license+xml", "IANA vendor tree registration";
    APPLICATION_VND_MARLIN_DRM_MDCF => "application/vnd.marlin.drm.mdcf", "IANA vendor tree registration";
    APPLICATION_VND_MASON_JSON => "application/vnd.mason+json", "IANA vendor tree registration";
    APPLICATION_VND_MAXAR_ARCHIVE_3TZ_ZIP => "application/vnd.maxar.archive.3tz+zip", "IANA vendor tree registration";
    APPLICATION_VND_MAXMIND_MAXMIND_DB => "application/vnd.maxmind.maxmind-db", "IANA vendor tree registration";
    APPLICATION_VND_MCD => "application/vnd.mcd", "IANA vendor tree registration";
    APPLICATION_VND_MEDCALCDATA => "application/vnd.medcalcdata", "IANA vendor tree registration";
    APPLICATION_VND_MEDIASTATION_CDKEY => "application/vnd.mediastation.cdkey", "IANA vendor tree registration";
    APPLICATION_VND_MEDICALHOLODECK_RECORDXR => "application/vnd.medicalholodeck.recordxr", "IANA vendor tree registration";
    APPLICATION_VND_MERIDIAN_SLINGSHOT => "application/vnd.meridian-slingshot", "IANA vendor tree registration";
    APPLICATION_VND_MFER => "application/vnd.MFER", "IANA vendor tree registration";
    APPLICATION_VND_MFMP => "application/vnd.mfmp", "IANA vendor tree registration";
    APPLICATION_VND_MICRO_JSON => "application/vnd.micro+json", "IANA vendor tree registration";
    APPLICATION_VND_MICROGRAFX_FLO => "application/vnd.micrografx.flo", "IANA vendor tree registration";
    APPLICATION_VND_MICROGRAFX_IGX => "application/vnd.micrografx.igx", "IANA vendor tree registration";
    APPLICATION_VND_MICROSOFT_PORTABLE_EXECUTABLE => "application/vnd.microsoft.portable-executable", "IANA vendor tree registration";
    APPLICATION_VND_MICROSOFT_WINDOWS_THUMBNAIL_CACHE => "application/vnd.microsoft.windows.thumbnail-cache", "IANA vendor tree registration";
    APPLICATION_VND_MIELE_JSON => "application/vnd.miele+json", "IANA vendor tree registration";
    APPLICATION_VND_MIF => "application/vnd.mif", "IANA vendor tree registration";
    APPLICATION_VND_MINISOFT_HP3000_SAVE => "application/vnd.minisoft-hp3000-save", "IANA vendor tree registration";
    APPLICATION_VND_MITSUBISHI_MISTY_GUARD_TRUSTWEB => "application/vnd.mitsubishi.misty-guard.trustweb", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_DAF => "application/vnd.Mobius.DAF", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_DIS => "application/vnd.Mobius.DIS", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_MBK => "application/vnd.Mobius.MBK", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_MQY => "application/vnd.Mobius.MQY", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_MSL => "application/vnd.Mobius.MSL", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_PLC => "application/vnd.Mobius.PLC", "IANA vendor tree registration";
    APPLICATION_VND_MOBIUS_TXF => "application/vnd.Mobius.TXF", "IANA vendor tree registration";
    APPLICATION_VND_MOPHUN_APPLICATION => "application/vnd.mophun.application", "IANA vendor tree registration";
    APPLICATION_VND_MOPHUN_CERTIFICATE => "application/vnd.mophun.certificate", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE => "application/vnd.motorola.flexsuite", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_ADSI => "application/vnd.motorola.flexsuite.adsi", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_FIS => "application/vnd.motorola.flexsuite.fis", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_GOTAP => "application/vnd.motorola.flexsuite.gotap", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_KMR => "application/vnd.motorola.flexsuite.kmr", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_TTC => "application/vnd.motorola.flexsuite.ttc", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_FLEXSUITE_WEM => "application/vnd.motorola.flexsuite.wem", "IANA vendor tree registration";
    APPLICATION_VND_MOTOROLA_IPRM => "application/vnd.motorola.iprm", "IANA vendor tree registration";
    APPLICATION_VND_MOZILLA_XUL_XML => "application/vnd.mozilla.xul+xml", "IANA vendor tree registration";
    APPLICATION_VND_MS_3MFDOCUMENT => "application/vnd.ms-3mfdocument", "IANA vendor tree registration";
    APPLICATION_VND_MS_ARTGALRY => "application/vnd.ms-artgalry", "IANA vendor tree registration";
    APPLICATION_VND_MS_ASF => "application/vnd.ms-asf", "IANA vendor tree registration";
    APPLICATION_VND_MS_CAB_COMPRESSED => "application/vnd.ms-cab-compressed", "IANA vendor tree registration";
    APPLICATION_VND_MS_EXCEL => "application/vnd.ms-excel", "IANA vendor tree registration";
    APPLICATION_VND_MS_EXCEL_ADDIN_MACROENABLED_12 => "application/vnd.ms-excel.addin.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_EXCEL_SHEET_BINARY_MACROENABLED_12 => "application/vnd.ms-excel.sheet.binary.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_EXCEL_SHEET_MACROENABLED_12 => "application/vnd.ms-excel.sheet.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_EXCEL_TEMPLATE_MACROENABLED_12 => "application/vnd.ms-excel.template.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_FONTOBJECT => "application/vnd.ms-fontobject", "IANA vendor tree registration";
    APPLICATION_VND_MS_HTMLHELP => "application/vnd.ms-htmlhelp", "IANA vendor tree registration";
    APPLICATION_VND_MS_IMS => "application/vnd.ms-ims", "IANA vendor tree registration";
    APPLICATION_VND_MS_LRM => "application/vnd.ms-lrm", "IANA vendor tree registration";
    APPLICATION_VND_MS_OFFICE_ACTIVEX_XML => "application/vnd.ms-office.activeX+xml", "IANA vendor tree registration";
    APPLICATION_VND_MS_OFFICETHEME => "application/vnd.ms-officetheme", "IANA vendor tree registration";
    APPLICATION_VND_MS_PKI_SECCAT => "application/vnd.ms-pki.seccat", "IANA vendor tree registration";
    APPLICATION_VND_MS_PLAYREADY_INITIATOR_XML => "application/vnd.ms-playready.initiator+xml", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT => "application/vnd.ms-powerpoint", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT_ADDIN_MACROENABLED_12 => "application/vnd.ms-powerpoint.addin.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT_PRESENTATION_MACROENABLED_12 => "application/vnd.ms-powerpoint.presentation.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT_SLIDE_MACROENABLED_12 => "application/vnd.ms-powerpoint.slide.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT_SLIDESHOW_MACROENABLED_12 => "application/vnd.ms-powerpoint.slideshow.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_POWERPOINT_TEMPLATE_MACROENABLED_12 => "application/vnd.ms-powerpoint.template.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_PRINTDEVICECAPABILITIES_XML => "application/vnd.ms-PrintDeviceCapabilities+xml", "IANA vendor tree registration";
    APPLICATION_VND_MS_PRINTSCHEMATICKET_XML => "application/vnd.ms-PrintSchemaTicket+xml", "IANA vendor tree registration";
    APPLICATION_VND_MS_PROJECT => "application/vnd.ms-project", "IANA vendor tree registration";
    APPLICATION_VND_MS_TNEF => "application/vnd.ms-tnef", "IANA vendor tree registration";
    APPLICATION_VND_MS_WINDOWS_DEVICEPAIRING => "application/vnd.ms-windows.devicepairing", "IANA vendor tree registration";
    APPLICATION_VND_MS_WINDOWS_NWPRINTING_OOB => "application/vnd.ms-windows.nwprinting.oob", "IANA vendor tree registration";
    APPLICATION_VND_MS_WINDOWS_PRINTERPAIRING => "application/vnd.ms-windows.printerpairing", "IANA vendor tree registration";
    APPLICATION_VND_MS_WINDOWS_WSD_OOB => "application/vnd.ms-windows.wsd.oob", "IANA vendor tree registration";
    APPLICATION_VND_MS_WMDRM_LIC_CHLG_REQ => "application/vnd.ms-wmdrm.lic-chlg-req", "IANA vendor tree registration";
    APPLICATION_VND_MS_WMDRM_LIC_RESP => "application/vnd.ms-wmdrm.lic-resp", "IANA vendor tree registration";
    APPLICATION_VND_MS_WMDRM_METER_CHLG_REQ => "application/vnd.ms-wmdrm.meter-chlg-req", "IANA vendor tree registration";
    APPLICATION_VND_MS_WMDRM_METER_RESP => "application/vnd.ms-wmdrm.meter-resp", "IANA vendor tree registration";
    APPLICATION_VND_MS_WORD_DOCUMENT_MACROENABLED_12 => "application/vnd.ms-word.document.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_WORD_TEMPLATE_MACROENABLED_12 => "application/vnd.ms-word.template.macroEnabled.12", "IANA vendor tree registration";
    APPLICATION_VND_MS_WORKS => "application/vnd.ms-works", "IANA vendor tree registration";
    APPLICATION_VND_MS_WPL => "application/vnd.ms-wpl", "IANA vendor tree registration";
    APPLICATION_VND_MS_XPSDOCUMENT => "application/vnd.ms-xpsdocument", "IANA vendor tree registration";
    APPLICATION_VND_MSA_DISK_IMAGE => "application/vnd.msa-disk-image", "IANA vendor tree registration";
    APPLICATION_VND_MSEQ => "application/vnd.mseq", "IANA vendor tree registration";
    APPLICATION_VND_MSGPACK => "application/vnd.msgpack", "IANA vendor tree registration";
    APPLICATION_VND_MSIGN => "application/vnd.msign", "IANA vendor tree registration";
    APPLICATION_VND_MULTIAD_CREATOR => "application/vnd.multiad.creator", "IANA vendor tree registration";
    APPLICATION_VND_MULTIAD_CREATOR_CIF => "application/vnd.multiad.creator.cif", "IANA vendor tree registration";
    APPLICATION_VND_MUSIC_NIFF => "application/vnd.music-niff", "IANA vendor tree registration";
    APPLICATION_VND_MUSICIAN => "application/vnd.musician", "IANA vendor tree registration";
    APPLICATION_VND_MUVEE_STYLE => "application/vnd.muvee.style", "IANA vendor tree registration";
    APPLICATION_VND_MYNFC => "application/vnd.mynfc", "IANA vendor tree registration";
    APPLICATION_VND_NACAMAR_YBRID_JSON => "application/vnd.nacamar.ybrid+json", "IANA vendor tree registration";
    APPLICATION_VND_NCD_CONTROL => "application/vnd.ncd.control", "IANA vendor tree registration";
    APPLICATION_VND_NCD_REFERENCE => "application/vnd.ncd.reference", "IANA vendor tree registration";
    APPLICATION_VND_NEARST_INV_JSON => "application/vnd.nearst.inv+json", "IANA vendor tree registration";
    APPLICATION_VND_NEBUMIND_LINE => "application/vnd.nebumind.line", "IANA vendor tree registration";
    APPLICATION_VND_NERVANA => "application/vnd.nervana", "IANA vendor tree registration";
    APPLICATION_VND_NETFPX => "application/vnd.netfpx", "IANA vendor tree registration";
    APPLICATION_VND_NEUROLANGUAGE_NLU => "application/vnd.neurolanguage.nlu", "IANA vendor tree registration";
    APPLICATION_VND_NIMN => "application/vnd.nimn", "IANA vendor tree registration";
    APPLICATION_VND_NINTENDO_NITRO_ROM => "application/vnd.nintendo.nitro.rom", "IANA vendor tree registration";
    APPLICATION_VND_NINTENDO_SNES_ROM => "application/vnd.nintendo.snes.rom", "IANA vendor tree registration";
    APPLICATION_VND_NITF => "application/vnd.nitf", "IANA vendor tree registration";
    APPLICATION_VND_NOBLENET_DIRECTORY => "application/vnd.noblenet-directory", "IANA vendor tree registration";
    APPLICATION_VND_NOBLENET_SEALER => "application/vnd.noblenet-sealer", "IANA vendor tree registration";
    APPLICATION_VND_NOBLENET_WEB => "application/vnd.noblenet-web", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_CATALOGS => "application/vnd.nokia.catalogs", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_CONML_WBXML => "application/vnd.nokia.conml+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_CONML_XML => "application/vnd.nokia.conml+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_IPTV_CONFIG_XML => "application/vnd.nokia.iptv.config+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_ISDS_RADIO_PRESETS => "application/vnd.nokia.iSDS-radio-presets", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_LANDMARK_WBXML => "application/vnd.nokia.landmark+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_LANDMARK_XML => "application/vnd.nokia.landmark+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_LANDMARKCOLLECTION_XML => "application/vnd.nokia.landmarkcollection+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_N_GAGE_AC_XML => "application/vnd.nokia.n-gage.ac+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_N_GAGE_DATA => "application/vnd.nokia.n-gage.data", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_NCD => "application/vnd.nokia.ncd", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_PCD_WBXML => "application/vnd.nokia.pcd+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_PCD_XML => "application/vnd.nokia.pcd+xml", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_RADIO_PRESET => "application/vnd.nokia.radio-preset", "IANA vendor tree registration";
    APPLICATION_VND_NOKIA_RADIO_PRESETS => "application/vnd.nokia.radio-presets", "IANA vendor tree registration";
    APPLICATION_VND_NOVADIGM_EDM => "application/vnd.novadigm.EDM", "IANA vendor tree registration";
    APPLICATION_VND_NOVADIGM_EDX => "application/vnd.novadigm.EDX", "IANA vendor tree registration";
    APPLICATION_VND_NOVADIGM_EXT => "application/vnd.novadigm.EXT", "IANA vendor tree registration";
    APPLICATION_VND_NTT_LOCAL_CONTENT_SHARE => "application/vnd.ntt-local.content-share", "IANA vendor tree registration";
    APPLICATION_VND_NTT_LOCAL_FILE_TRANSFER => "application/vnd.ntt-local.file-transfer", "IANA vendor tree registration";
    APPLICATION_VND_NTT_LOCAL_OGW_REMOTE_ACCESS => "application/vnd.ntt-local.ogw_remote-access", "IANA vendor tree registration";
    APPLICATION_VND_NTT_LOCAL_SIP_TA_REMOTE => "application/vnd.ntt-local.sip-ta_remote", "IANA vendor tree registration";
    APPLICATION_VND_NTT_LOCAL_SIP_TA_TCP_STREAM => "application/vnd.ntt-local.sip-ta_tcp_stream", "IANA vendor tree registration";
    APPLICATION_VND_OAI_OPENAPI_JSON => "application/vnd.oai.openapi+json", "OpenAPI Specification 3.1";
    APPLICATION_VND_OASIS_OPENDOCUMENT_BASE => "application/vnd.oasis.opendocument.base", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_CHART => "application/vnd.oasis.opendocument.chart", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_CHART_TEMPLATE => "application/vnd.oasis.opendocument.chart-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_FORMULA => "application/vnd.oasis.opendocument.formula", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_FORMULA_TEMPLATE => "application/vnd.oasis.opendocument.formula-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_GRAPHICS => "application/vnd.oasis.opendocument.graphics", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_GRAPHICS_TEMPLATE => "application/vnd.oasis.opendocument.graphics-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_IMAGE => "application/vnd.oasis.opendocument.image", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_IMAGE_TEMPLATE => "application/vnd.oasis.opendocument.image-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_PRESENTATION => "application/vnd.oasis.opendocument.presentation", "OASIS OpenDocument 1.3, Part 3";
    APPLICATION_VND_OASIS_OPENDOCUMENT_PRESENTATION_TEMPLATE => "application/vnd.oasis.opendocument.presentation-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_SPREADSHEET => "application/vnd.oasis.opendocument.spreadsheet", "OASIS OpenDocument 1.3, Part 3";
    APPLICATION_VND_OASIS_OPENDOCUMENT_SPREADSHEET_TEMPLATE => "application/vnd.oasis.opendocument.spreadsheet-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT => "application/vnd.oasis.opendocument.text", "OASIS OpenDocument 1.3, Part 3";
    APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT_MASTER => "application/vnd.oasis.opendocument.text-master", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT_TEMPLATE => "application/vnd.oasis.opendocument.text-template", "IANA vendor tree registration";
    APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT_WEB => "application/vnd.oasis.opendocument.text-web", "IANA vendor tree registration";
    APPLICATION_VND_OBN => "application/vnd.obn", "IANA vendor tree registration";
    APPLICATION_VND_OCF_CBOR => "application/vnd.ocf+cbor", "IANA vendor tree registration";
    APPLICATION_VND_OCI_IMAGE_MANIFEST_V1_JSON => "application/vnd.oci.image.manifest.v1+json", "IANA vendor tree registration";
    APPLICATION_VND_OFTN_L10N_JSON => "application/vnd.oftn.l10n+json", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_CONTENTACCESSDOWNLOAD_XML => "application/vnd.oipf.contentaccessdownload+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_CONTENTACCESSSTREAMING_XML => "application/vnd.oipf.contentaccessstreaming+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_CSPG_HEXBINARY => "application/vnd.oipf.cspg-hexbinary", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_DAE_SVG_XML => "application/vnd.oipf.dae.svg+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_DAE_XHTML_XML => "application/vnd.oipf.dae.xhtml+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_MIPPVCONTROLMESSAGE_XML => "application/vnd.oipf.mippvcontrolmessage+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_PAE_GEM => "application/vnd.oipf.pae.gem", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_SPDISCOVERY_XML => "application/vnd.oipf.spdiscovery+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_SPDLIST_XML => "application/vnd.oipf.spdlist+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_UEPROFILE_XML => "application/vnd.oipf.ueprofile+xml", "IANA vendor tree registration";
    APPLICATION_VND_OIPF_USERPROFILE_XML => "application/vnd.oipf.userprofile+xml", "IANA vendor tree registration";
    APPLICATION_VND_OLPC_SUGAR => "application/vnd.olpc-sugar", "IANA vendor tree registration";
    APPLICATION_VND_OMA_SCWS_CONFIG => "application/vnd.oma-scws-config", "IANA vendor tree registration";
    APPLICATION_VND_OMA_SCWS_HTTP_REQUEST => "application/vnd.oma-scws-http-request", "IANA vendor tree registration";
    APPLICATION_VND_OMA_SCWS_HTTP_RESPONSE => "application/vnd.oma-scws-http-response", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_ASSOCIATED_PROCEDURE_PARAMETER_XML => "application/vnd.oma.bcast.associated-procedure-parameter+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_DRM_TRIGGER_XML => "application/vnd.oma.bcast.drm-trigger+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_IMD_XML => "application/vnd.oma.bcast.imd+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_LTKM => "application/vnd.oma.bcast.ltkm", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_NOTIFICATION_XML => "application/vnd.oma.bcast.notification+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_PROVISIONINGTRIGGER => "application/vnd.oma.bcast.provisioningtrigger", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SGBOOT => "application/vnd.oma.bcast.sgboot", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SGDD_XML => "application/vnd.oma.bcast.sgdd+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SGDU => "application/vnd.oma.bcast.sgdu", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SIMPLE_SYMBOL_CONTAINER => "application/vnd.oma.bcast.simple-symbol-container", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SMARTCARD_TRIGGER_XML => "application/vnd.oma.bcast.smartcard-trigger+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_SPROV_XML => "application/vnd.oma.bcast.sprov+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_BCAST_STKM => "application/vnd.oma.bcast.stkm", "IANA vendor tree registration";
    APPLICATION_VND_OMA_CAB_ADDRESS_BOOK_XML => "application/vnd.oma.cab-address-book+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_CAB_FEATURE_HANDLER_XML => "application/vnd.oma.cab-feature-handler+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_CAB_PCC_XML => "application/vnd.oma.cab-pcc+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_CAB_SUBS_INVITE_XML => "application/vnd.oma.cab-subs-invite+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_CAB_USER_PREFS_XML => "application/vnd.oma.cab-user-prefs+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_DCD => "application/vnd.oma.dcd", "IANA vendor tree registration";
    APPLICATION_VND_OMA_DCDC => "application/vnd.oma.dcdc", "IANA vendor tree registration";
    APPLICATION_VND_OMA_DD2_XML => "application/vnd.oma.dd2+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_DRM_RISD_XML => "application/vnd.oma.drm.risd+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_GROUP_USAGE_LIST_XML => "application/vnd.oma.group-usage-list+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_LWM2M_CBOR => "application/vnd.oma.lwm2m+cbor", "IANA vendor tree registration";
    APPLICATION_VND_OMA_LWM2M_JSON => "application/vnd.oma.lwm2m+json", "IANA vendor tree registration";
    APPLICATION_VND_OMA_LWM2M_TLV => "application/vnd.oma.lwm2m+tlv", "IANA vendor tree registration";
    APPLICATION_VND_OMA_PAL_XML => "application/vnd.oma.pal+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_POC_DETAILED_PROGRESS_REPORT_XML => "application/vnd.oma.poc.detailed-progress-report+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_POC_FINAL_REPORT_XML => "application/vnd.oma.poc.final-report+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_POC_GROUPS_XML => "application/vnd.oma.poc.groups+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_POC_INVOCATION_DESCRIPTOR_XML => "application/vnd.oma.poc.invocation-descriptor+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_POC_OPTIMIZED_PROGRESS_REPORT_XML => "application/vnd.oma.poc.optimized-progress-report+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_PUSH => "application/vnd.oma.push", "IANA vendor tree registration";
    APPLICATION_VND_OMA_SCIDM_MESSAGES_XML => "application/vnd.oma.scidm.messages+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMA_XCAP_DIRECTORY_XML => "application/vnd.oma.xcap-directory+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMADS_EMAIL_XML => "application/vnd.omads-email+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMADS_FILE_XML => "application/vnd.omads-file+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMADS_FOLDER_XML => "application/vnd.omads-folder+xml", "IANA vendor tree registration";
    APPLICATION_VND_OMALOC_SUPL_INIT => "application/vnd.omaloc-supl-init", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGER => "application/vnd.onepager", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGERTAMP => "application/vnd.onepagertamp", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGERTAMX => "application/vnd.onepagertamx", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGERTAT => "application/vnd.onepagertat", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGERTATP => "application/vnd.onepagertatp", "IANA vendor tree registration";
    APPLICATION_VND_ONEPAGERTATX => "application/vnd.onepagertatx", "IANA vendor tree registration";
    APPLICATION_VND_ONVIF_METADATA => "application/vnd.onvif.metadata", "IANA vendor tree registration";
    APPLICATION_VND_OPENBLOX_GAME_XML => "application/vnd.openblox.game+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENBLOX_GAME_BINARY => "application/vnd.openblox.game-binary", "IANA vendor tree registration";
    APPLICATION_VND_OPENEYE_OEB => "application/vnd.openeye.oeb", "IANA vendor tree registration";
    APPLICATION_VND_OPENOFFICEORG_EXTENSION => "application/vnd.openofficeorg.extension", "IANA vendor tree registration";
    APPLICATION_VND_OPENSTREETMAP_DATA_XML => "application/vnd.openstreetmap.data+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENTIMESTAMPS_OTS => "application/vnd.opentimestamps.ots", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_CUSTOM_PROPERTIES_XML => "application/vnd.openxmlformats-officedocument.custom-properties+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_CUSTOMXMLPROPERTIES_XML => "application/vnd.openxmlformats-officedocument.customXmlProperties+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWING_XML => "application/vnd.openxmlformats-officedocument.drawing+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_CHART_XML => "application/vnd.openxmlformats-officedocument.drawingml.chart+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_CHARTSHAPES_XML => "application/vnd.openxmlformats-officedocument.drawingml.chartshapes+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_DIAGRAMCOLORS_XML => "application/vnd.openxmlformats-officedocument.drawingml.diagramColors+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_DIAGRAMDATA_XML => "application/vnd.openxmlformats-officedocument.drawingml.diagramData+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_DIAGRAMLAYOUT_XML => "application/vnd.openxmlformats-officedocument.drawingml.diagramLayout+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_DRAWINGML_DIAGRAMSTYLE_XML => "application/vnd.openxmlformats-officedocument.drawingml.diagramStyle+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_EXTENDED_PROPERTIES_XML => "application/vnd.openxmlformats-officedocument.extended-properties+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_COMMENTAUTHORS_XML => "application/vnd.openxmlformats-officedocument.presentationml.commentAuthors+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_COMMENTS_XML => "application/vnd.openxmlformats-officedocument.presentationml.comments+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_HANDOUTMASTER_XML => "application/vnd.openxmlformats-officedocument.presentationml.handoutMaster+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_NOTESMASTER_XML => "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_NOTESSLIDE_XML => "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_PRESENTATION => "application/vnd.openxmlformats-officedocument.presentationml.presentation", "ECMA-376 Office Open XML";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_PRESENTATION_MAIN_XML => "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_PRESPROPS_XML => "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDE => "application/vnd.openxmlformats-officedocument.presentationml.slide", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDE_XML => "application/vnd.openxmlformats-officedocument.presentationml.slide+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDELAYOUT_XML => "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDEMASTER_XML => "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDESHOW => "application/vnd.openxmlformats-officedocument.presentationml.slideshow", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDESHOW_MAIN_XML => "application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_SLIDEUPDATEINFO_XML => "application/vnd.openxmlformats-officedocument.presentationml.slideUpdateInfo+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_TABLESTYLES_XML => "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_TAGS_XML => "application/vnd.openxmlformats-officedocument.presentationml.tags+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_TEMPLATE => "application/vnd.openxmlformats-officedocument.presentationml.template", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_TEMPLATE_MAIN_XML => "application/vnd.openxmlformats-officedocument.presentationml.template.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_VIEWPROPS_XML => "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_CALCCHAIN_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.calcChain+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_CHARTSHEET_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.chartsheet+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_COMMENTS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.comments+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_CONNECTIONS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.connections+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_DIALOGSHEET_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.dialogsheet+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_EXTERNALLINK_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.externalLink+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_PIVOTCACHEDEFINITION_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.pivotCacheDefinition+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_PIVOTCACHERECORDS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.pivotCacheRecords+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_PIVOTTABLE_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.pivotTable+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_QUERYTABLE_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.queryTable+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_REVISIONHEADERS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.revisionHeaders+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_REVISIONLOG_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.revisionLog+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHAREDSTRINGS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHEET => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "ECMA-376 Office Open XML";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHEET_MAIN_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHEETMETADATA_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheetMetadata+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_STYLES_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_TABLE_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_TABLESINGLECELLS_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.tableSingleCells+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_TEMPLATE => "application/vnd.openxmlformats-officedocument.spreadsheetml.template", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_TEMPLATE_MAIN_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_USERNAMES_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.userNames+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_VOLATILEDEPENDENCIES_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.volatileDependencies+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_WORKSHEET_XML => "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_THEME_XML => "application/vnd.openxmlformats-officedocument.theme+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_THEMEOVERRIDE_XML => "application/vnd.openxmlformats-officedocument.themeOverride+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_VMLDRAWING => "application/vnd.openxmlformats-officedocument.vmlDrawing", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_COMMENTS_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_DOCUMENT => "application/vnd.openxmlformats-officedocument.wordprocessingml.document", "ECMA-376 Office Open XML";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_DOCUMENT_GLOSSARY_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.document.glossary+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_DOCUMENT_MAIN_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_ENDNOTES_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_FONTTABLE_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.fontTable+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_FOOTER_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_FOOTNOTES_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_NUMBERING_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_SETTINGS_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_STYLES_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_TEMPLATE => "application/vnd.openxmlformats-officedocument.wordprocessingml.template", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_TEMPLATE_MAIN_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_WEBSETTINGS_XML => "application/vnd.openxmlformats-officedocument.wordprocessingml.webSettings+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_PACKAGE_CORE_PROPERTIES_XML => "application/vnd.openxmlformats-package.core-properties+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_PACKAGE_DIGITAL_SIGNATURE_XMLSIGNATURE_XML => "application/vnd.openxmlformats-package.digital-signature-xmlsignature+xml", "IANA vendor tree registration";
    APPLICATION_VND_OPENXMLFORMATS_PACKAGE_RELATIONSHIPS_XML => "application/vnd.openxmlformats-package.relationships+xml", "IANA vendor tree registration";
    APPLICATION_VND_ORACLE_RESOURCE_JSON => "application/vnd.oracle.resource+json", "IANA vendor tree registration";
    APPLICATION_VND_ORANGE_INDATA => "application/vnd.orange.indata", "IANA vendor tree registration";
    APPLICATION_VND_OSA_NETDEPLOY => "application/vnd.osa.netdeploy", "IANA vendor tree registration";
    APPLICATION_VND_OSGEO_MAPGUIDE_PACKAGE => "application/vnd.osgeo.mapguide.package", "IANA vendor tree registration";
    APPLICATION_VND_OSGI_BUNDLE => "application/vnd.osgi.bundle", "IANA vendor tree registration";
    APPLICATION_VND_OSGI_DP => "application/vnd.osgi.dp", "IANA vendor tree registration";
    APPLICATION_VND_OSGI_SUBSYSTEM => "application/vnd.osgi.subsystem", "IANA vendor tree registration";
    APPLICATION_VND_OTPS_CT_KIP_XML => "application/vnd.otps.ct-kip+xml", "IANA vendor tree registration";
    APPLICATION_VND_OXLI_COUNTGRAPH => "application/vnd.oxli.countgraph", "IANA vendor tree registration";
    APPLICATION_VND_PAGERDUTY_JSON => "application/vnd.pagerduty+json", "IANA vendor tree registration";
    APPLICATION_VND_PALM => "application/vnd.palm", "IANA vendor tree registration";
    APPLICATION_VND_PANOPLY => "application/vnd.panoply", "IANA vendor tree registration";
    APPLICATION_VND_PAOS_XML => "application/vnd.paos.xml", "IANA vendor tree registration";
    APPLICATION_VND_PATENTDIVE => "application/vnd.patentdive", "IANA vendor tree registration";
    APPLICATION_VND_PATIENTECOMMSDOC => "application/vnd.patientecommsdoc", "IANA vendor tree registration";
    APPLICATION_VND_PAWAAFILE => "application/vnd.pawaafile", "IANA vendor tree registration";
    APPLICATION_VND_PCOS => "application/vnd.pcos", "IANA vendor tree registration";
    APPLICATION_VND_PG_FORMAT => "application/vnd.pg.format", "IANA vendor tree registration";
    APPLICATION_VND_PG_OSASLI => "application/vnd.pg.osasli", "IANA vendor tree registration";
    APPLICATION_VND_PIACCESS_APPLICATION_LICENCE => "application/vnd.piaccess.application-licence", "IANA vendor tree registration";
    APPLICATION_VND_PICSEL => "application/vnd.picsel", "IANA vendor tree registration";
    APPLICATION_VND_PMI_WIDGET => "application/vnd.pmi.widget", "IANA vendor tree registration";
    APPLICATION_VND_POC_GROUP_ADVERTISEMENT_XML => "application/vnd.poc.group-advertisement+xml", "IANA vendor tree registration";
    APPLICATION_VND_POCKETLEARN => "application/vnd.pocketlearn", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER6 => "application/vnd.powerbuilder6", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER6_S => "application/vnd.powerbuilder6-s", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER7 => "application/vnd.powerbuilder7", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER7_S => "application/vnd.powerbuilder7-s", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER75 => "application/vnd.powerbuilder75", "IANA vendor tree registration";
    APPLICATION_VND_POWERBUILDER75_S => "application/vnd.powerbuilder75-s", "IANA vendor tree registration";
    APPLICATION_VND_PREMINET => "application/vnd.preminet", "IANA vendor tree registration";
    APPLICATION_VND_PREVIEWSYSTEMS_BOX => "application/vnd.previewsystems.box", "IANA vendor tree registration";
    APPLICATION_VND_PROTEUS_MAGAZINE => "application/vnd.proteus.magazine", "IANA vendor tree registration";
    APPLICATION_VND_PSFS => "application/vnd.psfs", "IANA vendor tree registration";
    APPLICATION_VND_PUBLISHARE_DELTA_TREE => "application/vnd.publishare-delta-tree", "IANA vendor tree registration";
    APPLICATION_VND_PVI_PTID1 => "application/vnd.pvi.ptid1", "IANA vendor tree registration";
    APPLICATION_VND_PWG_MULTIPLEXED => "application/vnd.pwg-multiplexed", "IANA vendor tree registration";
    APPLICATION_VND_PWG_XHTML_PRINT_XML => "application/vnd.pwg-xhtml-print+xml", "IANA vendor tree registration";
    APPLICATION_VND_QUALCOMM_BREW_APP_RES => "application/vnd.qualcomm.brew-app-res", "IANA vendor tree registration";
    APPLICATION_VND_QUARANTAINENET => "application/vnd.quarantainenet", "IANA vendor tree registration";
    APPLICATION_VND_QUARK_QUARKXPRESS => "application/vnd.Quark.QuarkXPress", "IANA vendor tree registration";
    APPLICATION_VND_QUOBJECT_QUOXDOCUMENT => "application/vnd.quobject-quoxdocument", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MOML_XML => "application/vnd.radisys.moml+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_XML => "application/vnd.radisys.msml+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_AUDIT_XML => "application/vnd.radisys.msml-audit+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_AUDIT_CONF_XML => "application/vnd.radisys.msml-audit-conf+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_AUDIT_CONN_XML => "application/vnd.radisys.msml-audit-conn+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_AUDIT_DIALOG_XML => "application/vnd.radisys.msml-audit-dialog+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_AUDIT_STREAM_XML => "application/vnd.radisys.msml-audit-stream+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_CONF_XML => "application/vnd.radisys.msml-conf+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_XML => "application/vnd.radisys.msml-dialog+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_BASE_XML => "application/vnd.radisys.msml-dialog-base+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_FAX_DETECT_XML => "application/vnd.radisys.msml-dialog-fax-detect+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_FAX_SENDRECV_XML => "application/vnd.radisys.msml-dialog-fax-sendrecv+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_GROUP_XML => "application/vnd.radisys.msml-dialog-group+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_SPEECH_XML => "application/vnd.radisys.msml-dialog-speech+xml", "IANA vendor tree registration";
    APPLICATION_VND_RADISYS_MSML_DIALOG_TRANSFORM_XML => "application/vnd.radisys.msml-dialog-transform+xml", "IANA vendor tree registration";
    APPLICATION_VND_RAINSTOR_DATA => "application/vnd.rainstor.data", "IANA vendor tree registration";
    APPLICATION_VND_RAPID => "application/vnd.rapid", "IANA vendor tree registration";
    APPLICATION_VND_RAR => "application/vnd.rar", "IANA vendor tree registration";
    APPLICATION_VND_REALVNC_BED => "application/vnd.realvnc.bed", "IANA vendor tree registration";
    APPLICATION_VND_RECORDARE_MUSICXML => "application/vnd.recordare.musicxml", "IANA vendor tree registration";
    APPLICATION_VND_RECORDARE_MUSICXML_XML => "application/vnd.recordare.musicxml+xml", "IANA vendor tree registration";
    APPLICATION_VND_RENLEARN_RLPRINT => "application/vnd.RenLearn.rlprint", "IANA vendor tree registration";
    APPLICATION_VND_RESILIENT_LOGIC => "application/vnd.resilient.logic", "IANA vendor tree registration";
    APPLICATION_VND_RESTFUL_JSON => "application/vnd.restful+json", "IANA vendor tree registration";
    APPLICATION_VND_RIG_CRYPTONOTE => "application/vnd.rig.cryptonote", "IANA vendor tree registration";
    APPLICATION_VND_RIM_COD => "application/vnd.rim.cod", "IANA vendor tree registration";
    APPLICATION_VND_ROUTE66_LINK66_XML => "application/vnd.route66.link66+xml", "IANA vendor tree registration";
    APPLICATION_VND_RS_274X => "application/vnd.rs-274x", "IANA vendor tree registration";
    APPLICATION_VND_RUCKUS_DOWNLOAD => "application/vnd.ruckus.download", "IANA vendor tree registration";
    APPLICATION_VND_S3SMS => "application/vnd.s3sms", "IANA vendor tree registration";
    APPLICATION_VND_SAILINGTRACKER_TRACK => "application/vnd.sailingtracker.track", "IANA vendor tree registration";
    APPLICATION_VND_SAR => "application/vnd.sar", "IANA vendor tree registration";
    APPLICATION_VND_SBM_CID => "application/vnd.sbm.cid", "IANA vendor tree registration";
    APPLICATION_VND_SBM_MID2 => "application/vnd.sbm.mid2", "IANA vendor tree registration";
    APPLICATION_VND_SCRIBUS => "application/vnd.scribus", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_3DF => "application/vnd.sealed.3df", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_CSF => "application/vnd.sealed.csf", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_DOC => "application/vnd.sealed.doc", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_EML => "application/vnd.sealed.eml", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_MHT => "application/vnd.sealed.mht", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_NET => "application/vnd.sealed.net", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_PPT => "application/vnd.sealed.ppt", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_TIFF => "application/vnd.sealed.tiff", "IANA vendor tree registration";
    APPLICATION_VND_SEALED_XLS => "application/vnd.sealed.xls", "IANA vendor tree registration";
    APPLICATION_VND_SEALEDMEDIA_SOFTSEAL_HTML => "application/vnd.sealedmedia.softseal.html", "IANA vendor tree registration";
    APPLICATION_VND_SEALEDMEDIA_SOFTSEAL_PDF => "application/vnd.sealedmedia.softseal.pdf", "IANA vendor tree registration";
    APPLICATION_VND_SEEMAIL => "application/vnd.seemail", "IANA vendor tree registration";
    APPLICATION_VND_SEIS_JSON => "application/vnd.seis+json", "IANA vendor tree registration";
    APPLICATION_VND_SEMA => "application/vnd.sema", "IANA vendor tree registration";
    APPLICATION_VND_SEMD => "application/vnd.semd", "IANA vendor tree registration";
    APPLICATION_VND_SEMF => "application/vnd.semf", "IANA vendor tree registration";
    APPLICATION_VND_SHADE_SAVE_FILE => "application/vnd.shade-save-file", "IANA vendor tree registration";
    APPLICATION_VND_SHANA_INFORMED_FORMDATA => "application/vnd.shana.informed.formdata", "IANA vendor tree registration";
    APPLICATION_VND_SHANA_INFORMED_FORMTEMPLATE => "application/vnd.shana.informed.formtemplate", "IANA vendor tree registration";
    APPLICATION_VND_SHANA_INFORMED_INTERCHANGE => "application/vnd.shana.informed.interchange", "IANA vendor tree registration";
    APPLICATION_VND_SHANA_INFORMED_PACKAGE => "application/vnd.shana.informed.package", "IANA vendor tree registration";
    APPLICATION_VND_SHOOTPROOF_JSON => "application/vnd.shootproof+json", "IANA vendor tree registration";
    APPLICATION_VND_SHOPKICK_JSON => "application/vnd.shopkick+json", "IANA vendor tree registration";
    APPLICATION_VND_SHP => "application/vnd.shp", "IANA vendor tree registration";
    APPLICATION_VND_SHX => "application/vnd.shx", "IANA vendor tree registration";
    APPLICATION_VND_SIGROK_SESSION => "application/vnd.sigrok.session", "IANA vendor tree registration";
    APPLICATION_VND_SIMTECH_MINDMAPPER => "application/vnd.SimTech-MindMapper", "IANA vendor tree registration";
    APPLICATION_VND_SIREN_JSON => "application/vnd.siren+json", "IANA vendor tree registration";
    APPLICATION_VND_SMAF => "application/vnd.smaf", "IANA vendor tree registration";
    APPLICATION_VND_SMART_NOTEBOOK => "application/vnd.smart.notebook", "IANA vendor tree registration";
    APPLICATION_VND_SMART_TEACHER => "application/vnd.smart.teacher", "IANA vendor tree registration";
    APPLICATION_VND_SNESDEV_PAGE_TABLE => "application/vnd.snesdev-page-table", "IANA vendor tree registration";
    APPLICATION_VND_SOFTWARE602_FILLER_FORM_XML => "application/vnd.software602.filler.form+xml", "IANA vendor tree registration";
    APPLICATION_VND_SOFTWARE602_FILLER_FORM_XML_ZIP => "application/vnd.software602.filler.form-xml-zip", "IANA vendor tree registration";
    APPLICATION_VND_SOLENT_SDKM_XML => "application/vnd.solent.sdkm+xml", "IANA vendor tree registration";
    APPLICATION_VND_SPOTFIRE_DXP => "application/vnd.spotfire.dxp", "IANA vendor tree registration";
    APPLICATION_VND_SPOTFIRE_SFS => "application/vnd.spotfire.sfs", "IANA vendor tree registration";
    APPLICATION_VND_SQLITE3 => "application/vnd.sqlite3", "IANA vendor tree registration";
    APPLICATION_VND_SSS_COD => "application/vnd.sss-cod", "IANA vendor tree registration";
    APPLICATION_VND_SSS_DTF => "application/vnd.sss-dtf", "IANA vendor tree registration";
    APPLICATION_VND_SSS_NTF => "application/vnd.sss-ntf", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_CALC => "application/vnd.stardivision.calc", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_CHART => "application/vnd.stardivision.chart", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_DRAW => "application/vnd.stardivision.draw", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_IMPRESS => "application/vnd.stardivision.impress", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_MATH => "application/vnd.stardivision.math", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_WRITER => "application/vnd.stardivision.writer", "IANA vendor tree registration";
    APPLICATION_VND_STARDIVISION_WRITER_GLOBAL => "application/vnd.stardivision.writer-global", "IANA vendor tree registration";
    APPLICATION_VND_STEPMANIA_PACKAGE => "application/vnd.stepmania.package", "IANA vendor tree registration";
    APPLICATION_VND_STEPMANIA_STEPCHART => "application/vnd.stepmania.stepchart", "IANA vendor tree registration";
    APPLICATION_VND_STREET_STREAM => "application/vnd.street-stream", "IANA vendor tree registration";
    APPLICATION_VND_SUN_WADL_XML => "application/vnd.sun.wadl+xml", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_CALC => "application/vnd.sun.xml.calc", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_CALC_TEMPLATE => "application/vnd.sun.xml.calc.template", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_DRAW => "application/vnd.sun.xml.draw", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_DRAW_TEMPLATE => "application/vnd.sun.xml.draw.template", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_IMPRESS => "application/vnd.sun.xml.impress", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_IMPRESS_TEMPLATE => "application/vnd.sun.xml.impress.template", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_MATH => "application/vnd.sun.xml.math", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_WRITER => "application/vnd.sun.xml.writer", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_WRITER_GLOBAL => "application/vnd.sun.xml.writer.global", "IANA vendor tree registration";
    APPLICATION_VND_SUN_XML_WRITER_TEMPLATE => "application/vnd.sun.xml.writer.template", "IANA vendor tree registration";
    APPLICATION_VND_SUS_CALENDAR => "application/vnd.sus-calendar", "IANA vendor tree registration";
    APPLICATION_VND_SVD => "application/vnd.svd", "IANA vendor tree registration";
    APPLICATION_VND_SWIFTVIEW_ICS => "application/vnd.swiftview-ics", "IANA vendor tree registration";
    APPLICATION_VND_SYBYL_MOL2 => "application/vnd.sybyl.mol2", "IANA vendor tree registration";
    APPLICATION_VND_SYCLE_XML => "application/vnd.sycle+xml", "IANA vendor tree registration";
    APPLICATION_VND_SYFT_JSON => "application/vnd.syft+json", "IANA vendor tree registration";
    APPLICATION_VND_SYMBIAN_INSTALL => "application/vnd.symbian.install", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_XML => "application/vnd.syncml+xml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DM_WBXML => "application/vnd.syncml.dm+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DM_XML => "application/vnd.syncml.dm+xml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DM_NOTIFICATION => "application/vnd.syncml.dm.notification", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DMDDF_WBXML => "application/vnd.syncml.dmddf+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DMDDF_XML => "application/vnd.syncml.dmddf+xml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DMTNDS_WBXML => "application/vnd.syncml.dmtnds+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DMTNDS_XML => "application/vnd.syncml.dmtnds+xml", "IANA vendor tree registration";
    APPLICATION_VND_SYNCML_DS_NOTIFICATION => "application/vnd.syncml.ds.notification", "IANA vendor tree registration";
    APPLICATION_VND_TABLESCHEMA_JSON => "application/vnd.tableschema+json", "IANA vendor tree registration";
    APPLICATION_VND_TAO_INTENT_MODULE_ARCHIVE => "application/vnd.tao.intent-module-archive", "IANA vendor tree registration";
    APPLICATION_VND_TCPDUMP_PCAP => "application/vnd.tcpdump.pcap", "IANA vendor tree registration";
    APPLICATION_VND_THEQVD => "application/vnd.theqvd", "IANA vendor tree registration";
    APPLICATION_VND_THINK_CELL_PPTTC_JSON => "application/vnd.think-cell.ppttc+json", "IANA vendor tree registration";
    APPLICATION_VND_TMD_MEDIAFLEX_API_XML => "application/vnd.tmd.mediaflex.api+xml", "IANA vendor tree registration";
    APPLICATION_VND_TML => "application/vnd.tml", "IANA vendor tree registration";
    APPLICATION_VND_TMOBILE_LIVETV => "application/vnd.tmobile-livetv", "IANA vendor tree registration";
    APPLICATION_VND_TRI_ONESOURCE => "application/vnd.tri.onesource", "IANA vendor tree registration";
    APPLICATION_VND_TRID_TPT => "application/vnd.trid.tpt", "IANA vendor tree registration";
    APPLICATION_VND_TRISCAPE_MXS => "application/vnd.triscape.mxs", "IANA vendor tree registration";
    APPLICATION_VND_TRUEAPP => "application/vnd.trueapp", "IANA vendor tree registration";
    APPLICATION_VND_TRUEDOC => "application/vnd.truedoc", "IANA vendor tree registration";
    APPLICATION_VND_UBISOFT_WEBPLAYER => "application/vnd.ubisoft.webplayer", "IANA vendor tree registration";
    APPLICATION_VND_UFDL => "application/vnd.ufdl", "IANA vendor tree registration";
    APPLICATION_VND_UIQ_THEME => "application/vnd.uiq.theme", "IANA vendor tree registration";
    APPLICATION_VND_UMAJIN => "application/vnd.umajin", "IANA vendor tree registration";
    APPLICATION_VND_UNITY => "application/vnd.unity", "IANA vendor tree registration";
    APPLICATION_VND_UOML_XML => "application/vnd.uoml+xml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_ALERT => "application/vnd.uplanet.alert", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_ALERT_WBXML => "application/vnd.uplanet.alert-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_BEARER_CHOICE => "application/vnd.uplanet.bearer-choice", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_BEARER_CHOICE_WBXML => "application/vnd.uplanet.bearer-choice-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_CACHEOP => "application/vnd.uplanet.cacheop", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_CACHEOP_WBXML => "application/vnd.uplanet.cacheop-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_CHANNEL => "application/vnd.uplanet.channel", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_CHANNEL_WBXML => "application/vnd.uplanet.channel-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_LIST => "application/vnd.uplanet.list", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_LIST_WBXML => "application/vnd.uplanet.list-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_LISTCMD => "application/vnd.uplanet.listcmd", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_LISTCMD_WBXML => "application/vnd.uplanet.listcmd-wbxml", "IANA vendor tree registration";
    APPLICATION_VND_UPLANET_SIGNAL => "application/vnd.uplanet.signal", "IANA vendor tree registration";
    APPLICATION_VND_URI_MAP => "application/vnd.uri-map", "IANA vendor tree registration";
    APPLICATION_VND_VALVE_SOURCE_MATERIAL => "application/vnd.valve.source.material", "IANA vendor tree registration";
    APPLICATION_VND_VCX => "application/vnd.vcx", "IANA vendor tree registration";
    APPLICATION_VND_VD_STUDY => "application/vnd.vd-study", "IANA vendor tree registration";
    APPLICATION_VND_VECTORWORKS => "application/vnd.vectorworks", "IANA vendor tree registration";
    APPLICATION_VND_VEL_JSON => "application/vnd.vel+json", "IANA vendor tree registration";
    APPLICATION_VND_VERIMATRIX_VCAS => "application/vnd.verimatrix.vcas", "IANA vendor tree registration";
    APPLICATION_VND_VERITONE_AION_JSON => "application/vnd.veritone.aion+json", "IANA vendor tree registration";
    APPLICATION_VND_VERYANT_THIN => "application/vnd.veryant.thin", "IANA vendor tree registration";
    APPLICATION_VND_VES_ENCRYPTED => "application/vnd.ves.encrypted", "IANA vendor tree registration";
    APPLICATION_VND_VIDSOFT_VIDCONFERENCE => "application/vnd.vidsoft.vidconference", "IANA vendor tree registration";
    APPLICATION_VND_VISIO => "application/vnd.visio", "IANA vendor tree registration";
    APPLICATION_VND_VISIONARY => "application/vnd.visionary", "IANA vendor tree registration";
    APPLICATION_VND_VIVIDENCE_SCRIPTFILE => "application/vnd.vividence.scriptfile", "IANA vendor tree registration";
    APPLICATION_VND_VSF => "application/vnd.vsf", "IANA vendor tree registration";
    APPLICATION_VND_WAP_SIC => "application/vnd.wap.sic", "IANA vendor tree registration";
    APPLICATION_VND_WAP_SLC => "application/vnd.wap.slc", "IANA vendor tree registration";
    APPLICATION_VND_WAP_WBXML => "application/vnd.wap.wbxml", "IANA vendor tree registration";
    APPLICATION_VND_WAP_WMLC => "application/vnd.wap.wmlc", "IANA vendor tree registration";
    APPLICATION_VND_WAP_WMLSCRIPTC => "application/vnd.wap.wmlscriptc", "IANA vendor tree registration";
    APPLICATION_VND_WASMFLOW_WAFL => "application/vnd.wasmflow.wafl", "IANA vendor tree registration";
    APPLICATION_VND_WEBTURBO => "application/vnd.webturbo", "IANA vendor tree registration";
    APPLICATION_VND_WFA_DPP => "application/vnd.wfa.dpp", "IANA vendor tree registration";
    APPLICATION_VND_WFA_P2P => "application/vnd.wfa.p2p", "IANA vendor tree registration";
    APPLICATION_VND_WFA_WSC => "application/vnd.wfa.wsc", "IANA vendor tree registration";
    APPLICATION_VND_WINDOWS_DEVICEPAIRING => "application/vnd.windows.devicepairing", "IANA vendor tree registration";
    APPLICATION_VND_WMC => "application/vnd.wmc", "IANA vendor tree registration";
    APPLICATION_VND_WMF_BOOTSTRAP => "application/vnd.wmf.bootstrap", "IANA vendor tree registration";
    APPLICATION_VND_WOLFRAM_MATHEMATICA => "application/vnd.wolfram.mathematica", "IANA vendor tree registration";
    APPLICATION_VND_WOLFRAM_MATHEMATICA_PACKAGE => "application/vnd.wolfram.mathematica.package", "IANA vendor tree registration";
    APPLICATION_VND_WOLFRAM_PLAYER => "application/vnd.wolfram.player", "IANA vendor tree registration";
    APPLICATION_VND_WORDLIFT => "application/vnd.wordlift", "IANA vendor tree registration";
    APPLICATION_VND_WORDPERFECT => "application/vnd.wordperfect", "IANA vendor tree registration";
    APPLICATION_VND_WQD => "application/vnd.wqd", "IANA vendor tree registration";
    APPLICATION_VND_WRQ_HP3000_LABELLED => "application/vnd.wrq-hp3000-labelled", "IANA vendor tree registration";
    APPLICATION_VND_WT_STF => "application/vnd.wt.stf", "IANA vendor tree registration";
    APPLICATION_VND_WV_CSP_WBXML => "application/vnd.wv.csp+wbxml", "IANA vendor tree registration";
    APPLICATION_VND_WV_CSP_XML => "application/vnd.wv.csp+xml", "IANA vendor tree registration";
    APPLICATION_VND_WV_SSP_XML => "application/vnd.wv.ssp+xml", "IANA vendor tree registration";
    APPLICATION_VND_XACML_JSON => "application/vnd.xacml+json", "IANA vendor tree registration";
    APPLICATION_VND_XARA => "application/vnd.xara", "IANA vendor tree registration";
    APPLICATION_VND_XFDL => "application/vnd.xfdl", "IANA vendor tree registration";
    APPLICATION_VND_XFDL_WEBFORM => "application/vnd.xfdl.webform", "IANA vendor tree registration";
    APPLICATION_VND_XMI_XML => "application/vnd.xmi+xml", "IANA vendor tree registration";
    APPLICATION_VND_XMPIE_CPKG => "application/vnd.xmpie.cpkg", "IANA vendor tree registration";
    APPLICATION_VND_XMPIE_DPKG => "application/vnd.xmpie.dpkg", "IANA vendor tree registration";
    APPLICATION_VND_XMPIE_PLAN => "application/vnd.xmpie.plan", "IANA vendor tree registration";
    APPLICATION_VND_XMPIE_PPKG => "application/vnd.xmpie.ppkg", "IANA vendor tree registration";
    APPLICATION_VND_XMPIE_XLIM => "application/vnd.xmpie.xlim", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_HV_DIC => "application/vnd.yamaha.hv-dic", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_HV_SCRIPT => "application/vnd.yamaha.hv-script", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_HV_VOICE => "application/vnd.yamaha.hv-voice", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_OPENSCOREFORMAT => "application/vnd.yamaha.openscoreformat", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_OPENSCOREFORMAT_OSFPVG_XML => "application/vnd.yamaha.openscoreformat.osfpvg+xml", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_REMOTE_SETUP => "application/vnd.yamaha.remote-setup", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_SMAF_AUDIO => "application/vnd.yamaha.smaf-audio", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_SMAF_PHRASE => "application/vnd.yamaha.smaf-phrase", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_THROUGH_NGN => "application/vnd.yamaha.through-ngn", "IANA vendor tree registration";
    APPLICATION_VND_YAMAHA_TUNNEL_UDPENCAP => "application/vnd.yamaha.tunnel-udpencap", "IANA vendor tree registration";
    APPLICATION_VND_YAOWEME => "application/vnd.yaoweme", "IANA vendor tree registration";
    APPLICATION_VND_YELLOWRIVER_CUSTOM_MENU => "application/vnd.yellowriver-custom-menu", "IANA vendor tree registration";
    APPLICATION_VND_ZUL => "application/vnd.zul", "IANA vendor tree registration";
    APPLICATION_VND_ZZAZZ_DECK_XML => "application/vnd.zzazz.deck+xml", "IANA vendor tree registration";
    APPLICATION_VOICEXML_XML => "application/voicexml+xml", "RFC 4267";
    APPLICATION_VOUCHER_CMS_JSON => "application/voucher-cms+json", "IANA media type registration";
    APPLICATION_VQ_RTCPXR => "application/vq-rtcpxr", "IANA media type registration";
    APPLICATION_WASM => "application/wasm", "W3C WebAssembly Core Specification, Appendix A.4";
    APPLICATION_WATCHERINFO_XML => "application/watcherinfo+xml", "IANA media type registration";
    APPLICATION_WEBPUSH_OPTIONS_JSON => "application/webpush-options+json", "IANA media type registration";
    APPLICATION_WHOISPP_QUERY => "application/whoispp-query", "IANA media type registration";
    APPLICATION_WHOISPP_RESPONSE => "application/whoispp-response", "IANA media type registration";
    APPLICATION_WIDGET => "application/widget", "IANA media type registration";
    APPLICATION_WITA => "application/wita", "IANA media type registration";
    APPLICATION_WORDPERFECT5_1 => "application/wordperfect5.1", "IANA media type registration";
    APPLICATION_WSDL_XML => "application/wsdl+xml", "IANA media type registration";
    APPLICATION_WSPOLICY_XML => "application/wspolicy+xml", "IANA media type registration";
    APPLICATION_X_TAR => "application/x-tar", "de facto, POSIX ustar archives";
    APPLICATION_X_WWW_FORM_URLENCODED => "application/x-www-form-urlencoded", "WHATWG URL Living Standard, Section 5";
    APPLICATION_X400_BP => "application/x400-bp", "IANA media type registration";
    APPLICATION_XACML_XML => "application/xacml+xml", "IANA media type registration";
    APPLICATION_XCAP_ATT_XML => "application/xcap-att+xml", "IANA media type registration";
    APPLICATION_XCAP_CAPS_XML => "application/xcap-caps+xml", "IANA media type registration";
    APPLICATION_XCAP_DIFF_XML => "application/xcap-diff+xml", "IANA media type registration";
    APPLICATION_XCAP_EL_XML => "application/xcap-el+xml", "IANA media type registration";
    APPLICATION_XCAP_ERROR_XML => "application/xcap-error+xml", "IANA media type registration";
    APPLICATION_XCAP_NS_XML => "application/xcap-ns+xml", "IANA media type registration";
    APPLICATION_XCON_CONFERENCE_INFO_XML => "application/xcon-conference-info+xml", "IANA media type registration";
    APPLICATION_XCON_CONFERENCE_INFO_DIFF_XML => "application/xcon-conference-info-diff+xml", "IANA media type registration";
    APPLICATION_XENC_XML => "application/xenc+xml", "IANA media type registration";
    APPLICATION_XFDF => "application/xfdf", "IANA media type registration";
    APPLICATION_XHTML_XML => "application/xhtml+xml", "RFC 3236";
    APPLICATION_XLIFF_XML => "application/xliff+xml", "IANA media type registration";
    APPLICATION_XML => "application/xml", "RFC 7303, Section 9.1";
    APPLICATION_XML_DTD => "application/xml-dtd", "RFC 7303, Section 9.5";
    APPLICATION_XML_EXTERNAL_PARSED_ENTITY => "application/xml-external-parsed-entity", "RFC 7303, Section 9.3";
    APPLICATION_XML_PATCH_XML => "application/xml-patch+xml", "IANA media type registration";
    APPLICATION_XMPP_XML => "application/xmpp+xml", "IANA media type registration";
    APPLICATION_XOP_XML => "application/xop+xml", "W3C XML-binary Optimized Packaging, Appendix B";
    APPLICATION_XSLT_XML => "application/xslt+xml", "W3C XSL Transformations 3.0, Appendix E";
    APPLICATION_XSPF_XML => "application/xspf+xml", "IANA media type registration";
    APPLICATION_XV_XML => "application/xv+xml", "IANA media type registration";
    APPLICATION_YAML => "application/yaml", "RFC 9512, Section 2.1";
    APPLICATION_YANG => "application/yang", "IANA media type registration";
    APPLICATION_YANG_DATA_CBOR => "application/yang-data+cbor", "IANA media type registration";
    APPLICATION_YANG_DATA_JSON => "application/yang-data+json", "IANA media type registration";
    APPLICATION_YANG_DATA_XML => "application/yang-data+xml", "IANA media type registration";
    APPLICATION_YANG_PATCH_JSON => "application/yang-patch+json", "IANA media type registration";
    APPLICATION_YANG_PATCH_XML => "application/yang-patch+xml", "IANA media type registration";
    APPLICATION_YIN_XML => "application/yin+xml", "IANA media type registration";
    APPLICATION_ZIP => "application/zip", "IANA media type registration";
    APPLICATION_ZLIB => "application/zlib", "RFC 6713, Section 3";
    APPLICATION_ZSTD => "application/zstd", "RFC 8878, Section 7.1";
    AUDIO_1D_INTERLEAVED_PARITYFEC => "audio/1d-interleaved-parityfec", "IANA media type registration";
    AUDIO_32KADPCM => "audio/32kadpcm", "IANA media type registration";
    AUDIO_3GPP => "audio/3gpp", "RFC 3839, Section 4";
    AUDIO_3GPP2 => "audio/3gpp2", "IANA media type registration";
    AUDIO_AAC => "audio/aac", "IANA media type registration";
    AUDIO_AC3 => "audio/ac3", "RFC 4184, Section 6";
    AUDIO_AMR => "audio/amr", "RFC 4867, Section 8.1";
    AUDIO_AMR_WB => "audio/AMR-WB", "IANA media type registration";
    AUDIO_AMR_WB_PLUS => "audio/amr-wb+", "IANA media type registration";
    AUDIO_ANNODEX => "audio/annodex", "IANA media type registration";
    AUDIO_APTX => "audio/aptx", "IANA media type registration";
    AUDIO_ASC => "audio/asc", "IANA media type registration";
    AUDIO_ATRAC_ADVANCED_LOSSLESS => "audio/ATRAC-ADVANCED-LOSSLESS", "IANA media type registration";
    AUDIO_ATRAC_X => "audio/ATRAC-X", "IANA media type registration";
    AUDIO_ATRAC3 => "audio/ATRAC3", "IANA media type registration";
    AUDIO_BASIC => "audio/basic", "RFC 2046, Section 4.3";
    AUDIO_BV16 => "audio/BV16", "IANA media type registration";
    AUDIO_BV32 => "audio/BV32", "IANA media type registration";
    AUDIO_CLEARMODE => "audio/clearmode", "IANA media type registration";
    AUDIO_CN => "audio/CN", "IANA media type registration";
    AUDIO_CSOUND => "audio/csound", "IANA media type registration";
    AUDIO_DAT12 => "audio/DAT12", "IANA media type registration";
    AUDIO_DLS => "audio/dls", "IANA media type registration";
    AUDIO_DSR_ES201108 => "audio/dsr-es201108", "IANA media type registration";
    AUDIO_DSR_ES202050 => "audio/dsr-es202050", "IANA media type registration";
    AUDIO_DSR_ES202211 => "audio/dsr-es202211", "IANA media type registration";
    AUDIO_DSR_ES202212 => "audio/dsr-es202212", "IANA media type registration";
    AUDIO_DV => "audio/DV", "IANA media type registration";
    AUDIO_DVI4 => "audio/DVI4", "IANA media type registration";
    AUDIO_EAC3 => "audio/eac3", "IANA media type registration";
    AUDIO_ENCAPRTP => "audio/encaprtp", "IANA media type registration";
    AUDIO_EVRC => "audio/EVRC", "IANA media type registration";
    AUDIO_EVRC_QCP => "audio/EVRC-QCP", "IANA media type registration";
    AUDIO_EVRC0 => "audio/EVRC0", "IANA media type registration";
    AUDIO_EVRC1 => "audio/EVRC1", "IANA media type registration";
    AUDIO_EVRCB => "audio/EVRCB", "IANA media type registration";
    AUDIO_EVRCB0 => "audio/EVRCB0", "IANA media type registration";
    AUDIO_EVRCB1 => "audio/EVRCB1", "IANA media type registration";
    AUDIO_EVRCNW => "audio/EVRCNW", "IANA media type registration";
    AUDIO_EVRCNW0 => "audio/EVRCNW0", "IANA media type registration";
    AUDIO_EVRCNW1 => "audio/EVRCNW1", "IANA media type registration";
    AUDIO_EVRCWB => "audio/EVRCWB", "IANA media type registration";
    AUDIO_EVRCWB0 => "audio/EVRCWB0", "IANA media type registration";
    AUDIO_EVRCWB1 => "audio/EVRCWB1", "IANA media type registration";
    AUDIO_EVS => "audio/EVS", "IANA media type registration";
    AUDIO_EXAMPLE => "audio/example", "IANA media type registration";
    AUDIO_FLAC => "audio/flac", "RFC 9639, Section 10.2";
    AUDIO_FLEXFEC => "audio/flexfec", "IANA media type registration";
    AUDIO_FWDRED => "audio/fwdred", "IANA media type registration";
    AUDIO_G711_0 => "audio/G711-0", "IANA media type registration";
    AUDIO_G719 => "audio/G719", "IANA media type registration";
    AUDIO_G722 => "audio/G722", "IANA media type registration";
    AUDIO_G7221 => "audio/G7221", "IANA media type registration";
    AUDIO_G723 => "audio/G723", "IANA media type registration";
    AUDIO_G726_16 => "audio/G726-16", "IANA media type registration";
    AUDIO_G726_24 => "audio/G726-24", "IANA media type registration";
    AUDIO_G726_32 => "audio/G726-32", "IANA media type registration";
    AUDIO_G726_40 => "audio/G726-40", "IANA media type registration";
    AUDIO_G728 => "audio/G728", "IANA media type registration";
    AUDIO_G729 => "audio/G729", "IANA media type registration";
    AUDIO_G7291 => "audio/G7291", "IANA media type registration";
    AUDIO_G729D => "audio/G729D", "IANA media type registration";
    AUDIO_G729E => "audio/G729E", "IANA media type registration";
    AUDIO_GSM => "audio/GSM", "IANA media type registration";
    AUDIO_GSM_EFR => "audio/GSM-EFR", "IANA media type registration";
    AUDIO_GSM_HR_08 => "audio/GSM-HR-08", "IANA media type registration";
    AUDIO_ILBC => "audio/iLBC", "IANA media type registration";
    AUDIO_IP_MR_V2_5 => "audio/ip-mr_v2.5", "IANA media type registration";
    AUDIO_L16 => "audio/L16", "RFC 2586";
    AUDIO_L20 => "audio/L20", "IANA media type registration";
    AUDIO_L24 => "audio/L24", "IANA media type registration";
    AUDIO_L8 => "audio/L8", "IANA media type registration";
    AUDIO_LPC => "audio/LPC", "IANA media type registration";
    AUDIO_MELP => "audio/MELP", "IANA media type registration";
    AUDIO_MELP1200 => "audio/MELP1200", "IANA media type registration";
    AUDIO_MELP2400 => "audio/MELP2400", "IANA media type registration";
    AUDIO_MELP600 => "audio/MELP600", "IANA media type registration";
    AUDIO_MHAS => "audio/mhas", "IANA media type registration";
    AUDIO_MOBILE_XMF => "audio/mobile-xmf", "IANA media type registration";
    AUDIO_MP4 => "audio/mp4", "RFC 4337, Section 2";
    AUDIO_MP4A_LATM => "audio/MP4A-LATM", "IANA media type registration";
    AUDIO_MPA => "audio/MPA", "IANA media type registration";
    AUDIO_MPA_ROBUST => "audio/mpa-robust", "IANA media type registration";
    AUDIO_MPEG => "audio/mpeg", "RFC 3003, Section 2";
    AUDIO_MPEG4_GENERIC => "audio/mpeg4-generic", "IANA media type registration";
    AUDIO_MPEGURL => "audio/mpegurl", "IANA media type registration";
    AUDIO_OGG => "audio/ogg", "RFC 5334, Section 10.2";
    AUDIO_OPUS => "audio/opus", "RFC 7587, Section 6.1";
    AUDIO_PARITYFEC => "audio/parityfec", "IANA media type registration";
    AUDIO_PCMA => "audio/PCMA", "IANA media type registration";
    AUDIO_PCMA_WB => "audio/PCMA-WB", "IANA media type registration";
    AUDIO_PCMU => "audio/PCMU", "IANA media type registration";
    AUDIO_PCMU_WB => "audio/PCMU-WB", "IANA media type registration";
    AUDIO_PRS_SID => "audio/prs.sid", "IANA personal tree registration";
    AUDIO_QCELP => "audio/QCELP", "IANA media type registration";
    AUDIO_RAPTORFEC => "audio/raptorfec", "IANA media type registration";
    AUDIO_RED => "audio/RED", "IANA media type registration";
    AUDIO_RTP_ENC_AESCM128 => "audio/rtp-enc-aescm128", "IANA media type registration";
    AUDIO_RTP_MIDI => "audio/rtp-midi", "IANA media type registration";
    AUDIO_RTPLOOPBACK => "audio/rtploopback", "IANA media type registration";
    AUDIO_RTX => "audio/rtx", "IANA media type registration";
    AUDIO_SCIP => "audio/scip", "IANA media type registration";
    AUDIO_SMV => "audio/SMV", "IANA media type registration";
    AUDIO_SMV_QCP => "audio/SMV-QCP", "IANA media type registration";
    AUDIO_SMV0 => "audio/SMV0", "IANA media type registration";
    AUDIO_SOFA => "audio/sofa", "IANA media type registration";
    AUDIO_SP_MIDI => "audio/sp-midi", "IANA media type registration";
    AUDIO_SPEEX => "audio/speex", "IANA media type registration";
    AUDIO_T140C => "audio/t140c", "IANA media type registration";
    AUDIO_T38 => "audio/t38", "IANA media type registration";
    AUDIO_TELEPHONE_EVENT => "audio/telephone-event", "IANA media type registration";
    AUDIO_TETRA_ACELP => "audio/TETRA_ACELP", "IANA media type registration";
    AUDIO_TETRA_ACELP_BB => "audio/TETRA_ACELP_BB", "IANA media type registration";
    AUDIO_TONE => "audio/tone", "IANA media type registration";
    AUDIO_TSVCIS => "audio/TSVCIS", "IANA media type registration";
    AUDIO_UEMCLIP => "audio/UEMCLIP", "IANA media type registration";
    AUDIO_ULPFEC => "audio/ulpfec", "IANA media type registration";
    AUDIO_USAC => "audio/usac", "IANA media type registration";
    AUDIO_VDVI => "audio/VDVI", "IANA media type registration";
    AUDIO_VMR_WB => "audio/VMR-WB", "IANA media type registration";
    AUDIO_VND_3GPP_IUFP => "audio/vnd.3gpp.iufp", "IANA vendor tree registration";
    AUDIO_VND_4SB => "audio/vnd.4SB", "IANA vendor tree registration";
    AUDIO_VND_AUDIOKOZ => "audio/vnd.audiokoz", "IANA vendor tree registration";
    AUDIO_VND_CELP => "audio/vnd.CELP", "IANA vendor tree registration";
    AUDIO_VND_CISCO_NSE => "audio/vnd.cisco.nse", "IANA vendor tree registration";
    AUDIO_VND_CMLES_RADIO_EVENTS => "audio/vnd.cmles.radio-events", "IANA vendor tree registration";
    AUDIO_VND_CNS_ANP1 => "audio/vnd.cns.anp1", "IANA vendor tree registration";
    AUDIO_VND_CNS_INF1 => "audio/vnd.cns.inf1", "IANA vendor tree registration";
    AUDIO_VND_DECE_AUDIO => "audio/vnd.dece.audio", "IANA vendor tree registration";
    AUDIO_VND_DIGITAL_WINDS => "audio/vnd.digital-winds", "IANA vendor tree registration";
    AUDIO_VND_DLNA_ADTS => "audio/vnd.dlna.adts", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_HEAAC_1 => "audio/vnd.dolby.heaac.1", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_HEAAC_2 => "audio/vnd.dolby.heaac.2", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_MLP => "audio/vnd.dolby.mlp", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_MPS => "audio/vnd.dolby.mps", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_PL2 => "audio/vnd.dolby.pl2", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_PL2X => "audio/vnd.dolby.pl2x", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_PL2Z => "audio/vnd.dolby.pl2z", "IANA vendor tree registration";
    AUDIO_VND_DOLBY_PULSE_1 => "audio/vnd.dolby.pulse.1", "IANA vendor tree registration";
    AUDIO_VND_DRA => "audio/vnd.dra", "IANA vendor tree registration";
    AUDIO_VND_DTS => "audio/vnd.dts", "IANA vendor tree registration";
    AUDIO_VND_DTS_HD => "audio/vnd.dts.hd", "IANA vendor tree registration";
    AUDIO_VND_DTS_UHD => "audio/vnd.dts.uhd", "IANA vendor tree registration";
    AUDIO_VND_DVB_FILE => "audio/vnd.dvb.file", "IANA vendor tree registration";
    AUDIO_VND_EVERAD_PLJ => "audio/vnd.everad.plj", "IANA vendor tree registration";
    AUDIO_VND_HNS_AUDIO => "audio/vnd.hns.audio", "IANA vendor tree registration";
    AUDIO_VND_LUCENT_VOICE => "audio/vnd.lucent.voice", "IANA vendor tree registration";
    AUDIO_VND_MS_PLAYREADY_MEDIA_PYA => "audio/vnd.ms-playready.media.pya", "IANA vendor tree registration";
    AUDIO_VND_NOKIA_MOBILE_XMF => "audio/vnd.nokia.mobile-xmf", "IANA vendor tree registration";
    AUDIO_VND_NORTEL_VBK => "audio/vnd.nortel.vbk", "IANA vendor tree registration";
    AUDIO_VND_NUERA_ECELP4800 => "audio/vnd.nuera.ecelp4800", "IANA vendor tree registration";
    AUDIO_VND_NUERA_ECELP7470 => "audio/vnd.nuera.ecelp7470", "IANA vendor tree registration";
    AUDIO_VND_NUERA_ECELP9600 => "audio/vnd.nuera.ecelp9600", "IANA vendor tree registration";
    AUDIO_VND_OCTEL_SBC => "audio/vnd.octel.sbc", "IANA vendor tree registration";
    AUDIO_VND_PRESONUS_MULTITRACK => "audio/vnd.presonus.multitrack", "IANA vendor tree registration";
    AUDIO_VND_RHETOREX_32KADPCM => "audio/vnd.rhetorex.32kadpcm", "IANA vendor tree registration";
    AUDIO_VND_RIP => "audio/vnd.rip", "IANA vendor tree registration";
    AUDIO_VND_SEALEDMEDIA_SOFTSEAL_MPEG => "audio/vnd.sealedmedia.softseal.mpeg", "IANA vendor tree registration";
    AUDIO_VND_VMX_CVSD => "audio/vnd.vmx.cvsd", "IANA vendor tree registration";
    AUDIO_VND_WAVE => "audio/vnd.wave", "RFC 2361";
    AUDIO_VORBIS => "audio/vorbis", "RFC 5215, Section 10.1";
    AUDIO_VORBIS_CONFIG => "audio/vorbis-config", "IANA media type registration";
    AUDIO_WEBM => "audio/webm", "WebM Container Guidelines";
    FONT_COLLECTION => "font/collection", "RFC 8081, Section 4.4.1";
    FONT_OTF => "font/otf", "RFC 8081, Section 4.4.4";
    FONT_SFNT => "font/sfnt", "RFC 8081, Section 4.4.2";
    FONT_TTF => "font/ttf", "RFC 8081, Section 4.4.3";
    FONT_WOFF => "font/woff", "RFC 8081, Section 4.4.5";
    FONT_WOFF2 => "font/woff2", "RFC 8081, Section 4.4.6";
    IMAGE_ACES => "image/aces", "IANA media type registration";
    IMAGE_APNG => "image/apng", "W3C Portable Network Graphics (PNG) Specification (Third Edition)";
    IMAGE_AVCI => "image/avci", "IANA media type registration";
    IMAGE_AVCS => "image/avcs", "IANA media type registration";
    IMAGE_AVIF => "image/avif", "AV1 Image File Format (AVIF), Section 10.1";
    IMAGE_BMP => "image/bmp", "RFC 7903, Section 1.2";
    IMAGE_CGM => "image/cgm", "IANA media type registration";
    IMAGE_DICOM_RLE => "image/dicom-rle", "IANA media type registration";
    IMAGE_DPX => "image/dpx", "IANA media type registration";
    IMAGE_EMF => "image/emf", "RFC 7903, Section 1";
    IMAGE_EXAMPLE => "image/example", "IANA media type registration";
    IMAGE_FITS => "image/fits", "IANA media type registration";
    IMAGE_G3FAX => "image/g3fax", "IANA media type registration";
    IMAGE_GIF => "image/gif", "RFC 2046, Section 4.2";
    IMAGE_HEIC => "image/heic", "ISO/IEC 23008-12, Annex C";
    IMAGE_HEIC_SEQUENCE => "image/heic-sequence", "IANA media type registration";
    IMAGE_HEIF => "image/heif", "ISO/IEC 23008-12, Annex C";
    IMAGE_HEIF_SEQUENCE => "image/heif-sequence", "IANA media type registration";
    IMAGE_HEJ2K => "image/hej2k", "IANA media type registration";
    IMAGE_HSJ2 => "image/hsj2", "IANA media type registration";
    IMAGE_IEF => "image/ief", "IANA media type registration";
    IMAGE_JLS => "image/jls", "IANA media type registration";
    IMAGE_JP2 => "image/jp2", "RFC 3745, Section 3";
    IMAGE_JPEG => "image/jpeg", "RFC 2046, Section 4.2";
    IMAGE_JPH => "image/jph", "IANA media type registration";
    IMAGE_JPHC => "image/jphc", "IANA media type registration";
    IMAGE_JPM => "image/jpm", "IANA media type registration";
    IMAGE_JPX => "image/jpx", "IANA media type registration";
    IMAGE_JXL => "image/jxl", "ISO/IEC 18181";
    IMAGE_JXR => "image/jxr", "IANA media type registration";
    IMAGE_JXRA => "image/jxrA", "IANA media type registration";
    IMAGE_JXRS => "image/jxrS", "IANA media type registration";
    IMAGE_JXS => "image/jxs", "IANA media type registration";
    IMAGE_JXSC => "image/jxsc", "IANA media type registration";
    IMAGE_JXSI => "image/jxsi", "IANA media type registration";
    IMAGE_JXSS => "image/jxss", "IANA media type registration";
    IMAGE_KTX => "image/ktx", "IANA media type registration";
    IMAGE_KTX2 => "image/ktx2", "IANA media type registration";
    IMAGE_NAPLPS => "image/naplps", "IANA media type registration";
    IMAGE_PNG => "image/png", "W3C Portable Network Graphics (PNG) Specification, Appendix A";
    IMAGE_PRS_BTIF => "image/prs.btif", "IANA personal tree registration";
    IMAGE_PRS_PTI => "image/prs.pti", "IANA personal tree registration";
    IMAGE_PWG_RASTER => "image/pwg-raster", "IANA media type registration";
    IMAGE_SVG_XML => "image/svg+xml", "W3C Scalable Vector Graphics (SVG) 1.1, Appendix P";
    IMAGE_T38 => "image/t38", "IANA media type registration";
    IMAGE_TIFF => "image/tiff", "RFC 3302";
    IMAGE_TIFF_FX => "image/tiff-fx", "IANA media type registration";
    IMAGE_VND_ADOBE_PHOTOSHOP => "image/vnd.adobe.photoshop", "IANA vendor tree registration";
    IMAGE_VND_AIRZIP_ACCELERATOR_AZV => "image/vnd.airzip.accelerator.azv", "IANA vendor tree registration";
    IMAGE_VND_CNS_INF2 => "image/vnd.cns.inf2", "IANA vendor tree registration";
    IMAGE_VND_DECE_GRAPHIC => "image/vnd.dece.graphic", "IANA vendor tree registration";
    IMAGE_VND_DJVU => "image/vnd.djvu", "IANA vendor tree registration";
    IMAGE_VND_DVB_SUBTITLE => "image/vnd.dvb.subtitle", "IANA vendor tree registration";
    IMAGE_VND_DWG => "image/vnd.dwg", "IANA vendor tree registration";
    IMAGE_VND_DXF => "image/vnd.dxf", "IANA vendor tree registration";
    IMAGE_VND_FASTBIDSHEET => "image/vnd.fastbidsheet", "IANA vendor tree registration";
    IMAGE_VND_FPX => "image/vnd.fpx", "IANA vendor tree registration";
    IMAGE_VND_FST => "image/vnd.fst", "IANA vendor tree registration";
    IMAGE_VND_FUJIXEROX_EDMICS_MMR => "image/vnd.fujixerox.edmics-mmr", "IANA vendor tree registration";
    IMAGE_VND_FUJIXEROX_EDMICS_RLC => "image/vnd.fujixerox.edmics-rlc", "IANA vendor tree registration";
    IMAGE_VND_GLOBALGRAPHICS_PGB => "image/vnd.globalgraphics.pgb", "IANA vendor tree registration";
    IMAGE_VND_MICROSOFT_ICON => "image/vnd.microsoft.icon", "IANA vendor tree registration";
    IMAGE_VND_MIX => "image/vnd.mix", "IANA vendor tree registration";
    IMAGE_VND_MS_MODI => "image/vnd.ms-modi", "IANA vendor tree registration";
    IMAGE_VND_NET_FPX => "image/vnd.net-fpx", "IANA vendor tree registration";
    IMAGE_VND_PCO_B16 => "image/vnd.pco.b16", "IANA vendor tree registration";
    IMAGE_VND_RADIANCE => "image/vnd.radiance", "IANA vendor tree registration";
    IMAGE_VND_SEALED_PNG => "image/vnd.sealed.png", "IANA vendor tree registration";
    IMAGE_VND_SEALEDMEDIA_SOFTSEAL_GIF => "image/vnd.sealedmedia.softseal.gif", "IANA vendor tree registration";
    IMAGE_VND_SEALEDMEDIA_SOFTSEAL_JPG => "image/vnd.sealedmedia.softseal.jpg", "IANA vendor tree registration";
    IMAGE_VND_SVF => "image/vnd.svf", "IANA vendor tree registration";
    IMAGE_VND_TENCENT_TAP => "image/vnd.tencent.tap", "IANA vendor tree registration";
    IMAGE_VND_VALVE_SOURCE_TEXTURE => "image/vnd.valve.source.texture", "IANA vendor tree registration";
    IMAGE_VND_WAP_WBMP => "image/vnd.wap.wbmp", "IANA vendor tree registration";
    IMAGE_VND_XIFF => "image/vnd.xiff", "IANA vendor tree registration";
    IMAGE_VND_ZBRUSH_PCX => "image/vnd.zbrush.pcx", "IANA vendor tree registration";
    IMAGE_WEBP => "image/webp", "RFC 9649, Section 6.1";
    IMAGE_WMF => "image/wmf", "RFC 7903, Section 1";
    MESSAGE_BHTTP => "message/bhttp", "RFC 9292, Section 7";
    MESSAGE_CPIM => "message/CPIM", "IANA media type registration";
    MESSAGE_DELIVERY_STATUS => "message/delivery-status", "RFC 3464, Section 6.1";
    MESSAGE_DISPOSITION_NOTIFICATION => "message/disposition-notification", "RFC 8098, Section 10";
    MESSAGE_EXAMPLE => "message/example", "IANA media type registration";
    MESSAGE_EXTERNAL_BODY => "message/external-body", "RFC 2046, Section 5.2.3";
    MESSAGE_FEEDBACK_REPORT => "message/feedback-report", "IANA media type registration";
    MESSAGE_GLOBAL => "message/global", "RFC 6532, Section 3.7";
    MESSAGE_GLOBAL_DELIVERY_STATUS => "message/global-delivery-status", "IANA media type registration";
    MESSAGE_GLOBAL_DISPOSITION_NOTIFICATION => "message/global-disposition-notification", "IANA media type registration";
    MESSAGE_GLOBAL_HEADERS => "message/global-headers", "IANA media type registration";
    MESSAGE_HTTP => "message/http", "RFC 9112, Section 10.1";
    MESSAGE_IMDN_XML => "message/imdn+xml", "IANA media type registration";
    MESSAGE_OHTTP_REQ => "message/ohttp-req", "RFC 9458, Section 9.2";
    MESSAGE_OHTTP_RES => "message/ohttp-res", "RFC 9458, Section 9.3";
    MESSAGE_PARTIAL => "message/partial", "RFC 2046, Section 5.2.2";
    MESSAGE_RFC822 => "message/rfc822", "RFC 2046, Section 5.2.1";
    MESSAGE_S_HTTP => "message/s-http", "IANA media type registration";
    MESSAGE_SIP => "message/sip", "RFC 3261, Section 27.5";
    MESSAGE_SIPFRAG => "message/sipfrag", "IANA media type registration";
    MESSAGE_TRACKING_STATUS => "message/tracking-status", "IANA media type registration";
    MESSAGE_VND_WFA_WSC => "message/vnd.wfa.wsc", "IANA vendor tree registration";
    MODEL_3MF => "model/3mf", "3MF Consortium Core Specification";
    MODEL_E57 => "model/e57", "IANA media type registration";
    MODEL_EXAMPLE => "model/example", "IANA media type registration";
    MODEL_GLTF_JSON => "model/gltf+json", "Khronos glTF 2.0";
    MODEL_GLTF_BINARY => "model/gltf-binary", "Khronos glTF 2.0";
    MODEL_IGES => "model/iges", "IANA media type registration";
    MODEL_JT => "model/JT", "IANA media type registration";
    MODEL_MESH => "model/mesh", "IANA media type registration";
    MODEL_MTL => "model/mtl", "IANA media type registration";
    MODEL_OBJ => "model/obj", "IANA media type registration";
    MODEL_PRC => "model/prc", "IANA media type registration";
    MODEL_STEP => "model/step", "IANA media type registration";
    MODEL_STEP_XML => "model/step+xml", "IANA media type registration";
    MODEL_STEP_ZIP => "model/step+zip", "IANA media type registration";
    MODEL_STEP_XML_ZIP => "model/step-xml+zip", "IANA media type registration";
    MODEL_STL => "model/stl", "IANA media type registration";
    MODEL_U3D => "model/u3d", "IANA media type registration";
    MODEL_VND_CLD => "model/vnd.cld", "IANA vendor tree registration";
    MODEL_VND_COLLADA_XML => "model/vnd.collada+xml", "IANA vendor tree registration";
    MODEL_VND_DWF => "model/vnd.dwf", "IANA vendor tree registration";
    MODEL_VND_FLATLAND_3DML => "model/vnd.flatland.3dml", "IANA vendor tree registration";
    MODEL_VND_GDL => "model/vnd.gdl", "IANA vendor tree registration";
    MODEL_VND_GS_GDL => "model/vnd.gs-gdl", "IANA vendor tree registration";
    MODEL_VND_GTW => "model/vnd.gtw", "IANA vendor tree registration";
    MODEL_VND_MOML_XML => "model/vnd.moml+xml", "IANA vendor tree registration";
    MODEL_VND_MTS => "model/vnd.mts", "IANA vendor tree registration";
    MODEL_VND_OPENGEX => "model/vnd.opengex", "IANA vendor tree registration";
    MODEL_VND_PARASOLID_TRANSMIT_BINARY => "model/vnd.parasolid.transmit.binary", "IANA vendor tree registration";
    MODEL_VND_PARASOLID_TRANSMIT_TEXT => "model/vnd.parasolid.transmit.text", "IANA vendor tree registration";
    MODEL_VND_PYTHA_PYOX => "model/vnd.pytha.pyox", "IANA vendor tree registration";
    MODEL_VND_ROSETTE_ANNOTATED_DATA_MODEL => "model/vnd.rosette.annotated-data-model", "IANA vendor tree registration";
    MODEL_VND_SAP_VDS => "model/vnd.sap.vds", "IANA vendor tree registration";
    MODEL_VND_USDA => "model/vnd.usda", "IANA vendor tree registration";
    MODEL_VND_USDZ_ZIP => "model/vnd.usdz+zip", "IANA vendor tree registration";
    MODEL_VND_VALVE_SOURCE_COMPILED_MAP => "model/vnd.valve.source.compiled-map", "IANA vendor tree registration";
    MODEL_VND_VTU => "model/vnd.vtu", "IANA vendor tree registration";
    MODEL_VRML => "model/vrml", "RFC 2077";
    MODEL_X3D_FASTINFOSET => "model/x3d+fastinfoset", "IANA media type registration";
    MODEL_X3D_XML => "model/x3d+xml", "ISO/IEC 19776-1";
    MODEL_X3D_VRML => "model/x3d-vrml", "IANA media type registration";
    MULTIPART_ALTERNATIVE => "multipart/alternative", "RFC 2046, Section 5.1.4";
    MULTIPART_APPLEDOUBLE => "multipart/appledouble", "IANA media type registration";
    MULTIPART_BYTERANGES => "multipart/byteranges", "RFC 9110, Section 14.6";
    MULTIPART_DIGEST => "multipart/digest", "RFC 2046, Section 5.1.5";
    MULTIPART_ENCRYPTED => "multipart/encrypted", "RFC 1847, Section 2.2";
    MULTIPART_EXAMPLE => "multipart/example", "IANA media type registration";
    MULTIPART_FORM_DATA => "multipart/form-data", "RFC 7578, Section 4";
    MULTIPART_HEADER_SET => "multipart/header-set", "IANA media type registration";
    MULTIPART_MIXED => "multipart/mixed", "RFC 2046, Section 5.1.3";
    MULTIPART_MULTILINGUAL => "multipart/multilingual", "RFC 8255, Section 3";
    MULTIPART_PARALLEL => "multipart/parallel", "RFC 2046, Section 5.1.6";
    MULTIPART_RELATED => "multipart/related", "RFC 2387, Section 3";
    MULTIPART_REPORT => "multipart/report", "RFC 6522, Section 3";
    MULTIPART_SIGNED => "multipart/signed", "RFC 1847, Section 2.1";
    MULTIPART_VND_BINT_MED_PLUS => "multipart/vnd.bint.med-plus", "IANA vendor tree registration";
    MULTIPART_VOICE_MESSAGE => "multipart/voice-message", "IANA media type registration";
    MULTIPART_X_MIXED_REPLACE => "multipart/x-mixed-replace", "HTML Living Standard, Section 15.2";
    TEXT_1D_INTERLEAVED_PARITYFEC => "text/1d-interleaved-parityfec", "IANA media type registration";
    TEXT_CACHE_MANIFEST => "text/cache-manifest", "IANA media type registration";
    TEXT_CALENDAR => "text/calendar", "RFC 5545, Section 8.1";
    TEXT_CQL => "text/cql", "IANA media type registration";
    TEXT_CQL_EXTENSION => "text/cql-extension", "IANA media type registration";
    TEXT_CQL_IDENTIFIER => "text/cql-identifier", "IANA media type registration";
    TEXT_CSS => "text/css", "RFC 2318";
    TEXT_CSV => "text/csv", "RFC 4180, Section 3";
    TEXT_CSV_SCHEMA => "text/csv-schema", "IANA media type registration";
    TEXT_DNS => "text/dns", "RFC 4027, Section 2";
    TEXT_ENCAPRTP => "text/encaprtp", "IANA media type registration";
    TEXT_ENRICHED => "text/enriched", "RFC 1896";
    TEXT_EVENT_STREAM => "text/event-stream", "HTML Living Standard, Section 9.2.7";
    TEXT_EXAMPLE => "text/example", "IANA media type registration";
    TEXT_FHIRPATH => "text/fhirpath", "IANA media type registration";
    TEXT_FLEXFEC => "text/flexfec", "IANA media type registration";
    TEXT_FWDRED => "text/fwdred", "IANA media type registration";
    TEXT_GFF3 => "text/gff3", "IANA media type registration";
    TEXT_GRAMMAR_REF_LIST => "text/grammar-ref-list", "IANA media type registration";
    TEXT_HL7V2 => "text/hl7v2", "IANA media type registration";
    TEXT_HTML => "text/html", "HTML Living Standard, Section 16.1";
    TEXT_JAVASCRIPT => "text/javascript", "RFC 9239, Section 6";
    TEXT_JCR_CND => "text/jcr-cnd", "IANA media type registration";
    TEXT_MARKDOWN => "text/markdown", "RFC 7763, Section 2";
    TEXT_MIZAR => "text/mizar", "IANA media type registration";
    TEXT_N3 => "text/n3", "W3C Notation3, Appendix A";
    TEXT_PARAMETERS => "text/parameters", "IANA media type registration";
    TEXT_PARITYFEC => "text/parityfec", "IANA media type registration";
    TEXT_PLAIN => "text/plain", "RFC 2046, Section 4.1.3";
    TEXT_PROVENANCE_NOTATION => "text/provenance-notation", "IANA media type registration";
    TEXT_PRS_FALLENSTEIN_RST => "text/prs.fallenstein.rst", "IANA personal tree registration";
    TEXT_PRS_LINES_TAG => "text/prs.lines.tag", "IANA personal tree registration";
    TEXT_PRS_PROP_LOGIC => "text/prs.prop.logic", "IANA personal tree registration";
    TEXT_RAPTORFEC => "text/raptorfec", "IANA media type registration";
    TEXT_RED => "text/RED", "IANA media type registration";
    TEXT_RFC822_HEADERS => "text/rfc822-headers", "RFC 6522, Section 4";
    TEXT_RTF => "text/rtf", "IANA media type registration";
    TEXT_RTP_ENC_AESCM128 => "text/rtp-enc-aescm128", "IANA media type registration";
    TEXT_RTPLOOPBACK => "text/rtploopback", "IANA media type registration";
    TEXT_RTX => "text/rtx", "IANA media type registration";
    TEXT_SGML => "text/sgml", "RFC 1874";
    TEXT_SHACLC => "text/shaclc", "IANA media type registration";
    TEXT_SHEX => "text/shex", "IANA media type registration";
    TEXT_SPDX => "text/spdx", "IANA media type registration";
    TEXT_STRINGS => "text/strings", "IANA media type registration";
    TEXT_T140 => "text/t140", "IANA media type registration";
    TEXT_TAB_SEPARATED_VALUES => "text/tab-separated-values", "IANA media type registration";
    TEXT_TEXMACS => "text/texmacs", "IANA media type registration";
    TEXT_TROFF => "text/troff", "RFC 4263";
    TEXT_TURTLE => "text/turtle", "W3C RDF 1.1 Turtle, Appendix C";
    TEXT_ULPFEC => "text/ulpfec", "IANA media type registration";
    TEXT_URI_LIST => "text/uri-list", "RFC 2483, Section 5";
    TEXT_VCARD => "text/vcard", "RFC 6350, Section 10.1";
    TEXT_VND_A => "text/vnd.a", "IANA vendor tree registration";
    TEXT_VND_ABC => "text/vnd.abc", "IANA vendor tree registration";
    TEXT_VND_ASCII_ART => "text/vnd.ascii-art", "IANA vendor tree registration";
    TEXT_VND_CURL => "text/vnd.curl", "IANA vendor tree registration";
    TEXT_VND_DEBIAN_COPYRIGHT => "text/vnd.debian.copyright", "IANA vendor tree registration";
    TEXT_VND_DMCLIENTSCRIPT => "text/vnd.DMClientScript", "IANA vendor tree registration";
    TEXT_VND_DVB_SUBTITLE => "text/vnd.dvb.subtitle", "IANA vendor tree registration";
    TEXT_VND_ESMERTEC_THEME_DESCRIPTOR => "text/vnd.esmertec.theme-descriptor", "IANA vendor tree registration";
    TEXT_VND_EXCHANGEABLE => "text/vnd.exchangeable", "IANA vendor tree registration";
    TEXT_VND_FAMILYSEARCH_GEDCOM => "text/vnd.familysearch.gedcom", "IANA vendor tree registration";
    TEXT_VND_FICLAB_FLT => "text/vnd.ficlab.flt", "IANA vendor tree registration";
    TEXT_VND_FLY => "text/vnd.fly", "IANA vendor tree registration";
    TEXT_VND_FMI_FLEXSTOR => "text/vnd.fmi.flexstor", "IANA vendor tree registration";
    TEXT_VND_GML => "text/vnd.gml", "IANA vendor tree registration";
    TEXT_VND_GRAPHVIZ => "text/vnd.graphviz", "IANA vendor tree registration";
    TEXT_VND_HANS => "text/vnd.hans", "IANA vendor tree registration";
    TEXT_VND_HGL => "text/vnd.hgl", "IANA vendor tree registration";
    TEXT_VND_IN3D_3DML => "text/vnd.in3d.3dml", "IANA vendor tree registration";
    TEXT_VND_IN3D_SPOT => "text/vnd.in3d.spot", "IANA vendor tree registration";
    TEXT_VND_IPTC_NEWSML => "text/vnd.IPTC.NewsML", "IANA vendor tree registration";
    TEXT_VND_IPTC_NITF => "text/vnd.IPTC.NITF", "IANA vendor tree registration";
    TEXT_VND_LATEX_Z => "text/vnd.latex-z", "IANA vendor tree registration";
    TEXT_VND_MOTOROLA_REFLEX => "text/vnd.motorola.reflex", "IANA vendor tree registration";
    TEXT_VND_MS_MEDIAPACKAGE => "text/vnd.ms-mediapackage", "IANA vendor tree registration";
    TEXT_VND_NET2PHONE_COMMCENTER_COMMAND => "text/vnd.net2phone.commcenter.command", "IANA vendor tree registration";
    TEXT_VND_RADISYS_MSML_BASIC_LAYOUT => "text/vnd.radisys.msml-basic-layout", "IANA vendor tree registration";
    TEXT_VND_SENX_WARPSCRIPT => "text/vnd.senx.warpscript", "IANA vendor tree registration";
    TEXT_VND_SOSI => "text/vnd.sosi", "IANA vendor tree registration";
    TEXT_VND_SUN_J2ME_APP_DESCRIPTOR => "text/vnd.sun.j2me.app-descriptor", "IANA vendor tree registration";
    TEXT_VND_TROLLTECH_LINGUIST => "text/vnd.trolltech.linguist", "IANA vendor tree registration";
    TEXT_VND_WAP_SI => "text/vnd.wap.si", "IANA vendor tree registration";
    TEXT_VND_WAP_SL => "text/vnd.wap.sl", "IANA vendor tree registration";
    TEXT_VND_WAP_WML => "text/vnd.wap.wml", "IANA vendor tree registration";
    TEXT_VND_WAP_WMLSCRIPT => "text/vnd.wap.wmlscript", "IANA vendor tree registration";
    TEXT_VTT => "text/vtt", "W3C WebVTT, Section 7.1";
    TEXT_WGSL => "text/wgsl", "IANA media type registration";
    TEXT_XML => "text/xml", "RFC 7303, Section 9.2";
    TEXT_XML_DTD => "text/xml-dtd", "IANA media type registration";
    TEXT_XML_EXTERNAL_PARSED_ENTITY => "text/xml-external-parsed-entity", "IANA media type registration";
    VIDEO_1D_INTERLEAVED_PARITYFEC => "video/1d-interleaved-parityfec", "IANA media type registration";
    VIDEO_3GPP => "video/3gpp", "RFC 3839, Section 4";
    VIDEO_3GPP_TT => "video/3gpp-tt", "IANA media type registration";
    VIDEO_3GPP2 => "video/3gpp2", "RFC 4393, Section 3";
    VIDEO_ANNODEX => "video/annodex", "IANA media type registration";
    VIDEO_AV1 => "video/AV1", "IANA media type registration";
    VIDEO_BMPEG => "video/BMPEG", "IANA media type registration";
    VIDEO_BT656 => "video/BT656", "IANA media type registration";
    VIDEO_CELB => "video/CelB", "IANA media type registration";
    VIDEO_DV => "video/DV", "IANA media type registration";
    VIDEO_ENCAPRTP => "video/encaprtp", "IANA media type registration";
    VIDEO_EXAMPLE => "video/example", "IANA media type registration";
    VIDEO_FFV1 => "video/FFV1", "IANA media type registration";
    VIDEO_FLEXFEC => "video/flexfec", "IANA media type registration";
    VIDEO_FLI => "video/fli", "IANA media type registration";
    VIDEO_GL => "video/gl", "IANA media type registration";
    VIDEO_H261 => "video/H261", "IANA media type registration";
    VIDEO_H263 => "video/H263", "IANA media type registration";
    VIDEO_H263_1998 => "video/H263-1998", "IANA media type registration";
    VIDEO_H263_2000 => "video/H263-2000", "IANA media type registration";
    VIDEO_H264 => "video/H264", "RFC 6184, Section 8.1";
    VIDEO_H264_RCDO => "video/H264-RCDO", "IANA media type registration";
    VIDEO_H264_SVC => "video/H264-SVC", "IANA media type registration";
    VIDEO_H265 => "video/H265", "RFC 7798, Section 7.1";
    VIDEO_H266 => "video/H266", "IANA media type registration";
    VIDEO_ISO_SEGMENT => "video/iso.segment", "IANA media type registration";
    VIDEO_JPEG => "video/JPEG", "RFC 2435";
    VIDEO_JPEG2000 => "video/jpeg2000", "IANA media type registration";
    VIDEO_JXSV => "video/jxsv", "IANA media type registration";
    VIDEO_MATROSKA => "video/matroska", "RFC 9559, Section 27.1";
    VIDEO_MJ2 => "video/mj2", "IANA media type registration";
    VIDEO_MP1S => "video/MP1S", "IANA media type registration";
    VIDEO_MP2P => "video/MP2P", "IANA media type registration";
    VIDEO_MP2T => "video/mp2t", "RFC 3555, Section 4.2.9";
    VIDEO_MP4 => "video/mp4", "RFC 4337, Section 2";
    VIDEO_MP4V_ES => "video/MP4V-ES", "IANA media type registration";
    VIDEO_MPEG => "video/mpeg", "RFC 2045";
    VIDEO_MPEG4_GENERIC => "video/mpeg4-generic", "IANA media type registration";
    VIDEO_MPV => "video/MPV", "IANA media type registration";
    VIDEO_NV => "video/nv", "IANA media type registration";
    VIDEO_OGG => "video/ogg", "RFC 5334, Section 10.3";
    VIDEO_PARITYFEC => "video/parityfec", "IANA media type registration";
    VIDEO_POINTER => "video/pointer", "IANA media type registration";
    VIDEO_QUICKTIME => "video/quicktime", "IANA media type registration";
    VIDEO_RAPTORFEC => "video/raptorfec", "IANA media type registration";
    VIDEO_RAW => "video/raw", "RFC 4175, Section 6";
    VIDEO_RTP_ENC_AESCM128 => "video/rtp-enc-aescm128", "IANA media type registration";
    VIDEO_RTPLOOPBACK => "video/rtploopback", "IANA media type registration";
    VIDEO_RTX => "video/rtx", "IANA media type registration";
    VIDEO_SCIP => "video/scip", "IANA media type registration";
    VIDEO_SMPTE291 => "video/smpte291", "IANA media type registration";
    VIDEO_SMPTE292M => "video/SMPTE292M", "IANA media type registration";
    VIDEO_ULPFEC => "video/ulpfec", "IANA media type registration";
    VIDEO_VC1 => "video/vc1", "IANA media type registration";
    VIDEO_VC2 => "video/vc2", "IANA media type registration";
    VIDEO_VND_CCTV => "video/vnd.CCTV", "IANA vendor tree registration";
    VIDEO_VND_DECE_HD => "video/vnd.dece.hd", "IANA vendor tree registration";
    VIDEO_VND_DECE_MOBILE => "video/vnd.dece.mobile", "IANA vendor tree registration";
    VIDEO_VND_DECE_MP4 => "video/vnd.dece.mp4", "IANA vendor tree registration";
    VIDEO_VND_DECE_PD => "video/vnd.dece.pd", "IANA vendor tree registration";
    VIDEO_VND_DECE_SD => "video/vnd.dece.sd", "IANA vendor tree registration";
    VIDEO_VND_DECE_VIDEO => "video/vnd.dece.video", "IANA vendor tree registration";
    VIDEO_VND_DIRECTV_MPEG => "video/vnd.directv.mpeg", "IANA vendor tree registration";
    VIDEO_VND_DIRECTV_MPEG_TTS => "video/vnd.directv.mpeg-tts", "IANA vendor tree registration";
    VIDEO_VND_DLNA_MPEG_TTS => "video/vnd.dlna.mpeg-tts", "IANA vendor tree registration";
    VIDEO_VND_DVB_FILE => "video/vnd.dvb.file", "IANA vendor tree registration";
    VIDEO_VND_FVT => "video/vnd.fvt", "IANA vendor tree registration";
    VIDEO_VND_HNS_VIDEO => "video/vnd.hns.video", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_1DPARITYFEC_1010 => "video/vnd.iptvforum.1dparityfec-1010", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_1DPARITYFEC_2005 => "video/vnd.iptvforum.1dparityfec-2005", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_2DPARITYFEC_1010 => "video/vnd.iptvforum.2dparityfec-1010", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_2DPARITYFEC_2005 => "video/vnd.iptvforum.2dparityfec-2005", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_TTSAVC => "video/vnd.iptvforum.ttsavc", "IANA vendor tree registration";
    VIDEO_VND_IPTVFORUM_TTSMPEG2 => "video/vnd.iptvforum.ttsmpeg2", "IANA vendor tree registration";
    VIDEO_VND_MOTOROLA_VIDEO => "video/vnd.motorola.video", "IANA vendor tree registration";
    VIDEO_VND_MOTOROLA_VIDEOP => "video/vnd.motorola.videop", "IANA vendor tree registration";
    VIDEO_VND_MPEGURL => "video/vnd.mpegurl", "IANA vendor tree registration";
    VIDEO_VND_MS_PLAYREADY_MEDIA_PYV => "video/vnd.ms-playready.media.pyv", "IANA vendor tree registration";
    VIDEO_VND_NOKIA_INTERLEAVED_MULTIMEDIA => "video/vnd.nokia.interleaved-multimedia", "IANA vendor tree registration";
    VIDEO_VND_NOKIA_MP4VR => "video/vnd.nokia.mp4vr", "IANA vendor tree registration";
    VIDEO_VND_NOKIA_VIDEOVOIP => "video/vnd.nokia.videovoip", "IANA vendor tree registration";
    VIDEO_VND_OBJECTVIDEO => "video/vnd.objectvideo", "IANA vendor tree registration";
    VIDEO_VND_RADGAMETTOOLS_BINK => "video/vnd.radgamettools.bink", "IANA vendor tree registration";
    VIDEO_VND_RADGAMETTOOLS_SMACKER => "video/vnd.radgamettools.smacker", "IANA vendor tree registration";
    VIDEO_VND_SEALED_MPEG1 => "video/vnd.sealed.mpeg1", "IANA vendor tree registration";
    VIDEO_VND_SEALED_MPEG4 => "video/vnd.sealed.mpeg4", "IANA vendor tree registration";
    VIDEO_VND_SEALED_SWF => "video/vnd.sealed.swf", "IANA vendor tree registration";
    VIDEO_VND_SEALEDMEDIA_SOFTSEAL_MOV => "video/vnd.sealedmedia.softseal.mov", "IANA vendor tree registration";
    VIDEO_VND_UVVU_MP4 => "video/vnd.uvvu.mp4", "IANA vendor tree registration";
    VIDEO_VND_VIVO => "video/vnd.vivo", "IANA vendor tree registration";
    VIDEO_VND_YOUTUBE_YT => "video/vnd.youtube.yt", "IANA vendor tree registration";
    VIDEO_VP8 => "video/VP8", "RFC 7741, Section 6.1";
    VIDEO_VP9 => "video/VP9", "RFC 9628, Section 6.1";
    VIDEO_WEBM => "video/webm", "WebM Container Guidelines";
}

/// Media type conventionally served for a file extension (without the dot).
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    let media_type = match ext.as_str() {
        "htm" | "html" => TEXT_HTML,
        "xhtml" => APPLICATION_XHTML_XML,
        "css" => TEXT_CSS,
        "js" | "mjs" => TEXT_JAVASCRIPT,
        "json" => APPLICATION_JSON,
        "jsonld" => APPLICATION_LD_JSON,
        "webmanifest" => APPLICATION_MANIFEST_JSON,
        "xml" => APPLICATION_XML,
        "atom" => APPLICATION_ATOM_XML,
        "rss" => APPLICATION_RSS_XML,
        "txt" => TEXT_PLAIN,
        "csv" => TEXT_CSV,
        "tsv" => TEXT_TAB_SEPARATED_VALUES,
        "md" | "markdown" => TEXT_MARKDOWN,
        "ics" => TEXT_CALENDAR,
        "vcf" => TEXT_VCARD,
        "vtt" => TEXT_VTT,
        "yaml" | "yml" => APPLICATION_YAML,
        "sql" => APPLICATION_SQL,

        "png" => IMAGE_PNG,
        "apng" => IMAGE_APNG,
        "jpg" | "jpeg" => IMAGE_JPEG,
        "gif" => IMAGE_GIF,
        "svg" => IMAGE_SVG_XML,
        "webp" => IMAGE_WEBP,
        "avif" => IMAGE_AVIF,
        "heic" => IMAGE_HEIC,
        "heif" => IMAGE_HEIF,
        "jxl" => IMAGE_JXL,
        "ico" => IMAGE_VND_MICROSOFT_ICON,
        "bmp" => IMAGE_BMP,
        "tif" | "tiff" => IMAGE_TIFF,

        "woff" => FONT_WOFF,
        "woff2" => FONT_WOFF2,
        "ttf" => FONT_TTF,
        "otf" => FONT_OTF,
        "eot" => APPLICATION_VND_MS_FONTOBJECT,

        "mp3" => AUDIO_MPEG,
        "m4a" => AUDIO_MP4,
        "aac" => AUDIO_AAC,
        "oga" => AUDIO_OGG,
        "opus" => AUDIO_OPUS,
        "flac" => AUDIO_FLAC,
        "wav" => AUDIO_VND_WAVE,
        "weba" => AUDIO_WEBM,
        "mp4" | "m4v" => VIDEO_MP4,
        "ogv" => VIDEO_OGG,
        "ogg" => APPLICATION_OGG,
        "webm" => VIDEO_WEBM,
        "mkv" => VIDEO_MATROSKA,
        "mov" => VIDEO_QUICKTIME,
        "mpeg" | "mpg" => VIDEO_MPEG,
        "3gp" => VIDEO_3GPP,
        "m3u8" => APPLICATION_VND_APPLE_MPEGURL,

        "pdf" => APPLICATION_PDF,
        "ps" => APPLICATION_POSTSCRIPT,
        "rtf" => APPLICATION_RTF,
        "epub" => APPLICATION_EPUB_ZIP,
        "doc" => APPLICATION_MSWORD,
        "docx" => APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_DOCUMENT,
        "xls" => APPLICATION_VND_MS_EXCEL,
        "xlsx" => APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHEET,
        "ppt" => APPLICATION_VND_MS_POWERPOINT,
        "pptx" => APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_PRESENTATION,
        "odt" => APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT,
        "ods" => APPLICATION_VND_OASIS_OPENDOCUMENT_SPREADSHEET,
        "odp" => APPLICATION_VND_OASIS_OPENDOCUMENT_PRESENTATION,

        "zip" => APPLICATION_ZIP,
        "gz" => APPLICATION_GZIP,
        "zst" => APPLICATION_ZSTD,
        "tar" => APPLICATION_X_TAR,
        "jar" => APPLICATION_JAVA_ARCHIVE,
        "apk" => APPLICATION_VND_ANDROID_PACKAGE_ARCHIVE,
        "wasm" => APPLICATION_WASM,
        "cbor" => APPLICATION_CBOR,
        "glb" => MODEL_GLTF_BINARY,
        "gltf" => MODEL_GLTF_JSON,
        "stl" => MODEL_STL,
        "obj" => MODEL_OBJ,
        "3mf" => MODEL_3MF,
        _ => return None,
    };
    Some(media_type)
}

/// Media type for `path` based on its extension, `application/octet-stream`
/// when nothing matches.
pub fn guess(path: &str) -> &'static str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            from_extension(ext).unwrap_or(APPLICATION_OCTET_STREAM)
        }
        _ => APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::invariants;

    #[test]
    fn test_common_media_types() {
        assert_eq!(APPLICATION_JSON, "application/json");
        assert_eq!(TEXT_HTML, "text/html");
        assert_eq!(IMAGE_SVG_XML, "image/svg+xml");
        assert_eq!(APPLICATION_PROBLEM_JSON, "application/problem+json");
        assert_eq!(MULTIPART_FORM_DATA, "multipart/form-data");
        assert_eq!(VIDEO_H264, "video/H264");
    }

    #[test]
    fn test_table_invariants() {
        invariants::check_all(&MEDIA_TYPES);
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(MEDIA_TYPES.find("video/h264").map(|e| e.name), Some("VIDEO_H264"));
        assert_eq!(MEDIA_TYPES.find("Text/HTML").map(|e| e.value), Some(TEXT_HTML));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(from_extension("html"), Some(TEXT_HTML));
        assert_eq!(from_extension(".PNG"), Some(IMAGE_PNG));
        assert_eq!(from_extension("js"), Some(TEXT_JAVASCRIPT));
        assert_eq!(from_extension("unknown"), None);
    }

    #[test]
    fn test_every_extension_maps_into_the_table() {
        let extensions = [
            "htm", "html", "xhtml", "css", "js", "mjs", "json", "jsonld", "webmanifest", "xml",
            "atom", "rss", "txt", "csv", "tsv", "md", "markdown", "ics", "vcf", "vtt", "yaml",
            "yml", "sql", "png", "apng", "jpg", "jpeg", "gif", "svg", "webp", "avif", "heic",
            "heif", "jxl", "ico", "bmp", "tif", "tiff", "woff", "woff2", "ttf", "otf", "eot",
            "mp3", "m4a", "aac", "oga", "opus", "flac", "wav", "weba", "mp4", "m4v", "ogv",
            "ogg", "webm", "mkv", "mov", "mpeg", "mpg", "3gp", "m3u8", "pdf", "ps", "rtf",
            "epub", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "zip",
            "gz", "zst", "tar", "jar", "apk", "wasm", "cbor", "glb", "gltf", "stl", "obj",
            "3mf",
        ];
        for ext in extensions {
            let media_type = from_extension(ext).unwrap();
            assert!(MEDIA_TYPES.contains(media_type), "{ext} -> {media_type}");
        }
    }

    #[test]
    fn test_registry_snapshot_is_complete() {
        for media_type in [
            "application/xml-patch+xml",
            "application/alto-costmap+json",
            "audio/mp4a-latm",
            "application/dicom+json",
            "text/csv-schema",
            "application/vnd.ms-excel.sheet.macroenabled.12",
            "image/vnd.dwg",
        ] {
            assert!(MEDIA_TYPES.contains(media_type), "{media_type}");
        }
        assert!(MEDIA_TYPES.len() > 2000);
        assert_eq!(AUDIO_AMR_WB, "audio/AMR-WB");
        assert_eq!(AUDIO_AMR_WB_PLUS, "audio/amr-wb+");
    }

    #[test]
    fn test_guess_from_path() {
        assert_eq!(guess("./static/index.html"), TEXT_HTML);
        assert_eq!(guess("archive.tar"), APPLICATION_X_TAR);
        assert_eq!(guess("C:\\files\\report.PDF"), APPLICATION_PDF);
        assert_eq!(guess("README"), APPLICATION_OCTET_STREAM);
        assert_eq!(guess(".hidden"), APPLICATION_OCTET_STREAM);
        assert_eq!(guess("dir.d/noext"), APPLICATION_OCTET_STREAM);
    }
}
