//! Content-Type (MIME) string constants.
//!
//! Pure data: named `&'static str` values for the common MIME types, for use
//! in `"Content-Type: …"` request headers and when matching response headers.
//! They carry no behavior.

/// Java archive files.
pub const APPLICATION_JAVA_ARCHIVE: &str = "application/java-archive";
/// Electronic data interchange (EDI X12) business documents.
pub const APPLICATION_EDI_X12: &str = "application/EDI-X12";
/// EDIFACT international trade documents.
pub const APPLICATION_EDIFACT: &str = "application/EDIFACT";
/// JavaScript sources.
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
/// Generic binary data.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
/// Ogg multimedia container.
pub const APPLICATION_OGG: &str = "application/ogg";
/// Portable Document Format.
pub const APPLICATION_PDF: &str = "application/pdf";
/// XHTML documents.
pub const APPLICATION_XHTML_XML: &str = "application/xhtml+xml";
/// Shockwave Flash (obsolete).
pub const APPLICATION_X_SHOCKWAVE_FLASH: &str = "application/x-shockwave-flash";
/// JSON payloads.
pub const APPLICATION_JSON: &str = "application/json";
/// JSON for Linked Data.
pub const APPLICATION_LD_JSON: &str = "application/ld+json";
/// XML payloads.
pub const APPLICATION_XML: &str = "application/xml";
/// ZIP archives.
pub const APPLICATION_ZIP: &str = "application/zip";
/// URL-encoded HTML form bodies.
pub const APPLICATION_X_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// MP3 audio.
pub const AUDIO_MPEG: &str = "audio/mpeg";
/// Windows Media audio.
pub const AUDIO_X_MS_WMA: &str = "audio/x-ms-wma";
/// RealAudio.
pub const AUDIO_VND_RN_REALAUDIO: &str = "audio/vnd.rn-realaudio";
/// WAV audio.
pub const AUDIO_X_WAV: &str = "audio/x-wav";

/// GIF images.
pub const IMAGE_GIF: &str = "image/gif";
/// JPEG images.
pub const IMAGE_JPEG: &str = "image/jpeg";
/// PNG images.
pub const IMAGE_PNG: &str = "image/png";
/// TIFF images.
pub const IMAGE_TIFF: &str = "image/tiff";
/// Microsoft icon format.
pub const IMAGE_VND_MICROSOFT_ICON: &str = "image/vnd.microsoft.icon";
/// Icon format (unregistered legacy alias).
pub const IMAGE_X_ICON: &str = "image/x-icon";
/// DjVu scanned documents.
pub const IMAGE_VND_DJVU: &str = "image/vnd.djvu";
/// SVG vector images.
pub const IMAGE_SVG_XML: &str = "image/svg+xml";

/// Multipart body with independent parts.
pub const MULTIPART_MIXED: &str = "multipart/mixed";
/// Multipart body with alternative representations of the same content.
pub const MULTIPART_ALTERNATIVE: &str = "multipart/alternative";
/// Multipart body with inter-referencing parts (used by MHTML mail).
pub const MULTIPART_RELATED: &str = "multipart/related";
/// HTML form bodies with file uploads.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// CSS stylesheets.
pub const TEXT_CSS: &str = "text/css";
/// Comma-separated values.
pub const TEXT_CSV: &str = "text/csv";
/// HTML documents.
pub const TEXT_HTML: &str = "text/html";
/// JavaScript sources (obsolete alias of `application/javascript`).
pub const TEXT_JAVASCRIPT: &str = "text/javascript";
/// Plain text.
pub const TEXT_PLAIN: &str = "text/plain";
/// XML rendered as readable text.
pub const TEXT_XML: &str = "text/xml";

/// MPEG video.
pub const VIDEO_MPEG: &str = "video/mpeg";
/// MP4 video.
pub const VIDEO_MP4: &str = "video/mp4";
/// QuickTime video.
pub const VIDEO_QUICKTIME: &str = "video/quicktime";
/// Windows Media video.
pub const VIDEO_X_MS_WMV: &str = "video/x-ms-wmv";
/// AVI video.
pub const VIDEO_X_MSVIDEO: &str = "video/x-msvideo";
/// Flash video (obsolete).
pub const VIDEO_X_FLV: &str = "video/x-flv";
/// WebM video.
pub const VIDEO_WEBM: &str = "video/webm";

/// Android application packages.
pub const APPLICATION_VND_ANDROID_PACKAGE_ARCHIVE: &str = "application/vnd.android.package-archive";
/// OpenDocument text.
pub const APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT: &str = "application/vnd.oasis.opendocument.text";
/// OpenDocument spreadsheets.
pub const APPLICATION_VND_OASIS_OPENDOCUMENT_SPREADSHEET: &str =
    "application/vnd.oasis.opendocument.spreadsheet";
/// OpenDocument presentations.
pub const APPLICATION_VND_OASIS_OPENDOCUMENT_PRESENTATION: &str =
    "application/vnd.oasis.opendocument.presentation";
/// OpenDocument graphics.
pub const APPLICATION_VND_OASIS_OPENDOCUMENT_GRAPHICS: &str =
    "application/vnd.oasis.opendocument.graphics";
/// Legacy Excel workbooks (.xls).
pub const APPLICATION_VND_MS_EXCEL: &str = "application/vnd.ms-excel";
/// Office Open XML workbooks (.xlsx).
pub const APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_SPREADSHEETML_SHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Legacy PowerPoint presentations (.ppt).
pub const APPLICATION_VND_MS_POWERPOINT: &str = "application/vnd.ms-powerpoint";
/// Office Open XML presentations (.pptx).
pub const APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_PRESENTATIONML_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
/// Legacy Word documents (.doc).
pub const APPLICATION_MSWORD: &str = "application/msword";
/// Office Open XML documents (.docx).
pub const APPLICATION_VND_OPENXMLFORMATS_OFFICEDOCUMENT_WORDPROCESSINGML_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Mozilla XUL interface definitions.
pub const APPLICATION_VND_MOZILLA_XUL_XML: &str = "application/vnd.mozilla.xul+xml";
