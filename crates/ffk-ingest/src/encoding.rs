//! Text decoding for delimited exports.

use encoding_rs::Encoding;

/// Resolves an encoding label such as `latin-1`, `utf-8` or `utf-8-sig`.
///
/// Codec spellings such as `latin_1` or `latin-1` that are not WHATWG labels
/// are retried with separators removed. A `-sig` suffix is accepted for
/// byte-order-marked UTF-8; decoding strips a BOM in any case.
pub fn resolve_encoding(label: &str) -> Option<&'static Encoding> {
    let lowered = label.trim().to_ascii_lowercase().replace('_', "-");
    let base = lowered.strip_suffix("-sig").unwrap_or(&lowered);
    Encoding::for_label(base.as_bytes()).or_else(|| {
        let compact = base.replace('-', "");
        Encoding::for_label(compact.as_bytes())
    })
}

/// Decodes `bytes`, returning the text and whether malformed sequences were replaced.
pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> (String, bool) {
    let (text, _, had_errors) = encoding.decode(bytes);
    (text.into_owned(), had_errors)
}
