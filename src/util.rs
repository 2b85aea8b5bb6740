//! Utility functions shared by the importer and the binary.

use std::borrow::Cow;

/// Get a time-based seed value for pseudo-random number generation.
pub fn time_seed_nanos() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345)
}

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `\usepackage[...]{inputenc}`)
/// 3. Falls back to Windows-1252 (common in older manuscripts, superset of ISO-8859-1)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

// ============================================================================
// Encoding Detection
// ============================================================================

/// Extract the input encoding from a `\usepackage[...]{inputenc}` declaration.
///
/// Only the first 4 KiB are checked; the declaration lives in the preamble.
/// LaTeX option names are mapped onto WHATWG labels that `encoding_rs`
/// understands.
pub fn extract_inputenc_encoding(bytes: &[u8]) -> Option<&'static str> {
    let check_len = bytes.len().min(4096);
    let prefix = &bytes[..check_len];

    let pkg_pos = memchr::memmem::find(prefix, b"{inputenc}")?;
    let before = &prefix[..pkg_pos];

    // The option list is the last `[...]` before `{inputenc}`
    let close = before.iter().rposition(|&b| b == b']')?;
    let open = before[..close].iter().rposition(|&b| b == b'[')?;
    let option = std::str::from_utf8(&before[open + 1..close]).ok()?.trim();

    match option.to_ascii_lowercase().as_str() {
        "utf8" | "utf8x" => Some("utf-8"),
        "latin1" => Some("iso-8859-1"),
        "latin9" => Some("iso-8859-15"),
        "latin2" => Some("iso-8859-2"),
        "ansinew" | "cp1252" => Some("windows-1252"),
        "cp1250" => Some("windows-1250"),
        "koi8-r" => Some("koi8-r"),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
