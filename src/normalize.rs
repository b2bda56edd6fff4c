use std::fmt::Write;

/// Transliterates a string into a printable-ASCII-only escaped form.
///
/// Every character outside the printable ASCII range (`0x20..=0x7E`) is
/// rendered as an escape sequence instead of being dropped or folded:
///
/// - the classic control escapes `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`
/// - `\xNN` for the remaining C0 controls and DEL
/// - `\uNNNN` for code points in the Basic Multilingual Plane
/// - `\UNNNNNNNN` for code points above it
///
/// Hex digits are lowercase. The transformation is exact: no information is
/// discarded, so two distinct inputs never collapse into the same output.
///
/// # Examples
///
/// ```
/// use sanitize_core::ascii;
///
/// assert_eq!(ascii("plain"), "plain");
/// assert_eq!(ascii("scr\u{0130}pt"), r"scr\u0130pt");
/// assert_eq!(ascii("a\nb"), r"a\nb");
/// assert_eq!(ascii("\u{1F600}"), r"\U0001f600");
/// ```
pub fn ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if (' '..='~').contains(&c) {
            out.push(c);
            continue;
        }

        match c {
            '\u{07}' => out.push_str(r"\a"),
            '\u{08}' => out.push_str(r"\b"),
            '\u{0C}' => out.push_str(r"\f"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '\u{0B}' => out.push_str(r"\v"),
            _ => {
                let code = c as u32;
                // Writing to a String cannot fail.
                if code < 0x20 || code == 0x7F {
                    let _ = write!(out, r"\x{code:02x}");
                } else if code < 0x1_0000 {
                    let _ = write!(out, r"\u{code:04x}");
                } else {
                    let _ = write!(out, r"\U{code:08x}");
                }
            }
        }
    }

    out
}

/// Canonicalizes an untrusted identifier for policy matching.
///
/// Returns a lowercase version of the input that is immune to UTF-8 to ASCII
/// conversion tricks. Some non-ASCII code points case-fold into ASCII letters
/// (an uppercase dotted `I` look-alike in `scr\u{0130}pt` naively lowercases
/// into `script`), which would let a blocked name slip past a filter keyed on
/// the folded form. Escaping every non-ASCII character *first* via [`ascii`]
/// means the subsequent lowercasing only ever touches true ASCII, so the
/// look-alike stays visible as `scr\u0130pt`.
///
/// The result is also trimmed of surrounding whitespace. Empty input yields
/// empty output; already-printable-ASCII input is only lowercased and
/// trimmed. Unpaired surrogates cannot occur in a `&str`; the parser replaces
/// them with U+FFFD before text reaches this function.
///
/// Every attribute namespace, attribute key, and element name is passed
/// through this function before any policy sees it. This is not configurable.
///
/// # Examples
///
/// ```
/// use sanitize_core::normalize;
///
/// assert_eq!(normalize("STYLE"), "style");
/// assert_eq!(normalize("  href "), "href");
/// assert_eq!(normalize("scr\u{0130}pt"), r"scr\u0130pt");
/// assert_ne!(normalize("scr\u{0130}pt"), "script");
/// ```
pub fn normalize(input: &str) -> String {
    ascii(input).to_ascii_lowercase().trim().to_string()
}
