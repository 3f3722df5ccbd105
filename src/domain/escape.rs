//! Decoding of backslash escapes in mount-table style paths.
//!
//! `/proc/mounts` and fstab write a space as `\040`, an ampersand as `\046`
//! and a backslash as `\134`. The path is decoded as the body of a
//! double-quoted string literal; anything that is not a valid literal body
//! leaves the path untouched.

use std::str::Chars;

/// Decode escape sequences in `path`, or return it unchanged if it does not
/// decode cleanly.
pub fn unescape_path(path: &str) -> String {
    match decode_literal_body(path) {
        Some(decoded) => decoded,
        None => {
            tracing::trace!(path, "path is not a valid escaped literal, keeping it verbatim");
            path.to_string()
        }
    }
}

fn decode_literal_body(input: &str) -> Option<String> {
    if input.contains('\n') {
        return None;
    }
    if !input.contains('\\') && !input.contains('"') {
        return Some(input.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => decode_escape(&mut chars, &mut out)?,
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    // \x and octal escapes emit raw bytes. Sequences that do not form UTF-8
    // cannot live in a String, so they count as a decoding failure here even
    // though a byte-string unquote would accept them.
    String::from_utf8(out).ok()
}

fn decode_escape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Option<()> {
    let byte = match chars.next()? {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        'x' => read_digits(chars, 2, 16)? as u8,
        'u' => return push_scalar(read_digits(chars, 4, 16)?, out),
        'U' => return push_scalar(read_digits(chars, 8, 16)?, out),
        first @ '0'..='7' => {
            let rest = read_digits(chars, 2, 8)?;
            let value = (first as u32 - '0' as u32) * 64 + rest;
            if value > 0xff {
                return None;
            }
            value as u8
        }
        _ => return None,
    };
    out.push(byte);
    Some(())
}

fn read_digits(chars: &mut Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value * radix + digit;
    }
    Some(value)
}

fn push_scalar(code: u32, out: &mut Vec<u8>) -> Option<()> {
    let c = char::from_u32(code)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octal_escapes() {
        assert_eq!(unescape_path("\\040test"), " test");
        assert_eq!(unescape_path("\\046"), "&");
        assert_eq!(unescape_path("\\134"), "\\");
        assert_eq!(unescape_path("/mnt/usb\\040drive\\046more"), "/mnt/usb drive&more");
    }

    #[test]
    fn test_plain_paths_are_unchanged() {
        assert_eq!(unescape_path("plain/path"), "plain/path");
        assert_eq!(unescape_path("/"), "/");
        assert_eq!(unescape_path(""), "");
        assert_eq!(unescape_path("/home/müller/dokumente"), "/home/müller/dokumente");
    }

    #[test]
    fn test_malformed_escapes_keep_original() {
        for input in [
            "trailing\\",
            "\\q",
            "\\04",
            "\\400",
            "\\x4",
            "\\xzz",
            "\\ud800",
            "\\U00110000",
            "a\"b",
            "line\\040one\ntwo",
            "\\'",
        ] {
            assert_eq!(unescape_path(input), input, "input {:?}", input);
        }
    }

    #[test]
    fn test_other_literal_escapes() {
        assert_eq!(unescape_path("tab\\there"), "tab\there");
        assert_eq!(unescape_path("q\\\"uote"), "q\"uote");
        assert_eq!(unescape_path("\\x41\\u00e9\\U0001F600"), "Aé😀");
    }

    #[test]
    fn test_octal_encoded_utf8_bytes() {
        // "é" written byte by byte
        assert_eq!(unescape_path("caf\\303\\251"), "café");
    }

    #[test]
    fn test_invalid_utf8_bytes_keep_original() {
        assert_eq!(unescape_path("bad\\377"), "bad\\377");
        assert_eq!(unescape_path("\\xff"), "\\xff");
    }
}
