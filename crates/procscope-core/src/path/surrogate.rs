//! Lossless bytes to UTF-16 codec escaping invalid UTF-8 as lone surrogates.
//!
//! A byte `b` that is part of an invalid UTF-8 sequence is always `>= 0x80`,
//! so it becomes one of `U+DC80..=U+DCFF`. Valid UTF-8 never decodes to a
//! surrogate, which makes the escape unambiguous.

/// Decodes `bytes` into UTF-16 code units, escaping invalid bytes.
pub fn escape(bytes: &[u8]) -> Vec<u16>
{
    let mut units = Vec::with_capacity(bytes.len());

    for chunk in bytes.utf8_chunks() {
        units.extend(chunk.valid().encode_utf16());
        units.extend(chunk.invalid().iter().map(|&byte| 0xDC00 | u16::from(byte)));
    }

    units
}

/// Encodes UTF-16 code units back into bytes, reversing [`escape`].
///
/// Lone surrogates outside of the escape range are emitted in their
/// generalized UTF-8 (WTF-8) form, so the function accepts any `u16` slice.
pub fn unescape(units: &[u16]) -> Vec<u8>
{
    let mut bytes = Vec::with_capacity(units.len());

    for unit in char::decode_utf16(units.iter().copied()) {
        match unit {
            Ok(char) => {
                let mut buf = [0; 4];
                bytes.extend_from_slice(char.encode_utf8(&mut buf).as_bytes());
            }
            Err(error) => {
                let surrogate = error.unpaired_surrogate();
                if (0xDC80..=0xDCFF).contains(&surrogate) {
                    bytes.push((surrogate & 0xFF) as u8);
                } else {
                    bytes.push(0xE0 | (surrogate >> 12) as u8);
                    bytes.push(0x80 | ((surrogate >> 6) & 0x3F) as u8);
                    bytes.push(0x80 | (surrogate & 0x3F) as u8);
                }
            }
        }
    }

    bytes
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_escape_ascii()
    {
        assert_eq!(escape(b"C:\\foo"), "C:\\foo".encode_utf16().collect::<Vec<_>>());
    }

    #[test]
    fn test_escape_invalid_bytes()
    {
        assert_eq!(escape(b"a\xffb"), vec![0x61, 0xDCFF, 0x62]);
        assert_eq!(escape(b"\xc3"), vec![0xDCC3]);
    }

    #[test]
    fn test_escape_keeps_supplementary_planes()
    {
        // U+1F980, a surrogate pair in UTF-16.
        assert_eq!(escape("🦀".as_bytes()), vec![0xD83E, 0xDD80]);
    }

    #[test]
    fn test_round_trip_mixed()
    {
        let bytes: &[u8] = b"caf\xc3\xa9 \x80\xbf \xed\xb2\x80 \xf0\x9f\xa6\x80";
        assert_eq!(unescape(&escape(bytes)), bytes);
    }

    #[test]
    fn test_unescape_foreign_lone_surrogate()
    {
        assert_eq!(unescape(&[0xD800]), vec![0xED, 0xA0, 0x80]);
    }
}
