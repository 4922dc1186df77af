//! JSON text in the layout the agents' prompts and replies use:
//! `", "` and `": "` separators, non-ASCII escaped as `\uXXXX`.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` as single-line JSON with spaced separators
pub fn to_spaced_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_spaced_separators() {
        let text = to_spaced_string(&json!({"units": 10, "rents": [1, 2], "empty": {}})).unwrap();
        assert_eq!(text, r#"{"units": 10, "rents": [1, 2], "empty": {}}"#);
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let text = to_spaced_string(&json!({"city": "Zürich", "note": "a\"b", "x": "😀"})).unwrap();
        assert_eq!(
            text,
            r#"{"city": "Z\u00fcrich", "note": "a\"b", "x": "\ud83d\ude00"}"#
        );
    }
}
