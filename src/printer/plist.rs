use std::{borrow::Cow, io};

use crate::value::Value;

use super::Printer;

const PUBLIC_ID: &str = "-//Apple//DTD PLIST 1.0//EN";
const SYSTEM_ID: &str = "http://www.apple.com/DTDs/PropertyList-1.0.dtd";

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode a {0} node as theme markup")]
    UnsupportedNode(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes a complete plist document: XML declaration, the fixed DOCTYPE and
/// a `plist` root element wrapping the encoded `root` node.
pub fn generate(
    p: &mut Printer<impl io::Write>,
    root: &Value,
) -> Result<(), EncodeError> {
    p.write_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(p, r#"<!DOCTYPE plist PUBLIC "{PUBLIC_ID}" "{SYSTEM_ID}">"#)?;
    p.write_line("<plist>")?;
    p.indent();
    encode(p, root)?;
    p.dedent();
    p.write_line("</plist>")?;
    Ok(())
}

/// Recursively encodes one node.
///
/// Dict entries come out as a `<key>` line immediately followed by the
/// encoded value; the consuming format pairs them by adjacency. Every scalar
/// is written as a `<string>` leaf, integers in decimal form. `Real` has no
/// textual form here and is a construction bug upstream.
fn encode(
    p: &mut Printer<impl io::Write>,
    node: &Value,
) -> Result<(), EncodeError> {
    match node {
        Value::Dict(entries) => {
            p.write_line("<dict>")?;
            p.indent();
            for (key, value) in entries {
                writeln!(p, "<key>{}</key>", escape(key))?;
                encode(p, value)?;
            }
            p.dedent();
            p.write_line("</dict>")?;
        }
        Value::Array(items) => {
            p.write_line("<array>")?;
            p.indent();
            for item in items {
                encode(p, item)?;
            }
            p.dedent();
            p.write_line("</array>")?;
        }
        Value::String(s) => {
            writeln!(p, "<string>{}</string>", escape(s))?;
        }
        Value::Integer(n) => {
            writeln!(p, "<string>{n}</string>")?;
        }
        Value::Real(_) => {
            return Err(EncodeError::UnsupportedNode(node.kind()));
        }
    }
    Ok(())
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::dict;

    fn encoded(node: &Value) -> String {
        let mut out = Vec::new();
        let mut p = Printer::new(&mut out);
        encode(&mut p, node).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dict_pairs_keys_and_values_in_order() {
        let node = dict! {
            "name" => "Comments",
            "scope" => "comment",
            "width" => 8,
        };
        assert_eq!(
            encoded(&node),
            "<dict>\n\
             \x20 <key>name</key>\n\
             \x20 <string>Comments</string>\n\
             \x20 <key>scope</key>\n\
             \x20 <string>comment</string>\n\
             \x20 <key>width</key>\n\
             \x20 <string>8</string>\n\
             </dict>\n"
        );
    }

    #[test]
    fn array_keeps_every_child_in_order() {
        let node = Value::from(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from(3),
        ]);
        assert_eq!(
            encoded(&node),
            "<array>\n\
             \x20 <string>a</string>\n\
             \x20 <string>b</string>\n\
             \x20 <string>3</string>\n\
             </array>\n"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let node = Value::from("Brian Mock <brian@mockbrian.com> & co");
        assert_eq!(
            encoded(&node),
            "<string>Brian Mock &lt;brian@mockbrian.com&gt; &amp; co</string>\n"
        );
    }

    #[test]
    fn real_nodes_are_rejected() {
        let mut p = Printer::new(Vec::new());
        let err = encode(&mut p, &Value::from(0.5)).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedNode("real")));
    }

    #[test]
    fn document_wrapper() {
        let mut out = Vec::new();
        let mut p = Printer::new(&mut out);
        generate(&mut p, &dict! { "name" => "Flat Light" }).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
        );
        assert_eq!(
            lines.next(),
            Some(
                r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#
            )
        );
        assert_eq!(lines.next(), Some("<plist>"));
        assert_eq!(text.lines().last(), Some("</plist>"));
    }
}
