//! Minimal HTML scanner separating text nodes from markup
//!
//! Only the structure the typographer needs is recognised: tags (with
//! quoted attribute values), comments, doctype and processing
//! instructions. Text inside raw elements is never touched.

use memchr::{memchr, memmem};

/// Elements whose content passes through untouched
const RAW_ELEMENTS: &[&str] = &["script", "style", "pre", "code", "textarea"];

/// A slice of the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Tag, comment, doctype or processing instruction
    Markup(&'a str),
    /// Content of a raw element
    Raw(&'a str),
    /// Text node
    Text(&'a str),
}

/// Split `html` into consecutive segments that concatenate back to it
pub(crate) fn segments(html: &str) -> Vec<Segment<'_>> {
    let bytes = html.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let lt = pos + offset;
        let Some(tag) = scan_markup(bytes, lt) else {
            // Stray '<' belongs to the text
            pos = lt + 1;
            continue;
        };

        if lt > text_start {
            out.push(Segment::Text(&html[text_start..lt]));
        }
        out.push(Segment::Markup(&html[lt..tag.end]));
        pos = tag.end;

        if let Some(name) = tag.raw_element {
            let close = find_closing_tag(bytes, pos, name).unwrap_or(bytes.len());
            if close > pos {
                out.push(Segment::Raw(&html[pos..close]));
            }
            pos = close;
        }
        text_start = pos;
    }

    if text_start < html.len() {
        out.push(Segment::Text(&html[text_start..]));
    }
    out
}

/// Rewrite every text node with `process`, copying everything else
pub(crate) fn process_document<F>(html: &str, mut process: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(html.len() + html.len() / 8);
    for segment in segments(html) {
        match segment {
            Segment::Markup(markup) => out.push_str(markup),
            Segment::Raw(raw) => out.push_str(raw),
            Segment::Text(text) => out.push_str(&process(text)),
        }
    }
    out
}

struct TagSpan {
    end: usize,
    raw_element: Option<&'static str>,
}

fn scan_markup(bytes: &[u8], lt: usize) -> Option<TagSpan> {
    let rest = &bytes[lt..];
    if rest.starts_with(b"<!--") {
        let end = memmem::find(&rest[4..], b"-->")
            .map(|i| lt + 4 + i + 3)
            .unwrap_or(bytes.len());
        return Some(TagSpan { end, raw_element: None });
    }

    match rest.get(1) {
        Some(b'!') | Some(b'?') => {
            let end = memchr(b'>', rest).map(|i| lt + i + 1)?;
            Some(TagSpan { end, raw_element: None })
        }
        Some(b'/') if rest.get(2).is_some_and(u8::is_ascii_alphabetic) => {
            let end = tag_end(bytes, lt + 2)?;
            Some(TagSpan { end, raw_element: None })
        }
        Some(ch) if ch.is_ascii_alphabetic() => {
            let end = tag_end(bytes, lt + 1)?;
            let name_len = rest[1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
                .count();
            let name = &rest[1..1 + name_len];
            let self_closing = end >= 2 && bytes[end - 2] == b'/';
            let raw_element = if self_closing {
                None
            } else {
                RAW_ELEMENTS
                    .iter()
                    .copied()
                    .find(|raw| raw.as_bytes().eq_ignore_ascii_case(name))
            };
            Some(TagSpan { end, raw_element })
        }
        _ => None,
    }
}

/// Index just past the `>` closing a tag, skipping quoted attribute values
fn tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None => {}
        }
    }
    None
}

/// Start of `</name` at or after `from`, matched case-insensitively
fn find_closing_tag(bytes: &[u8], from: usize, name: &str) -> Option<usize> {
    let name = name.as_bytes();
    let mut pos = from;
    while let Some(offset) = memmem::find(&bytes[pos..], b"</") {
        let start = pos + offset;
        let candidate = &bytes[start + 2..];
        let name_matches = candidate
            .get(..name.len())
            .is_some_and(|c| c.eq_ignore_ascii_case(name));
        let terminated = candidate
            .get(name.len())
            .map_or(true, |b| *b == b'>' || *b == b'/' || b.is_ascii_whitespace());
        if name_matches && terminated {
            return Some(start);
        }
        pos = start + 2;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::*;

    #[test]
    fn test_text_and_tags() {
        assert_eq!(
            segments("<p>Текст <b>жирный</b>.</p>"),
            vec![
                Markup("<p>"),
                Text("Текст "),
                Markup("<b>"),
                Text("жирный"),
                Markup("</b>"),
                Text("."),
                Markup("</p>"),
            ]
        );
    }

    #[test]
    fn test_quoted_attribute_with_angle_bracket() {
        assert_eq!(
            segments(r#"<a title="a > b">ссылка</a>"#),
            vec![Markup(r#"<a title="a > b">"#), Text("ссылка"), Markup("</a>")]
        );
    }

    #[test]
    fn test_raw_elements() {
        assert_eq!(
            segments("<pre>\"как есть\"</pre> и <SCRIPT>if (a < b) {}</Script>"),
            vec![
                Markup("<pre>"),
                Raw("\"как есть\""),
                Markup("</pre>"),
                Text(" и "),
                Markup("<SCRIPT>"),
                Raw("if (a < b) {}"),
                Markup("</Script>"),
            ]
        );
        assert_eq!(
            segments("<code>x</codex>"),
            vec![Markup("<code>"), Raw("x</codex>")]
        );
    }

    #[test]
    fn test_comments_and_declarations() {
        assert_eq!(
            segments("<!DOCTYPE html><!-- a <b> --><?xml?>текст"),
            vec![
                Markup("<!DOCTYPE html>"),
                Markup("<!-- a <b> -->"),
                Markup("<?xml?>"),
                Text("текст"),
            ]
        );
    }

    #[test]
    fn test_stray_angle_brackets_stay_in_text() {
        assert_eq!(segments("1 < 2 и 3 > 2"), vec![Text("1 < 2 и 3 > 2")]);
        assert_eq!(segments("a <b"), vec![Text("a <b")]);
        assert_eq!(segments(""), Vec::<Segment<'_>>::new());
    }

    #[test]
    fn test_self_closing_raw_element() {
        assert_eq!(
            segments("<code/>текст"),
            vec![Markup("<code/>"), Text("текст")]
        );
    }

    #[test]
    fn test_process_document_touches_text_only() {
        let out = process_document("<p class=\"x\">ab</p><style>p{}</style>", |t| t.to_uppercase());
        assert_eq!(out, "<p class=\"x\">AB</p><style>p{}</style>");
    }
}
