// src/markup.rs
//
// Inspection of the pre-rendered HTML fragments stored in the document.
// Fragments are trusted and rendered verbatim elsewhere; this module only
// reads them, using quick-xml in a forgiving mode (unclosed <br>, HTML entities).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Class carried by inline footnote reference markers.
pub const FOOTNOTE_MARKER_CLASS: &str = "footnote-ref";
/// Attribute on a marker naming the referenced footnote id.
pub const FOOTNOTE_ID_ATTR: &str = "data-footnote";

fn reader_for(fragment: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(fragment);
    reader.trim_text(false);
    reader.check_end_names(false);
    reader
}

/// HTML named entities that appear in the converted sources, beyond the XML ones.
fn resolve_html_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        "shy" => Some(""),
        "bdquo" => Some("\u{201e}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "sbquo" => Some("\u{201a}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "laquo" => Some("\u{ab}"),
        "raquo" => Some("\u{bb}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "hellip" => Some("\u{2026}"),
        "sect" => Some("\u{a7}"),
        "auml" => Some("ä"),
        "ouml" => Some("ö"),
        "uuml" => Some("ü"),
        "Auml" => Some("Ä"),
        "Ouml" => Some("Ö"),
        "Uuml" => Some("Ü"),
        "szlig" => Some("ß"),
        "aelig" => Some("æ"),
        "oslash" => Some("ø"),
        "aring" => Some("å"),
        "AElig" => Some("Æ"),
        "Oslash" => Some("Ø"),
        "Aring" => Some("Å"),
        _ => None,
    }
}

fn resolve_char_ref(reference: &str) -> Option<char> {
    let hex = reference
        .strip_prefix('x')
        .or_else(|| reference.strip_prefix('X'));
    let code = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => reference.parse().ok()?,
    };
    char::from_u32(code)
}

/// Decode entity references one at a time. Unknown references and bare `&`
/// are kept as literal text.
fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let reference = tail[1..]
            .find(';')
            .map(|end| &tail[1..1 + end])
            .filter(|name| !name.is_empty() && name.len() <= 32 && !name.contains(char::is_whitespace));

        let decoded = reference.and_then(|name| match name.strip_prefix('#') {
            Some(num) => resolve_char_ref(num).map(String::from),
            None => resolve_html_entity(name).map(String::from),
        });

        match (reference, decoded) {
            (Some(name), Some(value)) => {
                out.push_str(&value);
                rest = &tail[name.len() + 2..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Strip all tags from a fragment and collapse whitespace.
///
/// Never fails: on malformed input the text read so far is returned.
pub fn plain_text(fragment: &str) -> String {
    let mut reader = reader_for(fragment);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(e)) => text.push_str(&decode_entities(&String::from_utf8_lossy(&e))),
            Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            // <br> separates words just like a line break would.
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) if e.name().as_ref() == b"br" => {
                text.push(' ');
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::debug!("stopped reading markup at {}: {}", reader.buffer_position(), e);
                break;
            }
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn marker_id(e: &BytesStart) -> Option<String> {
    let mut is_marker = false;
    let mut id = None;
    for attr in e.attributes().flatten() {
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => continue,
        };
        let key = attr.key.as_ref();
        if key == b"class" {
            is_marker = value
                .split_whitespace()
                .any(|c| c == FOOTNOTE_MARKER_CLASS);
        } else if key == FOOTNOTE_ID_ATTR.as_bytes() {
            id = Some(value.trim().to_string());
        }
    }
    if is_marker {
        id.filter(|id| !id.is_empty())
    } else {
        None
    }
}

/// Ids of all footnote reference markers in a fragment, in order of appearance.
pub fn footnote_references(fragment: &str) -> Vec<String> {
    let mut reader = reader_for(fragment);
    let mut ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if let Some(id) = marker_id(e) {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(plain_text("<h>A</h>"), "A");
        assert_eq!(
            plain_text(r#"Die <em>große</em> <span class="alt-term">Seele / Geist</span>"#),
            "Die große Seele / Geist"
        );
    }

    #[test]
    fn test_plain_text_resolves_entities() {
        assert_eq!(plain_text("&bdquo;Tro&ldquo; &ndash; Glaube"), "\u{201e}Tro\u{201c} \u{2013} Glaube");
        assert_eq!(plain_text("&#228;"), "ä");
        assert_eq!(plain_text("&#xE6;"), "æ");
        assert_eq!(plain_text("&Uuml;ber &aring;nden"), "Über ånden");
    }

    #[test]
    fn test_plain_text_keeps_bare_ampersand_and_unknown_entities() {
        assert_eq!(plain_text("Tro & Viden &ndash; Glaube"), "Tro & Viden \u{2013} Glaube");
        assert_eq!(plain_text("&unknown; &ndash; &amp"), "&unknown; \u{2013} &amp");
        assert_eq!(plain_text("A&B; &#xZZ; &mdash;"), "A&B; &#xZZ; \u{2014}");
    }

    #[test]
    fn test_plain_text_tolerates_html_void_elements() {
        assert_eq!(plain_text("Zeile eins<br>Zeile zwei"), "Zeile eins Zeile zwei");
        assert_eq!(plain_text("a<br/>b"), "a b");
    }

    #[test]
    fn test_plain_text_of_markup_only_is_empty() {
        assert_eq!(plain_text("<span></span>"), "");
        assert_eq!(plain_text("   "), "");
        assert_eq!(plain_text(""), "");
    }

    #[test]
    fn test_footnote_references() {
        let fragment = r##"Text<sup class="footnote-ref" data-footnote="3">3</sup> mehr
            <a class="x footnote-ref" data-footnote="12" href="#">12</a>
            <sup class="other" data-footnote="4">4</sup>"##;
        assert_eq!(footnote_references(fragment), vec!["3", "12"]);
    }

    #[test]
    fn test_footnote_references_without_id_are_ignored() {
        assert!(footnote_references(r#"<sup class="footnote-ref">?</sup>"#).is_empty());
        assert!(footnote_references("plain").is_empty());
    }
}
