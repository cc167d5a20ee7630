//! Plain-text projection of markup content.
//!
//! The projection feeds search indexing and the plain-text clipboard payload.
//! Line breaks become one newline; block elements are followed by one newline;
//! every other tag is dropped and its text kept in document order. Character
//! entities are decoded in a single pass, so `&amp;lt;` becomes `&lt;`.

/// Longest entity body we try to decode, e.g. `#x1F600`.
const MAX_ENTITY_LEN: usize = 10;

/// Elements whose closing tag ends a line.
const BLOCK_ELEMENTS: &[&str] = &[
    "p",
    "div",
    "li",
    "tr",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
];

/// Project markup content to plain text.
pub fn to_plain_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut rest = content;
    // No `<` at or past the last `>` can open a tag.
    let tags_end = content.rfind('>').unwrap_or(0);

    while let Some(open) = rest.find('<') {
        if content.len() - rest.len() + open >= tags_end {
            break;
        }
        text.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match tag_body(candidate) {
            Some((body, consumed)) => {
                if ends_line(body) {
                    text.push('\n');
                }
                rest = &candidate[consumed..];
            }
            None => {
                // Not a tag, keep the `<` as text.
                text.push('<');
                rest = &candidate[1..];
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text)
}

/// If `input` starts with a tag, return its inner text and the bytes it spans.
fn tag_body(input: &str) -> Option<(&str, usize)> {
    let after_open = input.get(1..)?;
    let first = after_open.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '/' || first == '!') {
        return None;
    }

    let close = after_open.find('>')?;
    Some((&after_open[..close], close + 2))
}

/// Whether the tag with this inner text produces a newline.
fn ends_line(body: &str) -> bool {
    let closing = body.starts_with('/');
    let name: String = body
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if name == "br" {
        return true;
    }
    closing && BLOCK_ELEMENTS.contains(&name.as_str())
}

/// Decode character entities; unknown entities pass through unchanged.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let decoded = candidate
            .as_bytes()
            .iter()
            .take(MAX_ENTITY_LEN + 2)
            .position(|&b| b == b';')
            .and_then(|end| decode_entity(&candidate[1..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);

    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
