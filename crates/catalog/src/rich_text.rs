//! Helpers for the rich-text "additional info" sections of a product.

/// Normalize a section title for lookup: lower-cased, all whitespace removed.
///
/// `"Short Desc"` and `"shortdesc"` both normalize to `"shortdesc"`.
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Remove markup tags and decode the common entities, then trim.
///
/// A tag is `<`, at least one character other than `>`, then `>`. Anything
/// else, such as `<>` or a `<` that is never closed, is kept as text.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                text.push('<');
                rest = after;
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
