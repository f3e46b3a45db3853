use web_sys::{window, Document, Element};

const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// How a `<meta>` tag is keyed: `name="..."` for plain tags, `property="..."`
/// for Open Graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaKey<'a> {
    Name(&'a str),
    Property(&'a str),
}

impl<'a> MetaKey<'a> {
    fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    fn value(self) -> &'a str {
        match self {
            MetaKey::Name(value) | MetaKey::Property(value) => value,
        }
    }

    fn selector(self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), self.value())
    }
}

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Existing `<meta>` matching `key`, or a fresh one appended to `<head>`.
fn find_or_create_meta(doc: &Document, key: MetaKey<'_>) -> Option<Element> {
    if let Some(found) = doc.query_selector(&key.selector()).ok().flatten() {
        return Some(found);
    }
    let head = doc.query_selector("head").ok().flatten()?;
    let created = doc.create_element("meta").ok()?;
    head.append_child(&created).ok()?;
    Some(created)
}

fn set_meta(doc: &Document, key: MetaKey<'_>, content: &str) {
    let Some(element) = find_or_create_meta(doc, key) else {
        return;
    };
    let _ = element.set_attribute(key.attribute(), key.value());
    let _ = element.set_attribute("content", content);
}

pub(crate) fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    let compact = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= max_chars {
        return compact;
    }
    let mut out: String = compact.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Title, description and Open Graph tags for the guide page.
pub fn apply_guide_seo(title: &str, summary: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", "en");
    }

    let description = normalize_meta_text(summary, META_DESCRIPTION_MAX_CHARS);
    let tags = [
        (MetaKey::Name("description"), description.as_str()),
        (MetaKey::Property("og:title"), title),
        (MetaKey::Property("og:description"), description.as_str()),
        (MetaKey::Property("og:type"), "article"),
    ];
    for (key, content) in tags {
        set_meta(&doc, key, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_text_collapses_whitespace() {
        assert_eq!(normalize_meta_text("  Blue \n Screen\tof  Death ", 160), "Blue Screen of Death");
    }

    #[test]
    fn meta_text_is_truncated_on_char_boundary() {
        assert_eq!(normalize_meta_text("Open resource ↗ now", 15), "Open resource ↗...");
        assert_eq!(normalize_meta_text("short", 15), "short");
    }

    #[test]
    fn meta_selector_uses_the_key_attribute() {
        assert_eq!(MetaKey::Name("description").selector(), "meta[name=\"description\"]");
        assert_eq!(MetaKey::Property("og:type").selector(), "meta[property=\"og:type\"]");
        assert_eq!(MetaKey::Property("og:title").attribute(), "property");
    }
}
