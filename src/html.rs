//! Minimal HTML emission for tags whose names are only known at runtime.
//!
//! The `maud!` macro checks element names at compile time, which does not
//! work for user-configurable tags such as the alert header, so those are
//! built with [`Tag`] instead.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// Borrows the input when there is nothing to escape.
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\'']) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

/// An ordered set of HTML attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    inner: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Appends class tokens after any classes already present. Tokens are
    /// not de-duplicated.
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        match self.inner.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some(existing) => class.clone_into(existing),
            None => {
                self.inner.insert("class".to_string(), class.to_string());
            }
        }
    }

    /// Copies every attribute of `other` into `self`; `class` is appended to,
    /// everything else is overwritten.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in &other.inner {
            if key == "class" {
                self.add_class(value);
            } else {
                self.inner.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes ` key="value"` for each attribute. An empty `class` is left
    /// out.
    pub fn render_to(&self, out: &mut String) {
        for (key, value) in &self.inner {
            if key == "class" && value.is_empty() {
                continue;
            }
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single element with already-rendered content.
pub struct Tag<'a> {
    name: &'a str,
    attributes: &'a Attributes,
    content: &'a str,
    block: bool,
}

impl<'a> Tag<'a> {
    pub fn new(name: &'a str, attributes: &'a Attributes) -> Self {
        Self {
            name,
            attributes,
            content: "",
            block: false,
        }
    }

    /// Content is inserted as-is; escape it first if it is text.
    pub fn content(mut self, content: &'a str) -> Self {
        self.content = content;
        self
    }

    /// Puts the content on its own line between the opening and closing
    /// tags.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.name.len() * 2 + self.content.len() + 16,
        );
        out.push('<');
        out.push_str(self.name);
        self.attributes.render_to(&mut out);
        out.push('>');
        if self.block {
            out.push('\n');
            out.push_str(self.content);
            out.push('\n');
        } else {
            out.push_str(self.content);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_borrows_plain_text() {
        assert!(matches!(escape("Hello World"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn add_class_appends_without_dedup() {
        let mut attrs: Attributes = [("class", "a b")].into_iter().collect();
        attrs.add_class("b c");
        assert_eq!(attrs.get("class"), Some("a b b c"));
    }

    #[test]
    fn merge_overwrites_all_but_class() {
        let mut attrs: Attributes =
            [("class", "delete"), ("title", "x")].into_iter().collect();
        let other: Attributes =
            [("title", "y"), ("class", "is-large")].into_iter().collect();
        attrs.merge(&other);
        assert_eq!(attrs.get("title"), Some("y"));
        assert_eq!(attrs.get("class"), Some("delete is-large"));
    }

    #[test]
    fn renders_inline_and_block_tags() {
        let attrs: Attributes = [("class", "x"), ("data-v", "\"q\"")]
            .into_iter()
            .collect();
        assert_eq!(
            Tag::new("span", &attrs).content("hi").render(),
            r#"<span class="x" data-v="&quot;q&quot;">hi</span>"#
        );
        assert_eq!(
            Tag::new("div", &Attributes::new())
                .content("<p></p>")
                .block()
                .render(),
            "<div>\n<p></p>\n</div>"
        );
    }

    #[test]
    fn empty_class_is_omitted() {
        let attrs: Attributes = [("class", "")].into_iter().collect();
        assert_eq!(Tag::new("i", &attrs).render(), "<i></i>");
    }
}
