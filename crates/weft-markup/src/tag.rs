//! Element tag names.

use std::fmt;

/// An HTML element tag known to the builder vocabulary.
///
/// Covers the document, sectioning, table, and form subset the engine's
/// templates exercise. Void tags ([`Tag::is_void`]) emit no closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Body,
    Br,
    Caption,
    Div,
    Em,
    Form,
    H1,
    H2,
    H3,
    Head,
    Hr,
    Html,
    Img,
    Input,
    Label,
    Li,
    Link,
    Meta,
    Nav,
    Ol,
    P,
    Span,
    Strong,
    Table,
    Tbody,
    Td,
    Textarea,
    Th,
    Thead,
    Title,
    Tr,
    Ul,
}

impl Tag {
    /// The tag name as it appears in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::A => "a",
            Tag::Body => "body",
            Tag::Br => "br",
            Tag::Caption => "caption",
            Tag::Div => "div",
            Tag::Em => "em",
            Tag::Form => "form",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Head => "head",
            Tag::Hr => "hr",
            Tag::Html => "html",
            Tag::Img => "img",
            Tag::Input => "input",
            Tag::Label => "label",
            Tag::Li => "li",
            Tag::Link => "link",
            Tag::Meta => "meta",
            Tag::Nav => "nav",
            Tag::Ol => "ol",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Strong => "strong",
            Tag::Table => "table",
            Tag::Tbody => "tbody",
            Tag::Td => "td",
            Tag::Textarea => "textarea",
            Tag::Th => "th",
            Tag::Thead => "thead",
            Tag::Title => "title",
            Tag::Tr => "tr",
            Tag::Ul => "ul",
        }
    }

    /// Whether the element has no content and therefore no closing tag.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Tag::Br | Tag::Hr | Tag::Img | Tag::Input | Tag::Link | Tag::Meta
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::Div.name(), "div");
        assert_eq!(Tag::Textarea.name(), "textarea");
        assert_eq!(Tag::H2.name(), "h2");
    }

    #[test]
    fn test_void_tags() {
        assert!(Tag::Br.is_void());
        assert!(Tag::Input.is_void());
        assert!(Tag::Link.is_void());
        assert!(!Tag::Div.is_void());
        assert!(!Tag::Textarea.is_void());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Tag::Table.to_string(), "table");
    }
}
