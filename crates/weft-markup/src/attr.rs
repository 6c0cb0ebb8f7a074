//! Attribute names.

use std::fmt;

/// An attribute name known to the builder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Action,
    Alt,
    Class,
    Cols,
    Href,
    Id,
    Lang,
    Method,
    Name,
    Placeholder,
    Rel,
    Rows,
    Src,
    Style,
    Title,
    Type,
    Value,
}

impl Attr {
    /// The attribute name as it appears in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attr::Action => "action",
            Attr::Alt => "alt",
            Attr::Class => "class",
            Attr::Cols => "cols",
            Attr::Href => "href",
            Attr::Id => "id",
            Attr::Lang => "lang",
            Attr::Method => "method",
            Attr::Name => "name",
            Attr::Placeholder => "placeholder",
            Attr::Rel => "rel",
            Attr::Rows => "rows",
            Attr::Src => "src",
            Attr::Style => "style",
            Attr::Title => "title",
            Attr::Type => "type",
            Attr::Value => "value",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
