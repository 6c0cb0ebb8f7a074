//! The shared construction surface.
//!
//! One trait, implemented by build-time template scopes, render-time
//! fragments, suspending scopes, and the manual document writer. Because
//! every surface speaks the same calls over the same emission primitives,
//! a manual construction and a bound render of the same structure produce
//! identical bytes.

use weft_markup::{Attr, Tag};

use crate::error::StructuralError;

/// A position that accepts markup: child elements, attributes, and text.
pub trait Container {
    /// Error raised by this surface. Build scopes raise [`StructuralError`]
    /// directly; render surfaces raise [`crate::RenderError`].
    type Error: From<StructuralError>;

    /// Open `tag` as a child of this container, run `fill` for its
    /// content, and close it deterministically when `fill` returns.
    fn element(
        &mut self,
        tag: Tag,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized;

    /// Set an attribute on the enclosing element.
    ///
    /// Fails with [`StructuralError::AttributeAfterChild`] once the element
    /// has received its first child or text.
    fn attribute(&mut self, attr: Attr, value: &str) -> Result<(), Self::Error>;

    /// Append escaped character content.
    fn text(&mut self, content: &str) -> Result<(), Self::Error>;

    // Element vocabulary. Void elements that commonly carry attributes
    // (input, img, link, meta) keep the fill block; bare ones don't.

    fn html(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Html, fill)
    }

    fn head(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Head, fill)
    }

    fn title(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Title, fill)
    }

    fn body(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Body, fill)
    }

    fn nav(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Nav, fill)
    }

    fn div(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Div, fill)
    }

    fn span(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Span, fill)
    }

    fn p(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::P, fill)
    }

    fn a(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::A, fill)
    }

    fn em(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Em, fill)
    }

    fn strong(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Strong, fill)
    }

    fn h1(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::H1, fill)
    }

    fn h2(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::H2, fill)
    }

    fn h3(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::H3, fill)
    }

    fn ul(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Ul, fill)
    }

    fn ol(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Ol, fill)
    }

    fn li(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Li, fill)
    }

    fn table(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Table, fill)
    }

    fn caption(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Caption, fill)
    }

    fn thead(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Thead, fill)
    }

    fn tbody(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Tbody, fill)
    }

    fn tr(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Tr, fill)
    }

    fn th(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Th, fill)
    }

    fn td(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Td, fill)
    }

    fn form(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Form, fill)
    }

    fn label(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Label, fill)
    }

    fn textarea(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Textarea, fill)
    }

    fn input(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Input, fill)
    }

    fn img(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Img, fill)
    }

    fn link(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Link, fill)
    }

    fn meta(
        &mut self,
        fill: impl FnOnce(&mut Self) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Meta, fill)
    }

    fn br(&mut self) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Br, |_| Ok(()))
    }

    fn hr(&mut self) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.element(Tag::Hr, |_| Ok(()))
    }

    // Attribute vocabulary.

    fn attr_action(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Action, value)
    }

    fn attr_alt(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Alt, value)
    }

    fn attr_class(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Class, value)
    }

    fn attr_cols(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Cols, value)
    }

    fn attr_href(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Href, value)
    }

    fn attr_id(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Id, value)
    }

    fn attr_lang(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Lang, value)
    }

    fn attr_method(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Method, value)
    }

    fn attr_name(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Name, value)
    }

    fn attr_placeholder(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Placeholder, value)
    }

    fn attr_rel(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Rel, value)
    }

    fn attr_rows(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Rows, value)
    }

    fn attr_src(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Src, value)
    }

    fn attr_style(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Style, value)
    }

    fn attr_title(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Title, value)
    }

    fn attr_type(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Type, value)
    }

    fn attr_value(&mut self, value: &str) -> Result<(), Self::Error> {
        self.attribute(Attr::Value, value)
    }
}
