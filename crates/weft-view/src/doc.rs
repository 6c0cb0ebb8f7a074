//! One-shot manual document construction.

use std::fmt;

use weft_markup::{Attr, Tag};

use crate::container::Container;
use crate::error::RenderError;
use crate::state::RenderState;

/// Immediate writer for a fully-manual document with no binding points.
///
/// Construction happens directly against the sink through the same
/// [`Container`] surface and emission primitives the bound views use, which
/// is what makes a manual construction the byte-for-byte reference for a
/// bound render of the same structure.
#[derive(Debug)]
pub struct Document<W: fmt::Write> {
    state: RenderState<W>,
}

/// Start a manual document over `out`.
///
/// Stateless beyond the returned writer; each call owns its own emission
/// state, so documents may be built concurrently against separate sinks.
pub fn doc<W: fmt::Write>(out: W) -> Document<W> {
    Document {
        state: RenderState::new(out),
    }
}

impl<W: fmt::Write> Document<W> {
    /// Hand the sink back once construction is done.
    pub fn finish(self) -> W {
        self.state.into_inner()
    }
}

impl<W: fmt::Write> Container for Document<W> {
    type Error = RenderError;

    fn element(
        &mut self,
        tag: Tag,
        fill: impl FnOnce(&mut Self) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        self.state.open_element(tag)?;
        fill(self)?;
        self.state.close_element()
    }

    fn attribute(&mut self, attr: Attr, value: &str) -> Result<(), RenderError> {
        self.state.attribute(attr, value)
    }

    fn text(&mut self, content: &str) -> Result<(), RenderError> {
        self.state.text(content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::StructuralError;

    #[test]
    fn test_manual_track_document() {
        let mut document = doc(String::new());
        document
            .html(|html| {
                html.body(|body| {
                    body.ul(|ul| {
                        ul.li(|li| li.text("Artist: David Bowie"))?;
                        ul.li(|li| li.text("Track: Space Oddity"))?;
                        ul.li(|li| li.text("Died in 2016"))
                    })
                })
            })
            .unwrap();
        assert_eq!(
            document.finish(),
            "<html><body><ul><li>Artist: David Bowie</li>\
             <li>Track: Space Oddity</li><li>Died in 2016</li></ul></body></html>"
        );
    }

    #[test]
    fn test_writes_through_a_borrowed_sink() {
        let mut out = String::new();
        let mut document = doc(&mut out);
        document
            .div(|div| {
                div.attr_class("form-group")?;
                div.label(|label| label.text("Name"))?;
                div.input(|input| {
                    input.attr_type("text")?;
                    input.attr_id("name")?;
                    input.attr_value("Ze Manel")
                })
            })
            .unwrap();
        drop(document);
        assert_eq!(
            out,
            r#"<div class="form-group"><label>Name</label><input type="text" id="name" value="Ze Manel"></div>"#
        );
    }

    #[test]
    fn test_attribute_after_content_fails_like_a_misused_form() {
        let mut document = doc(String::new());
        let err = document
            .form(|form| {
                form.textarea(|textarea| {
                    textarea.attr_rows("50")?;
                    textarea.attr_cols("50")?;
                    textarea.text("my simple text")?;
                    textarea.attr_id("id")?;
                    textarea.attr_name("name")
                })
            })
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Structural(StructuralError::AttributeAfterChild {
                tag: Tag::Textarea,
                attr: Attr::Id,
            })
        ));
    }

    #[test]
    fn test_empty_document_finishes_empty() {
        assert_eq!(doc(String::new()).finish(), "");
    }
}
