//! Per-render output plumbing: the sink and the open-element stack.

use std::fmt;

use weft_markup::{Attr, Tag, write_attribute_value, write_text};

use crate::container::Container;
use crate::error::{RenderError, StructuralError};
use crate::node::Element;

/// One currently-open element during emission.
#[derive(Debug)]
struct OpenElement {
    tag: Tag,
    /// Whether the opening tag has been sealed with `>`. Set on first
    /// content; attributes are rejected afterwards.
    sealed: bool,
}

/// Mutable state of a single render invocation: the output sink plus the
/// stack of open elements mirroring the ancestor path of the traversal.
///
/// Allocated per render call and never shared between invocations, which is
/// what lets one template serve unlimited concurrent renders without locks.
#[derive(Debug)]
pub(crate) struct RenderState<W: fmt::Write> {
    out: W,
    open: Vec<OpenElement>,
}

impl Default for RenderState<String> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<W: fmt::Write> RenderState<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            open: Vec::new(),
        }
    }

    /// Emit `<tag` and push the element. The opening tag stays unsealed so
    /// attributes may follow until the element receives its first content.
    pub(crate) fn open_element(&mut self, tag: Tag) -> Result<(), RenderError> {
        self.seal()?;
        self.out.write_char('<')?;
        self.out.write_str(tag.name())?;
        self.open.push(OpenElement { tag, sealed: false });
        Ok(())
    }

    /// Emit ` name="value"` on the innermost open element.
    pub(crate) fn attribute(&mut self, attr: Attr, value: &str) -> Result<(), RenderError> {
        match self.open.last() {
            Some(element) if element.sealed => Err(StructuralError::AttributeAfterChild {
                tag: element.tag,
                attr,
            }
            .into()),
            Some(_) => {
                self.out.write_char(' ')?;
                self.out.write_str(attr.name())?;
                self.out.write_str("=\"")?;
                write_attribute_value(&mut self.out, value)?;
                self.out.write_char('"')?;
                Ok(())
            }
            None => Err(StructuralError::AttributeOutsideElement { attr }.into()),
        }
    }

    /// Emit escaped character content.
    pub(crate) fn text(&mut self, content: &str) -> Result<(), RenderError> {
        self.seal()?;
        write_text(&mut self.out, content)?;
        Ok(())
    }

    /// Seal the innermost element and pop it, emitting the closing tag
    /// unless the element is void.
    pub(crate) fn close_element(&mut self) -> Result<(), RenderError> {
        self.seal()?;
        let element = self.open.pop().ok_or(StructuralError::CloseWithoutOpen)?;
        if !element.tag.is_void() {
            self.out.write_str("</")?;
            self.out.write_str(element.tag.name())?;
            self.out.write_char('>')?;
        }
        Ok(())
    }

    /// Emit the opening tag and all build-time attributes of a static
    /// element.
    pub(crate) fn open_static_element(&mut self, element: &Element) -> Result<(), RenderError> {
        self.open_element(element.tag)?;
        for (attr, value) in &element.attributes {
            self.attribute(*attr, value)?;
        }
        Ok(())
    }

    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    /// Terminate the pending opening tag of the innermost element, if any.
    fn seal(&mut self) -> Result<(), RenderError> {
        if let Some(element) = self.open.last_mut()
            && !element.sealed
        {
            element.sealed = true;
            self.out.write_char('>')?;
        }
        Ok(())
    }
}

/// Handle to the live render position, handed to binders.
///
/// Markup appended through a fragment lands exactly where traversal paused,
/// between the binding point's preceding and following siblings.
pub struct Fragment<'a> {
    state: &'a mut RenderState<String>,
}

impl<'a> Fragment<'a> {
    pub(crate) fn new(state: &'a mut RenderState<String>) -> Self {
        Self { state }
    }
}

impl Container for Fragment<'_> {
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
