//! Error taxonomy for template construction and rendering.

use weft_markup::{Attr, Tag};

use crate::node::BinderKind;

/// Structural misuse of a construction surface.
///
/// Raised synchronously at build or render time and never recovered; a
/// template or render that hits one is abandoned.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    /// Attribute set after the element already received its first child.
    #[error("attribute `{attr}` set on <{tag}> after its first child")]
    AttributeAfterChild { tag: Tag, attr: Attr },

    /// Attribute set with no element open.
    #[error("attribute `{attr}` set outside of any element")]
    AttributeOutsideElement { attr: Attr },

    /// Close requested with no element open.
    #[error("close requested with no element open")]
    CloseWithoutOpen,

    /// Binder registered against a template of a different kind.
    #[error("{found} binder registered in a {declared} template")]
    BinderKindMismatch {
        declared: BinderKind,
        found: BinderKind,
    },

    /// A stream-consuming template declared a second stream binding point.
    #[error("template already has a stream binding point; a stream binds to exactly one")]
    MultipleStreamBindings,
}

/// Error signalled by a stream element during async or suspending rendering.
pub type StreamError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single render invocation.
///
/// Never partial: a failed render yields no output string.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Structural misuse detected while emitting.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// The output sink rejected a write.
    #[error("output sink rejected a write: {0}")]
    Sink(#[from] std::fmt::Error),

    /// The element stream signalled an error.
    #[error("element stream failed: {0}")]
    Stream(#[source] StreamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_messages_name_the_site() {
        let err = StructuralError::AttributeAfterChild {
            tag: Tag::Textarea,
            attr: Attr::Id,
        };
        assert_eq!(
            err.to_string(),
            "attribute `id` set on <textarea> after its first child"
        );

        let err = StructuralError::BinderKindMismatch {
            declared: BinderKind::Sync,
            found: BinderKind::Async,
        };
        assert_eq!(err.to_string(), "async binder registered in a sync template");
    }
}
