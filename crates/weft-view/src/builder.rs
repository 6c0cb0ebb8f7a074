//! Build-time construction of the immutable template tree.

use std::future::Future;

use futures::FutureExt;
use weft_markup::{Attr, Tag};

use crate::binder::{BinderSlot, Resume, Subscription};
use crate::container::Container;
use crate::error::{RenderError, StructuralError};
use crate::node::{BinderKind, DynamicPoint, Element, Node, Template};
use crate::state::Fragment;
use crate::suspend_view::SuspendScope;

/// Tree and binder table under construction.
struct TemplateBuilder<T> {
    roots: Vec<Node>,
    stack: Vec<Element>,
    declared: BinderKind,
    slots: Vec<BinderSlot<T>>,
}

impl<T> TemplateBuilder<T> {
    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}

/// Scope over one template construction block.
///
/// Static structure goes through the [`Container`] surface; dynamic binding
/// points are inserted with [`dynamic`](TemplateScope::dynamic),
/// [`awaiting`](TemplateScope::awaiting), or
/// [`suspending`](TemplateScope::suspending), whichever matches the kind of
/// view being built.
pub struct TemplateScope<'a, T> {
    builder: &'a mut TemplateBuilder<T>,
}

impl<T> Container for TemplateScope<'_, T> {
    type Error = StructuralError;

    fn element(
        &mut self,
        tag: Tag,
        fill: impl FnOnce(&mut Self) -> Result<(), StructuralError>,
    ) -> Result<(), StructuralError> {
        self.builder.stack.push(Element::new(tag));
        fill(self)?;
        let element = self
            .builder
            .stack
            .pop()
            .expect("construction scope closes the element it opened");
        self.builder.attach(Node::Element(element));
        Ok(())
    }

    fn attribute(&mut self, attr: Attr, value: &str) -> Result<(), StructuralError> {
        match self.builder.stack.last_mut() {
            Some(element) if !element.children.is_empty() => {
                Err(StructuralError::AttributeAfterChild {
                    tag: element.tag,
                    attr,
                })
            }
            Some(element) => {
                element.attributes.push((attr, value.to_owned()));
                Ok(())
            }
            None => Err(StructuralError::AttributeOutsideElement { attr }),
        }
    }

    fn text(&mut self, content: &str) -> Result<(), StructuralError> {
        self.builder.attach(Node::Text(content.to_owned()));
        Ok(())
    }
}

impl<T> TemplateScope<'_, T> {
    /// Insert a binding point resolved synchronously from the model.
    pub fn dynamic<F>(&mut self, binder: F) -> Result<(), StructuralError>
    where
        F: Fn(&mut Fragment<'_>, &T) -> Result<(), RenderError> + Send + Sync + 'static,
    {
        self.register(BinderSlot::Sync(Box::new(binder)))
    }

    /// Insert a binding point resolved against a push stream with an
    /// explicit completion signal.
    pub fn awaiting<F>(&mut self, binder: F) -> Result<(), StructuralError>
    where
        F: Fn(&mut Subscription<T>, Resume) + Send + Sync + 'static,
    {
        self.register(BinderSlot::Async(Box::new(binder)))
    }

    /// Insert a binding point resolved by cooperatively awaiting stream
    /// elements one at a time.
    pub fn suspending<F, Fut>(&mut self, binder: F) -> Result<(), StructuralError>
    where
        F: Fn(SuspendScope<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<SuspendScope<T>, RenderError>> + Send + 'static,
    {
        self.register(BinderSlot::Suspend(Box::new(move |scope| {
            binder(scope).boxed()
        })))
    }

    fn register(&mut self, slot: BinderSlot<T>) -> Result<(), StructuralError> {
        let kind = slot.kind();
        let declared = self.builder.declared;
        if kind != declared {
            return Err(StructuralError::BinderKindMismatch {
                declared,
                found: kind,
            });
        }
        if matches!(kind, BinderKind::Async | BinderKind::Suspend)
            && !self.builder.slots.is_empty()
        {
            return Err(StructuralError::MultipleStreamBindings);
        }
        let dynamic_point = DynamicPoint {
            slot: self.builder.slots.len(),
            kind,
        };
        self.builder.slots.push(slot);
        self.builder.attach(Node::Dynamic(dynamic_point));
        Ok(())
    }
}

/// Run a template block against a fresh builder of the given kind.
pub(crate) fn build<T, F>(
    declared: BinderKind,
    template: F,
) -> Result<(Template, Vec<BinderSlot<T>>), StructuralError>
where
    F: FnOnce(&mut TemplateScope<'_, T>) -> Result<(), StructuralError>,
{
    let mut builder = TemplateBuilder {
        roots: Vec::new(),
        stack: Vec::new(),
        declared,
        slots: Vec::new(),
    };
    let mut scope = TemplateScope {
        builder: &mut builder,
    };
    template(&mut scope)?;
    debug_assert!(builder.stack.is_empty());
    Ok((
        Template {
            roots: builder.roots,
        },
        builder.slots,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_nested_elements() {
        let (template, slots) = build::<(), _>(BinderKind::Sync, |t| {
            t.div(|div| {
                div.attr_class("container")?;
                div.span(|span| span.text("hello"))
            })
        })
        .unwrap();
        assert!(slots.is_empty());
        assert_eq!(template.node_count(), 3);
    }

    #[test]
    fn test_attribute_after_child_fails_at_build_time() {
        let err = build::<(), _>(BinderKind::Sync, |t| {
            t.div(|div| {
                div.span(|span| span.text("first"))?;
                div.attr_class("late")
            })
        })
        .unwrap_err();
        assert!(matches!(
            err,
            StructuralError::AttributeAfterChild {
                tag: Tag::Div,
                attr: Attr::Class,
            }
        ));
    }

    #[test]
    fn test_attribute_outside_element_fails_at_build_time() {
        let err = build::<(), _>(BinderKind::Sync, |t| t.attr_id("root")).unwrap_err();
        assert!(matches!(
            err,
            StructuralError::AttributeOutsideElement { attr: Attr::Id }
        ));
    }

    #[test]
    fn test_binder_kind_is_validated_at_registration() {
        let err = build::<u32, _>(BinderKind::Sync, |t| {
            t.awaiting(|_subscription, _resume| {})
        })
        .unwrap_err();
        assert!(matches!(
            err,
            StructuralError::BinderKindMismatch {
                declared: BinderKind::Sync,
                found: BinderKind::Async,
            }
        ));
    }

    #[test]
    fn test_second_stream_binding_is_rejected() {
        let err = build::<u32, _>(BinderKind::Async, |t| {
            t.awaiting(|_subscription, _resume| {})?;
            t.awaiting(|_subscription, _resume| {})
        })
        .unwrap_err();
        assert!(matches!(err, StructuralError::MultipleStreamBindings));
    }

    #[test]
    fn test_multiple_sync_bindings_are_allowed() {
        let (template, slots) = build::<u32, _>(BinderKind::Sync, |t| {
            t.div(|div| div.dynamic(|fragment, n| fragment.text(&n.to_string())))?;
            t.div(|div| div.dynamic(|fragment, n| fragment.text(&(n + 1).to_string())))
        })
        .unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(template.node_count(), 4);
    }
}
