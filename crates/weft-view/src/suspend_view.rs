//! Suspending views: cooperative, one-element-at-a-time stream binding.

use std::future::Future;
use std::mem;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, Stream, StreamExt, TryStreamExt};

use weft_markup::{Attr, Tag};

use crate::binder::SuspendBinder;
use crate::container::Container;
use crate::error::{RenderError, StreamError};
use crate::node::{BinderKind, Node, Template};
use crate::state::RenderState;

/// A template bound to a suspending binder.
pub struct SuspendView<T> {
    template: Arc<Template>,
    binders: Arc<[SuspendBinder<T>]>,
}

impl<T> Clone for SuspendView<T> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            binders: Arc::clone(&self.binders),
        }
    }
}

/// Scope owned by a suspending binder for the extent of its binding point.
///
/// Holds the render position and the element stream: markup appended
/// between [`next`](SuspendScope::next) calls lands exactly at the binding
/// point, and traversal does not continue until the binder hands the scope
/// back. Element N+1 is therefore never pulled before element N's subtree
/// has been fully emitted, and no two element renders ever overlap.
pub struct SuspendScope<T> {
    state: RenderState<String>,
    stream: BoxStream<'static, Result<T, StreamError>>,
}

impl<T> SuspendScope<T> {
    /// Await the next stream element; `None` once the stream closes.
    pub async fn next(&mut self) -> Result<Option<T>, RenderError> {
        self.stream.try_next().await.map_err(RenderError::Stream)
    }
}

impl<T> Container for SuspendScope<T> {
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

impl<T: Send + 'static> SuspendView<T> {
    pub(crate) fn new(template: Template, binders: Vec<SuspendBinder<T>>) -> Self {
        Self {
            template: Arc::new(template),
            binders: binders.into(),
        }
    }

    /// Render against `stream`, suspending at each awaited element.
    ///
    /// The returned future is independent of `self` and yields text equal
    /// to the synchronous reference over the same elements in the same
    /// order. Dropping the future drops the stream, so no orphaned pull
    /// remains pending after cancellation.
    pub fn render<St>(
        &self,
        stream: St,
    ) -> impl Future<Output = Result<String, RenderError>> + Send + use<T, St>
    where
        St: Stream<Item = Result<T, StreamError>> + Send + 'static,
    {
        let template = Arc::clone(&self.template);
        let binders = Arc::clone(&self.binders);
        let mut slot = Some(stream.boxed());
        async move {
            let mut state = RenderState::default();
            write_nodes(&mut state, &template.roots, &binders, &mut slot).await?;
            Ok(state.into_inner())
        }
    }
}

fn write_nodes<'a, T: Send + 'static>(
    state: &'a mut RenderState<String>,
    nodes: &'a [Node],
    binders: &'a [SuspendBinder<T>],
    stream: &'a mut Option<BoxStream<'static, Result<T, StreamError>>>,
) -> BoxFuture<'a, Result<(), RenderError>> {
    async move {
        for node in nodes {
            match node {
                Node::Element(element) => {
                    state.open_static_element(element)?;
                    write_nodes(state, &element.children, binders, stream).await?;
                    state.close_element()?;
                }
                Node::Text(content) => state.text(content)?,
                Node::Dynamic(point) => {
                    debug_assert_eq!(point.kind, BinderKind::Suspend);
                    let scope = SuspendScope {
                        state: mem::take(state),
                        stream: stream
                            .take()
                            .expect("a template holds at most one stream binding point"),
                    };
                    let scope = (binders[point.slot])(scope).await?;
                    *state = scope.state;
                }
            }
        }
        Ok(())
    }
    .boxed()
}
