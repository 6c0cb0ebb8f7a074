//! Asynchronous views: push-stream binding gated on an explicit completion
//! signal.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, Stream, StreamExt, TryStreamExt};

use crate::binder::{AsyncBinder, Resume, Subscription};
use crate::error::{RenderError, StreamError};
use crate::node::{BinderKind, Node, Template};
use crate::state::{Fragment, RenderState};

/// A template bound to an asynchronous binder.
///
/// Cheap to clone. Each [`render_async`](AsyncView::render_async) call owns
/// an independent future, so several renders of one view may be in flight
/// at once, each against its own stream.
pub struct AsyncView<T> {
    template: Arc<Template>,
    binders: Arc<[AsyncBinder<T>]>,
}

impl<T> Clone for AsyncView<T> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            binders: Arc::clone(&self.binders),
        }
    }
}

/// The per-render stream slot and completion signal threaded through the
/// traversal.
struct StreamCursor<T> {
    stream: Option<BoxStream<'static, Result<T, StreamError>>>,
    resume: Resume,
}

impl<T: Send + 'static> AsyncView<T> {
    pub(crate) fn new(template: Template, binders: Vec<AsyncBinder<T>>) -> Self {
        Self {
            template: Arc::new(template),
            binders: binders.into(),
        }
    }

    /// Render against `stream`.
    ///
    /// The returned future is lazy, independent of `self`, and completes
    /// only after the stream has been consumed and the binder's completion
    /// signal has fired; the text it yields equals the synchronous
    /// reference over the same elements in emission order. Dropping the
    /// future drops the stream, ending the subscription.
    pub fn render_async<St>(
        &self,
        stream: St,
    ) -> impl Future<Output = Result<String, RenderError>> + Send + use<T, St>
    where
        St: Stream<Item = Result<T, StreamError>> + Send + 'static,
    {
        let template = Arc::clone(&self.template);
        let binders = Arc::clone(&self.binders);
        let mut cursor = StreamCursor {
            stream: Some(stream.boxed()),
            resume: Resume::new(),
        };
        async move {
            let mut state = RenderState::default();
            write_nodes(&mut state, &template.roots, &binders, &mut cursor).await?;
            Ok(state.into_inner())
        }
    }
}

fn write_nodes<'a, T: Send + 'static>(
    state: &'a mut RenderState<String>,
    nodes: &'a [Node],
    binders: &'a [AsyncBinder<T>],
    cursor: &'a mut StreamCursor<T>,
) -> BoxFuture<'a, Result<(), RenderError>> {
    async move {
        for node in nodes {
            match node {
                Node::Element(element) => {
                    state.open_static_element(element)?;
                    write_nodes(state, &element.children, binders, cursor).await?;
                    state.close_element()?;
                }
                Node::Text(content) => state.text(content)?,
                Node::Dynamic(point) => {
                    debug_assert_eq!(point.kind, BinderKind::Async);
                    let mut subscription = Subscription::new();
                    (binders[point.slot])(&mut subscription, cursor.resume.clone());
                    pump(state, subscription, cursor).await?;
                }
            }
        }
        Ok(())
    }
    .boxed()
}

/// Consume the stream in emission order, rendering each element against the
/// live position, then gate on the completion signal.
async fn pump<T>(
    state: &mut RenderState<String>,
    subscription: Subscription<T>,
    cursor: &mut StreamCursor<T>,
) -> Result<(), RenderError> {
    let mut stream = cursor
        .stream
        .take()
        .expect("a template holds at most one stream binding point");
    let Subscription {
        mut on_next,
        on_complete,
    } = subscription;

    let mut rendered = 0_usize;
    while let Some(element) = stream.try_next().await.map_err(RenderError::Stream)? {
        if let Some(render) = on_next.as_mut() {
            let mut fragment = Fragment::new(state);
            render(&mut fragment, &element)?;
        }
        rendered += 1;
    }
    if let Some(complete) = on_complete {
        complete();
    }
    tracing::debug!(elements = rendered, "Stream completed, awaiting resume signal");
    cursor.resume.wait().await;
    Ok(())
}
