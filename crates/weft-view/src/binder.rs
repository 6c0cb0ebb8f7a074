//! Binder strategies: the function values that resolve dynamic binding
//! points at render time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::BoxFuture;
use tokio::sync::Notify;

use crate::error::RenderError;
use crate::node::BinderKind;
use crate::state::Fragment;
use crate::suspend_view::SuspendScope;

/// Synchronous binder: appends children for the model immediately.
pub type SyncBinder<T> =
    Box<dyn Fn(&mut Fragment<'_>, &T) -> Result<(), RenderError> + Send + Sync>;

/// Asynchronous binder: wires per-element rendering and completion handling
/// onto the per-render [`Subscription`].
///
/// The binder must arrange for the [`Resume`] signal to fire exactly once
/// when the stream completes; everything after the binding point is gated
/// on it.
pub type AsyncBinder<T> = Box<dyn Fn(&mut Subscription<T>, Resume) + Send + Sync>;

/// Suspending binder: pulls stream elements one at a time through the
/// [`SuspendScope`] and hands the scope back once the stream closes.
pub type SuspendBinder<T> = Box<
    dyn Fn(SuspendScope<T>) -> BoxFuture<'static, Result<SuspendScope<T>, RenderError>>
        + Send
        + Sync,
>;

/// A registered binder, tagged with its kind.
pub(crate) enum BinderSlot<T> {
    Sync(SyncBinder<T>),
    Async(AsyncBinder<T>),
    Suspend(SuspendBinder<T>),
}

impl<T> core::fmt::Debug for BinderSlot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("BinderSlot").field(&self.kind()).finish()
    }
}

impl<T> BinderSlot<T> {
    pub(crate) fn kind(&self) -> BinderKind {
        match self {
            BinderSlot::Sync(_) => BinderKind::Sync,
            BinderSlot::Async(_) => BinderKind::Async,
            BinderSlot::Suspend(_) => BinderKind::Suspend,
        }
    }

    pub(crate) fn into_sync(self) -> SyncBinder<T> {
        match self {
            BinderSlot::Sync(binder) => binder,
            BinderSlot::Async(_) | BinderSlot::Suspend(_) => {
                unreachable!("binder kind validated at registration")
            }
        }
    }

    pub(crate) fn into_async(self) -> AsyncBinder<T> {
        match self {
            BinderSlot::Async(binder) => binder,
            BinderSlot::Sync(_) | BinderSlot::Suspend(_) => {
                unreachable!("binder kind validated at registration")
            }
        }
    }

    pub(crate) fn into_suspend(self) -> SuspendBinder<T> {
        match self {
            BinderSlot::Suspend(binder) => binder,
            BinderSlot::Sync(_) | BinderSlot::Async(_) => {
                unreachable!("binder kind validated at registration")
            }
        }
    }
}

type OnNext<T> = Box<dyn FnMut(&mut Fragment<'_>, &T) -> Result<(), RenderError> + Send>;
type OnComplete = Box<dyn FnOnce() + Send>;

/// Per-render subscription an asynchronous binder wires its handlers onto.
///
/// The engine consumes the bound stream in emission order, invoking the
/// registered element renderer against the live render position for each
/// element and the completion handler when the stream finishes. A stream
/// error abandons the render before the completion handler runs.
pub struct Subscription<T> {
    pub(crate) on_next: Option<OnNext<T>>,
    pub(crate) on_complete: Option<OnComplete>,
}

impl<T> Subscription<T> {
    pub(crate) fn new() -> Self {
        Self {
            on_next: None,
            on_complete: None,
        }
    }

    /// Render markup for each element the stream pushes.
    pub fn on_next<F>(&mut self, render: F) -> &mut Self
    where
        F: FnMut(&mut Fragment<'_>, &T) -> Result<(), RenderError> + Send + 'static,
    {
        self.on_next = Some(Box::new(render));
        self
    }

    /// Run once when the stream completes; wire the completion signal here.
    pub fn on_complete<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(handler));
        self
    }
}

/// One-shot completion signal for asynchronous binding.
///
/// The render future completes only after this signal has fired. It fires
/// exactly once per render; a second [`Resume::complete`] is a caller bug
/// and panics at the call site rather than being ignored.
#[derive(Clone)]
pub struct Resume {
    inner: Arc<ResumeInner>,
}

struct ResumeInner {
    fired: AtomicBool,
    notify: Notify,
}

impl Resume {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(ResumeInner {
                fired: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    /// Signal that the bound stream has been fully rendered.
    ///
    /// # Panics
    ///
    /// Panics if the signal has already fired.
    pub fn complete(&self) {
        if self.inner.fired.swap(true, Ordering::AcqRel) {
            panic!("render completion signal fired twice");
        }
        self.inner.notify.notify_waiters();
    }

    /// Whether the signal has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.inner.fired.load(Ordering::Acquire)
    }

    /// Resolve once the signal fires, immediately if it already has.
    pub(crate) async fn wait(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_complete() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_fires_once() {
        let resume = Resume::new();
        assert!(!resume.is_complete());
        resume.complete();
        assert!(resume.is_complete());
    }

    #[test]
    #[should_panic(expected = "render completion signal fired twice")]
    fn test_second_complete_panics() {
        let resume = Resume::new();
        resume.complete();
        resume.complete();
    }

    #[tokio::test]
    async fn test_wait_resolves_after_fire() {
        let resume = Resume::new();
        let waiter = resume.clone();
        resume.complete();
        waiter.wait().await;
    }

    #[tokio::test]
    async fn test_wait_resolves_when_fired_from_another_task() {
        let resume = Resume::new();
        let remote = resume.clone();
        let handle = tokio::spawn(async move {
            tokio::task::yield_now().await;
            remote.complete();
        });
        resume.wait().await;
        handle.await.unwrap();
    }
}
