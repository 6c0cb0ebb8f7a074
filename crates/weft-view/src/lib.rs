//! Markup templates with a static structure and dynamic binding points.
//!
//! A template is built once as an immutable tree and shared by every
//! render. Positions whose content depends on runtime data are marked as
//! binding points and resolved under one of three temporal disciplines:
//!
//! - [`view`]: the model is supplied directly and bound synchronously.
//! - [`view_async`]: elements arrive on a stream; traversal past the
//!   binding point is gated on an explicit one-shot completion signal.
//! - [`view_suspend`]: the render itself suspends, pulling one element at a
//!   time with natural backpressure.
//!
//! All three produce byte-identical output to the manual [`doc`] writer for
//! the same data: every surface emits through the same primitives, so the
//! manual construction doubles as the correctness oracle for the bound
//! ones.
//!
//! # Example
//!
//! ```
//! use weft_view::{Container, view};
//!
//! struct Track {
//!     artist: String,
//!     name: String,
//! }
//!
//! let track_view = view::<Track, _>(|t| {
//!     t.ul(|ul| {
//!         ul.dynamic(|ul, track: &Track| {
//!             ul.li(|li| li.text(&format!("Artist: {}", track.artist)))?;
//!             ul.li(|li| li.text(&format!("Track: {}", track.name)))
//!         })
//!     })
//! })?;
//!
//! let track = Track {
//!     artist: "David Bowie".to_owned(),
//!     name: "Space Oddity".to_owned(),
//! };
//! assert_eq!(
//!     track_view.render(&track)?,
//!     "<ul><li>Artist: David Bowie</li><li>Track: Space Oddity</li></ul>",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod async_view;
mod binder;
mod builder;
mod container;
mod doc;
mod error;
mod node;
mod state;
mod suspend_view;
mod view;

pub use async_view::AsyncView;
pub use binder::{AsyncBinder, Resume, Subscription, SuspendBinder, SyncBinder};
pub use builder::TemplateScope;
pub use container::Container;
pub use doc::{Document, doc};
pub use error::{RenderError, StreamError, StructuralError};
pub use node::{BinderKind, Template};
pub use state::Fragment;
pub use suspend_view::{SuspendScope, SuspendView};
pub use view::View;

pub use weft_markup::{Attr, Tag};

use binder::BinderSlot;

/// Build a synchronous view from a template block.
///
/// The block runs once; dynamic content is described with
/// [`TemplateScope::dynamic`] and resolved at each
/// [`render`](View::render) against the supplied model.
pub fn view<T, F>(template: F) -> Result<View<T>, StructuralError>
where
    F: FnOnce(&mut TemplateScope<'_, T>) -> Result<(), StructuralError>,
{
    let (template, slots) = builder::build(BinderKind::Sync, template)?;
    let binders: Vec<_> = slots.into_iter().map(BinderSlot::into_sync).collect();
    tracing::debug!(
        nodes = template.node_count(),
        bindings = binders.len(),
        "Built synchronous view"
    );
    Ok(View::new(template, binders))
}

/// Build an asynchronous view from a template block.
///
/// The stream binding point is described with [`TemplateScope::awaiting`]
/// and resolved by [`render_async`](AsyncView::render_async).
pub fn view_async<T, F>(template: F) -> Result<AsyncView<T>, StructuralError>
where
    T: Send + 'static,
    F: FnOnce(&mut TemplateScope<'_, T>) -> Result<(), StructuralError>,
{
    let (template, slots) = builder::build(BinderKind::Async, template)?;
    let binders: Vec<_> = slots.into_iter().map(BinderSlot::into_async).collect();
    tracing::debug!(
        nodes = template.node_count(),
        bindings = binders.len(),
        "Built asynchronous view"
    );
    Ok(AsyncView::new(template, binders))
}

/// Build a suspending view from a template block.
///
/// The stream binding point is described with
/// [`TemplateScope::suspending`] and resolved by the suspending
/// [`render`](SuspendView::render).
pub fn view_suspend<T, F>(template: F) -> Result<SuspendView<T>, StructuralError>
where
    T: Send + 'static,
    F: FnOnce(&mut TemplateScope<'_, T>) -> Result<(), StructuralError>,
{
    let (template, slots) = builder::build(BinderKind::Suspend, template)?;
    let binders: Vec<_> = slots.into_iter().map(BinderSlot::into_suspend).collect();
    tracing::debug!(
        nodes = template.node_count(),
        bindings = binders.len(),
        "Built suspending view"
    );
    Ok(SuspendView::new(template, binders))
}
