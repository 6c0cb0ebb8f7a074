//! Synchronous views: direct model binding.

use std::fmt;
use std::sync::Arc;

use crate::binder::SyncBinder;
use crate::error::RenderError;
use crate::node::{BinderKind, Node, Template};
use crate::state::{Fragment, RenderState};

/// A template bound to synchronous binders.
///
/// Cheap to clone; the template and binder table are shared. Every render
/// call allocates its own output state, so one view serves unlimited
/// concurrent renders without interleaving their output.
pub struct View<T> {
    template: Arc<Template>,
    binders: Arc<[SyncBinder<T>]>,
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            binders: Arc::clone(&self.binders),
        }
    }
}

impl<T> View<T> {
    pub(crate) fn new(template: Template, binders: Vec<SyncBinder<T>>) -> Self {
        Self {
            template: Arc::new(template),
            binders: binders.into(),
        }
    }

    /// Render the template against `data`, returning the document text.
    ///
    /// Output is exactly what a manual [`doc`](crate::doc) construction
    /// inlining `data`'s markup at each binding point would produce.
    pub fn render(&self, data: &T) -> Result<String, RenderError> {
        let mut state = RenderState::default();
        write_nodes(&mut state, &self.template.roots, &self.binders, data)?;
        Ok(state.into_inner())
    }

    /// Render the template against `data` into `out`.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W, data: &T) -> Result<(), RenderError> {
        let rendered = self.render(data)?;
        out.write_str(&rendered)?;
        Ok(())
    }
}

fn write_nodes<T>(
    state: &mut RenderState<String>,
    nodes: &[Node],
    binders: &[SyncBinder<T>],
    data: &T,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Element(element) => {
                state.open_static_element(element)?;
                write_nodes(state, &element.children, binders, data)?;
                state.close_element()?;
            }
            Node::Text(content) => state.text(content)?,
            Node::Dynamic(point) => {
                debug_assert_eq!(point.kind, BinderKind::Sync);
                let mut fragment = Fragment::new(state);
                (binders[point.slot])(&mut fragment, data)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::container::Container;
    use crate::{doc, view};

    struct Track {
        artist: String,
        name: String,
        died_year: Option<i32>,
    }

    impl Track {
        fn new(artist: &str, name: &str, died_year: Option<i32>) -> Self {
            Self {
                artist: artist.to_owned(),
                name: name.to_owned(),
                died_year,
            }
        }
    }

    /// Manual construction with the track's fields inlined; the reference
    /// output the bound render must reproduce byte for byte.
    fn track_doc(track: &Track) -> String {
        let mut document = doc(String::new());
        document
            .html(|html| {
                html.body(|body| {
                    body.ul(|ul| {
                        ul.li(|li| li.text(&format!("Artist: {}", track.artist)))?;
                        ul.li(|li| li.text(&format!("Track: {}", track.name)))?;
                        if let Some(year) = track.died_year {
                            ul.li(|li| li.text(&format!("Died in {year}")))?;
                        }
                        Ok(())
                    })
                })
            })
            .unwrap();
        document.finish()
    }

    fn track_view() -> crate::View<Track> {
        view::<Track, _>(|t| {
            t.html(|html| {
                html.body(|body| {
                    body.ul(|ul| {
                        ul.dynamic(|ul, track: &Track| {
                            ul.li(|li| li.text(&format!("Artist: {}", track.artist)))?;
                            ul.li(|li| li.text(&format!("Track: {}", track.name)))?;
                            if let Some(year) = track.died_year {
                                ul.li(|li| li.text(&format!("Died in {year}")))?;
                            }
                            Ok(())
                        })
                    })
                })
            })
        })
        .unwrap()
    }

    #[test]
    fn test_render_matches_manual_construction() {
        let track = Track::new("David Bowie", "Space Oddity", Some(2016));
        let rendered = track_view().render(&track).unwrap();
        assert_eq!(rendered, track_doc(&track));
        assert!(rendered.contains("<li>Artist: David Bowie</li>"));
        assert!(rendered.contains("<li>Track: Space Oddity</li>"));
        assert!(rendered.contains("<li>Died in 2016</li>"));
    }

    #[test]
    fn test_conditional_item_is_omitted_with_the_field() {
        let track = Track::new("U2", "Bad", None);
        let rendered = track_view().render(&track).unwrap();
        assert_eq!(rendered, track_doc(&track));
        assert!(!rendered.contains("Died in"));
    }

    #[test]
    fn test_loop_preserves_model_order() {
        let playlist = view::<Vec<Track>, _>(|t| {
            t.table(|table| {
                table.tr(|tr| {
                    tr.th(|th| th.text("Artist"))?;
                    tr.th(|th| th.text("Track"))
                })?;
                table.dynamic(|table, tracks: &Vec<Track>| {
                    for track in tracks {
                        table.tr(|tr| tr.td(|td| td.text(&track.artist)))?;
                        table.tr(|tr| tr.td(|td| td.text(&track.name)))?;
                    }
                    Ok(())
                })
            })
        })
        .unwrap();

        let tracks = vec![
            Track::new("David Bowie", "Space Oddity", Some(2016)),
            Track::new("U2", "Bad", None),
            Track::new("Queen", "Under Pressure", None),
        ];
        let rendered = playlist.render(&tracks).unwrap();
        let bowie = rendered.find("David Bowie").unwrap();
        let u2 = rendered.find("Bad").unwrap();
        let queen = rendered.find("Under Pressure").unwrap();
        assert!(bowie < u2 && u2 < queen);

        let empty = playlist.render(&Vec::new()).unwrap();
        assert_eq!(
            empty,
            "<table><tr><th>Artist</th><th>Track</th></tr></table>"
        );
    }

    #[test]
    fn test_two_renders_are_identical() {
        let track = Track::new("Queen", "Under Pressure", None);
        let view = track_view();
        assert_eq!(view.render(&track).unwrap(), view.render(&track).unwrap());
    }

    #[test]
    fn test_multiple_binding_points_each_see_the_model() {
        let greeting = view::<String, _>(|t| {
            t.div(|div| {
                div.h1(|h1| h1.dynamic(|h1, name: &String| h1.text(name)))?;
                div.p(|p| {
                    p.dynamic(|p, name: &String| p.text(&format!("Welcome back, {name}.")))
                })
            })
        })
        .unwrap();
        assert_eq!(
            greeting.render(&"Ada".to_owned()).unwrap(),
            "<div><h1>Ada</h1><p>Welcome back, Ada.</p></div>"
        );
    }

    #[test]
    fn test_write_to_appends_to_the_sink() {
        let track = Track::new("U2", "Bad", None);
        let view = track_view();
        let mut out = String::from("prefix:");
        view.write_to(&mut out, &track).unwrap();
        assert_eq!(out, format!("prefix:{}", track_doc(&track)));
    }

    #[test]
    fn test_concurrent_renders_do_not_interleave() {
        let view = track_view();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let view = view.clone();
                std::thread::spawn(move || {
                    let track = Track::new(&format!("artist-{i}"), &format!("track-{i}"), None);
                    (view.render(&track).unwrap(), track_doc(&track))
                })
            })
            .collect();
        for handle in handles {
            let (rendered, expected) = handle.join().unwrap();
            assert_eq!(rendered, expected);
        }
    }
}
