//! Global pointer tracking for the duration of one drag.
//!
//! A drag has to keep following the pointer after it leaves the container,
//! so moves and releases are observed on `window`. The listeners live in a
//! [`DragListeners`] value: creating it attaches them, dropping it detaches
//! every one of them.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent, TouchEvent, TouchList};

/// Events that end a drag wherever the pointer is.
const RELEASE_EVENTS: &[&str] = &["mouseup", "touchend", "touchcancel", "blur"];

/// The pointer a drag follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracked {
    Mouse,
    /// One finger, by `Touch.identifier`
    Touch(i32),
}

impl Tracked {
    pub fn from_touch(identifier: Option<i32>) -> Self {
        identifier.map_or(Self::Mouse, Self::Touch)
    }
}

fn touch_points(list: &TouchList) -> impl Iterator<Item = (i32, f64)> + '_ {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| (touch.identifier(), f64::from(touch.client_x())))
}

/// `clientX` of the tracked finger among the current touches.
fn tracked_touch_x(points: impl IntoIterator<Item = (i32, f64)>, tracked: Tracked) -> Option<f64> {
    let Tracked::Touch(id) = tracked else {
        return None;
    };
    points
        .into_iter()
        .find(|(identifier, _)| *identifier == id)
        .map(|(_, x)| x)
}

/// Whether the fingers that just lifted include the tracked one.
fn lifts_tracked(lifted: impl IntoIterator<Item = i32>, tracked: Tracked) -> bool {
    match tracked {
        Tracked::Touch(id) => lifted.into_iter().any(|identifier| identifier == id),
        Tracked::Mouse => false,
    }
}

/// Horizontal coordinate carried by a move event for the tracked pointer.
fn client_x(event: &Event, tracked: Tracked) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return (tracked == Tracked::Mouse).then(|| f64::from(mouse.client_x()));
    }
    let touch = event.dyn_ref::<TouchEvent>()?;
    tracked_touch_x(touch_points(&touch.touches()), tracked)
}

/// Touch releases only count for the tracked finger; every other release
/// event (mouse up, blur) ends the drag.
fn is_release(event: &Event, tracked: Tracked) -> bool {
    match event.dyn_ref::<TouchEvent>() {
        Some(touch) => lifts_tracked(
            touch_points(&touch.changed_touches()).map(|(id, _)| id),
            tracked,
        ),
        None => true,
    }
}

/// Scoped registration of the window-level drag listeners.
#[must_use = "listeners are removed as soon as this value is dropped"]
pub struct DragListeners {
    listeners: Vec<EventListener>,
}

impl DragListeners {
    /// Attach move and release listeners to `target` (normally `window`).
    ///
    /// `on_move` receives the `clientX` of the tracked pointer on every move
    /// it makes; `on_release` fires when that pointer is released or
    /// cancelled, or the window loses focus.
    pub fn attach<M, R>(target: &EventTarget, tracked: Tracked, on_move: M, on_release: R) -> Self
    where
        M: Fn(f64) + Clone + 'static,
        R: Fn() + Clone + 'static,
    {
        let mut listeners = Vec::with_capacity(2 + RELEASE_EVENTS.len());

        for name in ["mousemove", "touchmove"] {
            let on_move = on_move.clone();
            listeners.push(EventListener::new(target, name, move |event: &Event| {
                if let Some(x) = client_x(event, tracked) {
                    on_move(x);
                }
            }));
        }

        for name in RELEASE_EVENTS {
            let on_release = on_release.clone();
            listeners.push(EventListener::new(target, *name, move |event: &Event| {
                if is_release(event, tracked) {
                    on_release();
                }
            }));
        }

        tracing::trace!(count = listeners.len(), "drag listeners attached");
        Self { listeners }
    }

    /// Attach to the global `window`. Returns `None` outside a browser.
    pub fn attach_to_window<M, R>(tracked: Tracked, on_move: M, on_release: R) -> Option<Self>
    where
        M: Fn(f64) + Clone + 'static,
        R: Fn() + Clone + 'static,
    {
        let window = web_sys::window()?;
        Some(Self::attach(&window, tracked, on_move, on_release))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        tracing::trace!(count = self.listeners.len(), "drag listeners detached");
    }
}

impl std::fmt::Debug for DragListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_only_the_tracked_finger() {
        let points = [(3, 10.0), (7, 140.0)];
        assert_eq!(tracked_touch_x(points, Tracked::Touch(7)), Some(140.0));
        assert_eq!(tracked_touch_x(points, Tracked::Touch(3)), Some(10.0));
        assert_eq!(tracked_touch_x(points, Tracked::Touch(9)), None);
    }

    #[test]
    fn mouse_drag_ignores_touches() {
        assert_eq!(tracked_touch_x([(0, 10.0)], Tracked::Mouse), None);
        assert!(!lifts_tracked([0], Tracked::Mouse));
    }

    #[test]
    fn other_fingers_lifting_do_not_release() {
        assert!(!lifts_tracked([3], Tracked::Touch(7)));
        assert!(!lifts_tracked(std::iter::empty(), Tracked::Touch(7)));
        assert!(lifts_tracked([3, 7], Tracked::Touch(7)));
    }

    #[test]
    fn tracked_from_touch_identity() {
        assert_eq!(Tracked::from_touch(None), Tracked::Mouse);
        assert_eq!(Tracked::from_touch(Some(4)), Tracked::Touch(4));
    }
}
