//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and never starts
//! a drag from an interactive control.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 8.0;

/// Tags that keep their own click behaviour
const INTERACTIVE_TAGS: [&str; 6] = ["INPUT", "BUTTON", "A", "LABEL", "SELECT", "TEXTAREA"];

/// DnD state signals
///
/// `K` identifies the dragged element, `T` the thing it is dropped on.
pub struct DndSignals<K: 'static, T: 'static> {
    pub dragging_id: RwSignal<Option<K>>,
    pub drop_target: RwSignal<Option<T>>,
    pub drag_just_ended: RwSignal<bool>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id: RwSignal<Option<K>>,
    /// Start position for movement detection
    pub start_pos: RwSignal<(i32, i32)>,
    pub threshold_px: f64,
}

impl<K: 'static, T: 'static> Clone for DndSignals<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for DndSignals<K, T> {}

pub fn create_dnd_signals<K, T>(threshold_px: f64) -> DndSignals<K, T>
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending_id: RwSignal::new(None),
        start_pos: RwSignal::new((0, 0)),
        threshold_px,
    }
}

/// True once the pointer is at least `threshold_px` away from where it went down
pub fn exceeds_threshold(dx: i32, dy: i32, threshold_px: f64) -> bool {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    (dx * dx + dy * dy).sqrt() >= threshold_px
}

/// Checkbox, button, link, label and form fields
pub fn is_interactive_tag(tag_name: &str) -> bool {
    INTERACTIVE_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Whether the event target (or any ancestor) is an interactive control
fn originates_on_control(target: Option<web_sys::EventTarget>) -> bool {
    let mut element = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    while let Some(el) = element {
        if is_interactive_tag(&el.tag_name()) {
            return true;
        }
        element = el.parent_element();
    }
    false
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    dnd.dragging_id.set(None);
    dnd.drop_target.set(None);
    dnd.pending_id.set(None);
    dnd.drag_just_ended.set(true);

    // Swallow the click that follows the mouseup
    let clear = dnd.drag_just_ended;
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(100).await;
        clear.set(false);
    });
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if originates_on_control(ev.target()) {
            return;
        }
        dnd.pending_id.set(Some(id.clone()));
        dnd.start_pos.set((ev.client_x(), ev.client_y()));
    }
}

/// Bind document mousemove - starts drag if moved enough
fn bind_global_mousemove<K, T, S>(dnd: DndSignals<K, T>, on_drag_start: S)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    S: Fn(K) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_id.get_untracked() else {
            return;
        };

        let (start_x, start_y) = dnd.start_pos.get_untracked();
        if exceeds_threshold(ev.client_x() - start_x, ev.client_y() - start_y, dnd.threshold_px) {
            dnd.dragging_id.set(Some(pending.clone()));
            on_drag_start(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseover handler for drop targets.
/// Stops propagation so the innermost target wins over its container.
pub fn make_on_target_mouseover<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(Option::is_none) {
            return;
        }
        ev.stop_propagation();
        if dnd.drop_target.with_untracked(|current| current.as_ref() != Some(&target)) {
            dnd.drop_target.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(Option::is_some) {
            dnd.drop_target.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drag_start` fires once the threshold is crossed; `on_drop` fires for
/// every real drag with whatever target was hovered (possibly none).
pub fn bind_global_mouseup<K, T, S, F>(dnd: DndSignals<K, T>, on_drag_start: S, on_drop: F)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    S: Fn(K) + 'static,
    F: Fn(K, Option<T>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id.get_untracked();
        let drop_target = dnd.drop_target.get_untracked();

        // Clear pending state first
        dnd.pending_id.set(None);

        match dragging_id {
            Some(dragged) => {
                end_drag(&dnd);
                on_drop(dragged, drop_target);
            }
            // Not dragging - click event will fire naturally on the element
            None => end_drag(&dnd),
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd, on_drag_start);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive_distance() {
        assert!(!exceeds_threshold(0, 0, DRAG_THRESHOLD_PX));
        assert!(!exceeds_threshold(5, 5, DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold(8, 0, DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold(0, -8, DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold(6, 6, DRAG_THRESHOLD_PX));
    }

    #[test]
    fn test_interactive_tags() {
        for tag in ["INPUT", "button", "A", "label", "SELECT", "textarea"] {
            assert!(is_interactive_tag(tag), "{} should be interactive", tag);
        }
        for tag in ["DIV", "SPAN", "LI", "H3", "ABBR"] {
            assert!(!is_interactive_tag(tag), "{} should be draggable", tag);
        }
    }
}
