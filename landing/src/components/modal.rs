// Dialog overlay

use gloo::events::EventListener;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};

/// Whether the event landed on the backdrop itself rather than the panel.
fn hits_backdrop(ev: &MouseEvent, backdrop: NodeRef<html::Div>) -> bool {
    let Some(backdrop) = backdrop.get_untracked() else {
        return false;
    };
    let backdrop: &EventTarget = backdrop.as_ref();
    ev.target().is_some_and(|target| &target == backdrop)
}

/// Full-screen dialog. Escape, a backdrop click and the close button all
/// call `on_close`; the caller decides whether the modal stays mounted.
///
/// A backdrop click only counts when the press also started on the
/// backdrop, so a drag that begins inside the panel (a slider handle, a
/// text selection) and ends outside it leaves the dialog open.
#[component]
pub fn Modal(
    /// Accessible dialog title
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let escape = StoredValue::new_local(None::<EventListener>);
    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                on_close.run(());
            }
        });
        escape.set_value(Some(listener));
    }
    on_cleanup(move || {
        escape.try_update_value(|slot| *slot = None);
    });

    let backdrop = NodeRef::<html::Div>::new();
    let pressed_on_backdrop = StoredValue::new(false);

    view! {
        <div
            class="modal-backdrop"
            node_ref=backdrop
            on:mousedown=move |ev| pressed_on_backdrop.set_value(hits_backdrop(&ev, backdrop))
            on:click=move |ev| {
                let pressed = pressed_on_backdrop.get_value();
                pressed_on_backdrop.set_value(false);
                if pressed && hits_backdrop(&ev, backdrop) {
                    on_close.run(());
                }
            }
        >
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-label=move || title.get()
            >
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::Modal;
    use leptos::mount::mount_to;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_modal() -> (HtmlElement, RwSignal<u32>, impl Sized) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let host: HtmlElement = document
            .create_element("div")
            .expect("div")
            .unchecked_into();
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("append");

        let closes = RwSignal::new(0u32);
        let mounted = mount_to(host.clone(), move || {
            let on_close = Callback::new(move |()| closes.update(|n| *n += 1));
            view! {
                <Modal title="Driveway".to_string() on_close=on_close>
                    <p class="modal-body">"Sealed and sanded"</p>
                </Modal>
            }
        });
        (host, closes, mounted)
    }

    fn find(host: &HtmlElement, selector: &str) -> Element {
        host.query_selector(selector)
            .expect("valid selector")
            .expect("element rendered")
    }

    fn mouse(target: &Element, name: &str) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict(name, &init).expect("event");
        target.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn press_and_release_on_the_backdrop_closes() {
        let (host, closes, _mounted) = mount_modal();
        let backdrop = find(&host, ".modal-backdrop");

        mouse(&backdrop, "mousedown");
        mouse(&backdrop, "click");
        assert_eq!(closes.get_untracked(), 1);
    }

    #[wasm_bindgen_test]
    fn drag_out_of_the_panel_keeps_the_dialog_open() {
        let (host, closes, _mounted) = mount_modal();

        mouse(&find(&host, ".modal-body"), "mousedown");
        // the browser targets the click at the common ancestor
        mouse(&find(&host, ".modal-backdrop"), "click");
        assert_eq!(closes.get_untracked(), 0);

        // a stale press does not carry over to the next click
        mouse(&find(&host, ".modal-backdrop"), "click");
        assert_eq!(closes.get_untracked(), 0);
    }

    #[wasm_bindgen_test]
    fn clicks_inside_the_panel_do_not_close() {
        let (host, closes, _mounted) = mount_modal();
        let body = find(&host, ".modal-body");

        mouse(&body, "mousedown");
        mouse(&body, "click");
        assert_eq!(closes.get_untracked(), 0);

        let close = find(&host, ".modal-close");
        mouse(&close, "mousedown");
        mouse(&close, "click");
        assert_eq!(closes.get_untracked(), 1);
    }
}
