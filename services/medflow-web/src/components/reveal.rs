// services/medflow-web/src/components/reveal.rs
//
// MedFlow Site - Reveal-on-scroll wrapper
// Fades children in the first time they enter the viewport.
//

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;
use medflow_shared::reveal::{reveal_classes, RevealLatch};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::use_app_state;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let state = use_app_state();
    let reveal = state.config.with_value(|config| config.reveal.clone());

    let node = create_node_ref::<html::Div>();
    let visible = create_rw_signal(false);
    let handle: Rc<RefCell<Option<(IntersectionObserver, ObserverCallback)>>> = Rc::default();

    node.on_load({
        let handle = handle.clone();
        move |div| {
            let latch = Rc::new(Cell::new(RevealLatch::new()));
            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let mut next = latch.get();
                        if next.observe(entry.is_intersecting()) {
                            latch.set(next);
                            visible.set(true);
                            observer.disconnect();
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(reveal.threshold));
            options.set_root_margin(&reveal.root_margin);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&div);
                    *handle.borrow_mut() = Some((observer, callback));
                }
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable, showing content: {err:?}");
                    visible.set(true);
                }
            }
        }
    });

    on_cleanup(move || {
        if let Some((observer, _callback)) = handle.borrow_mut().take() {
            observer.disconnect();
        }
    });

    view! {
        <div node_ref=node class=move || reveal_classes(visible.get(), class)>
            {children()}
        </div>
    }
}
