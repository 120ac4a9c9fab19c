//! Bridge mounting the particle-graph engine on the hero canvas.
//!
//! The `canvas` crate owns the simulation and drawing; this component mounts
//! the element, seeds the engine with browser randomness, and drives it from
//! a `requestAnimationFrame` loop until the page unmounts.

use leptos::prelude::*;

#[component]
pub fn NetworkCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let engine: Rc<RefCell<Option<canvas::engine::Engine>>> = Rc::new(RefCell::new(None));
        let raf_holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let resize_holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));

        fn request_frame(holder: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(cb) = holder.borrow().as_ref() {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }

        {
            let engine = Rc::clone(&engine);
            let raf_holder = Rc::clone(&raf_holder);
            let resize_holder = Rc::clone(&resize_holder);
            let alive_mount = Rc::clone(&alive);
            Effect::new(move || {
                let Some(canvas_el) = canvas_ref.get() else {
                    return;
                };
                if engine.borrow().is_some() {
                    return;
                }

                let mut rng = || js_sys::Math::random();
                match canvas::engine::Engine::new(canvas_el, &mut rng) {
                    Ok(instance) => *engine.borrow_mut() = Some(instance),
                    Err(_) => {
                        log::warn!("particle canvas unavailable");
                        return;
                    }
                }

                let engine_frame = Rc::clone(&engine);
                let holder_frame = Rc::clone(&raf_holder);
                let alive_frame = Rc::clone(&alive_mount);
                let cb = Closure::wrap(Box::new(move |_ts: f64| {
                    if !alive_frame.get() {
                        return;
                    }
                    if let Some(engine) = engine_frame.borrow_mut().as_mut() {
                        let _ = engine.tick();
                    }
                    request_frame(&holder_frame);
                }) as Box<dyn FnMut(f64)>);

                *raf_holder.borrow_mut() = Some(cb);
                request_frame(&raf_holder);

                // Track window resizes so the graph fills the hero.
                let engine_resize = Rc::clone(&engine);
                let resize_cb = Closure::wrap(Box::new(move || {
                    if let Some(engine) = engine_resize.borrow_mut().as_mut() {
                        engine.resize_to_element();
                    }
                }) as Box<dyn FnMut()>);
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                }
                *resize_holder.borrow_mut() = Some(resize_cb);
            });
        }

        on_cleanup(move || {
            alive.set(false);
            if let Some(window) = web_sys::window() {
                if let Some(cb) = resize_holder.borrow_mut().take() {
                    let _ = window
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    view! { <canvas class="network-canvas" node_ref=canvas_ref></canvas> }
}
