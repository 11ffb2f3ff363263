use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Share of an element that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fraction of `[top, top + height)` inside a viewport `[0, viewport)`.
pub fn visible_share(top: f64, height: f64, viewport: f64) -> f64 {
    if height <= 0.0 {
        return if top >= 0.0 && top < viewport { 1.0 } else { 0.0 };
    }
    let shown = (top + height).min(viewport) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}

fn in_view(element: &Element) -> bool {
    let viewport = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    visible_share(rect.top(), rect.height(), viewport) >= REVEAL_THRESHOLD
}

/// True once the referenced node has scrolled into view. Never goes back to false.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let fired = Rc::new(Cell::new(false));

                let check = {
                    let fired = fired.clone();
                    Closure::wrap(Box::new(move || {
                        if fired.get() {
                            return;
                        }
                        if let Some(element) = node.cast::<Element>() {
                            if in_view(&element) {
                                fired.set(true);
                                revealed.set(true);
                            }
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                }
                // Sections already on screen at mount.
                let _ = check.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Page section that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then(|| "visible"))}
        >
            { for props.children.iter() }
        </section>
    }
}
