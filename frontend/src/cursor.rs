use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::timer::{GlooScheduler, Scheduler};

pub const MAX_TRAIL: usize = 20;
const FRAME: Duration = Duration::from_millis(16);
// Opacity is kept in 0.05 steps: a new point starts at 0.6 and loses one step per frame.
const START_STEPS: u8 = 12;
const STEP: f64 = 0.05;

const INTERACTIVE: &str = "a, button, [role=\"button\"], input, textarea, select, .interactive";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    steps: u8,
}

impl TrailPoint {
    pub fn opacity(&self) -> f64 {
        f64::from(self.steps) * STEP
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    /// One animation frame: fade every point, drop the invisible ones, then
    /// record the pointer if there is room.
    pub fn step(&mut self, x: f64, y: f64) {
        for point in &mut self.points {
            point.steps = point.steps.saturating_sub(1);
        }
        self.points.retain(|p| p.steps > 0);
        if self.points.len() < MAX_TRAIL {
            self.points.push(TrailPoint { x, y, steps: START_STEPS });
        }
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }
}

/// Pointer dot with a fading trail, drawn in its own fixed layer.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_mut_ref(|| (0.0_f64, 0.0_f64));
    let trail = use_mut_ref(Trail::default);
    let hovering = use_mut_ref(|| false);
    let redraw = use_force_update();

    {
        let position = position.clone();
        let trail = trail.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let on_move = {
                    let position = position.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        *position.borrow_mut() = (f64::from(e.client_x()), f64::from(e.client_y()));
                    }) as Box<dyn FnMut(MouseEvent)>)
                };

                let on_over = Closure::wrap(Box::new(move |e: MouseEvent| {
                    *hovering.borrow_mut() = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
                        .is_some();
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    let _ = document.add_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
                }

                let frames = GlooScheduler.every(
                    FRAME,
                    Callback::from(move |_| {
                        let (x, y) = *position.borrow();
                        trail.borrow_mut().step(x, y);
                        redraw.force_update();
                    }),
                );

                move || {
                    GlooScheduler.cancel(frames);
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                        let _ = document.remove_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let (x, y) = *position.borrow();
    let hover = *hovering.borrow();
    let trail = trail.borrow();

    html! {
        <div class="cursor-layer">
            { for trail.points().iter().map(|point| html! {
                <div
                    class="cursor-trail"
                    style={format!(
                        "left: {}px; top: {}px; opacity: {}; transform: scale({});",
                        point.x - 3.0, point.y - 3.0, point.opacity(), point.opacity()
                    )}
                />
            }) }
            <div
                class={classes!("custom-cursor", hover.then(|| "hover"))}
                style={format!("left: {}px; top: {}px;", x - 10.0, y - 10.0)}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_point_starts_at_sixty_percent() {
        let mut trail = Trail::default();
        trail.step(5.0, 7.0);
        assert_eq!(trail.points().len(), 1);
        assert!((trail.points()[0].opacity() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn points_fade_out_after_twelve_frames() {
        let mut trail = Trail::default();
        trail.step(0.0, 0.0);
        for _ in 0..11 {
            trail.step(1.0, 1.0);
        }
        assert_eq!(trail.points()[0].x, 0.0);
        trail.step(1.0, 1.0);
        assert!(trail.points().iter().all(|p| p.x == 1.0));
    }

    #[test]
    fn trail_never_exceeds_limit() {
        let mut trail = Trail::default();
        for i in 0..100 {
            trail.step(f64::from(i), 0.0);
            assert!(trail.points().len() <= MAX_TRAIL);
        }
    }
}
