use std::time::Duration;

use log::warn;
use yew::prelude::*;

use crate::carousel::{CarouselController, Direction};
use crate::config;
use crate::content::{Testimonial, TESTIMONIALS};
use crate::reveal::Reveal;
use crate::timer::GlooScheduler;

const PREVIEW_CARDS: usize = 3;

pub enum TestimonialsMsg {
    Tick,
    Next,
    Previous,
    Select(usize),
    HoverStart,
    HoverEnd,
}

pub struct Testimonials {
    carousel: CarouselController<GlooScheduler>,
    period: Duration,
}

impl Component for Testimonials {
    type Message = TestimonialsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let period = config::timings().carousel_period;
        let on_tick = ctx.link().callback(|_| TestimonialsMsg::Tick);

        Self {
            carousel: CarouselController::new(TESTIMONIALS.len(), GlooScheduler, period, on_tick),
            period,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TestimonialsMsg::Tick => self.carousel.tick(),
            TestimonialsMsg::Next => self.carousel.next(),
            TestimonialsMsg::Previous => self.carousel.previous(),
            TestimonialsMsg::Select(index) => {
                if let Err(e) = self.carousel.select(index) {
                    warn!("testimonials: {}", e);
                    return false;
                }
            }
            TestimonialsMsg::HoverStart => self.carousel.pause(),
            TestimonialsMsg::HoverEnd => self.carousel.resume(),
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.carousel.dispose();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let snapshot = self.carousel.snapshot();
        let Some(current) = TESTIMONIALS.get(snapshot.current) else {
            return html! {};
        };
        let slide = match snapshot.direction {
            Direction::Forward => "slide-forward",
            Direction::Backward => "slide-backward",
        };

        html! {
            <Reveal id="testimonials" class="testimonials-section">
                <div class="section-header">
                    <div class="section-badge">{"❝ Testimonials"}</div>
                    <h2 class="section-title">{"What Our Clients Are Saying"}</h2>
                    <p class="section-subtitle">
                        {"Discover how our design solutions have transformed businesses and brought visions to life through our clients' experiences."}
                    </p>
                </div>

                <div
                    class="carousel"
                    onmouseenter={link.callback(|_| TestimonialsMsg::HoverStart)}
                    onmouseleave={link.callback(|_| TestimonialsMsg::HoverEnd)}
                >
                    <div class="carousel-window">
                        <div key={snapshot.generation.to_string()} class={classes!("testimonial-card", slide)}>
                            { self.render_testimonial(current) }
                        </div>
                    </div>

                    <button class="carousel-arrow left interactive" onclick={link.callback(|_| TestimonialsMsg::Previous)}>
                        {"‹"}
                    </button>
                    <button class="carousel-arrow right interactive" onclick={link.callback(|_| TestimonialsMsg::Next)}>
                        {"›"}
                    </button>

                    <div class="carousel-dots">
                        { for (0..snapshot.len).map(|index| html! {
                            <button
                                class={classes!("dot", "interactive", (index == snapshot.current).then(|| "active"))}
                                onclick={link.callback(move |_| TestimonialsMsg::Select(index))}
                            />
                        }) }
                    </div>

                    <div class="progress-track">
                        <div
                            key={snapshot.cycle.to_string()}
                            class={classes!("progress-fill", snapshot.auto_playing.then(|| "running"))}
                            style={format!("animation-duration: {}ms;", self.period.as_millis())}
                        />
                    </div>
                </div>

                <div class="preview-grid">
                    { for TESTIMONIALS.iter().take(PREVIEW_CARDS).enumerate().map(|(index, testimonial)| html! {
                        <div
                            key={testimonial.id}
                            class="preview-card interactive"
                            onclick={link.callback(move |_| TestimonialsMsg::Select(index))}
                        >
                            <div class="preview-author">
                                <div class="avatar small">{testimonial.initials}</div>
                                <div>
                                    <div class="author-name">{testimonial.name}</div>
                                    <div class="author-company">{testimonial.company}</div>
                                </div>
                            </div>
                            <p class="preview-text">{format!("\"{}\"", testimonial.text)}</p>
                        </div>
                    }) }
                </div>

                <style>
                    {r#"
                    .carousel {
                        position: relative;
                        max-width: 960px;
                        margin: 0 auto;
                    }

                    .carousel-window {
                        overflow: hidden;
                        border-radius: 20px;
                    }

                    .testimonial-card {
                        padding: 3rem;
                        border-radius: 20px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.8), rgba(31, 41, 55, 0.8));
                    }

                    .slide-forward {
                        animation: slideFromRight 0.5s ease-in-out;
                    }

                    .slide-backward {
                        animation: slideFromLeft 0.5s ease-in-out;
                    }

                    @keyframes slideFromRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: none; }
                    }

                    @keyframes slideFromLeft {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: none; }
                    }

                    .stars {
                        color: #facc15;
                        margin-bottom: 1.5rem;
                        letter-spacing: 0.2rem;
                    }

                    .testimonial-text {
                        font-size: 1.4rem;
                        line-height: 1.6;
                        color: #e5e7eb;
                        margin-bottom: 2rem;
                    }

                    .author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        background: linear-gradient(135deg, #a855f7, #06b6d4);
                    }

                    .avatar.small {
                        width: 2.5rem;
                        height: 2.5rem;
                        font-size: 0.85rem;
                    }

                    .author-role {
                        color: #9ca3af;
                    }

                    .author-company {
                        color: #c084fc;
                        font-size: 0.9rem;
                    }

                    .carousel-arrow {
                        position: absolute;
                        top: 40%;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 999px;
                        border: none;
                        background: rgba(31, 41, 55, 0.8);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }

                    .carousel-arrow.left {
                        left: 1rem;
                    }

                    .carousel-arrow.right {
                        right: 1rem;
                    }

                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }

                    .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 999px;
                        border: none;
                        background: #4b5563;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .dot.active {
                        background: linear-gradient(90deg, #a855f7, #06b6d4);
                        transform: scale(1.1);
                    }

                    .progress-track {
                        margin-top: 1.5rem;
                        height: 4px;
                        border-radius: 999px;
                        background: #1f2937;
                        overflow: hidden;
                    }

                    .progress-fill {
                        height: 100%;
                        width: 0%;
                        background: linear-gradient(90deg, #a855f7, #06b6d4);
                    }

                    .progress-fill.running {
                        animation-name: progressFill;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }

                    @keyframes progressFill {
                        from { width: 0%; }
                        to { width: 100%; }
                    }

                    .preview-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }

                    .preview-card {
                        padding: 1.5rem;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(17, 24, 39, 0.5);
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }

                    .preview-card:hover {
                        transform: translateY(-5px) scale(1.02);
                    }

                    .preview-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .preview-text {
                        color: #d1d5db;
                        font-size: 0.9rem;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }
                    "#}
                </style>
            </Reveal>
        }
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

impl Testimonials {
    fn render_testimonial(&self, testimonial: &Testimonial) -> Html {
        let rating = stars(testimonial.rating);

        html! {
            <>
                <div class="stars">{ rating }</div>
                <blockquote class="testimonial-text">{format!("\"{}\"", testimonial.text)}</blockquote>
                <div class="author">
                    <div class="avatar">{testimonial.initials}</div>
                    <div>
                        <div class="author-name">{testimonial.name}</div>
                        <div class="author-role">{testimonial.role}</div>
                        <div class="author-company">{testimonial.company}</div>
                    </div>
                </div>
            </>
        }
    }
}
