use yew::prelude::*;

use crate::cursor::CustomCursor;
use crate::sections::{
    about::About, contact::Contact, faq::Faq, footer::Footer, hero::Hero, portfolio::Portfolio,
    pricing::Pricing, services::Services, testimonials::Testimonials,
};

#[function_component]
pub fn Home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <CustomCursor />
            <div class="page-sections">
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Testimonials />
                <Pricing />
                <Faq />
                <Contact />
                <Footer />
            </div>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #030712;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    cursor: none;
                }

                .landing {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }

                .page-sections {
                    position: relative;
                    z-index: 1;
                }

                .page-sections > section,
                .site-footer > section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(168, 85, 247, 0.3);
                    background: linear-gradient(90deg, rgba(168, 85, 247, 0.2), rgba(6, 182, 212, 0.2));
                    color: #d8b4fe;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .section-title {
                    font-size: clamp(2.2rem, 5vw, 3.75rem);
                    font-weight: 800;
                    margin: 0 0 1.5rem;
                    background: linear-gradient(90deg, #fff, #d1d5db);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-subtitle {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #a855f7, #06b6d4);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #fff;
                    background: linear-gradient(90deg, #9333ea, #0891b2);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 40px rgba(168, 85, 247, 0.25);
                }

                .cta-button.outline {
                    background: transparent;
                    border: 1px solid rgba(168, 85, 247, 0.5);
                }

                .cta-button .arrow {
                    font-style: normal;
                }

                .cursor-layer {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 9999;
                }

                .custom-cursor {
                    position: fixed;
                    width: 20px;
                    height: 20px;
                    border-radius: 999px;
                    background: linear-gradient(135deg, #a855f7, #06b6d4);
                    mix-blend-mode: difference;
                    transition: transform 0.15s ease;
                }

                .custom-cursor.hover {
                    transform: scale(2);
                }

                .cursor-trail {
                    position: fixed;
                    width: 6px;
                    height: 6px;
                    border-radius: 999px;
                    background: #a855f7;
                }

                @media (hover: none) {
                    body {
                        cursor: auto;
                    }

                    .cursor-layer {
                        display: none;
                    }
                }
                "#}
            </style>
        </main>
    }
}
