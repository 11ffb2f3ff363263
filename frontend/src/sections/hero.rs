use yew::prelude::*;

use super::scroll_to_section;
use crate::content::TRUSTED_BY;

#[function_component(Hero)]
pub fn hero() -> Html {
    let view_projects = Callback::from(|_: MouseEvent| scroll_to_section("portfolio"));
    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let scroll_next = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="home" class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="hero-badge">{"✨ Building Innovative Web Solutions"}</div>
                <h1 class="hero-title">
                    <span class="word">{"Building Innovative"}</span>
                    <span class="word gradient-text">{"Web Solutions"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Get expert web development services tailored to your needs."}
                    <br />
                    <span class="accent">{"No limits, no hassle."}</span>
                </p>
                <div class="hero-actions">
                    <button class="cta-button interactive" onclick={view_projects}>
                        {"View Our Projects"}
                        <i class="arrow">{"→"}</i>
                    </button>
                    <button class="cta-button outline interactive" onclick={get_started}>
                        {"Get Started"}
                    </button>
                </div>
                <div class="trusted-by">
                    { for TRUSTED_BY.iter().map(|logo| html! { <span class="trusted-logo">{*logo}</span> }) }
                </div>
            </div>
            <button class="scroll-indicator interactive" onclick={scroll_next}>{"↓"}</button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 2rem;
                    text-align: center;
                    overflow: hidden;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 30% 30%, rgba(168, 85, 247, 0.25), transparent 50%),
                                radial-gradient(circle at 70% 70%, rgba(6, 182, 212, 0.2), transparent 50%);
                    z-index: -1;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(168, 85, 247, 0.3);
                    border-radius: 999px;
                    color: #d8b4fe;
                    margin-bottom: 2rem;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 7vw, 5.5rem);
                    font-weight: 800;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }

                .hero-title .word {
                    display: block;
                    animation: wordIn 0.8s cubic-bezier(0.22, 1, 0.36, 1) both;
                }

                .hero-title .word:nth-child(2) {
                    animation-delay: 0.2s;
                }

                @keyframes wordIn {
                    from { opacity: 0; transform: translateY(50px) rotateX(-90deg); }
                    to { opacity: 1; transform: none; }
                }

                .hero-subtitle {
                    font-size: 1.4rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .hero-subtitle .accent {
                    color: #c084fc;
                }

                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 4rem;
                }

                .trusted-by {
                    display: flex;
                    gap: 2.5rem;
                    justify-content: center;
                    opacity: 0.6;
                    font-weight: 600;
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    color: #fff;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
