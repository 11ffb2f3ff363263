use yew::prelude::*;

use crate::content::STATS;
use crate::reveal::Reveal;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Reveal id="about" class="about-section">
            <div class="section-header">
                <h2 class="section-title">{"How It Works"}</h2>
                <p class="section-subtitle">{"Our Simple 3-Step Process"}</p>
            </div>
            <div class="about-grid">
                <div class="about-graphic">
                    { for (0..9_u8).map(|i| html! {
                        <div class="pulse-cell" style={format!("animation-delay: {:.1}s", f64::from(i) * 0.2)} />
                    }) }
                </div>
                <div class="about-copy">
                    <p>
                        {"Discover how our design solutions have transformed businesses and brought visions to life through our clients' experiences."}
                    </p>
                    <p>
                        {"Our membership comes with the promise of endless creativity and dedicated support. We deliver custom, one-of-a-kind designs tailored specifically for your brand, ensuring your projects stay on track with fast delivery and unlimited revisions."}
                    </p>
                </div>
            </div>
            <div class="stats-grid">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat-card interactive">
                        <div class="stat-value gradient-text">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                        <div class="stat-description">{stat.description}</div>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }

                .about-graphic {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    aspect-ratio: 1;
                    max-width: 360px;
                    margin: 0 auto;
                }

                .pulse-cell {
                    border-radius: 12px;
                    background: linear-gradient(135deg, #a855f7, #06b6d4);
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes pulse {
                    0%, 100% { transform: scale(1); opacity: 0.5; }
                    50% { transform: scale(1.1); opacity: 1; }
                }

                .about-copy p {
                    color: #d1d5db;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                }

                .stat-card {
                    text-align: center;
                    padding: 2rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    background: rgba(17, 24, 39, 0.5);
                }

                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 800;
                }

                .stat-label {
                    font-weight: 600;
                    margin: 0.5rem 0;
                }

                .stat-description {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </Reveal>
    }
}
