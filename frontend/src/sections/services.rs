use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::reveal::Reveal;

fn service_card(service: &Service) -> Html {
    html! {
        <div class={classes!("service-card", "interactive", format!("accent-{}", service.accent))}>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul>
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Reveal id="services" class="services-section">
            <div class="section-header">
                <div class="section-badge">{"Benefits"}</div>
                <h2 class="section-title">{"Membership Benefits"}</h2>
                <p class="section-subtitle">
                    {"Our membership comes with the promise of endless creativity and dedicated support."}
                </p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(service_card) }
            </div>

            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .service-card {
                    padding: 2rem;
                    border-radius: 20px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(17, 24, 39, 0.6);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-10px) scale(1.02);
                    border-color: rgba(168, 85, 247, 0.4);
                }

                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .service-card h3 {
                    font-size: 1.4rem;
                    margin-bottom: 0.75rem;
                }

                .service-card p {
                    color: #9ca3af;
                    margin-bottom: 1.25rem;
                }

                .service-card li {
                    color: #d1d5db;
                    list-style: none;
                    padding: 0.25rem 0;
                }

                .service-card li::before {
                    content: '• ';
                    color: #a855f7;
                }
                "#}
            </style>
        </Reveal>
    }
}
