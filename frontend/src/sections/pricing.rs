use yew::prelude::*;

use super::scroll_to_section;
use crate::content::{Plan, PLANS};
use crate::reveal::Reveal;

fn plan_card(plan: &Plan) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <div class={classes!("plan-card", plan.popular.then(|| "popular"))}>
            if plan.popular {
                <div class="popular-badge">{"★ Most Popular"}</div>
            }
            <h3>{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="price">{plan.price}</span>
                <span class="period">{plan.period}</span>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <button class={classes!("cta-button", "interactive", (!plan.popular).then(|| "outline"))} {onclick}>
                {plan.cta}
                <i class="arrow">{"→"}</i>
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Reveal id="pricing" class="pricing-section">
            <div class="section-header">
                <h2 class="section-title">{"Plans To Suits Your Needs"}</h2>
                <p class="section-subtitle">
                    {"Explore our flexible pricing options to find the best fit for your business and elevate your brand with our comprehensive design services."}
                </p>
            </div>
            <div class="plans-grid">
                { for PLANS.iter().map(plan_card) }
            </div>

            <style>
                {r#"
                .plans-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    align-items: stretch;
                }

                .plan-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem 2rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(17, 24, 39, 0.7);
                    transition: transform 0.3s ease;
                }

                .plan-card:hover {
                    transform: translateY(-10px) scale(1.02);
                }

                .plan-card.popular {
                    box-shadow: 0 0 0 2px rgba(168, 85, 247, 0.5);
                }

                .popular-badge {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.3rem 1rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #9333ea, #0891b2);
                    font-size: 0.85rem;
                    white-space: nowrap;
                }

                .plan-description {
                    color: #9ca3af;
                    margin: 0.5rem 0 1.5rem;
                }

                .plan-price .price {
                    font-size: 3rem;
                    font-weight: 800;
                }

                .plan-price .period {
                    color: #9ca3af;
                    margin-left: 0.5rem;
                }

                .plan-features {
                    flex: 1;
                    margin: 2rem 0;
                    padding: 0;
                }

                .plan-features li {
                    list-style: none;
                    padding: 0.4rem 0;
                    color: #d1d5db;
                }
                "#}
            </style>
        </Reveal>
    }
}
