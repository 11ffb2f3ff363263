use yew::prelude::*;

use super::scroll_to_top;
use crate::content::{BRAND, FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::reveal::Reveal;

#[function_component(Footer)]
pub fn footer() -> Html {
    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <Reveal id="footer" class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand-mark">
                            <span class="brand-logo">{"W"}</span>
                            <span class="brand-name">{BRAND}</span>
                        </div>
                        <p>{"Get expert web development services tailored to your needs. No limits, no hassle."}</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                <a class="social-link interactive" href={*href} aria-label={*label}>{&label[..1]}</a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|(title, links)| html! {
                        <div class="footer-column">
                            <h4>{*title}</h4>
                            <ul>
                                { for links.iter().map(|(name, href)| html! {
                                    <li><a class="interactive" href={*href}>{*name}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="newsletter">
                    <div>
                        <h4>{"Stay Updated"}</h4>
                        <p>{"Subscribe to our newsletter for the latest design trends and tips."}</p>
                    </div>
                    <div class="newsletter-form">
                        <input type="email" placeholder="Enter your email" />
                        <button class="cta-button interactive">{"Subscribe"}</button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{format!("© 2024 {}. All rights reserved.", BRAND)}</span>
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|(name, href)| html! {
                            <a class="interactive" href={*href}>{*name}</a>
                        }) }
                    </div>
                </div>
            </Reveal>

            <button class="scroll-top interactive" onclick={to_top}>{"↑"}</button>

            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #1f2937;
                    background: #000;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr repeat(3, 1fr);
                    gap: 3rem;
                    padding-bottom: 3rem;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }

                .brand-mark {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .brand-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 10px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 800;
                    background: linear-gradient(135deg, #9333ea, #0891b2);
                }

                .brand-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .footer-brand p {
                    color: #9ca3af;
                }

                .social-links {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }

                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 999px;
                    background: #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .footer-column ul {
                    padding: 0;
                }

                .footer-column li {
                    list-style: none;
                    padding: 0.35rem 0;
                }

                .site-footer a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .site-footer a:hover {
                    color: #c084fc;
                }

                .newsletter {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    align-items: center;
                    border-top: 1px solid #1f2937;
                    padding: 2rem 0;
                }

                .newsletter p {
                    color: #9ca3af;
                }

                .newsletter-form {
                    display: flex;
                    gap: 1rem;
                }

                .newsletter-form input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #374151;
                    background: rgba(31, 41, 55, 0.5);
                    color: #fff;
                }

                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    border-top: 1px solid #1f2937;
                    padding: 1.5rem 0;
                    color: #9ca3af;
                    font-size: 0.9rem;
                }

                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 999px;
                    border: none;
                    color: #fff;
                    background: linear-gradient(135deg, #9333ea, #0891b2);
                    cursor: pointer;
                    z-index: 50;
                }
                "#}
            </style>
        </footer>
    }
}
