use web_sys::MouseEvent;
use yew::prelude::*;
use yew::Properties;

use super::scroll_to_section;
use crate::content::FAQS;
use crate::reveal::Reveal;

/// Single-open accordion: clicking the open item closes it, any other opens it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question interactive" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| Some(0usize));
    let contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <Reveal id="faq" class="faq-section">
            <div class="section-header">
                <div class="section-badge">{"FAQ"}</div>
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <p class="section-subtitle">
                    {"Find the information you need about our services, plans, and processes. If you have more questions, feel free to reach out to us!"}
                </p>
            </div>

            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, faq)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_| open.set(toggle(*open, index)))
                    };
                    html! {
                        <FaqItem
                            question={faq.question}
                            answer={faq.answer}
                            is_open={*open == Some(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>

            <div class="faq-cta">
                <p>{"Our team is here to help. Get in touch and we'll answer any questions you might have."}</p>
                <button class="cta-button interactive" onclick={contact}>{"Contact Us"}</button>
            </div>

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    margin-bottom: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    background: rgba(17, 24, 39, 0.6);
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item.open {
                    border-color: rgba(168, 85, 247, 0.4);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #c084fc;
                    margin-left: 1rem;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #9ca3af;
                    line-height: 1.6;
                    animation: faqOpen 0.3s ease-out;
                }

                @keyframes faqOpen {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: none; }
                }

                .faq-cta {
                    text-align: center;
                    margin-top: 3rem;
                    color: #9ca3af;
                }

                .faq-cta p {
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(toggle(Some(0), 3), Some(3));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn opens_from_all_closed() {
        assert_eq!(toggle(None, 5), Some(5));
    }
}
