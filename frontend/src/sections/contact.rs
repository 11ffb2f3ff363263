use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{ContactFormController, ContactSnapshot, Field, SendError, SimulatedCourier, SubmitStatus};
use crate::reveal::Reveal;
use crate::timer::GlooScheduler;

pub enum ContactMsg {
    Input(Field, String),
    Submit,
    Delivered(Result<(), SendError>),
    ResetStatus,
}

pub struct Contact {
    form: ContactFormController<GlooScheduler, SimulatedCourier>,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let timings = config::timings();
        Self {
            form: ContactFormController::new(
                GlooScheduler,
                SimulatedCourier::new(timings.send_latency),
                timings.status_reset,
                ctx.link().callback(|_| ContactMsg::ResetStatus),
            ),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => self.form.set_field(field, value),
            ContactMsg::Submit => {
                if let Some(send) = self.form.submit() {
                    ctx.link().send_future(async move { ContactMsg::Delivered(send.await) });
                }
            }
            ContactMsg::Delivered(outcome) => self.form.finish(outcome),
            ContactMsg::ResetStatus => self.form.reset_status(),
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.form.dispose();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.form.snapshot();
        let submitting = snapshot.status == SubmitStatus::Submitting;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <Reveal id="contact" class="contact-section">
                <div class="section-header">
                    <h2 class="section-title">{"Have any Question? Let's Talk"}</h2>
                    <p class="section-subtitle">
                        {"Schedule a free discovery call to learn more how we work and how can we help you and your business."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Send us a message"}</h3>
                        <form class="contact-form" {onsubmit} novalidate=true>
                            <div class="field-row">
                                { self.text_input(ctx, &snapshot, Field::Name, "Full Name *", "text", "John Doe") }
                                { self.text_input(ctx, &snapshot, Field::Email, "Email Address *", "email", "john@example.com") }
                            </div>
                            { self.text_input(ctx, &snapshot, Field::Subject, "Subject *", "text", "Project inquiry") }
                            { self.message_input(ctx, &snapshot) }

                            <button type="submit" class="cta-button submit interactive" disabled={submitting}>
                                if submitting {
                                    <span class="spinner"></span>{"Sending..."}
                                } else {
                                    {"➤ Send Message"}
                                }
                            </button>

                            if snapshot.status == SubmitStatus::Success {
                                <div class="status-banner success">
                                    {"✓ Message sent successfully! We'll get back to you soon."}
                                </div>
                            }
                            if snapshot.status == SubmitStatus::Failure {
                                <div class="status-banner failure">
                                    {"⚠ Failed to send message. Please try again."}
                                </div>
                            }
                        </form>
                    </div>

                    <div class="contact-info">
                        <div class="contact-card">
                            <h3>{"Get in touch"}</h3>
                            <div class="info-item">
                                <h4>{"Email"}</h4>
                                <p>{"hello@pixellab.com"}</p>
                                <p>{"support@pixellab.com"}</p>
                            </div>
                            <div class="info-item">
                                <h4>{"Phone"}</h4>
                                <p>{"+1 (555) 123-4567"}</p>
                                <p>{"+1 (555) 987-6543"}</p>
                            </div>
                            <div class="info-item">
                                <h4>{"Office"}</h4>
                                <p>{"123 Design Street"}</p>
                                <p>{"Creative District, CD 12345"}</p>
                            </div>
                        </div>
                        <div class="contact-card highlight">
                            <h3>{"Ready to start your project?"}</h3>
                            <p>{"Book a free consultation call to discuss your needs and how we can help bring your vision to life."}</p>
                            <button class="cta-button interactive">{"Book a Call"}</button>
                        </div>
                    </div>
                </div>

                <style>
                    {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 4rem;
                        align-items: start;
                    }

                    .contact-card {
                        padding: 2rem;
                        border-radius: 20px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.8), rgba(31, 41, 55, 0.8));
                        margin-bottom: 2rem;
                    }

                    .contact-card.highlight {
                        background: linear-gradient(135deg, rgba(147, 51, 234, 0.2), rgba(8, 145, 178, 0.2));
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .field-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }

                    .form-field label {
                        display: block;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }

                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid #374151;
                        background: rgba(31, 41, 55, 0.5);
                        color: #fff;
                        font: inherit;
                        box-sizing: border-box;
                    }

                    .form-field.invalid input,
                    .form-field.invalid textarea {
                        border-color: #ef4444;
                    }

                    .field-error {
                        color: #f87171;
                        font-size: 0.85rem;
                        margin-top: 0.4rem;
                    }

                    .cta-button.submit {
                        width: 100%;
                        justify-content: center;
                    }

                    .cta-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }

                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 999px;
                        animation: spin 1s linear infinite;
                        margin-right: 0.5rem;
                    }

                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }

                    .status-banner {
                        padding: 0.75rem;
                        border-radius: 8px;
                        animation: bannerIn 0.3s ease-out;
                    }

                    .status-banner.success {
                        color: #4ade80;
                        background: rgba(74, 222, 128, 0.1);
                        border: 1px solid rgba(74, 222, 128, 0.2);
                    }

                    .status-banner.failure {
                        color: #f87171;
                        background: rgba(248, 113, 113, 0.1);
                        border: 1px solid rgba(248, 113, 113, 0.2);
                    }

                    @keyframes bannerIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: none; }
                    }

                    .info-item {
                        margin-bottom: 1.25rem;
                    }

                    .info-item p {
                        color: #9ca3af;
                        margin: 0.2rem 0;
                    }
                    "#}
                </style>
            </Reveal>
        }
    }
}

impl Contact {
    fn text_input(
        &self,
        ctx: &Context<Self>,
        snapshot: &ContactSnapshot,
        field: Field,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let error = snapshot.error_text(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Input(field, input.value())
        });

        html! {
            <div class={classes!("form-field", error.is_some().then(|| "invalid"))}>
                <label for={field.id()}>{label}</label>
                <input
                    id={field.id()}
                    type={kind}
                    {placeholder}
                    value={snapshot.fields.get(field).to_string()}
                    {oninput}
                />
                if let Some(error) = error {
                    <p class="field-error">{"⚠ "}{error}</p>
                }
            </div>
        }
    }

    fn message_input(&self, ctx: &Context<Self>, snapshot: &ContactSnapshot) -> Html {
        let error = snapshot.error_text(Field::Message);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Input(Field::Message, input.value())
        });

        html! {
            <div class={classes!("form-field", error.is_some().then(|| "invalid"))}>
                <label for={Field::Message.id()}>{"Message *"}</label>
                <textarea
                    id={Field::Message.id()}
                    rows="6"
                    placeholder="Tell us about your project..."
                    value={snapshot.fields.message.clone()}
                    {oninput}
                />
                if let Some(error) = error {
                    <p class="field-error">{"⚠ "}{error}</p>
                }
            </div>
        }
    }
}
