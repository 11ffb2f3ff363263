use yew::prelude::*;

use crate::content::{filter_label, projects_in, Category, Project, FILTERS};
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let project = props.project;

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={keep_open}>
                <button class="modal-close interactive" onclick={close}>{"✕"}</button>
                <div class="project-image placeholder large"></div>
                <span class="project-category">{project.category.label()}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active = use_state(|| None::<Category>);
    let selected = use_state(|| None::<&'static Project>);

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <Reveal id="portfolio" class="portfolio-section">
            <div class="section-header">
                <h2 class="section-title">{"One Stop Design Solution"}</h2>
                <p class="section-subtitle">
                    {"From web design to branding, our expert team delivers creative solutions that elevate your brand and captivate your audience."}
                </p>
                <div class="filter-bar">
                    { for FILTERS.iter().map(|filter| {
                        let filter = *filter;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(filter))
                        };
                        html! {
                            <button
                                class={classes!("filter-button", "interactive", (*active == filter).then(|| "active"))}
                                {onclick}
                            >
                                {filter_label(filter)}
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="projects-grid">
                { for projects_in(*active).map(|project| {
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(project)))
                    };
                    html! {
                        <div key={project.id} class="project-card interactive" {onclick}>
                            <div class="project-image placeholder">
                                if project.featured {
                                    <span class="featured-badge">{"Featured"}</span>
                                }
                            </div>
                            <div class="project-body">
                                <span class="project-category">{project.category.label()}</span>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>

            if let Some(project) = *selected {
                <ProjectModal {project} on_close={close_modal} />
            }

            <style>
                {r#"
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    margin-top: 2rem;
                }

                .filter-button {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid #374151;
                    background: rgba(31, 41, 55, 0.5);
                    color: #9ca3af;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .filter-button.active {
                    background: linear-gradient(90deg, #9333ea, #0891b2);
                    color: #fff;
                    border-color: transparent;
                }

                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }

                .project-card {
                    border-radius: 20px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(17, 24, 39, 0.6);
                    cursor: pointer;
                    animation: cardIn 0.5s ease-out both;
                    transition: transform 0.3s ease;
                }

                .project-card:hover {
                    transform: translateY(-10px);
                }

                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(30px) scale(0.9); }
                    to { opacity: 1; transform: none; }
                }

                .placeholder {
                    position: relative;
                    height: 200px;
                    background: linear-gradient(135deg, rgba(168, 85, 247, 0.3), rgba(6, 182, 212, 0.3));
                }

                .placeholder.large {
                    height: 260px;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                }

                .featured-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(168, 85, 247, 0.8);
                    font-size: 0.8rem;
                }

                .project-body {
                    padding: 1.5rem;
                }

                .project-category {
                    color: #c084fc;
                    font-size: 0.85rem;
                }

                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .tag {
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(55, 65, 81, 0.6);
                    font-size: 0.8rem;
                }

                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(6px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                }

                .modal {
                    position: relative;
                    max-width: 640px;
                    width: 90%;
                    padding: 2rem;
                    border-radius: 20px;
                    background: #111827;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </Reveal>
    }
}
