//! Project detail overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single modal instance renders whatever `ModalState` holds. Standard
//! records get the one-page case study; extended records get the tabbed
//! layout. Escape, the close button, and backdrop clicks all route to
//! `ModalState::close`.

use leptos::prelude::*;

use crate::state::catalog::{ExtendedDetail, ProjectRecord};
use crate::state::modal::{ModalContent, ModalState, ModalTab};

#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.get_untracked().is_open() {
                modal.update(ModalState::close);
            }
        });
        Effect::new(move || crate::util::dom::lock_body_scroll(modal.get().is_open()));
    }

    let on_close = move |_| modal.update(ModalState::close);

    move || {
        modal.get().content().map(|content| {
            let body = match content {
                ModalContent::Standard(record) => standard_body(record).into_any(),
                ModalContent::Extended { record, detail, tab } => extended_body(record, detail, tab).into_any(),
            };
            view! {
                <div class="modal active" on:click=on_close>
                    <div
                        class="modal-content"
                        role="dialog"
                        aria-modal="true"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <button class="modal-close" aria-label="Close" on:click=on_close>
                            "✕"
                        </button>
                        {body}
                    </div>
                </div>
            }
        })
    }
}

fn header(record: &'static ProjectRecord) -> impl IntoView {
    view! {
        <div class="modal-header">
            <span class="project-category">{record.category_label}</span>
            <h2 class="modal-title">{record.title}</h2>
        </div>
    }
}

fn bullet_list(items: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

fn tech_tags(record: &'static ProjectRecord) -> impl IntoView {
    view! {
        <div class="tech-tags">
            {record.technologies.iter().map(|tech| view! { <span class="tech-tag">{*tech}</span> }).collect_view()}
        </div>
    }
}

fn standard_body(record: &'static ProjectRecord) -> impl IntoView {
    view! {
        {header(record)}
        <div class="modal-body">
            <p class="modal-description">{record.description}</p>
            <h3>"The challenge"</h3>
            <p>{record.challenge}</p>
            <h3>"The solution"</h3>
            <p>{record.solution}</p>
            <h3>"Results"</h3>
            {bullet_list(record.results, "results-list")}
            <h3>"Technologies"</h3>
            {tech_tags(record)}
        </div>
    }
}

fn extended_body(record: &'static ProjectRecord, detail: &'static ExtendedDetail, tab: ModalTab) -> impl IntoView {
    let panel = match tab {
        ModalTab::Overview => overview_panel(record, detail).into_any(),
        ModalTab::Roadmap => roadmap_panel(detail).into_any(),
        ModalTab::Architecture => architecture_panel(detail).into_any(),
        ModalTab::Demo => demo_panel(detail).into_any(),
    };

    view! {
        {header(record)}
        <div class="modal-tabs" role="tablist">
            {ModalTab::ALL.iter().map(|&each| view! { <TabButton tab=each active={each == tab}/> }).collect_view()}
        </div>
        <div class="modal-body tab-panel" role="tabpanel">
            {panel}
        </div>
    }
}

#[component]
fn TabButton(tab: ModalTab, active: bool) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let on_click = move |_| {
        modal.update(|m| {
            m.select_tab(tab);
        });
    };

    view! {
        <button class="tab-btn" class:active=active role="tab" aria-selected=active.to_string() on:click=on_click>
            {tab.label()}
        </button>
    }
}

fn overview_panel(record: &'static ProjectRecord, detail: &'static ExtendedDetail) -> impl IntoView {
    view! {
        <p class="modal-description">{record.description}</p>
        <h3>"The challenge"</h3>
        <p>{record.challenge}</p>
        <h3>"The solution"</h3>
        <p>{record.solution}</p>
        <h3>"Key features"</h3>
        {bullet_list(detail.features, "feature-list")}
        <div class="metrics-grid">
            {detail
                .metrics
                .iter()
                .map(|metric| {
                    view! {
                        <div class="metric">
                            <span class="metric-value">{metric.value}</span>
                            <span class="metric-label">{metric.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <h3>"Technologies"</h3>
        {tech_tags(record)}
    }
}

fn roadmap_panel(detail: &'static ExtendedDetail) -> impl IntoView {
    view! {
        <div class="roadmap">
            {detail
                .roadmap
                .iter()
                .map(|phase| {
                    view! {
                        <div class=format!("roadmap-phase {}", phase.status.class())>
                            <div class="roadmap-phase__header">
                                <h4>{phase.phase}</h4>
                                <span class="roadmap-phase__status">{phase.status.label()}</span>
                            </div>
                            {bullet_list(phase.items, "roadmap-phase__items")}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn architecture_panel(detail: &'static ExtendedDetail) -> impl IntoView {
    view! {
        <dl class="architecture">
            {detail
                .architecture
                .iter()
                .map(|layer| {
                    view! {
                        <dt>{layer.layer}</dt>
                        <dd>{layer.detail}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

fn demo_panel(detail: &'static ExtendedDetail) -> impl IntoView {
    view! {
        <div class="demo-links">
            {detail
                .links
                .iter()
                .map(|link| {
                    view! {
                        <a class="btn btn-secondary" href=link.url target="_blank" rel="noopener">
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
