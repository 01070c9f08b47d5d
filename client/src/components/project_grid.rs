//! Projects section: category filters, card grid, and hover effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filtering is plain `FilterState` updates; each card derives its own
//! visibility from the active tag. Tilt, magnetic hover, and the card
//! click/hover effects mutate the elements directly because they change on
//! every pointer event and have no meaning for SSR.

#[cfg(test)]
#[path = "project_grid_test.rs"]
mod project_grid_test;

use leptos::prelude::*;

use crate::state::catalog::{self, CATALOG, ProjectRecord};
use crate::state::filter::{self, FilterState};
use crate::state::modal::ModalState;

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();
    let section_ref = NodeRef::<leptos::html::Section>::new();

    let on_section_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if let Some(section) = section_ref.get() {
                    let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                    crate::util::effects::tilt_cards(&section, pointer);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_section_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                if let Some(section) = section_ref.get() {
                    crate::util::effects::reset_cards(&section);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <section
            id="projects"
            class="projects"
            node_ref=section_ref
            on:mousemove=on_section_move
            on:mouseleave=on_section_leave
        >
            <div class="container">
                <h2 class="section-title">"Featured projects"</h2>
                <p class="section-subtitle">
                    {move || filter::subtitle(filter.get().visible_count(CATALOG))}
                </p>
                <div class="filter-buttons">
                    {filter_tags()
                        .into_iter()
                        .map(|(tag, label)| view! { <FilterButton tag=tag label=label/> })
                        .collect_view()}
                </div>
                <div class="projects-grid">
                    {CATALOG.iter().map(|record| view! { <ProjectCard record=record/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// The catch-all button followed by one button per catalog category.
fn filter_tags() -> Vec<(&'static str, &'static str)> {
    std::iter::once((filter::ALL, "All")).chain(catalog::categories()).collect()
}

#[component]
fn FilterButton(tag: &'static str, label: &'static str) -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();

    let on_click = move |_| {
        filter.update(|f| {
            f.apply_filter(tag, CATALOG);
        });
    };

    let on_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                use wasm_bindgen::JsCast;

                use crate::util::{dom::rect_of, effects::apply_magnetic, motion::magnetic_offset};

                let Some(button) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                    return;
                };
                let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                apply_magnetic(&button, Some(magnetic_offset(pointer, rect_of(&button))));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                use wasm_bindgen::JsCast;

                if let Some(button) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                    crate::util::effects::apply_magnetic(&button, None);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <button
            class="filter-btn"
            class:active=move || filter.get().active() == tag
            data-filter=tag
            on:click=on_click
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {label}
        </button>
    }
}

#[component]
fn ProjectCard(record: &'static ProjectRecord) -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let card_ref = NodeRef::<leptos::html::Article>::new();

    let on_view = move |_| {
        modal.update(|m| {
            m.open(record.id);
        });
    };

    let (on_click, on_enter, on_leave) = {
        #[cfg(feature = "hydrate")]
        {
            card_handlers(card_ref)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            (
                move |_ev: leptos::ev::MouseEvent| {},
                move |_ev: leptos::ev::MouseEvent| {},
                move |_ev: leptos::ev::MouseEvent| {},
            )
        }
    };

    view! {
        <article
            class="project-card"
            class:hidden=move || !filter.get().is_visible(record.category)
            data-category=record.category
            node_ref=card_ref
            on:click=on_click
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class="project-image">
                <img src=record.image alt=record.title loading="lazy"/>
                <span class="project-category">{record.category_label}</span>
            </div>
            <div class="project-content">
                <h3 class="project-title">{record.title}</h3>
                <p class="project-description">{record.description}</p>
                <div class="project-metrics">
                    {record
                        .card_metrics
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
                <button class="btn-view" data-project=record.id on:click=on_view>
                    "View project"
                </button>
            </div>
        </article>
    }
}

/// Click pop, neighbor lift, and staggered metric lift for one card.
#[cfg(feature = "hydrate")]
fn card_handlers(
    card_ref: NodeRef<leptos::html::Article>,
) -> (
    impl Fn(leptos::ev::MouseEvent) + 'static,
    impl Fn(leptos::ev::MouseEvent) + 'static,
    impl Fn(leptos::ev::MouseEvent) + 'static,
) {
    use wasm_bindgen::JsCast;

    use crate::util::dom::query_all;
    use crate::util::effects::{
        METRIC_LIFT_CLASS, apply_class_step, card_click_sequence, lift_neighbors, metric_lift_sequence, settle_hover,
    };
    use crate::util::sequence::{Debouncer, play};
    use crate::util::view::ViewTarget;

    fn card_of(card_ref: NodeRef<leptos::html::Article>) -> Option<web_sys::Element> {
        card_ref.get_untracked().map(Into::into)
    }

    fn siblings_of(card: &web_sys::Element) -> Vec<web_sys::Element> {
        card.parent_element().map(|grid| query_all(&grid, ".project-card")).unwrap_or_default()
    }

    // Invalidates metric lifts still pending when the pointer leaves.
    let hover = Debouncer::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let on_view_button = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|t| t.closest(".btn-view").ok().flatten())
            .is_some();
        if on_view_button {
            return;
        }
        if let Some(card) = card_of(card_ref) {
            play(card_click_sequence(), move |step| apply_class_step(&card, step));
        }
    };

    let enter_hover = hover.clone();
    let on_enter = move |_ev: leptos::ev::MouseEvent| {
        let Some(card) = card_of(card_ref) else {
            return;
        };
        let siblings = siblings_of(&card);
        if let Some(index) = siblings.iter().position(|s| s.is_same_node(Some(&card))) {
            lift_neighbors(&siblings, index);
        }

        let metrics = query_all(&card, ".metric");
        let ticket = enter_hover.schedule();
        let hover = enter_hover.clone();
        play(metric_lift_sequence(metrics.len()), move |i| {
            if hover.is_current(ticket) {
                if let Some(metric) = metrics.get(i) {
                    metric.add_class(METRIC_LIFT_CLASS);
                }
            }
        });
    };

    let on_leave = move |_ev: leptos::ev::MouseEvent| {
        hover.schedule();
        if let Some(card) = card_of(card_ref) {
            settle_hover(&siblings_of(&card), &query_all(&card, ".metric"));
        }
    };

    (on_click, on_enter, on_leave)
}
