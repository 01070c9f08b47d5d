//! Landing hero and headline stats.

use leptos::prelude::*;

use crate::components::section_link::SectionLink;

#[derive(Clone, Copy)]
struct Stat {
    value: &'static str,
    label: &'static str,
}

/// Counter targets; the text is re-rendered from 0 once the stat scrolls in.
const STATS: &[Stat] = &[
    Stat { value: "150+", label: "Landing pages delivered" },
    Stat { value: "98%", label: "Client satisfaction" },
    Stat { value: "5", label: "Years of experience" },
];

pub(crate) struct HeroAction {
    pub target: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

pub(crate) const HERO_ACTIONS: &[HeroAction] = &[
    HeroAction { target: "projects", label: "See projects", class: "btn btn-primary" },
    HeroAction { target: "contact", label: "Get in touch", class: "btn btn-secondary" },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Landing pages that convert"</h1>
                <p class="hero-subtitle">
                    "Design and development focused on measurable results: more leads, more sales, less bounce."
                </p>
                <div class="hero-actions">
                    {HERO_ACTIONS
                        .iter()
                        .map(|action| {
                            view! { <SectionLink target=action.target class=action.class>{action.label}</SectionLink> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <div class="stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <span class="stat-number">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
