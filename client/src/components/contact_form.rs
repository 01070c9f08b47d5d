//! Contact form with live validation.
//!
//! The form posts natively to the hosting provider's form handler. Invalid
//! submissions are stopped client-side; valid ones are allowed through and a
//! fallback redirect to the confirmation page is scheduled in case the
//! handler never navigates.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::config::{CONFIRMATION_PATH, REDIRECT_FALLBACK_MS, SHAKE_MS};
use crate::state::contact::{ContactFormState, Field, FieldTone, FormSubmission, SubmitDecision, SubmitPhase};
use crate::util::sequence::{Sequence, play};

#[derive(Clone, Copy)]
struct FormValues {
    name: RwSignal<String>,
    email: RwSignal<String>,
    company: RwSignal<String>,
    message: RwSignal<String>,
}

impl FormValues {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn signal(self, field: Field) -> RwSignal<String> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Company => self.company,
            Field::Message => self.message,
        }
    }

    fn snapshot(self) -> FormSubmission {
        build_submission(
            self.name.get_untracked(),
            self.email.get_untracked(),
            self.company.get_untracked(),
            self.message.get_untracked(),
        )
    }
}

/// A blank company field is submitted as absent.
fn build_submission(name: String, email: String, company: String, message: String) -> FormSubmission {
    FormSubmission {
        name,
        email,
        company: (!company.trim().is_empty()).then_some(company),
        message,
    }
}

fn group_class(tone: FieldTone, shaking: bool) -> String {
    let mut class = String::from("form-group");
    if !tone.class().is_empty() {
        class.push(' ');
        class.push_str(tone.class());
    }
    if shaking {
        class.push_str(" shake");
    }
    class
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let values = FormValues::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let submission = values.snapshot();
        match form.try_update(|f| f.submit(&submission)) {
            Some(SubmitDecision::Blocked(field)) => {
                ev.prevent_default();
                #[cfg(feature = "hydrate")]
                crate::util::dom::focus_by_id(field.id());
                #[cfg(not(feature = "hydrate"))]
                let _ = field;
                play(Sequence::new().at(SHAKE_MS, ()), move |()| form.update(ContactFormState::end_shake));
            }
            Some(SubmitDecision::Proceed) => {
                log::info!("contact form submitted");
                play(Sequence::new().at(REDIRECT_FALLBACK_MS, ()), |()| {
                    #[cfg(feature = "hydrate")]
                    crate::util::dom::navigate_to(CONFIRMATION_PATH);
                });
            }
            Some(SubmitDecision::InFlight) => ev.prevent_default(),
            None => {}
        }
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Let's work together"</h2>
                <form
                    class="contact-form"
                    name="contact"
                    method="POST"
                    action=CONFIRMATION_PATH
                    data-netlify="true"
                    netlify-honeypot="bot-field"
                    novalidate=true
                    on:submit=on_submit
                >
                    <input type="hidden" name="form-name" value="contact"/>
                    <p class="hidden">
                        <label>"Leave this empty: " <input name="bot-field"/></label>
                    </p>
                    <FormField form=form values=values field=Field::Name label="Name" kind="text"/>
                    <FormField form=form values=values field=Field::Email label="Email" kind="email"/>
                    <FormField form=form values=values field=Field::Company label="Company (optional)" kind="text"/>
                    <FormField form=form values=values field=Field::Message label="Message" kind="textarea"/>
                    <button
                        type="submit"
                        class="btn btn-primary submit-btn"
                        disabled=move || form.get().phase() == SubmitPhase::Sending
                    >
                        {move || form.get().submit_label()}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactFormState>,
    values: FormValues,
    field: Field,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let value = values.signal(field);

    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.on_input(field, &next));
        value.set(next);
    };
    let on_blur = move |_| {
        let current = value.get_untracked();
        form.update(|f| f.on_blur(field, &current));
    };

    let class = move || {
        let state = form.get();
        group_class(state.tone(field), state.is_shaking(field))
    };
    let error = move || {
        form.get()
            .error()
            .filter(|e| e.field() == field)
            .map(|e| view! { <span class="field-error" role="alert">{e.to_string()}</span> })
    };

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id()
                name=field.id()
                type=kind
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class=class>
            <label for=field.id()>{label}</label>
            {control}
            {error}
        </div>
    }
}
