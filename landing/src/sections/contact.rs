use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FadeIn;
use crate::contact_form::{ContactForm, Field, FieldErrors, FormStatus, submit_to};
use crate::content::ContactSettings;

#[component]
pub fn Contact(settings: ContactSettings) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Idle);
    let delivery = StoredValue::new((settings.endpoint, settings.simulated_delay_ms));

    let succeed = move || {
        tracing::info!("contact request sent");
        form.set(ContactForm::default());
        errors.set(FieldErrors::default());
        status.set(FormStatus::Success);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_submitting) {
            return;
        }
        let payload = form.get_untracked();
        if let Err(invalid) = payload.validate() {
            tracing::debug!(fields = ?invalid.fields(), "contact form incomplete");
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        status.set(FormStatus::Submitting);

        let (endpoint, delay_ms) = delivery.get_value();
        match endpoint {
            Some(endpoint) => spawn_local(async move {
                match submit_to(&endpoint, &payload).await {
                    Ok(()) => succeed(),
                    Err(err) => {
                        tracing::error!(error = %err, "contact request failed");
                        status.set(FormStatus::Error(err.user_message().to_string()));
                    }
                }
            }),
            // No form service configured: behave as if it answered.
            None => set_timeout(succeed, Duration::from_millis(delay_ms)),
        }
    };

    let field_input = move |field: Field| {
        let value = move || form.with(|form| form.get(field).to_owned());
        let on_input = move |ev| {
            let text = event_target_value(&ev);
            form.update(|form| form.set(field, text));
            errors.update(|errors| errors.clear(field));
        };
        let class = move || {
            if errors.with(|errors| errors.message(field).is_some()) {
                "form-input invalid"
            } else {
                "form-input"
            }
        };
        let control = match field {
            Field::Message => view! {
                <textarea id=field.id() name=field.id() rows="5" class=class prop:value=value on:input=on_input required></textarea>
            }
            .into_any(),
            _ => view! {
                <input
                    type={if field == Field::Phone { "tel" } else { "text" }}
                    id=field.id()
                    name=field.id()
                    class=class
                    prop:value=value
                    on:input=on_input
                    required
                />
            }
            .into_any(),
        };
        view! {
            <div class="form-field">
                <label for=field.id() class="form-label">{field.label()}</label>
                {control}
                {move || {
                    errors
                        .with(|errors| errors.message(field))
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form on:submit=on_submit novalidate>
                <div class="form-row">
                    {field_input(Field::Name)}
                    {field_input(Field::Phone)}
                </div>
                {field_input(Field::Address)}
                {field_input(Field::Message)}
                {move || match status.get() {
                    FormStatus::Error(message) => {
                        Some(view! { <p class="form-status-error" role="alert">{message}</p> })
                    }
                    _ => None,
                }}
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || status.with(FormStatus::is_submitting)
                >
                    {move || status.with(FormStatus::button_label)}
                </button>
            </form>
        }
    };

    view! {
        <section id="contact" class="section section-dark">
            <div class="container">
                <FadeIn>
                    <div class="section-header">
                        <h2 class="section-title">{settings.heading}</h2>
                        <p class="section-intro">{settings.intro}</p>
                    </div>
                </FadeIn>
                <div class="contact-card">
                    <Show
                        when=move || status.with(|status| *status == FormStatus::Success)
                        fallback=form_view
                    >
                        <div class="contact-success" role="status">
                            <h3>"Thank You!"</h3>
                            <p>
                                "Your request has been submitted successfully. We will be in touch within 24 hours."
                            </p>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
