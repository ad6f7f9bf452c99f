use dioxus::prelude::*;

use crate::contact::{dispatch, ContactField, ContactForm, Notice};
use crate::content::{self, Anchor, ContactContent, InfoLine};
use crate::context::{use_language, use_language_controller, use_sender, use_site_config};
use crate::core::timing::sleep_ms;

/// Contact details, location card and the inquiry form.
///
/// Submitting hands the payload to the context sender; its single outcome
/// is fed back into the form, and the resulting notice expires after
/// `notice_ttl_ms` unless a newer attempt replaced it.
#[component]
pub fn ContactSection() -> Element {
    let lang = use_language();
    let sender = use_sender();
    let notice_ttl_ms = use_site_config().notice_ttl_ms;
    let mut form = use_signal(ContactForm::new);

    // Keep the chosen service readable after a language switch.
    let controller = use_language_controller();
    use_effect(move || {
        let lang = controller.read().current();
        let selected = form.peek().value(ContactField::Service).to_string();
        if let Some(label) = content::localize_service(&selected, lang) {
            if label != selected {
                form.write().relabel(ContactField::Service, label);
            }
        }
    });

    let contact = &content::tree(lang).contact;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let pending = match dispatch(&mut form.write(), lang, sender.get()) {
            Ok(pending) => pending,
            Err(refused) => {
                tracing::debug!("contact submit refused: {refused}");
                return;
            }
        };
        spawn(async move {
            let outcome = pending.outcome.await;
            form.write().resolve(outcome);
            sleep_ms(notice_ttl_ms).await;
            form.write().expire_notice(pending.attempt);
        });
    };

    let busy = !form.read().can_submit();
    let notice = form.read().notice();

    rsx! {
        section { id: Anchor::Contact.id(), class: "page contact",
            header { class: "section-header",
                span { class: "badge", "{contact.badge}" }
                h2 { class: "section-header__title", "{contact.title}" }
                p { class: "section-header__subtitle", "{contact.subtitle}" }
            }

            div { class: "contact__layout",
                form { class: "contact-form", onsubmit: onsubmit,
                    h3 { class: "contact-form__title", "{contact.form_title}" }
                    div { class: "contact-form__row",
                        TextField { form, field: ContactField::Name, kind: "text", label: contact.labels.name.clone() }
                        TextField { form, field: ContactField::Email, kind: "email", label: contact.labels.email.clone() }
                    }
                    div { class: "contact-form__row",
                        TextField { form, field: ContactField::Phone, kind: "tel", label: contact.labels.phone.clone() }
                        TextField { form, field: ContactField::Company, kind: "text", label: contact.labels.company.clone() }
                    }
                    ServiceSelect { form, content: contact.clone() }
                    label { class: "contact-form__field",
                        span { class: "contact-form__label", "{contact.labels.message} *" }
                        textarea {
                            name: ContactField::Message.name(),
                            rows: "5",
                            required: true,
                            value: "{form.read().value(ContactField::Message)}",
                            oninput: move |evt: FormEvent| form.write().edit(ContactField::Message, evt.value()),
                        }
                    }
                    button {
                        class: "button button--primary contact-form__submit",
                        r#type: "submit",
                        disabled: busy,
                        aria_busy: "{busy}",
                        if busy {
                            span { class: "spinner", aria_hidden: "true" }
                            "{contact.submitting}"
                        } else {
                            "{contact.submit}"
                        }
                    }
                }

                aside { class: "contact__info",
                    h3 { "{contact.info_title}" }
                    InfoItem { line: contact.address.clone() }
                    InfoItem { line: contact.phone.clone() }
                    InfoItem { line: contact.email.clone() }
                    InfoItem { line: contact.hours.clone() }
                    div { class: "contact__location",
                        h4 { "{contact.location_title}" }
                        p { "{contact.location_city}" }
                        p { class: "contact__district", "{contact.location_district}" }
                    }
                }
            }

            if let Some(notice) = notice {
                NoticeToast {
                    notice,
                    content: contact.clone(),
                    on_dismiss: move |_| form.write().dismiss_notice(),
                }
            }
        }
    }
}

#[component]
fn TextField(
    form: Signal<ContactForm>,
    field: ContactField,
    kind: &'static str,
    label: String,
) -> Element {
    let mut form = form;
    let required = field.is_required();

    rsx! {
        label { class: "contact-form__field",
            span { class: "contact-form__label",
                "{label}"
                if required { " *" }
            }
            input {
                r#type: kind,
                name: field.name(),
                required: required,
                value: "{form.read().value(field)}",
                oninput: move |evt: FormEvent| form.write().edit(field, evt.value()),
            }
        }
    }
}

/// Service dropdown; the submitted value is the label in the active language.
#[component]
fn ServiceSelect(form: Signal<ContactForm>, content: ContactContent) -> Element {
    let mut form = form;
    let selected = form.read().value(ContactField::Service).to_string();

    rsx! {
        label { class: "contact-form__field",
            span { class: "contact-form__label", "{content.labels.service} *" }
            select {
                name: ContactField::Service.name(),
                required: true,
                value: "{selected}",
                oninput: move |evt: FormEvent| form.write().edit(ContactField::Service, evt.value()),
                option { value: "", disabled: true, selected: selected.is_empty(), "{content.service_placeholder}" }
                for service in content.service_options.iter() {
                    option {
                        key: "{service}",
                        value: "{service}",
                        selected: *service == selected,
                        "{service}"
                    }
                }
            }
        }
    }
}

#[component]
fn InfoItem(line: InfoLine) -> Element {
    rsx! {
        div { class: "contact__info-item",
            span { class: "contact__info-icon", aria_hidden: "true", "{line.icon.glyph()}" }
            div {
                h4 { "{line.title}" }
                p { "{line.text}" }
            }
        }
    }
}

#[component]
fn NoticeToast(notice: Notice, content: ContactContent, on_dismiss: EventHandler<MouseEvent>) -> Element {
    let (class, title, body) = match notice {
        Notice::Sent => ("toast toast--success", &content.success_title, &content.success),
        Notice::Failed => ("toast toast--error", &content.error_title, &content.error),
    };

    rsx! {
        div { class: "{class}", role: "status", aria_live: "polite",
            div { class: "toast__body",
                strong { class: "toast__title", "{title}" }
                p { "{body}" }
            }
            button {
                class: "toast__dismiss",
                r#type: "button",
                aria_label: "{content.dismiss}",
                onclick: move |evt| on_dismiss.call(evt),
                "✕"
            }
        }
    }
}
