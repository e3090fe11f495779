use dioxus::prelude::*;

use crate::catalog::Category;
use crate::components::{FormStatus, StatusLine};
use crate::core::drafts::{ChallengeDraft, Privacy, MAX_DURATION_DAYS};
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn CreateChallenge() -> Element {
    let _lang = use_language_marker();
    let mut draft = use_signal(ChallengeDraft::default);
    let mut status = use_signal(|| FormStatus::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.read().validate() {
            Ok(challenge) => {
                match serde_json::to_string(&challenge) {
                    Ok(json) => tracing::info!(title = %challenge.title, payload = %json, "challenge created"),
                    Err(err) => tracing::warn!(%err, "couldn't serialize new challenge"),
                }
                status.set(FormStatus::Done(t!("create-done", title = challenge.title.clone())));
            }
            Err(err) => status.set(FormStatus::Error(err.to_string())),
        }
    };

    let current = draft();
    let max_days = MAX_DURATION_DAYS.to_string();

    rsx! {
        section { class: "page page-form",
            header { class: "page__header page__header--centered",
                h1 { {t!("create-title")} }
                p { {t!("create-intro")} }
            }
            form { class: "card form", onsubmit: on_submit,
                label { class: "form__field",
                    span { {t!("create-field-title")} }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: t!("create-title-placeholder"),
                        value: "{current.title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("create-field-description")} }
                    textarea {
                        class: "input",
                        rows: "4",
                        placeholder: t!("create-description-placeholder"),
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                div { class: "form__row",
                    label { class: "form__field",
                        span { {t!("create-field-category")} }
                        select {
                            class: "input",
                            value: "{current.category}",
                            oninput: move |evt| draft.write().category = evt.value(),
                            option { value: "", disabled: true, {t!("create-category-placeholder")} }
                            for category in Category::ALL {
                                option { key: "{category}", value: "{category}", "{category}" }
                            }
                        }
                    }
                    label { class: "form__field",
                        span { {t!("create-field-duration")} }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            max: "{max_days}",
                            value: "{current.duration}",
                            oninput: move |evt| draft.write().duration = evt.value(),
                        }
                    }
                }
                fieldset { class: "form__field",
                    legend { {t!("create-field-privacy")} }
                    for privacy in [Privacy::Public, Privacy::Private] {
                        label { key: "{privacy.value()}", class: "radio",
                            input {
                                r#type: "radio",
                                name: "privacy",
                                value: privacy.value(),
                                checked: current.privacy == privacy,
                                onchange: move |evt| draft.write().privacy = Privacy::from_value(&evt.value()),
                            }
                            {privacy_label(privacy)}
                        }
                    }
                }
                button { class: "button button--primary button--wide", r#type: "submit", {t!("create-submit")} }
                StatusLine { status: status() }
            }
        }
    }
}

fn privacy_label(privacy: Privacy) -> String {
    match privacy {
        Privacy::Public => t!("create-privacy-public"),
        Privacy::Private => t!("create-privacy-private"),
    }
}
