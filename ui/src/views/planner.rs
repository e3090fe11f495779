use dioxus::prelude::*;

use crate::components::{nav_link, FormStatus, NavTarget, StatusLine};
use crate::core::drafts::{PlanDraft, MAX_DURATION_DAYS};
use crate::core::format::format_iso_date;
use crate::i18n::use_language_marker;
use crate::t;

/// Plan-and-invite form served at `/home`.
#[component]
pub fn ChallengePlanner() -> Element {
    let _lang = use_language_marker();
    let mut draft = use_signal(PlanDraft::default);
    let mut status = use_signal(|| FormStatus::Idle);
    let mut invite_error = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = draft.read().validate();
        match outcome {
            Ok(plan) => {
                let end = format_iso_date(plan.ends_on());
                tracing::info!(
                    name = %plan.name,
                    starts_on = %format_iso_date(plan.starts_on),
                    ends_on = %end,
                    goals = plan.goals.len(),
                    invites = plan.invites.len(),
                    daily_reminders = plan.daily_reminders,
                    celebrate_completion = plan.celebrate_completion,
                    "challenge planned"
                );
                status.set(FormStatus::Done(t!(
                    "planner-done",
                    name = plan.name.clone(),
                    end = end
                )));
            }
            Err(err) => status.set(FormStatus::Error(err.to_string())),
        }
    };

    let add_goal = move |_| {
        draft.write().add_goal();
    };

    let add_invite = move |_| {
        let outcome = draft.write().add_invite();
        match outcome {
            Ok(()) => invite_error.set(None),
            Err(err) => {
                tracing::debug!(%err, "invite rejected");
                invite_error.set(Some(err.to_string()));
            }
        }
    };

    let on_cancel = move |_| {
        draft.set(PlanDraft::default());
        status.set(FormStatus::Idle);
        invite_error.set(None);
    };

    let current = draft();
    let inspiration = nav_link(NavTarget::Challenges, "link", &t!("planner-inspiration"));

    rsx! {
        section { class: "page page-form page-planner",
            header { class: "page__header page__header--centered",
                h1 { {t!("planner-title")} }
                p { {t!("planner-intro")} }
            }
            form { class: "card form", onsubmit: on_submit,
                label { class: "form__field",
                    span { {t!("planner-field-name")} }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: t!("planner-name-placeholder"),
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("planner-field-description")} }
                    textarea {
                        class: "input",
                        rows: "3",
                        placeholder: t!("planner-description-placeholder"),
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                div { class: "form__row",
                    label { class: "form__field",
                        span { {t!("planner-field-start")} }
                        input {
                            class: "input",
                            r#type: "date",
                            value: "{current.start_date}",
                            oninput: move |evt| draft.write().start_date = evt.value(),
                        }
                    }
                    label { class: "form__field",
                        span { {t!("planner-field-duration")} }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            max: "{MAX_DURATION_DAYS}",
                            value: "{current.duration}",
                            oninput: move |evt| draft.write().duration = evt.value(),
                        }
                    }
                }

                div { class: "form__field",
                    span { {t!("planner-field-goals")} }
                    ul { class: "chip-list",
                        for (index, goal) in current.goals.iter().enumerate() {
                            li { key: "{index}-{goal}", class: "chip-list__item",
                                span { "{goal}" }
                                button {
                                    class: "chip-list__remove",
                                    r#type: "button",
                                    aria_label: t!("planner-remove"),
                                    onclick: move |_| draft.write().remove_goal(index),
                                    "×"
                                }
                            }
                        }
                    }
                    div { class: "form__inline",
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: t!("planner-goal-placeholder"),
                            value: "{current.pending_goal}",
                            oninput: move |evt| draft.write().pending_goal = evt.value(),
                        }
                        button { class: "button button--secondary", r#type: "button", onclick: add_goal,
                            {t!("planner-goal-add")}
                        }
                    }
                }

                div { class: "form__field",
                    span { {t!("planner-invite")} }
                    ul { class: "chip-list",
                        for (index, email) in current.invites.iter().enumerate() {
                            li { key: "{email}", class: "chip-list__item",
                                span { "{email}" }
                                button {
                                    class: "chip-list__remove",
                                    r#type: "button",
                                    aria_label: t!("planner-remove"),
                                    onclick: move |_| draft.write().remove_invite(index),
                                    "×"
                                }
                            }
                        }
                    }
                    div { class: "form__inline",
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: t!("planner-invite-placeholder"),
                            value: "{current.pending_invite}",
                            oninput: move |evt| draft.write().pending_invite = evt.value(),
                        }
                        button { class: "button button--secondary", r#type: "button", onclick: add_invite,
                            {t!("planner-invite-add")}
                        }
                    }
                    if let Some(err) = invite_error() {
                        p { class: "form-status form-status--error", role: "alert", "{err}" }
                    }
                }

                div { class: "form__toggles",
                    label { class: "toggle",
                        input {
                            r#type: "checkbox",
                            checked: current.daily_reminders,
                            onchange: move |evt| draft.write().daily_reminders = evt.checked(),
                        }
                        span { {t!("planner-reminders")} }
                    }
                    label { class: "toggle",
                        input {
                            r#type: "checkbox",
                            checked: current.celebrate_completion,
                            onchange: move |evt| draft.write().celebrate_completion = evt.checked(),
                        }
                        span { {t!("planner-celebration")} }
                    }
                }

                div { class: "form__actions",
                    button { class: "button button--ghost", r#type: "button", onclick: on_cancel,
                        {t!("planner-cancel")}
                    }
                    button { class: "button button--primary", r#type: "submit", {t!("planner-submit")} }
                }
                StatusLine { status: status() }
            }
            p { class: "page-planner__inspiration", {inspiration} }
        }
    }
}
