use dioxus::prelude::*;

use crate::catalog::{catalog, AvatarSource};
use crate::components::{nav_link, Avatar, FormStatus, NavTarget, StatusLine};
use crate::core::avatar::avatar_data_url;
use crate::core::drafts::ProfileDraft;
use crate::core::error::AvatarError;
use crate::i18n::use_language_marker;
use crate::t;

/// Staged profile edits. The draft lives only as long as the page.
#[component]
pub fn EditProfile() -> Element {
    let _lang = use_language_marker();
    let mut draft = use_signal(|| ProfileDraft::from_profile(catalog().profile()));
    let mut status = use_signal(|| FormStatus::Idle);

    let on_avatar = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            status.set(FormStatus::Error(AvatarError::NoFile.to_string()));
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            status.set(FormStatus::Error(AvatarError::NoFile.to_string()));
            return;
        };

        spawn(async move {
            let loaded = match engine.read_file(&name).await {
                Some(bytes) => avatar_data_url(&name, &bytes),
                None => Err(AvatarError::ReadFailed { name: name.clone() }),
            };
            match loaded {
                Ok(url) => {
                    tracing::debug!(file = %name, "avatar staged");
                    draft.write().avatar = AvatarSource::DataUrl(url);
                    status.set(FormStatus::Idle);
                }
                Err(err) => {
                    tracing::warn!(file = %name, %err, "avatar rejected");
                    status.set(FormStatus::Error(err.to_string()));
                }
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = draft.read().validate();
        match outcome {
            Ok(update) => {
                match serde_json::to_string(&update) {
                    Ok(json) => tracing::info!(username = %update.username, payload = %json, "profile saved"),
                    Err(err) => tracing::warn!(%err, "couldn't serialize profile update"),
                }
                status.set(FormStatus::Done(t!("edit-saved")));
            }
            Err(err) => status.set(FormStatus::Error(err.to_string())),
        }
    };

    let current = draft();
    let cancel = nav_link(NavTarget::Profile, "button button--ghost", &t!("edit-cancel"));

    rsx! {
        section { class: "page page-form page-edit-profile",
            header { class: "page__header page__header--centered",
                h1 { {t!("edit-title")} }
            }
            form { class: "card form", onsubmit: on_submit,
                label { class: "avatar-upload",
                    Avatar { source: current.avatar.clone(), name: current.name.clone() }
                    span { class: "visually-hidden", {t!("edit-upload")} }
                    input {
                        class: "visually-hidden",
                        r#type: "file",
                        accept: "image/*",
                        multiple: false,
                        onchange: on_avatar,
                    }
                    span { class: "avatar-upload__hint", {t!("edit-upload-hint")} }
                }
                label { class: "form__field",
                    span { {t!("edit-field-name")} }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: t!("edit-name-placeholder"),
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("edit-field-username")} }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: t!("edit-username-placeholder"),
                        value: "{current.username}",
                        oninput: move |evt| draft.write().username = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("edit-field-bio")} }
                    textarea {
                        class: "input",
                        rows: "4",
                        placeholder: t!("edit-bio-placeholder"),
                        value: "{current.bio}",
                        oninput: move |evt| draft.write().bio = evt.value(),
                    }
                }
                div { class: "form__actions",
                    {cancel}
                    button { class: "button button--primary", r#type: "submit", {t!("edit-save")} }
                }
                StatusLine { status: status() }
            }
        }
    }
}
