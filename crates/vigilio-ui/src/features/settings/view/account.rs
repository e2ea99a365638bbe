//! Password change and MovieDB key forms.
//!
//! # Design
//! - Validate locally first; the typed error's text is the banner.
//! - The MovieDB key is probed against the public API before it is saved.

use crate::app::api::ApiCtx;
use crate::app::preferences::redirect;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::core::config::CONFIG;
use crate::features::settings::state::{
    DEFAULT_ADMIN_PASSWORD, MOVIEDB_KEY, moviedb_probe_url, saved_message, validate_moviedb_key,
    validate_password,
};
use crate::services::api::describe;
use gloo_timers::callback::Timeout;
use vigilio_api_models::{ChangePasswordRequest, SettingsPatch};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

#[function_component(ChangePasswordForm)]
pub(crate) fn change_password_form() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let password = use_state(String::new);
    let repeat = use_state(String::new);
    let error = use_state(String::new);
    let info = use_state(String::new);
    let busy = use_state(|| false);
    let redirect_timer = use_mut_ref(|| None as Option<Timeout>);

    let on_submit = {
        let password = password.clone();
        let repeat = repeat.clone();
        let error = error.clone();
        let info = info.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validate_password(&password, &repeat) {
                error.set(invalid.to_string());
                return;
            }
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            error.set(String::new());
            busy.set(true);
            let request = ChangePasswordRequest {
                current_password: DEFAULT_ADMIN_PASSWORD.to_string(),
                new_password: (*password).clone(),
            };
            let error = error.clone();
            let info = info.clone();
            let busy = busy.clone();
            let redirect_timer = redirect_timer.clone();
            spawn_local(async move {
                match api_ctx.client.change_password(&request).await {
                    Ok(_) => {
                        info.set("Password has been changed. Redirecting...".to_string());
                        *redirect_timer.borrow_mut() =
                            Some(Timeout::new(CONFIG.redirect_delay_ms, || redirect("/")));
                    }
                    Err(err) => {
                        error.set(describe(&err));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <form class="change-password panel" onsubmit={on_submit}>
            <h2>{"Change Password"}</h2>
            <p class="muted">{"The default admin password must be changed before continuing."}</p>
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <label class="label" for="new-password">{"New password"}</label>
            <input
                id="new-password"
                class="input"
                type="password"
                autocomplete="new-password"
                value={(*password).clone()}
                oninput={bind_input(&password)}
            />
            <label class="label" for="repeat-password">{"Repeat password"}</label>
            <input
                id="repeat-password"
                class="input"
                type="password"
                autocomplete="new-password"
                value={(*repeat).clone()}
                oninput={bind_input(&repeat)}
            />
            <button class="btn btn-primary" type="submit" disabled={*busy}>{"Change password"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieDbKeyFormProps {
    pub current: String,
    pub on_saved: Callback<()>,
}

#[function_component(MovieDbKeyForm)]
pub(crate) fn moviedb_key_form(props: &MovieDbKeyFormProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let key = use_state(|| props.current.clone());
    let error = use_state(String::new);
    let info = use_state(String::new);
    let busy = use_state(|| false);

    let on_submit = {
        let key = key.clone();
        let error = error.clone();
        let info = info.clone();
        let busy = busy.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value = key.trim().to_string();
            if let Err(invalid) = validate_moviedb_key(&value) {
                error.set(invalid.to_string());
                return;
            }
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            error.set(String::new());
            busy.set(true);
            let error = error.clone();
            let info = info.clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let client = api_ctx.client.clone();
                let saved = match client.fetch_external(&moviedb_probe_url(&value)).await {
                    Ok(_) => client.save_settings(&SettingsPatch::single(MOVIEDB_KEY, value)).await,
                    Err(err) => Err(err),
                };
                busy.set(false);
                match saved {
                    Ok(_) => {
                        info.set(saved_message(MOVIEDB_KEY));
                        on_saved.emit(());
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };

    html! {
        <form class="moviedb-key" onsubmit={on_submit}>
            <h3>{"MovieDB API Key"}</h3>
            <p class="muted">
                {"Movie metadata is fetched from "}
                <a href="https://www.themoviedb.org/settings/api" target="_blank" rel="noopener noreferrer">{"The Movie Database"}</a>
                {". Paste your API key below."}
            </p>
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <input
                class="input"
                placeholder="API key"
                value={(*key).clone()}
                oninput={bind_input(&key)}
            />
            <button class="btn btn-primary" type="submit" disabled={*busy}>{"Save"}</button>
        </form>
    }
}
