//! Dotenv editor tab.

use crate::app::api::ApiCtx;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::core::config::CONFIG;
use crate::features::settings::state::saved_message;
use crate::services::api::describe;
use gloo_timers::callback::Timeout;
use std::collections::BTreeMap;
use vigilio_api_models::SettingsPatch;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EnvironmentTabProps {
    pub dotenv: BTreeMap<String, String>,
    pub on_saved: Callback<()>,
}

#[function_component(EnvironmentTab)]
pub(crate) fn environment_tab(props: &EnvironmentTabProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let error = use_state(String::new);
    let info = use_state(String::new);
    let refetch = use_mut_ref(|| None as Option<Timeout>);

    let on_save = {
        let error = error.clone();
        let info = info.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |patch: SettingsPatch| {
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            if patch.dotenv.is_empty() {
                return;
            }
            let keys: Vec<String> = patch.dotenv.keys().cloned().collect();
            let error = error.clone();
            let info = info.clone();
            let refetch = refetch.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api_ctx.client.save_settings(&patch).await {
                    Ok(_) => {
                        info.set(saved_message(&keys.join(", ")));
                        *refetch.borrow_mut() =
                            Some(Timeout::new(CONFIG.refetch_delay_ms, move || on_saved.emit(())));
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };

    html! {
        <div class="environment-settings">
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <table class="table env-table">
                <thead>
                    <tr><th>{"Key"}</th><th>{"Value"}</th><th></th></tr>
                </thead>
                <tbody>
                    { for props.dotenv.iter().map(|(key, value)| html! {
                        <EnvRow key={key.clone()} name={key.clone()} value={value.clone()} on_save={on_save.clone()} />
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EnvRowProps {
    name: String,
    value: String,
    on_save: Callback<SettingsPatch>,
}

#[function_component(EnvRow)]
fn env_row(props: &EnvRowProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(|| props.value.clone());

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };
    let on_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(value.clone());
            editing.set(true);
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };
    let on_submit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let name = props.name.clone();
        let value = props.value.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            editing.set(false);
            let patch = if *draft == value {
                SettingsPatch::default()
            } else {
                SettingsPatch::single(name.clone(), (*draft).clone())
            };
            on_save.emit(patch);
        })
    };

    html! {
        <tr>
            <td class="env-key">{props.name.clone()}</td>
            if *editing {
                <td colspan="2">
                    <form class="env-edit" onsubmit={on_submit}>
                        <input class="input input-sm" value={(*draft).clone()} oninput={on_input} />
                        <button class="btn btn-primary btn-sm" type="submit">{"Save"}</button>
                        <button class="btn btn-ghost btn-sm" type="button" onclick={on_cancel}>{"Cancel"}</button>
                    </form>
                </td>
            } else {
                <td class="env-value">{props.value.clone()}</td>
                <td><button class="btn btn-ghost btn-xs" onclick={on_edit}>{"Edit"}</button></td>
            }
        </tr>
    }
}
