//! Search source list and add form.
//!
//! # Design
//! - The schema is validated on every keystroke; save stays disabled until it parses.
//! - Deletion goes through the confirmation modal, then the list re-fetches.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::loading::PlaceholderRow;
use crate::components::modal::ConfirmModal;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::features::sources::schema::SourceForm;
use crate::services::api::describe;
use vigilio_api_models::{MudSource, NewMudSource, operation_message};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

const SCHEMA_PLACEHOLDER: &str = "{\"apiUrl\": \"https://example.org/search?q=${searchInput}\"}";

#[function_component(SourcesPanel)]
pub(crate) fn sources_panel() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let sources = use_state(|| None as Option<Vec<MudSource>>);
    let form = use_state(SourceForm::default);
    let error = use_state(String::new);
    let info = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let sources = sources.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    spawn_local(async move {
                        match api_ctx.client.fetch_sources().await {
                            Ok(list) => sources.set(Some(list)),
                            Err(err) => {
                                error.set(describe(&err));
                                sources.set(Some(Vec::new()));
                            }
                        }
                    });
                }
                || ()
            },
            *reload,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.name = input.value();
                form.set(next);
            }
        })
    };
    let on_schema = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.schema = input.value();
                form.set(next);
            }
        })
    };
    let on_add = {
        let client = api_ctx.client.clone();
        let form = form.clone();
        let error = error.clone();
        let info = info.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !form.can_save() {
                return;
            }
            let source = NewMudSource {
                name: form.name.clone(),
                source: form.schema.clone(),
            };
            let client = client.clone();
            let form = form.clone();
            let error = error.clone();
            let info = info.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.add_source(&source).await {
                    Ok(body) => {
                        info.set(operation_message(&body));
                        form.set(SourceForm::default());
                    }
                    Err(err) => error.set(describe(&err)),
                }
                reload.set(reload.wrapping_add(1));
            });
        })
    };
    let on_delete = {
        let client = api_ctx.client.clone();
        let error = error.clone();
        let info = info.clone();
        let reload = reload.clone();
        Callback::from(move |source_id: i64| {
            let client = client.clone();
            let error = error.clone();
            let info = info.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.delete_source(source_id).await {
                    Ok(body) => info.set(operation_message(&body)),
                    Err(err) => error.set(describe(&err)),
                }
                reload.set(reload.wrapping_add(1));
            });
        })
    };

    let rows = match sources.as_ref() {
        None => html! { <PlaceholderRow text="Loading..." columns={3} /> },
        Some(list) if list.is_empty() => {
            html! { <PlaceholderRow text="No search sources yet." columns={3} /> }
        }
        Some(list) => html! {
            { for list.iter().map(|source| {
                let on_delete = on_delete.clone();
                let id = source.id;
                html! {
                    <tr key={id}>
                        <td>{source.name.clone()}</td>
                        <td><code class="source-schema">{source.source.clone()}</code></td>
                        <td>
                            <ConfirmModal
                                trigger={html! { <Icon glyph={Glyph::Trash} size={14} title={AttrValue::from("Delete")} /> }}
                                trigger_class={classes!("btn", "btn-ghost", "btn-xs")}
                                title="Delete search source"
                                confirm_text="Delete"
                                on_confirm={Callback::from(move |()| on_delete.emit(id))}
                            >
                                <p>{format!("{} will be removed.", source.name)}</p>
                            </ConfirmModal>
                        </td>
                    </tr>
                }
            }) }
        },
    };
    let schema_error = form.schema_error().map(|err| err.to_string()).unwrap_or_default();

    html! {
        <div class="search-sources">
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <table class="table sources-table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Schema"}</th><th></th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <form class="source-form" onsubmit={on_add}>
                <h4>{"Add search source"}</h4>
                <input
                    class="input input-sm"
                    placeholder="Name"
                    value={form.name.clone()}
                    oninput={on_name}
                />
                <textarea
                    class={classes!("textarea", (!schema_error.is_empty()).then_some("textarea-error"))}
                    rows="6"
                    placeholder={SCHEMA_PLACEHOLDER}
                    value={form.schema.clone()}
                    oninput={on_schema}
                />
                if !schema_error.is_empty() {
                    <p class="text-error text-sm">{schema_error.clone()}</p>
                }
                <button class="btn btn-primary btn-sm" type="submit" disabled={!form.can_save()}>{"Save"}</button>
            </form>
        </div>
    }
}
