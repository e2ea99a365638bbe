//! Streaming history list.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::loading::PlaceholderRow;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::core::format::date_part;
use crate::features::catalog::state::watch_link;
use crate::services::api::describe;
use vigilio_api_models::{
    ContinueResponse, ManagementCommand, MovieId, MovieManagementRequest, operation_message,
};
use yew::platform::spawn_local;
use yew::prelude::*;

const NO_HISTORY_MESSAGE: &str = "There is no streaming history.";

#[function_component(HistoryPage)]
pub(crate) fn history_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let history = use_state(|| None as Option<ContinueResponse>);
    let error = use_state(String::new);
    let info = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let history = history.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    spawn_local(async move {
                        match client.fetch_continue(None).await {
                            Ok(response) => history.set(Some(response)),
                            Err(err) => {
                                error.set(describe(&err));
                                history.set(Some(ContinueResponse::default()));
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

    let on_remove = {
        let client = api_ctx.client.clone();
        let error = error.clone();
        let info = info.clone();
        let reload = reload.clone();
        Callback::from(move |movie_id: MovieId| {
            let client = client.clone();
            let error = error.clone();
            let info = info.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let request = MovieManagementRequest {
                    movie_id,
                    command: ManagementCommand::DeleteContinue,
                };
                match client.movie_management(&request).await {
                    Ok(body) => info.set(operation_message(&body)),
                    Err(err) => error.set(describe(&err)),
                }
                reload.set(reload.wrapping_add(1));
            });
        })
    };

    let rows = match history.as_ref() {
        None => html! { <PlaceholderRow text="Loading..." columns={3} /> },
        Some(response) if response.entries.is_empty() => {
            html! { <PlaceholderRow text={NO_HISTORY_MESSAGE} columns={3} /> }
        }
        Some(response) => {
            let watch_path = response.relative_watch_path.clone().unwrap_or_default();
            html! {
                { for response.entries.iter().map(|entry| {
                    let movie_id = entry.movie.id;
                    let on_remove = on_remove.clone();
                    html! {
                        <tr key={movie_id}>
                            <td>{date_part(&entry.updated_at).to_string()}</td>
                            <td><a href={watch_link(&watch_path, movie_id)}>{entry.movie.title.clone()}</a></td>
                            <td>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    title="Remove from history"
                                    onclick={Callback::from(move |_: MouseEvent| on_remove.emit(movie_id))}
                                >
                                    <Icon glyph={Glyph::Trash} size={14} />
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            }
        }
    };

    html! {
        <section class="history panel">
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <h3>{"History"}</h3>
            <table class="table history-table">
                <thead>
                    <tr><th>{"Date"}</th><th>{"Movie"}</th><th></th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
