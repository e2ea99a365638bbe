//! Torrent status table.
//!
//! # Design
//! - Poll immediately on mount, then on a fixed interval owned by the component.
//! - The table state is shared with the in-flight requests through a `RefCell`; a forced
//!   redraw follows every reducer call.
//! - Dropping the interval is the only way polling stops; the breaker decides when.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::loading::PlaceholderRow;
use crate::components::modal::ConfirmModal;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::core::config::CONFIG;
use crate::core::poll::PollHandle;
use crate::features::torrents::state::{
    TableBody, TorrentTableState, delete_command, success_message,
};
use crate::services::api::describe;
use gloo::console;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use vigilio_api_models::{TorrentCommand, TorrentOperationRequest, TorrentStatus};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

const COLUMNS: u32 = 4;

#[function_component(TorrentStatusPage)]
pub(crate) fn torrent_status_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let table = use_mut_ref(|| TorrentTableState::new(CONFIG.max_poll_failures));
    let poller = use_mut_ref(PollHandle::<Interval>::idle);
    let info = use_state(String::new);
    let redraw = use_force_update();

    {
        let api_ctx = api_ctx.clone();
        let table = table.clone();
        let poller = poller.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let stopper = poller.clone();
                    let poll = Rc::new(move || {
                        let client = client.clone();
                        let table = table.clone();
                        let stopper = stopper.clone();
                        let redraw = redraw.clone();
                        spawn_local(async move {
                            let verdict = match client.fetch_torrents().await {
                                Ok(response) => table.borrow_mut().apply_response(response),
                                Err(err) => table.borrow_mut().apply_failure(describe(&err)),
                            };
                            if stopper.borrow_mut().settle(verdict) {
                                console::log!("torrent status polling stopped after repeated failures");
                            }
                            redraw.force_update();
                        });
                    });
                    poll();
                    let tick = poll.clone();
                    poller
                        .borrow_mut()
                        .start(Interval::new(CONFIG.poll_interval_ms, move || tick()));
                }
                move || poller.borrow_mut().release()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_command = {
        let client = api_ctx.client.clone();
        let table = table.clone();
        let info = info.clone();
        let redraw = redraw.clone();
        Callback::from(move |(hash, command): (String, TorrentCommand)| {
            let client = client.clone();
            let table = table.clone();
            let info = info.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let request = TorrentOperationRequest {
                    info_hashes: vec![hash],
                    command,
                };
                match client.torrent_operation(&request).await {
                    Ok(_) => info.set(success_message(command)),
                    Err(err) => {
                        table.borrow_mut().set_error(describe(&err));
                        redraw.force_update();
                    }
                }
            });
        })
    };

    let state = table.borrow();
    let body = match state.body() {
        TableBody::Hidden => html! {},
        TableBody::Loading => html! { <PlaceholderRow text="Loading..." columns={COLUMNS} /> },
        TableBody::Empty => html! { <PlaceholderRow text="No results" columns={COLUMNS} /> },
        TableBody::Rows => html! {
            { for state.rows.iter().map(|row| html! {
                <TorrentRow key={row.hash.clone()} row={row.clone()} on_command={on_command.clone()} />
            }) }
        },
    };

    html! {
        <section class="torrent-status panel">
            <ErrorPanel message={state.error.clone()} />
            <InfoPanel message={(*info).clone()} />
            <div class="panel-head">
                <h3>{"Torrents"}</h3>
                if state.polling_stopped() {
                    <span class="pill subtle">{"Updates paused"}</span>
                }
            </div>
            <table class="table torrent-table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"State"}</th><th>{"Progress"}</th><th>{"Actions"}</th></tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TorrentRowProps {
    row: TorrentStatus,
    on_command: Callback<(String, TorrentCommand)>,
}

#[function_component(TorrentRow)]
fn torrent_row(props: &TorrentRowProps) -> Html {
    let permanent = use_state(|| false);
    let percent = props.row.percent();
    let action = |command: TorrentCommand| {
        let on_command = props.on_command.clone();
        let hash = props.row.hash.clone();
        Callback::from(move |_: MouseEvent| on_command.emit((hash.clone(), command)))
    };
    let on_delete = {
        let on_command = props.on_command.clone();
        let hash = props.row.hash.clone();
        let permanent = permanent.clone();
        Callback::from(move |()| on_command.emit((hash.clone(), delete_command(*permanent))))
    };
    let on_permanent = {
        let permanent = permanent.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                permanent.set(input.checked());
            }
        })
    };

    html! {
        <tr class="torrent-row">
            <td class="torrent-name">{props.row.name.clone()}</td>
            <td class="torrent-state">{props.row.state.clone()}</td>
            <td class="torrent-progress">
                <progress class="progress" value={percent.to_string()} max="100"></progress>
                <span>{format!("{percent}%")}</span>
            </td>
            <td class="torrent-actions">
                <button class="btn btn-ghost btn-xs" onclick={action(TorrentCommand::ForceStart)}>{"Force start"}</button>
                <button class="btn btn-ghost btn-xs" onclick={action(TorrentCommand::Resume)}>{"Resume"}</button>
                <button class="btn btn-ghost btn-xs" onclick={action(TorrentCommand::Pause)}>{"Pause"}</button>
                <ConfirmModal
                    trigger={html! { {"Delete"} }}
                    trigger_class={classes!("btn", "btn-error", "btn-xs")}
                    title="Delete torrent"
                    confirm_text="Delete"
                    on_confirm={on_delete}
                >
                    <p>{format!("{} will be removed from the torrent client.", props.row.name)}</p>
                    <label class="label cursor-pointer">
                        <input type="checkbox" class="checkbox" checked={*permanent} onchange={on_permanent} />
                        <span>{"Delete files permanently?"}</span>
                    </label>
                </ConfirmModal>
            </td>
        </tr>
    }
}
