//! Background task screen.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::loading::PlaceholderRow;
use crate::components::modal::ConfirmModal;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::features::tasks::state::{
    NO_TASKS_MESSAGE, TaskBoard, TaskPlaceholder, TaskRow, cancelled_message,
};
use crate::services::api::describe;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(BackgroundTasksPage)]
pub(crate) fn background_tasks_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let board = use_state(TaskBoard::default);
    let info = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let board = board.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let mut next = (*board).clone();
                    next.begin_reload();
                    board.set(next.clone());
                    spawn_local(async move {
                        match client.fetch_tasks().await {
                            Ok(response) => next.apply_response(&response),
                            Err(err) => next.apply_failure(describe(&err)),
                        }
                        board.set(next);
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

    let on_reload = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(reload.wrapping_add(1)))
    };
    let on_cancel = {
        let client = api_ctx.client.clone();
        let board = board.clone();
        let info = info.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let client = client.clone();
            let board = board.clone();
            let info = info.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.cancel_task(&id).await {
                    Ok(_) => info.set(cancelled_message(&id)),
                    Err(err) => {
                        let mut next = (*board).clone();
                        next.error = describe(&err);
                        board.set(next);
                    }
                }
                reload.set(reload.wrapping_add(1));
            });
        })
    };

    let placeholder = match board.placeholder() {
        TaskPlaceholder::None => html! {},
        TaskPlaceholder::Loading => html! { <PlaceholderRow text="Loading..." columns={4} /> },
        TaskPlaceholder::Empty => html! { <PlaceholderRow text={NO_TASKS_MESSAGE} columns={4} /> },
    };

    html! {
        <section class="background-tasks panel">
            <ErrorPanel message={board.error.clone()} />
            <InfoPanel message={(*info).clone()} />
            <div class="panel-head">
                <h3>{"Background Tasks"}</h3>
                <button class="btn btn-ghost btn-sm" aria-label="Reload" onclick={on_reload}>
                    <Icon glyph={Glyph::Refresh} size={16} />
                </button>
            </div>
            <table class="table task-table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Arguments"}</th><th>{"ETA"}</th><th></th></tr>
                </thead>
                <tbody>
                    {placeholder}
                    { for board.groups.iter().map(|group| html! {
                        <>
                            <tr class="task-group"><th colspan="4">{group.title}</th></tr>
                            { for group.rows.iter().map(|row| task_row(row, &on_cancel)) }
                        </>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

fn task_row(row: &TaskRow, on_cancel: &Callback<String>) -> Html {
    let on_confirm = {
        let on_cancel = on_cancel.clone();
        let id = row.id.clone();
        Callback::from(move |()| on_cancel.emit(id.clone()))
    };
    html! {
        <tr key={row.id.clone()}>
            <td>{row.name.clone()}</td>
            <td class="task-args">{row.args.clone()}</td>
            <td>{row.eta.clone()}</td>
            <td>
                <ConfirmModal
                    trigger={html! { {"Cancel"} }}
                    trigger_class={classes!("btn", "btn-ghost", "btn-xs")}
                    title="Cancel process"
                    confirm_text="Cancel process"
                    on_confirm={on_confirm}
                >
                    <p>{format!("Process {} will be revoked and terminated.", row.id)}</p>
                </ConfirmModal>
            </td>
        </tr>
    }
}
