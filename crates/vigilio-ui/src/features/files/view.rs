//! File manager screen and tree table.
//!
//! # Design
//! - The screen owns the listing, the selection, and the banners; the table only reports toggles.
//! - Selected keys that vanish from a fresh listing are dropped on every fetch.
//! - Deletion is gated by the confirmation modal and always followed by a re-fetch.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::loading::PlaceholderRow;
use crate::components::modal::ConfirmModal;
use crate::components::panel::{ErrorPanel, InfoPanel, MessagePanel, PanelTone};
use crate::core::format::{file_icon, file_type_label, indent_px, size_mib};
use crate::features::files::tree::{
    FileRow, FileTree, Selection, SelectionChange, listing_error, row_background,
};
use crate::services::api::describe;
use vigilio_api_models::{FileCommand, FilesRequest, FilesResponse, MovieId, operation_message};
use yew::platform::spawn_local;
use yew::prelude::*;

const MISSING_FILES_TITLE: &str = "There are missing files!";

#[derive(Properties, PartialEq)]
pub(crate) struct FileTreeProps {
    pub rows: Vec<FileRow>,
    pub selection: Selection,
    pub on_change: Callback<SelectionChange>,
}

/// One table row per node, children nested under their parent.
#[function_component(FileTreeTable)]
pub(crate) fn file_tree_table(props: &FileTreeProps) -> Html {
    html! {
        { for props.rows.iter().map(|row| {
            let checked = props.selection.contains(&row.key);
            let on_toggle = {
                let row = row.clone();
                let selection = props.selection.clone();
                let on_change = props.on_change.clone();
                Callback::from(move |_: Event| {
                    let mut next = selection.clone();
                    if let Some(change) = next.toggle(&row) {
                        on_change.emit(change);
                    }
                })
            };
            html! {
                <FileTreeRow key={row.key.clone()} row={row.clone()} checked={checked} on_toggle={on_toggle} />
            }
        }) }
    }
}

#[derive(Properties, PartialEq)]
struct FileTreeRowProps {
    row: FileRow,
    checked: bool,
    on_toggle: Callback<Event>,
}

#[function_component(FileTreeRow)]
fn file_tree_row(props: &FileTreeRowProps) -> Html {
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let row = &props.row;

    html! {
        <tr
            class={classes!("file-row", row.used.then_some("used-file"), props.checked.then_some("checked"))}
            style={row_background(props.checked, *hovered)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <td style={format!("padding-left: {}px", indent_px(row.depth))}>
                if row.selectable {
                    <input type="checkbox" class="checkbox" checked={props.checked} onchange={props.on_toggle.clone()} />
                }
                <Icon glyph={Glyph::File(file_icon(row.suffix.as_deref()))} size={16} />
                <span class="file-name">{row.name.clone()}</span>
            </td>
            <td>{row.date.clone()}</td>
            <td>{file_type_label(row.suffix.as_deref())}</td>
            <td>{size_mib(row.size).unwrap_or_default()}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FileManagerProps {
    pub movie_id: MovieId,
}

#[function_component(FileManager)]
pub(crate) fn file_manager(props: &FileManagerProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let listing = use_state(|| None as Option<FilesResponse>);
    let selection = use_state(Selection::default);
    let error = use_state(String::new);
    let info = use_state(String::new);
    let reload = use_state(|| 0_u32);
    let tree = use_memo(
        |listing: &Option<FilesResponse>| {
            listing
                .as_ref()
                .map_or_else(FileTree::default, |response| FileTree::build(&response.files))
        },
        (*listing).clone(),
    );

    {
        let api_ctx = api_ctx.clone();
        let listing = listing.clone();
        let selection = selection.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(movie_id, _)| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let movie_id = *movie_id;
                    spawn_local(async move {
                        match client.fetch_files(movie_id).await {
                            Ok(response) => {
                                let fresh = FileTree::build(&response.files);
                                let mut kept = (*selection).clone();
                                kept.retain_present(&fresh);
                                selection.set(kept);
                                if let Some(message) = listing_error(&response) {
                                    error.set(message.to_string());
                                }
                                listing.set(Some(response));
                            }
                            Err(err) => {
                                error.set(describe(&err));
                                listing.set(Some(FilesResponse::default()));
                            }
                        }
                    });
                }
                || ()
            },
            (props.movie_id, *reload),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |change: SelectionChange| {
            let mut next = (*selection).clone();
            next.apply(&change);
            selection.set(next);
        })
    };

    let on_delete = {
        let client = api_ctx.client.clone();
        let tree = tree.clone();
        let selection = selection.clone();
        let error = error.clone();
        let info = info.clone();
        let reload = reload.clone();
        let movie_id = props.movie_id;
        Callback::from(move |()| {
            let request = FilesRequest {
                movie_id,
                command: FileCommand::DeleteFiles,
                files: tree.resolve(&selection),
            };
            let client = client.clone();
            let selection = selection.clone();
            let error = error.clone();
            let info = info.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.file_operation(&request).await {
                    Ok(body) => {
                        info.set(operation_message(&body));
                        selection.set(Selection::default());
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };

    let nonselectable: Vec<String> = tree.first_root_name().map(str::to_string).into_iter().collect();
    let rows = tree.rows(&nonselectable);
    let (missing, critical) = listing.as_ref().map_or_else(
        || (Vec::new(), Vec::new()),
        |response| (response.missing_files.clone(), response.used_files.clone()),
    );
    let touches_critical = selection.touches(&critical);

    let body = match listing.as_ref() {
        None => html! { <PlaceholderRow text="Loading..." columns={4} /> },
        Some(_) => html! {
            <FileTreeTable rows={rows} selection={(*selection).clone()} on_change={on_change} />
        },
    };

    html! {
        <section class="file-manager panel">
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <MessagePanel tone={PanelTone::Error} lines={missing} title={AttrValue::from(MISSING_FILES_TITLE)} />
            <div class="panel-head">
                <h3>{"File Manager"}</h3>
                <span class="pill subtle">{format!("{} selected", selection.len())}</span>
                <ConfirmModal
                    trigger={html! { <><Icon glyph={Glyph::Trash} size={16} />{"Delete selected"}</> }}
                    trigger_class={classes!("btn", "btn-error", "btn-sm")}
                    title="Delete files"
                    confirm_text="Delete"
                    disabled={selection.is_empty()}
                    on_confirm={on_delete}
                >
                    <p>{format!("{} selected file(s) and folder(s) will be deleted.", selection.len())}</p>
                    if touches_critical {
                        <p class="text-error critical-warning">
                            {"Some selected files are used by the movie. Deleting them will break playback."}
                        </p>
                    }
                </ConfirmModal>
            </div>
            <table class="table file-table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Date"}</th><th>{"Type"}</th><th>{"Size (MB)"}</th></tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </section>
    }
}
