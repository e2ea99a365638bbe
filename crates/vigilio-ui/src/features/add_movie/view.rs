//! Add-movie page.
//!
//! # Design
//! - The active tab and the chosen source persist as local preferences.
//! - Typing restarts an idle timer; the gate decides whether the settled text is sent.
//! - Every add goes through the same request builder as the manual form.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::app::preferences::{load_pref, persist_pref};
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::components::tabs::Tabs;
use crate::core::config::CONFIG;
use crate::core::prefs::{ADD_MOVIE_TAB_KEY, SELECTED_SOURCE_KEY};
use crate::features::add_movie::state::{
    AddMovieTab, ResultColumns, SearchGate, build_request, parse_results, result_heading,
    search_url,
};
use crate::features::sources::schema::{choose_source, parse_schema};
use crate::services::api::describe;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use vigilio_api_models::{AddMovieRequest, MudSource, SearchResult, operation_message};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(AddMoviePage)]
pub(crate) fn add_movie_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let tab = use_state(|| AddMovieTab::from_label(load_pref::<String>(ADD_MOVIE_TAB_KEY).as_deref()));
    let error = use_state(String::new);
    let info = use_state(String::new);

    let Some(api_ctx) = api_ctx else {
        return missing_api_context();
    };

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |label: &'static str| {
            persist_pref(ADD_MOVIE_TAB_KEY, &label);
            tab.set(AddMovieTab::from_label(Some(label)));
        })
    };
    let on_add = {
        let client = api_ctx.client.clone();
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |request: AddMovieRequest| {
            let client = client.clone();
            let error = error.clone();
            let info = info.clone();
            spawn_local(async move {
                match client.add_movie(&request).await {
                    Ok(body) => {
                        error.set(String::new());
                        info.set(operation_message(&body));
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };
    let on_invalid = {
        let error = error.clone();
        Callback::from(move |message: String| error.set(message))
    };

    html! {
        <section class="add-movie panel">
            <h2>{"Add Movie"}</h2>
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <Tabs
                labels={AddMovieTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>()}
                active={tab.label()}
                on_select={on_select}
            />
            { match *tab {
                AddMovieTab::Search => html! { <SourceSearch on_add={on_add} on_invalid={on_invalid} /> },
                AddMovieTab::Manual => html! { <ManualAddForm on_add={on_add} on_invalid={on_invalid} /> },
            } }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AddProps {
    on_add: Callback<AddMovieRequest>,
    on_invalid: Callback<String>,
}

fn submit(imdb_id: &str, source: &str, props: &AddProps) {
    match build_request(imdb_id.trim(), source.trim()) {
        Ok(request) => props.on_add.emit(request),
        Err(invalid) => props.on_invalid.emit(invalid.to_string()),
    }
}

#[function_component(ManualAddForm)]
fn manual_add_form(props: &AddProps) -> Html {
    let imdb_id = use_state(String::new);
    let source = use_state(String::new);

    let on_imdb = {
        let imdb_id = imdb_id.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                imdb_id.set(input.value());
            }
        })
    };
    let on_source = {
        let source = source.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                source.set(input.value());
            }
        })
    };
    let on_submit = {
        let imdb_id = imdb_id.clone();
        let source = source.clone();
        let on_add = props.on_add.clone();
        let on_invalid = props.on_invalid.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let props = AddProps {
                on_add: on_add.clone(),
                on_invalid: on_invalid.clone(),
            };
            submit(&imdb_id, &source, &props);
        })
    };

    html! {
        <form class="manual-add" onsubmit={on_submit}>
            <label class="label" for="imdb-id">{"IMDB ID or IMDB link"}</label>
            <input
                id="imdb-id"
                class="input"
                placeholder="tt0111161"
                value={(*imdb_id).clone()}
                oninput={on_imdb}
            />
            <label class="label" for="torrent-source">{"Torrent source"}</label>
            <textarea
                id="torrent-source"
                class="textarea"
                rows="3"
                placeholder="Magnet link or torrent URL"
                value={(*source).clone()}
                oninput={on_source}
            />
            <button class="btn btn-primary" type="submit">{"Add movie"}</button>
        </form>
    }
}

#[function_component(SourceSearch)]
fn source_search(props: &AddProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let sources = use_state(|| None as Option<Vec<MudSource>>);
    let selected = use_state(|| load_pref::<i64>(SELECTED_SOURCE_KEY));
    let query = use_state(String::new);
    let results = use_state(|| None as Option<Vec<SearchResult>>);
    let searching = use_state(|| false);
    let gate = use_mut_ref(|| SearchGate::new(CONFIG.search_min_chars));
    let idle = use_mut_ref(|| None as Option<Timeout>);

    {
        let api_ctx = api_ctx.clone();
        let sources = sources.clone();
        let selected = selected.clone();
        let on_invalid = props.on_invalid.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    spawn_local(async move {
                        match api_ctx.client.fetch_sources().await {
                            Ok(list) => {
                                let chosen = choose_source(&list, *selected).map(|source| source.id);
                                if chosen != *selected {
                                    if let Some(id) = chosen {
                                        persist_pref(SELECTED_SOURCE_KEY, &id);
                                    }
                                    selected.set(chosen);
                                }
                                sources.set(Some(list));
                            }
                            Err(err) => {
                                on_invalid.emit(describe(&err));
                                sources.set(Some(Vec::new()));
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let current = (*sources)
        .as_ref()
        .and_then(|list| choose_source(list, *selected).cloned());

    let run_search = {
        let api_ctx = api_ctx.clone();
        let results = results.clone();
        let searching = searching.clone();
        let on_invalid = props.on_invalid.clone();
        let current = current.clone();
        Rc::new(move |text: String| {
            let (Some(api_ctx), Some(source)) = (api_ctx.clone(), current.clone()) else {
                return;
            };
            let schema = match parse_schema(&source.source) {
                Ok(schema) => schema,
                Err(invalid) => {
                    on_invalid.emit(invalid.to_string());
                    return;
                }
            };
            let url = search_url(&schema.api_url, &text);
            let results = results.clone();
            let searching = searching.clone();
            let on_invalid = on_invalid.clone();
            searching.set(true);
            spawn_local(async move {
                match api_ctx.client.fetch_external(&url).await {
                    Ok(payload) => match parse_results(&schema, &payload) {
                        Ok(found) => results.set(Some(found)),
                        Err(err) => on_invalid.emit(err.to_string()),
                    },
                    Err(err) => on_invalid.emit(describe(&err)),
                }
                searching.set(false);
            });
        })
    };

    let on_query = {
        let query = query.clone();
        let gate = gate.clone();
        let idle = idle.clone();
        let run_search = run_search.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            query.set(text.clone());
            idle.borrow_mut().take();
            if !gate.borrow().long_enough(&text) {
                return;
            }
            let gate = gate.clone();
            let run_search = run_search.clone();
            *idle.borrow_mut() = Some(Timeout::new(CONFIG.search_debounce_ms, move || {
                if gate.borrow_mut().settle(&text) {
                    run_search(text);
                }
            }));
        })
    };
    let on_source = {
        let selected = selected.clone();
        let results = results.clone();
        let gate = gate.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Ok(id) = select.value().parse::<i64>() {
                persist_pref(SELECTED_SOURCE_KEY, &id);
                selected.set(Some(id));
                results.set(None);
                gate.borrow_mut().reset();
            }
        })
    };

    let Some(list) = (*sources).as_ref() else {
        return html! { <p class="muted">{"Loading..."}</p> };
    };
    if list.is_empty() {
        return html! {
            <p class="muted">{"No search sources are configured. Add one under Settings, Search Sources."}</p>
        };
    }
    let selected_id = current.as_ref().map(|source| source.id);

    html! {
        <div class="source-search">
            <div class="toolbar">
                <select class="select select-sm" onchange={on_source}>
                    { for list.iter().map(|source| html! {
                        <option value={source.id.to_string()} selected={Some(source.id) == selected_id}>
                            {source.name.clone()}
                        </option>
                    }) }
                </select>
                <input
                    class="input input-sm"
                    type="search"
                    placeholder={format!("Search (at least {} characters)", CONFIG.search_min_chars)}
                    value={(*query).clone()}
                    oninput={on_query}
                />
                if *searching {
                    <span class="loading loading-spinner loading-sm"></span>
                }
            </div>
            { match (*results).as_ref() {
                None => html! {},
                Some(found) if found.is_empty() => html! { <p class="muted">{"No results found."}</p> },
                Some(found) => html! {
                    <div class="search-result-list">
                        { for found.iter().map(|result| html! {
                            <SearchResultItem
                                key={result.imdb_id.clone()}
                                result={result.clone()}
                                on_add={props.on_add.clone()}
                                on_invalid={props.on_invalid.clone()}
                            />
                        }) }
                    </div>
                },
            } }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SearchResultItemProps {
    result: SearchResult,
    on_add: Callback<AddMovieRequest>,
    on_invalid: Callback<String>,
}

#[function_component(SearchResultItem)]
fn search_result_item(props: &SearchResultItemProps) -> Html {
    let expanded = use_state(|| false);
    let on_expand = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let columns = ResultColumns::for_sources(&props.result.sources);
    let adders = AddProps {
        on_add: props.on_add.clone(),
        on_invalid: props.on_invalid.clone(),
    };
    let adders = Rc::new(adders);

    html! {
        <div class="search-result">
            <button class="search-result-head" onclick={on_expand}>
                if let Some(image) = props.result.image.clone() {
                    <img src={image} alt="" loading="lazy" />
                }
                <span>{result_heading(&props.result)}</span>
                <span class="muted">{format!("{} torrents", props.result.sources.len())}</span>
            </button>
            if *expanded {
                <table class="table table-sm">
                    <thead>
                        <tr>
                            if columns.quality { <th>{"Quality"}</th> }
                            if columns.kind { <th>{"Type"}</th> }
                            if columns.seeds { <th>{"Seeds"}</th> }
                            if columns.size { <th>{"Size"}</th> }
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.result.sources.iter().map(|entry| {
                            let adders = adders.clone();
                            let imdb_id = props.result.imdb_id.clone();
                            let link = entry.source.clone();
                            html! {
                                <tr>
                                    if columns.quality { <td>{entry.quality.clone().unwrap_or_default()}</td> }
                                    if columns.kind { <td>{entry.kind.clone().unwrap_or_default()}</td> }
                                    if columns.seeds { <td>{entry.seeds.clone().unwrap_or_default()}</td> }
                                    if columns.size { <td>{entry.size.clone().unwrap_or_default()}</td> }
                                    <td>
                                        <button
                                            class="btn btn-primary btn-xs"
                                            onclick={Callback::from(move |_: MouseEvent| submit(&imdb_id, &link, &adders))}
                                        >
                                            {"Download&Add"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
