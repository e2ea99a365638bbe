//! Subtitle language picker and subtitle re-download.

use crate::app::api::ApiCtx;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::features::settings::languages::{LANGUAGES, filter_languages};
use crate::features::settings::state::{
    MovieSelection, SUBTITLE_LANGS_KEY, SubtitleSelection, matches_filter, saved_message,
};
use crate::services::api::{MovieQuery, describe};
use vigilio_api_models::{Movie, RedownloadSubtitlesRequest, SettingsPatch, operation_message};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

fn filter_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

#[derive(Properties, PartialEq)]
pub(crate) struct SubtitleLanguagesFormProps {
    /// Stored comma-joined codes.
    pub current: String,
    pub on_saved: Callback<()>,
}

#[function_component(SubtitleLanguagesForm)]
pub(crate) fn subtitle_languages_form(props: &SubtitleLanguagesFormProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let selection = use_state(|| SubtitleSelection::from_setting(&props.current));
    let filter = use_state(String::new);
    let error = use_state(String::new);
    let info = use_state(String::new);

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |code: &'static str| {
            let mut next = (*selection).clone();
            next.toggle(code);
            selection.set(next);
        })
    };
    let on_save = {
        let selection = selection.clone();
        let error = error.clone();
        let info = info.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let patch = SettingsPatch::single(SUBTITLE_LANGS_KEY, selection.to_setting());
            let error = error.clone();
            let info = info.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api_ctx.client.save_settings(&patch).await {
                    Ok(_) => {
                        info.set(saved_message(SUBTITLE_LANGS_KEY));
                        on_saved.emit(());
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };

    let chosen: Vec<&str> = selection.codes().collect();
    html! {
        <div class="subtitle-languages">
            <h3>{"Subtitle Languages"}</h3>
            <p class="muted">{"Subtitles are downloaded in the selected languages."}</p>
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <div class="selected-languages">
                <span>{format!("{} selected", selection.count())}</span>
                { for chosen.iter().filter_map(|code| LANGUAGES.iter().find(|language| language.iso == *code)).map(|language| {
                    let on_toggle = on_toggle.clone();
                    let iso = language.iso;
                    html! {
                        <button class="pill" title="Remove" onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(iso))}>
                            {format!("{} ×", language.name)}
                        </button>
                    }
                }) }
            </div>
            <input
                class="input input-sm"
                type="search"
                placeholder="Filter languages"
                value={(*filter).clone()}
                oninput={filter_input(&filter)}
            />
            <ul class="language-list">
                { for filter_languages(&filter).map(|language| {
                    let on_toggle = on_toggle.clone();
                    let iso = language.iso;
                    html! {
                        <li key={iso}>
                            <label class="label cursor-pointer">
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    checked={selection.contains(iso)}
                                    onchange={Callback::from(move |_: Event| on_toggle.emit(iso))}
                                />
                                <span>{language.name}</span>
                                <span class="muted">{iso}</span>
                            </label>
                        </li>
                    }
                }) }
            </ul>
            <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
        </div>
    }
}

#[function_component(RedownloadSubtitlesTab)]
pub(crate) fn redownload_subtitles_tab() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let movies = use_state(Vec::<Movie>::new);
    let selection = use_state(MovieSelection::default);
    let filter = use_state(String::new);
    let error = use_state(String::new);
    let info = use_state(String::new);

    {
        let api_ctx = api_ctx.clone();
        let movies = movies.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    spawn_local(async move {
                        match api_ctx.client.fetch_movies(&MovieQuery::All).await {
                            Ok(response) => movies.set(response.movies),
                            Err(err) => error.set(describe(&err)),
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let visible: Vec<Movie> = movies
        .iter()
        .filter(|movie| matches_filter(&movie.title, &filter))
        .cloned()
        .collect();

    let on_all = {
        let selection = selection.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            next.select_all(&visible);
            selection.set(next);
        })
    };
    let on_none = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| selection.set(MovieSelection::default()))
    };
    let on_submit = {
        let selection = selection.clone();
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let request = RedownloadSubtitlesRequest {
                movie_ids: selection.ids(),
            };
            let error = error.clone();
            let info = info.clone();
            spawn_local(async move {
                match api_ctx.client.redownload_subtitles(&request).await {
                    Ok(body) => info.set(operation_message(&body)),
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };

    html! {
        <div class="redownload-subtitles">
            <h3>{"Redownload Subtitles"}</h3>
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <div class="toolbar">
                <input
                    class="input input-sm"
                    type="search"
                    placeholder="Filter movies"
                    value={(*filter).clone()}
                    oninput={filter_input(&filter)}
                />
                <button class="btn btn-ghost btn-sm" onclick={on_all}>{"Select all"}</button>
                <button class="btn btn-ghost btn-sm" onclick={on_none}>{"Select none"}</button>
                <span>{format!("{} selected", selection.len())}</span>
            </div>
            <ul class="movie-pick-list">
                { for visible.iter().map(|movie| {
                    let selection = selection.clone();
                    let id = movie.id;
                    html! {
                        <li key={id}>
                            <label class="label cursor-pointer">
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    checked={selection.contains(id)}
                                    onchange={Callback::from(move |_: Event| {
                                        let mut next = (*selection).clone();
                                        next.toggle(id);
                                        selection.set(next);
                                    })}
                                />
                                <span>{movie.title.clone()}</span>
                            </label>
                        </li>
                    }
                }) }
            </ul>
            <button class="btn btn-primary" disabled={selection.is_empty()} onclick={on_submit}>
                {"Redownload"}
            </button>
        </div>
    }
}
