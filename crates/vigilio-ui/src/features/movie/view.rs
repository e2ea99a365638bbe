//! Movie detail page: summary, management actions, and the file manager.

use crate::app::Route;
use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::modal::ConfirmModal;
use crate::components::panel::{ErrorPanel, InfoPanel};
use crate::core::format::{duration_minutes, resolution_label};
use crate::features::catalog::state::play_link;
use crate::features::catalog::view::AddToListButton;
use crate::features::files::view::FileManager;
use crate::services::api::{MovieQuery, describe};
use vigilio_api_models::{
    ManagementCommand, Movie, MovieId, MovieManagementRequest, operation_message,
};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const NO_DETAILS_MESSAGE: &str = "Movie details could not be fetched.";

#[derive(Properties, PartialEq)]
pub(crate) struct MovieDetailPageProps {
    pub movie_id: MovieId,
}

#[function_component(MovieDetailPage)]
pub(crate) fn movie_detail_page(props: &MovieDetailPageProps) -> Html {
    html! {
        <div class="movie-detail-page">
            <MovieDetail movie_id={props.movie_id} />
            <MovieManagement movie_id={props.movie_id} />
            <FileManager movie_id={props.movie_id} />
        </div>
    }
}

#[function_component(MovieDetail)]
fn movie_detail(props: &MovieDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let movie = use_state(|| None as Option<Option<Movie>>);
    let error = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let movie = movie.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(movie_id, _)| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let query = MovieQuery::Id(*movie_id);
                    spawn_local(async move {
                        match client.fetch_movies(&query).await {
                            Ok(response) => movie.set(Some(response.movies.into_iter().next())),
                            Err(err) => {
                                error.set(describe(&err));
                                movie.set(Some(None));
                            }
                        }
                    });
                }
                || ()
            },
            (props.movie_id, *reload),
        );
    }

    if api_ctx.is_none() {
        return missing_api_context();
    }
    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };

    let body = match movie.as_ref() {
        None => html! { <div class="skeleton movie-detail-skeleton"></div> },
        Some(None) => html! { <p class="muted">{NO_DETAILS_MESSAGE}</p> },
        Some(Some(movie)) => html! {
            <div class="movie-detail">
                <img
                    class="movie-detail-poster"
                    src={movie.poster_path_big.clone().unwrap_or_default()}
                    alt={movie.title.clone()}
                />
                <div class="movie-detail-body">
                    <h2>{movie.title.clone()}</h2>
                    <div class="movie-detail-badges">
                        { for movie.movie_content.iter().filter_map(|content| resolution_label(content.resolution_width)).map(|label| html! {
                            <span class="badge badge-resolution">{label}</span>
                        }) }
                        if let Some(score) = movie.imdb_score {
                            <span class="badge badge-imdb">{format!("IMDB {score:.1}")}</span>
                        }
                        if let Some(year) = movie.release_year() {
                            <span class="badge">{year.to_string()}</span>
                        }
                        if let Some(seconds) = movie.duration {
                            <span class="badge">{format!("{} mins", duration_minutes(seconds))}</span>
                        }
                    </div>
                    <p class="movie-overview">{movie.description.clone().unwrap_or_default()}</p>
                    <div class="movie-detail-actions">
                        <a class="btn btn-primary" href={play_link(movie.id)}>
                            <Icon glyph={Glyph::Play} size={16} />{"Play"}
                        </a>
                        <AddToListButton movie_id={movie.id} on_list={movie.my_list.is_some()} on_changed={on_changed} />
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <section class="panel">
            <ErrorPanel message={(*error).clone()} />
            {body}
        </section>
    }
}

#[function_component(MovieManagement)]
fn movie_management(props: &MovieDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let has_continue = use_state(|| false);
    let reveal_delete = use_state(|| false);
    let error = use_state(String::new);
    let info = use_state(String::new);
    let reload = use_state(|| 0_u32);
    let navigator = use_navigator();

    {
        let api_ctx = api_ctx.clone();
        let has_continue = has_continue.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(movie_id, _)| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let movie_id = *movie_id;
                    spawn_local(async move {
                        match client.fetch_continue(Some(movie_id)).await {
                            Ok(response) => has_continue.set(!response.entries.is_empty()),
                            Err(err) => error.set(describe(&err)),
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

    let run = {
        let client = api_ctx.client.clone();
        let error = error.clone();
        let info = info.clone();
        let reload = reload.clone();
        let movie_id = props.movie_id;
        Callback::from(move |command: ManagementCommand| {
            let client = client.clone();
            let error = error.clone();
            let info = info.clone();
            let reload = reload.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let request = MovieManagementRequest { movie_id, command };
                match client.movie_management(&request).await {
                    Ok(body) if command == ManagementCommand::DeleteEverything => {
                        info.set(operation_message(&body));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Panel);
                        }
                    }
                    Ok(body) => {
                        info.set(operation_message(&body));
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(err) => error.set(describe(&err)),
                }
            });
        })
    };
    let on_remove_continue = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run.emit(ManagementCommand::DeleteContinue))
    };
    let on_reveal = {
        let reveal_delete = reveal_delete.clone();
        Callback::from(move |_: MouseEvent| reveal_delete.set(!*reveal_delete))
    };
    let on_delete = Callback::from(move |()| run.emit(ManagementCommand::DeleteEverything));

    html! {
        <section class="movie-management panel">
            <ErrorPanel message={(*error).clone()} />
            <InfoPanel message={(*info).clone()} />
            <h3>{"Movie Management"}</h3>
            <div class="management-actions">
                if *has_continue {
                    <button class="btn btn-ghost" onclick={on_remove_continue}>
                        {"Remove video from continue watching"}
                    </button>
                }
                <button class="btn btn-ghost text-error" onclick={on_reveal}>{"Delete this movie"}</button>
                if *reveal_delete {
                    <ConfirmModal
                        trigger={html! { <><Icon glyph={Glyph::Trash} size={16} />{"Delete everything"}</> }}
                        trigger_class={classes!("btn", "btn-error")}
                        title="Delete this movie"
                        confirm_text="Delete"
                        on_confirm={on_delete}
                    >
                        <p>{"The movie, its files, subtitles, and watch history will be deleted permanently."}</p>
                    </ConfirmModal>
                }
            </div>
        </section>
    }
}
