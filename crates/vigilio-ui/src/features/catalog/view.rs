//! Catalog screens and the shared movie card.
//!
//! # Design
//! - Each screen keeps its responses in local state and bumps a counter to re-fetch.
//! - Cards report list changes upward so the owning screen refreshes its sections.
//! - The add-to-list check mark hides on a timer owned by the button.

use crate::app::Route;
use crate::app::api::{ApiCtx, missing_api_context};
use crate::components::icons::{Glyph, Icon};
use crate::components::loading::{EmptyState, LoadingSection};
use crate::components::panel::ErrorPanel;
use crate::core::config::CONFIG;
use crate::core::format::resolution_label;
use crate::features::catalog::state::{
    ListToggle, NO_MOVIES_MESSAGE, NO_RESULTS_MESSAGE, home_sections, jump_targets, manage_link,
    play_link, watch_link,
};
use crate::services::api::{MovieQuery, describe};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use vigilio_api_models::{CategoriesResponse, ContinueResponse, Movie, MoviesResponse, MyListRequest};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_location};

#[derive(Properties, PartialEq)]
pub(crate) struct AddToListProps {
    pub movie_id: i64,
    pub on_list: bool,
    #[prop_or_default]
    pub on_changed: Callback<()>,
}

#[function_component(AddToListButton)]
pub(crate) fn add_to_list_button(props: &AddToListProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let toggle = use_state(|| ListToggle::new(props.on_list));
    let hide_timer = use_mut_ref(|| None as Option<Timeout>);

    {
        let toggle = toggle.clone();
        use_effect_with_deps(
            move |on_list| {
                if toggle.on_list != *on_list {
                    toggle.set(ListToggle::new(*on_list));
                }
                || ()
            },
            props.on_list,
        );
    }

    let onclick = {
        let toggle = toggle.clone();
        let on_changed = props.on_changed.clone();
        let movie_id = props.movie_id;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let request = MyListRequest {
                movie_id,
                command: toggle.command(),
            };
            let mut next = *toggle;
            let toggle = toggle.clone();
            let hide_timer = hide_timer.clone();
            let on_changed = on_changed.clone();
            spawn_local(async move {
                match api_ctx.client.update_my_list(&request).await {
                    Ok(_) => {
                        if next.confirm() {
                            let hidden = toggle.clone();
                            *hide_timer.borrow_mut() = Some(Timeout::new(CONFIG.success_hide_ms, move || {
                                hidden.set(ListToggle::new(true));
                            }));
                        }
                        toggle.set(next);
                        on_changed.emit(());
                    }
                    Err(err) => {
                        describe(&err);
                    }
                }
            });
        })
    };

    let glyph = if toggle.show_success || toggle.on_list {
        Glyph::Check
    } else {
        Glyph::Plus
    };
    html! {
        <button
            class={classes!("btn", "btn-circle", "btn-sm", "add-to-list", toggle.show_success.then_some("success"))}
            title={toggle.title()}
            onclick={onclick}
        >
            <Icon glyph={glyph} size={16} />
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
    pub watch_path: AttrValue,
    /// Watched percentage for continue-watching cards.
    #[prop_or_default]
    pub progress: Option<u64>,
    #[prop_or_default]
    pub on_changed: Callback<()>,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    let poster = movie
        .poster_path_small
        .clone()
        .or_else(|| movie.poster_path_big.clone())
        .unwrap_or_default();
    html! {
        <div class="movie-card">
            <a class="movie-poster" href={watch_link(&props.watch_path, movie.id)}>
                <img src={poster} alt={movie.title.clone()} loading="lazy" />
                if let Some(label) = resolution_label(movie.max_resolution_width()) {
                    <span class="badge badge-resolution">{label}</span>
                }
                if let Some(score) = movie.imdb_score {
                    <span class="badge badge-imdb">{format!("IMDB {score:.1}")}</span>
                }
            </a>
            if let Some(percent) = props.progress {
                <progress class="progress watch-progress" value={percent.to_string()} max="100"></progress>
            }
            <div class="movie-card-body">
                <span class="movie-title">{movie.title.clone()}</span>
                <span class="movie-year muted">{movie.release_year().unwrap_or_default().to_string()}</span>
                <div class="movie-card-actions">
                    <a class="btn btn-circle btn-sm" href={play_link(movie.id)} title="Play">
                        <Icon glyph={Glyph::Play} size={16} />
                    </a>
                    <AddToListButton movie_id={movie.id} on_list={movie.my_list.is_some()} on_changed={props.on_changed.clone()} />
                    <a class="btn btn-circle btn-sm" href={manage_link(movie.id)} title="Manage">
                        <Icon glyph={Glyph::Gear} size={16} />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieSectionProps {
    pub title: AttrValue,
    pub movies: Vec<Movie>,
    pub watch_path: AttrValue,
    #[prop_or_default]
    pub anchor: Option<AttrValue>,
    #[prop_or_default]
    pub on_changed: Callback<()>,
}

#[function_component(MovieSection)]
pub(crate) fn movie_section(props: &MovieSectionProps) -> Html {
    if props.movies.is_empty() {
        return html! {};
    }
    html! {
        <section class="movie-section" id={props.anchor.clone()}>
            <h2>{props.title.clone()}</h2>
            <div class="movie-row">
                { for props.movies.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id}
                        movie={movie.clone()}
                        watch_path={props.watch_path.clone()}
                        on_changed={props.on_changed.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

fn no_movies() -> Html {
    html! {
        <EmptyState title={NO_MOVIES_MESSAGE}>
            <Link<Route> to={Route::AddMovie} classes="btn btn-primary">{"Add a movie"}</Link<Route>>
        </EmptyState>
    }
}

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let movies = use_state(|| None as Option<MoviesResponse>);
    let watching = use_state(|| None as Option<ContinueResponse>);
    let error = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let movies = movies.clone();
        let watching = watching.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    spawn_local(async move {
                        match client.fetch_continue(None).await {
                            Ok(response) => watching.set(Some(response)),
                            Err(err) => {
                                error.set(describe(&err));
                                watching.set(Some(ContinueResponse::default()));
                            }
                        }
                        match client.fetch_movies(&MovieQuery::All).await {
                            Ok(response) => movies.set(Some(response)),
                            Err(err) => {
                                error.set(describe(&err));
                                movies.set(Some(MoviesResponse::default()));
                            }
                        }
                    });
                }
                || ()
            },
            *reload,
        );
    }

    if api_ctx.is_none() {
        return missing_api_context();
    }
    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };

    let (Some(movies), Some(watching)) = (movies.as_ref(), watching.as_ref()) else {
        return html! {
            <div class="home">
                <ErrorPanel message={(*error).clone()} />
                <LoadingSection />
            </div>
        };
    };
    let sections = home_sections(&movies.movies, &watching.entries, true);
    let movie_path = AttrValue::from(movies.relative_watch_path.clone().unwrap_or_default());
    let continue_path = watching.relative_watch_path.clone().unwrap_or_default();

    html! {
        <div class="home">
            <ErrorPanel message={(*error).clone()} />
            if sections.show_empty {
                {no_movies()}
            }
            if !sections.continue_watching.is_empty() {
                <section class="movie-section">
                    <h2>{"Continue Watching"}</h2>
                    <div class="movie-row">
                        { for sections.continue_watching.iter().map(|entry| html! {
                            <MovieCard
                                key={entry.movie.id}
                                movie={entry.movie.clone()}
                                watch_path={AttrValue::from(continue_path.clone())}
                                progress={Some(entry.watched_percent())}
                                on_changed={on_changed.clone()}
                            />
                        }) }
                    </div>
                </section>
            }
            <MovieSection title="My List" movies={sections.my_list} watch_path={movie_path.clone()} on_changed={on_changed.clone()} />
            <MovieSection title="Popular Movies" movies={sections.popular} watch_path={movie_path} on_changed={on_changed} />
        </div>
    }
}

#[function_component(CategoriesPage)]
pub(crate) fn categories_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let listing = use_state(|| None as Option<CategoriesResponse>);
    let error = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let listing = listing.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    spawn_local(async move {
                        match client.fetch_categories().await {
                            Ok(response) => listing.set(Some(response)),
                            Err(err) => {
                                error.set(describe(&err));
                                listing.set(Some(CategoriesResponse::default()));
                            }
                        }
                    });
                }
                || ()
            },
            *reload,
        );
    }

    if api_ctx.is_none() {
        return missing_api_context();
    }
    let Some(listing) = listing.as_ref() else {
        return html! { <LoadingSection /> };
    };
    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };
    let targets = jump_targets(&listing.categories);
    let watch_path = AttrValue::from(listing.relative_watch_path.clone().unwrap_or_default());

    html! {
        <div class="categories">
            <ErrorPanel message={(*error).clone()} />
            if targets.is_empty() {
                {no_movies()}
            } else {
                <nav class="jump-list">
                    <span>{"Jump to category"}</span>
                    { for targets.iter().map(|name| html! {
                        <a class="pill" href={format!("#{}", category_anchor(name))}>{name.to_string()}</a>
                    }) }
                </nav>
            }
            { for listing.categories.iter().map(|category| html! {
                <MovieSection
                    title={category.name.clone()}
                    movies={category.movies.clone()}
                    watch_path={watch_path.clone()}
                    anchor={AttrValue::from(category_anchor(&category.name))}
                    on_changed={on_changed.clone()}
                />
            }) }
        </div>
    }
}

fn category_anchor(name: &str) -> String {
    format!("category-{}", name.to_lowercase().replace(' ', "-"))
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let query = use_location()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default()
        .query;
    let results = use_state(|| None as Option<MoviesResponse>);
    let error = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let results = results.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(query, _)| {
                results.set(None);
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let search = MovieQuery::Search(query.clone());
                    spawn_local(async move {
                        match client.fetch_movies(&search).await {
                            Ok(response) => results.set(Some(response)),
                            Err(err) => {
                                error.set(describe(&err));
                                results.set(Some(MoviesResponse::default()));
                            }
                        }
                    });
                }
                || ()
            },
            (query.clone(), *reload),
        );
    }

    if api_ctx.is_none() {
        return missing_api_context();
    }
    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };

    html! {
        <div class="search-results">
            <ErrorPanel message={(*error).clone()} />
            <h2>{format!("Results for \"{query}\"")}</h2>
            { match results.as_ref() {
                None => html! { <LoadingSection /> },
                Some(response) if response.movies.is_empty() => html! {
                    <EmptyState title={NO_RESULTS_MESSAGE} />
                },
                Some(response) => html! {
                    <div class="movie-grid">
                        { for response.movies.iter().map(|movie| html! {
                            <MovieCard
                                key={movie.id}
                                movie={movie.clone()}
                                watch_path={AttrValue::from(response.relative_watch_path.clone().unwrap_or_default())}
                                on_changed={on_changed.clone()}
                            />
                        }) }
                    </div>
                },
            } }
        </div>
    }
}
