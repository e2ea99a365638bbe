//! App shell: router, shared API context, and mounting.
//!
//! # Design
//! - One `ApiCtx` per boot, provided through context to every screen.
//! - Screens are selected by URL path; ids come from the route, queries from the URL.
//! - Panics are routed to the browser console.

use crate::components::shell::AppShell;
use crate::features::add_movie::view::AddMoviePage;
use crate::features::catalog::view::{CategoriesPage, HomePage, SearchPage};
use crate::features::history::view::HistoryPage;
use crate::features::movie::view::MovieDetailPage;
use crate::features::settings::view::SettingsPage;
use crate::features::setup::view::InitialSetupPage;
use crate::features::tasks::view::BackgroundTasksPage;
use crate::features::torrents::view::TorrentStatusPage;
use api::ApiCtx;
use preferences::api_base_url;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(VigilioApp)]
pub(crate) fn vigilio_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <HomePage /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::Search => html! { <SearchPage /> },
        Route::Panel => html! { <TorrentStatusPage /> },
        Route::AddMovie => html! { <AddMoviePage /> },
        Route::MovieDetail { id } => html! { <MovieDetailPage movie_id={*id} /> },
        Route::Background => html! { <BackgroundTasksPage /> },
        Route::History => html! { <HistoryPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::InitialSetup => html! { <InitialSetupPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Home}>{"Back to movies"}</Link<Route>>
            </div>
        },
    };
    if route == Route::InitialSetup {
        return page;
    }
    html! {
        <AppShell active={route}>{page}</AppShell>
    }
}

/// Mount the app on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VigilioApp>::with_root(root).render();
    } else {
        yew::Renderer::<VigilioApp>::new().render();
    }
}
