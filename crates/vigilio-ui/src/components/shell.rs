//! App chrome: catalog top bar and panel sidebar.
//!
//! # Design
//! - Catalog routes get the top bar with search; panel routes add the admin sidebar.
//! - The search box submits to the search route with `query` in the URL.

use crate::app::Route;
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let query = use_state(String::new);
    let navigator = use_navigator();
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = query.trim().to_string();
            if text.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref()
                && let Err(err) = navigator.push_with_query(&Route::Search, &[("query", text)])
            {
                console::error!("search navigation failed", err.to_string());
            }
        })
    };
    let in_panel = is_panel(&props.active);

    html! {
        <div class="app-shell">
            <header class="topbar">
                <Link<Route> to={Route::Home} classes="brand">{"Vigilio"}</Link<Route>>
                <nav class="top-nav">
                    {nav_item(Route::Home, "Home", &props.active)}
                    {nav_item(Route::Categories, "Categories", &props.active)}
                    {nav_item(Route::Panel, "Panel", &props.active)}
                </nav>
                <form class="searchbar" onsubmit={on_search}>
                    <input
                        type="search"
                        placeholder="Search movies"
                        aria-label="Search movies"
                        value={(*query).clone()}
                        oninput={on_query}
                    />
                </form>
                if in_panel {
                    <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle_nav.clone()}>{"☰"}</button>
                }
            </header>
            <div class="main">
                if in_panel {
                    <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                        <button class="ghost mobile-only" onclick={toggle_nav} aria-label="Close navigation">{"✕"}</button>
                        <nav>
                            {nav_item(Route::Panel, "Torrents", &props.active)}
                            {nav_item(Route::AddMovie, "Add Movie", &props.active)}
                            {nav_item(Route::Background, "Background Tasks", &props.active)}
                            {nav_item(Route::History, "History", &props.active)}
                            {nav_item(Route::Settings, "Settings", &props.active)}
                        </nav>
                    </aside>
                }
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

const fn is_panel(route: &Route) -> bool {
    matches!(
        route,
        Route::Panel
            | Route::AddMovie
            | Route::MovieDetail { .. }
            | Route::Background
            | Route::History
            | Route::Settings
    )
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!("nav-item", (*active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
