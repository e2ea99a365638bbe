//! Routing definitions for the Vigilio UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/categories")]
    Categories,
    #[at("/search")]
    Search,
    #[at("/panel/")]
    Panel,
    #[at("/panel/add-movie/")]
    AddMovie,
    #[at("/panel/movie-detail/:id")]
    MovieDetail { id: i64 },
    #[at("/panel/background-management/")]
    Background,
    #[at("/panel/history/")]
    History,
    #[at("/panel/settings/")]
    Settings,
    #[at("/panel/initial-setup/")]
    InitialSetup,
    #[not_found]
    #[at("/404")]
    NotFound,
}
