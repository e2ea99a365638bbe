//! Loading and empty-state placeholders.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderRowProps {
    pub text: AttrValue,
    pub columns: u32,
}

/// Full-width table row for "Loading..." and "No results".
#[function_component(PlaceholderRow)]
pub(crate) fn placeholder_row(props: &PlaceholderRowProps) -> Html {
    html! {
        <tr class="placeholder-row">
            <td colspan={props.columns.to_string()}>{props.text.clone()}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class="empty-state">
            <h4>{props.title.clone()}</h4>
            {if has_actions {
                html! { <div class="empty-actions">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Section shown while a catalog list is in flight.
#[function_component(LoadingSection)]
pub(crate) fn loading_section() -> Html {
    html! {
        <section class="movie-section loading">
            <h2 class="skeleton skeleton-title"></h2>
            <div class="movie-row">
                { for (0..6).map(|_| html! { <div class="movie-card skeleton"></div> }) }
            </div>
        </section>
    }
}
