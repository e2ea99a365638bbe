//! Settings flow and the general settings tabs.
//!
//! # Design
//! - One fetch decides between the forced setup steps and the tabbed page.
//! - Every step reports completion upward; the flow re-fetches and routes again.
//! - The selected tab is a local preference, resolved against the tabs on offer.

use crate::app::api::{ApiCtx, missing_api_context};
use crate::app::preferences::{load_pref, persist_pref};
use crate::components::panel::ErrorPanel;
use crate::components::tabs::Tabs;
use crate::core::prefs::SETTINGS_TAB_KEY;
use crate::features::settings::state::{
    MOVIEDB_KEY, SUBTITLE_LANGS_KEY, SettingsScreen, SettingsTab, available_tabs, initial_tab,
    route_settings,
};
use crate::features::setup::view::SetupComplete;
use crate::features::sources::view::SourcesPanel;
use crate::services::api::describe;
use vigilio_api_models::GlobalSettings;
use yew::platform::spawn_local;
use yew::prelude::*;

mod account;
mod environment;
mod subtitles;

pub(crate) use account::{ChangePasswordForm, MovieDbKeyForm};
pub(crate) use environment::EnvironmentTab;
pub(crate) use subtitles::{RedownloadSubtitlesTab, SubtitleLanguagesForm};

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsFlowProps {
    /// Render the setup completion notice instead of the tabs once configured.
    #[prop_or_default]
    pub setup: bool,
}

#[function_component(SettingsFlow)]
pub(crate) fn settings_flow(props: &SettingsFlowProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let settings = use_state(GlobalSettings::default);
    let fetched = use_state(|| false);
    let error = use_state(String::new);
    let reload = use_state(|| 0_u32);

    {
        let api_ctx = api_ctx.clone();
        let settings = settings.clone();
        let fetched = fetched.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    spawn_local(async move {
                        match client.fetch_settings().await {
                            Ok(response) => settings.set(response),
                            Err(err) => error.set(describe(&err)),
                        }
                        fetched.set(true);
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
    let on_saved = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(reload.wrapping_add(1)))
    };

    let screen = match route_settings(&settings, *fetched) {
        SettingsScreen::Loading => html! { <div class="skeleton settings-skeleton"></div> },
        SettingsScreen::Missing => html! { <p class="muted">{"Settings could not be fetched."}</p> },
        SettingsScreen::ChangePassword => html! { <ChangePasswordForm /> },
        SettingsScreen::MovieDbKey => html! {
            <MovieDbKeyForm current={String::new()} on_saved={on_saved} />
        },
        SettingsScreen::SubtitleLanguages => html! {
            <SubtitleLanguagesForm current={String::new()} on_saved={on_saved} />
        },
        SettingsScreen::Complete if props.setup => html! { <SetupComplete /> },
        SettingsScreen::Complete => html! {
            <GeneralSettings settings={(*settings).clone()} on_saved={on_saved} />
        },
    };

    html! {
        <div class="settings">
            <ErrorPanel message={(*error).clone()} />
            {screen}
        </div>
    }
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    html! { <SettingsFlow /> }
}

#[derive(Properties, PartialEq)]
struct GeneralSettingsProps {
    settings: GlobalSettings,
    on_saved: Callback<()>,
}

#[function_component(GeneralSettings)]
fn general_settings(props: &GeneralSettingsProps) -> Html {
    let tabs = available_tabs(&props.settings);
    let active = {
        let tabs = tabs.clone();
        use_state(move || initial_tab(load_pref::<String>(SETTINGS_TAB_KEY).as_deref(), &tabs))
    };
    let on_select = {
        let active = active.clone();
        Callback::from(move |label: &'static str| {
            if let Some(tab) = SettingsTab::from_label(label) {
                persist_pref(SETTINGS_TAB_KEY, &label);
                active.set(tab);
            }
        })
    };
    let labels: Vec<&'static str> = tabs.iter().map(|tab| tab.label()).collect();
    let current = |key: &str| props.settings.dotenv_value(key).unwrap_or_default().to_string();

    let body = match *active {
        SettingsTab::Environment => html! {
            <EnvironmentTab
                dotenv={props.settings.dotenv.clone().unwrap_or_default()}
                on_saved={props.on_saved.clone()}
            />
        },
        SettingsTab::SearchSources => html! { <SourcesPanel /> },
        SettingsTab::SubtitleLanguages => html! {
            <SubtitleLanguagesForm current={current(SUBTITLE_LANGS_KEY)} on_saved={props.on_saved.clone()} />
        },
        SettingsTab::RedownloadSubtitles => html! { <RedownloadSubtitlesTab /> },
        SettingsTab::MovieDbKey => html! {
            <MovieDbKeyForm
                current={current(MOVIEDB_KEY)}
                on_saved={props.on_saved.clone()}
            />
        },
    };

    html! {
        <section class="general-settings panel">
            <h2>{"General Settings"}</h2>
            <Tabs labels={labels} active={active.label()} on_select={on_select} />
            <div class="tab-body">{body}</div>
        </section>
    }
}
