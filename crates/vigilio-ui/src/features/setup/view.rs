//! Initial setup page and its completion notice.

use crate::app::preferences::{query_param, redirect};
use crate::core::config::CONFIG;
use crate::features::settings::view::SettingsFlow;
use crate::features::setup::state::{SETUP_COMPLETE_MESSAGE, redirect_target};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[function_component(InitialSetupPage)]
pub(crate) fn initial_setup_page() -> Html {
    html! {
        <main class="setup-page">
            <h1>{"Vigilio setup"}</h1>
            <SettingsFlow setup={true} />
        </main>
    }
}

/// Shown once every setup step is done; redirects after a short pause.
#[function_component(SetupComplete)]
pub(crate) fn setup_complete() -> Html {
    use_effect_with_deps(
        move |_| {
            let timer = Timeout::new(CONFIG.redirect_delay_ms, move || {
                let next = query_param("next");
                redirect(redirect_target(next.as_deref()));
            });
            move || drop(timer)
        },
        (),
    );

    html! {
        <div class="setup-complete">
            <h2>{SETUP_COMPLETE_MESSAGE}</h2>
            <p class="muted">{"Redirecting..."}</p>
        </div>
    }
}
