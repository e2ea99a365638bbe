//! Dismissible error and info banners.
//!
//! # Design
//! - Banner state is owned here; parents only pass content.
//! - New content from the parent resets dismissal.

use crate::core::banner::{BannerContent, BannerState};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PanelTone {
    Error,
    Info,
}

impl PanelTone {
    const fn default_title(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MessagePanelProps {
    pub tone: PanelTone,
    /// One message per line; blank lists render nothing.
    pub lines: Vec<String>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(MessagePanel)]
pub(crate) fn message_panel(props: &MessagePanelProps) -> Html {
    let banner = use_state(|| BannerState::new(props.lines.clone()));

    {
        let banner = banner.clone();
        use_effect_with_deps(
            move |lines: &Vec<String>| {
                let mut next = (*banner).clone();
                next.replace(lines.clone());
                if next != *banner {
                    banner.set(next);
                }
                || ()
            },
            props.lines.clone(),
        );
    }

    let Some(lines) = banner.visible() else {
        return html! {};
    };
    let on_dismiss = {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*banner).clone();
            next.dismiss();
            banner.set(next);
        })
    };
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(props.tone.default_title()));

    html! {
        <div class={classes!("alert", props.tone.class())} role="alert">
            <div class="alert-content">
                <strong>{title}</strong>
                { for lines.iter().filter(|line| !line.is_blank()).map(|line| html! { <p>{line.clone()}</p> }) }
            </div>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BannerProps {
    pub message: String,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(ErrorPanel)]
pub(crate) fn error_panel(props: &BannerProps) -> Html {
    html! {
        <MessagePanel tone={PanelTone::Error} lines={vec![props.message.clone()]} title={props.title.clone()} />
    }
}

#[function_component(InfoPanel)]
pub(crate) fn info_panel(props: &BannerProps) -> Html {
    html! {
        <MessagePanel tone={PanelTone::Info} lines={vec![props.message.clone()]} title={props.title.clone()} />
    }
}
