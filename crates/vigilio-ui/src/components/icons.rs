//! Inline SVG glyphs.

use crate::core::format::FileIcon;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Glyph {
    File(FileIcon),
    Check,
    Plus,
    Trash,
    Play,
    Gear,
    Refresh,
}

impl Glyph {
    const fn path(self) -> &'static str {
        match self {
            Self::File(FileIcon::Text) => "M6 2h9l5 5v15H6zM14 2v6h6M9 13h8M9 17h8",
            Self::File(FileIcon::Play) | Self::Play => "M8 5v14l11-7z",
            Self::File(FileIcon::Folder) => "M3 6h6l2 2h10v11H3z",
            Self::File(FileIcon::Generic) => "M6 2h9l5 5v15H6zM14 2v6h6",
            Self::Check => "M5 12l5 5L20 7",
            Self::Plus => "M12 5v14M5 12h14",
            Self::Trash => "M4 7h16M10 11v6M14 11v6M6 7l1 13h10l1-13M9 7V4h6v3",
            Self::Gear => "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM19 12h2M3 12h2M12 3v2M12 19v2",
            Self::Refresh => "M4 4v6h6M20 20v-6h-6M20 10a8 8 0 0 0-14-4M4 14a8 8 0 0 0 14 4",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    pub glyph: Glyph,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let aria_hidden = props.title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-hidden={aria_hidden}
        >
            {props.title.clone().map(|title| html! { <title>{title}</title> }).unwrap_or_default()}
            <path d={props.glyph.path()} />
        </svg>
    }
}
