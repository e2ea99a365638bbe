//! Confirmation modal with a trigger.
//!
//! # Design
//! - Each instance owns a `DialogId`; open state lives in the app store's dialog stack.
//! - Only the top-of-stack dialog accepts clicks; lower ones render inert.
//! - Confirm emits once and closes; cancel and backdrop clicks only close.

use crate::core::dialog::DialogId;
use crate::core::store::{AppStore, app_dispatch};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmModalProps {
    /// Content of the button that opens the dialog.
    pub trigger: Html,
    pub title: AttrValue,
    #[prop_or(AttrValue::from("Confirm"))]
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    #[prop_or_default]
    pub trigger_class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    /// Dialog body.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ConfirmModal)]
pub(crate) fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let id = *use_memo(|_| DialogId::new(), ());
    let open = use_selector(move |store: &AppStore| store.dialogs.is_open(id));
    let on_top = use_selector(move |store: &AppStore| store.dialogs.is_top(id));
    let dispatch = app_dispatch();

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| move || dispatch.reduce_mut(|store| store.close_dialog(id)),
            (),
        );
    }

    let on_open = {
        let dispatch = dispatch.clone();
        let disabled = props.disabled;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if !disabled {
                dispatch.reduce_mut(|store| store.open_dialog(id));
            }
        })
    };
    let on_close = {
        let dispatch = dispatch.clone();
        let on_top = *on_top;
        Callback::from(move |_: MouseEvent| {
            if on_top {
                dispatch.reduce_mut(|store| store.close_dialog(id));
            }
        })
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        let on_top = *on_top;
        Callback::from(move |_: MouseEvent| {
            if on_top {
                on_confirm.emit(());
                dispatch.reduce_mut(|store| store.close_dialog(id));
            }
        })
    };

    let dialog = if *open {
        html! {
            <div
                class={classes!("modal", "modal-open", (!*on_top).then_some("modal-inert"))}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!*on_top).then_some("true")}
            >
                <div class="modal-box">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    <div class="modal-body">{ for props.children.iter() }</div>
                    <div class="modal-actions">
                        <button class="btn btn-ghost" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button class="btn btn-primary" onclick={on_confirm}>
                            {props.confirm_text.clone()}
                        </button>
                    </div>
                </div>
                <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <button
                class={classes!("modal-trigger", props.trigger_class.clone())}
                disabled={props.disabled}
                onclick={on_open}
            >
                {props.trigger.clone()}
            </button>
            {dialog}
        </>
    }
}
