//! Tab strip.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TabsProps {
    pub labels: Vec<&'static str>,
    pub active: &'static str,
    pub on_select: Callback<&'static str>,
}

#[function_component(Tabs)]
pub(crate) fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="tabs tabs-bordered" role="tablist">
            { for props.labels.iter().map(|label| {
                let label = *label;
                let on_select = props.on_select.clone();
                let active = label == props.active;
                html! {
                    <button
                        class={classes!("tab", active.then_some("tab-active"))}
                        role="tab"
                        aria-selected={active.to_string()}
                        onclick={Callback::from(move |_| on_select.emit(label))}
                    >
                        {label}
                    </button>
                }
            }) }
        </div>
    }
}
