use common::presence::Presence;
use yew::prelude::*;

#[function_component]
pub fn Backdrop(props: &Props) -> Html {
    html! {
        <div
            class={classes!("sidebar-backdrop", props.presence.class())}
            onclick={props.on_click.clone()}
        />
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub presence: Presence,
    pub on_click: Callback<MouseEvent>,
}
