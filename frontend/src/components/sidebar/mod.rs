//! Slide-in navigation for narrow screens.
//!
//! `MobileSidebar` stays in the tree and only tracks the presence phase. The
//! backdrop and panel live in [`Overlay`], which is unmounted once the exit
//! transition has finished, taking the sub-menu state with it.

use common::motion::OVERLAY_TRANSITION_MS;
use yew::prelude::*;

use crate::hooks::use_presence;

mod backdrop;
mod nav_list;
mod overlay;
mod social_grid;

use overlay::Overlay;

#[function_component]
pub fn MobileSidebar(props: &Props) -> Html {
    let presence = use_presence(props.is_open, OVERLAY_TRANSITION_MS);

    if !presence.is_mounted() {
        return html! {};
    }

    html! {
        <Overlay
            {presence}
            on_close={props.on_close.clone()}
            current_path={props.current_path.clone()}
        />
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub current_path: AttrValue,
}
