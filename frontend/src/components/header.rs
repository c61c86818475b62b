use std::rc::Rc;

use common::structs::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    icons::{Glyph, Icon},
    BaseRoute,
};

#[function_component]
pub fn Header(props: &Props) -> Html {
    let site = use_context::<Rc<SiteConfig>>();

    let on_click = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_menu.emit(());
        })
    };

    html! {
        <header class="site-header">
            <Link<BaseRoute> to={BaseRoute::Home} classes="site-title">
                { site.map(|s| s.name.clone()).unwrap_or_default() }
            </Link<BaseRoute>>
            <button class="menu-button" aria-label="Open menu" onclick={on_click}>
                <Icon glyph={Glyph::Menu} class="icon" />
            </button>
        </header>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub on_menu: Callback<()>,
}
