use std::rc::Rc;

use common::{
    motion::css_vars,
    nav::{NavMenu, SidebarEvent},
    presence::Presence,
    structs::SiteConfig,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{backdrop::Backdrop, nav_list::NavList, social_grid::SocialGrid};
use crate::{
    helpers::{route_for, verbose},
    icons::{Glyph, Icon},
};

#[function_component]
pub fn Overlay(props: &Props) -> Html {
    let menu = use_state(NavMenu::default);
    let navigator = use_navigator();
    let site = use_context::<Rc<SiteConfig>>();

    let dispatch = {
        let menu = menu.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SidebarEvent| {
            let (next, effects) = (*menu).apply(event);
            if verbose() {
                gloo::console::log!(format!("sidebar: {event:?} -> {effects:?}"));
            }
            if next != *menu {
                menu.set(next);
            }
            effects.run(
                |target| match navigator.as_ref() {
                    Some(nav) => nav.push(&route_for(target)),
                    None => log::warn!("no router to navigate to {target}"),
                },
                || on_close.emit(()),
            );
        })
    };

    let on_backdrop = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(SidebarEvent::BackdropClicked))
    };
    let on_close_button = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(SidebarEvent::CloseClicked);
        })
    };

    html! {
        <div class="sidebar-root" style={css_vars()}>
            <Backdrop presence={props.presence} on_click={on_backdrop} />
            <aside class={classes!("sidebar-panel", props.presence.class())}>
                <div class="panel-body">
                    <div class="panel-header">
                        <h2 class="panel-title">{"Menu"}</h2>
                        <button class="close-button" aria-label="Close menu" onclick={on_close_button}>
                            <Icon glyph={Glyph::Close} class="icon" />
                        </button>
                    </div>
                    <NavList
                        current_path={props.current_path.clone()}
                        expanded={menu.expanded}
                        on_event={dispatch}
                    />
                    {
                        match site {
                            Some(site) => html! { <SocialGrid {site} /> },
                            None => {
                                log::warn!("no site config in context, social links skipped");
                                html! {}
                            }
                        }
                    }
                </div>
            </aside>
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub presence: Presence,
    pub on_close: Callback<()>,
    pub current_path: AttrValue,
}
