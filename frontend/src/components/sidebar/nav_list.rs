use common::{
    motion::{stagger, NAV_STAGGER_MS, SUBMENU_FADE_MS},
    nav::{SidebarEvent, NAV_ITEMS},
    structs::{NavItem, NavTarget, SubNavItem},
};
use yew::prelude::*;

use crate::{
    hooks::use_presence,
    icons::{Glyph, Icon},
};

#[function_component]
pub fn NavList(props: &Props) -> Html {
    html! {
        <nav class="sidebar-nav">
            {
                for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                    <div
                        class="nav-row"
                        key={item.label}
                        style={format!("animation-delay: {}ms", stagger(index, NAV_STAGGER_MS))}
                    >
                        { row(item, props) }
                    </div>
                })
            }
        </nav>
    }
}

fn row(item: &NavItem, props: &Props) -> Html {
    match item.target {
        NavTarget::Link(target) => {
            let is_active = item.is_active(&props.current_path);
            html! {
                <a
                    href={target}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    aria-current={is_active.then_some("page")}
                    onclick={select(target, &props.on_event)}
                >
                    <Icon glyph={Glyph::Nav(item.icon)} class="icon" />
                    <span>{item.label}</span>
                </a>
            }
        }
        NavTarget::Dropdown(children) => {
            let on_toggle = {
                let on_event = props.on_event.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_event.emit(SidebarEvent::DropdownToggled);
                })
            };
            html! {
                <div class="nav-dropdown">
                    <button
                        class="nav-link dropdown-toggle"
                        aria-expanded={if props.expanded { "true" } else { "false" }}
                        onclick={on_toggle}
                    >
                        <Icon glyph={Glyph::Nav(item.icon)} class="icon" />
                        <span class="grow">{item.label}</span>
                        <Icon
                            glyph={Glyph::ChevronDown}
                            class={classes!("chevron", props.expanded.then_some("rotated"))}
                        />
                    </button>
                    <Submenu
                        expanded={props.expanded}
                        items={children}
                        on_event={props.on_event.clone()}
                    />
                </div>
            }
        }
    }
}

/// Stays mounted while collapsing so the fade-out can play.
#[function_component]
fn Submenu(props: &SubmenuProps) -> Html {
    let presence = use_presence(props.expanded, SUBMENU_FADE_MS);

    if !presence.is_mounted() {
        return html! {};
    }

    html! {
        <div class={classes!("submenu", presence.class())}>
            { for props.items.iter().map(|child| sub_link(child, &props.on_event)) }
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
struct SubmenuProps {
    expanded: bool,
    items: &'static [SubNavItem],
    on_event: Callback<SidebarEvent>,
}

fn sub_link(child: &SubNavItem, on_event: &Callback<SidebarEvent>) -> Html {
    html! {
        <a
            key={child.target}
            href={child.target}
            class="submenu-link"
            onclick={select(child.target, on_event)}
        >
            {child.label}
        </a>
    }
}

/// Leaf links route through the router instead of reloading the page.
fn select(target: &'static str, on_event: &Callback<SidebarEvent>) -> Callback<MouseEvent> {
    let on_event = on_event.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_event.emit(SidebarEvent::LinkSelected(target));
    })
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub current_path: AttrValue,
    pub expanded: bool,
    pub on_event: Callback<SidebarEvent>,
}
