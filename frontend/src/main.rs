use std::rc::Rc;

use common::structs::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod helpers;
mod hooks;
mod icons;
mod pages;

lazy_static::lazy_static! {
    static ref SITE: anyhow::Result<SiteConfig> = SiteConfig::from_json(include_str!("../site.json"));
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum BaseRoute {
    #[at("/")]
    Home,
    #[at("/teams")]
    Teams,
    #[at("/events")]
    Events,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Root>::new().render();
}

#[function_component]
fn Root() -> Html {
    // a broken site.json should be obvious during development, not a blank page
    match SITE.as_ref() {
        Ok(site) => {
            let site = Rc::new(site.clone());
            html! {
                <BrowserRouter>
                    <ContextProvider<Rc<SiteConfig>> context={site}>
                        <Shell />
                    </ContextProvider<Rc<SiteConfig>>>
                </BrowserRouter>
            }
        }
        Err(e) => {
            log::error!("failed to load site config: {e:#}");
            html! {
                <components::ConfigError cause={format!("{e:#}")} source="site.json" />
            }
        }
    }
}

/// Owns the canonical open flag of the mobile sidebar.
#[function_component]
fn Shell() -> Html {
    let open = use_state(|| false);
    let location = use_location();
    let current_path = location
        .map(|l| AttrValue::from(l.path().to_owned()))
        .unwrap_or_else(|| AttrValue::from(""));

    let on_menu = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <>
            <components::Header {on_menu} />
            <components::MobileSidebar is_open={*open} {on_close} {current_path} />
            <main class="page">
                <Switch<BaseRoute> render={switch} />
            </main>
        </>
    }
}

fn switch(routes: BaseRoute) -> Html {
    match routes {
        BaseRoute::Home => html! { <pages::Home /> },
        BaseRoute::Teams => html! {
            <pages::Section title="Teams" blurb="Meet the people behind the club's projects." />
        },
        BaseRoute::Events => html! {
            <pages::Section title="Events" blurb="Workshops, hack nights and talks." />
        },
        BaseRoute::Projects => html! {
            <pages::Section title="Projects" blurb="What our members are building right now." />
        },
        BaseRoute::Contact => html! {
            <pages::Section title="Contact" blurb="Find us on any of the channels in the menu." />
        },
        BaseRoute::NotFound => html! { <pages::NotFound /> },
    }
}
