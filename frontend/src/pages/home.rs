use std::rc::Rc;

use common::structs::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{hooks::use_title, BaseRoute};

#[function_component]
pub fn Home() -> Html {
    let site = use_context::<Rc<SiteConfig>>();
    let name = site.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    use_title(name.clone());

    html! {
        <div class="valign">
            <div class="home">
                <h1 class="home-title">{name}</h1>
                <p class="home-tagline">{ site.map(|s| s.tagline.clone()).unwrap_or_default() }</p>
                <Link<BaseRoute> to={BaseRoute::Events} classes="cta">{"See what's on"}</Link<BaseRoute>>
            </div>
        </div>
    }
}
