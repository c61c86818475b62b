use std::rc::Rc;

use common::{
    motion::{stagger, SOCIAL_STAGGER_MS},
    structs::SiteConfig,
};
use yew::prelude::*;

use crate::icons::social_icon;

#[function_component]
pub fn SocialGrid(props: &Props) -> Html {
    html! {
        <div class="social-section">
            <h3 class="social-heading">{"Connect With Us"}</h3>
            <div class="social-grid">
                {
                    for props.site.social_links.iter().enumerate().map(|(index, link)| html! {
                        <a
                            key={link.platform.clone()}
                            class="social-tile"
                            href={link.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            style={format!("animation-delay: {}ms", stagger(index, SOCIAL_STAGGER_MS))}
                        >
                            if let Some(src) = social_icon(&link.platform) {
                                <img class="social-icon" src={src} alt={link.platform.clone()} />
                            }
                            <span class="social-label">{link.platform.clone()}</span>
                        </a>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub site: Rc<SiteConfig>,
}
