use yew::prelude::*;

use crate::hooks::use_title;

#[function_component]
pub fn Section(props: &Props) -> Html {
    use_title(props.title.to_string());

    html! {
        <div class="valign">
            <section class="section">
                <h1>{props.title.clone()}</h1>
                <p>{props.blurb.clone()}</p>
            </section>
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub blurb: AttrValue,
}
