use yew::prelude::*;

#[function_component]
pub fn ConfigError(props: &Props) -> Html {
    html! {
        <div class="config-error">
            <h1>{"Configuration error in "}<b>{props.source.clone()}</b></h1>
            <pre>{props.cause.clone()}</pre>
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub cause: String,
    pub source: String,
}
