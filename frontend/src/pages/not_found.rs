use yew::prelude::*;
use yew_router::prelude::*;

use crate::{hooks::use_title, BaseRoute};

#[function_component]
pub fn NotFound() -> Html {
    use_title("Not Found".to_owned());

    html! {
        <div class="valign">
            <div class="home">
                <h2 class="error">{"Not Found"}</h2>
                <p>{"The page you requested could not be found."}</p>
                <Link<BaseRoute> to={BaseRoute::Home}>{"Back to the start"}</Link<BaseRoute>>
            </div>
        </div>
    }
}
