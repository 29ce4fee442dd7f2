use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::use_app;
use crate::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_app();
    let signed_in = ctx.services.auth.is_authenticated();

    html! {
        <div class="page">
            <h1>{ "Chat Portal" }</h1>
            <p>{ "Talk to the assistant from your browser. Sign in to start a conversation." }</p>
            if signed_in {
                <Link<Route> to={Route::Chat} classes="btn btn-primary">{ "Open chat" }</Link<Route>>
            } else {
                <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Log in" }</Link<Route>>
            }
        </div>
    }
}
