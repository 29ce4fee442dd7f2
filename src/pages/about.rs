use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page">
            <h1>{ "About" }</h1>
            <p>
                { "Messages are forwarded to the configured AI service together with your session token. " }
                { "Your session is kept in this browser until you log out." }
            </p>
        </div>
    }
}
