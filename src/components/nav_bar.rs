use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::use_app;
use crate::router::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let ctx = use_app();
    let navigator = use_navigator();
    let auth = ctx.services.auth.clone();

    let css = r#"
        .header { padding: 10px 20px; border-bottom: 1px solid var(--border-color); display: flex; justify-content: space-between; align-items: center; height: 60px; flex-shrink: 0; }
        .header nav { display: flex; gap: 16px; align-items: center; }
        .header a { color: var(--text-primary); text-decoration: none; font-size: 0.95rem; }
        .header a:hover { color: var(--accent-color); }
        .header .who { color: var(--text-secondary); font-size: 0.9rem; }
    "#;

    let on_logout = {
        let auth = auth.clone();
        let on_session_change = ctx.on_session_change.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            on_session_change.emit(());
            if let Some(nav) = &navigator {
                nav.push(&Route::Home);
            }
        })
    };

    let session = if auth.is_authenticated() {
        let name = auth.current_user().map(|u| u.username).unwrap_or_default();
        html! {
            <nav>
                <span class="who">{ name }</span>
                <button class="btn" onclick={on_logout}>{ "Log out" }</button>
            </nav>
        }
    } else {
        html! {
            <nav>
                <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
            </nav>
        }
    };

    html! {
        <>
            <style>{ css }</style>
            <div class="header">
                <nav>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
                    <Link<Route> to={Route::Chat}>{ "Chat" }</Link<Route>>
                </nav>
                { session }
            </div>
        </>
    }
}
