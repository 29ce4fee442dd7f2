use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::pages::{
    about::AboutPage, chat::ChatPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage,
};
use crate::router::{guard, Navigation, Route};
use crate::services::{storage::LocalStorage, Services};

const GLOBAL_STYLES: &str = r#"
    :root {
        --bg-app: #ffffff;
        --bg-user: #f4f4f4;
        --border-color: #e5e5e5;
        --text-primary: #333;
        --text-secondary: #666;
        --accent-color: #10a37f;
        --accent-hover: #1a7f64;
        --danger-color: #ef4444;
    }

    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: var(--text-primary); }

    .app-container { display: flex; flex-direction: column; height: 100vh; overflow: hidden; }
    .main-content { flex-grow: 1; display: flex; flex-direction: column; position: relative; background: var(--bg-app); min-height: 0; }
    .page { max-width: 720px; margin: 40px auto; padding: 0 20px; }

    .btn { cursor: pointer; border: 1px solid var(--border-color); background: white; padding: 8px 12px; border-radius: 6px; font-size: 0.9rem; transition: all 0.2s; color: var(--text-primary); }
    .btn:hover { background: #f0f0f0; }
    .btn-primary { background: var(--accent-color); color: white; border-color: transparent; }
    .btn-primary:hover { background: var(--accent-hover); }
    .btn:disabled { opacity: 0.6; cursor: default; }

    .form-input { width: 100%; padding: 8px; border: 1px solid var(--border-color); border-radius: 6px; font-family: inherit; margin-bottom: 10px; }
    .form-input:focus { outline: 2px solid var(--accent-color); border-color: transparent; }
    .form-error { color: var(--danger-color); margin-bottom: 10px; }

    .markdown-body { line-height: 1.6; font-size: 1rem; }
    .markdown-body pre { background: #2d2d2d; color: #fff; padding: 15px; border-radius: 6px; overflow-x: auto; }
    .markdown-body code { background: #f4f4f4; padding: 2px 4px; border-radius: 4px; font-family: monospace; font-size: 0.9em; }
    .markdown-body pre code { background: transparent; color: inherit; }
    .markdown-body p { margin-top: 0; margin-bottom: 1em; }
"#;

/// Shared state handed to every view through context.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub services: Services,
    /// Bumped on login and logout so session-dependent views re-render.
    pub session_rev: u32,
    pub on_session_change: Callback<()>,
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext is provided by <App>")
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let config = AppConfig::from_build_env();
        if config.api_base_url.is_none() {
            log::warn!("API_BASE_URL is not set, login and registration are unavailable");
        }
        if config.ai_base_url.is_none() {
            log::warn!("AI_API_BASE_URL is not set, chat requests will fail");
        }
        Services::new(&config, Rc::new(LocalStorage))
    });
    let session_rev = use_state(|| 0u32);

    let on_session_change = {
        let rev = session_rev.clone();
        Callback::from(move |_| rev.set(rev.wrapping_add(1)))
    };

    let context = AppContext {
        services: (*services).clone(),
        session_rev: *session_rev,
        on_session_change,
    };

    html! {
        <ContextProvider<AppContext> {context}>
            <style>{ GLOBAL_STYLES }</style>
            <BrowserRouter>
                <div class="app-container">
                    <NavBar />
                    <div class="main-content">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn switch(route: Route) -> Html {
    html! { <GuardedView {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedViewProps {
    route: Route,
}

#[function_component(GuardedView)]
fn guarded_view(props: &GuardedViewProps) -> Html {
    let ctx = use_app();

    match guard(props.route, ctx.services.auth.is_authenticated()) {
        Navigation::Redirect(to) => {
            log::debug!("{:?} requires a session, redirecting to {:?}", props.route, to);
            html! { <Redirect<Route> {to} /> }
        }
        Navigation::Proceed(route) => match route {
            Route::Home => html! { <HomePage /> },
            Route::About => html! { <AboutPage /> },
            Route::Chat => html! { <ChatPage /> },
            Route::Login => html! { <LoginPage /> },
            Route::Register => html! { <RegisterPage /> },
            Route::NotFound => html! { <NotFoundPage /> },
        },
    }
}
