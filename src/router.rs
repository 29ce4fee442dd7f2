use yew_router::prelude::*;

#[derive(Routable, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/chat")]
    Chat,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Chat)
    }

    pub fn from_path(path: &str) -> Self {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }
}

/// Outcome of a navigation once the guard has run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Navigation {
    Proceed(Route),
    Redirect(Route),
}

/// Protected routes go to the login page unless a session exists; everything
/// else passes through unchanged.
pub fn guard(route: Route, is_authenticated: bool) -> Navigation {
    if route.requires_auth() && !is_authenticated {
        Navigation::Redirect(Route::Login)
    } else {
        Navigation::Proceed(route)
    }
}

pub fn resolve(path: &str, is_authenticated: bool) -> Navigation {
    guard(Route::from_path(path), is_authenticated)
}
