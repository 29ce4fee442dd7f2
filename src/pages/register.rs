use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::use_app;
use crate::components::form::{bind_input, FormError};
use crate::models::RegisterRequest;
use crate::router::Route;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let ctx = use_app();
    let navigator = use_navigator();
    let form = use_state(RegisterRequest::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_username = bind_input(&form, |f, v| f.username = v);
    let on_email = bind_input(&form, |f, v| f.email = v);
    let on_password = bind_input(&form, |f, v| f.password = v);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let auth = ctx.services.auth.clone();
        let on_session_change = ctx.on_session_change.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let data = (*form).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let auth = auth.clone();
            let on_session_change = on_session_change.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            spawn_local(async move {
                let result = auth
                    .register(&data)
                    .await
                    .and_then(|resp| auth.save_session(&resp));
                submitting.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        on_session_change.emit(());
                        if let Some(nav) = navigator {
                            nav.push(&Route::Chat);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="page">
            <h1>{ "Create an account" }</h1>
            <form onsubmit={on_submit}>
                <FormError error={(*error).clone()} />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Username"
                    value={form.username.clone()}
                    oninput={on_username}
                />
                <input
                    class="form-input"
                    type="email"
                    placeholder="Email"
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <input
                    class="form-input"
                    type="password"
                    placeholder="Password"
                    value={form.password.clone()}
                    oninput={on_password}
                />
                <button class="btn btn-primary" type="submit" disabled={*submitting}>
                    { if *submitting { "Creating account..." } else { "Register" } }
                </button>
            </form>
            <p>
                { "Already registered? " }
                <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
            </p>
        </div>
    }
}
