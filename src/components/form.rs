use web_sys::HtmlInputElement;
use yew::prelude::*;

/// `oninput` handler that writes the input's value into one field of a form
/// state.
pub fn bind_input<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct FormErrorProps {
    pub error: Option<String>,
}

#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    match &props.error {
        Some(msg) => html! { <div class="form-error">{ msg }</div> },
        None => html! {},
    }
}
