use pulldown_cmark::{html, Event as MdEvent, Options, Parser};
use yew::{AttrValue, Html};

pub fn set_panic_hook() {
    // Panics show up in the browser console with a stack trace instead of
    // "unreachable executed".
    console_error_panic_hook::set_once();
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Errors only if a logger is already installed.
    let _ = console_log::init_with_level(level);
}

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        MdEvent::SoftBreak => MdEvent::HardBreak,
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    format!(r#"<div class="markdown-body">{}</div>"#, html_output)
}

pub fn render_markdown(text: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_to_html(text)))
}
