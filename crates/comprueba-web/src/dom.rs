//! Browser implementations of the handler seams, plus the one-shot wiring
//! that runs when the page hydrates.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::handler::{self, Console, InitError, MessagePanel, Transport, TransportError};

/// Inline-style writes on the message element, `innerHTML` for its content.
pub struct DomPanel {
    el: HtmlElement,
}

impl DomPanel {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }
}

impl MessagePanel for DomPanel {
    fn set_display(&mut self, value: &str) {
        let _ = self.el.style().set_property("display", value);
    }

    fn set_background(&mut self, value: &str) {
        let _ = self.el.style().set_property("background", value);
    }

    fn set_color(&mut self, value: &str) {
        let _ = self.el.style().set_property("color", value);
    }

    fn set_text(&mut self, value: &str) {
        self.el.set_inner_html(value);
    }
}

/// Same-origin fetch via gloo-net. The status code is deliberately not
/// inspected: any received response is a completed round trip, and only
/// send/body failures reach the error path.
#[derive(Clone)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get_text(&self, path: &str) -> Result<String, TransportError> {
        let response = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}

/// The browser console, at its two levels.
#[derive(Clone)]
pub struct PageConsole;

impl Console for PageConsole {
    fn info(&self, line: &str) {
        web_sys::console::log_1(&line.into());
    }

    fn error(&self, label: &str, detail: &str) {
        web_sys::console::error_2(&label.into(), &detail.into());
    }
}

/// Look up both elements, validate them, and attach the single click
/// listener. Called once from the home page's mount effect; both elements
/// must already be in the document.
pub fn wire() -> Result<(), InitError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(InitError::NoDocument)?;

    let button = document.get_element_by_id(handler::BUTTON_ID);
    let panel = document
        .get_element_by_id(handler::MESSAGE_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomPanel::new);

    let wired = handler::initialize(button, panel, FetchTransport, PageConsole)?;

    let mut handler = wired.handler;
    let listener = Closure::<dyn FnMut()>::new(move || {
        spawn_local(handler.click());
    });
    wired
        .button
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|e| InitError::Listener(format!("{e:?}")))?;

    // The listener lives for the rest of the page; leak it once.
    listener.forget();
    Ok(())
}
