//! The button handler: reveal the message panel, then ping the backend.
//!
//! Pure core with no browser types, so the whole click flow runs headlessly
//! in tests. The hydrate-side `dom` module supplies the web-sys
//! implementations of the three seams below.

use std::future::Future;

use thiserror::Error;

/// Id of the button the listener attaches to.
pub const BUTTON_ID: &str = "test-button";
/// Id of the (initially hidden) message panel.
pub const MESSAGE_ID: &str = "message";

/// Inline style values applied on every click.
pub const MESSAGE_DISPLAY: &str = "block";
pub const MESSAGE_BACKGROUND: &str = "#d4edda";
pub const MESSAGE_COLOR: &str = "#155724";

/// The success copy. Byte-for-byte stable, accents and emoji included.
pub const MESSAGE_TEXT: &str = "¡JavaScript está funcionando correctamente! 🎉";

/// Same-origin path pinged after each click.
pub const PING_PATH: &str = "index.php";
/// Console line on a completed round trip.
pub const PING_OK_LOG: &str = "Petición AJAX exitosa";
/// Console label prefixing a transport failure.
pub const PING_ERR_LABEL: &str = "Error:";

/// Initialization failure. Listener attachment never proceeds past one of
/// these; absence of a required element is a precondition violation, not a
/// silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
    #[error("no browser document available")]
    NoDocument,
    #[error("failed to attach click listener: {0}")]
    Listener(String),
}

/// A network-level fetch failure. An HTTP error status is not one of these;
/// a received response of any status counts as a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Write access to the message panel's presentation.
pub trait MessagePanel {
    fn set_display(&mut self, value: &str);
    fn set_background(&mut self, value: &str);
    fn set_color(&mut self, value: &str);
    fn set_text(&mut self, value: &str);
}

/// Issues the ping. Only transport-level failures reject.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_text(&self, path: &str) -> Result<String, TransportError>;
}

/// The two-level logging channel the handler reports into.
pub trait Console {
    fn info(&self, line: &str);
    fn error(&self, label: &str, detail: &str);
}

/// A validated handler plus the button handle the host attaches the
/// listener to.
pub struct Wired<B, P, T, C> {
    pub button: B,
    pub handler: ClickHandler<P, T, C>,
}

/// Validate that both elements exist and bundle the click handler.
///
/// The button handle is opaque to this module; it is only checked for
/// presence and handed back for listener attachment.
pub fn initialize<B, P, T, C>(
    button: Option<B>,
    panel: Option<P>,
    transport: T,
    console: C,
) -> Result<Wired<B, P, T, C>, InitError>
where
    P: MessagePanel,
    T: Transport,
    C: Console,
{
    let button = button.ok_or(InitError::MissingElement(BUTTON_ID))?;
    let panel = panel.ok_or(InitError::MissingElement(MESSAGE_ID))?;
    Ok(Wired {
        button,
        handler: ClickHandler {
            panel,
            transport,
            console,
        },
    })
}

/// Per-click behavior. May fire arbitrarily many times; every click
/// re-applies the same mutations and starts a fresh ping. In-flight pings
/// are never deduplicated or cancelled.
pub struct ClickHandler<P, T, C> {
    panel: P,
    transport: T,
    console: C,
}

impl<P, T, C> ClickHandler<P, T, C>
where
    P: MessagePanel,
    T: Transport,
    C: Console,
{
    /// Handle one click. The four panel mutations run here, in order,
    /// before this returns; the returned future carries only the ping and
    /// is independent of `self`, so the host may spawn it and keep
    /// clicking.
    pub fn click(&mut self) -> impl Future<Output = ()> + 'static + use<P, T, C>
    where
        P: 'static,
        T: Clone + 'static,
        C: Clone + 'static,
    {
        self.panel.set_display(MESSAGE_DISPLAY);
        self.panel.set_background(MESSAGE_BACKGROUND);
        self.panel.set_color(MESSAGE_COLOR);
        self.panel.set_text(MESSAGE_TEXT);

        let transport = self.transport.clone();
        let console = self.console.clone();
        async move { ping(&transport, &console).await }
    }
}

/// GET the ping path, read the body as text, discard it, and log the
/// outcome. Failures are swallowed after logging; there is no retry and
/// nothing reaches the UI.
pub async fn ping<T, C>(transport: &T, console: &C)
where
    T: Transport,
    C: Console,
{
    match transport.get_text(PING_PATH).await {
        Ok(_body) => console.info(PING_OK_LOG),
        Err(err) => console.error(PING_ERR_LABEL, &err.to_string()),
    }
}
