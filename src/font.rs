//! Asynchronously resolved typeface handle.
//!
//! A [`FontHandle`] starts out pending and is resolved exactly once, either by a
//! [`FontResolver`] (e.g. after a browser `fetch`) or by a background loader thread
//! ([`FontHandle::load_file`]). Queries never block: [`FontHandle::poll`] reports
//! whatever has arrived so far.

use crate::errors::FontError;
use crate::text::Typeface;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

enum FontState {
    Pending(Receiver<Result<Typeface, FontError>>),
    Ready(Arc<Typeface>),
    Failed(String),
}

impl FontState {
    fn settle(result: Result<Typeface, FontError>) -> FontState {
        match result {
            Ok(typeface) => {
                log::info!("Font loaded successfully ({:?})", typeface.family());
                FontState::Ready(Arc::new(typeface))
            },
            Err(e) => {
                log::error!("font failed to load: {e}");
                FontState::Failed(e.to_string())
            },
        }
    }
}

/// Handle to a typeface that may not have loaded yet.
pub struct FontHandle {
    state: FontState,
}

/// One-shot completion side of a pending [`FontHandle`].
pub struct FontResolver {
    sender: Sender<Result<Typeface, FontError>>,
}

impl FontResolver {
    /// Deliver the load result. Consumes the resolver, so a handle resolves at most once.
    pub fn resolve(self, result: Result<Typeface, FontError>) {
        if self.sender.send(result).is_err() {
            log::debug!("font handle dropped before its typeface arrived");
        }
    }
}

impl FontHandle {
    /// A handle that resolves when the returned [`FontResolver`] is used.
    pub fn pending() -> (FontHandle, FontResolver) {
        let (sender, receiver) = channel();
        (FontHandle { state: FontState::Pending(receiver) }, FontResolver { sender })
    }

    /// A handle that is already resolved.
    pub fn ready(typeface: Typeface) -> FontHandle {
        FontHandle { state: FontState::Ready(Arc::new(typeface)) }
    }

    /// Read and decode a font file on a background thread.
    ///
    /// Both three.js typeface JSON and TrueType/OpenType files are accepted; the
    /// format is sniffed from the content.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> FontHandle {
        let path = path.as_ref().to_path_buf();
        let (handle, resolver) = FontHandle::pending();
        let spawned = std::thread::Builder::new()
            .name("font-loader".to_string())
            .spawn(move || {
                log::debug!("loading font from {}", path.display());
                let result = std::fs::read(&path)
                    .map_err(FontError::from)
                    .and_then(Typeface::from_bytes);
                resolver.resolve(result);
            });

        match spawned {
            Ok(_) => handle,
            Err(e) => FontHandle { state: FontState::Failed(e.to_string()) },
        }
    }

    /// Non-blocking query: the typeface if it has resolved, `None` while pending or
    /// after a failed load.
    ///
    /// A failed load is logged once and leaves the handle permanently unresolved.
    pub fn poll(&mut self) -> Option<Arc<Typeface>> {
        if let FontState::Pending(receiver) = &self.state {
            let next = match receiver.try_recv() {
                Ok(result) => FontState::settle(result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    FontState::settle(Err(FontError::LoaderDisconnected))
                },
            };
            self.state = next;
        }

        match &self.state {
            FontState::Ready(typeface) => Some(Arc::clone(typeface)),
            _ => None,
        }
    }

    /// Block until the handle settles. Meant for command-line hosts and tests.
    pub fn wait(&mut self) -> Option<Arc<Typeface>> {
        if let FontState::Pending(receiver) = &self.state {
            let result = receiver.recv().unwrap_or(Err(FontError::LoaderDisconnected));
            self.state = FontState::settle(result);
        }
        self.poll()
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.state, FontState::Pending(_))
    }

    /// The failure message, if loading failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            FontState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
