//! Lightbox state machine.
//!
//! The viewer is either closed or showing exactly one session. A session owns
//! the page scroll lock and the keyboard listener for as long as it lives, so
//! closing (by any input) or dropping the viewer releases both.

use crate::{keys::LightboxKey, nav::NavState};
use shared::{KeyListenerGuard, KeyListeners, ScrollLock, ScrollLockGuard};
use viewer_types::{Counter, Gallery, ImageRef, ViewerState};

/// User input routed to an open lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerInput {
    Previous,
    Next,
    CloseButton,
    Backdrop,
    Key(LightboxKey),
}

/// Notifications for the page that owns the open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Navigated { index: usize },
    Closed,
}

#[derive(Debug)]
struct Session {
    nav: NavState,
    title: Option<String>,
    _scroll: ScrollLockGuard,
    _keys: KeyListenerGuard,
}

#[derive(Debug)]
pub struct GalleryViewer {
    scroll_lock: ScrollLock,
    key_listeners: KeyListeners,
    session: Option<Session>,
}

impl GalleryViewer {
    pub const LISTENER: &'static str = "lightbox";

    pub fn new(scroll_lock: ScrollLock, key_listeners: KeyListeners) -> Self {
        Self {
            scroll_lock,
            key_listeners,
            session: None,
        }
    }

    /// Start a session on `gallery` at `initial_index` (clamped).
    ///
    /// Opening an already open viewer replaces the session; the position never
    /// carries over from the previous one.
    pub fn open(&mut self, gallery: Gallery, initial_index: usize, title: Option<String>) {
        let nav = NavState::starting_at(gallery, initial_index);
        tracing::debug!(
            index = ?nav.index(),
            total = nav.total(),
            title = title.as_deref().unwrap_or_default(),
            "lightbox opened"
        );

        // New guards are taken before the previous session drops.
        let session = Session {
            nav,
            title,
            _scroll: self.scroll_lock.acquire(),
            _keys: self.key_listeners.subscribe(Self::LISTENER),
        };
        self.session = Some(session);
    }

    /// End the session. Closing a closed viewer does nothing.
    pub fn close(&mut self) -> Option<ViewerEvent> {
        let session = self.session.take()?;
        tracing::debug!(index = ?session.nav.index(), "lightbox closed");
        drop(session);

        Some(ViewerEvent::Closed)
    }

    /// Apply the host's open flag. Only edges change anything: a closed→open
    /// edge opens a fresh session, an open→closed edge closes it.
    pub fn sync(
        &mut self,
        is_open: bool,
        gallery: &Gallery,
        initial_index: usize,
        title: Option<&str>,
    ) -> Option<ViewerEvent> {
        match (self.is_open(), is_open) {
            (false, true) => {
                self.open(gallery.clone(), initial_index, title.map(str::to_owned));
                None
            }
            (true, false) => self.close(),
            _ => None,
        }
    }

    pub fn next(&mut self) -> Option<&ImageRef> {
        self.session.as_mut()?.nav.go_next()
    }

    pub fn previous(&mut self) -> Option<&ImageRef> {
        self.session.as_mut()?.nav.go_prev()
    }

    pub fn go_to(&mut self, idx: usize) -> Option<&ImageRef> {
        self.session.as_mut()?.nav.go_to(idx)
    }

    /// The host's list changed under an open session; the position is clamped
    pub fn replace_gallery(&mut self, gallery: Gallery) {
        if let Some(session) = self.session.as_mut() {
            session.nav.set_images(gallery);
            tracing::debug!(
                index = ?session.nav.index(),
                total = session.nav.total(),
                "lightbox gallery replaced"
            );
        }
    }

    pub fn handle(&mut self, input: ViewerInput) -> Option<ViewerEvent> {
        if !self.is_open() {
            return None;
        }

        match input {
            ViewerInput::Previous | ViewerInput::Key(LightboxKey::ArrowLeft) => {
                self.navigate(Self::previous)
            }
            ViewerInput::Next | ViewerInput::Key(LightboxKey::ArrowRight) => {
                self.navigate(Self::next)
            }
            ViewerInput::CloseButton
            | ViewerInput::Backdrop
            | ViewerInput::Key(LightboxKey::Escape) => self.close(),
        }
    }

    fn navigate(&mut self, step: fn(&mut Self) -> Option<&ImageRef>) -> Option<ViewerEvent> {
        let before = self.current_index();
        step(self);
        let after = self.current_index()?;

        (before != Some(after)).then_some(ViewerEvent::Navigated { index: after })
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn state(&self) -> ViewerState {
        match &self.session {
            Some(session) => ViewerState::open(session.nav.index()),
            None => ViewerState::CLOSED,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref()?.nav.index()
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.session.as_ref()?.nav.current()
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.session.as_ref().map(|session| session.nav.images())
    }

    pub fn title(&self) -> Option<&str> {
        self.session.as_ref()?.title.as_deref()
    }

    pub fn counter(&self) -> Option<Counter> {
        self.session.as_ref()?.nav.counter()
    }

    /// Previous/next controls only make sense with something to move to
    pub fn shows_navigation(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.nav.total() > 1)
    }

    /// Alt text for the displayed image, e.g. `Weather App - 2`
    pub fn alt_text(&self, fallback_title: &str) -> Option<String> {
        let index = self.current_index()?;
        let title = self.title().unwrap_or(fallback_title);

        Some(format!("{title} - {}", index + 1))
    }
}

impl Default for GalleryViewer {
    fn default() -> Self {
        Self::new(ScrollLock::new(), KeyListeners::new())
    }
}

impl Drop for GalleryViewer {
    fn drop(&mut self) {
        if self.session.is_some() {
            tracing::debug!("lightbox torn down while open");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_types::FALLBACK_TITLE;

    fn gallery(len: usize) -> Gallery {
        (0..len).map(|i| format!("/img/shot-{i}.png")).collect()
    }

    #[test]
    fn inputs_while_closed_are_ignored() {
        let mut viewer = GalleryViewer::default();

        assert_eq!(viewer.handle(ViewerInput::Next), None);
        assert_eq!(viewer.handle(ViewerInput::Key(LightboxKey::Escape)), None);
        assert_eq!(viewer.state(), ViewerState::CLOSED);
    }

    #[test]
    fn navigation_reports_new_index() {
        let mut viewer = GalleryViewer::default();
        viewer.open(gallery(3), 2, None);

        assert_eq!(
            viewer.handle(ViewerInput::Next),
            Some(ViewerEvent::Navigated { index: 0 })
        );
        assert_eq!(
            viewer.handle(ViewerInput::Key(LightboxKey::ArrowLeft)),
            Some(ViewerEvent::Navigated { index: 2 })
        );
    }

    #[test]
    fn single_image_navigation_is_silent() {
        let mut viewer = GalleryViewer::default();
        viewer.open(gallery(1), 0, None);

        assert_eq!(viewer.handle(ViewerInput::Next), None);
        assert_eq!(viewer.handle(ViewerInput::Previous), None);
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn alt_text_falls_back_to_default_title() {
        let mut viewer = GalleryViewer::default();
        viewer.open(gallery(4), 1, None);
        assert_eq!(
            viewer.alt_text(FALLBACK_TITLE).as_deref(),
            Some("View Image - 2")
        );

        viewer.open(gallery(4), 3, Some("Weather App".into()));
        assert_eq!(
            viewer.alt_text(FALLBACK_TITLE).as_deref(),
            Some("Weather App - 4")
        );
    }
}
