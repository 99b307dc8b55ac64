//! Main app state

use crate::{
    assets::AssetRoot,
    fl,
    key_binds::key_press_handler,
    message::{Message, NavMessage, Page},
    views,
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    iced::{Length, Subscription},
    widget::{container, scrollable},
};
use shared::{KeyListeners, ScrollLock};
use std::path::PathBuf;
use viewer_config::{AppTheme, Portfolio, Project, ViewerConfig};
use viewer_nav::{GalleryViewer, ViewerEvent};
use viewer_types::Gallery;

pub struct Folio {
    core: Core,
    config: ViewerConfig,
    portfolio: Portfolio,
    assets: AssetRoot,
    page: Page,
    key_listeners: KeyListeners,
    scroll_lock: ScrollLock,
    lightbox: GalleryViewer,
    // The page owns the open flag, the lightbox only follows it.
    lightbox_open: bool,
    lightbox_index: usize,
}

impl Folio {
    pub const APP_ID: &'static str = "dev.folio.Folio";

    fn current_project(&self) -> Option<&Project> {
        match self.page {
            Page::Project(id) => self.portfolio.project(id).ok(),
            Page::Projects => None,
        }
    }

    fn current_gallery(&self) -> Gallery {
        self.current_project()
            .map(Project::gallery)
            .unwrap_or_default()
    }

    /// Push the page's open flag and start index into the lightbox
    fn sync_lightbox(&mut self) -> Task<Action<Message>> {
        let gallery = self.current_gallery();
        let title = self.current_project().map(|project| project.title.clone());

        self.lightbox.sync(
            self.lightbox_open,
            &gallery,
            self.lightbox_index,
            title.as_deref(),
        );
        self.update_title()
    }

    fn close_lightbox(&mut self) -> Task<Action<Message>> {
        self.lightbox_open = false;
        self.sync_lightbox()
    }

    fn update_title(&mut self) -> Task<Action<Message>> {
        let alt = self.lightbox.alt_text(&self.config.fallback_title);
        let title = match (alt, self.current_project()) {
            (Some(alt), _) => alt,
            (None, Some(project)) => format!("{} - {}", project.title, fl!("app-title")),
            (None, None) => fl!("app-title"),
        };

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }
}

impl Application for Folio {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let config = viewer_config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {e}");
            ViewerConfig::default()
        });

        let content_path = flags.or_else(|| config.resolved_content_path());
        let (portfolio, assets) = match &content_path {
            Some(path) => match Portfolio::load_from_path(path) {
                Ok(portfolio) => (portfolio, AssetRoot::for_content_file(path)),
                Err(e) => {
                    tracing::error!("{}: {e}", fl!("content-missing"));
                    (Portfolio::default(), AssetRoot::default())
                }
            },
            None => {
                tracing::error!("{}: no content path", fl!("content-missing"));
                (Portfolio::default(), AssetRoot::default())
            }
        };

        let scroll_lock = ScrollLock::new();
        let key_listeners = KeyListeners::new();

        let mut app = Self {
            core,
            lightbox: GalleryViewer::new(scroll_lock.clone(), key_listeners.clone()),
            config,
            portfolio,
            assets,
            page: Page::Projects,
            key_listeners,
            scroll_lock,
            lightbox_open: false,
            lightbox_index: 0,
        };

        let theme = match app.config.app_theme {
            AppTheme::System => cosmic::theme::system_preference(),
            AppTheme::Dark => cosmic::Theme::dark(),
            AppTheme::Light => cosmic::Theme::light(),
        };

        let tasks = vec![cosmic::command::set_theme(theme), app.update_title()];

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let body = match self.current_project() {
            Some(project) => views::project::view(project, &self.assets),
            None => views::projects::view(&self.portfolio, &self.assets),
        };

        // No scrolling behind the lightbox
        let page: Element<'_, Message> = if self.scroll_lock.is_locked() {
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            scrollable(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        match views::lightbox::overlay(&self.lightbox, &self.assets, &self.config) {
            Some((backdrop, dialog)) => cosmic::iced_widget::stack![page, backdrop, dialog].into(),
            None => page,
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Nav(nav_msg) => match nav_msg {
                NavMessage::OpenProject(id) => {
                    if self.portfolio.project(id).is_err() {
                        tracing::warn!("No project with id {id}");
                        return Task::none();
                    }

                    let close = self.close_lightbox();
                    self.page = Page::Project(id);
                    Task::batch([close, self.update_title()])
                }
                NavMessage::BackToProjects => {
                    // Leaving the page tears the lightbox down with it
                    let close = self.close_lightbox();
                    self.page = Page::Projects;
                    Task::batch([close, self.update_title()])
                }
                NavMessage::OpenGallery(idx) => {
                    if self.current_gallery().is_empty() {
                        return Task::none();
                    }

                    self.lightbox_index = idx;
                    if self.lightbox.is_open() {
                        // Same project, same gallery: only the position moves
                        self.lightbox.go_to(idx);
                        return self.update_title();
                    }

                    self.lightbox_open = true;
                    self.sync_lightbox()
                }
            },
            Message::Lightbox(input) => match self.lightbox.handle(input) {
                Some(ViewerEvent::Closed) => self.close_lightbox(),
                Some(ViewerEvent::Navigated { index }) => {
                    tracing::debug!(
                        index,
                        total = self.lightbox.gallery().map_or(0, Gallery::len),
                        state = ?self.lightbox.state(),
                        "lightbox moved"
                    );
                    self.update_title()
                }
                None => Task::none(),
            },
            Message::Cancelled => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        // Global keys only route while the lightbox holds a listener
        if self.key_listeners.is_listening() {
            cosmic::iced::keyboard::on_key_press(key_press_handler)
        } else {
            Subscription::none()
        }
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.lightbox_open = false;
        self.lightbox.close();

        if let Err(e) = viewer_config::save(&self.config) {
            tracing::warn!("Failed to save settings: {e}");
        }

        None
    }
}
