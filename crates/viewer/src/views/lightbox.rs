//! Full window lightbox overlay

use crate::{assets::AssetRoot, fl, message::Message};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{
        Space, button, column, container, horizontal_space, icon, image, image::Handle,
        mouse_area, row, text,
    },
};
use viewer_config::ViewerConfig;
use viewer_nav::{GalleryViewer, ViewerInput};

/// Backdrop plus dialog, `None` while the viewer is closed
pub fn overlay<'a>(
    viewer: &'a GalleryViewer,
    assets: &AssetRoot,
    config: &'a ViewerConfig,
) -> Option<(Element<'a, Message>, Element<'a, Message>)> {
    if !viewer.is_open() {
        return None;
    }

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::Transparent),
    )
    .on_press(Message::Lightbox(ViewerInput::Backdrop))
    .into();

    Some((backdrop, dialog(viewer, assets, config)))
}

fn dialog<'a>(
    viewer: &'a GalleryViewer,
    assets: &AssetRoot,
    config: &'a ViewerConfig,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let title = viewer.title().unwrap_or(&config.fallback_title);

    let close_btn = button::icon(icon::from_name("window-close-symbolic"))
        .on_press(Message::Lightbox(ViewerInput::CloseButton))
        .padding(spacing.space_xs)
        .class(theme::Button::Destructive);

    let header = row()
        .push(horizontal_space())
        .push(text::title4(title))
        .push(horizontal_space())
        .push(close_btn)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .padding(spacing.space_xs);

    let picture: Element<'a, Message> = match viewer.current_image() {
        Some(current) => container(
            image(Handle::from_path(assets.resolve(current)))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .padding(spacing.space_xxs)
        .into(),
        None => container(
            column()
                .push(icon::from_name("image-x-generic-symbolic").size(64))
                .push(text(fl!("no-image")).size(14))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        )
        .center(Length::Fill)
        .into(),
    };

    let mut content_row = row().width(Length::Fill).height(Length::Fill);

    if viewer.shows_navigation() {
        let prev_btn = container(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::Lightbox(ViewerInput::Previous)),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let next_btn = container(
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press(Message::Lightbox(ViewerInput::Next)),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        content_row = content_row.push(prev_btn).push(picture).push(next_btn);
    } else {
        content_row = content_row.push(picture);
    }

    let mut body = column()
        .push(header)
        .push(content_row)
        .width(Length::Fill)
        .height(Length::Fill);

    if config.show_counter
        && let Some(counter) = viewer.counter()
    {
        body = body.push(
            row()
                .push(horizontal_space())
                .push(text::body(counter.to_string()))
                .push(horizontal_space())
                .width(Length::Fill)
                .padding(spacing.space_xs),
        );
    }

    // Clicks inside the dialog must not reach the backdrop underneath
    container(
        mouse_area(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .class(theme::Container::Dialog),
        )
        .on_press(Message::Cancelled),
    )
    .padding([40, 60])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
