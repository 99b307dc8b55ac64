//! Project detail page with its gallery grid

use crate::{
    assets::AssetRoot,
    fl,
    message::{Message, NavMessage},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{
        button, column, container, horizontal_space, icon, image, image::Handle, mouse_area, row,
        text,
    },
};
use viewer_config::Project;

const GALLERY_COLUMNS: usize = 4;
const THUMB_HEIGHT: f32 = 120.0;

pub fn view<'a>(project: &'a Project, assets: &AssetRoot) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let back_btn =
        button::text(fl!("back-to-projects")).on_press(Message::Nav(NavMessage::BackToProjects));

    let mut page = column()
        .push(back_btn)
        .push(
            row()
                .push(hero(project, assets))
                .push(details(project))
                .spacing(spacing.space_l),
        )
        .spacing(spacing.space_l)
        .padding(spacing.space_l)
        .width(Length::Fill);

    if !project.gallery_images.is_empty() {
        page = page
            .push(text::title3(fl!("project-gallery")))
            .push(gallery_grid(project, assets));
    }

    page.into()
}

/// Cover image; clicking it opens the lightbox at the first gallery image
fn hero<'a>(project: &'a Project, assets: &AssetRoot) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let Some(main_image) = project.main_image() else {
        return container(
            column()
                .push(icon::from_name("image-x-generic-symbolic").size(64))
                .push(text::title4(project.title.as_str()))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        )
        .width(Length::FillPortion(1))
        .height(Length::Fixed(360.0))
        .center(Length::Fill)
        .class(theme::Container::Card)
        .into();
    };

    let picture = container(
        image(Handle::from_path(assets.resolve(main_image)))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fixed(360.0))
    .class(theme::Container::Card);

    if project.gallery_images.is_empty() {
        // Cover-only projects have nothing to page through
        picture.into()
    } else {
        mouse_area(picture)
            .on_press(Message::Nav(NavMessage::OpenGallery(0)))
            .into()
    }
}

fn details(project: &Project) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut info = column()
        .push(text::caption(project.category.as_str()))
        .push(text::title2(project.title.as_str()))
        .push(text::body(project.description()))
        .spacing(spacing.space_s)
        .width(Length::FillPortion(1));

    if let Some(stats) = &project.stats {
        info = info.push(
            row()
                .push(stat(
                    format!("★ {:.1}", stats.rating),
                    fl!("stats-reviews", count = stats.reviews),
                ))
                .push(stat(stats.downloads.clone(), fl!("stats-downloads")))
                .spacing(spacing.space_s),
        );
    }

    if !project.features.is_empty() {
        let mut features = column()
            .push(text::heading(fl!("key-features")))
            .spacing(spacing.space_xxs);
        for feature in &project.features {
            features = features.push(text::body(format!("• {feature}")));
        }
        info = info.push(features);
    }

    info = info
        .push(text::heading(fl!("technologies")))
        .push(text::body(project.technologies().join(", ")));

    if let Some(url) = &project.repo_url {
        info = info.push(text::caption(format!("{}: {url}", fl!("view-code"))));
    }

    if let Some(url) = &project.demo_url {
        info = info.push(text::caption(format!("{}: {url}", fl!("live-demo"))));
    }

    info.into()
}

fn stat<'a>(value: String, label: String) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    container(
        column()
            .push(text::title4(value))
            .push(text::caption(label))
            .spacing(spacing.space_xxs)
            .align_x(Alignment::Center),
    )
    .padding(spacing.space_s)
    .class(theme::Container::Card)
    .into()
}

fn gallery_grid<'a>(project: &'a Project, assets: &AssetRoot) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let mut grid = column().spacing(spacing.space_s);

    for (row_idx, chunk) in project.gallery_images.chunks(GALLERY_COLUMNS).enumerate() {
        let mut line = row().spacing(spacing.space_s);

        for (col_idx, thumb) in chunk.iter().enumerate() {
            let idx = row_idx * GALLERY_COLUMNS + col_idx;
            let tile = button::custom(
                image(Handle::from_path(assets.resolve(thumb)))
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fixed(THUMB_HEIGHT)),
            )
            .on_press(Message::Nav(NavMessage::OpenGallery(idx)))
            .width(Length::FillPortion(1))
            .class(theme::Button::Image);

            line = line.push(tile);
        }

        // Keep tiles in a short last row the same width as the rest
        for _ in chunk.len()..GALLERY_COLUMNS {
            line = line.push(horizontal_space().width(Length::FillPortion(1)));
        }

        grid = grid.push(line);
    }

    grid.into()
}
