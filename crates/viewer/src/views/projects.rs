//! Landing page: profile, project cards and contact links

use crate::{
    assets::AssetRoot,
    fl,
    message::{Message, NavMessage},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{button, column, container, horizontal_space, icon, image, image::Handle, row, text},
};
use viewer_config::{Portfolio, Project, SocialLink};

pub fn view<'a>(portfolio: &'a Portfolio, assets: &AssetRoot) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut profile = column()
        .push(text::title1(portfolio.profile.name.as_str()))
        .push(text::title4(portfolio.profile.title.as_str()))
        .push(text::body(portfolio.profile.subtitle.as_str()))
        .spacing(spacing.space_xxs)
        .align_x(Alignment::Center);

    if let Some(email) = portfolio.email() {
        profile = profile.push(text::caption(email));
    }

    let mut page = column()
        .push(container(profile).center_x(Length::Fill))
        .push(text::title3(fl!("projects-heading")))
        .spacing(spacing.space_m)
        .padding(spacing.space_l)
        .width(Length::Fill);

    if portfolio.projects.is_empty() {
        page = page.push(
            container(
                column()
                    .push(icon::from_name("folder-pictures-symbolic").size(64))
                    .push(text(fl!("no-projects")).size(16))
                    .spacing(spacing.space_m)
                    .align_x(Alignment::Center),
            )
            .center_x(Length::Fill),
        );
    }

    for project in &portfolio.projects {
        page = page.push(project_card(project, assets));
    }

    if !portfolio.social_links.is_empty() {
        page = page
            .push(text::title3(fl!("contact-heading")))
            .push(contact_links(&portfolio.social_links));
    }

    page.into()
}

fn project_card<'a>(project: &'a Project, assets: &AssetRoot) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let cover: Element<'a, Message> = match project.main_image() {
        Some(cover) => image(Handle::from_path(assets.resolve(cover)))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(192.0))
            .height(Length::Fixed(108.0))
            .into(),
        None => container(icon::from_name("image-x-generic-symbolic").size(48))
            .width(Length::Fixed(192.0))
            .height(Length::Fixed(108.0))
            .center(Length::Fixed(192.0))
            .into(),
    };

    let details = column()
        .push(text::title4(project.title.as_str()))
        .push(text::caption(project.category.as_str()))
        .push(text::body(project.description.as_str()))
        .push(text::caption(project.tags.join(" · ")))
        .spacing(spacing.space_xxs)
        .width(Length::Fill);

    let open_btn = button::standard(fl!("view-project"))
        .on_press(Message::Nav(NavMessage::OpenProject(project.id)));

    container(
        row()
            .push(cover)
            .push(details)
            .push(open_btn)
            .spacing(spacing.space_m)
            .align_y(Alignment::Center),
    )
    .padding(spacing.space_s)
    .width(Length::Fill)
    .class(theme::Container::Card)
    .into()
}

fn contact_links(links: &[SocialLink]) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;
    let mut list = column().spacing(spacing.space_xxs);

    for link in links {
        let mut entry = row().spacing(spacing.space_xs).align_y(Alignment::Center);

        // Unknown tags have no icon, the label still shows
        if let Some(name) = link.icon.icon_name() {
            entry = entry.push(icon::from_name(name).size(16));
        }

        list = list.push(
            entry
                .push(text::body(link.label.as_str()))
                .push(horizontal_space())
                .push(text::caption(link.href.as_str())),
        );
    }

    list.into()
}
