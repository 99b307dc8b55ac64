#[cfg(test)]
mod tests {
    use shared::IconTag;
    use viewer_config::{ContentError, Portfolio};

    const CONTENT: &str = r#"
[profile]
name = "Jamie Rivera"
title = "Software Engineer"
subtitle = "Systems and graphics"

[[social_links]]
label = "GitHub"
href = "https://github.com/example"
icon = "github"

[[social_links]]
label = "Email"
href = "mailto:jamie@example.com"
icon = "mail"

[[social_links]]
label = "Mastodon"
href = "https://example.social/@jamie"
icon = "mastodon"

[[projects]]
id = 1
title = "Weather Station"
description = "Short blurb"
long_description = "A much longer description"
tags = ["Rust", "Embedded"]
category = "Hardware"
repo_url = "https://github.com/example/weather"
image = "img/weather/cover.png"
gallery_images = ["img/weather/1.png", "img/weather/2.png", "img/weather/3.png"]

[projects.stats]
rating = 4.8
reviews = 120
downloads = "10K+"

[[projects]]
id = 2
title = "Notes"
description = "Plain notes app"
tags = ["Flutter"]
image = "img/notes/cover.png"
"#;

    fn portfolio() -> Portfolio {
        Portfolio::from_toml_str(CONTENT).unwrap()
    }

    #[test]
    fn test_parses_projects_and_links() {
        let portfolio = portfolio();

        assert_eq!(portfolio.profile.name, "Jamie Rivera");
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.social_links.len(), 3);
        assert_eq!(portfolio.social_links[0].icon, IconTag::Github);
    }

    #[test]
    fn test_unknown_icon_tag_falls_back() {
        let portfolio = portfolio();
        let link = &portfolio.social_links[2];

        assert_eq!(link.icon, IconTag::Unknown);
        assert!(link.icon.icon_name().is_none());
    }

    #[test]
    fn test_gallery_keeps_order() {
        let portfolio = portfolio();
        let gallery = portfolio.project(1).unwrap().gallery();

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).map(|img| img.as_str()), Some("img/weather/1.png"));
        assert_eq!(gallery.get(2).map(|img| img.as_str()), Some("img/weather/3.png"));
    }

    #[test]
    fn test_project_fallbacks() {
        let portfolio = portfolio();

        let weather = portfolio.project(1).unwrap();
        assert_eq!(weather.description(), "A much longer description");
        assert_eq!(weather.technologies(), ["Rust", "Embedded"]);
        assert_eq!(weather.main_image().map(|img| img.as_str()), Some("img/weather/1.png"));
        assert_eq!(weather.stats.as_ref().map(|s| s.reviews), Some(120));

        let notes = portfolio.project(2).unwrap();
        assert_eq!(notes.description(), "Plain notes app");
        assert!(notes.gallery().is_empty());
        assert!(notes.gallery_images.is_empty());
        assert_eq!(notes.main_image().map(|img| img.as_str()), Some("img/notes/cover.png"));
        assert!(notes.stats.is_none());
    }

    #[test]
    fn test_missing_project() {
        let portfolio = portfolio();

        assert!(matches!(
            portfolio.project(42),
            Err(ContentError::ProjectNotFound(42))
        ));
    }

    #[test]
    fn test_email_strips_mailto() {
        assert_eq!(portfolio().email(), Some("jamie@example.com"));
        assert_eq!(Portfolio::default().email(), None);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Portfolio::load_from_path(&dir.path().join("nope.toml")).unwrap_err();

        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, CONTENT).unwrap();

        let portfolio = Portfolio::load_from_path(&path).unwrap();
        assert_eq!(portfolio.projects[1].title, "Notes");
    }
}
