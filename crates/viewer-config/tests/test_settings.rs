#[cfg(test)]
mod tests {
    use std::fs;
    use viewer_config::{AppTheme, ViewerConfig, load_from_path, save_to_path};
    use viewer_types::FALLBACK_TITLE;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_path(&dir.path().join("settings.toml")).unwrap();

        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.fallback_title, FALLBACK_TITLE);
        assert!(config.show_counter);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let config = ViewerConfig {
            app_theme: AppTheme::Dark,
            content_path: Some(dir.path().join("portfolio.toml")),
            fallback_title: "Screenshot".to_string(),
            show_counter: false,
        };

        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "app_theme = \"Light\"\n").unwrap();

        let config = load_from_path(&path).unwrap();

        assert_eq!(config.app_theme, AppTheme::Light);
        assert_eq!(config.fallback_title, FALLBACK_TITLE);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "app_theme = [").unwrap();

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn test_explicit_content_path_wins() {
        let config = ViewerConfig {
            content_path: Some("/srv/folio/portfolio.toml".into()),
            ..Default::default()
        };

        assert_eq!(
            config.resolved_content_path(),
            Some("/srv/folio/portfolio.toml".into())
        );
    }
}
