#[cfg(test)]
mod tests {
    use viewer_nav::NavState;
    use viewer_types::Gallery;

    fn three() -> Gallery {
        Gallery::new(["a.jpg", "b.jpg", "c.jpg"])
    }

    #[test]
    fn test_empty_gallery_has_no_cursor() {
        let mut nav = NavState::starting_at(Gallery::empty(), 4);

        assert_eq!(nav.index(), None);
        assert!(nav.go_next().is_none());
        assert!(nav.go_prev().is_none());
        assert!(nav.go_to(0).is_none());
        assert!(nav.counter().is_none());
    }

    #[test]
    fn test_start_is_clamped() {
        let nav = NavState::starting_at(three(), 10);

        assert_eq!(nav.index(), Some(2));
        assert_eq!(nav.current().map(|img| img.as_str()), Some("c.jpg"));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut nav = NavState::starting_at(three(), 2);

        assert_eq!(nav.go_next().map(|img| img.as_str()), Some("a.jpg"));
        assert_eq!(nav.go_prev().map(|img| img.as_str()), Some("c.jpg"));
        assert_eq!(nav.go_prev().map(|img| img.as_str()), Some("b.jpg"));
    }

    #[test]
    fn test_go_to_clamps() {
        let mut nav = NavState::starting_at(three(), 0);

        assert_eq!(nav.go_to(1).map(|img| img.as_str()), Some("b.jpg"));
        assert_eq!(nav.go_to(7).map(|img| img.as_str()), Some("c.jpg"));
    }

    #[test]
    fn test_set_images_clamps_and_reselects() {
        let mut nav = NavState::starting_at(three(), 2);

        nav.set_images(Gallery::new(["x.jpg"]));
        assert_eq!(nav.index(), Some(0));

        nav.set_images(Gallery::empty());
        assert_eq!(nav.index(), None);

        // A list that comes back after being emptied is navigable again
        nav.set_images(three());
        assert_eq!(nav.index(), Some(0));
        assert_eq!(nav.go_next().map(|img| img.as_str()), Some("b.jpg"));
    }

    #[test]
    fn test_counter_tracks_cursor() {
        let mut nav = NavState::starting_at(three(), 0);
        assert_eq!(nav.counter().map(|c| c.position), Some(1));

        nav.go_prev();
        assert_eq!(nav.counter().map(|c| c.to_string()).as_deref(), Some("3 / 3"));
    }
}
