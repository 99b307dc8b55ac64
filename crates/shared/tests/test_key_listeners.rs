#[cfg(test)]
mod tests {
    use shared::key_listeners::KeyListeners;

    #[test]
    fn test_subscribe_registers_listener() {
        let listeners = KeyListeners::new();
        assert!(!listeners.is_listening());

        let _guard = listeners.subscribe("lightbox");
        assert!(listeners.is_listening());
        assert_eq!(listeners.active(), 1);
    }

    #[test]
    fn test_dropping_guard_unregisters() {
        let listeners = KeyListeners::new();

        {
            let _first = listeners.subscribe("lightbox");
            let _second = listeners.subscribe("dialog");
            assert_eq!(listeners.active(), 2);
        }

        assert_eq!(listeners.active(), 0);
        assert!(!listeners.is_listening());
    }
}
