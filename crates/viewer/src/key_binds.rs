use crate::message::Message;
use cosmic::iced::keyboard::{Key, Modifiers, key::Named};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use viewer_nav::{LightboxKey, ViewerInput};

static KEY_BINDS: Lazy<HashMap<Key, LightboxKey>> = Lazy::new(init_key_binds);

fn named(key: LightboxKey) -> Named {
    match key {
        LightboxKey::Escape => Named::Escape,
        LightboxKey::ArrowLeft => Named::ArrowLeft,
        LightboxKey::ArrowRight => Named::ArrowRight,
    }
}

fn init_key_binds() -> HashMap<Key, LightboxKey> {
    LightboxKey::ALL
        .iter()
        .map(|key| (Key::Named(named(*key)), *key))
        .collect()
}

/// Only subscribed while the lightbox holds a key listener. Modifiers are
/// ignored, Shift+Escape still closes.
pub fn key_press_handler(key: Key, _modifiers: Modifiers) -> Option<Message> {
    KEY_BINDS
        .get(&key)
        .map(|key| Message::Lightbox(ViewerInput::Key(*key)))
}
