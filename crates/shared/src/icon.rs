use serde::{Deserialize, Serialize};

/// Icon identifiers used by the content file.
///
/// Tags that are not recognised deserialize to [`IconTag::Unknown`], which has
/// no themed icon and renders as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    Github,
    Linkedin,
    Mail,
    External,
    Phone,
    Zalo,
    Trophy,
    Award,
    Star,
    Code2,
    Lightbulb,
    Zap,
    Target,
    Heart,
    #[default]
    #[serde(other)]
    Unknown,
}

impl IconTag {
    /// Themed icon to render for this tag, `None` renders nothing
    pub fn icon_name(self) -> Option<&'static str> {
        match self {
            IconTag::Github => Some("software-update-available-symbolic"),
            IconTag::Linkedin => Some("system-users-symbolic"),
            IconTag::Mail => Some("mail-unread-symbolic"),
            IconTag::External => Some("send-to-symbolic"),
            // No themed chat glyph for Zalo, share the phone icon.
            IconTag::Phone | IconTag::Zalo => Some("call-start-symbolic"),
            IconTag::Trophy | IconTag::Award => Some("emblem-favorite-symbolic"),
            IconTag::Star => Some("starred-symbolic"),
            IconTag::Code2 => Some("text-x-script-symbolic"),
            IconTag::Lightbulb => Some("dialog-information-symbolic"),
            IconTag::Zap => Some("weather-storm-symbolic"),
            IconTag::Target => Some("find-location-symbolic"),
            IconTag::Heart => Some("emblem-favorite-symbolic"),
            IconTag::Unknown => None,
        }
    }
}
