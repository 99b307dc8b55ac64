/// Keys the lightbox reacts to while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    pub const ALL: &'static [Self] = &[Self::Escape, Self::ArrowLeft, Self::ArrowRight];
}
