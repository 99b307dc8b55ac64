use viewer_nav::ViewerInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Projects,
    Project(u32),
}

#[derive(Debug, Clone)]
pub enum Message {
    Nav(NavMessage),
    Lightbox(ViewerInput),
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    OpenProject(u32),
    BackToProjects,
    /// Open the lightbox on the current project's gallery at this index
    OpenGallery(usize),
}
