pub mod lightbox;
pub mod project;
pub mod projects;
