use std::path::{Path, PathBuf};
use viewer_types::ImageRef;

/// Turns content-file image references into paths on disk.
///
/// References are written as site paths (`/img/app/1.png`); they resolve
/// against the directory holding the content file.
#[derive(Debug, Clone, Default)]
pub struct AssetRoot {
    root: Option<PathBuf>,
}

impl AssetRoot {
    pub fn for_content_file(content_file: &Path) -> Self {
        Self {
            root: content_file.parent().map(Path::to_path_buf),
        }
    }

    pub fn resolve(&self, image: &ImageRef) -> PathBuf {
        let relative = image.as_str().trim_start_matches('/');

        match &self.root {
            Some(root) => root.join(relative),
            None => PathBuf::from(image.as_str()),
        }
    }
}
