//! Static portfolio content.
//!
//! Everything shown by the app comes from one TOML file. Image references are
//! kept exactly as written; resolving them is up to whoever displays them.

use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use shared::IconTag;
use std::{fs, path::Path};
use viewer_types::{Gallery, ImageRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: IconTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub rating: f32,
    pub reviews: u32,
    pub downloads: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub long_description: Option<String>,
    pub stats: Option<ProjectStats>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Cover image for the project list
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub gallery_images: Vec<ImageRef>,
}

impl Project {
    pub fn description(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }

    /// Falls back to the tags when no technologies are listed
    pub fn technologies(&self) -> &[String] {
        if self.technologies.is_empty() {
            &self.tags
        } else {
            &self.technologies
        }
    }

    /// First gallery image, else the cover image
    pub fn main_image(&self) -> Option<&ImageRef> {
        self.gallery_images.first().or(self.image.as_ref())
    }

    pub fn gallery(&self) -> Gallery {
        self.gallery_images.iter().cloned().collect()
    }
}

impl Portfolio {
    pub fn from_toml_str(raw: &str) -> ContentResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load_from_path(path: &Path) -> ContentResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let portfolio = Self::from_toml_str(&raw)?;
        tracing::info!(
            projects = portfolio.projects.len(),
            "loaded portfolio from {}",
            path.display()
        );

        Ok(portfolio)
    }

    pub fn project(&self, id: u32) -> ContentResult<&Project> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .ok_or(ContentError::ProjectNotFound(id))
    }

    /// Social link whose icon is `mail`, with the `mailto:` prefix removed
    pub fn email(&self) -> Option<&str> {
        self.social_links
            .iter()
            .find(|link| link.icon == IconTag::Mail)
            .map(|link| link.href.strip_prefix("mailto:").unwrap_or(&link.href))
    }
}
