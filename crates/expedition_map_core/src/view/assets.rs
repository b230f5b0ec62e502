//! Static asset addressing under the deployment base path.

use crate::model::marker::MarkerCategory;

const SOLUTION_IMAGE_DIR: &str = "/guide/images";

/// Icon image and pixel size for one marker category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIcon {
    pub file: &'static str,
    /// Square icon edge; the anchor sits at the center.
    pub size: u32,
}

impl MarkerIcon {
    pub fn for_category(category: MarkerCategory) -> Self {
        match category {
            MarkerCategory::Exhibit => Self {
                file: "/artifact.png",
                size: 32,
            },
            MarkerCategory::Friend => Self {
                file: "/snowman.png",
                size: 32,
            },
            MarkerCategory::Solution => Self {
                file: "/idea.png",
                size: 24,
            },
            MarkerCategory::Mailbox => Self {
                file: "/mailbox.png",
                size: 32,
            },
        }
    }

    /// Offset of the icon's anchor from its top-left corner.
    pub fn anchor(&self) -> (u32, u32) {
        (self.size / 2, self.size / 2)
    }
}

/// Resolves asset paths against a base path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetPaths {
    base_path: String,
}

impl AssetPaths {
    /// `base_path` is used as-is apart from a trailing `/`, which is dropped.
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_path)
        } else {
            format!("{}/{path}", self.base_path)
        }
    }

    pub fn solution_image(&self, image: &str) -> String {
        self.resolve(&format!("{SOLUTION_IMAGE_DIR}/{image}"))
    }

    pub fn marker_icon(&self, category: MarkerCategory) -> String {
        self.resolve(MarkerIcon::for_category(category).file)
    }

    pub fn map_image(&self) -> String {
        self.resolve(super::MAP_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetPaths, MarkerIcon};
    use crate::model::marker::MarkerCategory;

    #[test]
    fn resolve_handles_leading_slash_and_relative_paths() {
        let paths = AssetPaths::new("/Monster-Expedition-Map");
        assert_eq!(paths.resolve("/map-v2.webp"), "/Monster-Expedition-Map/map-v2.webp");
        assert_eq!(paths.resolve("map-v2.webp"), "/Monster-Expedition-Map/map-v2.webp");
    }

    #[test]
    fn empty_base_path_keeps_root_paths() {
        let paths = AssetPaths::default();
        assert_eq!(paths.resolve("/idea.png"), "/idea.png");
        assert_eq!(paths.solution_image("a.png"), "/guide/images/a.png");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let paths = AssetPaths::new("/base/");
        assert_eq!(paths.marker_icon(MarkerCategory::Friend), "/base/snowman.png");
    }

    #[test]
    fn solution_icon_is_smaller() {
        let icon = MarkerIcon::for_category(MarkerCategory::Solution);
        assert_eq!(icon.size, 24);
        assert_eq!(icon.anchor(), (12, 12));
    }
}
