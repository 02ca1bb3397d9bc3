// SPDX-License-Identifier: MPL-2.0
//! Gallery content types.
//!
//! A [`Gallery`] is the ordered list of images a host page shows in its grid
//! and hands to the lightbox. Insertion order is display order.

use std::path::PathBuf;
use std::sync::Arc;

/// One image of a gallery, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// URI or filesystem path of the full-resolution image.
    pub source: String,
    /// Accessibility description.
    pub alt_text: String,
    /// Human-readable label shown under the image.
    pub caption: String,
}

impl ImageDescriptor {
    /// Creates a descriptor from its three parts.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        alt_text: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
            caption: caption.into(),
        }
    }

    /// Filesystem path of the source, with any `file://` scheme removed.
    #[must_use]
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(
            self.source
                .strip_prefix("file://")
                .unwrap_or(&self.source),
        )
    }

    /// Text describing the image: the caption, or the alt text when the
    /// caption is blank.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.caption.trim().is_empty() {
            &self.alt_text
        } else {
            &self.caption
        }
    }
}

/// Ordered, shareable list of images with an optional heading.
///
/// The image list is stored behind an `Arc` so a lightbox session can hold
/// the exact list it was opened with, independently of later host changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    heading: Option<String>,
    images: Arc<[ImageDescriptor]>,
}

impl Gallery {
    /// Creates a gallery from images in display order.
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self {
            heading: None,
            images: images.into(),
        }
    }

    /// Sets the heading shown above the grid.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Returns the heading, if one was set.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Returns the images in display order.
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Returns a shared handle to the image list.
    pub fn shared_images(&self) -> Arc<[ImageDescriptor]> {
        Arc::clone(&self.images)
    }

    /// Returns the number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the gallery has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the image at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Clamps a requested slide index into `[0, len - 1]`.
///
/// Returns `None` when `len` is zero since no index is valid.
/// Negative requests (e.g. from arithmetic on signed offsets) clamp to 0.
#[must_use]
pub fn clamp_index(requested: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = (len - 1) as i64;
    Some(requested.clamp(0, last) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Gallery {
        Gallery::new(
            (0..count)
                .map(|i| ImageDescriptor::new(format!("img{i}.png"), format!("alt {i}"), format!("cap {i}")))
                .collect(),
        )
    }

    #[test]
    fn clamp_index_keeps_valid_values() {
        assert_eq!(clamp_index(0, 8), Some(0));
        assert_eq!(clamp_index(4, 8), Some(4));
        assert_eq!(clamp_index(7, 8), Some(7));
    }

    #[test]
    fn clamp_index_bounds_out_of_range_values() {
        assert_eq!(clamp_index(-3, 8), Some(0));
        assert_eq!(clamp_index(8, 8), Some(7));
        assert_eq!(clamp_index(i64::MAX, 8), Some(7));
    }

    #[test]
    fn clamp_index_rejects_empty_lists() {
        assert_eq!(clamp_index(0, 0), None);
        assert_eq!(clamp_index(5, 0), None);
    }

    #[test]
    fn gallery_preserves_insertion_order() {
        let gallery = sample(3);
        let captions: Vec<_> = gallery.images().iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["cap 0", "cap 1", "cap 2"]);
    }

    #[test]
    fn shared_images_points_at_same_list() {
        let gallery = sample(2);
        let shared = gallery.shared_images();
        assert_eq!(shared.len(), 2);
        assert_eq!(shared[1], gallery.images()[1]);
    }

    #[test]
    fn local_path_strips_file_scheme() {
        let image = ImageDescriptor::new("file:///tmp/a.png", "", "");
        assert_eq!(image.local_path(), PathBuf::from("/tmp/a.png"));
        let image = ImageDescriptor::new("photos/b.jpg", "", "");
        assert_eq!(image.local_path(), PathBuf::from("photos/b.jpg"));
    }

    #[test]
    fn label_falls_back_to_alt_text() {
        assert_eq!(ImageDescriptor::new("a", "alt", "cap").label(), "cap");
        assert_eq!(ImageDescriptor::new("a", "alt", "  ").label(), "alt");
    }

    #[test]
    fn heading_is_optional() {
        assert_eq!(sample(1).heading(), None);
        assert_eq!(sample(1).with_heading("Work").heading(), Some("Work"));
    }
}
