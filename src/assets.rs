//! Static image assets with a single fallback
//!
//! Each reference is decoded at most once. A reference that fails is swapped
//! for `FALLBACK_IMAGE` and never retried; the fallback itself is decoded at
//! most once and shared.

use crate::constants::FALLBACK_IMAGE;
use crate::utils::asset_relative;
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a reference ended up showing.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    /// Either the reference itself or `FALLBACK_IMAGE`
    pub shown: String,
    /// `None` when even the fallback is unavailable
    pub image: Option<T>,
}

pub struct ImageCache<T> {
    slots: HashMap<String, Slot<T>>,
    fallback: Option<Option<T>>,
}

impl<T: Clone> Default for ImageCache<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            fallback: None,
        }
    }
}

impl<T: Clone> ImageCache<T> {
    pub fn resolve<E: std::fmt::Display>(
        &mut self,
        reference: &str,
        mut load: impl FnMut(&str) -> Result<T, E>,
    ) -> &Slot<T> {
        if !self.slots.contains_key(reference) {
            let slot = match load(reference) {
                Ok(image) => Slot {
                    shown: reference.to_string(),
                    image: Some(image),
                },
                Err(e) => {
                    warn!(reference, error = %e, "Image failed to load, using fallback");
                    let image = self
                        .fallback
                        .get_or_insert_with(|| match load(FALLBACK_IMAGE) {
                            Ok(image) => Some(image),
                            Err(e) => {
                                warn!(error = %e, "Fallback image unavailable");
                                None
                            }
                        })
                        .clone();
                    Slot {
                        shown: FALLBACK_IMAGE.to_string(),
                        image,
                    }
                }
            };
            self.slots.insert(reference.to_string(), slot);
        }
        &self.slots[reference]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Textures decoded from the assets directory.
pub struct ImageStore {
    root: PathBuf,
    cache: ImageCache<egui::TextureHandle>,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        debug!(root = %root.display(), "Image store ready");
        Self {
            root,
            cache: ImageCache::default(),
        }
    }

    pub fn texture(&mut self, ctx: &egui::Context, reference: &str) -> Option<egui::TextureHandle> {
        let root = &self.root;
        self.cache
            .resolve(reference, |path| load_texture(ctx, root, path))
            .image
            .clone()
    }
}

fn load_texture(
    ctx: &egui::Context,
    root: &Path,
    reference: &str,
) -> Result<egui::TextureHandle, image::ImageError> {
    let img = image::open(root.join(asset_relative(reference)))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    Ok(ctx.load_texture(
        reference,
        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
        egui::TextureOptions::LINEAR,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Loader that knows a fixed set of paths and counts every attempt.
    struct FakeDisk {
        present: Vec<&'static str>,
        attempts: HashMap<String, usize>,
    }

    impl FakeDisk {
        fn new(present: &[&'static str]) -> Self {
            Self {
                present: present.to_vec(),
                attempts: HashMap::new(),
            }
        }

        fn load(&mut self, path: &str) -> Result<String, String> {
            *self.attempts.entry(path.to_string()).or_default() += 1;
            if self.present.iter().any(|p| *p == path) {
                Ok(format!("pixels of {path}"))
            } else {
                Err(format!("{path}: not found"))
            }
        }

        fn attempts(&self, path: &str) -> usize {
            self.attempts.get(path).copied().unwrap_or(0)
        }
    }

    #[test]
    fn present_image_loads_once() {
        let mut disk = FakeDisk::new(&["/Me.jpeg"]);
        let mut cache = ImageCache::default();
        for _ in 0..3 {
            let slot = cache.resolve("/Me.jpeg", |p| disk.load(p));
            assert_eq!(slot.shown, "/Me.jpeg");
            assert_eq!(slot.image.as_deref(), Some("pixels of /Me.jpeg"));
        }
        assert_eq!(disk.attempts("/Me.jpeg"), 1);
    }

    #[test]
    fn failing_reference_uses_fallback_exactly_once() {
        let mut disk = FakeDisk::new(&[FALLBACK_IMAGE]);
        let mut cache = ImageCache::default();
        for _ in 0..5 {
            let slot = cache.resolve("/Journal.png", |p| disk.load(p));
            assert_eq!(slot.shown, FALLBACK_IMAGE);
            assert!(slot.image.is_some());
        }
        assert_eq!(disk.attempts("/Journal.png"), 1);
        assert_eq!(disk.attempts(FALLBACK_IMAGE), 1);
    }

    #[test]
    fn fallback_is_shared_between_references() {
        let mut disk = FakeDisk::new(&[FALLBACK_IMAGE]);
        let mut cache = ImageCache::default();
        cache.resolve("/a.jpeg", |p| disk.load(p));
        cache.resolve("/b.jpeg", |p| disk.load(p));
        assert_eq!(disk.attempts(FALLBACK_IMAGE), 1);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn missing_fallback_degrades_to_placeholder_without_retry() {
        let mut disk = FakeDisk::new(&[]);
        let mut cache = ImageCache::default();
        for _ in 0..3 {
            let slot = cache.resolve("/Perfum.jpeg", |p| disk.load(p));
            assert_eq!(slot.shown, FALLBACK_IMAGE);
            assert!(slot.image.is_none());
        }
        assert_eq!(disk.attempts("/Perfum.jpeg"), 1);
        assert_eq!(disk.attempts(FALLBACK_IMAGE), 1);
    }
}
