//! Registry of image loaders keyed by file-type tag.
//!
//! # Architecture
//!
//! Each tag (for example `"tga"`) owns exactly one boxed [`ImageLoader`].
//! Install loaders during setup; the manager is read-only afterwards and
//! [`ImageManager::load`] only borrows the loader for the duration of a call.
//!
//! # Example
//!
//! ```rust
//! use lumen_io::{ImageManager, IoError, MemoryFile};
//!
//! let manager = ImageManager::with_builtin_loaders();
//! let mut file = MemoryFile::new(Vec::new());
//! let err = manager.load("bmp", &mut file).unwrap_err();
//! assert!(matches!(err, IoError::FileTypeNotSupported(_)));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use lumen_core::Image;
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::file::File;
use crate::loader::ImageLoader;

/// Type-erased loader that can still be recovered as its concrete type.
trait Registered {
    fn loader(&self) -> &dyn ImageLoader;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<L: ImageLoader + 'static> Registered for L {
    fn loader(&self) -> &dyn ImageLoader {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Maps file-type tags to loaders.
#[derive(Default)]
pub struct ImageManager {
    loaders: HashMap<String, Box<dyn Registered>>,
}

impl std::fmt::Debug for ImageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageManager")
            .field("file_types", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ImageManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with the loaders enabled by crate features.
    pub fn with_builtin_loaders() -> Self {
        #[allow(unused_mut)]
        let mut manager = Self::new();
        #[cfg(feature = "tga")]
        manager.emplace_loader("tga", crate::tga::TgaImageLoader::new());
        manager
    }

    /// Registers `loader` under `file_type` and returns it.
    ///
    /// # Panics
    ///
    /// If a loader is already registered under `file_type`.
    pub fn emplace_loader<L>(&mut self, file_type: impl Into<String>, loader: L) -> &mut L
    where
        L: ImageLoader + 'static,
    {
        match self.try_emplace_loader(file_type, loader) {
            Ok(loader) => loader,
            Err(e) => panic!("{e}"),
        }
    }

    /// Registers `loader` under `file_type` and returns it.
    ///
    /// # Errors
    ///
    /// [`IoError::DuplicateLoader`] if the tag is taken; the existing loader
    /// is kept.
    pub fn try_emplace_loader<L>(
        &mut self,
        file_type: impl Into<String>,
        loader: L,
    ) -> IoResult<&mut L>
    where
        L: ImageLoader + 'static,
    {
        let file_type = file_type.into();
        match self.loaders.entry(file_type) {
            Entry::Occupied(e) => Err(IoError::DuplicateLoader(e.key().clone())),
            Entry::Vacant(e) => {
                debug!(file_type = %e.key(), loader = std::any::type_name::<L>(), "registered image loader");
                let slot = e.insert(Box::new(loader));
                slot.as_any_mut()
                    .downcast_mut::<L>()
                    .ok_or_else(|| IoError::DuplicateLoader(std::any::type_name::<L>().into()))
            }
        }
    }

    /// Whether a loader is registered under `file_type`.
    pub fn supports(&self, file_type: &str) -> bool {
        self.loaders.contains_key(file_type)
    }

    /// Registered tags, in no particular order.
    pub fn file_types(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(String::as_str)
    }

    /// Number of registered loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether no loader is registered.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Loads an image from `file` with the loader registered under
    /// `file_type`.
    ///
    /// # Errors
    ///
    /// [`IoError::FileTypeNotSupported`] for an unknown tag; otherwise
    /// whatever the loader reports.
    pub fn load(&self, file_type: &str, file: &mut dyn File) -> IoResult<Image> {
        let Some(registered) = self.loaders.get(file_type) else {
            debug!(file_type, "no image loader for file type");
            return Err(IoError::FileTypeNotSupported(file_type.to_owned()));
        };
        debug!(file_type, "loading image");
        let image = registered.loader().load(file)?;
        debug!(
            file_type,
            width = image.width(),
            height = image.height(),
            "loaded image"
        );
        Ok(image)
    }
}
