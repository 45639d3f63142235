//! # lumen-io
//!
//! Image loading for the lumen engine.
//!
//! - [`File`] - byte-sequential input, with [`MemoryFile`] and [`DiskFile`]
//! - [`ImageLoader`] - decodes an [`Image`](lumen_core::Image) from a file
//! - [`ImageManager`] - dispatches to loaders by file-type tag
//! - [`TgaImageLoader`] - Truevision TGA decoder (feature `tga`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use lumen_io::{DiskFile, ImageManager};
//!
//! let manager = ImageManager::with_builtin_loaders();
//! let mut file = DiskFile::open("textures/brick.tga")?;
//! let image = manager.load("tga", &mut file)?;
//! println!("{}x{}", image.width(), image.height());
//! # Ok::<(), lumen_io::IoError>(())
//! ```
//!
//! # Logging
//!
//! Loader registration and dispatch are logged at `debug`, TGA header
//! details at `trace`, and rejected files at `warn`, through [`tracing`].
//! No subscriber is installed here.
//!
//! # Feature Flags
//!
//! - `tga` - the built-in TGA loader (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod file;
pub mod loader;
pub mod manager;
#[cfg(feature = "tga")]
pub mod tga;

pub use error::*;
pub use file::*;
pub use loader::*;
pub use manager::*;
#[cfg(feature = "tga")]
pub use tga::{TgaHeader, TgaImageLoader, TgaKind};
