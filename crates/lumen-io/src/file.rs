//! Byte-sequential file abstraction consumed by image loaders.
//!
//! Loaders only ever read forward one byte at a time, so the [`File`] trait
//! is deliberately small. [`MemoryFile`] serves bytes from a buffer and
//! [`DiskFile`] from a buffered [`std::fs::File`]. [`FileReader`] adapts any
//! [`File`] to [`std::io::Read`] so `byteorder` can parse multi-byte fields.
//!
//! # Usage
//!
//! ```rust
//! use byteorder::{LittleEndian, ReadBytesExt};
//! use lumen_io::{File, FileReader, MemoryFile};
//!
//! let mut file = MemoryFile::new(vec![0x34, 0x12, 0xff]);
//! let value = FileReader::new(&mut file).read_u16::<LittleEndian>().unwrap();
//! assert_eq!(value, 0x1234);
//! assert_eq!(file.read8().unwrap(), 0xff);
//! assert!(file.read8().is_err());
//! assert!(!file.ok());
//! ```

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::ReadBytesExt;

use crate::error::IoResult;

/// A readable, closable byte stream.
pub trait File {
    /// Reads the next byte.
    ///
    /// # Errors
    ///
    /// Fails at end of input, after [`File::close`], or on an I/O error.
    fn read8(&mut self) -> IoResult<u8>;

    /// Whether the last read succeeded and the file is open.
    fn ok(&self) -> bool;

    /// Closes the file. Later reads fail.
    fn close(&mut self) -> IoResult<()>;
}

fn closed() -> io::Error {
    io::Error::other("file is closed")
}

/// In-memory byte stream.
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    bytes: Vec<u8>,
    position: usize,
    ok: bool,
    open: bool,
}

impl MemoryFile {
    /// Wraps `bytes`, positioned at the start.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
            ok: true,
            open: true,
        }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Whether [`File::close`] has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.open
    }
}

impl From<Vec<u8>> for MemoryFile {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl File for MemoryFile {
    fn read8(&mut self) -> IoResult<u8> {
        if !self.open {
            self.ok = false;
            return Err(closed().into());
        }
        match self.bytes.get(self.position) {
            Some(&b) => {
                self.position += 1;
                self.ok = true;
                Ok(b)
            }
            None => {
                self.ok = false;
                Err(io::Error::from(io::ErrorKind::UnexpectedEof).into())
            }
        }
    }

    fn ok(&self) -> bool {
        self.ok && self.open
    }

    fn close(&mut self) -> IoResult<()> {
        self.open = false;
        Ok(())
    }
}

/// Buffered file on disk.
#[derive(Debug)]
pub struct DiskFile {
    reader: Option<BufReader<fs::File>>,
    ok: bool,
}

impl DiskFile {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`std::fs::File::open`].
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let file = fs::File::open(path.as_ref())?;
        Ok(Self {
            reader: Some(BufReader::new(file)),
            ok: true,
        })
    }

    /// Whether [`File::close`] has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl File for DiskFile {
    fn read8(&mut self) -> IoResult<u8> {
        let result = match self.reader.as_mut() {
            Some(reader) => reader.read_u8(),
            None => Err(closed()),
        };
        self.ok = result.is_ok();
        Ok(result?)
    }

    fn ok(&self) -> bool {
        self.ok && self.reader.is_some()
    }

    fn close(&mut self) -> IoResult<()> {
        self.reader = None;
        Ok(())
    }
}

/// [`std::io::Read`] over a [`File`].
///
/// A failed [`File::read8`] ends the read; the bytes read before it are
/// returned, and a read that gets none reports end of input.
pub struct FileReader<'a> {
    file: &'a mut dyn File,
}

impl<'a> FileReader<'a> {
    /// Borrows `file` for reading.
    pub fn new(file: &'a mut dyn File) -> Self {
        Self { file }
    }
}

impl Read for FileReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        for (i, slot) in buf.iter_mut().enumerate() {
            match self.file.read8() {
                Ok(b) => *slot = b,
                Err(_) => return Ok(i),
            }
        }
        Ok(buf.len())
    }
}
