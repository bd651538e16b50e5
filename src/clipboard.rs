//! Snarf (clipboard) access.
//!
//! Reads follow a two-step protocol: the caller offers a buffer and gets
//! back how many bytes were copied and how many the clipboard holds. When
//! the second number is larger, the caller retries with a buffer of that
//! size.

use std::cell::RefCell;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard holds no text")]
    Empty,
    #[error("clipboard access failed: {0}")]
    Access(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::Unavailable("not supported".to_string())
            }
            other => ClipboardError::Access(other.to_string()),
        }
    }
}

pub trait Snarf {
    /// Copies up to `buf.len()` bytes of clipboard text into `buf`.
    /// Returns `(have, total)`: bytes copied and bytes available.
    fn read_snarf(&self, buf: &mut [u8]) -> Result<(usize, usize), ClipboardError>;

    fn write_snarf(&self, data: &[u8]) -> Result<(), ClipboardError>;
}

fn copy_out(content: &[u8], buf: &mut [u8]) -> (usize, usize) {
    let have = content.len().min(buf.len());
    buf[..have].copy_from_slice(&content[..have]);
    (have, content.len())
}

/// In-process clipboard, for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: RefCell<Vec<u8>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            content: RefCell::new(text.as_bytes().to_vec()),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content.borrow()).into_owned()
    }
}

impl Snarf for MemoryClipboard {
    fn read_snarf(&self, buf: &mut [u8]) -> Result<(usize, usize), ClipboardError> {
        Ok(copy_out(&self.content.borrow(), buf))
    }

    fn write_snarf(&self, data: &[u8]) -> Result<(), ClipboardError> {
        *self.content.borrow_mut() = data.to_vec();
        Ok(())
    }
}

/// The system clipboard through arboard.
pub struct SystemClipboard {
    inner: RefCell<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: RefCell::new(arboard::Clipboard::new()?),
        })
    }
}

impl Snarf for SystemClipboard {
    fn read_snarf(&self, buf: &mut [u8]) -> Result<(usize, usize), ClipboardError> {
        let text = self.inner.borrow_mut().get_text()?;
        Ok(copy_out(text.as_bytes(), buf))
    }

    fn write_snarf(&self, data: &[u8]) -> Result<(), ClipboardError> {
        let text = String::from_utf8_lossy(data).into_owned();
        self.inner.borrow_mut().set_text(text)?;
        Ok(())
    }
}

/// Reads the whole clipboard, retrying once with a right-sized buffer when
/// the first read was truncated.
pub fn read_all(snarf: &dyn Snarf) -> Result<String, ClipboardError> {
    let mut buf = vec![0u8; 128];
    let (have, total) = snarf.read_snarf(&mut buf)?;
    if have >= total {
        buf.truncate(have);
    } else {
        buf = vec![0u8; total];
        let (have, _) = snarf.read_snarf(&mut buf)?;
        buf.truncate(have);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
