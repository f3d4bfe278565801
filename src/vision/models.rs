// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use bytes::Bytes;
use std::path::Path;

/// Binary pixel buffer handed over by the host.
///
/// Cloning is cheap; the underlying bytes are reference counted.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImageBuffer {
    data: Bytes,
}

impl ImageBuffer {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Read an image file as-is. No decoding or format check.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(data))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for ImageBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for ImageBuffer {
    fn from(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }
}

// Pixel data is noise in logs
impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_pixel_data() {
        let image = ImageBuffer::from(vec![0xde, 0xad, 0xbe, 0xef]);
        let debug = format!("{:?}", image);
        assert_eq!(debug, "ImageBuffer { len: 4 }");
    }

    #[test]
    fn test_clone_shares_bytes() {
        let image = ImageBuffer::from(&b"\x89PNG"[..]);
        let copy = image.clone();
        assert_eq!(copy.as_bytes(), image.as_bytes());
        assert_eq!(copy.len(), 4);
        assert!(!copy.is_empty());
    }

    #[tokio::test]
    async fn test_from_file_reads_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let image = ImageBuffer::from_file(&path).await.unwrap();
        assert_eq!(image.as_bytes(), b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageBuffer::from_file(dir.path().join("absent.png")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, crate::error::NodeError::Io(_)));
        assert_eq!(err.kind(), "io_error");
    }
}
