// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Stream Errors
//!
//! The only fallible collaborator of the workspace is the byte stream
//! cursor. An I/O failure ends its sequence; the failure itself is kept as
//! a [`StreamError`] carrying the stream position at which it happened.

use std::io;
use thiserror::Error;

/// An I/O failure observed while reading a byte stream.
#[derive(Debug, Error)]
#[error("byte stream failed after {position} bytes: {source}")]
pub struct StreamError {
    position: u64,
    #[source]
    source: io::Error,
}

impl StreamError {
    /// Creates an error observed after `position` bytes were consumed.
    #[inline]
    pub fn new(position: u64, source: io::Error) -> Self {
        Self { position, source }
    }

    /// Number of bytes consumed before the failure.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The kind of the underlying I/O error.
    #[inline]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Releases the underlying I/O error.
    #[inline]
    pub fn into_io(self) -> io::Error {
        self.source
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        err.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_and_source() {
        let err = StreamError::new(7, io::Error::other("boom"));
        assert_eq!(err.to_string(), "byte stream failed after 7 bytes: boom");
        assert_eq!(err.position(), 7);
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_into_io_error() {
        let err = StreamError::new(0, io::Error::from(io::ErrorKind::UnexpectedEof));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
