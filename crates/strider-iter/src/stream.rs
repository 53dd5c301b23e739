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

//! # Byte Stream Cursor
//!
//! A single-pass input cursor over the bytes of a `BufRead` source. The
//! cursor holds the byte it designates (peeked with `fill_buf`, consumed on
//! `step`), and the [`EndOfStream`] sentinel reports the end once no byte is
//! available.
//!
//! ## Errors
//!
//! Interrupted reads are retried. Any other I/O error ends the sequence and
//! is stored in the cursor; retrieve it with
//! [`ByteStreamCursor::take_error`] or [`ByteStreamCursor::finish`].
//! Algorithms take cursors by value, so pass [`ByteStreamCursor::by_ref`]
//! to keep the cursor (and its error) after the call.
//!
//! ```rust
//! # use strider_core::iter::walk;
//! # use strider_iter::stream::{ByteStreamCursor, EndOfStream};
//! let mut cursor = ByteStreamCursor::new(&b"strider"[..]);
//! let vowels = walk(cursor.by_ref(), EndOfStream)
//!     .filter(|b| b"aeiou".contains(b))
//!     .count();
//! assert_eq!(vowels, 2);
//! assert!(cursor.finish().is_ok());
//! ```

use crate::error::StreamError;
use std::io::{self, BufRead};
use strider_core::cursor::{InputCursor, Readable, Sentinel, SinglePass, WeakInputCursor};

/// A single-pass cursor over the bytes of a buffered reader.
pub struct ByteStreamCursor<R> {
    reader: R,
    current: Option<u8>,
    position: u64,
    error: Option<StreamError>,
}

impl<R: BufRead> ByteStreamCursor<R> {
    /// Creates a cursor designating the first byte of `reader`.
    pub fn new(reader: R) -> Self {
        let mut cursor = Self {
            reader,
            current: None,
            position: 0,
            error: None,
        };
        cursor.fetch();
        cursor
    }

    fn fetch(&mut self) {
        self.current = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(StreamError::new(self.position, e));
                    break None;
                }
            }
        };
    }

    fn bump(&mut self) {
        debug_assert!(self.current.is_some(), "stepped past the end of a byte stream");
        if self.current.take().is_some() {
            self.reader.consume(1);
            self.position += 1;
            self.fetch();
        }
    }

    /// The designated byte, or `None` at the end.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.current
    }

    /// Number of bytes stepped over so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns `true` if no byte is available.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Borrows the cursor so an algorithm can consume it without taking
    /// ownership.
    #[inline]
    pub fn by_ref(&mut self) -> &mut Self {
        self
    }

    /// Removes and returns the stored I/O error, if any.
    #[inline]
    pub fn take_error(&mut self) -> Option<StreamError> {
        self.error.take()
    }

    /// Releases the reader, or the I/O error that ended the stream.
    pub fn finish(self) -> Result<R, StreamError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.reader),
        }
    }
}

impl<R> std::fmt::Debug for ByteStreamCursor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStreamCursor")
            .field("current", &self.current)
            .field("position", &self.position)
            .field("failed", &self.error.is_some())
            .finish()
    }
}

impl<R: BufRead> Readable for ByteStreamCursor<R> {
    type Value = u8;
    type Item = u8;

    #[inline]
    fn read(&self) -> u8 {
        match self.current {
            Some(byte) => byte,
            None => panic!("read past the end of a byte stream at position {}", self.position),
        }
    }
}

impl<R: BufRead> WeakInputCursor for ByteStreamCursor<R> {
    type Distance = i64;
    type Category = SinglePass;

    #[inline]
    fn step(&mut self) {
        self.bump();
    }
}

impl<R: BufRead> InputCursor for ByteStreamCursor<R> {}

impl<R: BufRead> Readable for &mut ByteStreamCursor<R> {
    type Value = u8;
    type Item = u8;

    #[inline]
    fn read(&self) -> u8 {
        (**self).read()
    }
}

impl<R: BufRead> WeakInputCursor for &mut ByteStreamCursor<R> {
    type Distance = i64;
    type Category = SinglePass;

    #[inline]
    fn step(&mut self) {
        (**self).bump();
    }
}

impl<R: BufRead> InputCursor for &mut ByteStreamCursor<R> {}

/// The sentinel ending a [`ByteStreamCursor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EndOfStream;

impl<R: BufRead> Sentinel<ByteStreamCursor<R>> for EndOfStream {
    #[inline]
    fn is_end(&self, cursor: &ByteStreamCursor<R>) -> bool {
        cursor.is_exhausted()
    }

    #[inline]
    fn measure(&self, _first: &ByteStreamCursor<R>) -> Option<i64> {
        None
    }
}

impl<R: BufRead> Sentinel<&mut ByteStreamCursor<R>> for EndOfStream {
    #[inline]
    fn is_end(&self, cursor: &&mut ByteStreamCursor<R>) -> bool {
        cursor.is_exhausted()
    }

    #[inline]
    fn measure(&self, _first: &&mut ByteStreamCursor<R>) -> Option<i64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use strider_core::iter::walk;

    /// Serves `data` up to `fail_at`, then fails; the very first call is
    /// interrupted.
    struct Flaky {
        data: Vec<u8>,
        pos: usize,
        fail_at: usize,
        interrupted: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = {
                let available = self.fill_buf()?;
                let n = available.len().min(buf.len());
                buf[..n].copy_from_slice(&available[..n]);
                n
            };
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Flaky {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            if self.pos >= self.fail_at {
                return Err(io::Error::other("device unplugged"));
            }
            Ok(&self.data[self.pos..self.fail_at])
        }

        fn consume(&mut self, amt: usize) {
            self.pos += amt;
        }
    }

    #[test]
    fn test_reads_all_bytes() {
        let cursor = ByteStreamCursor::new(Cursor::new(b"abc".to_vec()));
        let bytes: Vec<u8> = walk(cursor, EndOfStream).collect();
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn test_empty_stream_is_exhausted() {
        let cursor = ByteStreamCursor::new(io::empty());
        assert!(cursor.is_exhausted());
        assert!(EndOfStream.is_end(&cursor));
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn test_by_ref_keeps_position() {
        let mut cursor = ByteStreamCursor::new(&b"hello world"[..]);
        let first_word: Vec<u8> = walk(cursor.by_ref(), EndOfStream)
            .take_while(|b| *b != b' ')
            .collect();
        assert_eq!(first_word, b"hello");
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.peek(), Some(b'w'));
    }

    #[test]
    fn test_error_ends_stream_and_is_reported() {
        let reader = Flaky {
            data: b"hello".to_vec(),
            pos: 0,
            fail_at: 3,
            interrupted: false,
        };
        let mut cursor = ByteStreamCursor::new(reader);
        let bytes: Vec<u8> = walk(cursor.by_ref(), EndOfStream).collect();
        assert_eq!(bytes, b"hel");

        let err = cursor.take_error().expect("the stream failed");
        assert_eq!(err.position(), 3);
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn test_finish_reports_error() {
        let reader = Flaky {
            data: Vec::new(),
            pos: 0,
            fail_at: 0,
            interrupted: true,
        };
        let cursor = ByteStreamCursor::new(reader);
        assert!(cursor.is_exhausted());
        match cursor.finish() {
            Err(err) => assert_eq!(err.position(), 0),
            Ok(_) => panic!("the stream failed immediately"),
        }
    }

    #[test]
    #[should_panic(expected = "read past the end of a byte stream")]
    fn test_read_at_end_panics() {
        let cursor = ByteStreamCursor::new(io::empty());
        let _ = cursor.read();
    }
}
