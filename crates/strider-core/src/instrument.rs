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

//! # Instrumentation
//!
//! Callable adapters that observe how often, and with which outcome, an
//! algorithm invokes user callables. They wrap any projection, predicate or
//! relation and forward to it unchanged.
//!
//! - [`Counted`] counts invocations. Combined with `by_ref` it verifies that
//!   an algorithm performs exactly the comparisons its strategy prescribes.
//! - [`Logged`] writes a fixed-width table with one line per invocation to
//!   any `io::Write` sink (stderr by default).
//!
//! Compiled with the `instrument` feature (enabled by default).
//!
//! ```rust
//! # use strider_core::{callable::{Less, Relation}, instrument::Counted};
//! let mut less = Counted::new(Less);
//! assert!(less.relate(&1, &2));
//! assert!(!less.relate(&2, &1));
//! assert_eq!(less.calls(), 2);
//! ```

use crate::callable::{Predicate, Projection, Relation};
use std::{
    io::{self, Write},
    time::Instant,
};

/// Counts invocations of the wrapped callable.
#[derive(Debug, Clone, Default)]
pub struct Counted<F> {
    inner: F,
    calls: u64,
}

impl<F> Counted<F> {
    /// Wraps `inner` with a zero count.
    #[inline]
    pub const fn new(inner: F) -> Self {
        Self { inner, calls: 0 }
    }

    /// Number of invocations so far.
    #[inline]
    pub const fn calls(&self) -> u64 {
        self.calls
    }

    /// Resets the count to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.calls = 0;
    }

    /// Releases the wrapped callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F, V> Projection<V> for Counted<F>
where
    F: Projection<V>,
    V: ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R {
        self.calls += 1;
        self.inner.project(value, k)
    }
}

impl<F, A> Predicate<A> for Counted<F>
where
    F: Predicate<A>,
    A: ?Sized,
{
    #[inline]
    fn test(&mut self, value: &A) -> bool {
        self.calls += 1;
        self.inner.test(value)
    }
}

impl<F, A, B> Relation<A, B> for Counted<F>
where
    F: Relation<A, B>,
    A: ?Sized,
    B: ?Sized,
{
    #[inline]
    fn relate(&mut self, a: &A, b: &B) -> bool {
        self.calls += 1;
        self.inner.relate(a, b)
    }
}

impl<F> std::fmt::Display for Counted<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counted(calls: {})", self.calls)
    }
}

const RULE_WIDTH: usize = 46;

/// Logs every invocation of the wrapped callable as one table line.
///
/// The header is written before the first line. Write failures of the sink
/// are ignored; logging never changes the outcome of the callable.
#[derive(Debug)]
pub struct Logged<F, W: Write = io::Stderr> {
    inner: F,
    label: &'static str,
    sink: W,
    start_time: Instant,
    calls: u64,
}

impl<F> Logged<F> {
    /// Logs to stderr under `label`.
    pub fn new(inner: F, label: &'static str) -> Self {
        Self::with_sink(inner, label, io::stderr())
    }
}

impl<F, W: Write> Logged<F, W> {
    /// Logs to `sink` under `label`.
    pub fn with_sink(inner: F, label: &'static str, sink: W) -> Self {
        Self {
            inner,
            label,
            sink,
            start_time: Instant::now(),
            calls: 0,
        }
    }

    /// Number of invocations so far.
    #[inline]
    pub const fn calls(&self) -> u64 {
        self.calls
    }

    /// Releases the wrapped callable and the sink.
    pub fn into_parts(self) -> (F, W) {
        (self.inner, self.sink)
    }

    #[inline(always)]
    fn print_header(&mut self) {
        let _ = writeln!(
            self.sink,
            "{:<9} | {:<12} | {:<8} | {:<8}",
            "Elapsed", "Callable", "Call", "Result"
        );
        let _ = writeln!(self.sink, "{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self, result: &dyn std::fmt::Display) {
        if self.calls == 0 {
            self.start_time = Instant::now();
            self.print_header();
        }
        self.calls += 1;

        let elapsed = self.start_time.elapsed().as_secs_f32();
        let elapsed_field = format!("{:.3}s", elapsed);
        let _ = writeln!(
            self.sink,
            "{:<9} | {:<12} | {:<8} | {:<8}",
            elapsed_field, self.label, self.calls, result
        );
    }
}

impl<F, V, W> Projection<V> for Logged<F, W>
where
    F: Projection<V>,
    V: ?Sized,
    W: Write,
{
    type Output = F::Output;

    fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R {
        self.log_line(&"-");
        self.inner.project(value, k)
    }
}

impl<F, A, W> Predicate<A> for Logged<F, W>
where
    F: Predicate<A>,
    A: ?Sized,
    W: Write,
{
    fn test(&mut self, value: &A) -> bool {
        let result = self.inner.test(value);
        self.log_line(&result);
        result
    }
}

impl<F, A, B, W> Relation<A, B> for Logged<F, W>
where
    F: Relation<A, B>,
    A: ?Sized,
    B: ?Sized,
    W: Write,
{
    fn relate(&mut self, a: &A, b: &B) -> bool {
        let result = self.inner.relate(a, b);
        self.log_line(&result);
        result
    }
}

impl<F, W: Write> std::fmt::Display for Logged<F, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Logged(label: {}, calls: {})", self.label, self.calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{Identity, Less, by_ref, relate};

    #[test]
    fn test_counted_counts_through_ref_wrapper() {
        let mut less = Counted::new(Less);
        {
            let mut shared = by_ref(&mut less);
            assert!(relate(&mut shared, &1, &2));
            assert!(relate(&mut shared.by_ref(), &1, &2));
        }
        assert_eq!(less.calls(), 2);
        less.reset();
        assert_eq!(less.calls(), 0);
        assert_eq!(format!("{}", less), "Counted(calls: 0)");
    }

    #[test]
    fn test_counted_projection() {
        let mut proj = Counted::new(Identity);
        let doubled = proj.project(&21, |x: &i32| x * 2);
        assert_eq!(doubled, 42);
        assert_eq!(proj.calls(), 1);
    }

    #[test]
    fn test_logged_writes_header_then_lines() {
        let mut logged = Logged::with_sink(Less, "less", Vec::new());
        assert!(logged.relate(&1, &2));
        assert!(!logged.relate(&3, &2));
        assert_eq!(logged.calls(), 2);

        let (_, sink) = logged.into_parts();
        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Elapsed"));
        assert_eq!(lines[1], "-".repeat(RULE_WIDTH));
        assert!(lines[2].contains("less") && lines[2].ends_with("true    "));
        assert!(lines[3].contains("| 2 ") && lines[3].contains("false"));
    }

    #[test]
    fn test_logged_predicate() {
        let mut logged = Logged::with_sink(|x: &i32| *x > 0, "positive", Vec::new());
        assert!(logged.test(&1));
        assert_eq!(format!("{}", logged), "Logged(label: positive, calls: 1)");
    }
}
