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

//! # Cursor Categories
//!
//! Zero-sized tags naming the traversal strength a cursor declares. Every
//! cursor carries its tag as `WeakInputCursor::Category`, which lets
//! algorithms pick a strategy per category at compile time by implementing
//! a strategy trait for the tags (see the partition algorithm).
//!
//! Tags are ordered by `RANK`:
//! `SinglePass < Forward < Bidirectional < RandomAccess < Contiguous`.

/// A traversal-strength tag.
///
/// # Examples
///
/// ```rust
/// # use strider_core::cursor::category::{Category, Forward, RandomAccess};
/// assert_eq!(Forward::NAME, "Forward");
/// assert!(RandomAccess::RANK > Forward::RANK);
/// ```
pub trait Category: Copy + Default + std::fmt::Debug + 'static {
    /// Human-readable name of the tag.
    const NAME: &'static str;
    /// Position of the tag in the traversal hierarchy.
    const RANK: u8;
    /// This tag, weakened to `RandomAccess` if it is stronger.
    ///
    /// Adaptors that produce values instead of referencing stored elements
    /// declare this: they keep every traversal capability of their base but
    /// cannot be contiguous.
    type UpToRandomAccess: Category;
}

/// Move-only, single pass: each element can be read at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SinglePass;

/// Multi-pass, forward only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Multi-pass, forward and backward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time jumps and distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

/// Random access over elements that are adjacent in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

macro_rules! impl_category {
    ($t:ident, $rank:expr, $capped:ident) => {
        impl Category for $t {
            const NAME: &'static str = stringify!($t);
            const RANK: u8 = $rank;
            type UpToRandomAccess = $capped;
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self as Category>::NAME)
            }
        }
    };
}

impl_category!(SinglePass, 0, SinglePass);
impl_category!(Forward, 1, Forward);
impl_category!(Bidirectional, 2, Bidirectional);
impl_category!(RandomAccess, 3, RandomAccess);
impl_category!(Contiguous, 4, RandomAccess);

/// Returns `true` if the category `C` is at least as strong as `D`.
#[inline(always)]
pub const fn at_least<C: Category, D: Category>() -> bool {
    C::RANK >= D::RANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_strictly_increasing() {
        let ranks = [
            SinglePass::RANK,
            Forward::RANK,
            Bidirectional::RANK,
            RandomAccess::RANK,
            Contiguous::RANK,
        ];
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_at_least() {
        assert!(at_least::<Contiguous, RandomAccess>());
        assert!(at_least::<Forward, Forward>());
        assert!(!at_least::<SinglePass, Forward>());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(format!("{}", Bidirectional), "Bidirectional");
        assert_eq!(format!("{}", SinglePass), "SinglePass");
    }

    fn capped_name<C: Category>() -> &'static str {
        <C::UpToRandomAccess as Category>::NAME
    }

    #[test]
    fn test_up_to_random_access_caps_contiguous_only() {
        assert_eq!(capped_name::<Contiguous>(), "RandomAccess");
        assert_eq!(capped_name::<RandomAccess>(), "RandomAccess");
        assert_eq!(capped_name::<Bidirectional>(), "Bidirectional");
        assert_eq!(capped_name::<Forward>(), "Forward");
        assert_eq!(capped_name::<SinglePass>(), "SinglePass");
    }
}
