// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.


use core::attribute::{new_term_attributes, TermAttributesRef};
use core::search::{EmptyPostingIterator, PostingIterator, PostingIteratorFlags};
use core::util::BitsRef;

use error::ErrorKind::{IllegalArgument, UnsupportedOperation};
use error::Result;

use std::cmp::Ordering;

/// Encapsulates all required internal state to position the associated
/// `TermIterator` without re-seeking
pub trait TermState: Send + Sync + Clone {}

/// for `TermIterator`s that aren't support `TermState`.
impl TermState for () {}

/// An ordinal based `TermState`
#[derive(Clone, Debug, PartialEq)]
pub struct OrdTermState {
    /// Term ordinal, i.e. its position in the full list of sorted terms
    pub ord: i64,
}

impl OrdTermState {
    pub fn ord(&self) -> i64 {
        self.ord
    }
}

impl TermState for OrdTermState {}

/// Total order over the terms of a dictionary.
pub type TermComparator = fn(&[u8], &[u8]) -> Ordering;

/// Unsigned byte order. For UTF-8 encoded terms this is the same as
/// comparing the unicode code points.
pub fn utf8_sorted_as_unicode(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Access to the terms in a specific field.
pub trait Terms {
    type Iterator: TermIterator;
    /// Returns an iterator that will step through all terms.
    fn iterator(&self) -> Result<Self::Iterator>;

    /// Returns the number of terms for this field, or -1 if this
    /// measure isn't stored by the codec.
    fn size(&self) -> Result<i64>;

    /// Returns the sum of `TermIterator::total_term_freq` for all terms
    /// in this field, or -1 if this measure isn't stored by the codec.
    fn sum_total_term_freq(&self) -> Result<i64>;

    /// Returns the sum of `TermIterator::doc_freq` for all terms in this
    /// field, or -1 if this measure isn't stored by the codec.
    fn sum_doc_freq(&self) -> Result<i64>;

    /// Returns the number of documents that have at least one
    /// term for this field, or -1 if this measure isn't stored by the codec.
    fn doc_count(&self) -> Result<i32>;

    fn has_freqs(&self) -> Result<bool>;

    fn has_offsets(&self) -> Result<bool>;

    fn has_positions(&self) -> Result<bool>;

    fn has_payloads(&self) -> Result<bool>;

    /// Returns the smallest term (in lexicographic order) in the field,
    /// or None when there are no terms.
    fn min(&self) -> Result<Option<Vec<u8>>> {
        self.iterator()?.next()
    }
}

/// Represents returned result from `TermIterator::seek_ceil`.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SeekStatus {
    /// The term was not found, and the end of iteration was hit.
    End,
    /// The precise term was found.
    Found,
    /// A different term was found after the requested term
    NotFound,
}

/// Ordered, seekable cursor over the terms of one field.
///
/// Terms are visited in the order defined by `comparator()`. A fresh
/// iterator is unpositioned: call `next()` or one of the seek methods
/// before reading the current term.
pub trait TermIterator {
    type Postings: PostingIterator;
    type TermState: TermState;

    /// Increments the iteration to the next term and returns it, or
    /// `None` if the end of the iterator is reached. After this method
    /// returns `None`, do not call it again: the results are undefined.
    fn next(&mut self) -> Result<Option<Vec<u8>>>;

    /// Attempts to seek to the exact term, returning
    /// true if the term is found.  If this returns false, the
    /// iterator is unpositioned.
    fn seek_exact(&mut self, text: &[u8]) -> Result<bool> {
        Ok(match self.seek_ceil(text)? {
            SeekStatus::Found => true,
            _ => false,
        })
    }

    /// Seeks to the specified term, if it exists, or to the
    /// next (ceiling) term. The target term may be before or after
    /// the current term. If this returns `SeekStatus::End`, the
    /// iterator is unpositioned.
    fn seek_ceil(&mut self, text: &[u8]) -> Result<SeekStatus>;

    /// Seeks to the specified term by ordinal (position) as
    /// previously returned by `ord()`. The target ord
    /// may be before or after the current ord, and must be
    /// within bounds.
    fn seek_exact_ord(&mut self, ord: i64) -> Result<()>;

    /// Expert: seeks to `text` using a `TermState` previously obtained
    /// from `term_state()` for that term.
    fn seek_exact_state(&mut self, text: &[u8], _state: &Self::TermState) -> Result<()> {
        if self.seek_exact(text)? {
            Ok(())
        } else {
            bail!(IllegalArgument(format!("Term {:?} does not exist", text)))
        }
    }

    /// Returns current term. Do not call this when the iterator
    /// is unpositioned.
    fn term(&self) -> Result<&[u8]>;

    /// Returns ordinal position for current term. This is an
    /// optional method (the codec may return `UnsupportedOperation`).
    fn ord(&self) -> Result<i64>;

    /// Returns the number of documents containing the current term.
    fn doc_freq(&mut self) -> Result<i32>;

    /// Returns the total number of occurrences of this term
    /// across all documents (the sum of the freq() for each
    /// doc that has this term).  This will be -1 if the
    /// codec doesn't support this measure.
    fn total_term_freq(&mut self) -> Result<i64>;

    fn comparator(&self) -> TermComparator {
        utf8_sorted_as_unicode
    }

    /// Returns the attributes shared between this iterator and its consumers.
    fn attributes(&self) -> TermAttributesRef;

    /// Get `PostingIterator` for the current term with frequencies.
    ///
    /// *NOTE*: the returned iterator may return deleted documents, so
    /// deleted documents have to be checked on top of it.
    fn postings(&mut self) -> Result<Self::Postings> {
        self.postings_with_flags(PostingIteratorFlags::FREQS)
    }

    fn postings_with_flags(&mut self, flags: u16) -> Result<Self::Postings> {
        self.postings_with_live_docs(None, None, flags)
    }

    /// Get `PostingIterator` for the current term, skipping documents not
    /// set in `live_docs`.
    ///
    /// `reuse` is a postings iterator previously returned by this
    /// iterator; implementations may refill and return it instead of
    /// allocating a new one.
    fn postings_with_live_docs(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Self::Postings>;

    /// Like `postings_with_live_docs`, but positions are always requested.
    /// Returns None if the field was indexed without positions.
    fn positions(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Option<Self::Postings>> {
        let postings =
            self.postings_with_live_docs(live_docs, reuse, flags | PostingIteratorFlags::POSITIONS)?;
        Ok(Some(postings))
    }

    /// Expert: Returns the iterator's internal state to position it
    /// without re-seeking the term dictionary.
    fn term_state(&mut self) -> Result<Self::TermState> {
        bail!(UnsupportedOperation(
            "TermIterator::term_state unsupported".into()
        ))
    }

    // whether this Iterator is EmptyIterator
    fn is_empty(&self) -> bool {
        false
    }
}

/// A `TermIterator` over a borrowed iterator.
///
/// Lets a wrapping iterator (e.g. a `FilteredTermIterator`) drive a term
/// dictionary cursor owned by the caller for the duration of one scan.
pub struct TermIteratorRef<'a, T: TermIterator + 'a> {
    inner: &'a mut T,
}

impl<'a, T: TermIterator + 'a> TermIteratorRef<'a, T> {
    pub fn new(inner: &'a mut T) -> Self {
        TermIteratorRef { inner }
    }
}

impl<'a, T: TermIterator + 'a> TermIterator for TermIteratorRef<'a, T> {
    type Postings = T::Postings;
    type TermState = T::TermState;

    fn next(&mut self) -> Result<Option<Vec<u8>>> {
        self.inner.next()
    }

    fn seek_exact(&mut self, text: &[u8]) -> Result<bool> {
        self.inner.seek_exact(text)
    }

    fn seek_ceil(&mut self, text: &[u8]) -> Result<SeekStatus> {
        self.inner.seek_ceil(text)
    }

    fn seek_exact_ord(&mut self, ord: i64) -> Result<()> {
        self.inner.seek_exact_ord(ord)
    }

    fn seek_exact_state(&mut self, text: &[u8], state: &Self::TermState) -> Result<()> {
        self.inner.seek_exact_state(text, state)
    }

    fn term(&self) -> Result<&[u8]> {
        self.inner.term()
    }

    fn ord(&self) -> Result<i64> {
        self.inner.ord()
    }

    fn doc_freq(&mut self) -> Result<i32> {
        self.inner.doc_freq()
    }

    fn total_term_freq(&mut self) -> Result<i64> {
        self.inner.total_term_freq()
    }

    fn comparator(&self) -> TermComparator {
        self.inner.comparator()
    }

    fn attributes(&self) -> TermAttributesRef {
        self.inner.attributes()
    }

    fn postings_with_live_docs(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Self::Postings> {
        self.inner.postings_with_live_docs(live_docs, reuse, flags)
    }

    fn positions(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Option<Self::Postings>> {
        self.inner.positions(live_docs, reuse, flags)
    }

    fn term_state(&mut self) -> Result<Self::TermState> {
        self.inner.term_state()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

const EMPTY_BYTES: [u8; 0] = [];

/// The term dictionary of a field without terms.
pub struct EmptyTermIterator {
    attributes: TermAttributesRef,
}

impl Default for EmptyTermIterator {
    fn default() -> Self {
        EmptyTermIterator {
            attributes: new_term_attributes(),
        }
    }
}

impl TermIterator for EmptyTermIterator {
    type Postings = EmptyPostingIterator;
    type TermState = ();
    fn next(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn seek_ceil(&mut self, _text: &[u8]) -> Result<SeekStatus> {
        Ok(SeekStatus::End)
    }

    fn seek_exact_ord(&mut self, ord: i64) -> Result<()> {
        bail!(IllegalArgument(format!(
            "ord {} out of bounds for an empty term iterator",
            ord
        )))
    }

    fn term(&self) -> Result<&[u8]> {
        Ok(&EMPTY_BYTES)
    }

    fn ord(&self) -> Result<i64> {
        Ok(-1)
    }

    fn doc_freq(&mut self) -> Result<i32> {
        Ok(-1)
    }

    fn total_term_freq(&mut self) -> Result<i64> {
        Ok(-1)
    }

    fn attributes(&self) -> TermAttributesRef {
        self.attributes.clone()
    }

    fn postings_with_live_docs(
        &mut self,
        _live_docs: Option<BitsRef>,
        _reuse: Option<Self::Postings>,
        _flags: u16,
    ) -> Result<Self::Postings> {
        Ok(EmptyPostingIterator::default())
    }

    fn positions(
        &mut self,
        _live_docs: Option<BitsRef>,
        _reuse: Option<Self::Postings>,
        _flags: u16,
    ) -> Result<Option<Self::Postings>> {
        Ok(None)
    }

    fn is_empty(&self) -> bool {
        true
    }
}
