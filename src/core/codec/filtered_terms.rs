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


use core::attribute::TermAttributesRef;
use core::codec::{SeekStatus, TermComparator, TermIterator};
use core::util::BitsRef;

use error::ErrorKind::{IllegalState, UnsupportedOperation};
use error::Result;

use std::cmp::Ordering;

/// Cursor state shared by every `FilteredTermIterator`.
pub struct FilteredTermIterBase<T: TermIterator> {
    initial_seek_term: Option<Vec<u8>>,
    do_seek: bool,
    actual_term: Option<Vec<u8>>,
    exhausted: bool,
    terms: T,
}

impl<T: TermIterator> FilteredTermIterBase<T> {
    /// `start_with_seek` selects whether the first `next()` consults
    /// `FilteredTermIterator::next_seek_term` or steps from the first term
    /// of the dictionary.
    pub fn new(terms: T, start_with_seek: bool) -> Self {
        FilteredTermIterBase {
            initial_seek_term: None,
            do_seek: start_with_seek,
            actual_term: None,
            exhausted: false,
            terms,
        }
    }

    pub fn with_seek(terms: T) -> Self {
        Self::new(terms, true)
    }

    pub fn terms(&self) -> &T {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut T {
        &mut self.terms
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn started(&self) -> bool {
        self.actual_term.is_some() || self.exhausted
    }

    fn exhaust(&mut self) -> Option<Vec<u8>> {
        self.exhausted = true;
        self.do_seek = false;
        None
    }

    /// Seek targets must be strictly after the term last positioned at.
    fn check_seek_forward(&self, target: &[u8]) -> Result<()> {
        let forward = match self.actual_term {
            Some(ref current) => (self.terms.comparator())(target, current) == Ordering::Greater,
            None => true,
        };
        debug_assert!(
            forward,
            "seek target {:?} is not after current term {:?}",
            target, self.actual_term
        );
        if !forward {
            bail!(IllegalState(format!(
                "seek target {:?} is not after current term {:?}",
                target, self.actual_term
            )));
        }
        Ok(())
    }
}

/// Return value of `FilteredTermIterator::accept`: whether the term should
/// be accepted, and whether the iterator should step or seek to reach the
/// next candidate. The `*AndSeek` values make the next `next()` call ask
/// `FilteredTermIterator::next_seek_term` for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptStatus {
    /// Accept the term and position the iterator at the next term.
    Yes,
    /// Accept the term and seek to `next_seek_term` for the next one.
    YesAndSeek,
    /// Reject the term and position the iterator at the next term.
    No,
    /// Reject the term and seek to `next_seek_term` for the next one.
    NoAndSeek,
    /// Reject the term and stop enumerating.
    End,
}

impl AcceptStatus {
    pub fn is_accepted(self) -> bool {
        match self {
            AcceptStatus::Yes | AcceptStatus::YesAndSeek => true,
            AcceptStatus::No | AcceptStatus::NoAndSeek | AcceptStatus::End => false,
        }
    }

    pub fn seeks(self) -> bool {
        match self {
            AcceptStatus::YesAndSeek | AcceptStatus::NoAndSeek => true,
            AcceptStatus::Yes | AcceptStatus::No | AcceptStatus::End => false,
        }
    }
}

/// Enumerates a subset of all terms.
///
/// Term enumerations are always ordered by the underlying iterator's
/// comparator. Each term in the enumeration is greater than all that
/// precede it.
///
/// Implementors supply `accept` and optionally override `next_seek_term`;
/// every `FilteredTermIterator` is a `TermIterator` whose `next()` runs
/// the accept/seek loop.
/// An error from `accept`, `next_seek_term` or the underlying iterator ends
/// the enumeration: the failing `next()` returns it and later calls return
/// None.
/// *Please Note*: Consumers of this iterator cannot seek, it is forward only.
pub trait FilteredTermIterator {
    type Iter: TermIterator;

    fn base(&self) -> &FilteredTermIterBase<Self::Iter>;

    fn base_mut(&mut self) -> &mut FilteredTermIterBase<Self::Iter>;

    /// Decides whether `term` is part of the enumeration.
    fn accept(&mut self, term: &[u8]) -> Result<AcceptStatus>;

    /// Sets the target of the first seek done by the default
    /// `next_seek_term`. May be called once, before the first `next()`.
    fn set_initial_seek_term(&mut self, term: Vec<u8>) -> Result<()> {
        if self.base().started() {
            bail!(IllegalState(
                "initial seek term must be set before the first next()".into()
            ));
        }
        if self.base().initial_seek_term.is_some() {
            bail!(IllegalState("initial seek term is already set".into()));
        }
        self.base_mut().initial_seek_term = Some(term);
        Ok(())
    }

    /// Returns the term to seek the underlying iterator to, or None to end
    /// the enumeration. `current` is the term last positioned at, None
    /// before the first positioning. A returned term must be greater than
    /// `current`.
    ///
    /// The default returns the initial seek term once and None afterwards.
    fn next_seek_term(&mut self, _current: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
        Ok(self.base_mut().initial_seek_term.take())
    }
}

/// Runs the accept/seek loop until a term is accepted or the enumeration
/// ends.
fn next_filtered<T: FilteredTermIterator>(iter: &mut T) -> Result<Option<Vec<u8>>> {
    loop {
        let term = if iter.base().do_seek {
            iter.base_mut().do_seek = false;
            let current = iter.base_mut().actual_term.take();
            let target = iter.next_seek_term(current.as_ref().map(Vec::as_slice));
            iter.base_mut().actual_term = current;
            let target = match target? {
                Some(target) => target,
                None => return Ok(iter.base_mut().exhaust()),
            };
            iter.base().check_seek_forward(&target)?;
            if iter.base_mut().terms.seek_ceil(&target)? == SeekStatus::End {
                debug!(
                    "seek to {:?} passed the last term, filtered iteration ends",
                    target
                );
                return Ok(iter.base_mut().exhaust());
            }
            iter.base().terms.term()?.to_vec()
        } else {
            match iter.base_mut().terms.next()? {
                Some(term) => term,
                None => return Ok(iter.base_mut().exhaust()),
            }
        };

        let status = iter.accept(&term);
        iter.base_mut().actual_term = Some(term);
        let status = status?;
        iter.base_mut().do_seek = status.seeks();
        match status {
            AcceptStatus::Yes | AcceptStatus::YesAndSeek => {
                return Ok(iter.base().actual_term.clone());
            }
            AcceptStatus::No | AcceptStatus::NoAndSeek => {}
            AcceptStatus::End => return Ok(iter.base_mut().exhaust()),
        }
    }
}

impl<T> TermIterator for T
where
    T: FilteredTermIterator,
{
    type Postings = <T::Iter as TermIterator>::Postings;
    type TermState = <T::Iter as TermIterator>::TermState;

    fn next(&mut self) -> Result<Option<Vec<u8>>> {
        if self.base().exhausted {
            return Ok(None);
        }
        let res = next_filtered(self);
        if res.is_err() {
            self.base_mut().exhaust();
        }
        res
    }

    fn seek_exact(&mut self, _text: &[u8]) -> Result<bool> {
        bail!(UnsupportedOperation(
            "FilteredTermIterator is forward only, seek_exact is not allowed".into()
        ))
    }

    fn seek_ceil(&mut self, _text: &[u8]) -> Result<SeekStatus> {
        bail!(UnsupportedOperation(
            "FilteredTermIterator is forward only, seek_ceil is not allowed".into()
        ))
    }

    fn seek_exact_ord(&mut self, _ord: i64) -> Result<()> {
        bail!(UnsupportedOperation(
            "FilteredTermIterator is forward only, seek_exact_ord is not allowed".into()
        ))
    }

    fn seek_exact_state(&mut self, _text: &[u8], _state: &Self::TermState) -> Result<()> {
        bail!(UnsupportedOperation(
            "FilteredTermIterator is forward only, seek_exact_state is not allowed".into()
        ))
    }

    fn term(&self) -> Result<&[u8]> {
        self.base().terms.term()
    }

    fn ord(&self) -> Result<i64> {
        self.base().terms.ord()
    }

    fn doc_freq(&mut self) -> Result<i32> {
        self.base_mut().terms.doc_freq()
    }

    fn total_term_freq(&mut self) -> Result<i64> {
        self.base_mut().terms.total_term_freq()
    }

    fn comparator(&self) -> TermComparator {
        self.base().terms.comparator()
    }

    fn attributes(&self) -> TermAttributesRef {
        self.base().terms.attributes()
    }

    fn postings_with_live_docs(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Self::Postings> {
        self.base_mut()
            .terms
            .postings_with_live_docs(live_docs, reuse, flags)
    }

    fn positions(
        &mut self,
        live_docs: Option<BitsRef>,
        reuse: Option<Self::Postings>,
        flags: u16,
    ) -> Result<Option<Self::Postings>> {
        self.base_mut().terms.positions(live_docs, reuse, flags)
    }

    fn term_state(&mut self) -> Result<Self::TermState> {
        self.base_mut().terms.term_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::codec::tests::{MockTermIterator, MOCK_FREQ};
    use core::codec::{OrdTermState, TermIteratorRef};
    use core::search::{DocIterator, PostingIterator, PostingIteratorFlags};
    use core::util::FixedBits;
    use error::ErrorKind;

    use std::collections::VecDeque;
    use std::fmt;
    use std::sync::Arc;

    const DICT: [&str; 5] = ["aa", "bb", "cc", "dd", "ee"];

    fn status_of(
        decisions: &[(&'static str, AcceptStatus)],
        otherwise: AcceptStatus,
        term: &[u8],
    ) -> AcceptStatus {
        decisions
            .iter()
            .find(|(t, _)| t.as_bytes() == term)
            .map_or(otherwise, |(_, status)| *status)
    }

    fn collect<I: TermIterator>(iter: &mut I) -> Result<Vec<String>> {
        let mut terms = vec![];
        while let Some(term) = iter.next()? {
            terms.push(String::from_utf8_lossy(&term).into_owned());
        }
        Ok(terms)
    }

    fn assert_unsupported<R>(res: Result<R>) {
        match res {
            Err(e) => match *e.kind() {
                ErrorKind::UnsupportedOperation(_) => {}
                ref kind => panic!("expected UnsupportedOperation, got {:?}", kind),
            },
            Ok(_) => panic!("expected UnsupportedOperation, got Ok"),
        }
    }

    fn assert_runtime_error<R: fmt::Debug>(res: Result<R>, expected: &str) {
        match res {
            Err(e) => match *e.kind() {
                ErrorKind::RuntimeError(ref msg) => assert_eq!(msg, expected),
                ref kind => panic!("expected RuntimeError, got {:?}", kind),
            },
            Ok(r) => panic!("expected RuntimeError, got {:?}", r),
        }
    }

    /// Fixed decisions per term, default seek hook.
    struct StatusFilter<T: TermIterator> {
        base: FilteredTermIterBase<T>,
        decisions: Vec<(&'static str, AcceptStatus)>,
        otherwise: AcceptStatus,
        judged: Vec<String>,
    }

    impl<T: TermIterator> StatusFilter<T> {
        fn new(terms: T, start_with_seek: bool, otherwise: AcceptStatus) -> Self {
            StatusFilter {
                base: FilteredTermIterBase::new(terms, start_with_seek),
                decisions: vec![],
                otherwise,
                judged: vec![],
            }
        }

        fn decide(mut self, term: &'static str, status: AcceptStatus) -> Self {
            self.decisions.push((term, status));
            self
        }
    }

    impl<T: TermIterator> FilteredTermIterator for StatusFilter<T> {
        type Iter = T;

        fn base(&self) -> &FilteredTermIterBase<T> {
            &self.base
        }

        fn base_mut(&mut self) -> &mut FilteredTermIterBase<T> {
            &mut self.base
        }

        fn accept(&mut self, term: &[u8]) -> Result<AcceptStatus> {
            self.judged.push(String::from_utf8_lossy(term).into_owned());
            Ok(status_of(&self.decisions, self.otherwise, term))
        }
    }

    /// Fixed decisions per term, seek targets replayed from a script.
    struct SeekingFilter<T: TermIterator> {
        base: FilteredTermIterBase<T>,
        decisions: Vec<(&'static str, AcceptStatus)>,
        otherwise: AcceptStatus,
        targets: VecDeque<&'static str>,
        seen_by_hook: Vec<Option<String>>,
    }

    impl<T: TermIterator> SeekingFilter<T> {
        fn new(terms: T, targets: &[&'static str], otherwise: AcceptStatus) -> Self {
            SeekingFilter {
                base: FilteredTermIterBase::with_seek(terms),
                decisions: vec![],
                otherwise,
                targets: targets.iter().cloned().collect(),
                seen_by_hook: vec![],
            }
        }

        fn decide(mut self, term: &'static str, status: AcceptStatus) -> Self {
            self.decisions.push((term, status));
            self
        }
    }

    impl<T: TermIterator> FilteredTermIterator for SeekingFilter<T> {
        type Iter = T;

        fn base(&self) -> &FilteredTermIterBase<T> {
            &self.base
        }

        fn base_mut(&mut self) -> &mut FilteredTermIterBase<T> {
            &mut self.base
        }

        fn accept(&mut self, term: &[u8]) -> Result<AcceptStatus> {
            Ok(status_of(&self.decisions, self.otherwise, term))
        }

        fn next_seek_term(&mut self, current: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
            self.seen_by_hook
                .push(current.map(|t| String::from_utf8_lossy(t).into_owned()));
            Ok(self.targets.pop_front().map(|t| t.as_bytes().to_vec()))
        }
    }

    /// Accepts terms whose first byte is even and jumps over every block
    /// of terms starting with an odd byte, computing the target from the
    /// current term like an automaton would.
    struct EvenLeadFilter<T: TermIterator> {
        base: FilteredTermIterBase<T>,
    }

    impl<T: TermIterator> FilteredTermIterator for EvenLeadFilter<T> {
        type Iter = T;

        fn base(&self) -> &FilteredTermIterBase<T> {
            &self.base
        }

        fn base_mut(&mut self) -> &mut FilteredTermIterBase<T> {
            &mut self.base
        }

        fn accept(&mut self, term: &[u8]) -> Result<AcceptStatus> {
            Ok(match term.first() {
                Some(b) if b % 2 == 0 => AcceptStatus::Yes,
                _ => AcceptStatus::NoAndSeek,
            })
        }

        fn next_seek_term(&mut self, current: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
            Ok(match current.and_then(|t| t.first()) {
                Some(&b) if b < 0xff => Some(vec![b + 1]),
                _ => None,
            })
        }
    }

    struct FailingFilter<T: TermIterator> {
        base: FilteredTermIterBase<T>,
    }

    impl<T: TermIterator> FilteredTermIterator for FailingFilter<T> {
        type Iter = T;

        fn base(&self) -> &FilteredTermIterBase<T> {
            &self.base
        }

        fn base_mut(&mut self) -> &mut FilteredTermIterBase<T> {
            &mut self.base
        }

        fn accept(&mut self, term: &[u8]) -> Result<AcceptStatus> {
            if term == b"cc" {
                bail!(ErrorKind::RuntimeError("predicate failed".into()));
            }
            Ok(AcceptStatus::Yes)
        }
    }

    #[test]
    fn accept_all_returns_whole_dictionary() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::Yes);
        assert_eq!(collect(&mut filter)?, DICT.to_vec());
        assert!(filter.base().is_exhausted());
        Ok(())
    }

    #[test]
    fn reject_all_scans_to_the_end() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::No);
        assert!(collect(&mut filter)?.is_empty());
        assert_eq!(filter.judged, DICT.to_vec());
        // five terms plus the call reporting the end
        assert_eq!(filter.base().terms().next_calls, 6);
        Ok(())
    }

    #[test]
    fn initial_seek_term_positions_first_candidate() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), true, AcceptStatus::No)
            .decide("cc", AcceptStatus::Yes);
        filter.set_initial_seek_term(b"cc".to_vec())?;
        assert_eq!(filter.next()?, Some(b"cc".to_vec()));
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.judged, vec!["cc", "dd", "ee"]);
        assert_eq!(filter.base().terms().seek_calls, 1);
        Ok(())
    }

    #[test]
    fn seek_without_initial_term_ends_immediately() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), true, AcceptStatus::Yes);
        assert_eq!(filter.next()?, None);
        assert!(filter.judged.is_empty());
        assert_eq!(filter.base().terms().seek_calls, 0);
        assert_eq!(filter.base().terms().next_calls, 0);
        Ok(())
    }

    #[test]
    fn initial_seek_term_between_terms_lands_on_ceiling() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), true, AcceptStatus::Yes);
        filter.set_initial_seek_term(b"bc".to_vec())?;
        assert_eq!(collect(&mut filter)?, vec!["cc", "dd", "ee"]);
        Ok(())
    }

    #[test]
    fn yes_and_seek_reseeks_from_accepted_term() -> Result<()> {
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["bb", "dd"], AcceptStatus::No)
                .decide("bb", AcceptStatus::YesAndSeek)
                .decide("dd", AcceptStatus::Yes);
        assert_eq!(collect(&mut filter)?, vec!["bb", "dd"]);
        assert_eq!(filter.seen_by_hook, vec![None, Some("bb".to_string())]);
        assert_eq!(filter.base().terms().seek_calls, 2);
        Ok(())
    }

    #[test]
    fn no_and_seek_skips_ahead() -> Result<()> {
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["aa", "ee"], AcceptStatus::Yes)
                .decide("aa", AcceptStatus::NoAndSeek);
        assert_eq!(collect(&mut filter)?, vec!["ee"]);
        assert_eq!(filter.seen_by_hook, vec![None, Some("aa".to_string())]);
        Ok(())
    }

    #[test]
    fn end_short_circuits() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::Yes)
            .decide("cc", AcceptStatus::End);
        assert_eq!(collect(&mut filter)?, vec!["aa", "bb"]);
        assert_eq!(filter.judged, vec!["aa", "bb", "cc"]);
        assert_eq!(filter.next()?, None);
        Ok(())
    }

    #[test]
    fn exhaustion_is_sticky() -> Result<()> {
        // underlying dictionary runs out
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::Yes);
        collect(&mut filter)?;
        for _ in 0..3 {
            assert_eq!(filter.next()?, None);
        }
        assert_eq!(filter.base().terms().next_calls, 6);

        // seek target past the last term
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["zz", "aa"], AcceptStatus::Yes);
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.seen_by_hook.len(), 1);
        assert_eq!(filter.base().terms().seek_calls, 1);

        // seek hook ends the enumeration
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["aa"], AcceptStatus::YesAndSeek);
        assert_eq!(collect(&mut filter)?, vec!["aa"]);
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.seen_by_hook.len(), 2);

        // predicate returns End
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::End);
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.judged, vec!["aa"]);
        assert_eq!(filter.base().terms().next_calls, 1);
        Ok(())
    }

    #[test]
    fn output_is_strictly_increasing() -> Result<()> {
        let mut dict = vec![];
        for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                dict.push(String::from_utf8(vec![a, b]).unwrap());
            }
        }
        let dict: Vec<&str> = dict.iter().map(String::as_str).collect();
        let mut filter = EvenLeadFilter {
            base: FilteredTermIterBase::new(MockTermIterator::new(&dict), false),
        };

        let terms = collect(&mut filter)?;
        assert_eq!(terms.len(), 13 * 26);
        assert!(terms.windows(2).all(|w| w[0] < w[1]));
        assert!(terms.iter().all(|t| t.as_bytes()[0] % 2 == 0));
        // one seek per block of odd leading bytes, 'a', 'c', ... 'y'
        assert_eq!(filter.base().terms().seek_calls, 13);
        assert!(filter.base().terms().next_calls < dict.len());
        Ok(())
    }

    #[test]
    fn externally_directed_seeks_are_rejected() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::Yes);
        let state = OrdTermState { ord: 1 };

        // fresh
        assert_unsupported(filter.seek_exact(b"bb"));
        assert_unsupported(filter.seek_ceil(b"bb"));
        assert_unsupported(filter.seek_exact_ord(1));
        assert_unsupported(filter.seek_exact_state(b"bb", &state));

        // positioned
        assert_eq!(filter.next()?, Some(b"aa".to_vec()));
        assert_unsupported(filter.seek_exact(b"dd"));
        assert_unsupported(filter.seek_ceil(b"dd"));
        assert_unsupported(filter.seek_exact_ord(3));
        assert_unsupported(filter.seek_exact_state(b"dd", &state));
        assert_eq!(filter.term()?, b"aa");

        // exhausted
        collect(&mut filter)?;
        assert_unsupported(filter.seek_exact(b"aa"));
        assert_unsupported(filter.seek_ceil(b"aa"));
        assert_unsupported(filter.seek_exact_ord(0));
        assert_unsupported(filter.seek_exact_state(b"aa", &state));
        assert_eq!(filter.base().terms().seek_calls, 0);
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not after current term")]
    fn backwards_seek_target_is_caught() {
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["cc", "bb"], AcceptStatus::YesAndSeek);
        assert_eq!(filter.next().unwrap(), Some(b"cc".to_vec()));
        let _ = filter.next();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not after current term")]
    fn repeated_seek_target_is_caught() {
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["cc", "cc"], AcceptStatus::NoAndSeek);
        let _ = filter.next();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn backwards_seek_target_is_fatal() -> Result<()> {
        let mut filter =
            SeekingFilter::new(MockTermIterator::new(&DICT), &["cc", "bb"], AcceptStatus::YesAndSeek);
        assert_eq!(filter.next()?, Some(b"cc".to_vec()));
        match filter.next() {
            Err(e) => match *e.kind() {
                ErrorKind::IllegalState(_) => {}
                ref kind => panic!("expected IllegalState, got {:?}", kind),
            },
            Ok(t) => panic!("expected IllegalState, got {:?}", t),
        }
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.base().terms().seek_calls, 1);
        Ok(())
    }

    #[test]
    fn accessors_read_through_to_current_term() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::No)
            .decide("cc", AcceptStatus::Yes);
        assert_eq!(filter.next()?, Some(b"cc".to_vec()));
        assert_eq!(filter.term()?, b"cc");
        assert_eq!(filter.ord()?, 2);
        assert_eq!(filter.doc_freq()?, 2);
        assert_eq!(filter.total_term_freq()?, 2 * MOCK_FREQ as i64);
        assert_eq!(filter.term_state()?, OrdTermState { ord: 2 });
        assert_eq!(
            (filter.comparator())(b"cc", b"dd"),
            (filter.base().terms().comparator())(b"cc", b"dd")
        );

        // "cc" lives in docs 2 and 12
        let live: BitsRef = Arc::new(FixedBits::with_set_bits(16, &[12])?);
        let mut postings =
            filter.postings_with_live_docs(Some(live), None, PostingIteratorFlags::FREQS)?;
        assert_eq!(postings.next()?, 12);
        assert_eq!(postings.freq()?, MOCK_FREQ);
        assert_eq!(postings.next_position()?, -1);

        let mut positions = filter
            .positions(None, Some(postings), PostingIteratorFlags::NONE)?
            .expect("mock field indexes positions");
        assert_eq!(positions.resets, 2);
        assert!(positions.has_positions());
        assert_eq!(positions.collect_docs()?, vec![2, 12]);
        Ok(())
    }

    #[test]
    fn positions_absent_without_positional_index() -> Result<()> {
        let terms = MockTermIterator::new(&DICT).without_positions();
        let mut filter = StatusFilter::new(terms, false, AcceptStatus::Yes);
        filter.next()?;
        assert!(filter.positions(None, None, PostingIteratorFlags::ALL)?.is_none());
        assert_eq!(filter.postings()?.collect_docs()?, vec![0, 10]);
        Ok(())
    }

    #[test]
    fn attributes_are_shared_with_underlying_iterator() -> Result<()> {
        let filter = StatusFilter::new(MockTermIterator::new(&DICT), false, AcceptStatus::Yes);
        let outer = filter.attributes();
        let inner = filter.base().terms().attributes();
        assert!(Arc::ptr_eq(&outer, &inner));

        outer.lock()?.boost.set_boost(3.0);
        assert_eq!(inner.lock()?.boost.get_boost(), 3.0);
        Ok(())
    }

    #[test]
    fn filters_a_borrowed_iterator() -> Result<()> {
        let mut dict = MockTermIterator::new(&DICT);
        {
            let mut filter =
                StatusFilter::new(TermIteratorRef::new(&mut dict), false, AcceptStatus::No)
                    .decide("bb", AcceptStatus::Yes)
                    .decide("dd", AcceptStatus::Yes);
            assert_eq!(collect(&mut filter)?, vec!["bb", "dd"]);
        }
        assert_eq!(dict.next_calls, 6);
        Ok(())
    }

    #[test]
    fn initial_seek_term_set_once_before_first_next() -> Result<()> {
        let mut filter = StatusFilter::new(MockTermIterator::new(&DICT), true, AcceptStatus::Yes);
        filter.set_initial_seek_term(b"bb".to_vec())?;
        assert!(filter.set_initial_seek_term(b"cc".to_vec()).is_err());
        assert_eq!(filter.next()?, Some(b"bb".to_vec()));
        assert!(filter.set_initial_seek_term(b"dd".to_vec()).is_err());
        Ok(())
    }

    #[test]
    fn predicate_errors_propagate() -> Result<()> {
        let mut filter = FailingFilter {
            base: FilteredTermIterBase::new(MockTermIterator::new(&DICT), false),
        };
        assert_eq!(filter.next()?, Some(b"aa".to_vec()));
        assert_eq!(filter.next()?, Some(b"bb".to_vec()));
        assert_runtime_error(filter.next(), "predicate failed");
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.base().terms().next_calls, 3);
        Ok(())
    }

    #[test]
    fn failed_seek_ends_enumeration() -> Result<()> {
        let mut terms = MockTermIterator::new(&DICT);
        terms.fail_seek_at = Some(2);
        let mut filter = SeekingFilter::new(terms, &["bb", "dd"], AcceptStatus::YesAndSeek);
        assert_eq!(filter.next()?, Some(b"bb".to_vec()));
        assert_runtime_error(filter.next(), "seek #2 failed");
        assert!(filter.base().is_exhausted());
        for _ in 0..2 {
            assert_eq!(filter.next()?, None);
        }
        assert_eq!(filter.seen_by_hook.len(), 2);
        assert_eq!(filter.base().terms().seek_calls, 2);
        assert_eq!(filter.base().terms().next_calls, 0);
        Ok(())
    }

    #[test]
    fn failed_step_ends_enumeration() -> Result<()> {
        let mut terms = MockTermIterator::new(&DICT);
        terms.fail_next_at = Some(3);
        let mut filter = StatusFilter::new(terms, false, AcceptStatus::Yes);
        assert_eq!(filter.next()?, Some(b"aa".to_vec()));
        assert_eq!(filter.next()?, Some(b"bb".to_vec()));
        assert_runtime_error(filter.next(), "next #3 failed");
        assert_eq!(filter.next()?, None);
        assert_eq!(filter.judged, vec!["aa", "bb"]);
        assert_eq!(filter.base().terms().next_calls, 3);
        Ok(())
    }

    #[test]
    fn accept_status_flags() {
        assert!(AcceptStatus::YesAndSeek.is_accepted());
        assert!(AcceptStatus::YesAndSeek.seeks());
        assert!(!AcceptStatus::NoAndSeek.is_accepted());
        assert!(AcceptStatus::NoAndSeek.seeks());
        assert!(!AcceptStatus::End.is_accepted());
        assert!(!AcceptStatus::End.seeks());
    }
}
