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


use std::f32;
use std::sync::{Arc, Mutex};

/// control the boost factor for each term returned by a `TermIterator`.
///
/// A filtering `TermIterator` (e.g. a fuzzy one) updates the boost on each
/// returned term so that the query rewrite can take it into account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostAttribute {
    boost: f32,
}

impl BoostAttribute {
    #[inline]
    pub fn new() -> BoostAttribute {
        BoostAttribute::from(1.0)
    }
    #[inline]
    pub fn from(boost: f32) -> BoostAttribute {
        BoostAttribute { boost }
    }
    #[inline]
    pub fn clear(&mut self) {
        self.boost = 1.0
    }
    #[inline]
    pub fn set_boost(&mut self, boost: f32) {
        self.boost = boost
    }
    #[inline]
    pub fn get_boost(&self) -> f32 {
        self.boost
    }
}

impl Default for BoostAttribute {
    #[inline]
    fn default() -> Self {
        BoostAttribute::from(1.0)
    }
}

/// Lets a top-N query rewrite tell the `TermIterator` the boost below which
/// terms are no longer competitive, together with the term that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxNonCompetitiveBoostAttribute {
    max_non_competitive_boost: f32,
    competitive_term: Option<Vec<u8>>,
}

impl MaxNonCompetitiveBoostAttribute {
    pub fn max_non_competitive_boost(&self) -> f32 {
        self.max_non_competitive_boost
    }

    pub fn set_max_non_competitive_boost(&mut self, boost: f32) {
        self.max_non_competitive_boost = boost;
    }

    pub fn competitive_term(&self) -> Option<&[u8]> {
        self.competitive_term.as_ref().map(Vec::as_slice)
    }

    pub fn set_competitive_term(&mut self, term: Option<Vec<u8>>) {
        self.competitive_term = term;
    }

    pub fn clear(&mut self) {
        self.max_non_competitive_boost = f32::NEG_INFINITY;
        self.competitive_term = None;
    }
}

impl Default for MaxNonCompetitiveBoostAttribute {
    fn default() -> Self {
        MaxNonCompetitiveBoostAttribute {
            max_non_competitive_boost: f32::NEG_INFINITY,
            competitive_term: None,
        }
    }
}

/// The attributes a `TermIterator` shares with its consumers.
#[derive(Debug, Default, Clone)]
pub struct TermAttributes {
    pub boost: BoostAttribute,
    pub max_non_competitive_boost: MaxNonCompetitiveBoostAttribute,
}

impl TermAttributes {
    pub fn clear(&mut self) {
        self.boost.clear();
        self.max_non_competitive_boost.clear();
    }
}

/// Shared, mutable handle to a `TermIterator`'s attributes. Wrapping
/// iterators hand out the handle of the iterator they wrap.
pub type TermAttributesRef = Arc<Mutex<TermAttributes>>;

pub fn new_term_attributes() -> TermAttributesRef {
    Arc::new(Mutex::new(TermAttributes::default()))
}
