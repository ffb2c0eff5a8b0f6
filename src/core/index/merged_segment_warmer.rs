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


use core::codec::{Fields, TermIterator, Terms};
use core::index::{DocValuesType, FieldInfo, LeafReader, Status, StoredFieldVisitor};
use core::search::PostingIteratorFlags;
use core::util::ComputeTime;

use error::Result;

/// Warms a freshly merged segment before it becomes visible to searches.
pub trait MergedSegmentWarmer {
    fn warm<R: LeafReader + ?Sized>(&self, reader: &R) -> Result<()>;
}

/// What a warming pass touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarmStats {
    pub segment: String,
    pub indexed_fields: usize,
    pub norms_fields: usize,
    pub doc_values_fields: usize,
    pub stored_fields: usize,
    pub term_vector_fields: usize,
    pub elapsed_ms: u64,
}

impl WarmStats {
    fn new(segment: &str) -> WarmStats {
        WarmStats {
            segment: segment.to_string(),
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(::serde_json::to_string(self)?)
    }
}

/// Loads, for every field, the data structures a search is going to open
/// first: the term dictionary and the postings of its first term, norms and
/// doc values. Then reads the stored fields and term vectors of the first
/// document.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleMergedSegmentWarmer;

impl SimpleMergedSegmentWarmer {
    pub fn warm_segment<R: LeafReader + ?Sized>(&self, reader: &R) -> Result<WarmStats> {
        let timer = ComputeTime::start("warm_merged_segment");
        let mut stats = WarmStats::new(reader.name());

        for info in reader.field_infos().iter() {
            if info.is_indexed() {
                self.warm_postings(reader, info)?;
                stats.indexed_fields += 1;

                if info.has_norms() {
                    if reader.norm_values(&info.name)?.is_some() {
                        stats.norms_fields += 1;
                    } else {
                        warn!(
                            "field '{}' of segment '{}' has norms but none were loaded",
                            info.name,
                            reader.name()
                        );
                    }
                }
            }

            if info.has_doc_values() {
                self.warm_doc_values(reader, info)?;
                stats.doc_values_fields += 1;
            }
        }

        if reader.max_doc() > 0 {
            let mut visitor = WarmingVisitor::default();
            reader.document(0, &mut visitor)?;
            stats.stored_fields = visitor.fields;
            if let Some(vectors) = reader.term_vector(0)? {
                stats.term_vector_fields = vectors.size();
            }
        }

        stats.elapsed_ms = timer.elapsed_ms();
        info!(
            "{} finished for segment '{}': indexed={}, doc_values={}, norms={}, time={}ms",
            timer.task(),
            stats.segment,
            stats.indexed_fields,
            stats.doc_values_fields,
            stats.norms_fields,
            stats.elapsed_ms
        );
        Ok(stats)
    }

    fn warm_postings<R: LeafReader + ?Sized>(&self, reader: &R, info: &FieldInfo) -> Result<()> {
        if let Some(terms) = reader.terms(&info.name)? {
            let mut iter = terms.iterator()?;
            if iter.next()?.is_some() {
                if info.has_positions() {
                    iter.positions(None, None, PostingIteratorFlags::POSITIONS)?;
                } else {
                    iter.postings()?;
                }
            }
        }
        Ok(())
    }

    fn warm_doc_values<R: LeafReader + ?Sized>(
        &self,
        reader: &R,
        info: &FieldInfo,
    ) -> Result<()> {
        let field = info.name.as_str();
        match info.doc_values_type {
            DocValuesType::Numeric => {
                reader.get_numeric_doc_values(field)?;
            }
            DocValuesType::Binary => {
                reader.get_binary_doc_values(field)?;
            }
            DocValuesType::Sorted => {
                reader.get_sorted_doc_values(field)?;
            }
            DocValuesType::SortedNumeric => {
                reader.get_sorted_numeric_doc_values(field)?;
            }
            DocValuesType::SortedSet => {
                reader.get_sorted_set_doc_values(field)?;
            }
            DocValuesType::Null => {}
        }
        Ok(())
    }
}

impl MergedSegmentWarmer for SimpleMergedSegmentWarmer {
    fn warm<R: LeafReader + ?Sized>(&self, reader: &R) -> Result<()> {
        self.warm_segment(reader).map(|_| ())
    }
}

/// Loads every stored field of a document and drops the values.
#[derive(Default)]
struct WarmingVisitor {
    fields: usize,
}

impl StoredFieldVisitor for WarmingVisitor {
    fn binary_field(&mut self, _field_info: &FieldInfo, _value: &[u8]) {
        self.fields += 1;
    }

    fn string_field(&mut self, _field_info: &FieldInfo, _value: &[u8]) {
        self.fields += 1;
    }

    fn int_field(&mut self, _field_info: &FieldInfo, _value: i32) {
        self.fields += 1;
    }

    fn long_field(&mut self, _field_info: &FieldInfo, _value: i64) {
        self.fields += 1;
    }

    fn float_field(&mut self, _field_info: &FieldInfo, _value: f32) {
        self.fields += 1;
    }

    fn double_field(&mut self, _field_info: &FieldInfo, _value: f64) {
        self.fields += 1;
    }

    fn needs_field(&self, _field_info: &FieldInfo) -> Status {
        Status::YES
    }
}
