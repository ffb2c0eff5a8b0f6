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


use core::codec::{Fields, Terms};
use core::index::{
    BinaryDocValues, FieldInfo, FieldInfos, NumericDocValues, SortedDocValues,
    SortedNumericDocValues, SortedSetDocValues, StoredFieldVisitor,
};
use core::util::DocId;

use error::Result;

/// Read access to one segment: its field metadata, term dictionaries,
/// norms, doc values, stored fields and term vectors.
pub trait LeafReader {
    type Terms: Terms;
    type TVFields: Fields;

    fn name(&self) -> &str;

    fn max_doc(&self) -> DocId;

    fn field_infos(&self) -> &FieldInfos;

    fn field_info(&self, field: &str) -> Option<&FieldInfo> {
        self.field_infos().field_info_by_name(field)
    }

    /// Returns the term dictionary of `field`, None if the field has no
    /// terms in this segment.
    fn terms(&self, field: &str) -> Result<Option<Self::Terms>>;

    fn norm_values(&self, field: &str) -> Result<Option<Box<dyn NumericDocValues>>>;

    fn get_numeric_doc_values(&self, field: &str) -> Result<Box<dyn NumericDocValues>>;

    fn get_binary_doc_values(&self, field: &str) -> Result<Box<dyn BinaryDocValues>>;

    fn get_sorted_doc_values(&self, field: &str) -> Result<Box<dyn SortedDocValues>>;

    fn get_sorted_numeric_doc_values(&self, field: &str)
        -> Result<Box<dyn SortedNumericDocValues>>;

    fn get_sorted_set_doc_values(&self, field: &str) -> Result<Box<dyn SortedSetDocValues>>;

    fn document(&self, doc_id: DocId, visitor: &mut dyn StoredFieldVisitor) -> Result<()>;

    fn term_vector(&self, doc_id: DocId) -> Result<Option<Self::TVFields>>;
}
