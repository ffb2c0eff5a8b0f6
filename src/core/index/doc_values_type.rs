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


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DocValuesType {
    /// No doc values for this field.
    Null,
    /// A per-document Number
    Numeric,
    /// A per-document [u8].
    Binary,
    /// A pre-sorted [u8]. Only distinct values are stored, each document
    /// points at its value by ordinal.
    Sorted,
    /// A pre-sorted list of numbers per document.
    SortedNumeric,
    /// A pre-sorted Set<[u8]>. Only distinct values are stored, each
    /// document points at its values by ordinal.
    SortedSet,
}

impl DocValuesType {
    pub fn null(self) -> bool {
        self == DocValuesType::Null
    }
}

impl Default for DocValuesType {
    fn default() -> DocValuesType {
        DocValuesType::Null
    }
}
