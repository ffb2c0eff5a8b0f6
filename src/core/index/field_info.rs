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


use core::index::{DocValuesType, IndexOptions};

use error::ErrorKind::{IllegalArgument, IllegalState};
use error::Result;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::result;
use std::sync::Arc;

/// Per-field metadata of a segment.
#[derive(Clone, Serialize, Debug)]
pub struct FieldInfo {
    pub name: String,
    pub number: i32,
    pub index_options: IndexOptions,
    pub omit_norms: bool,
    pub doc_values_type: DocValuesType,
    pub has_store_term_vector: bool,
    pub has_store_payloads: bool,
}

impl FieldInfo {
    pub fn new(
        name: String,
        number: i32,
        index_options: IndexOptions,
        omit_norms: bool,
        doc_values_type: DocValuesType,
        store_term_vector: bool,
        store_payloads: bool,
    ) -> Result<FieldInfo> {
        let info = FieldInfo {
            name,
            number,
            index_options,
            omit_norms,
            doc_values_type,
            has_store_term_vector: store_term_vector,
            has_store_payloads: store_payloads,
        };
        info.check_consistency()?;
        Ok(info)
    }

    fn check_consistency(&self) -> Result<()> {
        if !self.is_indexed() {
            if self.has_store_term_vector {
                bail!(IllegalState(format!(
                    "non-indexed field '{}' cannot store term vectors",
                    &self.name
                )));
            }
            if self.has_store_payloads {
                bail!(IllegalState(format!(
                    "non-indexed field '{}' cannot store payloads",
                    &self.name
                )));
            }
            if self.omit_norms {
                bail!(IllegalState(format!(
                    "non-indexed field '{}' cannot omit norms",
                    &self.name
                )));
            }
        } else if self.has_store_payloads && !self.index_options.has_positions() {
            bail!(IllegalState(format!(
                "indexed field '{}' cannot have payloads without positions",
                &self.name
            )));
        }
        Ok(())
    }

    pub fn is_indexed(&self) -> bool {
        self.index_options != IndexOptions::Null
    }

    pub fn has_positions(&self) -> bool {
        self.index_options.has_positions()
    }

    pub fn has_norms(&self) -> bool {
        self.is_indexed() && !self.omit_norms
    }

    pub fn has_doc_values(&self) -> bool {
        !self.doc_values_type.null()
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Ok(s) = ::serde_json::to_string_pretty(self) {
            write!(f, "{}", s)?;
        }

        Ok(())
    }
}

pub type FieldInfoRef = Arc<FieldInfo>;

/// The `FieldInfo`s of one segment, addressable by number and by name.
pub struct FieldInfos {
    pub has_prox: bool,
    pub has_vectors: bool,
    pub has_norms: bool,
    pub has_doc_values: bool,

    by_number: BTreeMap<i32, FieldInfoRef>,
    by_name: HashMap<String, FieldInfoRef>,
}

impl FieldInfos {
    pub fn new(infos: Vec<FieldInfo>) -> Result<FieldInfos> {
        let mut has_prox = false;
        let mut has_vectors = false;
        let mut has_norms = false;
        let mut has_doc_values = false;

        let mut by_number: BTreeMap<i32, FieldInfoRef> = BTreeMap::new();
        let mut by_name: HashMap<String, FieldInfoRef> = HashMap::new();
        for info in infos {
            let info = Arc::new(info);
            let number = info.number;
            if number < 0 {
                bail!(IllegalArgument(format!(
                    "illegal field number: {} for field {}",
                    number, &info.name
                )));
            }

            has_prox |= info.has_positions();
            has_vectors |= info.has_store_term_vector;
            has_norms |= info.has_norms();
            has_doc_values |= info.has_doc_values();

            if let Some(previous) = by_number.insert(number, Arc::clone(&info)) {
                bail!(IllegalArgument(format!(
                    "duplicated field numbers: {} and {} have: {}",
                    previous.name, &info.name, number
                )));
            }

            if let Some(previous) = by_name.insert(info.name.clone(), Arc::clone(&info)) {
                bail!(IllegalArgument(format!(
                    "duplicated field names: {} and {} have: {}",
                    previous.number, number, &info.name
                )));
            }
        }
        Ok(FieldInfos {
            has_prox,
            has_vectors,
            has_norms,
            has_doc_values,
            by_number,
            by_name,
        })
    }

    pub fn field_info_by_number(&self, field_number: i32) -> Option<&FieldInfo> {
        self.by_number.get(&field_number).map(Arc::as_ref)
    }

    pub fn field_info_by_name(&self, field_name: &str) -> Option<&FieldInfo> {
        self.by_name.get(field_name).map(Arc::as_ref)
    }

    /// Iterates the fields in field number order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldInfo> {
        self.by_number.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

impl Serialize for FieldInfos {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("FieldInfos", 5)?;
        s.serialize_field("has_prox", &self.has_prox)?;
        s.serialize_field("has_vectors", &self.has_vectors)?;
        s.serialize_field("has_norms", &self.has_norms)?;
        s.serialize_field("has_doc_values", &self.has_doc_values)?;

        let fields: Vec<&FieldInfo> = self.iter().collect();
        s.serialize_field("fields", &fields)?;
        s.end()
    }
}

impl fmt::Display for FieldInfos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Ok(s) = ::serde_json::to_string_pretty(self) {
            write!(f, "{}", s)?;
        }

        Ok(())
    }
}
