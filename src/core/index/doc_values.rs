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


use core::util::DocId;
use error::Result;

pub trait NumericDocValues: Send + Sync {
    fn get(&self, doc_id: DocId) -> Result<i64>;
}

#[derive(Default)]
pub struct EmptyNumericDocValues;

impl NumericDocValues for EmptyNumericDocValues {
    fn get(&self, _doc_id: DocId) -> Result<i64> {
        Ok(0)
    }
}

pub trait BinaryDocValues: Send + Sync {
    fn get(&self, doc_id: DocId) -> Result<Vec<u8>>;
}

#[derive(Default)]
pub struct EmptyBinaryDocValues;

impl BinaryDocValues for EmptyBinaryDocValues {
    fn get(&self, _doc_id: DocId) -> Result<Vec<u8>> {
        Ok(Vec::with_capacity(0))
    }
}

pub trait SortedDocValues: Send + Sync {
    /// Returns the ordinal of the document's value, -1 if it has none.
    fn get_ord(&self, doc_id: DocId) -> Result<i32>;

    fn lookup_ord(&self, ord: i32) -> Result<Vec<u8>>;

    fn get_value_count(&self) -> usize;
}

#[derive(Default)]
pub struct EmptySortedDocValues;

impl SortedDocValues for EmptySortedDocValues {
    fn get_ord(&self, _doc_id: DocId) -> Result<i32> {
        Ok(-1)
    }

    fn lookup_ord(&self, _ord: i32) -> Result<Vec<u8>> {
        Ok(Vec::with_capacity(0))
    }

    fn get_value_count(&self) -> usize {
        0
    }
}

pub trait SortedNumericDocValues: Send {
    /// positions to the specified document
    fn set_document(&mut self, doc: DocId) -> Result<()>;
    /// Retrieve the value for the current document at the specified index.
    /// An index ranges from 0 to count() - 1.
    fn value_at(&mut self, index: usize) -> Result<i64>;
    /// Retrieves the count of values for the current document
    /// There may be zero if a document has no values
    fn count(&self) -> usize;
}

#[derive(Default)]
pub struct EmptySortedNumericDocValues;

impl SortedNumericDocValues for EmptySortedNumericDocValues {
    fn set_document(&mut self, _doc: DocId) -> Result<()> {
        Ok(())
    }

    fn value_at(&mut self, _index: usize) -> Result<i64> {
        Ok(0)
    }

    fn count(&self) -> usize {
        0
    }
}

pub const NO_MORE_ORDS: i64 = -1;

pub trait SortedSetDocValues: Send + Sync {
    /// positions to the specified document
    fn set_document(&mut self, doc: DocId) -> Result<()>;
    /// Returns the next ordinal of the current document, or `NO_MORE_ORDS`.
    fn next_ord(&mut self) -> Result<i64>;
    fn lookup_ord(&self, ord: i64) -> Result<Vec<u8>>;
    fn get_value_count(&self) -> usize;
}

#[derive(Default)]
pub struct EmptySortedSetDocValues;

impl SortedSetDocValues for EmptySortedSetDocValues {
    fn set_document(&mut self, _doc: DocId) -> Result<()> {
        Ok(())
    }

    fn next_ord(&mut self) -> Result<i64> {
        Ok(NO_MORE_ORDS)
    }

    fn lookup_ord(&self, _ord: i64) -> Result<Vec<u8>> {
        Ok(Vec::with_capacity(0))
    }

    fn get_value_count(&self) -> usize {
        0
    }
}
