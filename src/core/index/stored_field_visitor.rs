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


use core::index::FieldInfo;

pub enum Status {
    YES,
    NO,
    STOP,
}

/// Receives the stored fields of one document, see `LeafReader::document`.
pub trait StoredFieldVisitor {
    fn binary_field(&mut self, field_info: &FieldInfo, value: &[u8]);
    fn string_field(&mut self, field_info: &FieldInfo, value: &[u8]);
    fn int_field(&mut self, field_info: &FieldInfo, value: i32);
    fn long_field(&mut self, field_info: &FieldInfo, value: i64);
    fn float_field(&mut self, field_info: &FieldInfo, value: f32);
    fn double_field(&mut self, field_info: &FieldInfo, value: f64);

    fn needs_field(&self, field_info: &FieldInfo) -> Status;
}
