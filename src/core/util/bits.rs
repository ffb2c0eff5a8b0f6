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


use error::ErrorKind::IllegalArgument;
use error::Result;

use std::sync::Arc;

/// Interface for Bitset-like structures.
///
/// Passed to `TermIterator::postings_with_live_docs` to restrict the
/// returned postings to the accepted documents.
pub trait Bits: Send + Sync {
    fn get(&self, index: usize) -> Result<bool>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type BitsRef = Arc<dyn Bits>;

#[inline]
fn bits2words(num_bits: usize) -> usize {
    if num_bits == 0 {
        0
    } else {
        ((num_bits - 1) >> 6) + 1
    }
}

/// A fixed length bit set backed by a `Vec<u64>`.
#[derive(Clone, Debug, Default)]
pub struct FixedBits {
    words: Vec<u64>,
    num_bits: usize,
}

impl FixedBits {
    pub fn new(num_bits: usize) -> FixedBits {
        FixedBits {
            words: vec![0u64; bits2words(num_bits)],
            num_bits,
        }
    }

    /// Builds a bit set of `num_bits` bits with every index in `indexes` set.
    pub fn with_set_bits(num_bits: usize, indexes: &[usize]) -> Result<FixedBits> {
        let mut bits = FixedBits::new(num_bits);
        for &index in indexes {
            bits.set(index)?;
        }
        Ok(bits)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.num_bits {
            bail!(IllegalArgument(format!(
                "index={} out of bounds, num_bits={}",
                index, self.num_bits
            )));
        }
        Ok(())
    }

    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index >> 6] |= 1u64 << (index & 0x3f);
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index >> 6] &= !(1u64 << (index & 0x3f));
        Ok(())
    }

    /// Return the number of bits that are set.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl Bits for FixedBits {
    fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.words[index >> 6] & (1u64 << (index & 0x3f)) != 0)
    }

    fn len(&self) -> usize {
        self.num_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_bits_set_and_clear() -> Result<()> {
        let mut bits = FixedBits::with_set_bits(130, &[0, 63, 64, 129])?;
        assert_eq!(bits.len(), 130);
        assert_eq!(bits.cardinality(), 4);
        assert!(bits.get(63)?);
        assert!(bits.get(64)?);
        assert!(!bits.get(65)?);

        bits.clear(64)?;
        assert!(!bits.get(64)?);
        assert_eq!(bits.cardinality(), 3);
        Ok(())
    }

    #[test]
    fn fixed_bits_out_of_bounds() {
        let mut bits = FixedBits::new(10);
        assert!(bits.get(10).is_err());
        assert!(bits.set(11).is_err());
        assert!(FixedBits::new(0).is_empty());
    }
}
