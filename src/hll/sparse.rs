// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Sparse representation: a sorted list of `(extended bucket, value)` entries.
//!
//! While few distinct hashes have been seen, the sketch records them against a fixed 26-bit
//! "extended" bucket index instead of the `p`-bit index of the dense form. Each entry packs
//! the extended index in its high 26 bits and the leading zero run that follows it in the
//! low 6 bits:
//!
//! ```text
//! 31                           6 5      0
//! +------------------------------+--------+
//! |   extended bucket (26 bits)  | value  |
//! +------------------------------+--------+
//! ```
//!
//! Entries are sorted by extended bucket and hold at most one entry per bucket, so sorting
//! the packed words as unsigned integers is the same as sorting by bucket.

use std::mem;

use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::error::Error;
use crate::hll::MAX_PRECISION;
use crate::hll::dense::DenseRepresentation;
use crate::hll::format::Format;
use crate::hll::utils::bucket_index;
use crate::hll::utils::leading_zero_run;
use crate::hll::utils::linear_counting;

/// Width of the bucket index recorded by sparse entries, independent of the precision.
pub const EXTENDED_PRECISION: u8 = 26;

/// Width of the value field of a sparse entry.
pub const VALUE_BITS: u32 = 6;
const VALUE_MASK: u32 = (1 << VALUE_BITS) - 1;
/// Largest leading zero run that fits after a 26-bit index in a 64-bit hash.
const MAX_VALUE: u32 = 64 - EXTENDED_PRECISION as u32;

// tag + precision + entry count
const HEADER_BYTES: usize = 4;
const ENTRY_BYTES: usize = 4;

#[inline]
fn pack_entry(bucket: u32, value: u32) -> u32 {
    (bucket << VALUE_BITS) | (value & VALUE_MASK)
}

#[inline]
fn entry_bucket(entry: u32) -> u32 {
    entry >> VALUE_BITS
}

#[inline]
fn entry_value(entry: u32) -> u32 {
    entry & VALUE_MASK
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseRepresentation {
    precision: u8,
    entries: Vec<u32>,
}

impl SparseRepresentation {
    /// Creates an empty sparse representation.
    ///
    /// `precision` is the precision of the dense form this will eventually turn into and
    /// must lie in `[1, 26]`.
    pub fn new(precision: u8) -> Result<Self, Error> {
        validate_precision(precision).map_err(Error::config_invalid)?;
        Ok(Self {
            precision,
            entries: Vec::new(),
        })
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Number of distinct extended buckets recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert_hash(&mut self, hash: u64) {
        let bucket = bucket_index(hash, EXTENDED_PRECISION);
        let value = leading_zero_run(hash, EXTENDED_PRECISION);
        self.insert(bucket, value);
    }

    fn insert(&mut self, bucket: u32, value: u32) {
        match self.search(bucket) {
            Ok(position) => {
                let entry = &mut self.entries[position];
                if value > entry_value(*entry) {
                    *entry = pack_entry(bucket, value);
                }
            }
            Err(insertion_point) => {
                self.entries
                    .insert(insertion_point, pack_entry(bucket, value));
            }
        }
    }

    fn search(&self, bucket: u32) -> Result<usize, usize> {
        self.entries
            .binary_search_by_key(&bucket, |entry| entry_bucket(*entry))
    }

    /// Unions `other` into `self`, keeping the larger value for buckets present in both.
    pub fn merge_with(&mut self, other: &SparseRepresentation) -> Result<(), Error> {
        if self.precision != other.precision {
            return Err(Error::invalid_argument(format!(
                "cannot merge HyperLogLogs with different precisions: {} vs {}",
                self.precision, other.precision
            )));
        }

        let left = &self.entries;
        let right = &other.entries;
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let (a, b) = (left[i], right[j]);
            let (bucket_a, bucket_b) = (entry_bucket(a), entry_bucket(b));
            if bucket_a < bucket_b {
                merged.push(a);
                i += 1;
            } else if bucket_a > bucket_b {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a.max(b));
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);

        self.entries = merged;
        Ok(())
    }

    /// Builds the equivalent dense representation.
    ///
    /// Fails if the precision is larger than the dense form supports.
    pub fn to_dense(&self) -> Result<DenseRepresentation, Error> {
        if self.precision > MAX_PRECISION {
            return Err(Error::config_invalid(format!(
                "precision {} is too large for a dense representation (max {MAX_PRECISION})",
                self.precision
            )));
        }
        Ok(self.densify())
    }

    /// [`to_dense`](Self::to_dense) for a precision already known to be a dense precision.
    pub(crate) fn densify(&self) -> DenseRepresentation {
        let mut dense = DenseRepresentation::empty(self.precision);

        // extended bits that are not part of the dense bucket index
        let spare_bits = u32::from(EXTENDED_PRECISION - self.precision);
        let spare_mask = (1u32 << spare_bits) - 1;

        for &entry in &self.entries {
            let extended_bucket = entry_bucket(entry);
            let bucket = extended_bucket >> spare_bits;
            let spare = extended_bucket & spare_mask;

            let zeros = if spare == 0 {
                spare_bits + entry_value(entry)
            } else {
                spare.leading_zeros() - (u32::BITS - spare_bits)
            };

            dense.insert(bucket, (zeros + 1) as u8);
        }

        dense
    }

    /// Linear counting over the `2^26` extended buckets.
    pub fn cardinality(&self) -> u64 {
        let total_buckets = 1u32 << EXTENDED_PRECISION;
        let zero_buckets = total_buckets - self.entries.len() as u32;
        linear_counting(zero_buckets, total_buckets).round() as u64
    }

    pub fn estimated_in_memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.entries.len() * mem::size_of::<u32>()
    }

    pub fn estimated_serialized_size(&self) -> usize {
        HEADER_BYTES + self.entries.len() * ENTRY_BYTES
    }

    /// Serializes as `[tag][precision][count:u16][entries:i32...]`.
    ///
    /// Fails if there are more entries than the 16-bit count can describe. A
    /// [`HyperLogLog`](crate::hll::HyperLogLog) promotes to dense long before that.
    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        let count = u16::try_from(self.entries.len()).map_err(|_| {
            Error::invariant_violation("too many sparse entries to serialize")
                .with_context("entries", self.entries.len())
        })?;

        let mut bytes = SketchBytes::with_capacity(self.estimated_serialized_size());
        bytes.write_u8(Format::SparseV2.tag());
        bytes.write_u8(self.precision);
        bytes.write_u16_be(count);
        for &entry in &self.entries {
            bytes.write_i32_be(entry as i32);
        }
        Ok(bytes.into_bytes())
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = SketchSlice::new(bytes);

        let tag = cursor
            .read_u8()
            .map_err(|e| Error::insufficient_data("format_tag").set_source(e))?;
        match Format::from_tag(tag)? {
            Format::SparseV2 => {}
            Format::SparseV1 => {
                return Err(Error::unsupported_format(
                    "sparse v1 format is retired and can no longer be decoded",
                ));
            }
            format => {
                return Err(Error::deserial(format!(
                    "expected sparse v2 format, got {format:?}"
                )));
            }
        }

        let precision = cursor
            .read_u8()
            .map_err(|e| Error::insufficient_data("precision").set_source(e))?;
        validate_precision(precision).map_err(Error::deserial)?;

        let count = cursor
            .read_u16_be()
            .map_err(|e| Error::insufficient_data("entry_count").set_source(e))?;

        let mut entries = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let entry = cursor
                .read_i32_be()
                .map_err(|e| Error::insufficient_data("entries").set_source(e))?;
            entries.push(entry as u32);
        }

        if cursor.remaining() > 0 {
            return Err(Error::deserial("trailing bytes after sparse entries")
                .with_context("remaining", cursor.remaining()));
        }

        let sparse = Self { precision, entries };
        sparse.check_entries().map_err(Error::deserial)?;
        Ok(sparse)
    }

    /// Checks that entries are strictly ascending by bucket and carry valid values.
    pub fn verify(&self) -> Result<(), Error> {
        validate_precision(self.precision).map_err(Error::invariant_violation)?;
        self.check_entries().map_err(Error::invariant_violation)
    }

    fn check_entries(&self) -> Result<(), String> {
        if let Some(entry) = self.entries.iter().find(|e| entry_value(**e) > MAX_VALUE) {
            return Err(format!(
                "value {} of bucket {} exceeds {MAX_VALUE}",
                entry_value(*entry),
                entry_bucket(*entry)
            ));
        }
        let ordered = self
            .entries
            .windows(2)
            .all(|pair| entry_bucket(pair[0]) < entry_bucket(pair[1]));
        if !ordered {
            return Err("sparse entries are not strictly ascending by bucket".to_string());
        }
        Ok(())
    }
}

fn validate_precision(precision: u8) -> Result<(), String> {
    if !(1..=EXTENDED_PRECISION).contains(&precision) {
        return Err(format!(
            "precision must be in [1, {EXTENDED_PRECISION}], got {precision}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Builds a hash from an extended bucket index and the bits that follow it.
    fn hash_of(extended_bucket: u32, tail: u64) -> u64 {
        (u64::from(extended_bucket) << 38) | (tail & ((1 << 38) - 1))
    }

    #[test]
    fn test_pack_unpack_entry() {
        let entry = pack_entry(12345, 37);
        assert_eq!(entry_bucket(entry), 12345);
        assert_eq!(entry_value(entry), 37);

        let top = pack_entry((1 << 26) - 1, 1);
        assert_eq!(entry_bucket(top), (1 << 26) - 1);
        assert!((top as i32) < 0);
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            SparseRepresentation::new(0).unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
        assert!(SparseRepresentation::new(27).is_err());
        assert!(SparseRepresentation::new(26).is_ok());
    }

    #[test]
    fn test_insert_keeps_sorted_and_max() {
        let mut sparse = SparseRepresentation::new(10).unwrap();
        sparse.insert_hash(hash_of(300, 1 << 30)); // 7 leading zeros
        sparse.insert_hash(hash_of(5, 1 << 37)); // 0 leading zeros
        sparse.insert_hash(hash_of(70, 1));
        sparse.insert_hash(hash_of(300, 1 << 35)); // smaller value, ignored
        sparse.insert_hash(hash_of(5, 1 << 20)); // larger value, replaces

        let buckets: Vec<_> = sparse.entries.iter().map(|e| entry_bucket(*e)).collect();
        let values: Vec<_> = sparse.entries.iter().map(|e| entry_value(*e)).collect();
        assert_eq!(buckets, vec![5, 70, 300]);
        assert_eq!(values, vec![17, 37, 7]);
        sparse.verify().unwrap();
    }

    #[test]
    fn test_zero_tail_saturates() {
        let mut sparse = SparseRepresentation::new(4).unwrap();
        sparse.insert_hash(hash_of(9, 0));
        assert_eq!(entry_value(sparse.entries[0]), MAX_VALUE);
    }

    #[test]
    fn test_merge_takes_max_per_bucket() {
        let mut a = SparseRepresentation::new(8).unwrap();
        let mut b = SparseRepresentation::new(8).unwrap();
        a.insert_hash(hash_of(1, 1 << 30));
        a.insert_hash(hash_of(4, 1 << 30));
        b.insert_hash(hash_of(4, 1 << 10));
        b.insert_hash(hash_of(9, 1 << 30));

        let mut ab = a.clone();
        ab.merge_with(&b).unwrap();
        let mut ba = b.clone();
        ba.merge_with(&a).unwrap();

        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 3);
        assert_eq!(entry_value(ab.entries[1]), 27);
        ab.verify().unwrap();
    }

    #[test]
    fn test_merge_rejects_precision_mismatch() {
        let mut a = SparseRepresentation::new(8).unwrap();
        a.insert_hash(hash_of(1, 1));
        let b = SparseRepresentation::new(9).unwrap();
        let err = a.merge_with(&b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_to_dense_matches_direct_insertion() {
        let precision = 6;
        let mut sparse = SparseRepresentation::new(precision).unwrap();
        let mut dense = DenseRepresentation::new(precision).unwrap();

        let mut hash = 0x9E37_79B9_7F4A_7C15u64;
        for i in 0..40u64 {
            hash = hash.rotate_left(17) ^ i.wrapping_mul(0xBF58_476D_1CE4_E5B9);
            sparse.insert_hash(hash);
            dense.insert_hash(hash);
        }
        // a hash whose spare extended bits are all zero
        let deep = 0b10_1010u64 << 58;
        sparse.insert_hash(deep);
        dense.insert_hash(deep);

        let converted = sparse.to_dense().unwrap();
        for bucket in 0..64 {
            assert_eq!(converted.value(bucket), dense.value(bucket), "bucket {bucket}");
        }
        converted.verify().unwrap();
    }

    #[test]
    fn test_to_dense_rejects_large_precision() {
        let sparse = SparseRepresentation::new(20).unwrap();
        assert_eq!(
            sparse.to_dense().unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
    }

    #[test]
    fn test_cardinality_is_linear_counting() {
        let mut sparse = SparseRepresentation::new(12).unwrap();
        assert_eq!(sparse.cardinality(), 0);
        for bucket in 0..500 {
            sparse.insert_hash(hash_of(bucket * 7919, 1));
        }
        assert_eq!(sparse.cardinality(), 500);
    }

    #[test]
    fn test_serialized_layout() {
        let mut sparse = SparseRepresentation::new(11).unwrap();
        sparse.insert_hash(hash_of(3, 1 << 36)); // value 1
        let bytes = sparse.serialize().unwrap();
        assert_eq!(bytes, vec![2, 11, 0, 1, 0, 0, 0, 0b1100_0001]);
        assert_eq!(bytes.len(), sparse.estimated_serialized_size());
        assert_eq!(SparseRepresentation::deserialize(&bytes).unwrap(), sparse);
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let mut sparse = SparseRepresentation::new(11).unwrap();
        sparse.insert_hash(hash_of(3, 1));
        sparse.insert_hash(hash_of(8, 1));
        let bytes = sparse.serialize().unwrap();

        let mut trailing = bytes.clone();
        trailing.push(0);
        assert_eq!(
            SparseRepresentation::deserialize(&trailing)
                .unwrap_err()
                .kind(),
            ErrorKind::MalformedDeserializeData
        );

        let truncated = &bytes[..bytes.len() - 1];
        assert_eq!(
            SparseRepresentation::deserialize(truncated)
                .unwrap_err()
                .kind(),
            ErrorKind::MalformedDeserializeData
        );

        let mut bad_precision = bytes.clone();
        bad_precision[1] = 27;
        assert!(SparseRepresentation::deserialize(&bad_precision).is_err());

        let mut unordered = bytes.clone();
        unordered.swap(4, 8);
        unordered.swap(5, 9);
        unordered.swap(6, 10);
        unordered.swap(7, 11);
        assert!(SparseRepresentation::deserialize(&unordered).is_err());

        let mut retired = bytes;
        retired[0] = Format::SparseV1.tag();
        assert_eq!(
            SparseRepresentation::deserialize(&retired)
                .unwrap_err()
                .kind(),
            ErrorKind::UnsupportedFormat
        );
    }
}
