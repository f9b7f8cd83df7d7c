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

use std::hash::Hash;

use log::debug;

use crate::error::Error;
use crate::hash::Hash64;
use crate::hash::Murmur3Hash64;
use crate::hll::MAX_BUCKETS;
use crate::hll::MAX_PRECISION;
use crate::hll::MIN_PRECISION;
use crate::hll::dense::DenseRepresentation;
use crate::hll::format::Format;
use crate::hll::sparse::SparseRepresentation;
use crate::hll::utils::bucket_count;
use crate::hll::utils::index_bit_length;

/// A HyperLogLog cardinality estimator.
///
/// Starts out sparse and switches to the dense representation, for good, as soon as the
/// sparse one would take more memory. Callers never see the switch except through
/// [`is_sparse`](Self::is_sparse) and the serialized size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperLogLog {
    representation: Representation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Representation {
    Sparse(SparseRepresentation),
    Dense(DenseRepresentation),
}

impl HyperLogLog {
    /// Creates an empty estimator with `bucket_count` buckets.
    ///
    /// `bucket_count` must be a power of two between 2 and [`MAX_BUCKETS`]. More buckets
    /// give a smaller standard error (about `1.04 / sqrt(bucket_count)`) at the cost of
    /// memory once dense.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperloglog_sketch::hll::HyperLogLog;
    ///
    /// let mut hll = HyperLogLog::new(2048).unwrap();
    /// for i in 0..1000u32 {
    ///     hll.add(&i);
    /// }
    /// let estimate = hll.cardinality();
    /// assert!((900..=1100).contains(&estimate));
    /// ```
    pub fn new(bucket_count: u32) -> Result<Self, Error> {
        if bucket_count > MAX_BUCKETS {
            return Err(Error::config_invalid(format!(
                "number of buckets must be at most {MAX_BUCKETS}, got {bucket_count}"
            )));
        }
        let precision = index_bit_length(bucket_count)?;
        Self::with_precision(precision)
    }

    /// Creates an empty estimator with `2^precision` buckets, `precision` in `[1, 16]`.
    pub fn with_precision(precision: u8) -> Result<Self, Error> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Error::config_invalid(format!(
                "precision must be in [{MIN_PRECISION}, {MAX_PRECISION}], got {precision}"
            ))
            .with_context("precision", precision));
        }
        let sparse = SparseRepresentation::new(precision)?;
        Ok(Self {
            representation: Representation::Sparse(sparse),
        })
    }

    /// Restores an estimator from the output of [`serialize`](Self::serialize).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(bytes).inspect_err(|err| {
            debug!(
                "rejected serialized HyperLogLog (tag {:?}, {} bytes): {err}",
                bytes.first(),
                bytes.len()
            );
        })
    }

    fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let Some(&tag) = bytes.first() else {
            return Err(Error::insufficient_data("format_tag"));
        };

        let representation = match Format::from_tag(tag)? {
            Format::SparseV1 => {
                return Err(Error::unsupported_format(
                    "sparse v1 format is retired and can no longer be decoded",
                ));
            }
            Format::SparseV2 => {
                let sparse = SparseRepresentation::deserialize(bytes)?;
                if sparse.precision() > MAX_PRECISION {
                    return Err(Error::deserial(format!(
                        "precision must be at most {MAX_PRECISION}, got {}",
                        sparse.precision()
                    )));
                }
                Representation::Sparse(sparse)
            }
            Format::DenseV1 | Format::DenseV2 => {
                Representation::Dense(DenseRepresentation::deserialize(bytes)?)
            }
        };

        Ok(Self { representation })
    }

    /// Hashes `value` with [`Murmur3Hash64`] and adds the hash.
    pub fn add<T: Hash + ?Sized>(&mut self, value: &T) {
        self.add_with(&Murmur3Hash64::default(), value);
    }

    /// Hashes `value` with `hasher` and adds the hash.
    pub fn add_with<H: Hash64, T: Hash + ?Sized>(&mut self, hasher: &H, value: &T) {
        self.add_hash(hasher.hash64(value));
    }

    /// Adds an already computed 64-bit hash.
    ///
    /// The hash must be well mixed. Its top bits pick the bucket and the rest feed the
    /// leading zero count, so poorly distributed hashes skew the estimate.
    pub fn add_hash(&mut self, hash: u64) {
        match &mut self.representation {
            Representation::Sparse(sparse) => {
                sparse.insert_hash(hash);
                self.promote_if_needed();
            }
            Representation::Dense(dense) => dense.insert_hash(hash),
        }
    }

    /// Unions `other` into `self`. Both must have the same number of buckets.
    ///
    /// On error `self` is left unchanged.
    pub fn merge_with(&mut self, other: &HyperLogLog) -> Result<(), Error> {
        if self.precision() != other.precision() {
            return Err(Error::invalid_argument(format!(
                "cannot merge HyperLogLogs with different precisions: {} vs {}",
                self.precision(),
                other.precision()
            )));
        }

        if let Representation::Sparse(other_sparse) = &other.representation {
            if let Representation::Sparse(sparse) = &mut self.representation {
                sparse.merge_with(other_sparse)?;
                self.promote_if_needed();
                return Ok(());
            }
        }

        let dense = self.make_dense_mut();
        match &other.representation {
            Representation::Sparse(other_sparse) => dense.merge_with(&other_sparse.densify()),
            Representation::Dense(other_dense) => dense.merge_with(other_dense),
        }
    }

    /// Switches to the dense representation. Does nothing if already dense.
    pub fn make_dense(&mut self) {
        self.make_dense_mut();
    }

    fn make_dense_mut(&mut self) -> &mut DenseRepresentation {
        if let Representation::Sparse(sparse) = &self.representation {
            let dense = sparse.densify();
            debug!(
                "promoting HyperLogLog to dense: precision {}, {} sparse entries, {} -> {} bytes",
                sparse.precision(),
                sparse.len(),
                sparse.estimated_in_memory_size(),
                dense.estimated_in_memory_size()
            );
            self.representation = Representation::Dense(dense);
        }
        match &mut self.representation {
            Representation::Dense(dense) => dense,
            Representation::Sparse(_) => unreachable!(),
        }
    }

    fn promote_if_needed(&mut self) {
        if let Representation::Sparse(sparse) = &self.representation {
            let dense_size = DenseRepresentation::estimated_in_memory_size_for(sparse.precision());
            if sparse.estimated_in_memory_size() > dense_size {
                self.make_dense();
            }
        }
    }

    /// Estimated number of distinct values added so far.
    pub fn cardinality(&self) -> u64 {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.cardinality(),
            Representation::Dense(dense) => dense.cardinality(),
        }
    }

    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.serialize(),
            Representation::Dense(dense) => Ok(dense.serialize()),
        }
    }

    pub fn estimated_in_memory_size(&self) -> usize {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.estimated_in_memory_size(),
            Representation::Dense(dense) => dense.estimated_in_memory_size(),
        }
    }

    /// Exact length of the output of [`serialize`](Self::serialize).
    pub fn estimated_serialized_size(&self) -> usize {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.estimated_serialized_size(),
            Representation::Dense(dense) => dense.estimated_serialized_size(),
        }
    }

    /// Checks the internal invariants of the active representation.
    pub fn verify(&self) -> Result<(), Error> {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.verify(),
            Representation::Dense(dense) => dense.verify(),
        }
    }

    pub fn precision(&self) -> u8 {
        match &self.representation {
            Representation::Sparse(sparse) => sparse.precision(),
            Representation::Dense(dense) => dense.precision(),
        }
    }

    pub fn bucket_count(&self) -> u32 {
        bucket_count(self.precision())
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self.representation, Representation::Sparse(_))
    }

    pub fn is_dense(&self) -> bool {
        matches!(self.representation, Representation::Dense(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_validates_bucket_count() {
        assert_eq!(HyperLogLog::new(1024).unwrap().precision(), 10);
        assert_eq!(HyperLogLog::new(2).unwrap().precision(), 1);
        assert_eq!(HyperLogLog::new(MAX_BUCKETS).unwrap().precision(), 16);

        for invalid in [0, 1, 1000, 2 * MAX_BUCKETS] {
            let err = HyperLogLog::new(invalid).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "{invalid}");
        }
        assert!(HyperLogLog::with_precision(17).is_err());
    }

    #[test]
    fn test_promotion_threshold() {
        let mut hll = HyperLogLog::with_precision(4).unwrap();
        let threshold = DenseRepresentation::estimated_in_memory_size_for(4);
        let mut i = 0u64;
        while hll.is_sparse() {
            let before = hll.estimated_in_memory_size();
            assert!(before <= threshold);
            hll.add(&i);
            i += 1;
        }
        assert!(hll.is_dense());
        hll.verify().unwrap();
    }

    #[test]
    fn test_make_dense_preserves_estimate() {
        let mut hll = HyperLogLog::with_precision(12).unwrap();
        for i in 0..300u32 {
            hll.add(&i);
        }
        assert!(hll.is_sparse());
        let sparse_estimate = hll.cardinality();

        hll.make_dense();
        assert!(hll.is_dense());
        let dense_estimate = hll.cardinality();
        assert!(sparse_estimate.abs_diff(dense_estimate) <= 15);

        hll.make_dense();
        assert!(hll.is_dense());
    }

    #[test]
    fn test_merge_mixed_representations() {
        let mut sparse = HyperLogLog::with_precision(10).unwrap();
        let mut dense = HyperLogLog::with_precision(10).unwrap();
        dense.make_dense();
        for i in 0..50u32 {
            sparse.add(&i);
            dense.add(&(i + 25));
        }

        let mut left = sparse.clone();
        left.merge_with(&dense).unwrap();
        let mut right = dense.clone();
        right.merge_with(&sparse).unwrap();
        assert!(left.is_dense());
        assert_eq!(left, right);
        left.verify().unwrap();
    }

    #[test]
    fn test_merge_precision_mismatch_leaves_receiver_unchanged() {
        let mut a = HyperLogLog::with_precision(10).unwrap();
        a.add("a");
        let before = a.clone();
        let b = HyperLogLog::with_precision(11).unwrap();
        let err = a.merge_with(&b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(a, before);
    }

    #[test]
    fn test_from_bytes_rejects_oversized_sparse_precision() {
        let sparse = SparseRepresentation::new(20).unwrap();
        let bytes = sparse.serialize().unwrap();
        let err = HyperLogLog::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDeserializeData);
    }

    #[test]
    fn test_from_bytes_empty_input() {
        let err = HyperLogLog::from_bytes(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDeserializeData);
    }
}
