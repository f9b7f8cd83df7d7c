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

//! Dense representation: one 4-bit delta per bucket over a shared baseline.
//!
//! Every bucket value is stored as `baseline + delta`, with `delta` packed two to a byte
//! (the even bucket in the high nibble). Deltas saturate at [`MAX_DELTA`]; the excess of a
//! single bucket is kept in an overflow slot. When the last bucket sitting at the baseline
//! moves up, the baseline itself is raised and every delta shifts down by one, so the
//! nibbles keep tracking the low end of the distribution.
//!
//! Values of other saturated buckets are capped at `baseline + 15`. That is the accuracy
//! this encoding trades for its half-byte registers.

use std::mem;

use log::trace;

use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::error::Error;
use crate::hll::MAX_PRECISION;
use crate::hll::MIN_PRECISION;
use crate::hll::bias_correction;
use crate::hll::format::Format;
use crate::hll::utils::alpha;
use crate::hll::utils::bucket_count;
use crate::hll::utils::bucket_index;
use crate::hll::utils::inv_pow2;
use crate::hll::utils::linear_counting;
use crate::hll::utils::register_value;

/// Bits used to store one bucket delta.
pub const BITS_PER_BUCKET: u32 = 4;
/// Largest delta a nibble can hold.
pub const MAX_DELTA: u8 = (1 << BITS_PER_BUCKET) - 1;
/// While the baseline is zero and more than this fraction of buckets are empty, the
/// cardinality is estimated by linear counting.
pub const LINEAR_COUNTING_MIN_EMPTY_BUCKETS: f64 = 0.4;

const BUCKET_MASK: u8 = MAX_DELTA;
// tag + precision + baseline
const HEADER_BYTES: usize = 3;
// overflow bucket (i16) + overflow value (u8)
const OVERFLOW_BYTES: usize = 3;
const NO_OVERFLOW_BUCKET: i16 = -1;

#[inline]
fn nibble_shift(bucket: u32) -> u32 {
    // even buckets live in the high nibble
    ((!bucket) & 1) * BITS_PER_BUCKET
}

#[inline]
fn read_delta(deltas: &[u8], bucket: u32) -> u8 {
    let byte = deltas[(bucket >> 1) as usize];
    (byte >> nibble_shift(bucket)) & BUCKET_MASK
}

#[inline]
fn write_delta(deltas: &mut [u8], bucket: u32, delta: u8) {
    debug_assert!(delta <= MAX_DELTA);
    let shift = nibble_shift(bucket);
    let byte = &mut deltas[(bucket >> 1) as usize];
    *byte = (*byte & !(BUCKET_MASK << shift)) | (delta << shift);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseRepresentation {
    precision: u8,
    baseline: u8,
    /// Number of buckets whose delta is zero.
    baseline_count: u32,
    deltas: Box<[u8]>,
    /// Bucket holding the overflow, set only while `overflow_value > 0`.
    overflow_bucket: Option<u16>,
    overflow_value: u8,
}

impl DenseRepresentation {
    /// Creates an empty dense representation with `2^precision` buckets.
    ///
    /// `precision` must lie in `[1, 16]`.
    pub fn new(precision: u8) -> Result<Self, Error> {
        validate_precision(precision).map_err(Error::config_invalid)?;
        Ok(Self::empty(precision))
    }

    /// Creates an empty instance for a precision already validated by the caller.
    pub(crate) fn empty(precision: u8) -> Self {
        debug_assert!((MIN_PRECISION..=MAX_PRECISION).contains(&precision));
        let num_buckets = bucket_count(precision);
        Self {
            precision,
            baseline: 0,
            baseline_count: num_buckets,
            deltas: vec![0; (num_buckets / 2) as usize].into_boxed_slice(),
            overflow_bucket: None,
            overflow_value: 0,
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn bucket_count(&self) -> u32 {
        bucket_count(self.precision)
    }

    /// The value every bucket is at least.
    pub fn baseline(&self) -> u8 {
        self.baseline
    }

    /// Number of buckets whose value equals the baseline.
    pub fn baseline_count(&self) -> u32 {
        self.baseline_count
    }

    /// The overflow slot as `(bucket, excess over baseline + 15)`, if occupied.
    pub fn overflow(&self) -> Option<(u16, u8)> {
        self.overflow_bucket
            .map(|bucket| (bucket, self.overflow_value))
    }

    /// The effective value of `bucket`.
    pub fn value(&self, bucket: u32) -> u8 {
        let mut delta = read_delta(&self.deltas, bucket);
        if self.overflow_bucket == Some(bucket as u16) {
            delta += self.overflow_value;
        }
        self.baseline + delta
    }

    pub fn insert_hash(&mut self, hash: u64) {
        let bucket = bucket_index(hash, self.precision);
        let value = register_value(hash, self.precision);
        self.insert(bucket, value);
    }

    /// Raises `bucket` to `value` if that is larger than what it holds.
    pub fn insert(&mut self, bucket: u32, value: u8) {
        debug_assert!(bucket < self.bucket_count());

        let old_delta = read_delta(&self.deltas, bucket);
        let mut delta = i32::from(value) - i32::from(self.baseline);
        if delta <= i32::from(old_delta) {
            return;
        }

        if delta > i32::from(MAX_DELTA) {
            let overflow = (delta - i32::from(MAX_DELTA)) as u8;
            if overflow > self.overflow_value {
                // a bucket that loses the slot keeps its saturated delta
                self.overflow_bucket = Some(bucket as u16);
                self.overflow_value = overflow;
            }
            delta = i32::from(MAX_DELTA);
        }

        write_delta(&mut self.deltas, bucket, delta as u8);

        if old_delta == 0 {
            self.baseline_count -= 1;
            self.adjust_baseline_if_needed();
        }
    }

    fn adjust_baseline_if_needed(&mut self) {
        while self.baseline_count == 0 {
            self.baseline += 1;

            for bucket in 0..self.bucket_count() {
                if self.overflow_bucket == Some(bucket as u16) {
                    // the saturated delta stays put while the overflow absorbs the shift
                    self.overflow_value -= 1;
                    if self.overflow_value == 0 {
                        self.overflow_bucket = None;
                    }
                    continue;
                }

                let delta = read_delta(&self.deltas, bucket);
                debug_assert!(delta > 0, "no bucket may sit below a raised baseline");
                write_delta(&mut self.deltas, bucket, delta - 1);
                if delta == 1 {
                    self.baseline_count += 1;
                }
            }

            trace!(
                "raised HyperLogLog baseline to {} ({} buckets at baseline)",
                self.baseline, self.baseline_count
            );
        }
    }

    /// Estimates the number of distinct hashes inserted so far.
    pub fn cardinality(&self) -> u64 {
        let num_buckets = self.bucket_count();

        if self.baseline == 0
            && f64::from(self.baseline_count)
                > LINEAR_COUNTING_MIN_EMPTY_BUCKETS * f64::from(num_buckets)
        {
            return linear_counting(self.baseline_count, num_buckets).round() as u64;
        }

        let sum: f64 = (0..num_buckets)
            .map(|bucket| inv_pow2(self.value(bucket)))
            .sum();
        let m = f64::from(num_buckets);
        let raw_estimate = alpha(self.precision) * m * m / sum;

        correct_bias(raw_estimate, self.precision).round() as u64
    }

    /// Unions `other` into `self` by taking the larger value of every bucket.
    pub fn merge_with(&mut self, other: &DenseRepresentation) -> Result<(), Error> {
        if self.precision != other.precision {
            return Err(Error::invalid_argument(format!(
                "cannot merge HyperLogLogs with different precisions: {} vs {}",
                self.precision, other.precision
            )));
        }

        let baseline = self.baseline.max(other.baseline);
        let mut deltas = vec![0u8; self.deltas.len()].into_boxed_slice();
        let mut baseline_count = 0;
        let mut overflow_bucket = None;
        let mut overflow_value = 0;

        for bucket in 0..self.bucket_count() {
            let value = self.value(bucket).max(other.value(bucket));
            let mut delta = value - baseline;
            if delta == 0 {
                baseline_count += 1;
            }
            if delta > MAX_DELTA {
                let overflow = delta - MAX_DELTA;
                if overflow > overflow_value {
                    overflow_bucket = Some(bucket as u16);
                    overflow_value = overflow;
                }
                delta = MAX_DELTA;
            }
            write_delta(&mut deltas, bucket, delta);
        }

        self.baseline = baseline;
        self.baseline_count = baseline_count;
        self.deltas = deltas;
        self.overflow_bucket = overflow_bucket;
        self.overflow_value = overflow_value;

        self.adjust_baseline_if_needed();
        Ok(())
    }

    pub fn estimated_in_memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.deltas.len()
    }

    /// In-memory size of a dense representation of the given precision.
    pub fn estimated_in_memory_size_for(precision: u8) -> usize {
        mem::size_of::<Self>() + delta_bytes(precision)
    }

    pub fn estimated_serialized_size(&self) -> usize {
        HEADER_BYTES + self.deltas.len() + OVERFLOW_BYTES
    }

    /// Serializes as `[tag][precision][baseline][deltas][overflow bucket:i16][overflow value]`.
    ///
    /// An empty overflow slot is written as bucket `-1` with value `0`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = SketchBytes::with_capacity(self.estimated_serialized_size());
        bytes.write_u8(Format::DenseV1.tag());
        bytes.write_u8(self.precision);
        bytes.write_u8(self.baseline);
        bytes.write(&self.deltas);
        match self.overflow_bucket {
            // buckets past i16::MAX keep their bit pattern
            Some(bucket) => bytes.write_i16_be(bucket as i16),
            None => bytes.write_i16_be(NO_OVERFLOW_BUCKET),
        }
        bytes.write_u8(self.overflow_value);
        bytes.into_bytes()
    }

    /// Decodes a dense instance.
    ///
    /// Besides its own layout this accepts the multi-overflow layout ([`Format::DenseV2`])
    /// as long as it carries at most one overflow entry.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = SketchSlice::new(bytes);

        let tag = cursor
            .read_u8()
            .map_err(|e| Error::insufficient_data("format_tag").set_source(e))?;
        let format = Format::from_tag(tag)?;
        if format.is_sparse() {
            return Err(Error::deserial(format!(
                "expected dense format, got {format:?}"
            )));
        }

        let precision = cursor
            .read_u8()
            .map_err(|e| Error::insufficient_data("precision").set_source(e))?;
        validate_precision(precision).map_err(Error::deserial)?;

        let baseline = cursor
            .read_u8()
            .map_err(|e| Error::insufficient_data("baseline").set_source(e))?;

        let mut deltas = vec![0u8; delta_bytes(precision)].into_boxed_slice();
        cursor
            .read_exact(&mut deltas)
            .map_err(|e| Error::insufficient_data("deltas").set_source(e))?;

        let (raw_bucket, overflow_value) = match format {
            Format::DenseV1 => read_single_overflow(&mut cursor)?,
            _ => read_overflow_list(&mut cursor)?,
        };

        if cursor.remaining() > 0 {
            return Err(Error::deserial("trailing bytes after dense registers")
                .with_context("remaining", cursor.remaining()));
        }

        let num_buckets = bucket_count(precision);
        let overflow_bucket = if overflow_value > 0 {
            if u32::from(raw_bucket) >= num_buckets {
                return Err(Error::deserial(format!(
                    "overflow bucket {raw_bucket} is out of range for {num_buckets} buckets"
                )));
            }
            Some(raw_bucket)
        } else {
            None
        };

        let baseline_count = (0..num_buckets)
            .filter(|bucket| read_delta(&deltas, *bucket) == 0)
            .count() as u32;

        let dense = Self {
            precision,
            baseline,
            baseline_count,
            deltas,
            overflow_bucket,
            overflow_value,
        };
        dense.check_registers().map_err(Error::deserial)?;
        Ok(dense)
    }

    /// Checks the cached baseline count and the overflow slot against the registers.
    pub fn verify(&self) -> Result<(), Error> {
        validate_precision(self.precision).map_err(Error::invariant_violation)?;
        let zero_deltas = (0..self.bucket_count())
            .filter(|bucket| read_delta(&self.deltas, *bucket) == 0)
            .count() as u32;
        if zero_deltas != self.baseline_count {
            return Err(Error::invariant_violation(format!(
                "baseline count is {} but {zero_deltas} buckets sit at the baseline",
                self.baseline_count
            )));
        }
        if self.overflow_bucket.is_some() != (self.overflow_value > 0) {
            return Err(Error::invariant_violation(
                "overflow bucket and overflow value disagree",
            ));
        }
        self.check_registers().map_err(Error::invariant_violation)
    }

    fn check_registers(&self) -> Result<(), String> {
        if self.baseline_count == 0 {
            return Err("no bucket sits at the baseline".to_string());
        }
        if let Some(bucket) = self.overflow_bucket {
            let delta = read_delta(&self.deltas, u32::from(bucket));
            if delta != MAX_DELTA {
                return Err(format!(
                    "overflow bucket {bucket} has delta {delta}, expected {MAX_DELTA}"
                ));
            }
        }

        // a hash cannot produce more than 64 - p leading zeros, plus one
        let max_delta = (0..self.bucket_count())
            .map(|bucket| read_delta(&self.deltas, bucket))
            .max()
            .unwrap_or(0);
        let max_value =
            u32::from(self.baseline) + u32::from(max_delta) + u32::from(self.overflow_value);
        let limit = max_register_value(self.precision);
        if max_value > limit {
            return Err(format!(
                "largest register value {max_value} exceeds {limit} for precision {}",
                self.precision
            ));
        }
        Ok(())
    }
}

/// Largest register value a 64-bit hash can produce at `precision`.
fn max_register_value(precision: u8) -> u32 {
    u64::BITS - u32::from(precision) + 1
}

/// Reads the `[bucket:i16][value:u8]` overflow slot.
fn read_single_overflow(cursor: &mut SketchSlice<'_>) -> Result<(u16, u8), Error> {
    let bucket = cursor
        .read_i16_be()
        .map_err(|e| Error::insufficient_data("overflow_bucket").set_source(e))?;
    let value = cursor
        .read_u8()
        .map_err(|e| Error::insufficient_data("overflow_value").set_source(e))?;
    Ok((bucket as u16, value))
}

/// Reads the `[count:u16][buckets:u16...][values:u8...]` overflow list.
fn read_overflow_list(cursor: &mut SketchSlice<'_>) -> Result<(u16, u8), Error> {
    let count = cursor
        .read_u16_be()
        .map_err(|e| Error::insufficient_data("overflow_count").set_source(e))?;
    match count {
        0 => Ok((0, 0)),
        1 => {
            let bucket = cursor
                .read_u16_be()
                .map_err(|e| Error::insufficient_data("overflow_buckets").set_source(e))?;
            let value = cursor
                .read_u8()
                .map_err(|e| Error::insufficient_data("overflow_values").set_source(e))?;
            Ok((bucket, value))
        }
        _ => Err(Error::unsupported_format(
            "dense v2 with more than one overflow entry cannot be represented",
        )
        .with_context("overflow_count", count)),
    }
}

fn correct_bias(raw_estimate: f64, precision: u8) -> f64 {
    let Some((estimates, biases)) = bias_correction::curves(precision) else {
        return raw_estimate;
    };

    let first = estimates[0];
    let last = estimates[estimates.len() - 1];
    if raw_estimate < first || raw_estimate > last {
        return raw_estimate;
    }

    let bias = match estimates.binary_search_by(|probe| probe.total_cmp(&raw_estimate)) {
        Ok(position) => biases[position],
        Err(insertion) => {
            let (x0, x1) = (estimates[insertion - 1], estimates[insertion]);
            let (y0, y1) = (biases[insertion - 1], biases[insertion]);
            y0 + (raw_estimate - x0) * (y1 - y0) / (x1 - x0)
        }
    };

    raw_estimate - bias
}

fn delta_bytes(precision: u8) -> usize {
    (bucket_count(precision) / 2) as usize
}

fn validate_precision(precision: u8) -> Result<(), String> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(format!(
            "precision must be in [{MIN_PRECISION}, {MAX_PRECISION}], got {precision}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn values(dense: &DenseRepresentation) -> Vec<u8> {
        (0..dense.bucket_count()).map(|b| dense.value(b)).collect()
    }

    #[test]
    fn test_nibble_layout() {
        let mut deltas = [0u8; 2];
        write_delta(&mut deltas, 0, 0xA);
        write_delta(&mut deltas, 1, 0x3);
        write_delta(&mut deltas, 3, 0xF);
        assert_eq!(deltas, [0xA3, 0x0F]);
        assert_eq!(read_delta(&deltas, 0), 0xA);
        assert_eq!(read_delta(&deltas, 2), 0);
        write_delta(&mut deltas, 0, 0x1);
        assert_eq!(deltas[0], 0x13);
    }

    #[test]
    fn test_empty() {
        let dense = DenseRepresentation::new(4).unwrap();
        assert_eq!(dense.baseline(), 0);
        assert_eq!(dense.baseline_count(), 16);
        assert_eq!(dense.overflow(), None);
        assert_eq!(dense.cardinality(), 0);
        dense.verify().unwrap();

        assert_eq!(
            DenseRepresentation::new(0).unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
        assert!(DenseRepresentation::new(17).is_err());
    }

    #[test]
    fn test_insert_keeps_max() {
        let mut dense = DenseRepresentation::new(4).unwrap();
        dense.insert(3, 5);
        dense.insert(3, 2);
        assert_eq!(dense.value(3), 5);
        assert_eq!(dense.baseline_count(), 15);
        dense.insert(3, 7);
        assert_eq!(dense.value(3), 7);
        assert_eq!(dense.baseline_count(), 15);
        dense.verify().unwrap();
    }

    #[test]
    fn test_insert_hash_uses_top_bits_for_bucket() {
        let mut dense = DenseRepresentation::new(4).unwrap();
        // bucket 0b0110, then two zeros before the first one bit
        dense.insert_hash((0b0110u64 << 60) | (1u64 << 57));
        assert_eq!(dense.value(6), 3);
    }

    #[test]
    fn test_baseline_raised_when_last_bucket_leaves_it() {
        let mut dense = DenseRepresentation::new(4).unwrap();
        for bucket in 0..16 {
            dense.insert(bucket, 1);
        }
        assert_eq!(dense.baseline(), 1);
        assert_eq!(dense.baseline_count(), 16);
        assert!(values(&dense).iter().all(|v| *v == 1));

        for bucket in 0..15 {
            dense.insert(bucket, 3);
        }
        assert_eq!(dense.baseline(), 1);
        dense.insert(15, 2);
        assert_eq!(dense.baseline(), 2);
        assert_eq!(dense.baseline_count(), 1);
        assert_eq!(dense.value(0), 3);
        assert_eq!(dense.value(15), 2);
        dense.verify().unwrap();
    }

    #[test]
    fn test_overflow_slot() {
        let mut dense = DenseRepresentation::new(4).unwrap();
        dense.insert(2, 20);
        assert_eq!(dense.overflow(), Some((2, 5)));
        assert_eq!(dense.value(2), 20);

        // a smaller excess elsewhere saturates without taking the slot
        dense.insert(9, 18);
        assert_eq!(dense.overflow(), Some((2, 5)));
        assert_eq!(dense.value(9), 15);

        // an equal excess does not take the slot either
        dense.insert(11, 20);
        assert_eq!(dense.overflow(), Some((2, 5)));
        assert_eq!(dense.value(11), 15);

        // a larger excess takes it; the old holder keeps its saturated delta
        dense.insert(5, 30);
        assert_eq!(dense.overflow(), Some((5, 15)));
        assert_eq!(dense.value(5), 30);
        assert_eq!(dense.value(2), 15);
        dense.verify().unwrap();
    }

    #[test]
    fn test_baseline_raise_drains_overflow() {
        let mut dense = DenseRepresentation::new(2).unwrap();
        dense.insert(0, 17);
        assert_eq!(dense.overflow(), Some((0, 2)));
        dense.insert(1, 1);
        dense.insert(2, 1);
        dense.insert(3, 1);
        assert_eq!(dense.baseline(), 1);
        assert_eq!(dense.overflow(), Some((0, 1)));
        assert_eq!(dense.value(0), 17);

        dense.insert(1, 2);
        dense.insert(2, 2);
        dense.insert(3, 2);
        assert_eq!(dense.baseline(), 2);
        assert_eq!(dense.overflow(), None);
        assert_eq!(dense.value(0), 17);
        dense.verify().unwrap();
    }

    #[test]
    fn test_cardinality_linear_counting_region() {
        let mut dense = DenseRepresentation::new(10).unwrap();
        for bucket in 0..100 {
            dense.insert(bucket * 3, 1);
        }
        let expected = linear_counting(924, 1024).round() as u64;
        assert_eq!(dense.cardinality(), expected);
    }

    #[test]
    fn test_cardinality_harmonic_mean_region() {
        // every bucket at 12: the raw estimate is far above the bias tables
        let mut dense = DenseRepresentation::new(4).unwrap();
        for bucket in 0..16 {
            dense.insert(bucket, 12);
        }
        assert_eq!(dense.baseline(), 12);
        let raw = alpha(4) * 16.0 * 16.0 / (16.0 * inv_pow2(12));
        assert_eq!(dense.cardinality(), raw.round() as u64);
    }

    #[test]
    fn test_correct_bias() {
        let (estimates, biases) = bias_correction::curves(10).unwrap();
        assert_eq!(correct_bias(estimates[3], 10), estimates[3] - biases[3]);

        let mid = (estimates[3] + estimates[4]) / 2.0;
        let bias = (biases[3] + biases[4]) / 2.0;
        assert!((correct_bias(mid, 10) - (mid - bias)).abs() < 1e-9);

        assert_eq!(correct_bias(1.0, 10), 1.0);
        let huge = estimates[estimates.len() - 1] * 2.0;
        assert_eq!(correct_bias(huge, 10), huge);
        assert_eq!(correct_bias(3.0, 3), 3.0);
    }

    #[test]
    fn test_merge() {
        let mut a = DenseRepresentation::new(4).unwrap();
        let mut b = DenseRepresentation::new(4).unwrap();
        for bucket in 0..16 {
            a.insert(bucket, 2);
        }
        b.insert(1, 25);
        b.insert(4, 7);

        let mut ab = a.clone();
        ab.merge_with(&b).unwrap();
        let mut ba = b.clone();
        ba.merge_with(&a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.baseline(), 2);
        assert_eq!(ab.value(1), 25);
        assert_eq!(ab.value(4), 7);
        assert_eq!(ab.value(9), 2);
        ab.verify().unwrap();

        let mut again = ab.clone();
        again.merge_with(&ab).unwrap();
        assert_eq!(again, ab);
    }

    #[test]
    fn test_merge_raises_baseline() {
        let mut a = DenseRepresentation::new(2).unwrap();
        let mut b = DenseRepresentation::new(2).unwrap();
        a.insert(0, 3);
        a.insert(1, 3);
        b.insert(2, 4);
        b.insert(3, 4);
        a.merge_with(&b).unwrap();
        assert_eq!(a.baseline(), 3);
        assert_eq!(values(&a), vec![3, 3, 4, 4]);
        a.verify().unwrap();
    }

    #[test]
    fn test_merge_rejects_precision_mismatch() {
        let mut a = DenseRepresentation::new(4).unwrap();
        a.insert(1, 3);
        let before = a.clone();
        let b = DenseRepresentation::new(5).unwrap();
        assert_eq!(
            a.merge_with(&b).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(a, before);
    }

    #[test]
    fn test_serialized_layout() {
        let mut dense = DenseRepresentation::new(2).unwrap();
        assert_eq!(
            dense.serialize(),
            vec![1, 2, 0, 0x00, 0x00, 0xFF, 0xFF, 0x00]
        );

        dense.insert(1, 19);
        dense.insert(2, 3);
        let bytes = dense.serialize();
        assert_eq!(bytes, vec![1, 2, 0, 0x0F, 0x30, 0x00, 0x01, 0x04]);
        assert_eq!(bytes.len(), dense.estimated_serialized_size());
        assert_eq!(DenseRepresentation::deserialize(&bytes).unwrap(), dense);
    }

    #[test]
    fn test_high_overflow_bucket_round_trips() {
        let mut dense = DenseRepresentation::new(16).unwrap();
        dense.insert(65535, 40);
        assert_eq!(dense.overflow(), Some((65535, 25)));
        let bytes = dense.serialize();
        let decoded = DenseRepresentation::deserialize(&bytes).unwrap();
        assert_eq!(decoded.value(65535), 40);
        assert_eq!(decoded, dense);
    }

    #[test]
    fn test_deserialize_multi_overflow_layout() {
        // p = 2, deltas 0xF0 0x00, one overflow entry on bucket 0
        let bytes = [3, 2, 0, 0xF0, 0x00, 0, 1, 0, 0, 4];
        let dense = DenseRepresentation::deserialize(&bytes).unwrap();
        assert_eq!(dense.value(0), 19);
        assert_eq!(dense.baseline_count(), 3);

        let none = [3, 2, 0, 0x10, 0x00, 0, 0];
        let dense = DenseRepresentation::deserialize(&none).unwrap();
        assert_eq!(dense.value(0), 1);
        assert_eq!(dense.overflow(), None);

        let two = [3, 2, 0, 0xFF, 0x00, 0, 2, 0, 0, 0, 1, 4, 4];
        assert_eq!(
            DenseRepresentation::deserialize(&two).unwrap_err().kind(),
            ErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let mut dense = DenseRepresentation::new(4).unwrap();
        dense.insert(3, 20);
        let bytes = dense.serialize();

        let mut trailing = bytes.clone();
        trailing.push(0);
        assert!(DenseRepresentation::deserialize(&trailing).is_err());

        assert_eq!(
            DenseRepresentation::deserialize(&bytes[..bytes.len() - 2])
                .unwrap_err()
                .kind(),
            ErrorKind::MalformedDeserializeData
        );

        // overflow bucket beyond the bucket count
        let mut out_of_range = bytes.clone();
        let n = out_of_range.len();
        out_of_range[n - 3] = 0;
        out_of_range[n - 2] = 16;
        assert!(DenseRepresentation::deserialize(&out_of_range).is_err());

        // overflow recorded on a bucket that is not saturated
        let mut unsaturated = bytes.clone();
        unsaturated[n - 2] = 4;
        assert!(DenseRepresentation::deserialize(&unsaturated).is_err());

        let mut sparse_tag = bytes;
        sparse_tag[0] = Format::SparseV2.tag();
        assert!(DenseRepresentation::deserialize(&sparse_tag).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unreachable_register_values() {
        // p = 1: registers top out at 64
        let at_limit = [1, 1, 49, 0xF0, 0xFF, 0xFF, 0];
        let dense = DenseRepresentation::deserialize(&at_limit).unwrap();
        assert_eq!(dense.value(0), 64);
        dense.verify().unwrap();

        let past_limit = [1, 1, 49, 0xF0, 0x00, 0x00, 1];
        assert_eq!(
            DenseRepresentation::deserialize(&past_limit)
                .unwrap_err()
                .kind(),
            ErrorKind::MalformedDeserializeData
        );

        let huge_baseline = [1, 1, 250, 0xF0, 0x00, 0x00, 10];
        assert!(DenseRepresentation::deserialize(&huge_baseline).is_err());
        assert_eq!(max_register_value(16), 49);
    }

    #[test]
    fn test_estimated_sizes() {
        let dense = DenseRepresentation::new(12).unwrap();
        assert_eq!(
            dense.estimated_in_memory_size(),
            DenseRepresentation::estimated_in_memory_size_for(12)
        );
        assert_eq!(dense.estimated_serialized_size(), 3 + 2048 + 3);
    }
}
