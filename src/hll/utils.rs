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

//! Numeric helpers shared by the sparse and dense representations.

use crate::error::Error;

/// Returns the bucket index encoded in the top `bits` bits of `hash`.
#[inline]
pub fn bucket_index(hash: u64, bits: u8) -> u32 {
    debug_assert!((1..=32).contains(&bits));
    (hash >> (64 - u32::from(bits))) as u32
}

/// Counts the leading zeros of `hash` once the top `bits` index bits are discarded.
///
/// A guard bit is placed where the index bits used to end, so a remainder of all zeros
/// yields `64 - bits` instead of running into the index bits.
#[inline]
pub fn leading_zero_run(hash: u64, bits: u8) -> u32 {
    debug_assert!((1..=32).contains(&bits));
    let value = (hash << bits) | (1u64 << (bits - 1));
    value.leading_zeros()
}

/// The register value a hash contributes to its bucket: leading zero run plus one.
#[inline]
pub fn register_value(hash: u64, bits: u8) -> u8 {
    (leading_zero_run(hash, bits) + 1) as u8
}

/// Number of buckets for a precision.
#[inline]
pub fn bucket_count(precision: u8) -> u32 {
    1 << precision
}

/// Bias constant of the raw harmonic-mean estimate.
pub fn alpha(precision: u8) -> f64 {
    match precision {
        4 => 0.673,
        5 => 0.697,
        6 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / f64::from(bucket_count(precision))),
    }
}

/// Linear counting estimate from the number of empty buckets.
///
/// Undefined for `zero_buckets == 0`; callers only take this path while a sizable fraction
/// of buckets is still empty.
pub fn linear_counting(zero_buckets: u32, total_buckets: u32) -> f64 {
    debug_assert!(zero_buckets > 0, "linear counting needs at least one empty bucket");
    let total = f64::from(total_buckets);
    total * (total / f64::from(zero_buckets)).ln()
}

pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// log2 of a bucket count.
pub fn index_bit_length(bucket_count: u32) -> Result<u8, Error> {
    if !is_power_of_two(bucket_count) {
        return Err(Error::config_invalid(format!(
            "number of buckets must be a positive power of two, got {bucket_count}"
        )));
    }
    Ok(bucket_count.trailing_zeros() as u8)
}

/// `1 / 2^value`
#[inline]
pub(crate) fn inv_pow2(value: u8) -> f64 {
    if value <= 63 {
        1.0 / (1u64 << value) as f64
    } else {
        f64::exp2(-f64::from(value))
    }
}
