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

//! HyperLogLog cardinality estimation.
//!
//! A [`HyperLogLog`] estimates the number of distinct values in a stream using
//! `2^p` small registers ("buckets"), where `p` is the precision. The standard error is
//! about `1.04 / sqrt(2^p)`.
//!
//! # Representations
//!
//! - [`SparseRepresentation`]: a sorted list of the buckets touched so far, indexed at a
//!   fixed 26-bit resolution. Small and exact-ish for low cardinalities.
//! - [`DenseRepresentation`]: one 4-bit delta per bucket over a shared baseline, plus a
//!   single overflow slot for the largest outlier.
//!
//! An instance starts sparse and is promoted to dense once the sparse list would use more
//! memory than the dense registers. Promotion never loses information: converting a sparse
//! instance yields the same registers as inserting the same hashes densely.
//!
//! # Serialization
//!
//! The first byte of every serialized instance is a [`Format`] tag. All multi-byte integers
//! are big-endian.
//!
//! ```text
//! sparse v2: [tag=2][precision][count:u16][entry:i32; count]
//! dense v1:  [tag=1][precision][baseline][delta nibbles; 2^p / 2][overflow bucket:i16][overflow value:u8]
//! ```

mod bias_correction;
mod dense;
mod format;
mod sketch;
mod sparse;
mod utils;

pub use dense::BITS_PER_BUCKET;
pub use dense::DenseRepresentation;
pub use dense::LINEAR_COUNTING_MIN_EMPTY_BUCKETS;
pub use dense::MAX_DELTA;
pub use format::Format;
pub use sketch::HyperLogLog;
pub use sparse::EXTENDED_PRECISION;
pub use sparse::SparseRepresentation;
pub use sparse::VALUE_BITS;
pub use utils::alpha;
pub use utils::bucket_index;
pub use utils::index_bit_length;
pub use utils::leading_zero_run;
pub use utils::linear_counting;
pub use utils::register_value;

/// Largest supported number of buckets.
pub const MAX_BUCKETS: u32 = 1 << MAX_PRECISION;

/// Smallest precision (log2 of the bucket count) a [`HyperLogLog`] accepts.
pub const MIN_PRECISION: u8 = 1;
/// Largest precision (log2 of the bucket count) a [`HyperLogLog`] accepts.
pub const MAX_PRECISION: u8 = 16;
