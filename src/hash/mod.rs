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

//! 64-bit hashing of arbitrary values.
//!
//! The estimator only ever sees 64-bit hashes. [`Hash64`] is the seam where callers plug in
//! their own hash function; [`Murmur3Hash64`] is the one used by
//! [`HyperLogLog::add`](crate::hll::HyperLogLog::add).

use std::hash::Hash;

/// Turns a value into a well-mixed 64-bit hash.
pub trait Hash64 {
    fn hash64<T: Hash + ?Sized>(&self, value: &T) -> u64;
}

/// MurmurHash3 x64/128, truncated to its first 64-bit half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Hash64 {
    seed: u32,
}

impl Murmur3Hash64 {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Hashes raw bytes without going through [`std::hash::Hash`], so the result matches
    /// other MurmurHash3 implementations given the same input and seed.
    pub fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let (h1, _) = mur3::murmurhash3_x64_128(bytes, self.seed);
        h1
    }
}

impl Hash64 for Murmur3Hash64 {
    fn hash64<T: Hash + ?Sized>(&self, value: &T) -> u64 {
        let mut hasher = mur3::Hasher128::with_seed(self.seed);
        value.hash(&mut hasher);
        let (h1, _) = hasher.finish128();
        h1
    }
}
