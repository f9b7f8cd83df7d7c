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

//! HyperLogLog distinct counting with a compact sparse form, a 4-bit dense form and a
//! stable big-endian binary format.
//!
//! ```
//! use hyperloglog_sketch::hll::HyperLogLog;
//!
//! let mut left = HyperLogLog::new(4096).unwrap();
//! let mut right = HyperLogLog::new(4096).unwrap();
//! for i in 0..500u32 {
//!     left.add(&i);
//!     right.add(&(i + 250));
//! }
//! left.merge_with(&right).unwrap();
//!
//! let bytes = left.serialize().unwrap();
//! let restored = HyperLogLog::from_bytes(&bytes).unwrap();
//! assert_eq!(restored.cardinality(), left.cardinality());
//! ```

pub mod error;
pub mod hash;
pub mod hll;

mod codec;
