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

use googletest::assert_that;
use googletest::prelude::near;
use hyperloglog_sketch::error::ErrorKind;
use hyperloglog_sketch::hll::HyperLogLog;

fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn hll_of(precision: u8, range: std::ops::Range<u64>) -> HyperLogLog {
    let mut hll = HyperLogLog::with_precision(precision).unwrap();
    for i in range {
        hll.add_hash(mix(i));
    }
    hll
}

fn merged(left: &HyperLogLog, right: &HyperLogLog) -> HyperLogLog {
    let mut result = left.clone();
    result.merge_with(right).unwrap();
    result
}

#[test]
fn test_merge_sparse_stays_sparse() {
    let a = hll_of(12, 0..100);
    let b = hll_of(12, 50..200);
    let union = merged(&a, &b);
    assert!(union.is_sparse());
    assert_that!(union.cardinality() as f64, near(200.0, 2.0));
}

#[test]
fn test_merge_sparse_promotes_when_large() {
    let a = hll_of(10, 0..120);
    let b = hll_of(10, 120..240);
    assert!(a.is_sparse());
    assert!(b.is_sparse());

    let union = merged(&a, &b);
    assert!(union.is_dense());
    union.verify().unwrap();
    assert_that!(union.cardinality() as f64, near(240.0, 25.0));
}

#[test]
fn test_merge_dense_union() {
    let a = hll_of(12, 0..5_000);
    let b = hll_of(12, 5_000..10_000);
    let union = merged(&a, &b);
    assert!(union.is_dense());
    union.verify().unwrap();
    assert_that!(union.cardinality() as f64, near(10_000.0, 700.0));

    let everything = hll_of(12, 0..10_000);
    assert_eq!(union.cardinality(), everything.cardinality());
}

#[test]
fn test_merge_is_commutative() {
    let cases = [
        (hll_of(11, 0..30), hll_of(11, 10..60)),
        (hll_of(11, 0..30), hll_of(11, 10..6_000)),
        (hll_of(11, 0..3_000), hll_of(11, 1_000..9_000)),
    ];
    for (a, b) in cases {
        let ab = merged(&a, &b);
        let ba = merged(&b, &a);
        assert_eq!(ab.serialize().unwrap(), ba.serialize().unwrap());
    }
}

#[test]
fn test_merge_is_idempotent() {
    for hll in [hll_of(12, 0..50), hll_of(12, 0..20_000)] {
        let twice = merged(&hll, &hll);
        assert_eq!(twice, hll);
    }
}

#[test]
fn test_merge_is_associative_in_estimate() {
    let a = hll_of(12, 0..4_000);
    let b = hll_of(12, 3_000..9_000);
    let c = hll_of(12, 8_000..15_000);

    let left = merged(&merged(&a, &b), &c);
    let right = merged(&a, &merged(&b, &c));
    assert_eq!(left.cardinality(), right.cardinality());
}

#[test]
fn test_merge_with_empty() {
    let hll = hll_of(10, 0..5_000);
    let empty = HyperLogLog::with_precision(10).unwrap();

    let union = merged(&hll, &empty);
    assert_eq!(union, hll);

    let reverse = merged(&empty, &hll);
    assert_eq!(reverse.cardinality(), hll.cardinality());
}

#[test]
fn test_merge_rejects_different_precisions() {
    for mut receiver in [hll_of(10, 0..10), hll_of(10, 0..5_000)] {
        let before = receiver.clone();
        for other in [hll_of(11, 0..10), hll_of(11, 0..5_000)] {
            let err = receiver.merge_with(&other).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(receiver, before);
        }
    }
}
