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

use crate::error::Error;

/// Tag stored in the first byte of every serialized instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Format {
    /// Retired sparse layout. Recognized only to be rejected.
    SparseV1 = 0,
    /// Dense layout with a single overflow slot. This is what dense instances serialize to.
    DenseV1 = 1,
    /// Sparse layout of packed 26-bit index / 6-bit value entries.
    SparseV2 = 2,
    /// Dense layout with a list of overflow entries. Read-only.
    DenseV2 = 3,
}

impl Format {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(Format::SparseV1),
            1 => Ok(Format::DenseV1),
            2 => Ok(Format::SparseV2),
            3 => Ok(Format::DenseV2),
            _ => Err(Error::unsupported_format(format!("unknown format tag: {tag}"))
                .with_context("tag", tag)),
        }
    }

    pub const fn is_sparse(self) -> bool {
        matches!(self, Format::SparseV1 | Format::SparseV2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_tags_are_stable() {
        for format in [
            Format::SparseV1,
            Format::DenseV1,
            Format::SparseV2,
            Format::DenseV2,
        ] {
            assert_eq!(Format::from_tag(format.tag()).unwrap(), format);
        }
        assert_eq!(Format::DenseV1.tag(), 1);
        assert_eq!(Format::SparseV2.tag(), 2);
    }

    #[test]
    fn test_unknown_tag() {
        let err = Format::from_tag(0x80).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }
}
