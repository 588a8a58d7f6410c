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

//! Digest algorithms available to the filter
//!
//! The filter treats every algorithm as a black box mapping arbitrary input bytes to a
//! fixed-length digest. The algorithms are used only for bit dispersion across the filter;
//! nothing in this crate relies on their cryptographic strength.

use md5::Md5;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;

/// A digest algorithm the filter can be configured with.
///
/// This is a closed set: every variant resolves to a concrete implementation at compile
/// time, so a configured algorithm can never fail to resolve at filter construction.
///
/// The order of algorithms in a configuration determines the order in which bit indices
/// are computed for an item; it does not affect which bits end up set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5, producing a 128-bit (16-byte) digest.
    Md5,
    /// SHA-1, producing a 160-bit (20-byte) digest.
    Sha1,
    /// SHA-256, producing a 256-bit (32-byte) digest.
    Sha256,
}

impl HashAlgorithm {
    /// Computes this algorithm's digest of `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloom::hash::HashAlgorithm;
    /// let digest = HashAlgorithm::Sha256.digest(b"apple");
    /// assert_eq!(digest.len(), 32);
    /// ```
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Returns the fixed digest length of this algorithm in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_lengths_match_declared() {
        for algorithm in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
        ] {
            assert_eq!(algorithm.digest(b"abc").len(), algorithm.digest_len());
            assert_eq!(algorithm.digest(b"").len(), algorithm.digest_len());
        }
    }

    #[test]
    fn test_digest_is_deterministic() {
        for algorithm in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
        ] {
            assert_eq!(algorithm.digest(b"TestString"), algorithm.digest(b"TestString"));
        }
    }
}
