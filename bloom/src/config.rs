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

//! Filter configuration and size-unit constants

use crate::hash::HashAlgorithm;

/// Named multipliers for specifying [`BloomConfiguration::filter_size`] at call sites,
/// e.g. `3 * size::MEGA_BYTES`.
///
/// These are plain compile-time constants with no runtime behavior of their own.
pub mod size {
    /// One bit, the base unit of filter size.
    pub const BITS: i64 = 1;
    /// The byte multiplier is 128, not 8. Every stored filter layout depends on this
    /// value through the default filter size; changing it changes which bits existing
    /// inputs map to.
    pub const BYTES: i64 = 128 * BITS;
    /// 1024 bytes.
    pub const KILO_BYTES: i64 = 1024 * BYTES;
    /// 1024 kilobytes.
    pub const MEGA_BYTES: i64 = 1024 * KILO_BYTES;
}

/// The default filter size: 1 MB worth of bits.
pub const DEFAULT_FILTER_SIZE: i64 = size::MEGA_BYTES;

/// The default digest algorithms, applied in this order.
pub const DEFAULT_HASH_ALGORITHMS: [HashAlgorithm; 3] = [
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
];

/// Configuration consumed by [`crate::BloomFilter::with_configuration`].
///
/// Both fields may be set freely; no validation happens until a filter is constructed
/// from the configuration. A default configuration always produces a valid filter.
///
/// # Examples
///
/// ```
/// use bloom::config::size;
/// use bloom::config::BloomConfiguration;
///
/// let config = BloomConfiguration {
///     filter_size: 8 * size::BITS,
///     ..BloomConfiguration::default()
/// };
/// assert_eq!(config.filter_size, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomConfiguration {
    /// The length of the filter's bit array, in bits. Must be positive by the time a
    /// filter is constructed.
    pub filter_size: i64,
    /// The digest algorithms applied to each item, in order. Must be non-empty by the
    /// time a filter is constructed; with zero algorithms every membership query would
    /// be trivially true.
    pub hash_algorithms: Vec<HashAlgorithm>,
}

impl BloomConfiguration {
    /// Creates a configuration with the default filter size and algorithm list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for BloomConfiguration {
    fn default() -> Self {
        BloomConfiguration {
            filter_size: DEFAULT_FILTER_SIZE,
            hash_algorithms: DEFAULT_HASH_ALGORITHMS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_one_megabyte() {
        assert_eq!(DEFAULT_FILTER_SIZE, 134_217_728);
        assert_eq!(BloomConfiguration::default().filter_size, DEFAULT_FILTER_SIZE);
    }

    #[test]
    fn test_default_algorithm_order() {
        let config = BloomConfiguration::new();
        assert_eq!(
            config.hash_algorithms,
            vec![
                HashAlgorithm::Md5,
                HashAlgorithm::Sha1,
                HashAlgorithm::Sha256,
            ]
        );
    }

    #[test]
    fn test_size_multipliers() {
        assert_eq!(size::BITS, 1);
        assert_eq!(size::BYTES, 128);
        assert_eq!(size::KILO_BYTES, 131_072);
        assert_eq!(size::MEGA_BYTES, 134_217_728);
    }
}
