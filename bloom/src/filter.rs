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

use byteorder::ByteOrder;
use byteorder::LE;

use crate::config;
use crate::config::BloomConfiguration;
use crate::error::Error;
use crate::hash::HashAlgorithm;

const CHUNK_BYTES: usize = 8;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always return `true`)
/// - A bounded false positive rate
/// - Constant space usage
///
/// The bit array length and the digest algorithm list are fixed at construction; the
/// only mutation afterward is setting bits through [`add()`](Self::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array length, in bits. Positive.
    size: i64,
    /// One flag per bit position; the filter's entire persistent state.
    bits: Box<[bool]>,
    /// Digest algorithms applied to each item, in configured order.
    hash_algorithms: Vec<HashAlgorithm>,
}

impl BloomFilter {
    /// Creates a filter from the default configuration.
    ///
    /// Equivalent to `BloomFilter::with_configuration(BloomConfiguration::default())`,
    /// except that it cannot fail: the defaults are always valid.
    pub fn new() -> Self {
        Self::from_parts(
            config::DEFAULT_FILTER_SIZE,
            config::DEFAULT_HASH_ALGORITHMS.to_vec(),
        )
    }

    /// Creates a filter from a configuration, allocating an all-false bit array of
    /// `filter_size` bits.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfiguration`](crate::error::ErrorKind) when
    /// `filter_size` is zero or negative, or when `hash_algorithms` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloom::config::size;
    /// use bloom::config::BloomConfiguration;
    /// use bloom::BloomFilter;
    ///
    /// let config = BloomConfiguration {
    ///     filter_size: 8 * size::BITS,
    ///     ..BloomConfiguration::default()
    /// };
    /// let filter = BloomFilter::with_configuration(config)?;
    /// assert_eq!(filter.size(), 8);
    /// # Ok::<(), bloom::error::Error>(())
    /// ```
    pub fn with_configuration(configuration: BloomConfiguration) -> Result<Self, Error> {
        if configuration.filter_size <= 0 {
            return Err(
                Error::invalid_configuration("filter size must be positive")
                    .with_context("filter_size", configuration.filter_size),
            );
        }
        if configuration.hash_algorithms.is_empty() {
            return Err(Error::invalid_configuration(
                "at least one hash algorithm is required",
            ));
        }

        Ok(Self::from_parts(
            configuration.filter_size,
            configuration.hash_algorithms,
        ))
    }

    fn from_parts(size: i64, hash_algorithms: Vec<HashAlgorithm>) -> Self {
        let bits = vec![false; size as usize].into_boxed_slice();
        BloomFilter {
            size,
            bits,
            hash_algorithms,
        }
    }

    /// Adds an item to the filter.
    ///
    /// After adding, [`contains()`](Self::contains) for the same bytes will always
    /// return `true`. Adding an item twice is a no-op for the bit array; bits are never
    /// cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloom::BloomFilter;
    /// let mut filter = BloomFilter::new();
    /// filter.add(b"apple");
    /// assert!(filter.contains(b"apple"));
    /// ```
    pub fn add(&mut self, item: &[u8]) {
        let indices: Vec<usize> = self
            .hash_algorithms
            .iter()
            .map(|algorithm| self.index_for(*algorithm, item))
            .collect();
        for index in indices {
            self.bits[index] = true;
        }
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: item was **possibly** added (or is a false positive)
    /// - `false`: item was **definitely not** added
    ///
    /// Indices are checked in configured algorithm order and the scan stops at the
    /// first unset bit. Never mutates the filter.
    pub fn contains(&self, item: &[u8]) -> bool {
        self.hash_algorithms
            .iter()
            .all(|algorithm| self.bits[self.index_for(*algorithm, item)])
    }

    /// Returns the bit array length, in bits.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Returns the filter's bit array.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the configured digest algorithms, in application order.
    pub fn hash_algorithms(&self) -> &[HashAlgorithm] {
        &self.hash_algorithms
    }

    /// Computes the bit index an algorithm maps `item` to.
    ///
    /// The digest is folded to a single signed 64-bit value and reduced with
    /// `abs(folded % size)`. `size` is positive, so the remainder's magnitude is
    /// strictly below it and the result always lands in `[0, size)`.
    fn index_for(&self, algorithm: HashAlgorithm, item: &[u8]) -> usize {
        let digest = algorithm.digest(item);
        let folded = fold_digest(&digest);
        let index = (folded % self.size).unsigned_abs() as usize;
        debug_assert!(index < self.size as usize);
        index
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds a digest into a single signed 64-bit value by summing consecutive 8-byte
/// chunks, each read as a little-endian `i64`, with wrapping addition.
///
/// A final chunk shorter than 8 bytes is zero-padded and contributes only its first
/// `remaining - 1` bytes: the trailing byte of a partial chunk never reaches the sum.
/// Every existing filter's bit layout was produced with that byte dropped, so it must
/// stay dropped.
fn fold_digest(digest: &[u8]) -> i64 {
    let mut result: i64 = 0;
    let mut offset = 0;

    while offset < digest.len() {
        let remaining = digest.len() - offset;
        let mut chunk = [0u8; CHUNK_BYTES];

        if remaining < CHUNK_BYTES {
            // Clamped so short tails (fewer than 4 bytes) stay in bounds; no digest
            // produced by HashAlgorithm has such a tail.
            let keep = (CHUNK_BYTES - remaining - 1).min(remaining);
            chunk[..keep].copy_from_slice(&digest[offset..offset + keep]);
            result = result.wrapping_add(LE::read_i64(&chunk));
            break;
        }

        chunk.copy_from_slice(&digest[offset..offset + CHUNK_BYTES]);
        result = result.wrapping_add(LE::read_i64(&chunk));
        offset += CHUNK_BYTES;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_empty_digest() {
        assert_eq!(fold_digest(&[]), 0);
    }

    #[test]
    fn test_fold_single_full_chunk() {
        // Eight 0xff bytes read as little-endian i64 are -1.
        assert_eq!(fold_digest(&[0xff; 8]), -1);
        assert_eq!(fold_digest(&1i64.to_le_bytes()), 1);
    }

    #[test]
    fn test_fold_sums_full_chunks() {
        let mut digest = [0u8; 16];
        digest[..8].copy_from_slice(&3i64.to_le_bytes());
        digest[8..].copy_from_slice(&4i64.to_le_bytes());
        assert_eq!(fold_digest(&digest), 7);
    }

    #[test]
    fn test_fold_wraps_on_overflow() {
        let mut digest = [0u8; 16];
        digest[..8].copy_from_slice(&i64::MAX.to_le_bytes());
        digest[8..].copy_from_slice(&1i64.to_le_bytes());
        assert_eq!(fold_digest(&digest), i64::MIN);
    }

    #[test]
    fn test_fold_drops_last_byte_of_partial_tail() {
        // A 20-byte digest (the SHA-1 length) ends in a 4-byte tail; only the first
        // three tail bytes contribute.
        let mut digest = [0u8; 20];
        digest[16..].copy_from_slice(&[0x01, 0x02, 0x03, 0xff]);
        assert_eq!(fold_digest(&digest), 0x0003_0201);

        let mut other = digest;
        other[19] = 0x00;
        assert_eq!(fold_digest(&other), fold_digest(&digest));
    }

    #[test]
    fn test_fold_exact_multiple_of_chunk_has_no_truncation() {
        // 16- and 32-byte digests consist solely of full chunks; the last chunk's
        // final byte counts.
        let mut digest = [0u8; 16];
        digest[15] = 0x80;
        assert_eq!(fold_digest(&digest), i64::MIN);
    }

    #[test]
    fn test_index_always_in_bounds() {
        let filter = BloomFilter::from_parts(7, config::DEFAULT_HASH_ALGORITHMS.to_vec());
        let items: [&[u8]; 6] = [b"", b"a", b"short", b"exactly8", b"TestString", &[0xff; 64]];
        for item in items {
            for algorithm in filter.hash_algorithms() {
                assert!(filter.index_for(*algorithm, item) < 7);
            }
        }
    }
}
