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

//! Bloom filter for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was added, [`BloomFilter::contains`] will always
//!   return `true`
//! - **Possible false positives**: [`BloomFilter::contains`] may return `true` for items
//!   never added
//! - **Fixed size**: The bit array is allocated at construction and never resizes
//! - **Deterministic**: Identical configuration and input bytes always produce the same
//!   bit indices
//!
//! # Usage
//!
//! ```rust
//! use bloom::config::size;
//! use bloom::config::BloomConfiguration;
//! use bloom::BloomFilter;
//!
//! let config = BloomConfiguration {
//!     filter_size: 64 * size::BITS,
//!     ..BloomConfiguration::default()
//! };
//! let mut filter = BloomFilter::with_configuration(config)?;
//!
//! filter.add(b"apple");
//! filter.add(b"banana");
//!
//! assert!(filter.contains(b"apple")); // true - definitely added
//! assert!(!filter.contains(b"grape")); // false - never added (probably)
//! # Ok::<(), bloom::error::Error>(())
//! ```
//!
//! The filter hashes each item with every configured [`hash::HashAlgorithm`], folds each
//! digest into a single signed 64-bit value, and reduces that value to a bit index within
//! the filter bounds. [`BloomFilter::add`] sets the bits at those indices;
//! [`BloomFilter::contains`] reports whether all of them are set.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;

mod filter;

pub use self::filter::BloomFilter;
