// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cache test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: geometry validation, hit/miss bookkeeping, counter invariants
//! - `lru`: LRU eviction order, timestamp refresh, tie-breaking
//! - `writeback`: dirty marking and write-back accounting
//! - `hierarchy`: configuration, L1/L2 routing, cost


use super::Cache;

/// 1 KiB direct-mapped cache with 16-byte blocks
fn direct_mapped_cache() -> Cache {
    Cache::new(1024, 16, 1, true).unwrap()
}

/// 1 KiB fully associative cache with 16-byte blocks (64 ways)
fn associative_cache() -> Cache {
    Cache::new(1024, 16, 64, true).unwrap()
}
