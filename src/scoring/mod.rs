// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relatedness scoring: which writings to suggest at the bottom of a page.
//!
//! Two signals. Shared tags are weak evidence and count 2 each. A backlink,
//! in either direction, is the author saying "these belong together" and
//! counts 3. Candidates scoring zero are never suggested.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_related, related_to, DEFAULT_RELATED_LIMIT};
