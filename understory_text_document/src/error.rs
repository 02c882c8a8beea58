// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the crate's raw-input boundaries.

use alloc::string::String;

/// Errors produced when converting untyped input into crate types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeric navigation kind outside the known range.
    #[error("invalid navigation kind: {0}")]
    InvalidNavigationKind(u8),
    /// A navigation kind name that does not match any known kind.
    #[error("unknown navigation kind name: {0:?}")]
    UnknownNavigationKindName(String),
}
