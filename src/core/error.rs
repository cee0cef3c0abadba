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

//! Emulator error types

use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Emulator error types
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// An address fell outside the memory it was accessed through.
    #[error("out-of-range access at address 0x{address:08X}")]
    OutOfRange {
        /// The address that was accessed
        address: u32,
    },

    /// A `MappedMemory::map` call would have overlapped an existing mapping.
    #[error("range conflict: [0x{start:08X}, 0x{end:08X}) overlaps an existing mapping")]
    RangeConflict {
        /// Start of the interval that could not be mapped
        start: u32,
        /// End (exclusive) of the interval that could not be mapped
        end: u32,
    },

    /// `MappedMemory::unmap` was called with a `start_addr` that has no mapping.
    #[error("no mapping starts at address 0x{start:08X}")]
    NoSuchMapping {
        /// The address that was looked up
        start: u32,
    },

    /// A flag-region offset was touched that has no defined semantics.
    #[error("invalid flag access at address 0x{address:08X}")]
    InvalidFlagAccess {
        /// The address that was accessed
        address: u32,
    },

    /// A memory image file could not be used to build an `ArrayMemory`.
    #[error("invalid image file: {path}")]
    InvalidImage {
        /// Path of the offending image file
        path: String,
    },

    /// I/O error while loading a memory image from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
