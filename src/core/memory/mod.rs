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

//! The layered memory subsystem.
//!
//! `MemoryInterface` is the one abstraction boundary in this crate: a
//! byte-addressable handle with `size`/`get`/`set`. `ArrayMemory` is the
//! only thing that actually owns bytes; `mapped::MappedMemory` composes
//! several interfaces into one sparse address space, and
//! `zero::ZeroMemory` turns out-of-range accesses into no-ops. The
//! little-endian word codec (`write_int`/`read_int`) sits on top of any
//! `MemoryInterface`.
//!
//! # Example
//!
//! ```
//! use osci::core::memory::{ArrayMemory, MemoryInterface, write_int, read_int};
//!
//! let mut m = ArrayMemory::new(16);
//! write_int(&mut m, 0, -116).unwrap();
//! assert_eq!(read_int(&m, 0).unwrap(), -116);
//! ```

pub mod mapped;
pub mod zero;

pub use mapped::MappedMemory;
pub use zero::ZeroMemory;

use crate::core::error::{EmulatorError, Result};

/// A byte-addressable memory handle.
///
/// Implementors: `ArrayMemory` (owns a fixed buffer), `MappedMemory`
/// (multiplexes several `MemoryInterface`s over disjoint ranges),
/// `ZeroMemory` (zero-fill fallback wrapper), and `Emulator` itself.
pub trait MemoryInterface {
    /// Number of addressable bytes.
    fn size(&self) -> u32;

    /// Read the byte at `addr`.
    fn get(&self, addr: u32) -> Result<u8>;

    /// Write `value` at `addr`.
    fn set(&mut self, addr: u32, value: u8) -> Result<()>;
}

/// Writes `v` as four little-endian bytes at `addr..addr+4`.
pub fn write_int(m: &mut dyn MemoryInterface, addr: u32, v: i32) -> Result<()> {
    for (i, byte) in v.to_le_bytes().into_iter().enumerate() {
        m.set(addr.wrapping_add(i as u32), byte)?;
    }
    Ok(())
}

/// Reads four little-endian bytes at `addr..addr+4` and reassembles them.
pub fn read_int(m: &dyn MemoryInterface, addr: u32) -> Result<i32> {
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = m.get(addr.wrapping_add(i as u32))?;
    }
    Ok(i32::from_le_bytes(bytes))
}

/// A fixed-size, owned byte buffer.
pub struct ArrayMemory {
    data: Vec<u8>,
}

impl ArrayMemory {
    /// Allocates `size` zero-filled bytes.
    pub fn new(size: u32) -> Self {
        Self {
            data: vec![0u8; size as usize],
        }
    }

    /// Builds an `ArrayMemory` directly from file bytes: `size == bytes.len()`,
    /// cell `i` is `bytes[i]`, no header.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { data: bytes }
    }
}

impl MemoryInterface for ArrayMemory {
    fn size(&self) -> u32 {
        self.data.len() as u32
    }

    fn get(&self, addr: u32) -> Result<u8> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(EmulatorError::OutOfRange { address: addr })
    }

    fn set(&mut self, addr: u32, value: u8) -> Result<()> {
        match self.data.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(EmulatorError::OutOfRange { address: addr }),
        }
    }
}
