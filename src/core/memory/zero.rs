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

//! Zero-fill fallback wrapper.

use crate::core::error::{EmulatorError, Result};
use crate::core::memory::MemoryInterface;

/// Recovers `OutOfRange` into `default`; propagates every other error.
///
/// Shared between `ZeroMemory`'s own `get`/`set` and `Emulator`, which
/// needs the identical recovery rule over its mapped memory without
/// also owning a second handle to it.
pub(crate) fn recover_out_of_range<T>(result: Result<T>, default: T) -> Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(EmulatorError::OutOfRange { .. }) => Ok(default),
        Err(e) => Err(e),
    }
}

/// Wraps one inner memory; out-of-range reads become `0`, out-of-range
/// writes are silently dropped. Any other error propagates.
pub struct ZeroMemory {
    inner: Box<dyn MemoryInterface>,
}

impl ZeroMemory {
    /// Wraps `inner`.
    pub fn new(inner: Box<dyn MemoryInterface>) -> Self {
        Self { inner }
    }
}

impl MemoryInterface for ZeroMemory {
    fn size(&self) -> u32 {
        self.inner.size()
    }

    fn get(&self, addr: u32) -> Result<u8> {
        recover_out_of_range(self.inner.get(addr), 0)
    }

    fn set(&mut self, addr: u32, value: u8) -> Result<()> {
        recover_out_of_range(self.inner.set(addr, value), ())
    }
}
