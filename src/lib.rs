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

//! Core library for the osci one-instruction-set computer emulator.
//!
//! osci is a 32-bit SUBLEQ-style machine: the only operation is
//! "subtract and branch if the result is `<= 0`". Everything else —
//! halting, BIOS unmapping, register inspection — is expressed as
//! memory-mapped side effects of that one instruction.
//!
//! # Example
//!
//! ```
//! use osci::core::{ArrayMemory, Emulator, MemoryInterface};
//!
//! let main = ArrayMemory::new(64);
//! let bios = ArrayMemory::new(64);
//! let emu = Emulator::new(Box::new(main), Box::new(bios)).unwrap();
//! assert!(!emu.is_halted().unwrap());
//! ```

pub mod core;
