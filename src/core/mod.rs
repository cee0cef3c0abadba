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

//! Core emulation components
//!
//! This module contains the one-instruction-set computer itself:
//! - memory (the `MemoryInterface` trait and its `ArrayMemory`/
//!   `MappedMemory`/`ZeroMemory` implementations)
//! - instruction (the SUBLEQ fetch/execute step)
//! - emulator (wiring memory + instruction into a runnable machine)
//! - loader (reading a memory image off disk)

pub mod emulator;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod memory;

pub use emulator::Emulator;
pub use error::{EmulatorError, Result};
pub use instruction::Instruction;
pub use loader::load_image_file;
pub use memory::{ArrayMemory, MappedMemory, MemoryInterface, ZeroMemory};
