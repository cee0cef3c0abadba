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

//! Test fixtures for common test scenarios

use osci::core::emulator::BIOS_BOUND;
use osci::core::instruction::{Instruction, INSTRUCTION_SIZE};
use osci::core::memory::{write_int, ArrayMemory, MemoryInterface};
use osci::core::Emulator;

/// Builds an `Emulator` with `ram_size` bytes of zeroed RAM and a BIOS
/// image large enough to hold `program`, which is written starting at
/// `BIOS_BOUND`.
#[allow(dead_code)]
pub fn emulator_with_bios_program(ram_size: u32, program: &[Instruction]) -> Emulator {
    let bios_size = program.len() as u32 * INSTRUCTION_SIZE;
    let mut bios = ArrayMemory::new(bios_size);
    for (i, inst) in program.iter().enumerate() {
        inst.write_to(&mut bios, i as u32 * INSTRUCTION_SIZE)
            .expect("failed to write instruction into BIOS fixture");
    }
    Emulator::new(Box::new(ArrayMemory::new(ram_size)), Box::new(bios))
        .expect("failed to construct fixture emulator")
}

/// Writes a sequence of `i32` words into RAM starting at `addr`.
#[allow(dead_code)]
pub fn load_ram_words(emu: &mut Emulator, addr: u32, words: &[i32]) {
    for (i, &w) in words.iter().enumerate() {
        write_int(emu, addr + (i as u32) * 4, w).expect("failed to write RAM fixture word");
    }
}

/// Runs `emu` until `is_halted()` or `max_steps` is reached, returning
/// the number of steps actually taken.
#[allow(dead_code)]
pub fn run_until_halt_or_limit(emu: &mut Emulator, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && !emu.is_halted().expect("is_halted fault") {
        emu.step().expect("step fault");
        steps += 1;
    }
    steps
}

#[allow(dead_code)]
pub const BIOS_ENTRY: u32 = BIOS_BOUND;
