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

//! The single SUBLEQ-style instruction this machine executes.

use crate::core::memory::{read_int, write_int, MemoryInterface};
use crate::core::Result;

/// Size in bytes of one encoded 32-bit field.
pub const WORD_SIZE: u32 = 4;

/// Size in bytes of one instruction: four words.
pub const INSTRUCTION_SIZE: u32 = 4 * WORD_SIZE;

/// `operand_a, operand_b, target, jmp` — four 32-bit little-endian
/// words at offsets 0, 4, 8, 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Instruction {
    /// Address of the minuend.
    pub operand_a: u32,
    /// Address of the subtrahend.
    pub operand_b: u32,
    /// Address the difference is written to.
    pub target: u32,
    /// Address to jump to (rounded up to the next instruction boundary)
    /// when the difference is `<= 0`.
    pub jmp: u32,
}

impl Instruction {
    /// Reads the four fields at `addr..addr+INSTRUCTION_SIZE`.
    pub fn read_from(m: &dyn MemoryInterface, addr: u32) -> Result<Self> {
        Ok(Self {
            operand_a: read_int(m, addr)? as u32,
            operand_b: read_int(m, addr.wrapping_add(WORD_SIZE))? as u32,
            target: read_int(m, addr.wrapping_add(2 * WORD_SIZE))? as u32,
            jmp: read_int(m, addr.wrapping_add(3 * WORD_SIZE))? as u32,
        })
    }

    /// Writes the four fields at `addr..addr+INSTRUCTION_SIZE`.
    pub fn write_to(&self, m: &mut dyn MemoryInterface, addr: u32) -> Result<()> {
        write_int(m, addr, self.operand_a as i32)?;
        write_int(m, addr.wrapping_add(WORD_SIZE), self.operand_b as i32)?;
        write_int(m, addr.wrapping_add(2 * WORD_SIZE), self.target as i32)?;
        write_int(m, addr.wrapping_add(3 * WORD_SIZE), self.jmp as i32)?;
        Ok(())
    }

    /// Fetches the instruction at `*ip`, executes it against `m`, and
    /// advances `*ip` per the jump rule.
    ///
    /// Ordering matters and is observable: fetch, then operand reads,
    /// then the target write (which may trigger side effects if `m` is
    /// an `Emulator` and `target` lands in its flag region), then the
    /// `ip` update. `ip` is left unmodified if the fetch itself fails.
    pub fn execute(m: &mut dyn MemoryInterface, ip: &mut u32) -> Result<()> {
        let inst = Self::read_from(m, *ip)?;

        let a = read_int(m, inst.operand_a)?;
        let b = read_int(m, inst.operand_b)?;
        let diff = a.wrapping_sub(b);

        write_int(m, inst.target, diff)?;

        *ip = if diff <= 0 {
            ceil_to_instruction(inst.jmp)
        } else {
            ip.wrapping_add(INSTRUCTION_SIZE)
        };

        Ok(())
    }
}

/// Rounds `addr` up to the next multiple of `INSTRUCTION_SIZE`.
///
/// Uses `u64` intermediate arithmetic so the rounding is correct even
/// for `addr` near `u32::MAX`.
fn ceil_to_instruction(addr: u32) -> u32 {
    let addr = addr as u64;
    let size = INSTRUCTION_SIZE as u64;
    (addr.div_ceil(size) * size) as u32
}
