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

//! Property tests for invariants that hold universally rather than
//! only for the literal fixed-input scenarios in the other test files.

use osci::core::instruction::{Instruction, INSTRUCTION_SIZE};
use osci::core::memory::{read_int, write_int, ArrayMemory};
use proptest::prelude::*;

proptest! {
    #[test]
    fn codec_round_trip_holds_for_any_i32(v in any::<i32>(), addr in 0u32..60) {
        let mut m = ArrayMemory::new(64);
        write_int(&mut m, addr, v).unwrap();
        prop_assert_eq!(read_int(&m, addr).unwrap(), v);
    }

    #[test]
    fn instruction_round_trip_holds_for_arbitrary_fields(
        operand_a in any::<u32>(),
        operand_b in any::<u32>(),
        target in any::<u32>(),
        jmp in any::<u32>(),
    ) {
        let inst = Instruction { operand_a, operand_b, target, jmp };
        let mut m = ArrayMemory::new(INSTRUCTION_SIZE);
        inst.write_to(&mut m, 0).unwrap();
        prop_assert_eq!(Instruction::read_from(&m, 0).unwrap(), inst);
    }

    /// After `execute` with `diff <= 0`, the new `ip` satisfies
    /// `ip % INSTRUCTION_SIZE == 0 && ip >= jmp && ip - jmp <
    /// INSTRUCTION_SIZE` for any `jmp`.
    #[test]
    fn jump_alignment_invariant_holds_for_any_jmp(jmp in any::<u32>()) {
        // operand_a == operand_b == 0 so diff is always 0, taking the
        // jump branch unconditionally.
        let mut m = ArrayMemory::new(INSTRUCTION_SIZE);
        Instruction { operand_a: 0, operand_b: 0, target: 0, jmp }
            .write_to(&mut m, 0)
            .unwrap();

        let mut ip = 0u32;
        Instruction::execute(&mut m, &mut ip).unwrap();

        prop_assert_eq!(ip % INSTRUCTION_SIZE, 0);
        prop_assert!(ip as u64 >= jmp as u64);
        prop_assert!((ip as u64 - jmp as u64) < INSTRUCTION_SIZE as u64);
    }
}
