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

//! Custom assertions for osci emulator testing

use osci::core::memory::read_int;
use osci::core::{Emulator, MemoryInterface};

/// Assert the instruction pointer is at the expected address.
#[allow(dead_code)]
pub fn assert_ip(emu: &Emulator, expected: u32) {
    let actual = emu.ip();
    assert_eq!(
        actual, expected,
        "ip mismatch: expected 0x{:08X}, got 0x{:08X}",
        expected, actual
    );
}

/// Assert the `i32` word at `addr` matches `expected`.
#[allow(dead_code)]
pub fn assert_memory_word(emu: &Emulator, addr: u32, expected: i32) {
    let actual = read_int(emu, addr).expect("failed to read memory word");
    assert_eq!(
        actual, expected,
        "memory at 0x{:08X} mismatch: expected {}, got {}",
        addr, expected, actual
    );
}

/// Assert register `i` matches `expected`.
#[allow(dead_code)]
pub fn assert_register(emu: &Emulator, i: u8, expected: i32) {
    let actual = emu.register(i).expect("failed to read register");
    assert_eq!(
        actual, expected,
        "register {} mismatch: expected {}, got {}",
        i, expected, actual
    );
}
