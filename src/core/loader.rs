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

//! Reads a raw memory image off disk.
//!
//! Image files have no header: `size == file length`, cell `i` is the
//! file's byte `i`. A failed load is treated as fatal, not as an empty
//! memory the emulator would fault against on first fetch.

use super::error::Result;
use super::memory::ArrayMemory;
use std::fs;

/// Reads the whole file at `path` into an [`ArrayMemory`].
pub fn load_image_file(path: &str) -> Result<ArrayMemory> {
    let bytes = fs::read(path)?;
    log::info!("loaded image {} ({} bytes)", path, bytes.len());
    Ok(ArrayMemory::from_bytes(bytes))
}
