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

use clap::Parser;
use log::{error, info};
use osci::core::emulator::N_REG;
use osci::core::error::Result;
use osci::core::{load_image_file, Emulator};
use std::io::{self, BufRead, Write as _};

/// osci: a 32-bit SUBLEQ-style one-instruction-set computer emulator
#[derive(Parser)]
#[command(name = "osci")]
#[command(about = "osci one-instruction-set computer emulator", long_about = None)]
struct Args {
    /// Path to the BIOS image
    #[arg(short = 'b', long)]
    bios: Option<String>,

    /// Path to the main memory image
    #[arg(short = 'i', long)]
    image: Option<String>,

    /// Print version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Interactive step mode instead of free-run mode
    #[arg(short = 's', long)]
    step: bool,
}

fn format_state(emu: &Emulator) -> Result<String> {
    let mut out = format!("ip: {:08x}, ", emu.ip());
    for i in 0..N_REG as u8 {
        out.push_str(&format!("r{}: {:08x}, ", i, emu.register(i)? as u32));
    }
    Ok(out)
}

fn run_mode(emu: &mut Emulator) -> Result<()> {
    while !emu.is_halted()? {
        print!("\x1b[u\x1b[s");
        print!("{}", format_state(emu)?);
        io::stdout().flush().ok();
        if let Err(e) = emu.step() {
            error!("step failed at ip=0x{:08x}: {}", emu.ip(), e);
            return Err(e);
        }
    }
    println!();
    Ok(())
}

fn step_mode(emu: &mut Emulator) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        match line.trim() {
            "exit" => break,
            "step" => {
                emu.step()?;
                println!("{}", format_state(emu)?);
            }
            other => println!("Unknown command \"{}\"", other),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if args.version {
        println!("osci {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (Some(bios_path), Some(image_path)) = (&args.bios, &args.image) else {
        eprintln!("osci: -b/--bios and -i/--image are required");
        std::process::exit(1);
    };

    info!("osci v{}", env!("CARGO_PKG_VERSION"));
    info!("loading BIOS from: {}", bios_path);
    info!("loading image from: {}", image_path);

    let bios = load_image_file(bios_path)?;
    let main_image = load_image_file(image_path)?;

    let mut emu = Emulator::new(Box::new(main_image), Box::new(bios))?;

    if args.step {
        step_mode(&mut emu)
    } else {
        run_mode(&mut emu)
    }
}
