// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

#![doc = include_str!("../README.md")]

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use memmap2::Mmap;
use sigscan::{Error, Limits, SignatureLocator, MIN_INPUT_LEN};

mod report;
use report::SignatureReport;
mod settings;
use settings::load_settings;
mod tree;

const DEFAULT_OUTPUT: &str = "signature.der";

/// Search a file for an appended ASN.1 signature (0x30 0x82), from the end
/// backwards.
#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct CliArgs {
    /// Path to the file to analyze.
    path: PathBuf,

    /// Save the signature to signature.der.
    #[arg(short, long)]
    save: bool,

    /// Save the signature to this file instead.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of output if it already exists.
    #[arg(short, long)]
    force: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Print the decoded structure as a tree diagram.
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Path to a TOML file with decoder limits (max_depth, max_elements).
    #[arg(long, env = "SIGSCAN_SETTINGS")]
    settings: Option<PathBuf>,

    /// Use verbose output (-vv very verbose output).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl CliArgs {
    fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, self.save) {
            (Some(output), _) => Some(output.clone()),
            (None, true) => Some(PathBuf::from(DEFAULT_OUTPUT)),
            (None, false) => None,
        }
    }
}

// RUST_LOG always wins over -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Maps `path` read-only so large inputs are scanned in place.
fn load_file(path: &Path) -> Result<Mmap> {
    let file = File::open(path).with_context(|| format!("Failed to read file: {path:?}"))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to read file: {path:?}"))?
        .len();
    if len < MIN_INPUT_LEN as u64 {
        return Err(Error::FileTooSmall { len: len as usize }.into());
    }

    // SAFETY: the map is read-only and lives no longer than `main`; the
    // file must not be truncated by another process while it is scanned.
    let data = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map file: {path:?}"))?;
    if data.len() < MIN_INPUT_LEN {
        return Err(Error::FileTooSmall { len: data.len() }.into());
    }
    log::info!("mapped {} bytes from {path:?}", data.len());
    Ok(data)
}

fn save_der(output: &Path, bytes: &[u8], force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!("Output already exists, use -f/force to force write");
    }

    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {dir:?}"))?;
    }

    fs::write(output, bytes).with_context(|| format!("Failed to write output: {output:?}"))
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let limits = match &args.settings {
        Some(path) => load_settings(path)?,
        None => Limits::default(),
    };

    let data = load_file(&args.path)?;
    let found = SignatureLocator::new().with_limits(limits).locate(&data[..])?;

    let report = SignatureReport::new(args.path.display().to_string(), &found);
    if args.json {
        println!("{}", report.to_json()?);
    } else if args.tree {
        match &report.structure {
            Some(lines) => println!("{}", tree::tree(&report.path, lines)),
            None => bail!(
                "Error parsing ASN.1 structure: {}",
                report.structure_error.as_deref().unwrap_or("unknown")
            ),
        }
    } else {
        println!("{report}");
    }

    if let Some(output) = args.output_path() {
        save_der(&output, found.bytes(), args.force)?;
        if args.json {
            log::info!("ASN.1 structure saved to: {}", output.display());
        } else {
            println!("ASN.1 structure saved to: {}", output.display());
        }
    }

    Ok(())
}
