// Copyright 2025 Adobe. All rights reserved.
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

use std::{fs, path::Path};

use anyhow::{Context, Result};
use sigscan::Limits;

/// Load walk limits from a TOML file.
///
/// ```toml
/// max_depth = 32
/// max_elements = 5000
/// ```
///
/// Keys that are left out keep their default values.
pub fn load_settings(path: &Path) -> Result<Limits> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from path: {path:?}"))?;
    from_toml(&text).with_context(|| format!("Invalid settings file: {path:?}"))
}

fn from_toml(text: &str) -> Result<Limits> {
    let limits: Limits = toml::from_str(text)?;
    log::debug!(
        "loaded settings: max_depth={} max_elements={}",
        limits.max_depth,
        limits.max_elements
    );
    Ok(limits)
}
