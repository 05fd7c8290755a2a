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

use std::fmt;

use serde::Serialize;
use sigscan::{CertAttribute, SignatureMatch, StructureLine, ValidationResult};

const RULE: &str = "========================================";

/// Everything the tool reports about a located signature.
#[derive(Debug, Serialize)]
pub struct SignatureReport {
    pub path: String,
    pub offset: usize,
    pub size: usize,
    pub valid: bool,
    pub fields: ValidationResult,
    pub key_size: Option<usize>,

    /// Decoded listing, or the reason the block could not be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<Vec<StructureLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_error: Option<String>,

    #[serde(skip)]
    raw_hex: String,
}

impl SignatureReport {
    pub fn new(path: impl Into<String>, found: &SignatureMatch<'_>) -> Self {
        let (structure, structure_error) = match found.structure() {
            Ok(lines) => (Some(lines), None),
            Err(err) => (None, Some(err.to_string())),
        };
        let key_size = match found.key_size() {
            0 => None,
            bits => Some(bits),
        };

        Self {
            path: path.into(),
            offset: found.offset(),
            size: found.len(),
            valid: found.validation().is_valid(),
            fields: found.validation().clone(),
            key_size,
            structure,
            structure_error,
            raw_hex: hex::encode(found.bytes()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Signature Validation:")?;
        for attr in CertAttribute::ALL {
            match self.fields.get(attr) {
                Some(value) => writeln!(f, "  {attr}: true ({value})")?,
                None => writeln!(f, "  {attr}: false")?,
            }
        }
        if self.valid {
            writeln!(f, "\u{2713} Valid signature - all required fields present")
        } else {
            writeln!(f, "\u{2717} Invalid signature - missing required fields")
        }
    }
}

impl fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzing file: {}", self.path)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Valid ASN.1 signature found at offset {}", self.offset)?;
        writeln!(f, "Structure size: {} bytes", self.size)?;
        self.write_fields(f)?;
        writeln!(f, "{RULE}")?;

        match (&self.structure, &self.structure_error) {
            (Some(lines), _) => {
                for line in lines {
                    writeln!(f, "{line}")?;
                }
            }
            (None, error) => {
                writeln!(
                    f,
                    "Error parsing ASN.1 structure: {}",
                    error.as_deref().unwrap_or("unknown")
                )?;
                writeln!(f, "Raw data (hex): {}", self.raw_hex)?;
            }
        }

        match self.key_size {
            Some(bits) => writeln!(f, "Key size calculation: {bits} bits")?,
            None => writeln!(
                f,
                "Key size calculation: N/A (no OCTET STRING found as final element)"
            )?,
        }
        write!(f, "{RULE}")
    }
}
