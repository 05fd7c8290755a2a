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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod asn1;
pub use asn1::{
    decode_element, decode_oid, format_content, oid_name, tag_name, DecodeError, Element, Limits,
};

mod error;
pub use error::{Error, Result};

pub mod fields;
pub use fields::{extract_fields, CertAttribute, ValidationResult};

mod key_size;
pub use key_size::{estimate_key_size, estimate_key_size_with_limits};

mod locator;
pub use locator::{locate_signature, SignatureLocator, SignatureMatch, SIGNATURE_MARKER};

pub mod structure;
pub use structure::{list_structure, StructureLine};

/// Smallest input worth scanning: a two byte header plus at least
/// two bytes of content.
pub const MIN_INPUT_LEN: usize = 4;

/// The internal name of this crate
pub const NAME: &str = "sigscan";
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod tests;
