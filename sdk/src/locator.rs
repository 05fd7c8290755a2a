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

//! Backward search for an appended signature block.
//!
//! Signatures are appended after the primary content of a file, so the
//! search starts at the end and works towards the front. Only the
//! `30 82` marker (a SEQUENCE whose length takes two octets) is
//! considered: every realistic certificate or signature block is at least
//! 256 bytes, and the narrower marker skips most incidental `0x30` bytes in
//! code and data.
//!
//! A candidate is accepted when it decodes as a complete element *and*
//! carries all five signer attributes (see [`crate::fields`]). A structure
//! that merely decodes is not enough.
//!
//! The first acceptable candidate found, which is the rightmost one in the
//! buffer, is returned. Files with several nested or overlapping signature
//! blocks get whichever is found first; this is a heuristic and does not
//! identify "the" signature in any stronger sense.

use log::{debug, trace};

use crate::{
    asn1::{decode_element, Limits},
    fields::{extract_fields_with_limits, ValidationResult},
    key_size::estimate_key_size_with_limits,
    structure::{list_structure_with_limits, StructureLine},
    DecodeError, Error, Result,
};

/// Identifier and first length octet that open a candidate signature.
pub const SIGNATURE_MARKER: [u8; 2] = [0x30, 0x82];

/// A signature block accepted by [`SignatureLocator::locate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureMatch<'a> {
    offset: usize,
    bytes: &'a [u8],
    validation: ValidationResult,
    limits: Limits,
}

impl<'a> SignatureMatch<'a> {
    /// Absolute offset of the block in the searched buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The block itself, header and content, borrowed from the searched
    /// buffer. This is what gets written out as a `.der` file.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// See [`crate::estimate_key_size`].
    pub fn key_size(&self) -> usize {
        estimate_key_size_with_limits(self.bytes, self.limits)
    }

    /// Decoded listing of the block with offsets relative to the start of
    /// the searched buffer.
    pub fn structure(&self) -> std::result::Result<Vec<StructureLine>, DecodeError> {
        list_structure_with_limits(self.bytes, self.offset, self.limits)
    }
}

/// Searches a buffer for a signature block.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureLocator {
    limits: Limits,
}

impl SignatureLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `limits` when walking each candidate (builder pattern).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Scan `buffer` backwards for the rightmost complete signature block.
    ///
    /// Returns [`Error::NoSignatureFound`] if no candidate both decodes and
    /// carries every required attribute.
    pub fn locate<'a>(&self, buffer: &'a [u8]) -> Result<SignatureMatch<'a>> {
        let last_start = buffer.len().saturating_sub(1);

        for offset in (0..last_start).rev() {
            let Some(window) = buffer.get(offset..) else {
                continue;
            };
            if !window.starts_with(&SIGNATURE_MARKER) {
                continue;
            }

            match self.try_candidate(window, offset) {
                Ok(found) => {
                    debug!(
                        "signature accepted at offset {offset} ({} bytes)",
                        found.bytes.len()
                    );
                    return Ok(found);
                }
                Err(reason) => trace!("candidate at offset {offset} rejected: {reason}"),
            }
        }

        Err(Error::NoSignatureFound)
    }

    fn try_candidate<'a>(
        &self,
        window: &'a [u8],
        offset: usize,
    ) -> std::result::Result<SignatureMatch<'a>, Rejection> {
        let (_, consumed) = decode_element(window, 0, offset).map_err(Rejection::Decode)?;
        let bytes = window.get(..consumed).ok_or(Rejection::Decode(
            DecodeError::TruncatedContent,
        ))?;

        let validation = extract_fields_with_limits(bytes, self.limits);
        if !validation.is_valid() {
            return Err(Rejection::Incomplete(validation));
        }

        Ok(SignatureMatch {
            offset,
            bytes,
            validation,
            limits: self.limits,
        })
    }
}

/// Search `buffer` with default limits. See [`SignatureLocator::locate`].
///
/// # Examples
///
/// ```
/// use sigscan::{locate_signature, Error};
///
/// // A SEQUENCE { INTEGER 1 } padded out: decodes, but names no signer.
/// let data = [0xde, 0xad, 0x30, 0x82, 0x00, 0x08, 0x30, 0x03, 0x02, 0x01, 0x01, 0x05, 0x00, 0x05];
/// assert_eq!(locate_signature(&data), Err(Error::NoSignatureFound));
/// ```
pub fn locate_signature(buffer: &[u8]) -> Result<SignatureMatch<'_>> {
    SignatureLocator::default().locate(buffer)
}

enum Rejection {
    Decode(DecodeError),
    Incomplete(ValidationResult),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Decode(err) => write!(f, "{err}"),
            Rejection::Incomplete(validation) => {
                let missing: Vec<_> = validation
                    .missing()
                    .into_iter()
                    .map(|attr| attr.label())
                    .collect();
                write!(f, "missing {}", missing.join(", "))
            }
        }
    }
}
