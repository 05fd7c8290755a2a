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

//! A small, bounds-checked BER/DER reader.
//!
//! Nothing here allocates a copy of the input. Elements borrow their
//! content from the buffer they were decoded from, and every length read
//! from the input is checked against the bytes that are actually there
//! before it is used to slice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod element;
pub use element::{decode_element, Element, TagClass};

pub(crate) mod format;
pub use format::{format_content, tag_name};

pub(crate) mod oid;
pub use oid::{decode_oid, oid_name, try_decode_oid};

mod walker;
pub use walker::{RegionError, Visitor, Walker};

/// Universal tag numbers understood by the formatter.
pub mod tags {
    pub const BOOLEAN: u8 = 1;
    pub const INTEGER: u8 = 2;
    pub const BIT_STRING: u8 = 3;
    pub const OCTET_STRING: u8 = 4;
    pub const NULL: u8 = 5;
    pub const OBJECT_IDENTIFIER: u8 = 6;
    pub const OBJECT_DESCRIPTOR: u8 = 7;
    pub const EXTERNAL: u8 = 8;
    pub const REAL: u8 = 9;
    pub const ENUMERATED: u8 = 10;
    pub const EMBEDDED_PDV: u8 = 11;
    pub const UTF8_STRING: u8 = 12;
    pub const RELATIVE_OID: u8 = 13;
    pub const SEQUENCE: u8 = 16;
    pub const SET: u8 = 17;
    pub const NUMERIC_STRING: u8 = 18;
    pub const PRINTABLE_STRING: u8 = 19;
    pub const T61_STRING: u8 = 20;
    pub const VIDEOTEX_STRING: u8 = 21;
    pub const IA5_STRING: u8 = 22;
    pub const UTC_TIME: u8 = 23;
    pub const GENERALIZED_TIME: u8 = 24;
    pub const GRAPHIC_STRING: u8 = 25;
    pub const VISIBLE_STRING: u8 = 26;
    pub const GENERAL_STRING: u8 = 27;
    pub const UNIVERSAL_STRING: u8 = 28;
    pub const BMP_STRING: u8 = 30;

    /// Low five bits of the identifier octet set to all ones: the tag
    /// number continues in following octets.
    pub const LONG_FORM: u8 = 31;
}

/// Default ceiling on nesting depth during a walk.
pub const MAX_RECURSION_DEPTH: usize = 50;

/// Default ceiling on the number of sibling elements in one region.
pub const MAX_ELEMENTS_PER_LEVEL: usize = 10_000;

/// Errors raised while decoding untrusted ASN.1 input.
///
/// All of these are local to the element or region being decoded. The
/// signature search treats any of them as "not a signature here" and moves
/// on to the next candidate.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("insufficient data for ASN.1 header")]
    TruncatedHeader,

    #[error("long-form tag numbers are not supported")]
    UnsupportedLongFormTag,

    #[error("indefinite length not supported")]
    IndefiniteLengthUnsupported,

    #[error("insufficient data for length octets")]
    TruncatedLength,

    #[error("length does not fit in memory address space")]
    LengthOverflow,

    #[error("element extends beyond available data")]
    TruncatedContent,

    #[error("nesting depth {depth} exceeds maximum {max}")]
    RecursionLimitExceeded { depth: usize, max: usize },

    #[error("more than {max} elements in a single region")]
    TooManyElements { max: usize },

    #[error("object identifier ends inside a multi-byte arc")]
    MalformedOid,
}

/// Resource limits applied while walking a decoded structure.
///
/// Both limits are fixed per walk and bound the work done on any input,
/// however it was crafted.
///
/// # Examples
///
/// ```
/// use sigscan::Limits;
///
/// let limits = Limits::default().with_max_depth(16).with_max_elements(512);
/// assert_eq!(limits.max_depth, 16);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Limits {
    /// A constructed element at or beyond this depth ends its region.
    pub max_depth: usize,

    /// Maximum number of elements decoded from a single region.
    pub max_elements: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: MAX_RECURSION_DEPTH,
            max_elements: MAX_ELEMENTS_PER_LEVEL,
        }
    }
}

impl Limits {
    /// Set the maximum nesting depth (builder pattern).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum number of elements per region (builder pattern).
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }
}
