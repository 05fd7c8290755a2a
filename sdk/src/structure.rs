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

//! Flat, display-ready listing of a decoded structure.

use std::fmt;

use serde::Serialize;

use crate::asn1::{DecodeError, Element, Limits, RegionError, Visitor, Walker};

/// One line of a structure listing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureLine {
    /// A decoded element.
    Element {
        depth: usize,
        offset: usize,
        header_len: usize,
        content_len: usize,
        constructed: bool,
        tag_name: String,

        /// Formatted content of a non-empty primitive; empty otherwise.
        content: String,
    },

    /// A nested region that could not be decoded, shown as raw hex.
    HexDump {
        depth: usize,
        offset: usize,
        hex: String,
        error: String,
    },
}

impl StructureLine {
    pub fn depth(&self) -> usize {
        match self {
            StructureLine::Element { depth, .. } | StructureLine::HexDump { depth, .. } => *depth,
        }
    }
}

impl From<&Element<'_>> for StructureLine {
    fn from(element: &Element<'_>) -> Self {
        StructureLine::Element {
            depth: element.depth,
            offset: element.offset,
            header_len: element.header_len,
            content_len: element.content_len,
            constructed: element.constructed,
            tag_name: element.tag_name(),
            content: element.formatted_content(),
        }
    }
}

// Same layout as `openssl asn1parse`.
impl fmt::Display for StructureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureLine::Element {
                depth,
                offset,
                header_len,
                content_len,
                constructed,
                tag_name,
                content,
            } => {
                let kind = if *constructed { "cons" } else { "prim" };
                write!(
                    f,
                    "{:>8}d={depth} hl={header_len} l={content_len} {kind}: {tag_name}",
                    format!("{offset}:")
                )?;
                if !content.is_empty() {
                    write!(f, "  {content}")?;
                }
                Ok(())
            }
            StructureLine::HexDump { depth, hex, .. } => {
                write!(f, "{}[HEX DUMP]: {hex}", "  ".repeat(*depth))
            }
        }
    }
}

/// Decode `bytes` into a listing, one line per element in document order.
///
/// `base_offset` is added to every reported offset, so a block found in a
/// larger file can be listed with file offsets.
///
/// A nested region that fails to decode keeps the lines decoded before the
/// failure and is followed by a [`StructureLine::HexDump`] of the whole
/// region. A failure at the top level is returned as an error.
pub fn list_structure(
    bytes: &[u8],
    base_offset: usize,
) -> Result<Vec<StructureLine>, DecodeError> {
    list_structure_with_limits(bytes, base_offset, Limits::default())
}

/// [`list_structure`] with explicit walk limits.
pub fn list_structure_with_limits(
    bytes: &[u8],
    base_offset: usize,
    limits: Limits,
) -> Result<Vec<StructureLine>, DecodeError> {
    let mut listing = Listing::default();
    Walker::new(limits).walk(bytes, base_offset, &mut listing)?;
    Ok(listing.lines)
}

#[derive(Default)]
struct Listing {
    lines: Vec<StructureLine>,
}

impl<'a> Visitor<'a> for Listing {
    fn visit(&mut self, element: &Element<'a>, _previous: Option<&Element<'a>>) {
        self.lines.push(element.into());
    }

    fn region_failed(&mut self, failure: &RegionError<'a>) {
        if failure.depth == 0 {
            return;
        }
        self.lines.push(StructureLine::HexDump {
            depth: failure.depth,
            offset: failure.offset,
            hex: hex::encode(failure.bytes),
            error: failure.error.to_string(),
        });
    }
}
