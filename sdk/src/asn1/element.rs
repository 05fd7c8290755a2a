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

use serde::Serialize;

use super::{format, tags, DecodeError};

/// The class bits (top two bits) of an identifier octet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl TagClass {
    fn from_identifier(identifier: u8) -> Self {
        match identifier >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }
}

/// One decoded tag-length-value unit.
///
/// `content` borrows exactly `content_len` bytes from the buffer the
/// element was decoded from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Element<'a> {
    pub class: TagClass,

    /// Tag number, always in `0..=30`.
    pub tag: u8,

    pub constructed: bool,

    /// Nesting level; top-level elements are at depth 0.
    pub depth: usize,

    /// Absolute position of the identifier octet in the original buffer.
    pub offset: usize,

    /// Bytes taken by the identifier and length octets.
    pub header_len: usize,

    pub content_len: usize,

    pub content: &'a [u8],
}

impl Element<'_> {
    /// Header plus content.
    pub fn total_len(&self) -> usize {
        self.header_len + self.content_len
    }

    /// Absolute position of the first content byte.
    pub fn content_offset(&self) -> usize {
        self.offset + self.header_len
    }

    /// Returns `true` if this is a universal-class element with tag `tag`.
    pub fn is_universal(&self, tag: u8) -> bool {
        self.class == TagClass::Universal && self.tag == tag
    }

    /// A universal, primitive OBJECT IDENTIFIER with some content.
    pub fn is_oid(&self) -> bool {
        self.is_universal(tags::OBJECT_IDENTIFIER) && !self.constructed && !self.content.is_empty()
    }

    pub fn is_octet_string(&self) -> bool {
        self.is_universal(tags::OCTET_STRING)
    }

    /// Human readable tag name, e.g. `SEQUENCE` or `CONTEXT [0] (version/keyUsage)`.
    pub fn tag_name(&self) -> String {
        format::tag_name(self.class, self.tag, self.constructed)
    }

    /// Display form of the content; empty for constructed or empty elements.
    pub fn formatted_content(&self) -> String {
        if self.constructed || self.content.is_empty() {
            return String::new();
        }
        format::format_content(self.class, self.tag, self.content)
    }
}

/// Decode a single TLV header from the start of `window`.
///
/// `depth` and `offset` are recorded on the returned element as given;
/// `offset` should be the absolute position of `window[0]` in the
/// original buffer.
///
/// Returns the element and the number of bytes it occupies
/// (`header_len + content_len`), so the caller can advance past it.
///
/// # Examples
///
/// ```
/// use sigscan::decode_element;
///
/// let (element, consumed) = decode_element(&[0x02, 0x01, 0x2a, 0xff], 0, 100).unwrap();
/// assert_eq!(element.tag, 2);
/// assert_eq!(element.offset, 100);
/// assert_eq!(element.content, &[0x2a]);
/// assert_eq!(consumed, 3);
/// ```
pub fn decode_element(
    window: &[u8],
    depth: usize,
    offset: usize,
) -> Result<(Element<'_>, usize), DecodeError> {
    let (identifier, length_byte) = match window {
        [identifier, length_byte, ..] => (*identifier, *length_byte),
        _ => return Err(DecodeError::TruncatedHeader),
    };

    let tag = identifier & 0x1f;
    if tag == tags::LONG_FORM {
        return Err(DecodeError::UnsupportedLongFormTag);
    }

    let (header_len, content_len) = if length_byte & 0x80 == 0 {
        (2, usize::from(length_byte))
    } else {
        let octet_count = usize::from(length_byte & 0x7f);
        if octet_count == 0 {
            return Err(DecodeError::IndefiniteLengthUnsupported);
        }

        let length_octets = window
            .get(2..2 + octet_count)
            .ok_or(DecodeError::TruncatedLength)?;

        let mut len: usize = 0;
        for &octet in length_octets {
            len = len
                .checked_mul(256)
                .ok_or(DecodeError::LengthOverflow)?
                | usize::from(octet);
        }
        (2 + octet_count, len)
    };

    let total = header_len
        .checked_add(content_len)
        .ok_or(DecodeError::LengthOverflow)?;

    let content = window
        .get(header_len..total)
        .ok_or(DecodeError::TruncatedContent)?;

    Ok((
        Element {
            class: TagClass::from_identifier(identifier),
            tag,
            constructed: identifier & 0x20 != 0,
            depth,
            offset,
            header_len,
            content_len,
            content,
        },
        total,
    ))
}
