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

use log::trace;

use super::{decode_element, DecodeError, Element, Limits};

/// A region that stopped decoding part way through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionError<'a> {
    /// Depth of the elements in the region.
    pub depth: usize,

    /// Absolute offset of the first byte of the region.
    pub offset: usize,

    /// The whole region, including anything decoded before the failure.
    pub bytes: &'a [u8],

    pub error: DecodeError,
}

/// Receives elements from a [`Walker`] in depth-first document order.
pub trait Visitor<'a> {
    /// Called once per decoded element, before its children.
    ///
    /// `previous` is the element decoded immediately before this one in
    /// the same region, if any.
    fn visit(&mut self, element: &Element<'a>, previous: Option<&Element<'a>>);

    /// Called when a region stops decoding. Elements already passed to
    /// [`Visitor::visit`] remain valid.
    fn region_failed(&mut self, failure: &RegionError<'a>) {
        let _ = failure;
    }
}

/// Recursive, bounded walk over a run of TLV elements.
///
/// The walk descends into every constructed element's content. A failure
/// ends decoding of the region it happened in (the run of siblings
/// currently being read) and is reported to the visitor; the walk then
/// carries on with the parent's next sibling.
#[derive(Clone, Copy, Debug, Default)]
pub struct Walker {
    limits: Limits,
}

impl Walker {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Walk every element in `data`, reporting offsets relative to
    /// `base_offset`.
    ///
    /// An element whose absolute offset would not fit in a `usize` ends
    /// its region with [`DecodeError::LengthOverflow`].
    ///
    /// Returns an error only if the top-level region failed. Failures in
    /// nested regions reach the visitor through
    /// [`Visitor::region_failed`].
    pub fn walk<'a, V>(
        &self,
        data: &'a [u8],
        base_offset: usize,
        visitor: &mut V,
    ) -> Result<(), DecodeError>
    where
        V: Visitor<'a> + ?Sized,
    {
        self.walk_region(data, 0, base_offset, visitor)
    }

    fn walk_region<'a, V>(
        &self,
        data: &'a [u8],
        depth: usize,
        base_offset: usize,
        visitor: &mut V,
    ) -> Result<(), DecodeError>
    where
        V: Visitor<'a> + ?Sized,
    {
        let mut pos = 0;
        let mut count = 0;
        let mut previous: Option<Element<'a>> = None;

        while let Some(window) = data.get(pos..).filter(|rest| !rest.is_empty()) {
            if count >= self.limits.max_elements {
                return Err(self.fail(
                    data,
                    depth,
                    base_offset,
                    DecodeError::TooManyElements {
                        max: self.limits.max_elements,
                    },
                    visitor,
                ));
            }

            let decoded = base_offset
                .checked_add(pos)
                .ok_or(DecodeError::LengthOverflow)
                .and_then(|offset| decode_element(window, depth, offset))
                .and_then(|(element, consumed)| {
                    element
                        .offset
                        .checked_add(element.header_len)
                        .map(|content_offset| (element, consumed, content_offset))
                        .ok_or(DecodeError::LengthOverflow)
                });
            let (element, consumed, content_offset) = match decoded {
                Ok(decoded) => decoded,
                Err(err) => return Err(self.fail(data, depth, base_offset, err, visitor)),
            };

            if element.constructed && depth >= self.limits.max_depth {
                return Err(self.fail(
                    data,
                    depth,
                    base_offset,
                    DecodeError::RecursionLimitExceeded {
                        depth,
                        max: self.limits.max_depth,
                    },
                    visitor,
                ));
            }

            count += 1;
            visitor.visit(&element, previous.as_ref());

            if element.constructed && !element.content.is_empty() {
                // Already reported to the visitor; siblings carry on.
                let _ = self.walk_region(
                    element.content,
                    depth + 1,
                    content_offset,
                    visitor,
                );
            }

            pos += consumed;
            previous = Some(element);
        }

        Ok(())
    }

    fn fail<'a, V>(
        &self,
        data: &'a [u8],
        depth: usize,
        base_offset: usize,
        error: DecodeError,
        visitor: &mut V,
    ) -> DecodeError
    where
        V: Visitor<'a> + ?Sized,
    {
        trace!("ASN.1 region at offset {base_offset} (depth {depth}) stopped: {error}");
        visitor.region_failed(&RegionError {
            depth,
            offset: base_offset,
            bytes: data,
            error,
        });
        error
    }
}
