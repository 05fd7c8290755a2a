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

use crate::asn1::{Element, Limits, Visitor, Walker};

/// Estimate the signing key size, in bits, of a decoded signature block.
///
/// This is a heuristic, not a cryptographic measurement. Signature blocks
/// conventionally end with the raw signature value, whose length matches
/// the key's modulus. If the last element visited in a depth-first walk of
/// `bytes` is an OCTET STRING, its length times eight is returned;
/// otherwise the result is 0.
pub fn estimate_key_size(bytes: &[u8]) -> usize {
    estimate_key_size_with_limits(bytes, Limits::default())
}

/// [`estimate_key_size`] with explicit walk limits.
pub fn estimate_key_size_with_limits(bytes: &[u8], limits: Limits) -> usize {
    let mut last = LastElement::default();
    let _ = Walker::new(limits).walk(bytes, 0, &mut last);

    match last.0 {
        Some(element) if element.is_octet_string() => element.content_len.saturating_mul(8),
        _ => 0,
    }
}

#[derive(Default)]
struct LastElement<'a>(Option<Element<'a>>);

impl<'a> Visitor<'a> for LastElement<'a> {
    fn visit(&mut self, element: &Element<'a>, _previous: Option<&Element<'a>>) {
        self.0 = Some(*element);
    }
}
