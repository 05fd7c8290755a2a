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

//! Display helpers for decoded elements.

use super::{oid, tags, TagClass};

// Longer blobs are shown as a prefix and a byte count.
const HEX_PREVIEW_LEN: usize = 32;

/// Name of a tag for display, e.g. `INTEGER`, `SET`, `APPLICATION [1]`.
///
/// Context-specific tags 0 through 3 carry a hint about the X.509 field
/// they usually wrap.
pub fn tag_name(class: TagClass, tag: u8, constructed: bool) -> String {
    match class {
        TagClass::Universal if constructed => match tag {
            tags::SEQUENCE => "SEQUENCE".to_string(),
            tags::SET => "SET".to_string(),
            _ => format!("CONSTRUCTED [{tag}]"),
        },
        TagClass::Universal => universal_primitive_name(tag)
            .map(str::to_string)
            .unwrap_or_else(|| format!("PRIMITIVE [{tag}]")),
        TagClass::Application => format!("APPLICATION [{tag}]"),
        TagClass::ContextSpecific => match context_hint(tag) {
            Some(hint) => format!("CONTEXT [{tag}] ({hint})"),
            None => format!("CONTEXT [{tag}]"),
        },
        TagClass::Private => format!("PRIVATE [{tag}]"),
    }
}

fn universal_primitive_name(tag: u8) -> Option<&'static str> {
    Some(match tag {
        tags::BOOLEAN => "BOOLEAN",
        tags::INTEGER => "INTEGER",
        tags::BIT_STRING => "BIT STRING",
        tags::OCTET_STRING => "OCTET STRING",
        tags::NULL => "NULL",
        tags::OBJECT_IDENTIFIER => "OBJECT IDENTIFIER",
        tags::OBJECT_DESCRIPTOR => "ObjectDescriptor",
        tags::EXTERNAL => "EXTERNAL",
        tags::REAL => "REAL",
        tags::ENUMERATED => "ENUMERATED",
        tags::EMBEDDED_PDV => "EMBEDDED PDV",
        tags::UTF8_STRING => "UTF8String",
        tags::RELATIVE_OID => "RELATIVE-OID",
        tags::NUMERIC_STRING => "NumericString",
        tags::PRINTABLE_STRING => "PrintableString",
        tags::T61_STRING => "T61String",
        tags::VIDEOTEX_STRING => "VideotexString",
        tags::IA5_STRING => "IA5String",
        tags::UTC_TIME => "UTCTime",
        tags::GENERALIZED_TIME => "GeneralizedTime",
        tags::GRAPHIC_STRING => "GraphicString",
        tags::VISIBLE_STRING => "VisibleString",
        tags::GENERAL_STRING => "GeneralString",
        tags::UNIVERSAL_STRING => "UniversalString",
        tags::BMP_STRING => "BMPString",
        _ => return None,
    })
}

fn context_hint(tag: u8) -> Option<&'static str> {
    match tag {
        0 => Some("version/keyUsage"),
        1 => Some("issuerUniqueID/subjectAltName"),
        2 => Some("subjectUniqueID"),
        3 => Some("extensions"),
        _ => None,
    }
}

/// Render the content of a primitive element as text.
///
/// Only universal tags get a semantic rendering; anything else is shown
/// as hex.
pub fn format_content(class: TagClass, tag: u8, content: &[u8]) -> String {
    if class != TagClass::Universal {
        return hex_preview(content);
    }

    match tag {
        tags::BOOLEAN => match content {
            [0] => "FALSE".to_string(),
            [_] => "TRUE".to_string(),
            _ => hex::encode(content),
        },

        tags::INTEGER => match signed_value(content) {
            Some(value) => format!("{value} (0x{})", hex::encode_upper(content)),
            None => hex::encode(content),
        },

        tags::ENUMERATED => match signed_value(content) {
            Some(value) => format!("ENUM({value})"),
            None => hex::encode(content),
        },

        tags::BIT_STRING => match content.split_first() {
            Some((unused_bits, data)) => {
                format!("unused bits: {unused_bits}, data: {}", hex_preview(data))
            }
            None => String::new(),
        },

        tags::NULL => String::new(),

        tags::OBJECT_IDENTIFIER => {
            let dotted = oid::decode_oid(content);
            match oid::oid_name(&dotted) {
                Some(name) => format!("{dotted} ({name})"),
                None => dotted,
            }
        }

        tags::UTF8_STRING
        | tags::NUMERIC_STRING
        | tags::PRINTABLE_STRING
        | tags::T61_STRING
        | tags::VIDEOTEX_STRING
        | tags::IA5_STRING
        | tags::GRAPHIC_STRING
        | tags::VISIBLE_STRING
        | tags::GENERAL_STRING
        | tags::UTC_TIME
        | tags::GENERALIZED_TIME
        | tags::BMP_STRING => format!("{:?}", decode_text(tag, content)),

        _ => hex_preview(content),
    }
}

/// Decode string content as text. BMPString is UTF-16BE, with a trailing
/// odd byte shown as U+FFFD; everything else is treated as (possibly
/// invalid) UTF-8.
pub(crate) fn decode_text(tag: u8, content: &[u8]) -> String {
    if tag == tags::BMP_STRING {
        let pairs = content.chunks_exact(2);
        let dangling = !pairs.remainder().is_empty();
        let units: Vec<u16> = pairs
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let mut text = String::from_utf16_lossy(&units);
        if dangling {
            text.push(char::REPLACEMENT_CHARACTER);
        }
        return text;
    }
    String::from_utf8_lossy(content).into_owned()
}

// Two's complement, big-endian, at most eight bytes.
fn signed_value(content: &[u8]) -> Option<i64> {
    if content.is_empty() || content.len() > 8 {
        return None;
    }

    let negative = content[0] & 0x80 != 0;
    let seed: i64 = if negative { -1 } else { 0 };
    Some(
        content
            .iter()
            .fold(seed, |value, &byte| (value << 8) | i64::from(byte)),
    )
}

fn hex_preview(content: &[u8]) -> String {
    if content.len() > HEX_PREVIEW_LEN {
        format!(
            "{}... ({} bytes)",
            hex::encode(&content[..HEX_PREVIEW_LEN]),
            content.len()
        )
    } else {
        hex::encode(content)
    }
}
