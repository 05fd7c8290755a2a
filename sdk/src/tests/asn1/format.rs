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

use crate::asn1::{format_content, tag_name, tags, TagClass};

fn universal(tag: u8, content: &[u8]) -> String {
    format_content(TagClass::Universal, tag, content)
}

#[test]
fn test_tag_names() {
    let cases = [
        (tags::BOOLEAN, TagClass::Universal, false, "BOOLEAN"),
        (tags::INTEGER, TagClass::Universal, false, "INTEGER"),
        (tags::SEQUENCE, TagClass::Universal, true, "SEQUENCE"),
        (tags::SET, TagClass::Universal, true, "SET"),
        (tags::UTF8_STRING, TagClass::Universal, false, "UTF8String"),
        (tags::PRINTABLE_STRING, TagClass::Universal, false, "PrintableString"),
        (tags::BMP_STRING, TagClass::Universal, false, "BMPString"),
        (tags::REAL, TagClass::Universal, false, "REAL"),
        (tags::ENUMERATED, TagClass::Universal, false, "ENUMERATED"),
        (0, TagClass::Application, false, "APPLICATION [0]"),
        (0, TagClass::ContextSpecific, false, "CONTEXT [0] (version/keyUsage)"),
        (
            1,
            TagClass::ContextSpecific,
            true,
            "CONTEXT [1] (issuerUniqueID/subjectAltName)",
        ),
        (3, TagClass::ContextSpecific, true, "CONTEXT [3] (extensions)"),
        (5, TagClass::ContextSpecific, false, "CONTEXT [5]"),
        (0, TagClass::Private, false, "PRIVATE [0]"),
        (29, TagClass::Universal, false, "PRIMITIVE [29]"),
        (tags::INTEGER, TagClass::Universal, true, "CONSTRUCTED [2]"),
    ];

    for (tag, class, constructed, expected) in cases {
        assert_eq!(tag_name(class, tag, constructed), expected);
    }
}

#[test]
fn test_booleans() {
    assert_eq!(universal(tags::BOOLEAN, &[0xff]), "TRUE");
    assert_eq!(universal(tags::BOOLEAN, &[0x00]), "FALSE");
    assert_eq!(universal(tags::BOOLEAN, &[0x01, 0x02]), "0102");
}

#[test]
fn test_integers() {
    assert_eq!(universal(tags::INTEGER, &[0x01, 0x23]), "291 (0x0123)");
    assert_eq!(universal(tags::INTEGER, &[0xff]), "-1 (0xFF)");
    assert_eq!(universal(tags::INTEGER, &[0x80, 0x00]), "-32768 (0x8000)");
    assert_eq!(universal(tags::INTEGER, &[0x00, 0xff]), "255 (0x00FF)");
}

#[test]
fn test_large_integer_is_hex() {
    let content = [0x00, 0xc3, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
    assert_eq!(universal(tags::INTEGER, &content), "00c311223344556677");
}

#[test]
fn test_enumerated() {
    assert_eq!(universal(tags::ENUMERATED, &[0x02]), "ENUM(2)");
}

#[test]
fn test_strings_are_quoted() {
    assert_eq!(universal(tags::UTF8_STRING, b"Test String"), "\"Test String\"");
    assert_eq!(universal(tags::PRINTABLE_STRING, b"US"), "\"US\"");
    assert_eq!(universal(tags::UTC_TIME, b"250101000000Z"), "\"250101000000Z\"");
    assert_eq!(universal(tags::IA5_STRING, b"a\"b"), "\"a\\\"b\"");
}

#[test]
fn test_bmp_string_is_utf16() {
    assert_eq!(universal(tags::BMP_STRING, &[0x00, 0x41, 0x00, 0x42]), "\"AB\"");
}

#[test]
fn test_bmp_string_odd_byte_is_replaced() {
    assert_eq!(universal(tags::BMP_STRING, &[0x00, 0x41, 0x42]), "\"A\u{fffd}\"");
}

#[test]
fn test_null_is_empty() {
    assert_eq!(universal(tags::NULL, &[]), "");
}

#[test]
fn test_object_identifiers() {
    assert_eq!(
        universal(tags::OBJECT_IDENTIFIER, &[0x55, 0x04, 0x03]),
        "2.5.4.3 (commonName)"
    );
    assert_eq!(universal(tags::OBJECT_IDENTIFIER, &[0x2a, 0x03]), "1.2.3");
}

#[test]
fn test_bit_string() {
    assert_eq!(
        universal(tags::BIT_STRING, &[0x00, 0xab, 0xcd]),
        "unused bits: 0, data: abcd"
    );

    let mut long = vec![0x03];
    long.extend_from_slice(&[0x11; 40]);
    assert_eq!(
        universal(tags::BIT_STRING, &long),
        format!("unused bits: 3, data: {}... (40 bytes)", "11".repeat(32))
    );
}

#[test]
fn test_octet_string_preview() {
    assert_eq!(universal(tags::OCTET_STRING, &[0xde, 0xad]), "dead");
    assert_eq!(
        universal(tags::OCTET_STRING, &[0x22; 33]),
        format!("{}... (33 bytes)", "22".repeat(32))
    );
}

#[test]
fn test_non_universal_is_hex() {
    // Would be a BOOLEAN if it were universal.
    assert_eq!(format_content(TagClass::ContextSpecific, 1, &[0xff]), "ff");
    assert_eq!(format_content(TagClass::Private, 12, b"AB"), "4142");
}
