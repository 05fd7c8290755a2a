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

use crate::{
    asn1::{decode_element, DecodeError, TagClass},
    tests::der::{tlv, tlv_long2},
};

#[test]
fn test_short_form_sequence() {
    let data = [0x30, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05];
    let (element, consumed) = decode_element(&data, 0, 0).unwrap();

    assert_eq!(element.class, TagClass::Universal);
    assert_eq!(element.tag, 16);
    assert!(element.constructed);
    assert_eq!(element.header_len, 2);
    assert_eq!(element.content_len, 5);
    assert_eq!(element.content, &data[2..]);
    assert_eq!(consumed, 7);
}

#[test]
fn test_primitive_integer() {
    let (element, consumed) = decode_element(&[0x02, 0x01, 0xff], 0, 0).unwrap();
    assert_eq!(element.tag, 2);
    assert!(!element.constructed);
    assert_eq!(element.content, &[0xff]);
    assert_eq!(consumed, 3);
}

#[test]
fn test_records_depth_and_offset() {
    let (element, _) = decode_element(&[0x05, 0x00], 7, 1234).unwrap();
    assert_eq!(element.depth, 7);
    assert_eq!(element.offset, 1234);
    assert_eq!(element.content_offset(), 1236);
    assert!(element.content.is_empty());
}

#[test]
fn test_ignores_trailing_bytes() {
    let (element, consumed) = decode_element(&[0x02, 0x01, 0x05, 0xaa, 0xbb], 0, 0).unwrap();
    assert_eq!(element.total_len(), 3);
    assert_eq!(consumed, 3);
}

#[test]
fn test_tag_classes() {
    let (app, _) = decode_element(&[0x61, 0x00], 0, 0).unwrap();
    assert_eq!(app.class, TagClass::Application);
    assert!(app.constructed);
    assert_eq!(app.tag, 1);

    let (ctx, _) = decode_element(&[0xa0, 0x00], 0, 0).unwrap();
    assert_eq!(ctx.class, TagClass::ContextSpecific);
    assert!(ctx.constructed);
    assert_eq!(ctx.tag, 0);

    let (private, _) = decode_element(&[0xc2, 0x00], 0, 0).unwrap();
    assert_eq!(private.class, TagClass::Private);
    assert!(!private.constructed);
    assert_eq!(private.tag, 2);
}

#[test]
fn test_truncated_header() {
    assert_eq!(decode_element(&[], 0, 0), Err(DecodeError::TruncatedHeader));
    assert_eq!(decode_element(&[0x30], 0, 0), Err(DecodeError::TruncatedHeader));
}

#[test]
fn test_long_form_tag_rejected() {
    assert_eq!(
        decode_element(&[0x1f, 0x01, 0x00], 0, 0),
        Err(DecodeError::UnsupportedLongFormTag)
    );
    assert_eq!(
        decode_element(&[0xbf, 0x81, 0x00], 0, 0),
        Err(DecodeError::UnsupportedLongFormTag)
    );
}

#[test]
fn test_indefinite_length_rejected() {
    assert_eq!(
        decode_element(&[0x30, 0x80, 0x00, 0x00], 0, 0),
        Err(DecodeError::IndefiniteLengthUnsupported)
    );
}

#[test]
fn test_truncated_length_octets() {
    assert_eq!(
        decode_element(&[0x30, 0xff], 0, 0),
        Err(DecodeError::TruncatedLength)
    );
    assert_eq!(
        decode_element(&[0x30, 0x82, 0x01], 0, 0),
        Err(DecodeError::TruncatedLength)
    );
}

#[test]
fn test_content_beyond_window() {
    assert_eq!(
        decode_element(&[0x30, 0x82, 0xff, 0xff, 0xff], 0, 0),
        Err(DecodeError::TruncatedContent)
    );
    assert_eq!(
        decode_element(&[0x04, 0x05, 0x00], 0, 0),
        Err(DecodeError::TruncatedContent)
    );
}

#[test]
fn test_length_overflow() {
    // Nine length octets with a leading 1 need 65 bits.
    let mut data = vec![0x04, 0x89, 0x01];
    data.extend_from_slice(&[0x00; 8]);
    assert_eq!(decode_element(&data, 0, 0), Err(DecodeError::LengthOverflow));
}

#[test]
fn test_huge_length_that_fits_is_truncated_content() {
    let mut data = vec![0x04, 0x88, 0x7f];
    data.extend_from_slice(&[0xff; 7]);
    assert_eq!(
        decode_element(&data, 0, 0),
        Err(DecodeError::TruncatedContent)
    );
}

#[test]
fn test_span_matches_original_buffer() {
    let short = tlv(0x04, &[0x11; 100]);
    let long = tlv_long2(0x04, &(0..300u16).map(|v| v as u8).collect::<Vec<_>>());

    for encoded in [short, long] {
        let mut buffer = vec![0xee; 17];
        buffer.extend_from_slice(&encoded);
        buffer.extend_from_slice(&[0xee; 5]);

        let offset = 17;
        let (element, consumed) = decode_element(&buffer[offset..], 0, offset).unwrap();

        assert_eq!(consumed, encoded.len());
        assert_eq!(element.header_len + element.content_len, encoded.len());

        let start = element.offset + element.header_len;
        assert_eq!(&buffer[start..start + element.content_len], element.content);
    }
}
