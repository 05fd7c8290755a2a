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

use super::DecodeError;

pub(crate) const COMMON_NAME_OID: &str = "2.5.4.3";
pub(crate) const COUNTRY_NAME_OID: &str = "2.5.4.6";
pub(crate) const LOCALITY_NAME_OID: &str = "2.5.4.7";
pub(crate) const ORGANIZATION_NAME_OID: &str = "2.5.4.10";
pub(crate) const EMAIL_ADDRESS_OID: &str = "1.2.840.113549.1.9.1";

const OID_NAMES: &[(&str, &str)] = &[
    ("1.2.840.113549.1.1.1", "rsaEncryption"),
    ("1.2.840.113549.1.1.5", "sha1WithRSAEncryption"),
    ("1.2.840.113549.1.1.10", "rsassaPss"),
    ("1.2.840.113549.1.1.11", "sha256WithRSAEncryption"),
    ("1.2.840.113549.1.1.12", "sha384WithRSAEncryption"),
    ("1.2.840.113549.1.1.13", "sha512WithRSAEncryption"),
    ("1.2.840.113549.1.7.1", "data"),
    ("1.2.840.113549.1.7.2", "signedData"),
    ("1.2.840.113549.1.9.3", "contentType"),
    ("1.2.840.113549.1.9.4", "messageDigest"),
    ("1.2.840.113549.1.9.5", "signingTime"),
    ("1.2.840.10045.2.1", "ecPublicKey"),
    ("1.2.840.10045.3.1.7", "prime256v1"),
    ("1.2.840.10045.4.3.2", "ecdsa-with-SHA256"),
    ("1.2.840.10045.4.3.3", "ecdsa-with-SHA384"),
    ("1.2.840.10045.4.3.4", "ecdsa-with-SHA512"),
    ("1.3.132.0.34", "secp384r1"),
    ("1.3.132.0.35", "secp521r1"),
    ("1.3.101.112", "Ed25519"),
    ("2.16.840.1.101.3.4.2.1", "sha256"),
    ("2.16.840.1.101.3.4.2.2", "sha384"),
    ("2.16.840.1.101.3.4.2.3", "sha512"),
    ("1.3.14.3.2.26", "sha1"),
    ("2.5.29.14", "subjectKeyIdentifier"),
    ("2.5.29.15", "keyUsage"),
    ("2.5.29.17", "subjectAltName"),
    ("2.5.29.19", "basicConstraints"),
    ("2.5.29.35", "authorityKeyIdentifier"),
    ("2.5.29.37", "extKeyUsage"),
    ("2.5.4.8", "stateOrProvinceName"),
    ("2.5.4.11", "organizationalUnitName"),
    (COMMON_NAME_OID, "commonName"),
    (COUNTRY_NAME_OID, "countryName"),
    (LOCALITY_NAME_OID, "localityName"),
    (ORGANIZATION_NAME_OID, "organizationName"),
    (EMAIL_ADDRESS_OID, "emailAddress"),
];

/// Look up the conventional name of a dotted-decimal OID.
pub fn oid_name(oid: &str) -> Option<&'static str> {
    OID_NAMES
        .iter()
        .find(|(dotted, _)| *dotted == oid)
        .map(|(_, name)| *name)
}

/// Decode OBJECT IDENTIFIER content bytes to dotted-decimal text.
///
/// This is best effort: if the last arc is cut off (its final byte still
/// has the continuation bit set) the complete arcs before it are returned
/// and the partial one is dropped. Use [`try_decode_oid`] to detect that.
///
/// # Examples
///
/// ```
/// use sigscan::decode_oid;
///
/// assert_eq!(decode_oid(&[0x55, 0x04, 0x03]), "2.5.4.3");
/// assert_eq!(decode_oid(&[]), "");
/// ```
pub fn decode_oid(content: &[u8]) -> String {
    let (arcs, _) = parse_arcs(content);
    join_arcs(&arcs)
}

/// Strict variant of [`decode_oid`]: a truncated or oversized arc is an
/// error.
pub fn try_decode_oid(content: &[u8]) -> Result<String, DecodeError> {
    match parse_arcs(content) {
        (arcs, None) => Ok(join_arcs(&arcs)),
        (_, Some(err)) => Err(err),
    }
}

fn join_arcs(arcs: &[u64]) -> String {
    arcs.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

// The first octet packs two arcs as `40 * first + second`.
fn parse_arcs(content: &[u8]) -> (Vec<u64>, Option<DecodeError>) {
    let Some((&first, rest)) = content.split_first() else {
        return (Vec::new(), None);
    };

    let mut arcs = vec![u64::from(first / 40), u64::from(first % 40)];

    let mut value: u64 = 0;
    let mut in_arc = false;
    for &byte in rest {
        if value > u64::MAX >> 7 {
            return (arcs, Some(DecodeError::MalformedOid));
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        in_arc = true;

        if byte & 0x80 == 0 {
            arcs.push(value);
            value = 0;
            in_arc = false;
        }
    }

    if in_arc {
        return (arcs, Some(DecodeError::MalformedOid));
    }

    (arcs, None)
}
