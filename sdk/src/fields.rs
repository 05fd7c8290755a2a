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

//! Signer distinguished-name fields.
//!
//! A certificate names its subject and issuer as a sequence of
//! `AttributeTypeAndValue` pairs, each an OBJECT IDENTIFIER followed by a
//! string. [`extract_fields`] looks for the five attribute types a signer
//! is expected to carry and records the string that follows each one.

use std::fmt;

use serde::Serialize;

use crate::asn1::{
    format::decode_text,
    oid::{
        try_decode_oid, COMMON_NAME_OID, COUNTRY_NAME_OID, EMAIL_ADDRESS_OID, LOCALITY_NAME_OID,
        ORGANIZATION_NAME_OID,
    },
    Element, Limits, Visitor, Walker,
};

/// The certificate attributes a signature block must carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CertAttribute {
    CommonName,
    Country,
    Locality,
    Organization,
    Email,
}

impl CertAttribute {
    /// All attributes, in report order.
    pub const ALL: [CertAttribute; 5] = [
        CertAttribute::CommonName,
        CertAttribute::Country,
        CertAttribute::Locality,
        CertAttribute::Organization,
        CertAttribute::Email,
    ];

    /// Dotted-decimal attribute type OID.
    pub fn oid(self) -> &'static str {
        match self {
            CertAttribute::CommonName => COMMON_NAME_OID,
            CertAttribute::Country => COUNTRY_NAME_OID,
            CertAttribute::Locality => LOCALITY_NAME_OID,
            CertAttribute::Organization => ORGANIZATION_NAME_OID,
            CertAttribute::Email => EMAIL_ADDRESS_OID,
        }
    }

    /// Human readable label, e.g. "Common Name".
    pub fn label(self) -> &'static str {
        match self {
            CertAttribute::CommonName => "Common Name",
            CertAttribute::Country => "Country Name",
            CertAttribute::Locality => "Locality Name",
            CertAttribute::Organization => "Organization Name",
            CertAttribute::Email => "Email Address",
        }
    }

    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.oid() == oid)
    }
}

impl fmt::Display for CertAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which signer attributes were found, and their values.
///
/// Each field is `Some` only when the attribute was present with a
/// non-empty value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    common_name: Option<String>,
    country: Option<String>,
    locality: Option<String>,
    organization: Option<String>,
    email: Option<String>,
}

impl ValidationResult {
    /// Returns `true` if all five attributes were found.
    pub fn is_valid(&self) -> bool {
        CertAttribute::ALL.into_iter().all(|attr| self.has(attr))
    }

    pub fn get(&self, attr: CertAttribute) -> Option<&str> {
        self.slot(attr).as_deref()
    }

    pub fn has(&self, attr: CertAttribute) -> bool {
        self.slot(attr).is_some()
    }

    /// Record a value for `attr`, replacing any earlier one.
    pub fn set(&mut self, attr: CertAttribute, value: impl Into<String>) {
        *self.slot_mut(attr) = Some(value.into());
    }

    /// Attributes that were not found, in report order.
    pub fn missing(&self) -> Vec<CertAttribute> {
        CertAttribute::ALL
            .into_iter()
            .filter(|attr| !self.has(*attr))
            .collect()
    }

    pub fn common_name(&self) -> Option<&str> {
        self.get(CertAttribute::CommonName)
    }

    pub fn country(&self) -> Option<&str> {
        self.get(CertAttribute::Country)
    }

    pub fn locality(&self) -> Option<&str> {
        self.get(CertAttribute::Locality)
    }

    pub fn organization(&self) -> Option<&str> {
        self.get(CertAttribute::Organization)
    }

    pub fn email(&self) -> Option<&str> {
        self.get(CertAttribute::Email)
    }

    fn slot(&self, attr: CertAttribute) -> &Option<String> {
        match attr {
            CertAttribute::CommonName => &self.common_name,
            CertAttribute::Country => &self.country,
            CertAttribute::Locality => &self.locality,
            CertAttribute::Organization => &self.organization,
            CertAttribute::Email => &self.email,
        }
    }

    fn slot_mut(&mut self, attr: CertAttribute) -> &mut Option<String> {
        match attr {
            CertAttribute::CommonName => &mut self.common_name,
            CertAttribute::Country => &mut self.country,
            CertAttribute::Locality => &mut self.locality,
            CertAttribute::Organization => &mut self.organization,
            CertAttribute::Email => &mut self.email,
        }
    }
}

/// Scan a decoded structure for the signer attributes.
///
/// Every attribute OID found anywhere in the tree is paired with the
/// element that immediately follows it in the same SEQUENCE or SET. If
/// that element is primitive and non-empty its content is recorded as
/// text. When an attribute occurs more than once, the last occurrence in
/// document order wins.
///
/// This never fails: regions that do not decode are skipped and
/// attributes that were not found are simply absent from the result.
pub fn extract_fields(bytes: &[u8]) -> ValidationResult {
    extract_fields_with_limits(bytes, Limits::default())
}

/// [`extract_fields`] with explicit walk limits.
pub fn extract_fields_with_limits(bytes: &[u8], limits: Limits) -> ValidationResult {
    let mut collector = FieldCollector::default();
    // A failed region only means fewer attributes were seen.
    let _ = Walker::new(limits).walk(bytes, 0, &mut collector);
    collector.result
}

#[derive(Default)]
struct FieldCollector {
    result: ValidationResult,
}

impl<'a> Visitor<'a> for FieldCollector {
    fn visit(&mut self, element: &Element<'a>, previous: Option<&Element<'a>>) {
        let Some(attr) = previous.and_then(attribute_type) else {
            return;
        };

        if element.constructed || element.content.is_empty() {
            return;
        }

        self.result.set(attr, decode_text(element.tag, element.content));
    }
}

fn attribute_type(element: &Element<'_>) -> Option<CertAttribute> {
    if !element.is_oid() {
        return None;
    }
    try_decode_oid(element.content)
        .ok()
        .and_then(|oid| CertAttribute::from_oid(&oid))
}
