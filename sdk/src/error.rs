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

use thiserror::Error;

use crate::asn1::DecodeError;

/// `Error` enumerates errors returned by the signature search and by
/// callers loading input for it.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Every `30 82` candidate in the buffer either failed to decode or
    /// lacked one of the required certificate attributes.
    #[error("no valid signature found")]
    NoSignatureFound,

    /// The input is too short to hold any ASN.1 structure.
    #[error("file too small to contain ASN.1 structure ({len} bytes)")]
    FileTooSmall { len: usize },
}

/// A specialized `Result` type for signature search operations.
pub type Result<T> = std::result::Result<T, Error>;
