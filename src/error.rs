// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Returned when a value that only exists to absorb unrecognized server
/// responses is asked for its outbound request form.
///
/// This is a programmer error rather than a data error: a request must never
/// be built from a value the client could not even name. Callers are
/// expected to `?`/`unwrap` this at the request-building boundary so misuse
/// surfaces during development.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{literal}` is not a value the server accepts in a request")]
pub struct UnsupportedRequestValue {
    /// The canonical literal of the offending value.
    pub literal: &'static str,
}
