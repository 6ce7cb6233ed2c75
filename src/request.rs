// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::UnsupportedRequestValue;

/// Capability to be rendered into a URL query parameter value.
///
/// Implementations return the exact token the server documents; anything
/// that cannot legally appear in a request errs instead.
pub trait UrlValue {
    fn to_url_value(&self) -> Result<&str, UnsupportedRequestValue>;
}

/// Joins values into a single multi-valued parameter, e.g.
/// `result_type=locality|political`. An empty slice joins to `""`.
pub fn join<T: UrlValue>(
    delimiter: char,
    values: &[T],
) -> Result<String, UnsupportedRequestValue> {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(value.to_url_value()?);
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AddressType;

    #[test]
    fn join_pipe_separated() {
        let types = [AddressType::Locality, AddressType::Political];
        assert_eq!(join('|', &types), Ok("locality|political".into()));
    }

    #[test]
    fn join_single_and_empty() {
        assert_eq!(join('|', &[AddressType::Route]), Ok("route".into()));
        let none: [AddressType; 0] = [];
        assert_eq!(join('|', &none), Ok(String::new()));
    }

    #[test]
    fn join_rejects_unknown() {
        let types = [AddressType::Locality, AddressType::Unknown];
        assert_eq!(
            join('|', &types),
            Err(UnsupportedRequestValue { literal: "unknown" })
        );
    }
}
