// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Typed model for the address and place categories of the Google Maps
//! geocoding web service.
//!
//! The service tags every result with lowercase snake_case category tokens
//! (`"street_address"`, `"locality"`, ...). [`AddressType`] gives each token
//! a variant, converts back and forth, and absorbs tokens from newer server
//! versions into [`AddressType::Unknown`] instead of failing. The
//! [`UrlValue`] trait is the seam request builders use to embed a category
//! in an outbound URL; the `Unknown` sentinel refuses it.

#[macro_use]
extern crate strum_macros;
#[macro_use]
extern crate log;

pub mod error;

mod address_type;
mod request;

pub use address_type::AddressType;
pub use request::{join, UrlValue};
