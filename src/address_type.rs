// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::error::UnsupportedRequestValue;
use crate::request::UrlValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The category of a geocoded address component or place, as the geocoding
/// service labels them.
///
/// Each variant maps to one canonical lowercase token from the service's
/// documented vocabulary; `AsRef<str>` and `Display` both produce it.
/// Parsing a token the library does not know yields [`AddressType::Unknown`]
/// via [`AddressType::from_wire`], so responses from a newer server never
/// fail to decode.
#[derive(
    AsRefStr, IntoStaticStr, EnumString, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum AddressType {
    /// A precise street address.
    StreetAddress,
    /// A named route (such as "US 101").
    Route,
    /// A major intersection, usually of two major roads.
    Intersection,
    /// A political entity, usually a polygon of some civil administration.
    Political,
    /// The national political entity, typically the highest order type
    /// returned by the geocoder.
    Country,
    /// A first-order civil entity below the country level (states, in the
    /// US). Not all nations exhibit these administrative levels.
    #[strum(serialize = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    /// A second-order civil entity below the country level (counties, in
    /// the US).
    #[strum(serialize = "administrative_area_level_2")]
    AdministrativeAreaLevel2,
    /// A third-order civil entity below the country level; a minor civil
    /// division.
    #[strum(serialize = "administrative_area_level_3")]
    AdministrativeAreaLevel3,
    #[strum(serialize = "administrative_area_level_4")]
    AdministrativeAreaLevel4,
    #[strum(serialize = "administrative_area_level_5")]
    AdministrativeAreaLevel5,
    /// A commonly-used alternative name for the entity.
    ColloquialArea,
    /// An incorporated city or town political entity.
    Locality,
    /// A specific type of Japanese locality, to distinguish multiple
    /// locality components within a Japanese address.
    Ward,
    /// A first-order civil entity below a locality. Levels 1 through 5 may
    /// additionally be present; larger numbers indicate a smaller
    /// geographic area.
    Sublocality,
    #[strum(serialize = "sublocality_level_1")]
    SublocalityLevel1,
    #[strum(serialize = "sublocality_level_2")]
    SublocalityLevel2,
    #[strum(serialize = "sublocality_level_3")]
    SublocalityLevel3,
    #[strum(serialize = "sublocality_level_4")]
    SublocalityLevel4,
    #[strum(serialize = "sublocality_level_5")]
    SublocalityLevel5,
    /// A named neighborhood.
    Neighborhood,
    /// A named location, usually a building or collection of buildings with
    /// a common name.
    Premise,
    /// A first-order entity below a named location, usually a singular
    /// building in a collection with a common name.
    Subpremise,
    /// A postal code as used to address mail within the country.
    PostalCode,
    /// A postal code prefix as used to address mail within the country.
    PostalCodePrefix,
    /// A prominent natural feature.
    NaturalFeature,
    /// An airport.
    Airport,
    /// A university.
    University,
    /// A named park.
    Park,
    /// A named point of interest that doesn't fit any other category.
    PointOfInterest,
    /// A place that has not yet been categorized.
    Establishment,
    /// The location of a bus stop.
    BusStation,
    /// The location of a train station.
    TrainStation,
    /// The location of a subway station.
    SubwayStation,
    /// The location of a transit station.
    TransitStation,
    /// The location of a light rail station.
    LightRailStation,
    /// The location of a church.
    Church,
    /// The location of a finance institute.
    Finance,
    /// The location of a post office.
    PostOffice,
    /// The location of a place of worship.
    PlaceOfWorship,
    /// A grouping of geographic areas used for mailing addresses in some
    /// countries.
    PostalTown,
    /// The location of a synagogue.
    Synagogue,

    // Place categories the server returns but does not currently document.
    Food,
    GroceryOrSupermarket,
    Store,
    Lawyer,
    Health,
    InsuranceAgency,
    GasStation,
    CarDealer,
    CarRepair,
    MealTakeaway,
    FurnitureStore,
    HomeGoodsStore,
    ShoppingMall,
    Gym,
    Accounting,
    MovingCompany,
    Lodging,
    Storage,

    /// An address type the server returned that this version of the library
    /// does not know. Upgrade the library to support the new value. Never
    /// valid in an outbound request.
    Unknown,
}

impl AddressType {
    /// Maps a category token received from the server to its variant.
    ///
    /// Total over all strings: a token this version does not recognize maps
    /// to [`AddressType::Unknown`] instead of failing, so a client keeps
    /// working when the server introduces new categories.
    pub fn from_wire(s: &str) -> Self {
        match s.parse::<AddressType>() {
            Ok(address_type) => address_type,
            Err(_) => {
                warn!("unrecognized address type `{}` in response", s);
                AddressType::Unknown
            }
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl UrlValue for AddressType {
    fn to_url_value(&self) -> Result<&str, UnsupportedRequestValue> {
        match self {
            AddressType::Unknown => Err(UnsupportedRequestValue {
                literal: "unknown",
            }),
            _ => Ok(self.as_ref()),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for AddressType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AddressType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AddressType::from_wire(&s))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::*;

    #[test]
    fn deserializes_known_tokens() {
        let parsed: AddressType = serde_json::from_str(r#""route""#).unwrap();
        assert_eq!(parsed, AddressType::Route);
        let parsed: Vec<AddressType> =
            serde_json::from_str(r#"["locality", "political"]"#).unwrap();
        assert_eq!(parsed, vec![AddressType::Locality, AddressType::Political]);
    }

    #[test]
    fn deserializes_future_tokens_as_unknown() {
        let parsed: AddressType = serde_json::from_str(r#""hoverboard_dock""#).unwrap();
        assert_eq!(parsed, AddressType::Unknown);
    }

    #[test]
    fn serializes_canonical_literal() {
        assert_eq!(
            serde_json::to_string(&AddressType::Locality).unwrap(),
            r#""locality""#
        );
        assert_eq!(
            serde_json::to_string(&AddressType::Unknown).unwrap(),
            r#""unknown""#
        );
    }
}
