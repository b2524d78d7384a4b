use serde::Serialize;

use crate::entities::RideOffer;

/// Offers for one search, in incidence-table order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    offers: Vec<RideOffer>,
}

impl Catalog {
    pub fn new(offers: Vec<RideOffer>) -> Self {
        Self { offers }
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RideOffer> {
        self.offers.iter()
    }
}

impl FromIterator<RideOffer> for Catalog {
    fn from_iter<I: IntoIterator<Item = RideOffer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RideOffer;
    type IntoIter = std::slice::Iter<'a, RideOffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.offers.iter()
    }
}
