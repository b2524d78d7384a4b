use crate::entities::{Catalog, RideOffer, VehicleFilter};

/// Offers admitted by `tag`, in catalog order.
pub fn filter(catalog: &Catalog, tag: VehicleFilter) -> Vec<&RideOffer> {
    catalog
        .iter()
        .filter(|offer| tag.admits(offer.vehicle_class))
        .collect()
}

/// Owned variant of [`filter`] for handing a view across an API boundary.
pub fn filtered(catalog: Catalog, tag: VehicleFilter) -> Catalog {
    match tag {
        VehicleFilter::All => catalog,
        VehicleFilter::Only(_) => catalog
            .iter()
            .filter(|offer| tag.admits(offer.vehicle_class))
            .cloned()
            .collect(),
    }
}
