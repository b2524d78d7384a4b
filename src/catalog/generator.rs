use crate::catalog::incidence::{base_price, INCIDENCE};
use crate::catalog::RandomSource;
use crate::entities::{Catalog, Fare, RideOffer, RouteRequest};
use crate::error::Error;

const JITTER_SPAN: f64 = 20.0;
const JITTER_OFFSET: i32 = 10;

/// Integer in `[-10, 9]` drawn from one sample.
pub fn jitter<R: RandomSource + ?Sized>(rand: &mut R) -> i32 {
    let sample = rand.sample();
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    };

    (sample * JITTER_SPAN).floor() as i32 - JITTER_OFFSET
}

/// Builds a fresh catalog for `request`.
///
/// Every entry of the incidence table yields exactly one offer, so the
/// result is either complete or an error. Coordinates do not affect prices.
#[tracing::instrument(skip(rand, request), fields(origin = %request.origin, destination = %request.destination))]
pub fn generate<R: RandomSource + ?Sized>(
    request: &RouteRequest,
    rand: &mut R,
) -> Result<Catalog, Error> {
    request.validate()?;

    let catalog: Catalog = INCIDENCE
        .iter()
        .map(|&(service, class, eta)| {
            let price = Fare::new(base_price(class) + jitter(rand));
            RideOffer::new(service, class, price, eta)
        })
        .collect();

    tracing::debug!("generated {} offers", catalog.len());

    Ok(catalog)
}
