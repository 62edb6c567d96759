//! Identity factory: plates, colours, brands, and crossing locations.

use bx_core::country::{ALL_CROSSINGS, corridor};
use bx_core::vehicle::PLATE_LETTERS;
use bx_core::{Colour, SimRng, VehicleType};

/// `<country>-<2 letters><4 digits>`.  Draws two letters then one integer.
pub fn plate(rng: &mut SimRng, country: &str) -> String {
    let a = rng.pick(&PLATE_LETTERS);
    let b = rng.pick(&PLATE_LETTERS);
    let digits: u32 = rng.gen_range(0..10_000);
    format!("{country}-{a}{b}{digits:04}")
}

pub fn colour(rng: &mut SimRng) -> Colour {
    rng.pick(&Colour::ALL)
}

pub fn brand(rng: &mut SimRng, vehicle_type: VehicleType) -> &'static str {
    rng.pick(vehicle_type.brands())
}

/// A crossing on the country's own corridor, or any crossing if it has none.
pub fn crossing(rng: &mut SimRng, country: &str) -> &'static str {
    rng.pick(corridor(country).unwrap_or(&ALL_CROSSINGS[..]))
}
