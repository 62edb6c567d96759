//! Vehicle categories, colours, and brand tables.
//!
//! All tables are `'static` and non-empty, so uniform picks over them are
//! total.  Weighted choice over [`VehicleType`] uses [`VEHICLE_TYPE_WEIGHTS`]
//! through a [`Discrete`](crate::Discrete) table built once per run.

/// The six vehicle categories recorded at a crossing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VehicleType {
    PassengerCar,
    DeliveryVan,
    Truck,
    Motorcycle,
    Bus,
    Other,
}

/// Baseline traffic mix.  Sums to 1.0.
pub const VEHICLE_TYPE_WEIGHTS: [(VehicleType, f64); 6] = [
    (VehicleType::PassengerCar, 0.62),
    (VehicleType::DeliveryVan,  0.13),
    (VehicleType::Truck,        0.12),
    (VehicleType::Motorcycle,   0.08),
    (VehicleType::Bus,          0.03),
    (VehicleType::Other,        0.02),
];

/// Fallback brand list for categories without a dedicated table.
pub const GENERIC_BRANDS: &[&str] = &["Generic"];

impl VehicleType {
    /// Column value written to sinks.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::PassengerCar => "passenger_car",
            VehicleType::DeliveryVan  => "delivery_van",
            VehicleType::Truck        => "truck",
            VehicleType::Motorcycle   => "motorcycle",
            VehicleType::Bus          => "bus",
            VehicleType::Other        => "other",
        }
    }

    /// Brands plausible for this category.
    pub fn brands(self) -> &'static [&'static str] {
        match self {
            VehicleType::PassengerCar => &[
                "VW", "BMW", "Mercedes", "Audi", "Skoda", "Toyota", "Renault",
                "Peugeot", "Fiat", "Ford", "Tesla", "Opel", "Seat", "Hyundai",
            ],
            VehicleType::DeliveryVan => &["VW", "Mercedes", "Ford", "Renault", "Fiat", "Peugeot", "Iveco"],
            VehicleType::Truck       => &["Volvo", "Scania", "MAN", "DAF", "Mercedes", "Iveco"],
            VehicleType::Motorcycle  => &["Yamaha", "Honda", "Kawasaki", "BMW", "Suzuki", "Ducati", "KTM"],
            VehicleType::Bus         => &["MAN", "Mercedes", "Volvo", "Iveco", "Scania"],
            VehicleType::Other       => GENERIC_BRANDS,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body colour palette (9 values).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Colour {
    White,
    Black,
    Silver,
    Blue,
    Red,
    Grey,
    Green,
    Brown,
    Yellow,
}

impl Colour {
    pub const ALL: [Colour; 9] = [
        Colour::White,
        Colour::Black,
        Colour::Silver,
        Colour::Blue,
        Colour::Red,
        Colour::Grey,
        Colour::Green,
        Colour::Brown,
        Colour::Yellow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Colour::White  => "white",
            Colour::Black  => "black",
            Colour::Silver => "silver",
            Colour::Blue   => "blue",
            Colour::Red    => "red",
            Colour::Grey   => "grey",
            Colour::Green  => "green",
            Colour::Brown  => "brown",
            Colour::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plate letters: A–Z without the look-alikes `I` and `O`.
pub const PLATE_LETTERS: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
