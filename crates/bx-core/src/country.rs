//! Country groups, border-crossing corridors, and the single-letter code map.
//!
//! Country codes are ISO 3166-1 alpha-2 strings held as `&'static str`; every
//! code the generator emits comes from one of the tables below.

/// Neighbouring countries with a direct corridor into the simulated border.
pub const NEAR: [&str; 5] = ["DE", "FR", "IT", "AT", "LI"];

/// Fixed traffic shares of the near-corridor countries (before renormalising).
pub const NEAR_SHARES: [f64; 5] = [0.42, 0.18, 0.20, 0.08, 0.02];

pub const MID: [&str; 10] = ["NL", "BE", "LU", "DK", "CZ", "PL", "SK", "HU", "SI", "HR"];

pub const FAR: [&str; 13] = [
    "ES", "PT", "IE", "SE", "FI", "EE", "LV", "LT", "RO", "BG", "GR", "CY", "MT",
];

pub const BALKAN: [&str; 5] = ["AL", "BA", "RS", "ME", "MK"];

pub const OTHER_EUROPE: [&str; 11] = [
    "NO", "IS", "GB", "UA", "MD", "BY", "TR", "SM", "VA", "MC", "AD",
];

/// Named crossing points and the corridor country each one serves.
pub const CROSSINGS: [(&str, &str); 16] = [
    ("Basel",               "DE"),
    ("Rheinfelden",         "DE"),
    ("Kreuzlingen",         "DE"),
    ("Schaffhausen",        "DE"),
    ("Bargen",              "DE"),
    ("Geneve",              "FR"),
    ("Bardonnex",           "FR"),
    ("Vallorbe",            "FR"),
    ("Boncourt",            "FR"),
    ("Chiasso",             "IT"),
    ("Brusata (Mendrisio)", "IT"),
    ("Brissago",            "IT"),
    ("St. Margrethen",      "AT"),
    ("Au (SG)",             "AT"),
    ("Schaanwald",          "LI"),
    ("Bendern",             "LI"),
];

/// Every crossing location, in table order.
pub const ALL_CROSSINGS: [&str; 16] = [
    "Basel", "Rheinfelden", "Kreuzlingen", "Schaffhausen", "Bargen",
    "Geneve", "Bardonnex", "Vallorbe", "Boncourt",
    "Chiasso", "Brusata (Mendrisio)", "Brissago",
    "St. Margrethen", "Au (SG)",
    "Schaanwald", "Bendern",
];

/// Crossings of the corridor that serves `country`, or `None` if the country
/// has no dedicated corridor.
pub fn corridor(country: &str) -> Option<&'static [&'static str]> {
    match country {
        "DE" => Some(&ALL_CROSSINGS[0..5]),
        "FR" => Some(&ALL_CROSSINGS[5..9]),
        "IT" => Some(&ALL_CROSSINGS[9..12]),
        "AT" => Some(&ALL_CROSSINGS[12..14]),
        "LI" => Some(&ALL_CROSSINGS[14..16]),
        _ => None,
    }
}

/// Reduce a country code to the single-letter form used on the wire.
///
/// Codes already one character long pass through; codes missing from the
/// table fall back to their first character; the empty string is returned
/// unchanged.
pub fn to_iso1(country: &'static str) -> &'static str {
    if country.chars().count() <= 1 {
        return country;
    }
    match country {
        "DE" | "DK" => "D",
        "FR" | "FI" => "F",
        "IT" | "IE" | "IS" => "I",
        "AT" | "AL" | "AD" => "A",
        "LI" | "LU" | "LV" | "LT" => "L",
        "NL" | "NO" => "N",
        "BE" | "BG" | "BA" | "BY" => "B",
        "CZ" | "CY" => "C",
        "PL" | "PT" => "P",
        "SK" | "SI" | "SE" | "SM" => "S",
        "HU" | "HR" => "H",
        "ES" | "EE" => "E",
        "RO" | "RS" => "R",
        "GR" | "GB" => "G",
        "MT" | "ME" | "MK" | "MD" | "MC" => "M",
        "UA" => "U",
        "TR" => "T",
        "VA" => "V",
        _ => first_char(country),
    }
}

fn first_char(s: &'static str) -> &'static str {
    match s.char_indices().nth(1) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
