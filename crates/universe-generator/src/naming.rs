//! Catalog-style names.
//!
//! Each system draws a catalog designation such as `KV-4729` from its own
//! `names` stream. Stars append a component letter, planets a lowercase
//! letter, moons a Roman numeral:
//!
//! - `KV-4729 A`, `KV-4729 B` for the root star and its companions
//! - `KV-4729 b` for a planet of the root star, `KV-4729 B b` for a
//!   companion's planet
//! - `KV-4729 b II` for a moon, `KV-4729 b II.1` for a sub-moon

use rand::RngCore;

use entropy::Stream;

const GREEK: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

/// Two letters and four digits, e.g. `KV-4729`. Consumes one 64-bit word.
pub fn catalog_name(rng: &mut Stream) -> String {
    let bytes = rng.next_u64().to_le_bytes();
    let prefix1 = (bytes[0] % 26 + b'A') as char;
    let prefix2 = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}{}-{:04}", prefix1, prefix2, number)
}

/// Component letter of the `index`-th star: `A`, `B`, `C`, ...
pub fn star_letter(index: usize) -> String {
    alphabetic(index, b'A')
}

/// Planet letter by sibling position: `b`, `c`, `d`, ...
pub fn planet_letter(index: usize) -> String {
    alphabetic(index + 1, b'a')
}

fn alphabetic(index: usize, base: u8) -> String {
    if index < 26 {
        ((base + index as u8) as char).to_string()
    } else {
        format!("{}{}", (base + (index % 26) as u8) as char, index / 26)
    }
}

/// Roman numeral for a 0-based moon index (0 → `I`).
pub fn moon_numeral(index: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut remaining = index + 1;
    let mut numeral = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    numeral
}

/// Greek-letter name for the `index`-th group; wraps with a Roman suffix.
pub fn greek_name(index: usize) -> String {
    let letter = GREEK[index % GREEK.len()];
    match index / GREEK.len() {
        0 => letter.to_string(),
        cycle => format!("{} {}", letter, moon_numeral(cycle)),
    }
}
