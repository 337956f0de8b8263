//! Static pet display lookup, keyed by level.

/// Display name for a pet at the given level.
pub fn pet_name(level: u32) -> &'static str {
    match level {
        0 | 1 => "Baby Pet",
        2 => "Growing Pet",
        3 => "Teenage Pet",
        4 => "Adult Pet",
        5 => "Master Pet",
        _ => "Ultimate Pet",
    }
}

/// ASCII art for a pet at the given level.
pub fn pet_art(level: u32) -> &'static str {
    match level {
        0 | 1 => "(｡･ω･｡)",
        2 => "ʕ•ᴥ•ʔ",
        3 => "ʕ•̀ω•́ʔ✧",
        _ => "ʕ ꈍᴥꈍʔ♡",
    }
}
