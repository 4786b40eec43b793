//! Fixed, positionally indexed name tables.
//!
//! Cycle arithmetic produces an index; the index selects the name. None of
//! these tables is ever keyed by anything other than position.

/// Weekday names, indexed from Sunday (0) through Saturday (6)
pub const DAY_NAMES: [&str; 7] = ["Ahad", "Senen", "Selasa", "Rebo", "Kemis", "Jemuwah", "Setu"];

/// Pasaran names, indexed by `(weekday + 1) % 5`
pub const PASARAN_NAMES: [&str; 5] = ["Kliwon", "Legi", "Pahing", "Pon", "Wage"];

/// Month names in the Javanese convention, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "Sura",
    "Sapar",
    "Mulud",
    "Bakda Mulud",
    "Jumadilawal",
    "Jumadilakir",
    "Rejeb",
    "Ruwah",
    "Pasa",
    "Sawal",
    "Sela",
    "Besar",
];

/// Month names in the Arabic-derived convention, indexed by `month - 1`
pub const ARABIC_MONTH_NAMES: [&str; 12] = [
    "Muharam",
    "Sapar",
    "Rabingulawal",
    "Rabingulakir",
    "Jumadilawal",
    "Jumadilakir",
    "Rejeb",
    "Sya'ban",
    "Ramelan",
    "Sawal",
    "Dulkangidah",
    "Dulkijah",
];

/// The thirty wuku, each lasting one seven-day week
pub const WUKU_NAMES: [&str; 30] = [
    "Sinta",
    "Landep",
    "Wukir",
    "Kurantil",
    "Tolu",
    "Gumbreg",
    "Warigalit",
    "Warigagung",
    "Julungwangi",
    "Sungsang",
    "Galungan",
    "Kuningan",
    "Langkir",
    "Mandasiya",
    "Julungpujut",
    "Pahang",
    "Kuruwelut",
    "Marakeh",
    "Tambir",
    "Medangkungan",
    "Maktal",
    "Wuye",
    "Manahil",
    "Prangbakat",
    "Bala",
    "Wugu",
    "Wayang",
    "Kulawu",
    "Dukut",
    "Watugunung",
];

/// Finds the table position of `name`, ignoring ASCII case and surrounding whitespace
pub(crate) fn position_of(table: &[&str], name: &str) -> Option<usize> {
    let needle = name.trim();
    table.iter().position(|entry| entry.eq_ignore_ascii_case(needle))
}
