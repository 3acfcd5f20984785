use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    GenZ,
    Millennials,
    GenX,
    BoomersII,
    BoomersI,
    PostWar,
    Wwii,
    Other,
}

/// Inclusive birth-year ranges, checked in order.
const RANGES: [(i32, i32, Generation); 7] = [
    (1997, 2012, Generation::GenZ),
    (1981, 1996, Generation::Millennials),
    (1965, 1980, Generation::GenX),
    (1955, 1964, Generation::BoomersII),
    (1946, 1954, Generation::BoomersI),
    (1928, 1945, Generation::PostWar),
    (1922, 1927, Generation::Wwii),
];

impl Generation {
    pub fn from_birth_year(year: i32) -> Self {
        RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&year))
            .map(|(_, _, generation)| *generation)
            .unwrap_or(Generation::Other)
    }

    /// Label with the age range annotation, as returned to clients.
    pub fn label(&self) -> &'static str {
        match self {
            Generation::GenZ => "Gen Z (12 - 27)",
            Generation::Millennials => "Millennials (28 - 43)",
            Generation::GenX => "Gen X (44 - 59)",
            Generation::BoomersII => "Boomers II (a/k/a Generation Jones) (60 - 69)",
            Generation::BoomersI => "Boomers I (70 - 78)",
            Generation::PostWar => "Post War (79 - 96)",
            Generation::Wwii => "WWII (97 - 102)",
            Generation::Other => "Other",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
