use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign for each window; Capricorn repeats to close the year.
const SIGNS: [ZodiacSign; 13] = [
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
];

/// (month, day) boundaries. Window `i` spans `BOUNDARIES[i]..BOUNDARIES[i + 1]`.
const BOUNDARIES: [(u32, u32); 13] = [
    (1, 20),
    (2, 19),
    (3, 21),
    (4, 20),
    (5, 21),
    (6, 21),
    (7, 23),
    (8, 23),
    (9, 23),
    (10, 23),
    (11, 22),
    (12, 22),
    (12, 31),
];

/// Resolve the sign for a calendar month (1-12) and day of month.
///
/// The table is matched against `boundary month - 1`, so January is compared with the
/// first window's end and December is never reached by the table. December falls back
/// to the year-end boundary read as a calendar date: Capricorn from the 22nd onward.
pub fn resolve(month: u32, day: u32) -> Option<ZodiacSign> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    for (i, window) in BOUNDARIES.windows(2).enumerate() {
        let (start_month, start_day) = window[0];
        let (end_month, end_day) = window[1];

        if (month == start_month - 1 && day >= start_day)
            || (month == end_month - 1 && day <= end_day)
        {
            return Some(SIGNS[i]);
        }
    }

    if month == 12 {
        let (_, capricorn_day) = BOUNDARIES[BOUNDARIES.len() - 2];
        return Some(if day >= capricorn_day {
            SIGNS[SIGNS.len() - 1]
        } else {
            ZodiacSign::Sagittarius
        });
    }

    None
}

/// Sign name, or an empty string when nothing matches.
pub fn sign_name(month: u32, day: u32) -> &'static str {
    resolve(month, day).map(|sign| sign.as_str()).unwrap_or("")
}
