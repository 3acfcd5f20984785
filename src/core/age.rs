use crate::core::date_input::weekday_name;
use crate::core::generation::Generation;
use crate::core::zodiac;
use crate::domain::model::AgeResult;
use crate::domain::ports::Clock;
use chrono::{DateTime, Datelike, Utc};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
/// 以 30 天近似一個月
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
/// 以 365 天近似一年，閏年不另計
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

pub struct AgeCalculator<C: Clock> {
    clock: C,
}

impl<C: Clock> AgeCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn calculate(&self, birth: DateTime<Utc>) -> AgeResult {
        let now = self.clock.now();
        let elapsed_ms = now.timestamp_millis() - birth.timestamp_millis();
        let seconds = elapsed_ms.div_euclid(1000);

        let years = seconds.div_euclid(SECONDS_PER_YEAR);

        tracing::debug!(birth = %birth, now = %now, seconds, years, "calculated age");

        AgeResult {
            years,
            seconds,
            hours: seconds.div_euclid(SECONDS_PER_HOUR),
            minutes: seconds.div_euclid(SECONDS_PER_MINUTE),
            days: seconds.div_euclid(SECONDS_PER_DAY),
            weeks: seconds.div_euclid(SECONDS_PER_WEEK),
            months: seconds.div_euclid(SECONDS_PER_MONTH),
            centuries: years.div_euclid(100),
            decades: years.div_euclid(10),
            day_of_week: weekday_name(birth.weekday()).to_string(),
            zodiac_sign: zodiac::sign_name(birth.month(), birth.day()).to_string(),
            generation: Generation::from_birth_year(birth.year()).label().to_string(),
        }
    }
}
