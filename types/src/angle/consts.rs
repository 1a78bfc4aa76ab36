pub(crate) const POSITIVE: i8 = 1;
pub(crate) const NEGATIVE: i8 = -1;

pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = 3600.0;

// the upper bound (exclusive) of the minutes and seconds packed into hour-pair
pub(crate) const MAX_HP_PAIR: f64 = 60.0;
