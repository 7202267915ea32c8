pub mod country;
pub mod matches;
pub mod round;
