pub mod status_led;
pub mod switch;

pub use status_led::StatusLed;
pub use switch::Switch;
