pub mod color;
pub mod reading;
pub mod sample;
pub mod time_format;

pub use color::Rgba;
pub use reading::AmbientReading;
pub use sample::Sample;
pub use time_format::{CHARTJS_TIME_FORMAT, TIME_LABEL_FORMAT, format_time_label};
