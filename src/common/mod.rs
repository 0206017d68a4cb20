pub mod file_utils;
pub mod float_format;
pub mod logging_setup;
