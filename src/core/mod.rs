pub mod range_stepper;
pub mod timestamp_scanner;
