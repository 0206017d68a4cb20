pub mod steps_op;
pub mod timestamps_op;
