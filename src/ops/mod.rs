pub mod board;
pub mod collision;
pub mod task_ops;
pub mod view;
