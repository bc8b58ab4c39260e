pub mod controller;
pub mod timers;

pub use controller::{DragController, DragSession, GestureEvent, GestureState};
pub use timers::{OneShotTimer, Timers};
