pub mod frame_clock;
pub mod rendering;
pub mod services;
pub mod ui;
