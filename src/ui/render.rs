mod dashboard;
mod frame;
mod theme;

pub use dashboard::{TerminalGuard, Ui, UiActions};
pub use frame::{FrameLayout, click_offset, draw_frame, frame_layout, mask_line};
