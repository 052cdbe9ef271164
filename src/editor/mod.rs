//! Masked time-range editor core.
//!
//! The editor owns a 13 character `hh:mm - hh:mm` buffer and a caret. Each
//! keystroke is validated against the slot under the caret, applied, the
//! caret is moved off any separator, and the buffer is parsed back into a
//! [`TimeRange`]. Nothing here touches a terminal; see [`crate::ui`] for
//! rendering.
mod buffer;
mod caret;
mod control;
mod format;
mod presets;
mod range;
mod slots;
mod state;
mod validate;


pub use buffer::MaskBuffer;
pub use caret::{Direction, adjust_caret};
pub use control::RangeEditor;
pub use format::{format_range, parse_buffer};
pub use presets::{Clock, FixedClock, PresetRange, SystemClock, default_presets, preset_range};
pub use range::{TimeRange, reference_date};
pub use slots::{DigitSlot, Field, LAST_SLOT_INDEX, MASK_LEN, MASK_TEMPLATE, SlotRole, is_digit_slot};
pub use state::{EditorKey, EditorState, KeyOutcome, Transition, apply_key, place_caret};
pub use validate::{Verdict, validate_digit};
