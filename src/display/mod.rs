//! Presentation layer for a character display.
//!
//! - `lcd`: the `CharacterDisplay` trait and an in-memory `TextDisplay`
//! - `layout`: where each space is drawn on a 20x4 grid
//! - `presenter`: an `EventSink` that turns board events into writes
//!
//! Character encoding, backlight and cursor blink belong to the concrete
//! display driver and are not modelled here.

pub mod lcd;
pub mod layout;
pub mod presenter;

pub use lcd::{CharacterDisplay, TextDisplay};
pub use layout::{board_lines, notification_column, player_pit_anchor, space_anchor, two_digits, Cell};
pub use presenter::Presenter;
