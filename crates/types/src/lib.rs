//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be used by
//! the core logic, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, `y = 0`
//!
//! # Timing
//!
//! The game advances one row every [`TICK_MS`] milliseconds. The delay is
//! measured from the end of one tick to the start of the next.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rgb, COLS, ROWS};
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//!
//! assert_eq!(PieceKind::O.index(), 1);
//! assert_eq!(Rgb::hex("#eb6b6f"), Rgb::new(0xeb, 0x6b, 0x6f));
//! ```

/// Board width in cells (10 columns)
pub const COLS: u8 = 10;

/// Board height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Default delay between gravity ticks (500ms)
pub const TICK_MS: u64 = 500;

/// Points awarded per cleared line. Multi-line clears are strictly linear.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Largest side of any piece matrix.
pub const MAX_SHAPE_SIZE: usize = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#272744"), Some(Rgb::new(0x27, 0x27, 0x44)));
    /// assert_eq!(Rgb::from_hex("fbf5ef"), Some(Rgb::new(0xfb, 0xf5, 0xef)));
    /// assert_eq!(Rgb::from_hex("#12345"), None);
    /// assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    /// ```
    pub const fn from_hex(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let start = if !bytes.is_empty() && bytes[0] == b'#' { 1 } else { 0 };
        if bytes.len() - start != 6 {
            return None;
        }
        let mut channels = [0u8; 3];
        let mut i = 0;
        while i < 3 {
            let hi = match nibble(bytes[start + 2 * i]) {
                Some(v) => v,
                None => return None,
            };
            let lo = match nibble(bytes[start + 2 * i + 1]) {
                Some(v) => v,
                None => return None,
            };
            channels[i] = (hi << 4) | lo;
            i += 1;
        }
        Some(Self::new(channels[0], channels[1], channels[2]))
    }

    /// [`from_hex`](Self::from_hex) for palette constants.
    ///
    /// # Panics
    ///
    /// If `s` is not a valid color; in a `const` this fails the build.
    pub const fn hex(s: &str) -> Self {
        match Self::from_hex(s) {
            Some(rgb) => rgb,
            None => panic!("invalid hex color"),
        }
    }
}

const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// The seven piece templates, in catalog order.
///
/// The discriminant is the template index used for sampling and for the
/// color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Catalog index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Discrete player commands.
///
/// Commands only have an effect while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no points awarded)
    SoftDrop,
    /// Rotate piece 90° clockwise, in place
    Rotate,
}

/// Lifecycle of one game instance.
///
/// - **Idle**: nothing started yet
/// - **Running**: the loop is ticking
/// - **GameOver**: idle again after a spawn collision; the final score is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl Mode {
    pub fn is_running(&self) -> bool {
        matches!(self, Mode::Running)
    }

}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: settled cell holding the color of the piece that filled it
pub type Cell = Option<Rgb>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_kind_index_follows_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn only_running_mode_is_running() {
        assert!(!Mode::Idle.is_running());
        assert!(Mode::Running.is_running());
        assert!(!Mode::GameOver.is_running());
        assert_eq!(Mode::default(), Mode::Idle);
    }

    #[test]
    fn hex_colors_reject_non_ascii() {
        assert_eq!(Rgb::from_hex("#ééé"), None);
        assert_eq!(Rgb::from_hex("#éé12"), None);
    }

    #[test]
    fn hex_parses_mixed_case() {
        assert_eq!(Rgb::hex("#FbF5eF"), Rgb::new(0xfb, 0xf5, 0xef));
        const BG: Rgb = Rgb::hex("272744");
        assert_eq!(BG, Rgb::new(0x27, 0x27, 0x44));
    }

    #[test]
    #[should_panic(expected = "invalid hex color")]
    fn hex_panics_on_bad_input() {
        let _ = Rgb::hex("#12345g");
    }
}
