use std::fmt;

/// Game mode a ranking is tracked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayStyle {
    /// Single play.
    Sp,
    /// Double play.
    Dp,
}

impl PlayStyle {
    /// Every play style, in the order a harvest visits them.
    pub const ALL: [PlayStyle; 2] = [PlayStyle::Sp, PlayStyle::Dp];

    /// Numeric code sent as the `play_style` form field.
    pub fn code(self) -> u8 {
        match self {
            PlayStyle::Sp => 0,
            PlayStyle::Dp => 1,
        }
    }

    /// Label used in artifact names.
    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Sp => "SP",
            PlayStyle::Dp => "DP",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
