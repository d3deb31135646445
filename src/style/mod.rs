use clap::ValueEnum;
use serde::Deserialize;

use crate::domain::VoteTuple;

/// An RGB color with each channel as a fraction in [0, 1].
///
/// Channels stay fractional through the whole pipeline; conversion to
/// 0-255 integers happens only inside the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Coloring policy applied uniformly to every region of one rendering run.
///
/// The set is closed: dispatch is an exhaustive match, so an unrecognized
/// style cannot reach the color computation at all. Raw style input exists
/// only at the CLI boundary, where it is validated into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Black outlines on white fill, ignoring vote counts
    BlackWhite,
    /// Winner-take-all: red or blue for a strict plurality, gray otherwise
    RedBlue,
    /// Vote-share blend mapping each party's share to a color channel
    Purple,
}

impl Style {
    /// Pen color used for region outlines
    pub fn outline(&self) -> Color {
        match self {
            Style::BlackWhite => Color::BLACK,
            Style::RedBlue | Style::Purple => Color::WHITE,
        }
    }

    /// Fill color for a region with the given vote counts. Pure.
    pub fn fill(&self, votes: &VoteTuple) -> Color {
        match self {
            Style::BlackWhite => Color::WHITE,

            // Red or blue only on a strict plurality. Any tie at the top,
            // or "other" leading, falls through to gray.
            Style::RedBlue => {
                if votes.republican > votes.democrat && votes.republican > votes.other {
                    Color::RED
                } else if votes.democrat > votes.republican && votes.democrat > votes.other {
                    Color::BLUE
                } else {
                    Color::GRAY
                }
            }

            // Each category's share of the total maps to one channel:
            // Republican -> red, Other -> green, Democrat -> blue. Shares
            // sum to 1, so the palette spans a simplex slice of color
            // space rather than the full cube.
            Style::Purple => {
                let total = votes.total();
                if total == 0 {
                    Color::GRAY
                } else {
                    let total = total as f64;
                    Color::new(
                        votes.republican as f64 / total,
                        votes.other as f64 / total,
                        votes.democrat as f64 / total,
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_white_ignores_votes() {
        assert_eq!(Style::BlackWhite.fill(&VoteTuple::new(9, 1, 0)), Color::WHITE);
        assert_eq!(Style::BlackWhite.fill(&VoteTuple::ZERO), Color::WHITE);
        assert_eq!(Style::BlackWhite.outline(), Color::BLACK);
    }

    #[test]
    fn test_red_blue_strict_plurality() {
        assert_eq!(Style::RedBlue.fill(&VoteTuple::new(5, 3, 1)), Color::RED);
        assert_eq!(Style::RedBlue.fill(&VoteTuple::new(2, 7, 1)), Color::BLUE);
    }

    #[test]
    fn test_red_blue_tie_is_gray() {
        assert_eq!(Style::RedBlue.fill(&VoteTuple::new(5, 5, 0)), Color::GRAY);
    }

    #[test]
    fn test_red_blue_other_plurality_is_gray() {
        assert_eq!(Style::RedBlue.fill(&VoteTuple::new(1, 2, 4)), Color::GRAY);
        assert_eq!(Style::RedBlue.outline(), Color::WHITE);
    }

    #[test]
    fn test_purple_zero_total_is_mid_gray() {
        let fill = Style::Purple.fill(&VoteTuple::ZERO);
        assert_eq!(fill, Color::GRAY);
        assert_eq!(fill.r, fill.g);
        assert_eq!(fill.g, fill.b);
    }

    #[test]
    fn test_purple_share_channels() {
        // 3 Republican, 1 Democrat, 0 Other out of 4 total
        let fill = Style::Purple.fill(&VoteTuple::new(3, 1, 0));
        assert_eq!(fill, Color::new(0.75, 0.0, 0.25));
    }

    #[test]
    fn test_purple_shares_sum_to_one() {
        let fill = Style::Purple.fill(&VoteTuple::new(941173, 687533, 28471));
        assert!((fill.r + fill.g + fill.b - 1.0).abs() < 1e-12);
    }
}
