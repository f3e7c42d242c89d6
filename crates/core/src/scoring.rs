//! Scoring - flat per-line points
//!
//! `score += lines * 100`. No multi-line or combo bonus.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows at once.
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_is_linear() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }
}
