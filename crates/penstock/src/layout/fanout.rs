//! Vertical marker stacking.
//!
//! Markers share one x position and fan out around the pipeline center
//! line: the first box sits on the line (odd counts) or straddles it
//! (even counts), and every following box goes below, above, below, ...
//! at a fixed padding from the stack placed so far.

use std::rc::Rc;

use log::debug;

use penstock_core::draw::{BoxStyle, Drawable, TextBox};
use penstock_core::geometry::{Origin, Point};

/// Which side of the stack receives the next box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Below,
    Above,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Side::Below => Side::Above,
            Side::Above => Side::Below,
        }
    }
}

/// Vertical extents of the stack placed so far.
#[derive(Debug, Clone, Copy)]
struct Extents {
    upper_end: f32,
    lower_end: f32,
    next_side: Side,
}

impl Extents {
    fn seed(first: &TextBox) -> Self {
        let bounds = first.bounds();
        Self {
            upper_end: bounds.min_y(),
            lower_end: bounds.max_y(),
            next_side: Side::Below,
        }
    }

    /// Anchor and origin for the next box.
    fn next_anchor(&self, x: f32, padding: f32) -> (Point, Origin) {
        match self.next_side {
            Side::Below => (Point::new(x, self.lower_end + padding), Origin::TopLeft),
            Side::Above => (Point::new(x, self.upper_end - padding), Origin::BottomLeft),
        }
    }

    /// Fold the just-placed box into the extents and flip sides.
    fn advance(self, placed: &TextBox) -> Self {
        let bounds = placed.bounds();
        match self.next_side {
            Side::Below => Self {
                lower_end: bounds.max_y(),
                next_side: self.next_side.flipped(),
                ..self
            },
            Side::Above => Self {
                upper_end: bounds.min_y(),
                next_side: self.next_side.flipped(),
                ..self
            },
        }
    }
}

/// Place one box per marker text, stacked at `x` around `center_y`.
///
/// Returns the boxes in document order together with the widest measured
/// box width, which callers use to even out the drawn widths afterwards.
pub(crate) fn fan_out(
    texts: Vec<String>,
    x: f32,
    center_y: f32,
    padding: f32,
    style: &Rc<BoxStyle>,
) -> (Vec<TextBox>, f32) {
    // odd counts center the first box on the line, even counts put its
    // bottom edge half a padding above it
    let (first_origin, first_y) = if texts.len() % 2 != 0 {
        (Origin::CenterLeft, center_y)
    } else {
        (Origin::BottomLeft, center_y - padding / 2.0)
    };

    debug!(count = texts.len(), x = x, center_y = center_y; "fanning out marker boxes");

    let mut boxes: Vec<TextBox> = Vec::with_capacity(texts.len());
    let mut widest = 0.0_f32;
    let mut extents: Option<Extents> = None;

    for text in texts {
        let (anchor, origin) = match &extents {
            None => (Point::new(x, first_y), first_origin),
            Some(extents) => extents.next_anchor(x, padding),
        };
        let placed = TextBox::new(text, anchor, origin, style.clone());

        widest = widest.max(placed.size().width());
        extents = Some(match extents {
            None => Extents::seed(&placed),
            Some(extents) => extents.advance(&placed),
        });
        boxes.push(placed);
    }

    (boxes, widest)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const X: f32 = 300.0;
    const CENTER_Y: f32 = 177.0;
    const PADDING: f32 = 5.0;

    fn style() -> Rc<BoxStyle> {
        Rc::new(BoxStyle::new())
    }

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("name: marker-{i}\n")).collect()
    }

    #[test]
    fn odd_count_centers_the_first_box() {
        let (boxes, _) = fan_out(texts(3), X, CENTER_Y, PADDING, &style());
        let first = boxes[0].bounds();
        assert_approx_eq!(f32, (first.min_y() + first.max_y()) / 2.0, CENTER_Y);
        assert_approx_eq!(f32, first.min_x(), X);
    }

    #[test]
    fn even_count_straddles_the_center_line() {
        let (boxes, _) = fan_out(texts(2), X, CENTER_Y, PADDING, &style());
        // first box ends half a padding above the line, second starts half below
        assert_approx_eq!(f32, boxes[0].bounds().max_y(), CENTER_Y - PADDING / 2.0);
        assert_approx_eq!(f32, boxes[1].bounds().min_y(), CENTER_Y + PADDING / 2.0);
    }

    #[test]
    fn boxes_alternate_below_and_above() {
        let (boxes, _) = fan_out(texts(5), X, CENTER_Y, PADDING, &style());
        let bounds: Vec<_> = boxes.iter().map(|b| b.bounds()).collect();

        assert_approx_eq!(f32, bounds[1].min_y(), bounds[0].max_y() + PADDING);
        assert_approx_eq!(f32, bounds[2].max_y(), bounds[0].min_y() - PADDING);
        assert_approx_eq!(f32, bounds[3].min_y(), bounds[1].max_y() + PADDING);
        assert_approx_eq!(f32, bounds[4].max_y(), bounds[2].min_y() - PADDING);
    }

    #[test]
    fn all_boxes_share_the_marker_column() {
        let (boxes, _) = fan_out(texts(4), X, CENTER_Y, PADDING, &style());
        for marker in &boxes {
            assert_approx_eq!(f32, marker.rect_pos().x(), X);
        }
    }

    #[test]
    fn reports_the_widest_measured_box() {
        let texts = vec![
            "name: fc\n".to_string(),
            "name: a-much-longer-marker-name\n".to_string(),
            "name: gmd\n".to_string(),
        ];
        let (boxes, widest) = fan_out(texts, X, CENTER_Y, PADDING, &style());
        let expected = boxes
            .iter()
            .map(|b| b.size().width())
            .fold(0.0_f32, f32::max);
        assert_approx_eq!(f32, widest, expected);
    }

    #[test]
    fn single_marker_sits_on_the_center_line() {
        let (boxes, _) = fan_out(texts(1), X, CENTER_Y, PADDING, &style());
        assert_eq!(boxes.len(), 1);
        let bounds = boxes[0].bounds();
        assert_approx_eq!(f32, (bounds.min_y() + bounds.max_y()) / 2.0, CENTER_Y);
    }

    #[test]
    fn stack_gaps_equal_the_padding() {
        for count in 1..=6 {
            let (boxes, _) = fan_out(texts(count), X, CENTER_Y, PADDING, &style());
            let mut bounds: Vec<_> = boxes.iter().map(|b| b.bounds()).collect();
            bounds.sort_by(|a, b| a.min_y().total_cmp(&b.min_y()));
            for pair in bounds.windows(2) {
                assert_approx_eq!(f32, pair[1].min_y() - pair[0].max_y(), PADDING);
            }
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn marker_text_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z][a-z0-9_-]{0,24}", 1..4)
            .prop_map(|lines| format!("{}\n", lines.join("\n")))
    }

    fn markers_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(marker_text_strategy(), 1..8)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Sorted by vertical position, adjacent boxes sit exactly one padding
    /// apart, so the stack never overlaps.
    fn check_stack_keeps_padding(texts: Vec<String>, padding: f32) -> Result<(), TestCaseError> {
        let (boxes, _) = fan_out(texts, 300.0, 177.0, padding, &Rc::new(BoxStyle::new()));

        let mut bounds: Vec<_> = boxes.iter().map(|b| b.bounds()).collect();
        bounds.sort_by(|a, b| a.min_y().total_cmp(&b.min_y()));
        for pair in bounds.windows(2) {
            let gap = pair[1].min_y() - pair[0].max_y();
            prop_assert!(
                approx_eq!(f32, gap, padding, epsilon = 0.01),
                "gap {gap} differs from padding {padding}"
            );
        }
        Ok(())
    }

    /// Odd counts put exactly one box center on the line, even counts none.
    fn check_center_line_parity(texts: Vec<String>, padding: f32) -> Result<(), TestCaseError> {
        let count = texts.len();
        let center_y = 177.0;
        let (boxes, _) = fan_out(texts, 300.0, center_y, padding, &Rc::new(BoxStyle::new()));

        let centered = boxes
            .iter()
            .filter(|b| {
                let bounds = b.bounds();
                let middle = (bounds.min_y() + bounds.max_y()) / 2.0;
                approx_eq!(f32, middle, center_y, epsilon = 0.01)
            })
            .count();
        prop_assert_eq!(centered, if count % 2 != 0 { 1 } else { 0 });
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn stack_keeps_padding(texts in markers_strategy(), padding in 1.0f32..20.0) {
            check_stack_keeps_padding(texts, padding)?;
        }

        #[test]
        fn center_line_parity(texts in markers_strategy(), padding in 1.0f32..20.0) {
            check_center_line_parity(texts, padding)?;
        }
    }
}
