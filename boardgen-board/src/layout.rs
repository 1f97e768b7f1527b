use serde::{Deserialize, Serialize};

/// Pin labels along the edges of the board silhouette, used as layout
/// input by the pinout diagram renderer.
///
/// Descriptions store the rows in silicon datasheet order. The renderer
/// expects every row read left-to-right, top-to-bottom, so the loader
/// calls [`PhysicalLayout::reverse_for_render`] exactly once before the
/// layout is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalLayout {
    /// Labels along the top edge, left to right.
    #[serde(default)]
    pub top: Vec<String>,
    /// Labels along the bottom edge, datasheet order.
    #[serde(default)]
    pub bottom: Vec<String>,
    /// Labels along the right edge, datasheet order.
    #[serde(default)]
    pub right: Vec<String>,
    /// CSS block positioning the silhouette and its pin rows in the
    /// rendered diagram.
    #[serde(default)]
    pub css: String,
}

impl PhysicalLayout {
    /// Flips the `bottom` and `right` rows from datasheet order into the
    /// renderer's reading order. One-time transform at load; applying it
    /// twice restores the datasheet order.
    pub fn reverse_for_render(&mut self) {
        self.bottom.reverse();
        self.right.reverse();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout() -> PhysicalLayout {
        PhysicalLayout {
            top: vec!["GND".into(), "D23".into(), "D22".into()],
            bottom: vec!["D12".into(), "D14".into(), "GND".into()],
            right: vec!["GND".into(), "D13".into(), "D2".into()],
            css: String::new(),
        }
    }

    #[test]
    fn reversal_flips_bottom_and_right_only() {
        let mut layout = layout();
        layout.reverse_for_render();
        assert_eq!(layout.top, ["GND", "D23", "D22"]);
        assert_eq!(layout.bottom, ["GND", "D14", "D12"]);
        assert_eq!(layout.right, ["D2", "D13", "GND"]);
    }

    #[test]
    fn double_reversal_restores_datasheet_order() {
        let mut reversed = layout();
        reversed.reverse_for_render();
        reversed.reverse_for_render();
        assert_eq!(reversed, layout());
    }
}
