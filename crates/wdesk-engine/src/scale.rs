//! Content scaling
//!
//! Maps a window's drawable area and a widget's virtual content size to a
//! uniform transform scale plus the box the content should lay itself out
//! in. Spreadable content is never upscaled through the transform: it is
//! laid out at the larger size instead, which keeps text and vector art
//! crisp. Fixed-aspect content keeps its virtual size and is letterboxed.

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Smallest drawable extent on either axis
pub const MIN_AVAILABLE_EXTENT: f32 = 10.0;

/// Inputs to [`compute`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRequest {
    /// Outer size of the content region (window size)
    pub container: Size,
    /// Intrinsic virtual size of the widget's content
    pub base: Size,
    pub can_spread: bool,
    pub padding: f32,
    pub header_height: f32,
}

impl ScaleRequest {
    pub fn new(container: Size, base: Size, can_spread: bool) -> Self {
        Self {
            container,
            base,
            can_spread,
            padding: 0.0,
            header_height: 0.0,
        }
    }

    pub fn with_chrome(mut self, header_height: f32, padding: f32) -> Self {
        self.header_height = header_height;
        self.padding = padding;
        self
    }

    /// Area left for content after chrome is subtracted
    pub fn available(&self) -> Size {
        Size::new(
            (self.container.width - self.padding * 2.0).max(MIN_AVAILABLE_EXTENT),
            (self.container.height - self.header_height - self.padding * 2.0)
                .max(MIN_AVAILABLE_EXTENT),
        )
    }
}

/// Output of [`compute`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    /// Uniform factor that would make the base size fit the available area
    pub fit_scale: f32,
    /// Factor applied as the CSS transform
    pub scale: f32,
    /// Width the content lays itself out at, before the transform
    pub internal_width: f32,
    /// Height the content lays itself out at, before the transform
    pub internal_height: f32,
}

impl ScaleResult {
    /// Inner content box
    pub fn internal_size(&self) -> Size {
        Size::new(self.internal_width, self.internal_height)
    }

    /// Size the content occupies on screen after the transform
    pub fn rendered_size(&self) -> Size {
        Size::new(
            self.internal_width * self.scale,
            self.internal_height * self.scale,
        )
    }

    /// CSS transform value for the content box
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

/// Compute the render scale and content box for a window
pub fn compute(request: &ScaleRequest) -> ScaleResult {
    let available = request.available();

    if !request.base.is_positive() {
        return ScaleResult {
            fit_scale: 1.0,
            scale: 1.0,
            internal_width: available.width,
            internal_height: available.height,
        };
    }

    let fit_scale = (available.width / request.base.width)
        .min(available.height / request.base.height);

    if request.can_spread {
        let scale = fit_scale.min(1.0);
        ScaleResult {
            fit_scale,
            scale,
            internal_width: available.width / scale,
            internal_height: available.height / scale,
        }
    } else {
        ScaleResult {
            fit_scale,
            scale: fit_scale,
            internal_width: request.base.width,
            internal_height: request.base.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_spreadable_never_upscales() {
        let result = compute(&ScaleRequest::new(
            Size::new(200.0, 200.0),
            Size::new(100.0, 100.0),
            true,
        ));
        assert!(approx(result.fit_scale, 2.0));
        assert!(approx(result.scale, 1.0));
        assert!(approx(result.internal_width, 200.0));
        assert!(approx(result.internal_height, 200.0));
    }

    #[test]
    fn test_fixed_aspect_letterboxes_and_upscales() {
        let result = compute(&ScaleRequest::new(
            Size::new(200.0, 200.0),
            Size::new(100.0, 100.0),
            false,
        ));
        assert!(approx(result.scale, 2.0));
        assert!(approx(result.internal_width, 100.0));
        assert!(approx(result.internal_height, 100.0));
        assert_eq!(result.transform(), "scale(2)");
    }

    #[test]
    fn test_spreadable_shrinks_by_laying_out_larger() {
        // 150x100 available against a 300x100 base: fit is 0.5 on the x axis
        let result = compute(&ScaleRequest::new(
            Size::new(150.0, 100.0),
            Size::new(300.0, 100.0),
            true,
        ));
        assert!(approx(result.scale, 0.5));
        assert!(approx(result.internal_width, 300.0));
        assert!(approx(result.internal_height, 200.0));
        let rendered = result.rendered_size();
        assert!(approx(rendered.width, 150.0));
        assert!(approx(rendered.height, 100.0));
    }

    #[test]
    fn test_chrome_is_subtracted() {
        let request = ScaleRequest::new(Size::new(200.0, 200.0), Size::new(100.0, 100.0), true)
            .with_chrome(40.0, 10.0);
        let available = request.available();
        assert!(approx(available.width, 180.0));
        assert!(approx(available.height, 140.0));
        let result = compute(&request);
        assert!(approx(result.fit_scale, 1.4));
        assert!(approx(result.internal_width, 180.0));
    }

    #[test]
    fn test_available_area_floor() {
        let request = ScaleRequest::new(Size::new(5.0, 5.0), Size::new(100.0, 100.0), false)
            .with_chrome(50.0, 20.0);
        let available = request.available();
        assert!(approx(available.width, MIN_AVAILABLE_EXTENT));
        assert!(approx(available.height, MIN_AVAILABLE_EXTENT));
    }

    #[test]
    fn test_non_positive_base_disables_scaling() {
        for base in [Size::new(0.0, 100.0), Size::new(100.0, -1.0)] {
            let result = compute(&ScaleRequest::new(Size::new(300.0, 200.0), base, false));
            assert!(approx(result.scale, 1.0));
            assert!(approx(result.internal_width, 300.0));
            assert!(approx(result.internal_height, 200.0));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Spreadable content never receives a transform above 1
        #[test]
        fn spreadable_scale_capped(
            cw in 1.0f32..4000.0, ch in 1.0f32..4000.0,
            bw in 1.0f32..2000.0, bh in 1.0f32..2000.0,
        ) {
            let result = compute(&ScaleRequest::new(Size::new(cw, ch), Size::new(bw, bh), true));
            prop_assert!(result.scale <= 1.0);
            prop_assert!(result.scale > 0.0);
        }

        /// Spreadable content always fills the available area exactly
        #[test]
        fn spreadable_fills_available(
            cw in 1.0f32..4000.0, ch in 1.0f32..4000.0,
            bw in 1.0f32..2000.0, bh in 1.0f32..2000.0,
        ) {
            let request = ScaleRequest::new(Size::new(cw, ch), Size::new(bw, bh), true);
            let available = request.available();
            let rendered = compute(&request).rendered_size();
            prop_assert!((rendered.width - available.width).abs() < available.width * 0.001);
            prop_assert!((rendered.height - available.height).abs() < available.height * 0.001);
        }

        /// Fixed-aspect content always fits inside the available area
        #[test]
        fn letterbox_fits(
            cw in 1.0f32..4000.0, ch in 1.0f32..4000.0,
            bw in 1.0f32..2000.0, bh in 1.0f32..2000.0,
        ) {
            let request = ScaleRequest::new(Size::new(cw, ch), Size::new(bw, bh), false);
            let available = request.available();
            let rendered = compute(&request).rendered_size();
            prop_assert!(rendered.width <= available.width * 1.001);
            prop_assert!(rendered.height <= available.height * 1.001);
        }
    }
}
