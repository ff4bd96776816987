//! Validates summary computation and distance semantics for every metric
//! variant

use photomosaic::MosaicError;
use photomosaic::canvas::{Canvas, Region};
use photomosaic::metric::{Metric, MetricKind};

fn solid(value: u8, width: usize, height: usize) -> Canvas {
    Canvas::from_fn("solid", width, height, |_, _| [value, value, value])
        .unwrap_or_else(|_| unreachable!("dimensions are positive"))
}

fn summarized(kind: MetricKind, canvas: &Canvas) -> Metric {
    let mut metric = kind.empty();
    metric
        .summarize_all(canvas)
        .unwrap_or_else(|_| unreachable!("whole canvas is a valid region"));
    metric
}

#[test]
fn test_intensity_mean_uses_truncating_division() {
    // Pixels (1,2,3) average to 2 per pixel via (r+g+b)/3
    let canvas = Canvas::from_fn("mixed", 2, 2, |_, _| [1, 2, 3])
        .unwrap_or_else(|_| unreachable!());
    let metric = summarized(MetricKind::Intensity, &canvas);
    assert_eq!(metric, Metric::Intensity { mean: 2 });
}

#[test]
fn test_rgb_means_are_independent() {
    let canvas = Canvas::from_fn("channels", 2, 1, |x, _| {
        if x == 0 { [10, 100, 200] } else { [30, 120, 220] }
    })
    .unwrap_or_else(|_| unreachable!());
    let metric = summarized(MetricKind::Rgb, &canvas);
    assert_eq!(metric, Metric::Rgb { mean: [20, 110, 210] });
}

#[test]
fn test_intensity_distance_is_absolute_difference() {
    let a = summarized(MetricKind::Intensity, &solid(10, 2, 2));
    let b = summarized(MetricKind::Intensity, &solid(90, 2, 2));
    assert_eq!(a.distance_to(&b).ok(), Some(80.0));
    assert_eq!(b.distance_to(&a).ok(), Some(80.0));
}

#[test]
fn test_rgb_distance_is_euclidean() {
    let red = Canvas::from_fn("red", 2, 2, |_, _| [255, 0, 0])
        .unwrap_or_else(|_| unreachable!());
    let green = Canvas::from_fn("green", 2, 2, |_, _| [0, 255, 0])
        .unwrap_or_else(|_| unreachable!());
    let a = summarized(MetricKind::Rgb, &red);
    let b = summarized(MetricKind::Rgb, &green);

    let expected = (2.0 * 255.0_f64 * 255.0).sqrt();
    let Some(distance) = a.distance_to(&b).ok() else {
        unreachable!("same variant");
    };
    assert!((distance - expected).abs() < 1e-9);
}

#[test]
fn test_distance_is_reflexive_for_all_kinds() {
    let canvas = Canvas::from_fn("textured", 4, 4, |x, y| {
        [(x * 60) as u8, (y * 50) as u8, ((x + y) * 25) as u8]
    })
    .unwrap_or_else(|_| unreachable!());

    for kind in [
        MetricKind::Intensity,
        MetricKind::Rgb,
        MetricKind::QuadIntensity,
        MetricKind::QuadRgb,
    ] {
        let metric = summarized(kind, &canvas);
        assert_eq!(metric.distance_to(&metric.copy()).ok(), Some(0.0));
    }
}

#[test]
fn test_cross_variant_comparison_fails_fast() {
    let intensity = summarized(MetricKind::Intensity, &solid(50, 2, 2));
    let rgb = summarized(MetricKind::Rgb, &solid(50, 2, 2));

    assert!(matches!(
        intensity.distance_to(&rgb),
        Err(MosaicError::VariantMismatch {
            left: "intensity",
            right: "rgb",
        })
    ));
}

#[test]
fn test_quad_sub_variant_mismatch_fails() {
    let quad_intensity = summarized(MetricKind::QuadIntensity, &solid(50, 4, 4));
    let quad_rgb = summarized(MetricKind::QuadRgb, &solid(50, 4, 4));
    assert!(matches!(
        quad_intensity.distance_to(&quad_rgb),
        Err(MosaicError::VariantMismatch { .. })
    ));
}

#[test]
fn test_quad_distance_is_sum_of_quadrant_distances() {
    let a = Canvas::from_fn("a", 6, 6, |x, y| {
        let v = (x * 31 + y * 17) as u8;
        [v, v, v]
    })
    .unwrap_or_else(|_| unreachable!());
    let b = Canvas::from_fn("b", 6, 6, |x, y| {
        let v = (x * 13 + y * 41 + 5) as u8;
        [v, v, v]
    })
    .unwrap_or_else(|_| unreachable!());

    let quad_a = summarized(MetricKind::QuadIntensity, &a);
    let quad_b = summarized(MetricKind::QuadIntensity, &b);
    let Some(quad_distance) = quad_a.distance_to(&quad_b).ok() else {
        unreachable!("same variant");
    };

    // Recompute the four quadrant distances directly over sub-regions
    let mut expected = 0.0;
    for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
        let mut sub_a = MetricKind::Intensity.empty();
        let mut sub_b = MetricKind::Intensity.empty();
        assert!(sub_a.summarize(&a, Region::new(x, y, 3, 3)).is_ok());
        assert!(sub_b.summarize(&b, Region::new(x, y, 3, 3)).is_ok());
        let Some(distance) = sub_a.distance_to(&sub_b).ok() else {
            unreachable!("same variant");
        };
        expected += distance;
    }

    assert!((quad_distance - expected).abs() < 1e-9);
}

#[test]
fn test_quadrant_labels_follow_screen_orientation() {
    // Only the upper-left quadrant is white
    let canvas = Canvas::from_fn("corner", 4, 4, |x, y| {
        if x < 2 && y < 2 { [255, 255, 255] } else { [0, 0, 0] }
    })
    .unwrap_or_else(|_| unreachable!());

    let metric = summarized(MetricKind::QuadIntensity, &canvas);
    let Metric::Quad(quadrants) = metric else {
        unreachable!("quad kind summarizes to a quad value");
    };
    assert_eq!(quadrants[0], Metric::Intensity { mean: 255 });
    assert_eq!(quadrants[1], Metric::Intensity { mean: 0 });
    assert_eq!(quadrants[2], Metric::Intensity { mean: 0 });
    assert_eq!(quadrants[3], Metric::Intensity { mean: 0 });
}

#[test]
fn test_odd_dimensions_drop_the_remainder_row_and_column() {
    // 5x5 quadrants are 2x2; row 4 and column 4 must never be read
    let plain = solid(10, 5, 5);
    let mut edged = plain.copy("edged");
    for i in 0..5 {
        assert!(edged.set(4, i, 99, 99, 99).is_ok());
        assert!(edged.set(i, 4, 99, 99, 99).is_ok());
    }

    let quad_plain = summarized(MetricKind::QuadIntensity, &plain);
    let quad_edged = summarized(MetricKind::QuadIntensity, &edged);
    assert_eq!(quad_plain.distance_to(&quad_edged).ok(), Some(0.0));
}

#[test]
fn test_one_pixel_region_quad_summarizes_to_zero() {
    // Quadrants of a 1x1 region are empty; empty regions summarize to 0
    let canvas = solid(200, 1, 1);
    let metric = summarized(MetricKind::QuadIntensity, &canvas);
    let Metric::Quad(quadrants) = metric else {
        unreachable!("quad kind summarizes to a quad value");
    };
    for quadrant in quadrants.iter() {
        assert_eq!(*quadrant, Metric::Intensity { mean: 0 });
    }
}

#[test]
fn test_summarize_outside_canvas_fails() {
    let canvas = solid(0, 4, 4);
    let mut metric = MetricKind::Intensity.empty();
    assert!(matches!(
        metric.summarize(&canvas, Region::new(2, 2, 4, 4)),
        Err(MosaicError::RegionOutOfBounds { .. })
    ));
}
