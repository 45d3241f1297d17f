use pickprobe_core::{BoundingBox, DrawingPoint, Primitive};
use pickprobe_designer::{DrawingLoadError, DrawingLoader, FileFormat, SvgLoader};

fn parse(svg: &str) -> Vec<Primitive> {
    SvgLoader.parse_bytes(svg.as_bytes()).unwrap()
}

#[test]
fn test_svg_requires_svg_element() {
    let result = SvgLoader.parse_bytes(b"<html><body/></html>");
    assert!(matches!(result, Err(DrawingLoadError::SvgParse(_))));
}

#[test]
fn test_svg_empty_document() {
    assert!(parse(r#"<svg width="100" height="100"></svg>"#).is_empty());
}

#[test]
fn test_svg_line_is_mirrored() {
    let primitives = parse(r#"<svg><line x1="0" y1="0" x2="10" y2="4"/></svg>"#);
    // y range is 0..4, so y' = 4 - y
    assert_eq!(
        primitives,
        vec![Primitive::line(
            DrawingPoint::new(0.0, 4.0),
            DrawingPoint::new(10.0, 0.0)
        )]
    );
}

#[test]
fn test_svg_circle_and_units() {
    let primitives = parse(r#"<svg><circle cx="50mm" cy='50' r="25"/></svg>"#);
    assert_eq!(
        primitives,
        vec![Primitive::circle(DrawingPoint::new(50.0, 50.0), 25.0)]
    );
}

#[test]
fn test_svg_zero_radius_circle_skipped() {
    assert!(parse(r#"<svg><circle cx="5" cy="5" r="0"/></svg>"#).is_empty());
}

#[test]
fn test_svg_rect_becomes_four_lines() {
    let primitives = parse(r#"<svg><rect x="10" y="20" width="30" height="40"/></svg>"#);
    assert_eq!(primitives.len(), 4);
    assert!(primitives.iter().all(|p| matches!(p, Primitive::Line { .. })));

    let bounds = primitives
        .iter()
        .filter_map(Primitive::extent)
        .map(|(a, b, c, d)| BoundingBox::new(a, b, c, d))
        .reduce(|a, b| a.union(&b))
        .unwrap();
    assert_eq!(bounds, BoundingBox::new(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn test_svg_unsupported_elements_reported() {
    let primitives = parse(
        r#"<svg>
            <path d="M 0 0 L 10 10"/>
            <polygon points="0,0 1,1 1,0"/>
            <line x1="0" y1="0" x2="1" y2="1"/>
        </svg>"#,
    );
    let kinds: Vec<&str> = primitives.iter().map(Primitive::kind).collect();
    assert_eq!(kinds, ["PATH", "POLYGON", "LINE"]);
}

#[test]
fn test_svg_ignores_similarly_named_tags() {
    let primitives = parse(
        r#"<svg><defs><linearGradient id="g"/></defs><rectangle x="1"/></svg>"#,
    );
    assert!(primitives.is_empty());
}

#[test]
fn test_svg_loader_format() {
    assert_eq!(SvgLoader.format(), FileFormat::Svg);
}

#[test]
fn test_svg_comments_and_cdata_ignored() {
    let primitives = parse(
        r#"<svg>
            <!-- <line x1="0" y1="0" x2="900" y2="900"/> -->
            <style><![CDATA[ <circle cx="500" cy="500" r="400"/> ]]></style>
            <line x1="0" y1="0" x2="10" y2="4"/>
        </svg>"#,
    );
    assert_eq!(
        primitives,
        vec![Primitive::line(
            DrawingPoint::new(0.0, 4.0),
            DrawingPoint::new(10.0, 0.0)
        )]
    );
}

#[test]
fn test_svg_overflowing_coordinates_skip_element() {
    let primitives = parse(
        r#"<svg>
            <line x1="0" y1="0" x2="1e400" y2="5"/>
            <circle cx="-1e999" cy="0" r="3"/>
            <line x1="0" y1="0" x2="20" y2="5"/>
        </svg>"#,
    );
    assert_eq!(primitives.len(), 1);
    assert!(primitives.iter().all(|p| {
        p.extent()
            .is_some_and(|(a, b, c, d)| [a, b, c, d].iter().all(|v| v.is_finite()))
    }));
}

mod properties {
    use super::*;
    use pickprobe_core::BoundingBoxAccumulator;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mirrored_rect_keeps_its_bounds(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            w in 0.5f64..300.0,
            h in 0.5f64..300.0,
        ) {
            let svg = format!(
                r#"<svg><rect x="{}" y="{}" width="{}" height="{}"/></svg>"#,
                x, y, w, h
            );
            let primitives = SvgLoader.parse_bytes(svg.as_bytes()).unwrap();
            let acc: BoundingBoxAccumulator = primitives.iter().collect();
            let bounds = acc.result().unwrap();

            prop_assert!((bounds.min_x - x).abs() < 1e-9);
            prop_assert!((bounds.max_x - (x + w)).abs() < 1e-9);
            prop_assert!((bounds.min_y - y).abs() < 1e-9);
            prop_assert!((bounds.max_y - (y + h)).abs() < 1e-9);
        }
    }
}
