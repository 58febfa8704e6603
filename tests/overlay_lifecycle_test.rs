// Overlay lifecycle against the headless surface: JSON locations in,
// inline styles out, the way a non-browser renderer would drive overlays.

use overlay_wasm::surface::headless::{HeadlessContainer, HeadlessElement};
use overlay_wasm::{Location, Overlay, OverlayPlacement, OverlayState, Point, Rect, StyleProperty, Viewport};

fn location(json: &str) -> Location {
    serde_json::from_str(json).expect("location JSON should parse")
}

#[test]
fn test_location_json_variants() {
    assert_eq!(
        location(r#"{"type": "point", "x": 3, "y": 4.5}"#),
        Location::Point(Point::new(3.0, 4.5))
    );
    assert_eq!(
        location(r#"{"type": "rect", "x": 1, "y": 2, "width": 30, "height": 40}"#),
        Location::Rect(Rect::new(1.0, 2.0, 30.0, 40.0))
    );
}

#[test]
fn test_location_json_without_tag_is_rejected() {
    let result: Result<Location, _> = serde_json::from_str(r#"{"x": 1, "y": 2}"#);
    assert!(result.is_err());
}

#[test]
fn test_marker_follows_updates_across_redraws() {
    let container = HeadlessContainer::new();
    let marker = HeadlessElement::new(Point::new(16.0, 24.0));

    let mut overlay = Overlay::new(
        marker.clone(),
        location(r#"{"type": "point", "x": 0.5, "y": 0.5}"#),
        OverlayPlacement::Bottom,
    );
    let viewport = Viewport::new(Point::new(0.0, 0.0), 200.0);

    // Pin the marker's bottom-center to (100, 100)
    overlay.draw_in_viewport(&viewport, &container).unwrap();
    assert_eq!(marker.style(StyleProperty::Left), "92px");
    assert_eq!(marker.style(StyleProperty::Top), "76px");
    assert_eq!(marker.style(StyleProperty::Width), "");

    // Pan the viewport; only the position changes
    let panned = Viewport::new(Point::new(0.25, 0.0), 200.0);
    overlay.draw_in_viewport(&panned, &container).unwrap();
    assert_eq!(marker.style(StyleProperty::Left), "42px");
    assert_eq!(marker.style(StyleProperty::Top), "76px");

    assert_eq!(marker.attach_count(), 1);
    assert_eq!(container.child_count(), 1);
}

#[test]
fn test_point_overlay_becomes_region_overlay() {
    let container = HeadlessContainer::new();
    let element = HeadlessElement::new(Point::new(10.0, 10.0));
    let mut overlay = Overlay::new(
        element.clone(),
        Location::Point(Point::new(50.0, 50.0)),
        OverlayPlacement::Center,
    );

    overlay.draw_html(&container).unwrap();
    assert_eq!(element.style(StyleProperty::Left), "45px");

    overlay.update(Location::Rect(Rect::new(0.0, 0.0, 0.5, 0.25)), OverlayPlacement::Center);
    overlay.draw_in_viewport(&Viewport::new(Point::new(0.0, 0.0), 100.0), &container).unwrap();

    let state: OverlayState = overlay.state();
    assert!(state.scales_to_region);
    assert_eq!(state.placement, OverlayPlacement::TopLeft);
    assert_eq!(element.style(StyleProperty::Left), "0px");
    assert_eq!(element.style(StyleProperty::Top), "0px");
    assert_eq!(element.style(StyleProperty::Width), "50px");
    assert_eq!(element.style(StyleProperty::Height), "25px");

    overlay.destroy().unwrap();
    assert!(!element.is_attached());
    assert_eq!(element.style(StyleProperty::Width), "");
}

#[test]
fn test_state_serializes_with_numeric_placement() {
    let element = HeadlessElement::new(Point::default());
    let overlay = Overlay::new(
        element,
        Location::Point(Point::new(1.0, 2.0)),
        OverlayPlacement::BottomRight,
    );

    let json = serde_json::to_value(overlay.state()).unwrap();
    assert_eq!(json["placement"], 4);
    assert_eq!(json["scalesToRegion"], false);
    assert_eq!(json["bounds"]["width"], 0.0);
}

#[test]
fn test_subpixel_region_rounding() {
    let container = HeadlessContainer::new();
    let element = HeadlessElement::new(Point::default());
    let mut overlay = Overlay::new(
        element.clone(),
        Location::Rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
        OverlayPlacement::TopLeft,
    );

    overlay.place(Point::new(-2.5, 7.999), Point::new(0.001, 12.0));
    overlay.draw_html(&container).unwrap();

    assert_eq!(element.style(StyleProperty::Left), "-3px");
    assert_eq!(element.style(StyleProperty::Top), "7px");
    assert_eq!(element.style(StyleProperty::Width), "1px");
    assert_eq!(element.style(StyleProperty::Height), "12px");
}
