use super::*;

const CARD: &str = r##"
{
  "canvas": { "width": 800, "height": 400 },
  "background": "#101018",
  "layers": [
    {
      "name": "base",
      "widgets": [
        { "kind": "rect", "position": { "x": 0.0, "y": 0.0 }, "size": { "width": 1.0, "height": 0.2 }, "color": "#ff3366" },
        { "kind": "image", "source": "{background}", "position": { "x": 0.0, "y": 0.2 }, "size": { "width": 1.0, "height": 0.8 } }
      ]
    },
    {
      "name": "text",
      "widgets": [
        { "kind": "text", "text": "Mode: {replay_mode}", "position": { "x": 0.5, "y": 0.1 }, "align": "center", "drop_shadow": true, "font_scale": 2.0 }
      ]
    }
  ]
}
"##;

#[test]
fn parses_layout_json_with_defaults() {
    let layout = Layout::from_json_str(CARD).unwrap();
    layout.validate().unwrap();

    assert_eq!(layout.canvas.width, 800);
    assert_eq!(layout.background, Rgba8::rgba(0x10, 0x10, 0x18, 255));
    assert_eq!(layout.layers.len(), 2);
    assert_eq!(layout.widget_count(), 3);

    let Widget::Rect(rect) = &layout.layers[0].widgets[0] else {
        panic!("expected rect");
    };
    assert!(rect.fill);

    let Widget::Text(text) = &layout.layers[1].widgets[0] else {
        panic!("expected text");
    };
    assert_eq!(text.align, Align::Center);
    assert_eq!(text.color, Rgba8::WHITE);
    assert!(text.drop_shadow);
    assert_eq!(text.font_scale, 2.0);
    assert_eq!(
        text.text.placeholders().collect::<Vec<_>>(),
        vec!["REPLAY_MODE"]
    );
}

#[test]
fn unknown_widget_kind_is_a_serde_error() {
    let json = r#"{ "canvas": { "width": 1, "height": 1 }, "layers": [ { "widgets": [ { "kind": "video" } ] } ] }"#;
    assert!(matches!(
        Layout::from_json_str(json).unwrap_err(),
        HosuError::Serde(_)
    ));
}

#[test]
fn validate_rejects_out_of_range_positions() {
    let mut layout = Layout::from_json_str(CARD).unwrap();
    if let Widget::Text(t) = &mut layout.layers[1].widgets[0] {
        t.position = Point::new(1.5, 0.0);
    }
    let err = layout.validate().unwrap_err().to_string();
    assert!(err.contains("position.x"), "{err}");
    assert!(err.contains("layer 1"), "{err}");
}

#[test]
fn validate_rejects_bad_font_scale_and_empty_source() {
    let mut layout = Layout::from_json_str(CARD).unwrap();
    if let Widget::Text(t) = &mut layout.layers[1].widgets[0] {
        t.font_scale = 0.0;
    }
    assert!(layout.validate().is_err());

    let mut layout = Layout::from_json_str(CARD).unwrap();
    if let Widget::Image(i) = &mut layout.layers[0].widgets[1] {
        i.source = Template::new("  ");
    }
    assert!(layout.validate().is_err());
}

#[test]
fn validate_rejects_empty_canvas() {
    let mut layout = Layout::from_json_str(CARD).unwrap();
    layout.canvas.height = 0;
    assert!(layout.validate().is_err());
}

#[test]
fn json_round_trip_preserves_layout() {
    let layout = Layout::from_json_str(CARD).unwrap();
    let again = Layout::from_json_str(&layout.to_json_pretty().unwrap()).unwrap();
    assert_eq!(layout, again);
}

#[test]
fn missing_layout_file_is_a_validation_error() {
    assert!(matches!(
        Layout::from_path("no/such/layout.json").unwrap_err(),
        HosuError::Validation(_)
    ));
}
