use masonry_core::{Dimension, Extras, MasonryError, Size, scale_dimension, scaler};

#[test]
fn scales_to_column_width() {
    let s = scale_dimension(800.0, 600.0, 200.0, None);
    assert_eq!(s, Size::new(200.0, 150.0));
    // small items are enlarged
    let s = scale_dimension(50.0, 100.0, 200.0, None);
    assert_eq!(s, Size::new(200.0, 400.0));
}

#[test]
fn max_height_takes_the_smaller_scale() {
    // width-limited: 200x100 fits under max height 300
    assert_eq!(
        scale_dimension(400.0, 200.0, 200.0, Some(300.0)),
        Size::new(200.0, 100.0)
    );
    // height-limited: 200x800 would exceed 300
    assert_eq!(
        scale_dimension(100.0, 400.0, 200.0, Some(300.0)),
        Size::new(75.0, 300.0)
    );
}

#[test]
fn standalone_scaler_matches_column_geometry() {
    let scale = scaler::<Extras>(5, 1000.0, 0.0, None).expect("scaler");
    let d: Dimension = Dimension::new(150.0, 250.0);
    let s = scale(&d);
    assert_eq!(s.width, 200.0);
    assert!((s.height - 250.0 * 200.0 / 150.0).abs() < 1e-9);

    let scale = scaler::<Extras>(2, 800.0, 50.0, Some(100.0)).expect("scaler");
    let tall: Dimension = Dimension::new(800.0, 800.0);
    let wide: Dimension = Dimension::new(800.0, 200.0);
    assert_eq!(scale(&tall), Size::new(100.0, 100.0));
    assert_eq!(scale(&wide), Size::new(375.0, 93.75));
}

#[test]
fn scaling_is_order_independent() {
    let scale = scaler::<Extras>(3, 900.0, 15.0, Some(400.0)).expect("scaler");
    let dims: Vec<Dimension> = vec![
        Dimension::new(640.0, 480.0),
        Dimension::new(480.0, 640.0),
        Dimension::new(1920.0, 1080.0),
    ];
    let forward: Vec<Size> = dims.iter().map(&scale).collect();
    let mut backward: Vec<Size> = dims.iter().rev().map(&scale).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn scaler_rejects_bad_geometry() {
    assert!(matches!(
        scaler::<Extras>(0, 1000.0, 0.0, None),
        Err(MasonryError::InvalidColumns { .. })
    ));
    assert!(matches!(
        scaler::<Extras>(4, 100.0, 40.0, None),
        Err(MasonryError::NonPositiveColumnWidth { .. })
    ));
}

#[test]
fn tiny_items_do_not_overflow() {
    let s = scale_dimension(5e-324, 5e-324, 200.0, None);
    assert_eq!(s, Size::new(200.0, 200.0));

    let s = scale_dimension(1e-300, 2e-300, 200.0, Some(100.0));
    assert_eq!(s, Size::new(50.0, 100.0));
    assert!(s.width.is_finite() && s.height.is_finite());
}
