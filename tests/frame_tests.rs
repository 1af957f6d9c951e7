mod support;

use bentplate::{
    BendAllowance, Frame, LFrame, Rectangle, TableBendAllowance, UFrame, flatten, flatten_with,
    float_types::Real,
};

use crate::support::approx_eq;

#[test]
fn l_frame_right_angle_subtracts_one() {
    let rect = flatten(LFrame::new(200.0, 50.0, 10.0, 90.0));
    assert_eq!(rect.width(), 200.0);
    assert!(approx_eq(rect.height(), 59.0, 1e-12));
}

#[test]
fn l_frame_other_angles_subtract_half() {
    for angle in [0.0, 30.0, 45.0, 89.0, 91.0, 120.0, 135.0] {
        let rect = flatten(LFrame::new(200.0, 50.0, 10.0, angle));
        assert!(
            approx_eq(rect.height(), 59.5, 1e-12),
            "angle {angle}: height {}",
            rect.height()
        );
    }
}

#[test]
fn u_frame_applies_each_side_independently() {
    let rect = flatten(UFrame::new(80.0, 50.0, 10.0, 10.0, 90.0, 45.0));
    assert_eq!(rect.width(), 80.0);
    assert!(approx_eq(rect.height(), 68.5, 1e-12));

    let both_right = flatten(UFrame::new(80.0, 50.0, 10.0, 10.0, 90.0, 90.0));
    assert!(approx_eq(both_right.height(), 68.0, 1e-12));

    let neither = flatten(UFrame::new(80.0, 50.0, 10.0, 10.0, 60.0, 120.0));
    assert!(approx_eq(neither.height(), 69.0, 1e-12));
}

#[test]
fn flattening_copies_thickness_and_zeroes_offsets() {
    let rect = Rectangle::from_l_frame(LFrame::new(120.0, 40.0, 20.0, 90.0).with_thickness(2.5));
    assert_eq!(rect.thickness(), 2.5);
    assert_eq!(rect.offset_from_side(), 0.0);
    assert_eq!(rect.offset_from_bottom(), 0.0);
    assert!(rect.holes().is_empty());
    assert_eq!(rect.holes_total_width(), 0.0);

    let rect = Rectangle::from_u_frame(UFrame::new(120.0, 40.0, 20.0, 20.0, 90.0, 90.0));
    assert_eq!(rect.thickness(), 1.0);
}

#[test]
fn frame_enum_matches_concrete_frames() {
    let l = LFrame::new(100.0, 30.0, 15.0, 45.0);
    let u = UFrame::new(100.0, 30.0, 15.0, 5.0, 90.0, 30.0);
    assert_eq!(Rectangle::from_frame(Frame::L(l)), Rectangle::from_l_frame(l));
    assert_eq!(Rectangle::from_frame(u.into()), Rectangle::from_u_frame(u));
}

#[test]
fn default_table_values() {
    let table = TableBendAllowance::default();
    assert_eq!(table.allowance(90.0), 1.0);
    assert_eq!(table.allowance(45.0), 0.5);
}

#[test]
fn custom_bend_allowance_policy() {
    let table = TableBendAllowance {
        right_angle: 1.6,
        other: 0.8,
    };
    let rect = flatten_with(LFrame::new(100.0, 50.0, 10.0, 90.0), &table);
    assert!(approx_eq(rect.height(), 58.4, 1e-12));

    // continuous policy as a closure
    let linear = |angle: Real| angle / 90.0;
    let rect = flatten_with(UFrame::new(100.0, 50.0, 10.0, 10.0, 45.0, 90.0), &linear);
    assert!(approx_eq(rect.height(), 68.5, 1e-12));
}

#[test]
fn frames_deserialize_with_default_thickness() {
    let frame: LFrame = toml::from_str(
        "width = 200\nhorizontal_length = 50\nvertical_length = 10\nangle = 90\n",
    )
    .unwrap();
    assert_eq!(frame, LFrame::new(200.0, 50.0, 10.0, 90.0));
    assert_eq!(frame.thickness, 1.0);
}
