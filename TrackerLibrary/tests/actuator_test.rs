use TrackerLibrary::actuator::servo::ServoCommander;

#[test]
fn encodes_the_angle_as_a_decimal_line() {
    assert_eq!(ServoCommander::encode_angle(90), b"90\n");
    assert_eq!(ServoCommander::encode_angle(0), b"0\n");
    assert_eq!(ServoCommander::encode_angle(180), b"180\n");
}

#[test]
fn clamps_out_of_range_angles_before_encoding() {
    assert_eq!(ServoCommander::encode_angle(200), b"180\n");
    assert_eq!(ServoCommander::encode_angle(-5), b"0\n");
}

#[test]
fn every_command_is_a_single_newline_terminated_line() {
    for angle in 0..=180 {
        let command = ServoCommander::encode_angle(angle);
        let line = String::from_utf8(command).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(line.trim_end().parse::<i32>().unwrap(), angle);
    }
}
