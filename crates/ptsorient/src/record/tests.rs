use super::*;
use nalgebra::vector;

#[test]
fn three_numbers_are_xyz() {
    assert_eq!(classify("1 2 3"), Some(LineKind::Xyz));
    assert_eq!(classify("  -1.5\t2e-3   .5  "), Some(LineKind::Xyz));
    assert_eq!(classify("0.1234567 5. -0"), Some(LineKind::Xyz));
}

#[test]
fn six_numbers_are_xyzuvw() {
    assert_eq!(classify("1 2 3 0 0 1"), Some(LineKind::Xyzuvw));
    assert_eq!(classify("1 2 3 0 0 1   "), Some(LineKind::Xyzuvw));
    let r = parse_record("1 2 3 0.5 -0.5 1").unwrap();
    assert_eq!(r.point.pos, vector![1.0, 2.0, 3.0]);
    assert_eq!(r.point.dir, Some(vector![0.5, -0.5, 1.0]));
}

#[test]
fn partial_or_garbage_tail_rejects_whole_line() {
    // Never truncated to XYZ.
    assert_eq!(classify("1 2 3 4"), None);
    assert_eq!(classify("1 2 3 4 5"), None);
    assert_eq!(classify("1 2 3 a"), None);
    assert_eq!(classify("1 2 3 4 5 6 7"), None);
    assert_eq!(classify("1 2 3 4 5 x"), None);
    assert_eq!(classify("1 2 3abc"), None);
}

#[test]
fn non_coordinate_lines_are_rejected() {
    for line in ["", "   ", "# header", "1 2", "x y z", "1,2,3", "inf 0 0", "NaN 1 2"] {
        assert_eq!(classify(line), None, "{line:?}");
    }
}

#[test]
fn record_keeps_original_text() {
    let line = "  1.0   2.00\t3 ";
    let r = parse_record(line).unwrap();
    assert_eq!(r.text, line);
    assert_eq!(r.kind(), LineKind::Xyz);
}

#[test]
fn loader_skips_rejected_lines_in_order() {
    let text = "# comment\n0 0 0\nnoise\n1 0 0 0 0 1\n1 2 3 4\n1 1 0\n";
    let pts = load_points(text.lines());
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[0], Point::xyz(0.0, 0.0, 0.0));
    assert_eq!(pts[1].pos, vector![1.0, 0.0, 0.0]);
    assert_eq!(pts[1].kind(), LineKind::Xyzuvw);
    assert_eq!(pts[2], Point::xyz(1.0, 1.0, 0.0));
}

#[test]
fn components_follow_file_order() {
    let r = parse_record("1 2 3 4 5 6").unwrap();
    let c: Vec<f64> = r.point.components().collect();
    assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let c3: Vec<f64> = Point::xyz(7.0, 8.0, 9.0).components().collect();
    assert_eq!(c3, vec![7.0, 8.0, 9.0]);
}
