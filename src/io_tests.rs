use crate::error::Error;
use crate::primitives::Matrix;

#[test]
fn test_load_infers_columns_from_first_line() {
    let text = "1 2 3\n4 5 6\n";
    let m = Matrix::<f64>::load(text.as_bytes()).expect("two full rows of three");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(1, 0), 4.0);
}

#[test]
fn test_load_accepts_tabs() {
    let text = "1\t2\n3\t4\n";
    let m = Matrix::<i32>::load(text.as_bytes()).expect("two full rows of two");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_load_discards_partial_trailing_row() {
    let text = "1 2 3\n4 5 6\n7 8\n";
    let m = Matrix::<f64>::load(text.as_bytes()).expect("two full rows survive");
    assert_eq!(m.shape(), (2, 3));
}

#[test]
fn test_load_single_line_is_one_row() {
    let text = "1 2 3 4";
    let m = Matrix::<f64>::load(text.as_bytes()).expect("one row of four");
    assert_eq!(m.shape(), (1, 4));
}

#[test]
fn test_load_stops_at_unparsable_token() {
    let text = "1 2\n3 x\n5 6\n";
    let m = Matrix::<f64>::load(text.as_bytes()).expect("tokens before the bad one");
    // Three good tokens truncate to one full row of two.
    assert_eq!(m.shape(), (1, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_load_empty_stream_is_parse_error() {
    let result = Matrix::<f64>::load("".as_bytes());
    assert!(matches!(result, Err(Error::Parse(_))));

    let result = Matrix::<f64>::load("   \n  \n".as_bytes());
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = Matrix::<f64>::load_path("/nonexistent/matriz/fixture.txt");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_save_format() {
    let m = Matrix::from_vec(2, 2, vec![1.25, 2.5, 3.0, 4.75]).expect("4 elements for 2x2");
    let mut out = Vec::new();
    m.save(&mut out, 2).expect("vec writer cannot fail");
    assert_eq!(String::from_utf8(out).expect("ascii"), "1.25\t2.50\n3.00\t4.75\n");
}

#[test]
fn test_save_load_roundtrip_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fixture.txt");

    let m = Matrix::linspace(4, 3, -2.5_f64, 7.5);
    m.save_path(&path, 12).expect("writable temp file");

    let back = Matrix::<f64>::load_path(&path).expect("file written above");
    assert_eq!(back.shape(), m.shape());
    for (a, b) in m.as_slice().iter().zip(back.as_slice()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_roundtrip_integer_elements() {
    let m = Matrix::from_vec(2, 3, vec![1, -2, 3, -4, 5, -6]).expect("6 elements for 2x3");
    let mut out = Vec::new();
    m.save(&mut out, 0).expect("vec writer cannot fail");
    let back = Matrix::<i32>::load(out.as_slice()).expect("what save wrote");
    assert_eq!(back, m);
}
