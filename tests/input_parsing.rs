use max_min::{Error, Problem, read_problem};

mod support;
use support::mock_source::MockSource;

#[test]
fn reads_declared_values() {
    let mut src = MockSource::new("7\n3\n10\n100\n300\n200\n1000\n20\n30\n");
    let problem = read_problem(&mut src).unwrap();
    assert_eq!(
        problem,
        Problem::new(3, vec![10, 100, 300, 200, 1000, 20, 30])
    );
    assert_eq!(src.remaining(), 0);
}

#[test]
fn tolerates_surrounding_whitespace() {
    let src = MockSource::new(" 2 \r\n1\r\n  -5\n7\t\n");
    let problem = read_problem(src).unwrap();
    assert_eq!(problem, Problem::new(1, vec![-5, 7]));
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let src = MockSource::new("1\n1\n4\n\n   \n");
    assert_eq!(read_problem(src).unwrap(), Problem::new(1, vec![4]));
}

#[test]
fn trailing_data_is_rejected() {
    let src = MockSource::new("1\n1\n4\n5\n");
    assert!(matches!(
        read_problem(src),
        Err(Error::TrailingInput { line: 4 })
    ));
}

#[test]
fn missing_values_are_rejected() {
    let src = MockSource::new("3\n2\n1\n2\n");
    assert!(matches!(
        read_problem(src),
        Err(Error::UnexpectedEof { line: 5, .. })
    ));
}

#[test]
fn missing_header_is_rejected() {
    assert!(matches!(
        read_problem(MockSource::new("")),
        Err(Error::UnexpectedEof { line: 1, .. })
    ));
    assert!(matches!(
        read_problem(MockSource::new("3\n")),
        Err(Error::UnexpectedEof { line: 2, .. })
    ));
}

#[test]
fn non_integer_value_is_rejected() {
    let src = MockSource::new("2\n1\n5\nfive\n");
    match read_problem(src) {
        Err(Error::InvalidInteger { line, text }) => {
            assert_eq!(line, 4);
            assert_eq!(text, "five");
        }
        other => panic!("expected InvalidInteger, got {other:?}"),
    }
}

#[test]
fn non_integer_header_is_rejected() {
    assert!(matches!(
        read_problem(MockSource::new("2.5\n1\n")),
        Err(Error::InvalidInteger { line: 1, .. })
    ));
}

#[test]
fn zero_count_is_empty() {
    assert!(matches!(
        read_problem(MockSource::new("0\n1\n")),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn negative_count_is_empty() {
    assert!(matches!(
        read_problem(MockSource::new("-3\n1\n")),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn window_size_must_fit() {
    assert!(matches!(
        read_problem(MockSource::problem(0, &[1, 2])),
        Err(Error::WindowOutOfRange { k: 0, n: 2 })
    ));
    assert!(matches!(
        read_problem(MockSource::problem(-1, &[1, 2])),
        Err(Error::WindowOutOfRange { k: -1, n: 2 })
    ));
    assert!(matches!(
        read_problem(MockSource::problem(3, &[1, 2])),
        Err(Error::WindowOutOfRange { k: 3, n: 2 })
    ));
}

#[test]
fn values_past_i32_parse() {
    let src = MockSource::problem(2, &[9_000_000_000, -9_000_000_000]);
    assert_eq!(
        read_problem(src).unwrap().values,
        vec![9_000_000_000, -9_000_000_000]
    );
}
