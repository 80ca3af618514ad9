use musigraph::format_number;

#[test]
fn test_format_number_small() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(7), "7");
    assert_eq!(format_number(999), "999");
}

#[test]
fn test_format_number_thousands() {
    assert_eq!(format_number(1_000), "1,000");
    assert_eq!(format_number(12_345), "12,345");
    assert_eq!(format_number(510_000), "510,000");
}

#[test]
fn test_format_number_millions() {
    assert_eq!(format_number(1_234_567), "1,234,567");
    assert_eq!(format_number(1_000_000), "1,000,000");
}
