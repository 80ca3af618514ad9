use musigraph::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    let artist = colors.artist_name("Test Artist");
    assert!(artist.to_string().contains("Test Artist"));

    let url = colors.url("http://www.last.fm/api/auth/");
    assert!(url.to_string().contains("http://www.last.fm/api/auth/"));

    let seed = colors.seed("12");
    assert!(seed.to_string().contains("12"));

    let discovered = colors.discovered("34");
    assert!(discovered.to_string().contains("34"));

    let error = colors.error("Error");
    assert!(error.to_string().contains("Error"));

    let num = colors.number("123");
    assert!(num.to_string().contains("123"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.artist_name("Test Artist").to_string(), "Test Artist");
    assert_eq!(colors.seed("Seed").to_string(), "Seed");
    assert_eq!(colors.discovered("Found").to_string(), "Found");
    assert_eq!(colors.error("Error").to_string(), "Error");
}
