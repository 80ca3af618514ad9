use colored::{ColoredString, Colorize};
use musigraph_core::{Rgb, SEED_COLOR, SIMILAR_COLOR};

/// Console palette. Seed and discovered counts use the same RGB values the
/// exported graph gives those nodes.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn artist_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn url(&self, text: &str) -> ColoredString {
        text.underline()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red().bold()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn seed(&self, text: &str) -> ColoredString {
        graph_color(text, SEED_COLOR)
    }

    pub fn discovered(&self, text: &str) -> ColoredString {
        graph_color(text, SIMILAR_COLOR)
    }
}

fn graph_color(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}
