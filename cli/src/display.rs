use crate::app::RunSummary;
use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_run_info(args: &Args, colors: &ColorScheme) {
    println!(
        "🎵 Expanding your top {} artists into {} similar artists each",
        colors.number(&args.limit.to_string()),
        colors.number(&args.similar_limit.to_string())
    );
    println!("⚙️  Using credentials from {}", args.config.display());
}

pub fn display_summary(summary: &RunSummary, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "✅ Wrote {} graph for {} to {}",
        summary.format.as_str(),
        colors.artist_name(&summary.username),
        summary.output.display()
    );
    println!(
        "   {} seed artists, {} discovered artists, {} edges",
        colors.seed(&format_number(summary.seed_artists)),
        colors.discovered(&format_number(summary.nodes - summary.seed_artists)),
        colors.number(&format_number(summary.edges))
    );
    println!(
        "📊 Finished in {} sec",
        colors.number(&format!("{:.3}", summary.duration))
    );
}

pub fn display_error(error: &dyn std::error::Error, colors: &ColorScheme) {
    eprintln!("{} {}", colors.error("❌ Error:"), error);
}

pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}
