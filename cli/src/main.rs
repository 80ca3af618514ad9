use clap::Parser;
use musigraph::{
    Args,
    colors::ColorScheme,
    display::{display_error, display_run_info, display_summary},
    run,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let colors = ColorScheme::new(!args.no_color);
    display_run_info(&args, &colors);

    match run(&args, &colors) {
        Ok(summary) => display_summary(&summary, &colors),
        Err(error) => {
            display_error(error.as_ref(), &colors);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,musigraph=debug,musigraph_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
