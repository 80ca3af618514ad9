use std::{
    error::Error,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
    time::Instant,
};

use indicatif::{ProgressBar, ProgressStyle};
use musigraph_core::{
    ArtistGraph, CredentialStore, ExportFormat, FetchConfig, GraphBuilder, LastFmClient,
    MusigraphError, SimilarityFetcher, Transport, export,
};

use crate::args::Args;
use crate::authorize::ConsoleAuthorizer;
use crate::colors::ColorScheme;
use crate::transport::ReqwestTransport;

pub struct RunSummary {
    pub username: String,
    pub seed_artists: usize,
    pub nodes: usize,
    pub edges: usize,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub duration: f64,
}

/// Runs the whole pipeline. Nothing is written to `args.output` unless every
/// request succeeded.
pub fn run(args: &Args, colors: &ColorScheme) -> Result<RunSummary, Box<dyn Error>> {
    let start_time = Instant::now();

    let mut store = CredentialStore::open(&args.config)?;
    let credentials = store.credentials()?;

    let mut client = LastFmClient::new(ReqwestTransport::new()?, credentials);
    let stdin = std::io::stdin();
    let mut authorizer = ConsoleAuthorizer::new(stdin.lock(), colors);
    client.establish_session(&mut store, &mut authorizer)?;

    println!(
        "👤 Building graph for {}",
        colors.artist_name(client.username())
    );

    let graph = collect_graph(&client, args.fetch_config(), true)?;
    let format = ExportFormat::from(args.format);
    write_graph(&graph, format, &args.output)?;

    Ok(RunSummary {
        username: client.username().to_string(),
        seed_artists: graph.seed_count(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        output: args.output.clone(),
        format,
        duration: start_time.elapsed().as_secs_f64(),
    })
}

/// Fetches top artists and their similar artists, then assembles the graph.
pub fn collect_graph<T: Transport>(
    client: &LastFmClient<T>,
    config: FetchConfig,
    show_progress: bool,
) -> Result<ArtistGraph, Box<dyn Error>> {
    let fetcher = SimilarityFetcher::new(client, config);

    let top_artists = fetcher.get_top_artists()?;
    tracing::info!(count = top_artists.len(), "top artists fetched");

    let progress = if show_progress {
        let pb = ProgressBar::new(top_artists.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let rows = fetcher.fetch_all_with(&top_artists, |row| {
        progress.set_message(row.seed.clone());
        progress.inc(1);
    });
    // Leave the bar on screen only when every artist came through
    match rows {
        Ok(rows) => {
            progress.finish_with_message("similar artists fetched");
            Ok(GraphBuilder::build(&rows))
        }
        Err(e) => {
            progress.abandon();
            Err(e.into())
        }
    }
}

/// Writes to a sibling temporary file and renames it over `output`, so a
/// failed export never leaves a truncated graph behind.
pub fn write_graph(
    graph: &ArtistGraph,
    format: ExportFormat,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let temp_path = temporary_path(output);

    let written = File::create(&temp_path)
        .map_err(MusigraphError::from)
        .and_then(|file| export(graph, format, BufWriter::new(file)));

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    fs::rename(&temp_path, output)?;
    tracing::debug!(path = %output.display(), format = format.as_str(), "graph written");
    Ok(())
}

fn temporary_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
