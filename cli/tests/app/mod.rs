use musigraph::{collect_graph, write_graph};
use musigraph_core::{
    Credentials, ExportFormat, FetchConfig, GraphBuilder, LastFmClient, MusigraphError, Result,
    SEED_COLOR, SIMILAR_COLOR, SimilarityRow, Transport,
};
use tempfile::TempDir;

struct ScriptedTransport;

impl Transport for ScriptedTransport {
    fn get(&self, _url: &str, query: &[(String, String)]) -> Result<String> {
        let body = match (param(query, "method"), param(query, "artist")) {
            ("user.gettopartists", _) => r#"{"topartists": {"artist": [{"name": "A"}, {"name": "B"}]}}"#,
            ("artist.getSimilar", "A") => {
                r#"{"similarartists": {"artist": [{"name": "B"}, {"name": "C"}]}}"#
            }
            ("artist.getSimilar", "B") => r#"{"similarartists": {"artist": [{"name": "C"}]}}"#,
            (method, _) => {
                return Err(MusigraphError::Transport(format!("unexpected {method}")));
            }
        };
        Ok(body.to_string())
    }
}

fn param<'a>(query: &'a [(String, String)], key: &str) -> &'a str {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

struct FailingTransport;

impl Transport for FailingTransport {
    fn get(&self, _url: &str, _query: &[(String, String)]) -> Result<String> {
        Ok(r#"{"error": 6, "message": "Invalid parameters"}"#.to_string())
    }
}

fn credentials() -> Credentials {
    Credentials {
        api_key: "key123".to_string(),
        secret: "shh".to_string(),
        session_key: "stored-session".to_string(),
        username: "rj".to_string(),
    }
}

#[test]
fn test_collect_graph_end_to_end() {
    let client = LastFmClient::new(ScriptedTransport, credentials());
    let graph = collect_graph(&client, FetchConfig::default(), false).unwrap();

    let b = graph.node("B").unwrap();
    assert_eq!((b.value(), b.color()), (2, SEED_COLOR));
    let c = graph.node("C").unwrap();
    assert_eq!((c.value(), c.color()), (2, SIMILAR_COLOR));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.seed_count(), 2);
}

#[test]
fn test_collect_graph_surfaces_api_error() {
    let client = LastFmClient::new(FailingTransport, credentials());
    let err = collect_graph(&client, FetchConfig::default(), false).unwrap_err();

    assert!(err.to_string().contains("Invalid parameters"));
    assert!(err.to_string().contains('6'));
}

#[test]
fn test_write_graph_replaces_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("graph.gexf");
    std::fs::write(&output, "stale").unwrap();

    let rows = vec![SimilarityRow::new("A", vec!["B".to_string()])];
    write_graph(&GraphBuilder::build(&rows), ExportFormat::Gexf, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#"<edge id="0" source="A" target="B"/>"#));
    assert!(!dir.path().join("graph.gexf.tmp").exists());
}

#[test]
fn test_write_graph_failure_leaves_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("graph.json");

    let rows = vec![SimilarityRow::new("A", Vec::new())];
    assert!(write_graph(&GraphBuilder::build(&rows), ExportFormat::Json, &output).is_err());
    assert!(!output.exists());
}
