use iedb::{
    Error,
    config::{self, DEFAULT_BASE_URL, OutputFormat},
    query::{OneOrMany, Proteasome, QueryRequest},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
client:
  base_url: "http://localhost:9000/tools_api/"
  timeout_secs: 30
  proxy: "http://proxy.local:3128"
  strict: true

logs:
  level: "debug"

output:
  format: json

queries:
  - tool: mhci
    method: recommended
    sequence: ARFTGIKTA
    allele: "HLA-A*02:01"
    length: 8
  - tool: mhcii
    method: nn_align
    sequence: SLYNTVATLYCVHQRIDV
    allele: "HLA-DRB1*01:01"
  - tool: processing
    method: smm
    sequence: SLYNTVATLYCVHQRIDV
    allele: "HLA-A*01:01"
    length: 9
    proteasome: immuno
  - tool: mhcnp
    method: mhcnp
    sequence: [SLYNTVATL, YCVHQRIDV]
    allele: ["HLA-A*02:01", "HLA-B*07:02"]
    length: [9, 9]
  - tool: bcell
    method: Emini
    sequence: VLSEGEWQLVLHVWAKVEADVAGHGQDILIRLFKSHPETLEKFDRFKHLKTE
    window_size: 9
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.client.base_url, "http://localhost:9000/tools_api/");
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.client.proxy.as_deref(), Some("http://proxy.local:3128"));
    assert!(config.client.strict);
    assert_eq!(config.logs.level, "debug");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.queries.len(), 5);

    let tools: Vec<&str> = config.queries.iter().map(|q| q.category().tool()).collect();
    assert_eq!(tools, vec!["mhci", "mhcii", "processing", "mhcnp", "bcell"]);

    match &config.queries[1] {
        QueryRequest::MhciiBinding(r) => assert!(r.length.is_none()),
        other => panic!("Expected mhcii request, got {:?}", other),
    }
    match &config.queries[2] {
        QueryRequest::TcellEpitope(r) => assert_eq!(r.proteasome, Proteasome::Immuno),
        other => panic!("Expected processing request, got {:?}", other),
    }
    match &config.queries[3] {
        QueryRequest::PeptidePrediction(r) => {
            assert_eq!(r.sequence.len(), 2);
            assert_eq!(r.length, OneOrMany::Many(vec![9, 9]));
        }
        other => panic!("Expected mhcnp request, got {:?}", other),
    }
}

#[tokio::test]
async fn test_minimal_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "queries: []\n").await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.client.timeout_secs, 60);
    assert_eq!(config.logs.level, "info");
    assert_eq!(config.output.format, OutputFormat::Tsv);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = config::load_from(&path.to_string_lossy()).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_invalid_query_is_yaml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "queries:\n  - tool: processing\n    method: smm\n    sequence: AAA\n    allele: A\n    length: 9\n    proteasome: lysosome\n",
    )
    .await;

    let err = config::load_from(&path).await.unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
}
