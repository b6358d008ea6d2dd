use iedb::{IedbClient, client::HttpTransport, config::ClientConfig};
use wiremock::MockServer;

pub const MHCI_COLUMNS: [&str; 10] = [
    "allele",
    "seq_num",
    "start",
    "end",
    "length",
    "peptide",
    "core",
    "icore",
    "score",
    "percentile_rank",
];

pub const MHCII_COLUMNS: [&str; 10] = [
    "allele",
    "seq_num",
    "start",
    "end",
    "length",
    "core_peptide",
    "peptide",
    "ic50",
    "rank",
    "adjusted_rank",
];

pub const PROCESSING_COLUMNS: [&str; 12] = [
    "allele",
    "seq_num",
    "start",
    "end",
    "length",
    "peptide",
    "proteasome_score",
    "tap_score",
    "mhc_score",
    "processing_score",
    "total_score",
    "ic50_score",
];

pub const MHCNP_COLUMNS: [&str; 7] = [
    "allele",
    "seq_num",
    "start",
    "end",
    "length",
    "peptide",
    "prob_score",
];

pub const BCELL_COLUMNS: [&str; 6] = ["Position", "Residue", "Start", "End", "Peptide", "Score"];

pub const BCELL_SEQUENCE: &str = "VLSEGEWQLVLHVWAKVEADVAGHGQDILIRLFKSHPETLEKFDRFKHLKTE";
pub const PROCESSING_SEQUENCE: &str = "SLYNTVATLYCVHQRIDV";

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Joins a header and rows into a newline-terminated, tab-delimited body.
pub fn tsv_body(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut body = columns.join("\t");
    body.push('\n');
    for row in rows {
        body.push_str(&row.join("\t"));
        body.push('\n');
    }
    body
}

/// Rows for every `length`-long peptide of `sequence`, shaped like the
/// binding tools' output. `extra` values are appended after the peptide.
pub fn peptide_rows(
    allele: &str,
    sequence: &str,
    length: usize,
    extra: &[&str],
) -> Vec<Vec<String>> {
    (0..=sequence.len() - length)
        .map(|start| {
            let mut row = vec![
                allele.to_string(),
                "1".to_string(),
                (start + 1).to_string(),
                (start + length).to_string(),
                length.to_string(),
                sequence[start..start + length].to_string(),
            ];
            row.extend(owned(extra));
            row
        })
        .collect()
}

pub fn mhci_body() -> String {
    tsv_body(
        &MHCI_COLUMNS,
        &[
            owned(&[
                "HLA-A*02:01", "1", "1", "8", "8", "ARFTGIKT", "ARFTGIKT", "ARFTGIKT", "0.001",
                "39",
            ]),
            owned(&[
                "HLA-A*02:01", "1", "2", "9", "8", "RFTGIKTA", "RFTGIKTA", "RFTGIKTA", "0.0006",
                "49",
            ]),
        ],
    )
}

pub fn mhcii_body() -> String {
    let rows: Vec<Vec<String>> = peptide_rows("HLA-DRB1*01:01", PROCESSING_SEQUENCE, 15, &[])
        .into_iter()
        .map(|mut row| {
            let peptide = row.pop().unwrap_or_default();
            row.push(peptide[3..12].to_string());
            row.push(peptide);
            row.extend(owned(&["120.5", "12.0", "12.0"]));
            row
        })
        .collect();
    tsv_body(&MHCII_COLUMNS, &rows)
}

pub fn processing_body() -> String {
    let rows = peptide_rows(
        "HLA-A*01:01",
        PROCESSING_SEQUENCE,
        9,
        &["1.23", "0.45", "-2.1", "1.68", "-0.42", "12000.0"],
    );
    tsv_body(&PROCESSING_COLUMNS, &rows)
}

pub fn mhcnp_body() -> String {
    let rows = peptide_rows("HLA-A*02:01", PROCESSING_SEQUENCE, 9, &["0.12"]);
    tsv_body(&MHCNP_COLUMNS, &rows)
}

/// Emini-style per-residue rows, one per full window.
pub fn bcell_body(window_size: usize) -> String {
    let half = window_size / 2;
    let rows: Vec<Vec<String>> = (0..=BCELL_SEQUENCE.len() - window_size)
        .map(|start| {
            let center = start + half;
            vec![
                (center + 1).to_string(),
                BCELL_SEQUENCE[center..center + 1].to_string(),
                (start + 1).to_string(),
                (start + window_size).to_string(),
                BCELL_SEQUENCE[start..start + window_size].to_string(),
                "1.000".to_string(),
            ]
        })
        .collect();
    tsv_body(&BCELL_COLUMNS, &rows)
}

/// Client whose base URL points at the mock server's `/tools_api/`.
pub fn client_for(server: &MockServer) -> IedbClient<HttpTransport> {
    let config = ClientConfig {
        base_url: format!("{}/tools_api/", server.uri()),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    IedbClient::new(&config).expect("Failed to build test client")
}
