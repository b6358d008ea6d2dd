//! One-shot query functions against the public service.
//!
//! Each call builds a client from [`ClientConfig::from_env`] (defaults, with
//! `IEDB_BASE_URL` overriding the service location) and returns `Ok(None)`
//! when the service answers with a non-success status. Use [`IedbClient`]
//! directly to reuse a connection pool or change settings.

use crate::{
    Result,
    client::{HttpTransport, IedbClient},
    config::ClientConfig,
    query::{OneOrMany, Proteasome},
    table::ResultTable,
};

fn default_client() -> Result<IedbClient<HttpTransport>> {
    IedbClient::new(&ClientConfig::from_env())
}

/// MHC class I binding prediction (`mhci`).
pub async fn query_mhci_binding(
    method: &str,
    sequence: impl Into<OneOrMany<String>>,
    allele: impl Into<OneOrMany<String>>,
    length: impl Into<OneOrMany<u32>>,
) -> Result<Option<ResultTable>> {
    default_client()?
        .query_mhci_binding(method, sequence, allele, length)
        .await
}

/// MHC class II binding prediction (`mhcii`).
pub async fn query_mhcii_binding(
    method: &str,
    sequence: impl Into<OneOrMany<String>>,
    allele: impl Into<OneOrMany<String>>,
    length: Option<OneOrMany<u32>>,
) -> Result<Option<ResultTable>> {
    default_client()?
        .query_mhcii_binding(method, sequence, allele, length)
        .await
}

/// Combined proteasomal cleavage, TAP transport and MHC binding score
/// (`processing`).
pub async fn query_tcell_epitope(
    method: &str,
    sequence: impl Into<OneOrMany<String>>,
    allele: impl Into<OneOrMany<String>>,
    length: impl Into<OneOrMany<u32>>,
    proteasome: Proteasome,
) -> Result<Option<ResultTable>> {
    default_client()?
        .query_tcell_epitope(method, sequence, allele, length, proteasome)
        .await
}

/// Probability that a peptide is naturally processed and presented
/// (`mhcnp`).
pub async fn query_peptide_prediction(
    method: &str,
    sequence: impl Into<OneOrMany<String>>,
    allele: impl Into<OneOrMany<String>>,
    length: impl Into<OneOrMany<u32>>,
) -> Result<Option<ResultTable>> {
    default_client()?
        .query_peptide_prediction(method, sequence, allele, length)
        .await
}

/// Continuous B-cell epitope prediction (`bcell`).
pub async fn query_bcell_epitope(
    method: &str,
    sequence: impl Into<OneOrMany<String>>,
    window_size: u32,
) -> Result<Option<ResultTable>> {
    default_client()?
        .query_bcell_epitope(method, sequence, window_size)
        .await
}
