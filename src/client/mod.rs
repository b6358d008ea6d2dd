mod transport;
mod types;

pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{NonSuccessStatus, QueryOutcome};

use crate::{
    Result,
    config::ClientConfig,
    query::{
        BcellEpitopeRequest, Category, MhciBindingRequest, MhciiBindingRequest, OneOrMany,
        PeptidePredictionRequest, Proteasome, QueryRequest, TcellEpitopeRequest,
    },
    table::{self, ResultTable},
};
use tracing::{debug, error, warn};

/// Client for the IEDB Tools API.
///
/// Every call is one independent form POST followed by decoding of the
/// tab-delimited reply; the client keeps no state between calls and can be
/// shared across tasks.
pub struct IedbClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl IedbClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config.base_url.clone()))
    }
}

impl<T: Transport> IedbClient<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, category: Category) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category.path())
    }

    /// Sends the request and reports a non-success status as
    /// [`QueryOutcome::Failure`]. Transport failures and undecodable bodies
    /// are returned as errors.
    pub async fn submit(&self, request: &QueryRequest) -> Result<QueryOutcome> {
        let category = request.category();
        if !category.is_known_method(request.method()) {
            warn!(
                "Method '{}' is not a documented {} method, sending it anyway",
                request.method(),
                category
            );
        }

        let endpoint = self.endpoint(category);
        debug!("Submitting {} query to {}", category, endpoint);

        let response = self
            .transport
            .post_form(&endpoint, &request.form_fields())
            .await?;

        if response.status != 200 {
            error!(
                "Query returned non-success status {} from {}",
                response.status, endpoint
            );
            return Ok(QueryOutcome::Failure(NonSuccessStatus {
                status: response.status,
                endpoint,
                body: response.body,
            }));
        }

        let table = table::decode(&response.body)?;
        debug!("{} query returned {} rows", category, table.len());
        Ok(QueryOutcome::Success(table))
    }

    /// Like [`submit`](Self::submit), but a non-success status becomes
    /// [`Error::NonSuccessStatus`](crate::Error::NonSuccessStatus).
    pub async fn submit_strict(&self, request: &QueryRequest) -> Result<ResultTable> {
        self.submit(request).await?.into_result()
    }

    /// Absent table on a non-success status, errors otherwise.
    pub async fn query(&self, request: &QueryRequest) -> Result<Option<ResultTable>> {
        Ok(self.submit(request).await?.into_table())
    }

    pub async fn query_mhci_binding(
        &self,
        method: &str,
        sequence: impl Into<OneOrMany<String>>,
        allele: impl Into<OneOrMany<String>>,
        length: impl Into<OneOrMany<u32>>,
    ) -> Result<Option<ResultTable>> {
        let request = MhciBindingRequest {
            method: method.to_string(),
            sequence: sequence.into(),
            allele: allele.into(),
            length: length.into(),
        };
        self.query(&request.into()).await
    }

    /// `length` may be left out; the service then picks its default range.
    pub async fn query_mhcii_binding(
        &self,
        method: &str,
        sequence: impl Into<OneOrMany<String>>,
        allele: impl Into<OneOrMany<String>>,
        length: Option<OneOrMany<u32>>,
    ) -> Result<Option<ResultTable>> {
        let request = MhciiBindingRequest {
            method: method.to_string(),
            sequence: sequence.into(),
            allele: allele.into(),
            length,
        };
        self.query(&request.into()).await
    }

    pub async fn query_tcell_epitope(
        &self,
        method: &str,
        sequence: impl Into<OneOrMany<String>>,
        allele: impl Into<OneOrMany<String>>,
        length: impl Into<OneOrMany<u32>>,
        proteasome: Proteasome,
    ) -> Result<Option<ResultTable>> {
        let request = TcellEpitopeRequest {
            method: method.to_string(),
            sequence: sequence.into(),
            allele: allele.into(),
            length: length.into(),
            proteasome,
        };
        self.query(&request.into()).await
    }

    pub async fn query_peptide_prediction(
        &self,
        method: &str,
        sequence: impl Into<OneOrMany<String>>,
        allele: impl Into<OneOrMany<String>>,
        length: impl Into<OneOrMany<u32>>,
    ) -> Result<Option<ResultTable>> {
        let request = PeptidePredictionRequest {
            method: method.to_string(),
            sequence: sequence.into(),
            allele: allele.into(),
            length: length.into(),
        };
        self.query(&request.into()).await
    }

    pub async fn query_bcell_epitope(
        &self,
        method: &str,
        sequence: impl Into<OneOrMany<String>>,
        window_size: u32,
    ) -> Result<Option<ResultTable>> {
        let request = BcellEpitopeRequest {
            method: method.to_string(),
            sequence: sequence.into(),
            window_size,
        };
        self.query(&request.into()).await
    }
}
