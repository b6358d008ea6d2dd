pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod table;

pub use api::{
    query_bcell_epitope, query_mhci_binding, query_mhcii_binding, query_peptide_prediction,
    query_tcell_epitope,
};
pub use client::{IedbClient, QueryOutcome};
pub use error::{Error, Result};
pub use table::ResultTable;
