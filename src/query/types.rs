use super::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIELD_METHOD: &str = "method";
pub const FIELD_SEQUENCE: &str = "sequence_text";
pub const FIELD_ALLELE: &str = "allele";
pub const FIELD_LENGTH: &str = "length";
pub const FIELD_PROTEASOME: &str = "proteasome";
pub const FIELD_WINDOW_SIZE: &str = "window_size";

/// A parameter the API accepts either as a single value or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T: ToString> OneOrMany<T> {
    pub fn join(&self, separator: &str) -> String {
        self.as_slice()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<u32> for OneOrMany<u32> {
    fn from(value: u32) -> Self {
        Self::One(value)
    }
}

impl From<Vec<u32>> for OneOrMany<u32> {
    fn from(values: Vec<u32>) -> Self {
        Self::Many(values)
    }
}

impl From<&[u32]> for OneOrMany<u32> {
    fn from(values: &[u32]) -> Self {
        Self::Many(values.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for OneOrMany<u32> {
    fn from(values: [u32; N]) -> Self {
        Self::Many(values.to_vec())
    }
}

/// Proteasome variant used by the processing (T-cell epitope) predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proteasome {
    Immuno,
    Constitutive,
}

impl Proteasome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immuno => "immuno",
            Self::Constitutive => "constitutive",
        }
    }
}

impl fmt::Display for Proteasome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered form body sent to the service.
pub type FormFields = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MhciBindingRequest {
    pub method: String,
    pub sequence: OneOrMany<String>,
    pub allele: OneOrMany<String>,
    pub length: OneOrMany<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MhciiBindingRequest {
    pub method: String,
    pub sequence: OneOrMany<String>,
    pub allele: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<OneOrMany<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcellEpitopeRequest {
    pub method: String,
    pub sequence: OneOrMany<String>,
    pub allele: OneOrMany<String>,
    pub length: OneOrMany<u32>,
    pub proteasome: Proteasome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeptidePredictionRequest {
    pub method: String,
    pub sequence: OneOrMany<String>,
    pub allele: OneOrMany<String>,
    pub length: OneOrMany<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcellEpitopeRequest {
    pub method: String,
    pub sequence: OneOrMany<String>,
    pub window_size: u32,
}

/// One query against any of the prediction tools.
///
/// In YAML the variant is picked by a `tool` key using the API's tool names:
///
/// ```yaml
/// tool: mhci
/// method: recommended
/// sequence: ARFTGIKTA
/// allele: HLA-A*02:01
/// length: 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool")]
pub enum QueryRequest {
    #[serde(rename = "mhci")]
    MhciBinding(MhciBindingRequest),
    #[serde(rename = "mhcii")]
    MhciiBinding(MhciiBindingRequest),
    #[serde(rename = "processing")]
    TcellEpitope(TcellEpitopeRequest),
    #[serde(rename = "mhcnp")]
    PeptidePrediction(PeptidePredictionRequest),
    #[serde(rename = "bcell")]
    BcellEpitope(BcellEpitopeRequest),
}

impl QueryRequest {
    pub fn category(&self) -> Category {
        match self {
            Self::MhciBinding(_) => Category::MhciBinding,
            Self::MhciiBinding(_) => Category::MhciiBinding,
            Self::TcellEpitope(_) => Category::TcellEpitope,
            Self::PeptidePrediction(_) => Category::PeptidePrediction,
            Self::BcellEpitope(_) => Category::BcellEpitope,
        }
    }

    pub fn method(&self) -> &str {
        match self {
            Self::MhciBinding(r) => &r.method,
            Self::MhciiBinding(r) => &r.method,
            Self::TcellEpitope(r) => &r.method,
            Self::PeptidePrediction(r) => &r.method,
            Self::BcellEpitope(r) => &r.method,
        }
    }

    /// Flattens the request into form fields in the order the API lists
    /// them. Values are not validated; the service rejects bad input.
    pub fn form_fields(&self) -> FormFields {
        match self {
            Self::MhciBinding(r) => {
                binding_fields(&r.method, &r.sequence, &r.allele, Some(&r.length))
            }
            Self::MhciiBinding(r) => {
                binding_fields(&r.method, &r.sequence, &r.allele, r.length.as_ref())
            }
            Self::TcellEpitope(r) => {
                let mut fields =
                    binding_fields(&r.method, &r.sequence, &r.allele, Some(&r.length));
                fields.push((FIELD_PROTEASOME, r.proteasome.to_string()));
                fields
            }
            Self::PeptidePrediction(r) => {
                binding_fields(&r.method, &r.sequence, &r.allele, Some(&r.length))
            }
            Self::BcellEpitope(r) => vec![
                (FIELD_METHOD, r.method.clone()),
                (FIELD_SEQUENCE, sequence_text(&r.sequence)),
                (FIELD_WINDOW_SIZE, r.window_size.to_string()),
            ],
        }
    }
}

fn sequence_text(sequence: &OneOrMany<String>) -> String {
    sequence.join("\n")
}

fn binding_fields(
    method: &str,
    sequence: &OneOrMany<String>,
    allele: &OneOrMany<String>,
    length: Option<&OneOrMany<u32>>,
) -> FormFields {
    let mut fields = vec![
        (FIELD_METHOD, method.to_string()),
        (FIELD_SEQUENCE, sequence_text(sequence)),
        (FIELD_ALLELE, allele.join(",")),
    ];
    if let Some(length) = length {
        fields.push((FIELD_LENGTH, length.join(",")));
    }
    fields
}

impl From<MhciBindingRequest> for QueryRequest {
    fn from(request: MhciBindingRequest) -> Self {
        Self::MhciBinding(request)
    }
}

impl From<MhciiBindingRequest> for QueryRequest {
    fn from(request: MhciiBindingRequest) -> Self {
        Self::MhciiBinding(request)
    }
}

impl From<TcellEpitopeRequest> for QueryRequest {
    fn from(request: TcellEpitopeRequest) -> Self {
        Self::TcellEpitope(request)
    }
}

impl From<PeptidePredictionRequest> for QueryRequest {
    fn from(request: PeptidePredictionRequest) -> Self {
        Self::PeptidePrediction(request)
    }
}

impl From<BcellEpitopeRequest> for QueryRequest {
    fn from(request: BcellEpitopeRequest) -> Self {
        Self::BcellEpitope(request)
    }
}
