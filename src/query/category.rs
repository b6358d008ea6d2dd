use serde::{Deserialize, Serialize};
use std::fmt;

/// Prediction tool families exposed by the IEDB Tools API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MhciBinding,
    MhciiBinding,
    TcellEpitope,
    PeptidePrediction,
    BcellEpitope,
}

const MHCI_METHODS: &[&str] = &[
    "recommended",
    "ann-4.0",
    "comblib_sidney2008-1.0",
    "consensus-2.18",
    "netmhccons-1.1",
    "netmhcpan_ba-4.1",
    "netmhcpan_ba-4.0",
    "netmhcpan_el-4.1",
    "netmhcpan_el-4.0",
    "netmhcstabpan-1.0",
    "pickpocket-1.1",
    "smm-1.0",
    "smmpmbec-1.0",
];

const MHCII_METHODS: &[&str] = &[
    "recommended",
    "consensus-2.22",
    "consensus-2.18",
    "netmhciipan-4.0",
    "netmhciipan-3.2",
    "netmhciipan-3.1",
    "smm_align-1.1",
    "nn_align-2.3",
    "nn_align-2.2",
    "comblib-1.0",
    "tepitope-1.0",
];

const PROCESSING_METHODS: &[&str] = &[
    "recommended",
    "netmhcpan",
    "ann",
    "smmpmbec",
    "smm",
    "comblib_sidney2008",
    "netmhccons",
    "pickpocket",
];

const MHCNP_METHODS: &[&str] = &["netmhcpan", "mhcnp"];

const BCELL_METHODS: &[&str] = &[
    "Bepipred",
    "Bepipred-2.0",
    "Chou-Fasman",
    "Emini",
    "Karplus-Schulz",
    "Kolaskar-Tongaonkar",
    "Parker",
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MhciBinding,
        Category::MhciiBinding,
        Category::TcellEpitope,
        Category::PeptidePrediction,
        Category::BcellEpitope,
    ];

    /// Tool name used both in the API path and on tools.iedb.org.
    pub fn tool(&self) -> &'static str {
        match self {
            Self::MhciBinding => "mhci",
            Self::MhciiBinding => "mhcii",
            Self::TcellEpitope => "processing",
            Self::PeptidePrediction => "mhcnp",
            Self::BcellEpitope => "bcell",
        }
    }

    /// Path segment appended to the API base URL.
    pub fn path(&self) -> String {
        format!("{}/", self.tool())
    }

    pub fn help_url(&self) -> String {
        format!("http://tools.iedb.org/{}/", self.tool())
    }

    /// Method identifiers documented for this tool. The list is advisory,
    /// the service is the authority on what it accepts.
    pub fn known_methods(&self) -> &'static [&'static str] {
        match self {
            Self::MhciBinding => MHCI_METHODS,
            Self::MhciiBinding => MHCII_METHODS,
            Self::TcellEpitope => PROCESSING_METHODS,
            Self::PeptidePrediction => MHCNP_METHODS,
            Self::BcellEpitope => BCELL_METHODS,
        }
    }

    /// Matches either a full `name-version` entry or its bare name.
    pub fn is_known_method(&self, method: &str) -> bool {
        self.known_methods().iter().any(|known| {
            *known == method || strip_version(known).is_some_and(|name| name == method)
        })
    }
}

/// `"nn_align-2.3"` -> `Some("nn_align")`; entries whose suffix is not a
/// version number (`"Chou-Fasman"`) are left alone.
fn strip_version(entry: &str) -> Option<&str> {
    let (name, version) = entry.rsplit_once('-')?;
    let is_version = !version.is_empty()
        && version.chars().all(|c| c.is_ascii_digit() || c == '.')
        && version.starts_with(|c: char| c.is_ascii_digit());
    is_version.then_some(name)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool())
    }
}
