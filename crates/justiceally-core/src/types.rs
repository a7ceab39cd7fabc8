//! Data model for the document pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the fixed set of supported legal document categories.
///
/// Several categories are catalogued but not yet implemented; for those
/// `registry::spec` returns `None` and the pipeline answers with a
/// "coming soon" notice instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentTypeId {
    PoliceComplaint,
    LegalNotice,
    Rti,
    Affidavit,
    ConsumerComplaint,
    WorkplaceHarassment,
    LandlordNotice,
    ChequeBounce,
    RentalAgreement,
    EmploymentContract,
    FreelanceAgreement,
    Nda,
}

impl DocumentTypeId {
    /// Every catalogued document type, implemented or not.
    pub const ALL: [DocumentTypeId; 12] = [
        DocumentTypeId::PoliceComplaint,
        DocumentTypeId::LegalNotice,
        DocumentTypeId::Rti,
        DocumentTypeId::Affidavit,
        DocumentTypeId::ConsumerComplaint,
        DocumentTypeId::WorkplaceHarassment,
        DocumentTypeId::LandlordNotice,
        DocumentTypeId::ChequeBounce,
        DocumentTypeId::RentalAgreement,
        DocumentTypeId::EmploymentContract,
        DocumentTypeId::FreelanceAgreement,
        DocumentTypeId::Nda,
    ];

    /// Human-readable name used in catalog listings and filenames.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentTypeId::PoliceComplaint => "Police Complaint",
            DocumentTypeId::LegalNotice => "Legal Notice",
            DocumentTypeId::Rti => "RTI Application",
            DocumentTypeId::Affidavit => "Affidavit",
            DocumentTypeId::ConsumerComplaint => "Consumer Complaint",
            DocumentTypeId::WorkplaceHarassment => "Workplace Harassment Complaint",
            DocumentTypeId::LandlordNotice => "Landlord Notice",
            DocumentTypeId::ChequeBounce => "Cheque Bounce Notice",
            DocumentTypeId::RentalAgreement => "Rental Agreement",
            DocumentTypeId::EmploymentContract => "Employment Contract",
            DocumentTypeId::FreelanceAgreement => "Freelance Agreement",
            DocumentTypeId::Nda => "Non-Disclosure Agreement",
        }
    }

    /// One-line description shown next to the catalog entry.
    pub fn description(&self) -> &'static str {
        match self {
            DocumentTypeId::PoliceComplaint => {
                "File a complaint with the police about a crime or incident"
            }
            DocumentTypeId::LegalNotice => "Send a formal notice before taking legal action",
            DocumentTypeId::Rti => "Request information from a public authority",
            DocumentTypeId::Affidavit => "Create a sworn statement for legal purposes",
            DocumentTypeId::ConsumerComplaint => {
                "File a complaint against a business for defective products or services"
            }
            DocumentTypeId::WorkplaceHarassment => {
                "Report harassment or discrimination at your workplace"
            }
            DocumentTypeId::LandlordNotice => {
                "Send a formal notice to your landlord regarding repairs or issues"
            }
            DocumentTypeId::ChequeBounce => "Send a legal notice for a dishonored cheque",
            DocumentTypeId::RentalAgreement => {
                "Create a rental agreement between landlord and tenant"
            }
            DocumentTypeId::EmploymentContract => {
                "Draft an employment agreement with standard terms"
            }
            DocumentTypeId::FreelanceAgreement => {
                "Create a contract for freelance or consulting work"
            }
            DocumentTypeId::Nda => "Draft an NDA to protect confidential information",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DocumentTypeId::PoliceComplaint => "police-complaint",
            DocumentTypeId::LegalNotice => "legal-notice",
            DocumentTypeId::Rti => "rti",
            DocumentTypeId::Affidavit => "affidavit",
            DocumentTypeId::ConsumerComplaint => "consumer-complaint",
            DocumentTypeId::WorkplaceHarassment => "workplace-harassment",
            DocumentTypeId::LandlordNotice => "landlord-notice",
            DocumentTypeId::ChequeBounce => "cheque-bounce",
            DocumentTypeId::RentalAgreement => "rental-agreement",
            DocumentTypeId::EmploymentContract => "employment-contract",
            DocumentTypeId::FreelanceAgreement => "freelance-agreement",
            DocumentTypeId::Nda => "nda",
        }
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentTypeId::ALL
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown document type: {}", s))
    }
}

/// Field values entered by the user, keyed by field key.
///
/// A key that is absent and a key mapped to a blank string are both
/// treated as "missing" by validation and rendering.
pub type FormValues = HashMap<String, String>;

/// Look up a field value, treating blank strings as absent.
pub(crate) fn non_empty<'a>(values: &'a FormValues, key: &str) -> Option<&'a str> {
    values
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// Which stage produced the final document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// The generative backend's text, verbatim.
    Enhanced,
    /// The deterministic template render, kept because enhancement failed.
    Base,
}

/// Final output of a generation or simplification request.
///
/// Immutable once produced; a new request produces a new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub text: String,
    pub source: ResultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Suggested filename for the plain-text download side channel.
///
/// Slugified title plus a `.txt` extension; falls back to
/// `document.txt` when the title has no usable characters.
pub fn download_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("document");
    }
    slug.push_str(".txt");
    slug
}
