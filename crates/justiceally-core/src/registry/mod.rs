//! Document type registry
//!
//! One static [`DocumentSpec`] record per implemented document type,
//! bundling its template, ordered field schema and instruction builder.
//! Adding a document type means adding one record here plus a template
//! file; nothing else branches on the type.
//!
//! Lookups never panic: an unknown or not-yet-implemented type is a
//! valid, expected state answered with `None` or an empty list.

mod embedded;

use crate::prompt;
use crate::types::{DocumentTypeId, FormValues};
use serde::Serialize;

/// A single field in a document type's schema.
pub struct FieldSpec {
    /// Stable key used in [`FormValues`].
    pub key: &'static str,
    /// Label shown to the user and in missing-field messages.
    pub label: &'static str,
    /// Bracket token this field replaces in the template.
    pub placeholder: &'static str,
    /// Required fields block generation when missing.
    pub required: bool,
}

/// Everything the pipeline knows about one implemented document type.
pub struct DocumentSpec {
    pub id: DocumentTypeId,
    /// Legal boilerplate with bracketed insertion points.
    pub template: &'static str,
    /// Schema order defines required-field enumeration order.
    pub fields: &'static [FieldSpec],
    /// Builds the enhancement instruction for this type.
    pub instruction: fn(&FormValues) -> String,
}

/// Catalog entry returned to clients, including unavailable types.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTypeInfo {
    pub id: DocumentTypeId,
    pub name: String,
    pub description: String,
    /// False for catalogued-but-unimplemented placeholders.
    pub available: bool,
    pub required_fields: Vec<String>,
}

/// The affidavit statements block: when the user supplies no
/// statements, the template's numbered skeleton stays in place so the
/// clause numbering survives.
pub(crate) const AFFIDAVIT_STATEMENT_SKELETON: &str =
    "3. [Statement 1]\n\n4. [Statement 2]\n\n5. [Statement 3]";

static POLICE_COMPLAINT: DocumentSpec = DocumentSpec {
    id: DocumentTypeId::PoliceComplaint,
    template: embedded::POLICE_COMPLAINT,
    fields: &[
        FieldSpec {
            key: "name",
            label: "Your Full Name",
            placeholder: "[Your Name]",
            required: true,
        },
        FieldSpec {
            key: "address",
            label: "Your Address",
            placeholder: "[Your Address]",
            required: true,
        },
        FieldSpec {
            key: "phone",
            label: "Phone Number",
            placeholder: "[Your Phone Number]",
            required: true,
        },
        FieldSpec {
            key: "email",
            label: "Email Address",
            placeholder: "[Your Email Address]",
            required: true,
        },
        FieldSpec {
            key: "police_station",
            label: "Police Station",
            placeholder: "[Police Station Name]",
            required: true,
        },
        FieldSpec {
            key: "incident_date",
            label: "Date of Incident",
            placeholder: "[Date of Incident]",
            required: true,
        },
        FieldSpec {
            key: "incident_location",
            label: "Location of Incident",
            placeholder: "[Location of Incident]",
            required: true,
        },
        FieldSpec {
            key: "complaint_subject",
            label: "Subject of Complaint",
            placeholder: "[Subject of Complaint]",
            required: false,
        },
        FieldSpec {
            key: "complaint_details",
            label: "Complaint Details",
            placeholder: "[Detailed description of the incident including what happened, who was involved, and any evidence or witnesses]",
            required: true,
        },
    ],
    instruction: prompt::police_complaint,
};

static LEGAL_NOTICE: DocumentSpec = DocumentSpec {
    id: DocumentTypeId::LegalNotice,
    template: embedded::LEGAL_NOTICE,
    fields: &[
        FieldSpec {
            key: "sender_name",
            label: "Sender's Name",
            placeholder: "[Sender Name]",
            required: true,
        },
        FieldSpec {
            key: "sender_address",
            label: "Sender's Address",
            placeholder: "[Sender Address]",
            required: true,
        },
        FieldSpec {
            key: "recipient_name",
            label: "Recipient's Name",
            placeholder: "[Recipient Name]",
            required: true,
        },
        FieldSpec {
            key: "recipient_address",
            label: "Recipient's Address",
            placeholder: "[Recipient Address]",
            required: true,
        },
        FieldSpec {
            key: "subject",
            label: "Subject of Notice",
            placeholder: "[Subject of the Notice]",
            required: true,
        },
        FieldSpec {
            key: "notice_details",
            label: "Notice Details",
            placeholder: "[Detailed description of the issue, including relevant facts, dates, and circumstances]",
            required: true,
        },
        FieldSpec {
            key: "demand_details",
            label: "Demand Details",
            placeholder: "[Specific demands or actions required from the recipient]",
            required: true,
        },
        FieldSpec {
            key: "response_deadline",
            label: "Response Deadline (in days)",
            placeholder: "[number of days]",
            required: true,
        },
    ],
    instruction: prompt::legal_notice,
};

static RTI_APPLICATION: DocumentSpec = DocumentSpec {
    id: DocumentTypeId::Rti,
    template: embedded::RTI_APPLICATION,
    fields: &[
        FieldSpec {
            key: "applicant_name",
            label: "Applicant's Name",
            placeholder: "[Applicant Name]",
            required: true,
        },
        FieldSpec {
            key: "applicant_address",
            label: "Applicant's Address",
            placeholder: "[Applicant Address]",
            required: true,
        },
        FieldSpec {
            key: "applicant_phone",
            label: "Phone Number",
            placeholder: "[Phone Number]",
            required: true,
        },
        FieldSpec {
            key: "public_authority",
            label: "Public Authority",
            placeholder: "[Name of the Public Authority]",
            required: true,
        },
        FieldSpec {
            key: "request_details",
            label: "Information Requested",
            placeholder: "[Clearly specify the information being sought]",
            required: true,
        },
        FieldSpec {
            key: "request_period",
            label: "Time Period for Information",
            placeholder: "[Specify the time period for which information is sought]",
            required: true,
        },
        FieldSpec {
            key: "payment_mode",
            label: "Mode of Payment",
            placeholder: "[mode of payment]",
            required: false,
        },
        FieldSpec {
            key: "category",
            label: "Category",
            placeholder: "[BPL/APL]",
            required: false,
        },
    ],
    instruction: prompt::rti_application,
};

static AFFIDAVIT: DocumentSpec = DocumentSpec {
    id: DocumentTypeId::Affidavit,
    template: embedded::AFFIDAVIT,
    fields: &[
        FieldSpec {
            key: "deponent_name",
            label: "Deponent's Name",
            placeholder: "[Deponent Name]",
            required: true,
        },
        FieldSpec {
            key: "deponent_address",
            label: "Deponent's Address",
            placeholder: "[Address]",
            required: true,
        },
        FieldSpec {
            key: "deponent_age",
            label: "Deponent's Age",
            placeholder: "[Age]",
            required: true,
        },
        FieldSpec {
            key: "relation_name",
            label: "Father's/Husband's Name",
            placeholder: "[Father's/Husband's Name]",
            required: false,
        },
        FieldSpec {
            key: "affidavit_purpose",
            label: "Purpose of Affidavit",
            placeholder: "[Purpose of the Affidavit]",
            required: true,
        },
        FieldSpec {
            key: "affidavit_statements",
            label: "Affidavit Statements",
            placeholder: AFFIDAVIT_STATEMENT_SKELETON,
            required: true,
        },
    ],
    instruction: prompt::affidavit,
};

/// Look up the spec for an implemented document type.
pub fn spec(id: DocumentTypeId) -> Option<&'static DocumentSpec> {
    match id {
        DocumentTypeId::PoliceComplaint => Some(&POLICE_COMPLAINT),
        DocumentTypeId::LegalNotice => Some(&LEGAL_NOTICE),
        DocumentTypeId::Rti => Some(&RTI_APPLICATION),
        DocumentTypeId::Affidavit => Some(&AFFIDAVIT),
        _ => None,
    }
}

/// Raw template text for an implemented document type.
pub fn get_template(id: DocumentTypeId) -> Option<&'static str> {
    spec(id).map(|s| s.template)
}

/// Required fields in schema order; empty for unimplemented types.
pub fn required_fields(id: DocumentTypeId) -> Vec<&'static FieldSpec> {
    spec(id)
        .map(|s| s.fields.iter().filter(|f| f.required).collect())
        .unwrap_or_default()
}

/// List every catalogued document type with its availability flag.
pub fn catalog() -> Vec<DocumentTypeInfo> {
    DocumentTypeId::ALL
        .iter()
        .map(|&id| {
            let spec = spec(id);
            DocumentTypeInfo {
                id,
                name: id.display_name().to_string(),
                description: id.description().to_string(),
                available: spec.is_some(),
                required_fields: spec
                    .map(|s| {
                        s.fields
                            .iter()
                            .filter(|f| f.required)
                            .map(|f| f.key.to_string())
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_implemented_types_have_template_and_fields() {
        for id in DocumentTypeId::ALL {
            if let Some(spec) = spec(id) {
                assert!(!spec.template.is_empty(), "{} has empty template", id);
                assert!(!spec.fields.is_empty(), "{} has no fields", id);
                assert!(
                    spec.fields.iter().any(|f| f.required),
                    "{} has no required fields",
                    id
                );
            }
        }
    }

    #[test]
    fn test_every_placeholder_appears_in_its_template() {
        for id in DocumentTypeId::ALL {
            if let Some(spec) = spec(id) {
                for field in spec.fields {
                    assert!(
                        spec.template.contains(field.placeholder),
                        "{}: placeholder {:?} for field '{}' not in template",
                        id,
                        field.placeholder,
                        field.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_field_keys_are_unique_within_a_type() {
        for id in DocumentTypeId::ALL {
            if let Some(spec) = spec(id) {
                let keys: HashSet<_> = spec.fields.iter().map(|f| f.key).collect();
                assert_eq!(keys.len(), spec.fields.len(), "{} has duplicate keys", id);
            }
        }
    }

    #[test]
    fn test_unimplemented_types_return_sentinels() {
        assert!(spec(DocumentTypeId::RentalAgreement).is_none());
        assert!(get_template(DocumentTypeId::Nda).is_none());
        assert!(required_fields(DocumentTypeId::ConsumerComplaint).is_empty());
    }

    #[test]
    fn test_catalog_lists_all_types_with_availability() {
        let catalog = catalog();
        assert_eq!(catalog.len(), DocumentTypeId::ALL.len());
        let available: Vec<_> = catalog.iter().filter(|e| e.available).collect();
        assert_eq!(available.len(), 4);
        for entry in &catalog {
            assert_eq!(entry.available, !entry.required_fields.is_empty());
        }
    }

    #[test]
    fn test_affidavit_skeleton_matches_template() {
        let spec = spec(DocumentTypeId::Affidavit).unwrap();
        assert!(spec.template.contains(AFFIDAVIT_STATEMENT_SKELETON));
    }
}
