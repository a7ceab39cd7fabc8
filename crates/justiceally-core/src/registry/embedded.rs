//! Embedded legal templates
//!
//! Templates are loaded from external files at compile time and
//! embedded in the binary. Bracketed tokens like `[Your Name]` mark
//! field insertion points; tokens with no matching field (for example
//! `[Place]` or `[Advocate Name]`) are left for the reader to fill in
//! by hand, matching legal-boilerplate convention.

/// Police complaint - loaded from templates/police_complaint.txt
pub(crate) const POLICE_COMPLAINT: &str = include_str!("../../templates/police_complaint.txt");

/// Legal notice - loaded from templates/legal_notice.txt
pub(crate) const LEGAL_NOTICE: &str = include_str!("../../templates/legal_notice.txt");

/// RTI application under Section 6(1) - loaded from templates/rti_application.txt
pub(crate) const RTI_APPLICATION: &str = include_str!("../../templates/rti_application.txt");

/// Affidavit with verification block - loaded from templates/affidavit.txt
pub(crate) const AFFIDAVIT: &str = include_str!("../../templates/affidavit.txt");
