//! Instruction builders for the generative backend
//!
//! These produce the natural-language instruction sent to the
//! completion backend; they are distinct from the legal templates.
//! Absent fields are rendered as an explicit "Not provided" marker so
//! the backend is never handed an ambiguous blank.

use crate::types::{non_empty, FormValues};

const NOT_PROVIDED: &str = "Not provided";

fn value<'a>(values: &'a FormValues, key: &str) -> &'a str {
    non_empty(values, key).unwrap_or(NOT_PROVIDED)
}

fn closing_request(kind: &str) -> String {
    format!(
        "Please create a formal, detailed {} that includes all relevant legal terminology \
         and follows the proper format. Expand on the details provided to make it \
         comprehensive and legally sound.",
        kind
    )
}

pub(crate) fn police_complaint(values: &FormValues) -> String {
    format!(
        "Generate a detailed police complaint based on the following information:\n\
         Name: {}\n\
         Address: {}\n\
         Incident Date: {}\n\
         Incident Location: {}\n\
         Subject: {}\n\
         Details: {}\n\n{}",
        value(values, "name"),
        value(values, "address"),
        value(values, "incident_date"),
        value(values, "incident_location"),
        value(values, "complaint_subject"),
        value(values, "complaint_details"),
        closing_request("police complaint"),
    )
}

pub(crate) fn legal_notice(values: &FormValues) -> String {
    format!(
        "Generate a detailed legal notice based on the following information:\n\
         Sender: {} at {}\n\
         Recipient: {} at {}\n\
         Subject: {}\n\
         Notice Details: {}\n\
         Demands: {}\n\
         Response Deadline: {} days\n\n{}",
        value(values, "sender_name"),
        value(values, "sender_address"),
        value(values, "recipient_name"),
        value(values, "recipient_address"),
        value(values, "subject"),
        value(values, "notice_details"),
        value(values, "demand_details"),
        value(values, "response_deadline"),
        closing_request("legal notice"),
    )
}

pub(crate) fn rti_application(values: &FormValues) -> String {
    format!(
        "Generate a detailed RTI application based on the following information:\n\
         Applicant: {} at {}\n\
         Public Authority: {}\n\
         Information Requested: {}\n\
         Time Period: {}\n\n{}",
        value(values, "applicant_name"),
        value(values, "applicant_address"),
        value(values, "public_authority"),
        value(values, "request_details"),
        value(values, "request_period"),
        closing_request("RTI application"),
    )
}

pub(crate) fn affidavit(values: &FormValues) -> String {
    format!(
        "Generate a detailed affidavit based on the following information:\n\
         Deponent: {}, aged {} at {}\n\
         Purpose: {}\n\
         Statements: {}\n\n{}",
        value(values, "deponent_name"),
        value(values, "deponent_age"),
        value(values, "deponent_address"),
        value(values, "affidavit_purpose"),
        value(values, "affidavit_statements"),
        closing_request("affidavit"),
    )
}

/// Instruction for the document simplification flow.
pub(crate) fn simplification(text: &str) -> String {
    format!(
        "Please simplify the following legal document into plain language that's easy to \
         understand. Break it down into sections with clear explanations of key terms, \
         rights, and obligations:\n\n{}",
        text
    )
}
