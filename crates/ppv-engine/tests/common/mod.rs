//! Shared fixtures: a field table covering the logical fields the shipped
//! rules resolve, with flat paths into each section.

use ppv_model::{FieldSpec, FieldTable};

const LOS_FIELDS: &[&str] = &[
    "purpose_of_loan",
    "investor",
    "ltv",
    "cltv",
    "hcltv",
    "dti",
    "property_will_be",
    "no_units",
    "loan_program_detail",
    "property_type",
    "average_representative_credit_score",
    "gift_amount",
    "liabilities_account_number",
    "liabilities_name",
    "liabilities_account_type",
    "liabilities_will_be_paid_off",
    "estimated_closing_date",
    "amortization_type",
    "cash_from_borrower",
    "cash_to_borrower",
    "loan_amount",
    "homebuyer_education_certificate",
    "total_income",
    "area_median_income",
    "urla_lender_subject_street",
    "urla_lender_subject_city",
    "urla_lender_subject_state",
    "urla_lender_subject_unit",
];

pub fn field_table() -> FieldTable {
    let mut table = FieldTable::new();
    for field in LOS_FIELDS {
        table.insert("los", *field, FieldSpec::new(*field));
    }
    table.insert("title", "chain_title_date", FieldSpec::new("chain_title_date"));
    table.insert("appraisal", "prior_sale_date", FieldSpec::new("prior_sale_date"));
    for field in [
        "drive_street",
        "drive_city",
        "drive_state",
        "drive_unit",
        "fraud_recorded_date",
    ] {
        table.insert("drive_report", field, FieldSpec::new(field));
    }
    table
}
