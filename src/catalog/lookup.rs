use crate::model::RequestDescriptor;
use crate::request::get;

/// Dropdown data is served without a token.
const LOOKUPS: &[(&str, &str)] = &[
    ("Get Price Types", "price-types"),
    ("Get Contract Statuses", "contract-statuses"),
    ("Get Proposal Statuses", "proposal-statuses"),
    ("Get Product Categories", "product-categories"),
    ("Get Units of Measure", "uom"),
    ("Get US States", "states"),
    ("Get Countries", "countries"),
    ("Get Currencies", "currencies"),
    ("Get Payment Terms", "payment-terms"),
    ("Get Shipping Terms", "shipping-terms"),
];

pub fn lookup() -> Vec<RequestDescriptor> {
    LOOKUPS
        .iter()
        .map(|(name, segment)| get(name, &format!("/lookup/{segment}")).public())
        .collect()
}
