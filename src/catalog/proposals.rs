use serde_json::json;

use crate::model::RequestDescriptor;
use crate::request::{delete, get, post, put};

pub fn proposals() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Proposals", "/proposals?page=1&pageSize=10"),
        get("Get Proposal by ID", "/proposals/1"),
        post("Create Proposal", "/proposals").json(json!({
            "proposalNumber": "PROP-2024-001",
            "manufacturerId": 1,
            "proposalTypeId": 1,
            "proposalStatusId": 1,
            "startDate": "2024-01-01",
            "endDate": "2024-12-31"
        })),
        put("Update Proposal", "/proposals/1").json(json!({
            "proposalNumber": "PROP-2024-001",
            "description": "Updated proposal"
        })),
        delete("Delete Proposal", "/proposals/1"),
        get("Get Proposal Products", "/proposals/1/products"),
        post("Add Product to Proposal", "/proposals/1/products").json(json!({
            "productId": 1,
            "quantity": 100,
            "proposedPrice": 99.99
        })),
        put("Update Proposal Product", "/proposals/1/products/1").json(json!({
            "quantity": 150,
            "proposedPrice": 89.99
        })),
        delete("Remove Product from Proposal", "/proposals/1/products/1"),
        post("Import Products from Excel", "/proposals/1/products/import"),
        get("Export Products to Excel", "/proposals/1/products/export"),
    ]
}

pub fn proposal_products() -> Vec<RequestDescriptor> {
    vec![
        get("Get Proposal Products", "/proposal-products?proposalId=1"),
        get("Get Proposal Product by ID", "/proposal-products/1"),
        put("Update Proposal Product", "/proposal-products/1").json(json!({
            "quantity": 150,
            "proposedPrice": 89.99
        })),
        delete("Delete Proposal Product", "/proposal-products/1"),
    ]
}
