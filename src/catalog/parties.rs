//! Trading partners and account hierarchies.

use serde_json::json;

use crate::model::RequestDescriptor;
use crate::request::{delete, get, post, put};

pub fn manufacturers() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Manufacturers", "/manufacturers"),
        get("Get Manufacturer by ID", "/manufacturers/1"),
        post("Create Manufacturer", "/manufacturers").json(json!({
            "name": "New Manufacturer",
            "code": "MFG-001",
            "contactEmail": "contact@manufacturer.com"
        })),
        put("Update Manufacturer", "/manufacturers/1").json(json!({"name": "Updated Manufacturer"})),
        delete("Delete Manufacturer", "/manufacturers/1"),
    ]
}

pub fn distributors() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Distributors", "/distributors"),
        get("Get Distributor by ID", "/distributors/1"),
        post("Create Distributor", "/distributors").json(json!({
            "name": "New Distributor",
            "code": "DIST-001",
            "contactEmail": "contact@distributor.com"
        })),
        put("Update Distributor", "/distributors/1").json(json!({"name": "Updated Distributor"})),
        delete("Delete Distributor", "/distributors/1"),
        get("Get Distributor Product Codes", "/distributors/1/product-codes"),
        post("Add Product Code Mapping", "/distributors/1/product-codes").json(json!({
            "productId": 1,
            "distributorProductCode": "DIST-PROD-001"
        })),
    ]
}

pub fn industries() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Industries", "/industries"),
        get("Get Industry by ID", "/industries/1"),
        post("Create Industry", "/industries").json(json!({
            "name": "Healthcare",
            "code": "IND-HC"
        })),
        put("Update Industry", "/industries/1").json(json!({"name": "Healthcare Updated"})),
        delete("Delete Industry", "/industries/1"),
        get("Get Contracts by Industry", "/industries/1/contracts"),
        get("Get Customers in Industry", "/industries/1/customers"),
        put("Activate Industry", "/industries/1/activate"),
        put("Deactivate Industry", "/industries/1/deactivate"),
        get("Get Industry Hierarchy", "/industries/hierarchy"),
    ]
}

pub fn opcos() -> Vec<RequestDescriptor> {
    vec![
        get("Get All OpCos", "/opcos"),
        get("Get OpCo by ID", "/opcos/1"),
        post("Create OpCo", "/opcos").json(json!({
            "name": "New OpCo",
            "code": "OPCO-001"
        })),
        put("Update OpCo", "/opcos/1").json(json!({"name": "Updated OpCo"})),
        delete("Delete OpCo", "/opcos/1"),
        get("Get Contracts by OpCo", "/opcos/1/contracts"),
        get("Get Customers by OpCo", "/opcos/1/customers"),
        get("Get Members by OpCo", "/opcos/1/members"),
        put("Activate OpCo", "/opcos/1/activate"),
        put("Deactivate OpCo", "/opcos/1/deactivate"),
        get("Get OpCo Hierarchy", "/opcos/hierarchy"),
    ]
}

pub fn customer_accounts() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Customer Accounts", "/customer-accounts?page=1&pageSize=10"),
        get("Get Customer by ID", "/customer-accounts/1"),
        post("Create Customer", "/customer-accounts").json(json!({
            "accountNumber": "CUST-001",
            "accountName": "ABC Restaurant",
            "opCoId": 1,
            "industryId": 1
        })),
        put("Update Customer", "/customer-accounts/1")
            .json(json!({"accountName": "ABC Restaurant Updated"})),
        delete("Delete Customer", "/customer-accounts/1"),
        get("Search Customers", "/customer-accounts/search?searchTerm=ABC"),
        get("Get Customer Contracts", "/customer-accounts/1/contracts"),
        get("Get Contract Assignments", "/customer-accounts/1/assignments"),
        post("Import Customers from Excel", "/customer-accounts/import"),
        get("Export Customers to Excel", "/customer-accounts/export"),
        get("Get Customers by OpCo", "/customer-accounts/by-opco/1"),
    ]
}

pub fn member_accounts() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Member Accounts", "/member-accounts?page=1&pageSize=10"),
        get("Get Member by ID", "/member-accounts/1"),
        post("Create Member", "/member-accounts").json(json!({
            "accountNumber": "MEM-001",
            "accountName": "Member Organization",
            "opCoId": 1
        })),
        put("Update Member", "/member-accounts/1")
            .json(json!({"accountName": "Member Organization Updated"})),
        delete("Delete Member", "/member-accounts/1"),
        get("Search Members", "/member-accounts/search?searchTerm=Member"),
        get("Get Member Contracts", "/member-accounts/1/contracts"),
        post("Import Members from Excel", "/member-accounts/import"),
        get("Export Members to Excel", "/member-accounts/export"),
    ]
}
