use serde_json::json;

use crate::model::RequestDescriptor;
use crate::request::{delete, get, post, put};

pub fn contracts() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Contracts", "/contracts?page=1&pageSize=10"),
        get("Get Contract by ID", "/contracts/1"),
        post("Create Contract", "/contracts").json(json!({
            "contractNumber": "CNT-2024-001",
            "manufacturerId": 1,
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "contractStatusId": 1,
            "description": "New contract"
        })),
        put("Update Contract", "/contracts/1").json(json!({
            "contractNumber": "CNT-2024-001",
            "description": "Updated contract"
        })),
        delete("Delete Contract", "/contracts/1"),
        get("Get Contract Versions", "/contracts/1/versions"),
        get("Get Specific Version", "/contracts/1/versions/1"),
        post("Create New Version", "/contracts/1/versions").json(json!({
            "versionNumber": 2,
            "effectiveDate": "2024-06-01"
        })),
        put("Update Version", "/contracts/1/versions/1").json(json!({
            "effectiveDate": "2024-06-15"
        })),
        delete("Delete Version", "/contracts/1/versions/1"),
        get("Get Contract Products", "/contracts/1/products"),
        post("Add Product to Contract", "/contracts/1/products").json(json!({
            "productId": 1,
            "quantity": 100
        })),
        delete("Remove Product from Contract", "/contracts/1/products/1"),
        get("Get Contract Prices", "/contracts/1/prices"),
        post("Add Price", "/contracts/1/prices").json(json!({
            "productId": 1,
            "priceTypeId": 1,
            "price": 99.99
        })),
        put("Update Price", "/contracts/1/prices/1").json(json!({"price": 89.99})),
        delete("Delete Price", "/contracts/1/prices/1"),
        get("Get Contract Assignments", "/contracts/1/assignments"),
        post("Assign Contract", "/contracts/1/assign").json(json!({
            "customerAccountId": 1,
            "effectiveDate": "2024-01-01"
        })),
        delete("Remove Assignment", "/contracts/1/assignments/1"),
        put("Activate Contract", "/contracts/1/activate"),
        put("Suspend Contract", "/contracts/1/suspend"),
        get("Search Contracts", "/contracts/search?searchTerm=test"),
        get("Export Contracts", "/contracts/export"),
    ]
}

pub fn bulk_renewal() -> Vec<RequestDescriptor> {
    let renewal = json!({
        "contractIds": [1, 2, 3],
        "newStartDate": "2025-01-01",
        "newEndDate": "2025-12-31"
    });
    vec![
        post("Preview Bulk Renewal", "/bulk-renewal/preview").json(renewal.clone()),
        post("Execute Bulk Renewal", "/bulk-renewal/execute").json(renewal),
    ]
}

pub fn contract_prices() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Contract Prices", "/contract-prices?productId=1&versionNumber=1"),
        get("Get Contract Price by ID", "/contract-prices/1"),
        post("Create Contract Price", "/contract-prices").json(json!({
            "contractId": 1,
            "productId": 1,
            "priceTypeId": 1,
            "price": 99.99,
            "versionNumber": 1
        })),
        put("Update Contract Price", "/contract-prices/1").json(json!({"price": 89.99})),
        delete("Delete Contract Price", "/contract-prices/1"),
    ]
}

/// The five CRUD requests shared by every contract-version assignment
/// resource under `/contract-version/{segment}`.
fn version_assignment(
    plural: &str,
    singular: &str,
    segment: &str,
    id_field: &str,
) -> Vec<RequestDescriptor> {
    let base = format!("/contract-version/{segment}");
    let item = format!("{base}/1");
    vec![
        get(
            &format!("Get Contract Version {plural}"),
            &format!("{base}?contractId=1&versionNumber=1"),
        ),
        get(&format!("Get Contract Version {singular} by ID"), &item),
        post(&format!("Assign {singular} to Contract Version"), &base).json(json!({
            "contractId": 1,
            id_field: 1,
            "versionNumber": 1,
            "assignedBy": "admin",
            "assignedDate": "2024-01-01"
        })),
        put(&format!("Update Contract Version {singular}"), &item).json(json!({
            "assignedBy": "admin",
            "assignedDate": "2024-01-01"
        })),
        delete(&format!("Remove {singular} from Contract Version"), &item),
    ]
}

pub fn version_opcos() -> Vec<RequestDescriptor> {
    version_assignment("OpCos", "OpCo", "opcos", "opCoId")
}

pub fn version_distributors() -> Vec<RequestDescriptor> {
    version_assignment("Distributors", "Distributor", "distributors", "distributorId")
}

pub fn version_manufacturers() -> Vec<RequestDescriptor> {
    version_assignment("Manufacturers", "Manufacturer", "manufacturers", "manufacturerId")
}

pub fn version_industries() -> Vec<RequestDescriptor> {
    version_assignment("Industries", "Industry", "industries", "industryId")
}

pub fn version_products() -> Vec<RequestDescriptor> {
    vec![
        get(
            "Get Contract Version Products",
            "/contract-version/products?contractId=1&versionNumber=1",
        ),
        get("Get Contract Version Product by ID", "/contract-version/products/1"),
        post("Add Product to Contract Version", "/contract-version/products").json(json!({
            "contractId": 1,
            "productId": 1,
            "versionNumber": 1,
            "quantity": 100
        })),
        put("Update Contract Version Product", "/contract-version/products/1")
            .json(json!({"quantity": 150})),
        delete("Remove Product from Contract Version", "/contract-version/products/1"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Body;

    #[test]
    fn test_version_assignment_body_keeps_field_order() {
        let requests = version_distributors();
        let Some(Body::Json(body)) = &requests[2].body else {
            panic!("expected json body");
        };
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["contractId", "distributorId", "versionNumber", "assignedBy", "assignedDate"]
        );
        assert_eq!(requests[2].name, "Assign Distributor to Contract Version");
        assert_eq!(requests[0].url.path, vec!["contract-version", "distributors?contractId=1&versionNumber=1"]);
    }
}
