use serde_json::json;

use crate::model::RequestDescriptor;
use crate::request::{delete, get, post, put};

pub fn products() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Products", "/products?page=1&pageSize=10"),
        get("Get Product by ID", "/products/1"),
        post("Create Product", "/products").json(json!({
            "productCode": "PROD-001",
            "productName": "Test Product",
            "manufacturerId": 1,
            "categoryId": 1,
            "uomId": 1,
            "packSize": "12x500ml"
        })),
        put("Update Product", "/products/1").json(json!({
            "productName": "Updated Product",
            "packSize": "24x500ml"
        })),
        delete("Delete Product", "/products/1"),
        get("Search Products", "/products/search?searchTerm=test"),
        get("Get Products by Manufacturer", "/products/by-manufacturer/1"),
        get("Get Contracts Using Product", "/products/1/contracts"),
        get("Get Product Price History", "/products/1/prices"),
        post("Import Products from Excel", "/products/import"),
        get("Export Products to Excel", "/products/export"),
        put("Activate Product", "/products/1/activate"),
        put("Deactivate Product", "/products/1/deactivate"),
        get("Find Duplicate Products", "/products/duplicates"),
        post("Merge Duplicate Products", "/products/merge").json(json!({
            "sourceProductId": 1,
            "targetProductId": 2
        })),
    ]
}
