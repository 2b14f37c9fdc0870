use serde_json::json;

use crate::model::{FormField, RequestDescriptor};
use crate::request::{get, post};

const REPORT_WINDOW: &str = "startDate=2024-01-01&endDate=2024-12-31";

pub fn velocity() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Velocity Jobs", "/velocity/jobs?page=1&pageSize=10"),
        get("Get Job by ID", "/velocity/jobs/1"),
        post("Create Velocity Job", "/velocity/jobs").json(json!({
            "distributorId": 1,
            "jobName": "Monthly Upload - Jan 2024"
        })),
        post("Upload Velocity File (CSV/Excel)", "/velocity/jobs/1/upload")
            .form(vec![
                FormField::file("file"),
                FormField::text("distributorId", "1"),
            ])
            .describe("Upload CSV or Excel file for velocity data processing. Max file size: 10MB"),
        post("Process Velocity Data", "/velocity/jobs/1/process"),
        get("Get Job Processing Status", "/velocity/jobs/1/status"),
        get("Get Job Errors", "/velocity/jobs/1/errors"),
        get("Get All Shipments", "/velocity/shipments?page=1&pageSize=10"),
        get("Search Shipments", "/velocity/shipments/search?searchTerm=test"),
        get(
            "Generate Usage Report",
            &format!("/velocity/usage-report?{REPORT_WINDOW}"),
        ),
        get(
            "Export Usage Report to Excel",
            &format!("/velocity/usage-report/export?{REPORT_WINDOW}"),
        ),
    ]
}

pub fn reports() -> Vec<RequestDescriptor> {
    vec![
        get(
            "Contract Pricing Report",
            &format!("/reports/contract-pricing?{REPORT_WINDOW}"),
        ),
        get("Contracts Over Term Report", "/reports/contract-over-term"),
        get(
            "Velocity Usage Report",
            &format!("/reports/velocity-usage?{REPORT_WINDOW}"),
        ),
        get(
            "Proposal Summary Report",
            &format!("/reports/proposal-summary?{REPORT_WINDOW}"),
        ),
    ]
}
