//! The NPP Contract Management API, one table entry per module.
//!
//! Each entry pairs the module's display name (sequence number and endpoint
//! count included) with the function that lists its requests. The count in
//! the name is checked against the list when the collection is built.

mod contracts;
mod identity;
mod lookup;
mod parties;
mod products;
mod proposals;
mod velocity;

use crate::model::RequestDescriptor;
use crate::module::Module;

#[derive(Debug, Clone, Copy)]
pub struct ModuleSpec {
    pub name: &'static str,
    pub requests: fn() -> Vec<RequestDescriptor>,
}

impl ModuleSpec {
    pub fn assemble(&self) -> Module {
        Module::new(self.name, (self.requests)())
    }
}

pub static MODULES: &[ModuleSpec] = &[
    ModuleSpec {
        name: "01. Authentication (7 endpoints)",
        requests: identity::authentication,
    },
    ModuleSpec {
        name: "02. Users (13 endpoints)",
        requests: identity::users,
    },
    ModuleSpec {
        name: "03. Roles (5 endpoints)",
        requests: identity::roles,
    },
    ModuleSpec {
        name: "04. Contracts (24 endpoints)",
        requests: contracts::contracts,
    },
    ModuleSpec {
        name: "05. Proposals (11 endpoints)",
        requests: proposals::proposals,
    },
    ModuleSpec {
        name: "06. Products (15 endpoints)",
        requests: products::products,
    },
    ModuleSpec {
        name: "07. Manufacturers (5 endpoints)",
        requests: parties::manufacturers,
    },
    ModuleSpec {
        name: "08. Distributors (7 endpoints)",
        requests: parties::distributors,
    },
    ModuleSpec {
        name: "09. Industries (10 endpoints)",
        requests: parties::industries,
    },
    ModuleSpec {
        name: "10. OpCos (11 endpoints)",
        requests: parties::opcos,
    },
    ModuleSpec {
        name: "11. Customer Accounts (11 endpoints)",
        requests: parties::customer_accounts,
    },
    ModuleSpec {
        name: "12. Member Accounts (9 endpoints)",
        requests: parties::member_accounts,
    },
    ModuleSpec {
        name: "13. Velocity - Data Ingestion (11 endpoints)",
        requests: velocity::velocity,
    },
    ModuleSpec {
        name: "14. Reports (4 endpoints)",
        requests: velocity::reports,
    },
    ModuleSpec {
        name: "15. Bulk Renewal (2 endpoints)",
        requests: contracts::bulk_renewal,
    },
    ModuleSpec {
        name: "16. Lookup / Dropdown Data (10 endpoints)",
        requests: lookup::lookup,
    },
    ModuleSpec {
        name: "17. Contract Prices (5 endpoints)",
        requests: contracts::contract_prices,
    },
    ModuleSpec {
        name: "18. Contract Version - OpCos (5 endpoints)",
        requests: contracts::version_opcos,
    },
    ModuleSpec {
        name: "19. Contract Version - Distributors (5 endpoints)",
        requests: contracts::version_distributors,
    },
    ModuleSpec {
        name: "20. Contract Version - Manufacturers (5 endpoints)",
        requests: contracts::version_manufacturers,
    },
    ModuleSpec {
        name: "21. Contract Version - Industries (5 endpoints)",
        requests: contracts::version_industries,
    },
    ModuleSpec {
        name: "22. Contract Version - Products (5 endpoints)",
        requests: contracts::version_products,
    },
    ModuleSpec {
        name: "23. Proposal Products (4 endpoints)",
        requests: proposals::proposal_products,
    },
];
