use serde_json::json;

use crate::model::RequestDescriptor;
use crate::post_action::PostAction;
use crate::request::{delete, get, post, put};

pub fn authentication() -> Vec<RequestDescriptor> {
    vec![
        post("Login", "/auth/login")
            .json(json!({"userId": "admin", "password": "Admin@123"}))
            .public()
            .describe(
                "Login with credentials. Returns JWT token that will be automatically saved for subsequent requests.",
            )
            .on_response(PostAction::capture_token()),
        post("Logout", "/auth/logout").describe("Logout current user"),
        post("Refresh Token", "/auth/refresh-token")
            .json(json!({"refreshToken": "{{refreshToken}}"}))
            .public()
            .describe("Refresh expired JWT token"),
        post("Forgot Password", "/auth/forgot-password")
            .json(json!({"userId": "admin", "email": "admin@example.com"}))
            .public()
            .describe("Request password reset email"),
        post("Reset Password", "/auth/reset-password")
            .json(json!({"token": "reset-token-here", "newPassword": "NewPassword@123"}))
            .public()
            .describe("Reset password using token from email"),
        post("Change Password", "/auth/change-password")
            .json(json!({"currentPassword": "Admin@123", "newPassword": "NewPassword@123"}))
            .describe("Change password for logged-in user"),
        get("Validate Token", "/auth/validate-token?token=reset-token-here")
            .public()
            .describe("Validate password reset token"),
    ]
}

pub fn users() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Users", "/users?pageNumber=1&pageSize=10"),
        get("Get User by ID", "/users/1"),
        post("Create User", "/users").json(json!({
            "userId": "newuser",
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "roleIds": [2],
            "isActive": true
        })),
        put("Update User", "/users/1").json(json!({
            "firstName": "John Updated",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "isActive": true
        })),
        delete("Delete User", "/users/1"),
        get("Get User Roles", "/users/1/roles"),
        post("Assign Role to User", "/users/1/roles").json(json!({"roleId": 2})),
        delete("Remove Role from User", "/users/1/roles/2"),
        get("Get User Manufacturers", "/users/1/manufacturers"),
        post("Assign Manufacturer to User", "/users/1/manufacturers").json(json!([1, 2, 3])),
        delete("Remove Manufacturer from User", "/users/1/manufacturers/1"),
        put("Activate User", "/users/1/activate"),
        put("Deactivate User", "/users/1/deactivate"),
    ]
}

pub fn roles() -> Vec<RequestDescriptor> {
    vec![
        get("Get All Roles", "/roles"),
        get("Get Role by ID", "/roles/1"),
        post("Create Role", "/roles").json(json!({
            "name": "New Role",
            "description": "Role description"
        })),
        put("Update Role", "/roles/1").json(json!({
            "name": "Updated Role",
            "description": "Updated description"
        })),
        delete("Delete Role", "/roles/1"),
    ]
}
