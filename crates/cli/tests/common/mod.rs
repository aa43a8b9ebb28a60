//! Shared test utilities for inventory-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide canned API documents for wiremock servers.
//!
//! Invariants / Assumptions:
//! - `INVENTORY_API_TOKEN` is set to "test-token" unless overridden.
//! - The mock API root lives at `<server>/api/`.

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Public id of the project served by [`mount_project`].
#[allow(dead_code)]
pub const PROJECT_ID: &str = "RVB9AXBYA9JQYNZJ";

/// Returns a hermetic `inventory-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `INVENTORY_API_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn inventory_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("inventory-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("INVENTORY_API_TOKEN", "test-token");

    cmd.env_remove("INVENTORY_BASE_URL")
        .env_remove("INVENTORY_API_ROOT")
        .env_remove("INVENTORY_USERNAME")
        .env_remove("INVENTORY_PASSWORD")
        .env_remove("INVENTORY_SKIP_VERIFY")
        .env_remove("INVENTORY_TIMEOUT")
        .env_remove("INVENTORY_MAX_RETRIES")
        .env_remove("INVENTORY_FETCH_ROOT")
        .env_remove("INVENTORY_PROFILE")
        .env_remove("INVENTORY_CONFIG_PATH");

    cmd
}

/// Returns a hermetic `inventory-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn inventory_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = inventory_cmd();
    cmd.env("INVENTORY_BASE_URL", base_url);
    cmd
}

#[allow(dead_code)]
pub fn project_json() -> Value {
    json!({
        "public_id": PROJECT_ID,
        "inventory_type": "http://localhost:8000/api/inventory-types/TW6BJB4DBE7XKRXK/",
        "inventory_type_public_id": "TW6BJB4DBE7XKRXK",
        "name": "Main Warehouse",
        "image": "http://localhost:8000/media/projects/main.png",
        "memberships": [],
        "public": true,
        "active": true,
        "creator": "admin",
        "created": "2023-04-02T14:11:05.123456-04:00",
        "updater": "clerk",
        "updated": "2024-01-15T09:30:00.000000-05:00",
        "href": "http://localhost:8000/api/projects/RVB9AXBYA9JQYNZJ/"
    })
}

#[allow(dead_code)]
pub fn project_options_json() -> Value {
    json!({
        "name": "Project List",
        "actions": {
            "PUT": {
                "public_id": {"type": "string", "label": "Public Id", "read_only": true},
                "name": {"type": "string", "label": "Project Name", "required": true},
                "image": {"type": "image upload", "label": "Project Logo"},
                "inventory_type": {"type": "field", "label": "Inventory Type", "required": true},
                "public": {
                    "type": "choice",
                    "label": "Public",
                    "choices": [
                        {"value": true, "display_name": "Yes"},
                        {"value": false, "display_name": "No"}
                    ]
                },
                "active": {
                    "type": "choice",
                    "label": "Active",
                    "choices": [
                        {"value": true, "display_name": "Active"},
                        {"value": false, "display_name": "Inactive"}
                    ]
                }
            }
        }
    })
}

#[allow(dead_code)]
pub fn inventory_types_json() -> Value {
    json!([
        {
            "public_id": "TW6BJB4DBE7XKRXK",
            "name": "Stock",
            "description": "Goods held for sale",
            "href": "http://localhost:8000/api/inventory-types/TW6BJB4DBE7XKRXK/"
        },
        {
            "public_id": "FNJ3GMTTPQ6JZ7EE",
            "name": "Equipment",
            "description": "Tools and fixtures",
            "href": "http://localhost:8000/api/inventory-types/FNJ3GMTTPQ6JZ7EE/"
        }
    ])
}

/// Mount the field metadata and inventory type list every project view loads.
#[allow(dead_code)]
pub async fn mount_view_context(server: &MockServer) {
    Mock::given(method("OPTIONS"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_options_json()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/inventory-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_types_json()))
        .mount(server)
        .await;
}

/// Mount the project detail plus its view context.
#[allow(dead_code)]
pub async fn mount_project(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/projects/{PROJECT_ID}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json()))
        .mount(server)
        .await;

    mount_view_context(server).await;
}
