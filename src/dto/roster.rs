use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::validation::validate_username;

/// Request to add a player to an existing game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddPlayerRequest {
    /// Username, unique within the game.
    #[validate(custom(function = validate_username))]
    pub username: String,
    /// Optional avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Request to update a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePlayerRequest {
    /// New username; omitted to keep the current one. A rename propagates
    /// into the score ledger and the current-player pointer.
    #[serde(default)]
    #[validate(custom(function = validate_username))]
    pub username: Option<String>,
    /// If omitted, keeps the avatar. If null, removes it. If a string,
    /// replaces it.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,
}

/// Request to create an empty category.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[validate(length(min = 1, message = "category name must not be empty"))]
    pub name: String,
}

/// Request to rename a category.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RenameCategoryRequest {
    /// New category name.
    #[validate(length(min = 1, message = "category name must not be empty"))]
    pub new_name: String,
}
