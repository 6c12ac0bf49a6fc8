use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, PHONE_RE};

/// Body of `POST /api/customers`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateDto {
    #[validate(email, length(min = 2, max = 100))]
    pub email: String,
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(
        length(min = 6, max = 20),
        regex(path = *PHONE_RE, message = "must be '+' followed by 5 to 13 digits")
    )]
    pub phone: Option<String>,
}

/// Body of `PUT /api/customers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateDto {
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub full_name: Option<String>,
    #[validate(
        length(min = 6, max = 14),
        regex(path = *PHONE_RE, message = "must be '+' followed by 5 to 13 digits")
    )]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}
