use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, past_date, PHONE_RE};

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateDto {
    #[validate(email, length(min = 2, max = 100))]
    pub email: String,
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "past_date"))]
    pub birth_date: NaiveDate,
    #[validate(length(min = 2, max = 100))]
    pub address: Option<String>,
    #[validate(
        length(min = 6, max = 20),
        regex(path = *PHONE_RE, message = "must be '+' followed by 5 to 13 digits")
    )]
    pub phone_number: Option<String>,
}

/// Body of `PUT /api/users/{id}`; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    #[validate(email, length(min = 2, max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub last_name: Option<String>,
    #[validate(custom(function = "past_date"))]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 2, max = 100))]
    pub address: Option<String>,
    #[validate(
        length(min = 6, max = 20),
        regex(path = *PHONE_RE, message = "must be '+' followed by 5 to 13 digits")
    )]
    pub phone_number: Option<String>,
}

/// Wire shape of a user in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}
