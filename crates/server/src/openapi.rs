use chrono::NaiveDate;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserCreateDoc {
    #[schema(example = "edgar@poe.com")]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Must be in the past; the user must be old enough
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    #[schema(example = "+380969609696")]
    pub phone_number: Option<String>,
}

/// Every field optional; absent fields keep their stored value.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserUpdateDoc {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerCreateDoc {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerUpdateDoc {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::users::search,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserCreateDoc,
            UserUpdateDoc,
            UserDoc,
            CustomerCreateDoc,
            CustomerUpdateDoc,
            CustomerDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
