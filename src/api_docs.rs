use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::products::list_products,
        api::products::create_product,
        api::products::get_product,
        // Add other endpoints here as we document them
    ),
    tags(
        (name = "catalog-admin", description = "Catalog admin API")
    )
)]
pub struct ApiDoc;
