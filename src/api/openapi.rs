//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, auth_handler, product_handler, product_image_handler, user_handler,
};
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{ProductImageResponse, ProductResponse, ProductStatus, UserResponse};
use crate::schema::{AuthConfig, FieldDefinition, FieldKind, InitFirstItem, ListDefinition};
use crate::services::SignInResponse;
use crate::types::{PaginatedProductImages, PaginatedProducts, PaginatedUsers, PaginationMeta};

/// OpenAPI documentation for the storefront backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Content backend for a storefront: users, products and product images"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Session endpoints
        auth_handler::sign_in,
        auth_handler::sign_out,
        auth_handler::current_session,
        auth_handler::init_status,
        auth_handler::init_first_item,
        // Lists
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        product_image_handler::list_images,
        product_image_handler::get_image,
        product_image_handler::create_image,
        product_image_handler::update_image,
        product_image_handler::delete_image,
        // Admin
        admin_handler::meta,
        admin_handler::overview,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            ProductStatus,
            ProductResponse,
            ProductImageResponse,
            PaginationMeta,
            PaginatedUsers,
            PaginatedProducts,
            PaginatedProductImages,
            // Session types
            SignInResponse,
            auth_handler::SignInRequest,
            auth_handler::InitFirstItemRequest,
            auth_handler::CurrentSessionResponse,
            auth_handler::InitStatusResponse,
            // List requests
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            product_handler::CreatePhotoRequest,
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
            product_image_handler::CreateProductImageRequest,
            product_image_handler::UpdateProductImageRequest,
            // Admin types
            admin_handler::AdminMeta,
            admin_handler::AdminOverview,
            admin_handler::ListCount,
            ListDefinition,
            FieldDefinition,
            FieldKind,
            AuthConfig,
            InitFirstItem,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Session", description = "Sign in, sign out and first user setup"),
        (name = "Users", description = "User list"),
        (name = "Products", description = "Product list"),
        (name = "Product images", description = "Product image list"),
        (name = "Admin", description = "Admin metadata, requires a session")
    )
)]
pub struct ApiDoc;

/// Session token can travel as a cookie or a bearer header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by POST /api/session"))
                        .build(),
                ),
            );
        }
    }
}
