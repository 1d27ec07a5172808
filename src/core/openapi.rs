use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::registration::{dtos as registration_dtos, handlers as registration_handlers};
use crate::shared::validation::FieldErrors;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Registration (public)
        registration_handlers::register_user,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            FieldErrors,
            // Registration
            registration_dtos::RegisterUserDto,
            registration_dtos::RegistrationAckDto,
        )
    ),
    tags(
        (name = "registration", description = "User registration (public)"),
    ),
    info(
        title = "Accueil API",
        version = "0.1.0",
        description = "API documentation for Accueil",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
