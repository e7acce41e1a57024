use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Decimal amount serialized as a string, e.g. "55000.00"
    pub salary: String,
    pub created_at: String,
}

/// Used for both create and update; updates replace every field.
#[derive(ToSchema)]
pub struct EmployeeInputDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Number or decimal string
    pub salary: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list_employees,
        crate::routes::employees::get_employee,
        crate::routes::employees::add_employee,
        crate::routes::employees::update_employee,
        crate::routes::employees::delete_employee,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_employee_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/employees"));
        assert!(paths.iter().any(|p| p.as_str() == "/employees/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
