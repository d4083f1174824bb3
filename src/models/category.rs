use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Fila de la tabla categories
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// Categoría aún sin id: la base de datos lo asigna al insertar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn with_id(self, id: i64) -> Category {
        Category { id, name: self.name }
    }
}

// POST /api/categories
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

// PUT /api/categories/:id (el id de la URL pisa cualquier id del cuerpo)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

// Contrato público de la API (lo que ve el cliente)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
