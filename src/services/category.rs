use crate::{
    db::DbPool,
    error::AppError,
    models::category::{CategoryResponse, CreateCategoryRequest, NewCategory, UpdateCategoryRequest},
    repository::category::CategoryRepository,
    utils::validation::Validate,
};

// Cada caso de uso abre UNA transacción y hace commit al final.
// Si algo devuelve error antes (el `?`), o el futuro se cancela, la
// transacción se suelta sin commit y sqlx hace rollback.
#[derive(Debug, Clone)]
pub struct CategoryService {
    repository: CategoryRepository,
    pool: DbPool,
}

impl CategoryService {
    pub fn new(repository: CategoryRepository, pool: DbPool) -> Self {
        Self { repository, pool }
    }

    pub async fn create(&self, request: CreateCategoryRequest) -> Result<CategoryResponse, AppError> {
        request.validate()?;
        let name = request.name.unwrap_or_default();

        let mut tx = self.pool.begin().await?;
        let category = self.repository.save(&mut *tx, NewCategory { name }).await?;
        tx.commit().await?;

        tracing::info!("Categoría {} creada", category.id);
        Ok(category.into())
    }

    pub async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let mut tx = self.pool.begin().await?;
        let categories = self.repository.find_all(&mut *tx).await?;
        tx.commit().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn delete_all(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        self.repository.delete_all(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!("Todas las categorías eliminadas");
        Ok(())
    }

    pub async fn update_by_id(&self, request: UpdateCategoryRequest) -> Result<CategoryResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;
        let mut category = self
            .repository
            .find_by_id(&mut *tx, request.id)
            .await?
            .ok_or_else(AppError::category_not_found)?;

        category.name = request.name.unwrap_or_default();
        let category = self.repository.update_by_id(&mut *tx, category).await?;
        tx.commit().await?;

        tracing::info!("Categoría {} actualizada", category.id);
        Ok(category.into())
    }

    pub async fn find_by_id(&self, category_id: i64) -> Result<CategoryResponse, AppError> {
        let mut tx = self.pool.begin().await?;
        let category = self
            .repository
            .find_by_id(&mut *tx, category_id)
            .await?
            .ok_or_else(AppError::category_not_found)?;
        tx.commit().await?;

        Ok(category.into())
    }

    pub async fn delete_by_id(&self, category_id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let category = self
            .repository
            .find_by_id(&mut *tx, category_id)
            .await?
            .ok_or_else(AppError::category_not_found)?;

        self.repository.delete_by_id(&mut *tx, &category).await?;
        tx.commit().await?;

        tracing::info!("Categoría {} eliminada", category.id);
        Ok(())
    }
}
