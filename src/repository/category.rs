use crate::{
    db::DbConnection,
    models::category::{Category, NewCategory},
};

// SQL puro contra la tabla categories. Nunca abre su propia transacción:
// recibe la conexión de la transacción que maneja el servicio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    // Sin ORDER BY: el orden queda en manos de la base de datos
    pub async fn find_all(&self, conn: &mut DbConnection) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&mut *conn)
            .await
    }

    pub async fn save(
        &self,
        conn: &mut DbConnection,
        category: NewCategory,
    ) -> Result<Category, sqlx::Error> {
        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(&category.name)
            .fetch_one(&mut *conn)
            .await?;

        Ok(category.with_id(id))
    }

    pub async fn delete_all(&self, conn: &mut DbConnection) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM categories")
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    // None = no existe; no es un error a este nivel
    pub async fn find_by_id(
        &self,
        conn: &mut DbConnection,
        category_id: i64,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&mut *conn)
            .await
    }

    // No comprueba que exista: eso lo hace el servicio con find_by_id antes
    pub async fn update_by_id(
        &self,
        conn: &mut DbConnection,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
            .bind(&category.name)
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(category)
    }

    pub async fn delete_by_id(
        &self,
        conn: &mut DbConnection,
        category: &Category,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
