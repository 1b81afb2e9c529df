use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use super::resource::Resource;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence for one resource; each method is a single store call.
#[async_trait]
pub trait CrudRepository<R: Resource>: Send + Sync {
    async fn find_all(&self, page: Option<Pagination>) -> Result<Vec<R::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, ServiceError>;
    async fn find_many_by_id(&self, id: i32) -> Result<Vec<R::Model>, ServiceError>;
    /// `None` when the store reports no inserted row.
    async fn insert(&self, am: R::ActiveModel) -> Result<Option<R::Model>, ServiceError>;
    /// `None` when no row matched the primary key.
    async fn update(&self, am: R::ActiveModel) -> Result<Option<R::Model>, ServiceError>;
    /// Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation; the pool handle is shared.
pub struct SeaOrmCrudRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmCrudRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self { Self { db } }

    fn conn(&self) -> &DatabaseConnection { &self.db }
}

#[async_trait]
impl<R: Resource> CrudRepository<R> for SeaOrmCrudRepository {
    async fn find_all(&self, page: Option<Pagination>) -> Result<Vec<R::Model>, ServiceError> {
        let query = R::Entity::find().order_by_asc(R::id_column());
        let rows = match page {
            Some(p) => query.paginate(self.conn(), p.per_page()).fetch_page(p.index()).await?,
            None => query.all(self.conn()).await?,
        };
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, ServiceError> {
        let row = R::Entity::find().filter(R::id_column().eq(id)).one(self.conn()).await?;
        Ok(row)
    }

    async fn find_many_by_id(&self, id: i32) -> Result<Vec<R::Model>, ServiceError> {
        let rows = R::Entity::find()
            .filter(R::id_column().eq(id))
            .order_by_asc(R::id_column())
            .all(self.conn())
            .await?;
        Ok(rows)
    }

    async fn insert(&self, am: R::ActiveModel) -> Result<Option<R::Model>, ServiceError> {
        match am.insert(self.conn()).await {
            Ok(m) => Ok(Some(m)),
            Err(DbErr::RecordNotInserted) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn update(&self, am: R::ActiveModel) -> Result<Option<R::Model>, ServiceError> {
        match am.update(self.conn()).await {
            Ok(m) => Ok(Some(m)),
            // 行在读取后被并发删除
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = R::Entity::delete_many().filter(R::id_column().eq(id)).exec(self.conn()).await?;
        Ok(res.rows_affected)
    }
}
