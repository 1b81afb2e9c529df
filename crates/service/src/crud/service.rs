use std::sync::Arc;

use sea_orm::{DatabaseConnection, IntoActiveModel, ModelTrait};
use tracing::{info, instrument};

use super::repository::{CrudRepository, SeaOrmCrudRepository};
use super::resource::Resource;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// CRUD business rules for one resource, independent of the web framework.
pub struct CrudService<R: Resource> {
    repo: Arc<dyn CrudRepository<R>>,
}

impl<R: Resource> CrudService<R> {
    pub fn new(repo: Arc<dyn CrudRepository<R>>) -> Self { Self { repo } }

    pub fn with_db(db: Arc<DatabaseConnection>) -> Self { Self::new(Arc::new(SeaOrmCrudRepository::new(db))) }

    #[instrument(skip(self), fields(entity = R::LABEL))]
    pub async fn get_all(&self, page: Option<Pagination>) -> Result<Vec<R::Model>, ServiceError> {
        self.repo.find_all(page).await
    }

    #[instrument(skip(self), fields(entity = R::LABEL))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self), fields(entity = R::LABEL))]
    pub async fn get_many_by_id(&self, id: i32) -> Result<Vec<R::Model>, ServiceError> {
        self.repo.find_many_by_id(id).await
    }

    /// Validate then insert. `Ok(None)` means the store returned no row.
    #[instrument(skip(self, input), fields(entity = R::LABEL))]
    pub async fn create(&self, input: R::Input) -> Result<Option<R::Model>, ServiceError> {
        let am = R::build(input)?;
        let created = self.repo.insert(am).await?;
        if let Some(m) = &created {
            info!(entity = R::LABEL, id = ?m.get(R::id_column()), "created");
        }
        Ok(created)
    }

    /// Partial update of an existing row; missing rows are `NotFound`.
    #[instrument(skip(self, input), fields(entity = R::LABEL))]
    pub async fn update(&self, id: i32, input: R::Input) -> Result<String, ServiceError> {
        let current = self.repo.find_by_id(id).await?.ok_or_else(R::not_found)?;
        let mut am = current.clone().into_active_model();
        if R::patch(&current, &mut am, input)? == 0 {
            return Err(ServiceError::Validation("no updatable fields provided".into()));
        }
        self.repo.update(am).await?.ok_or_else(R::not_found)?;
        info!(entity = R::LABEL, id, "updated");
        Ok(R::updated_message())
    }

    #[instrument(skip(self), fields(entity = R::LABEL))]
    pub async fn delete(&self, id: i32) -> Result<String, ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(R::not_found());
        }
        info!(entity = R::LABEL, id, "deleted");
        Ok(R::deleted_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::car::CarInput;
    use crate::resources::CarResource;
    use chrono::NaiveDate;
    use models::car;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(id: i32) -> car::Model {
        car::Model {
            car_id: id,
            car_model: "Toyota Corolla".into(),
            year: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            color: "Red".into(),
            rental_rate: Decimal::new(5000, 2),
            availability: true,
            location_id: 1,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn svc(db: MockDatabase) -> CrudService<CarResource> { CrudService::with_db(Arc::new(db.into_connection())) }

    fn full_input() -> CarInput {
        CarInput {
            car_model: Some("Toyota Corolla".into()),
            year: NaiveDate::from_ymd_opt(2020, 1, 1),
            color: Some("Red".into()),
            rental_rate: Some(Decimal::new(5000, 2)),
            availability: None,
            location_id: Some(1),
        }
    }

    #[tokio::test]
    async fn get_by_id_returns_none_when_absent() {
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<car::Model>::new()]));
        assert!(s.get_by_id(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row(5)]]));
        let created = s.create(full_input()).await.unwrap().unwrap();
        assert_eq!(created.car_id, 5);
    }

    #[tokio::test]
    async fn create_validates_before_touching_store() {
        // 空 mock：若触达存储会报错而不是校验失败
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres));
        let err = s.create(CarInput::default()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<car::Model>::new()]));
        let input = CarInput { color: Some("Blue".into()), ..Default::default() };
        let err = s.update(999_999, input).await.unwrap_err();
        assert_eq!(err.detail(), "Car not found");
    }

    #[tokio::test]
    async fn update_applies_partial_fields() {
        let mut updated = row(5);
        updated.color = "Blue".into();
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row(5)], vec![updated]]));
        let input = CarInput { color: Some("Blue".into()), ..Default::default() };
        assert_eq!(s.update(5, input).await.unwrap(), "Car updated successfully");
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let s = svc(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row(5)]]));
        let err = s.update(5, CarInput::default()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let s = svc(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
                MockExecResult { last_insert_id: 0, rows_affected: 1 },
                MockExecResult { last_insert_id: 0, rows_affected: 0 },
            ]),
        );
        assert_eq!(s.delete(5).await.unwrap(), "Car deleted successfully");
        assert!(matches!(s.delete(5).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn services_share_one_mock_connection() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![row(1)]])
                .append_query_results([vec![row(2)]])
                .into_connection(),
        );
        let first = CrudService::<CarResource>::with_db(db.clone());
        let second = CrudService::<CarResource>::with_db(db.clone());
        assert_eq!(Arc::strong_count(&db), 3);
        assert_eq!(first.get_by_id(1).await.unwrap().unwrap().car_id, 1);
        assert_eq!(second.get_by_id(2).await.unwrap().unwrap().car_id, 2);
    }

    #[tokio::test]
    async fn live_create_get_delete() {
        let Some(db) = crate::test_support::get_db().await else { return };
        let db = Arc::new(db);
        let locations = CrudService::<crate::resources::LocationResource>::with_db(db.clone());
        let loc = locations
            .create(crate::resources::location::LocationInput {
                location_name: Some("Downtown".into()),
                address: Some("1 Main St".into()),
                contact_number: Some("555-0101".into()),
            })
            .await
            .unwrap()
            .unwrap();

        let cars = CrudService::<CarResource>::with_db(db);
        let mut input = full_input();
        input.location_id = Some(loc.location_id);
        let created = cars.create(input).await.unwrap().unwrap();
        let found = cars.get_by_id(created.car_id).await.unwrap().unwrap();
        assert_eq!(found.car_model, "Toyota Corolla");
        assert_eq!(cars.get_many_by_id(created.car_id).await.unwrap().len(), 1);

        cars.update(created.car_id, CarInput { color: Some("Blue".into()), ..Default::default() }).await.unwrap();
        let found = cars.get_by_id(created.car_id).await.unwrap().unwrap();
        assert_eq!(found.color, "Blue");
        assert_eq!(found.car_model, "Toyota Corolla");

        cars.delete(created.car_id).await.unwrap();
        assert!(cars.get_by_id(created.car_id).await.unwrap().is_none());
        locations.delete(loc.location_id).await.unwrap();
    }
}
