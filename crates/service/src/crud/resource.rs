use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ServiceError;

/// Binds an entity to its input type, labels and validation rules.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    /// Request body for both create and update; every field is optional on the wire.
    type Input: DeserializeOwned + Send + 'static;

    /// Human label used in messages ("Car not found").
    const LABEL: &'static str;
    /// Route segment and response key ("car").
    const KEY: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Check required fields and invariants, producing a row to insert.
    fn build(input: Self::Input) -> Result<Self::ActiveModel, ServiceError>;

    /// Apply provided fields onto `am`. Returns how many fields were applied.
    fn patch(current: &Self::Model, am: &mut Self::ActiveModel, input: Self::Input) -> Result<usize, ServiceError>;

    fn created_message() -> String { format!("{} created successfully", Self::LABEL) }
    fn updated_message() -> String { format!("{} updated successfully", Self::LABEL) }
    fn deleted_message() -> String { format!("{} deleted successfully", Self::LABEL) }
    fn not_found() -> ServiceError { ServiceError::not_found(Self::LABEL) }
}
