//! Product image database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ProductImage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: Option<String>,
    pub alt_text: String,
    #[sea_orm(unique)]
    pub product_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "SetNull"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductImage {
    fn from(model: Model) -> Self {
        ProductImage {
            id: model.id,
            image_url: model.image_url,
            alt_text: model.alt_text,
            product_id: model.product_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
