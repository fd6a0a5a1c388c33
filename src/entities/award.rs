use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "award")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub award_id: i64,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_award::Entity")]
    ArtistAward,
}

impl Related<super::artist_award::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistAward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
