use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "artist_award")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub award_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub winner_artist: String,
    pub artist_title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::award::Entity",
        from = "Column::AwardId",
        to = "super::award::Column::AwardId",
        on_delete = "Cascade"
    )]
    Award,
}

impl Related<super::award::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Award.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
