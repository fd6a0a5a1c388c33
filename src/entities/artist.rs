use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub artist_id: i64,
    pub name: String,
    pub surname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::singer::Entity")]
    Singer,
}

impl Related<super::singer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Singer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
