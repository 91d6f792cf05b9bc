use chrono::Utc;
use rand::Rng;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;

use crate::models::company;

pub struct CompanyService;

/// Compteur à incrémenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    fn column(self) -> company::Column {
        match self {
            Vote::Like => company::Column::Likes,
            Vote::Dislike => company::Column::Dislikes,
        }
    }
}

impl CompanyService {
    /// Recherche par symbole (déjà normalisé), sans création
    pub async fn find_by_symbol(
        db: &DatabaseConnection,
        symbol: &str,
    ) -> Result<Option<company::Model>, DbErr> {
        company::Entity::find_by_id(symbol.to_owned()).one(db).await
    }

    /// Retourne la company existante ou l'insère avec des compteurs à 0.
    /// ON CONFLICT DO NOTHING : deux recherches simultanées ne se marchent pas dessus
    pub async fn find_or_create(
        db: &DatabaseConnection,
        symbol: &str,
    ) -> Result<company::Model, DbErr> {
        company::Entity::insert(new_company(symbol, 0, 0))
            .on_conflict(
                OnConflict::column(company::Column::Symbol)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_symbol(db, symbol)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Company {symbol} vanished after insert")))
    }

    pub async fn increment_likes(
        db: &DatabaseConnection,
        symbol: &str,
    ) -> Result<company::Model, DbErr> {
        Self::increment(db, symbol, Vote::Like).await
    }

    pub async fn increment_dislikes(
        db: &DatabaseConnection,
        symbol: &str,
    ) -> Result<company::Model, DbErr> {
        Self::increment(db, symbol, Vote::Dislike).await
    }

    /// Find-or-create + incrément en UNE seule requête (upsert atomique) :
    /// INSERT ... ON CONFLICT (symbol) DO UPDATE SET likes = companies.likes + 1
    async fn increment(
        db: &DatabaseConnection,
        symbol: &str,
        vote: Vote,
    ) -> Result<company::Model, DbErr> {
        let (likes, dislikes) = match vote {
            Vote::Like => (1, 0),
            Vote::Dislike => (0, 1),
        };
        let column = vote.column();

        company::Entity::insert(new_company(symbol, likes, dislikes))
            .on_conflict(
                OnConflict::column(company::Column::Symbol)
                    .value(column, Expr::col((company::Entity, column)).add(1))
                    .value(company::Column::UpdatedAt, Utc::now())
                    .to_owned(),
            )
            .exec_with_returning(db)
            .await
    }

    pub async fn count_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        company::Entity::find().count(db).await
    }

    /// Company au hasard : offset uniforme dans [0, count)
    pub async fn pick_random(db: &DatabaseConnection) -> Result<Option<company::Model>, DbErr> {
        let count = Self::count_all(db).await?;
        if count == 0 {
            return Ok(None);
        }

        // Le rng ne traverse pas d'await (ThreadRng n'est pas Send)
        let offset = rand::thread_rng().gen_range(0..count);

        company::Entity::find()
            .order_by_asc(company::Column::Symbol)
            .offset(offset)
            .one(db)
            .await
    }

    pub async fn top_by_likes(
        db: &DatabaseConnection,
        limit: u64,
    ) -> Result<Vec<company::Model>, DbErr> {
        Self::top_by(db, Vote::Like, limit).await
    }

    pub async fn top_by_dislikes(
        db: &DatabaseConnection,
        limit: u64,
    ) -> Result<Vec<company::Model>, DbErr> {
        Self::top_by(db, Vote::Dislike, limit).await
    }

    /// Classement : compteur > 0, tri décroissant, égalités triées par symbole
    async fn top_by(
        db: &DatabaseConnection,
        vote: Vote,
        limit: u64,
    ) -> Result<Vec<company::Model>, DbErr> {
        let column = vote.column();

        company::Entity::find()
            .filter(column.gt(0))
            .order_by_desc(column)
            .order_by_asc(company::Column::Symbol)
            .limit(limit)
            .all(db)
            .await
    }
}

fn new_company(symbol: &str, likes: i64, dislikes: i64) -> company::ActiveModel {
    let now = Utc::now();

    company::ActiveModel {
        symbol: Set(symbol.to_owned()),
        name: Set(None),
        likes: Set(likes),
        dislikes: Set(dislikes),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
