use anyhow::anyhow;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    ranking,
    tmdb::{self, MovieDetail},
};

/// A movie ready to be persisted. Rating, ranking and review start empty;
/// the user fills them in through the edit flow.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub image_url: String,
}

impl NewMovie {
    pub fn from_detail(detail: &MovieDetail, image_base: &str) -> AppResult<Self> {
        let year = tmdb::release_year(&detail.release_date).ok_or_else(|| {
            anyhow!("release date {:?} has no year component", detail.release_date)
        })?;

        Ok(Self {
            title: detail.title.clone(),
            year,
            description: detail.overview.clone(),
            image_url: tmdb::compose_image_url(
                image_base,
                detail.poster_path.as_deref().unwrap_or_default(),
            ),
        })
    }
}

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Duplicate titles are rejected by the unique index; the DbErr
    /// propagates unwrapped.
    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            image_url: Set(new.image_url),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::MovieNotFound(id))
    }

    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    /// The side-effecting list read: recomputes every ranking and writes the
    /// new values back before returning the movies in ascending rating order.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let mut movies = self.list_all().await?;
        ranking::rank(&mut movies);

        for movie in &movies {
            let patch = movie::ActiveModel {
                id: Set(movie.id),
                ranking: Set(movie.ranking),
                ..Default::default()
            };
            patch.update(&self.db).await?;
        }

        Ok(movies)
    }

    /// Edit flow: only rating and review ever change after creation.
    pub async fn update_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let existing = self.get(id).await?;
        let mut patch: movie::ActiveModel = existing.into();
        patch.rating = Set(Some(rating));
        patch.review = Set(Some(review));
        Ok(patch.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::MovieNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use migration::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    async fn memory_store() -> MovieStore {
        // Single connection: each sqlite::memory: connection is its own db.
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        MovieStore::new(db)
    }

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 1999,
            description: "synopsis".to_string(),
            image_url: format!("{IMAGE_BASE}//p.jpg"),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = memory_store().await;
        let inserted = store.insert(new_movie("The Matrix")).await.unwrap();

        let fetched = store.get(inserted.id).await.unwrap();
        assert_eq!(fetched.title, "The Matrix");
        assert_eq!(fetched.year, 1999);
        assert_eq!(fetched.description, "synopsis");
        assert_eq!(fetched.image_url, format!("{IMAGE_BASE}//p.jpg"));
        assert_eq!(fetched.rating, None);
        assert_eq!(fetched.review, None);
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected_without_a_second_row() {
        let store = memory_store().await;
        store.insert(new_movie("The Matrix")).await.unwrap();

        assert!(store.insert(new_movie("The Matrix")).await.is_err());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_review_leaves_everything_else_alone() {
        let store = memory_store().await;
        let a = store.insert(new_movie("A")).await.unwrap();
        let b = store.insert(new_movie("B")).await.unwrap();

        let updated = store.update_review(a.id, 8.5, "solid".to_string()).await.unwrap();
        assert_eq!(updated.rating, Some(8.5));
        assert_eq!(updated.review.as_deref(), Some("solid"));
        assert_eq!(updated.title, a.title);
        assert_eq!(updated.year, a.year);
        assert_eq!(updated.description, a.description);
        assert_eq!(updated.image_url, a.image_url);

        let untouched = store.get(b.id).await.unwrap();
        assert_eq!(untouched, b);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let store = memory_store().await;
        let a = store.insert(new_movie("A")).await.unwrap();
        let b = store.insert(new_movie("B")).await.unwrap();

        store.delete(a.id).await.unwrap();

        let remaining = store.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
        assert!(matches!(store.get(a.id).await, Err(AppError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn missing_ids_surface_as_not_found() {
        let store = memory_store().await;
        assert!(matches!(store.get(42).await, Err(AppError::MovieNotFound(42))));
        assert!(matches!(store.delete(42).await, Err(AppError::MovieNotFound(42))));
        assert!(matches!(
            store.update_review(42, 5.0, "x".to_string()).await,
            Err(AppError::MovieNotFound(42))
        ));
    }

    #[tokio::test]
    async fn list_ranked_persists_a_dense_ranking() {
        let store = memory_store().await;
        let a = store.insert(new_movie("A")).await.unwrap();
        let b = store.insert(new_movie("B")).await.unwrap();
        let c = store.insert(new_movie("C")).await.unwrap();
        store.update_review(a.id, 7.0, "good".to_string()).await.unwrap();
        store.update_review(b.id, 9.0, "great".to_string()).await.unwrap();

        let ranked = store.list_ranked().await.unwrap();
        let order: Vec<(i32, Option<i32>)> = ranked.iter().map(|m| (m.id, m.ranking)).collect();
        assert_eq!(order, vec![(c.id, Some(1)), (a.id, Some(2)), (b.id, Some(3))]);

        // Written back, not just computed in memory.
        assert_eq!(store.get(b.id).await.unwrap().ranking, Some(3));
        assert_eq!(store.get(c.id).await.unwrap().ranking, Some(1));
    }

    #[test]
    fn new_movie_truncates_release_date_to_year() {
        let detail = MovieDetail {
            title: "X".to_string(),
            release_date: "1999-03-31".to_string(),
            overview: "...".to_string(),
            poster_path: Some("/p.jpg".to_string()),
        };
        let new = NewMovie::from_detail(&detail, "https://image.tmdb.org/t/p/w500").unwrap();

        assert_eq!(new.title, "X");
        assert_eq!(new.year, 1999);
        assert_eq!(new.description, "...");
        assert_eq!(new.image_url, "https://image.tmdb.org/t/p/w500//p.jpg");
    }

    #[test]
    fn new_movie_fails_without_a_release_year() {
        let detail = MovieDetail {
            title: "X".to_string(),
            release_date: String::new(),
            overview: String::new(),
            poster_path: None,
        };
        assert!(NewMovie::from_detail(&detail, "https://image.tmdb.org/t/p/w500").is_err());
    }
}
