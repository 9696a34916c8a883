//! Post operations against the gateway. Each call is exactly one statement.

use crate::error::StoreError;
use crate::model::{Post, PostInput, PostKey};
use crate::sql::{SqlParam, INSERT_POST, SELECT_POSTS, SELECT_POST_BY_ID, UPDATE_POST};
use crate::store::{Gateway, Row};

pub struct PostService;

impl PostService {
    /// Insert and return the stored row in the same round trip.
    pub async fn create(gateway: &dyn Gateway, input: &PostInput) -> Result<Post, StoreError> {
        let rows = gateway
            .execute(
                INSERT_POST,
                &[SqlParam::from(input.title.as_str()), SqlParam::from(input.content.as_str())],
            )
            .await?;
        first(rows)?.ok_or(StoreError::Db(sqlx::Error::RowNotFound))
    }

    /// All posts, newest first.
    pub async fn list(gateway: &dyn Gateway) -> Result<Vec<Post>, StoreError> {
        let rows = gateway.execute(SELECT_POSTS, &[]).await?;
        rows.into_iter().map(Post::from_row).collect()
    }

    pub async fn get(gateway: &dyn Gateway, id: PostKey) -> Result<Option<Post>, StoreError> {
        let rows = gateway.execute(SELECT_POST_BY_ID, &[SqlParam::from(id)]).await?;
        first(rows)
    }

    /// Rewrite title and content, refresh `updated_at`. `None` when no row has that id.
    pub async fn update(
        gateway: &dyn Gateway,
        id: PostKey,
        input: &PostInput,
    ) -> Result<Option<Post>, StoreError> {
        let rows = gateway
            .execute(
                UPDATE_POST,
                &[
                    SqlParam::from(input.title.as_str()),
                    SqlParam::from(input.content.as_str()),
                    SqlParam::from(id),
                ],
            )
            .await?;
        first(rows)
    }
}

fn first(rows: Vec<Row>) -> Result<Option<Post>, StoreError> {
    rows.into_iter().next().map(Post::from_row).transpose()
}
