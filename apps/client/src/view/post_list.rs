//! Public post list (`/posts`)

use chrono::NaiveDate;
use newsroom_domain::{
    authz::Route,
    post::{Post, PostFilter, PostStatus},
};

use super::enter;
use crate::{error::AppError, state::AppState};

/// Filter form of the public list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub content: String,
    pub author:  String,
    pub from:    Option<NaiveDate>,
    pub to:      Option<NaiveDate>,
}

impl PostListQuery {
    /// Published posts matching the form; dates cover whole days
    pub fn to_filter(&self) -> PostFilter {
        PostFilter::new()
            .with_content(self.content.as_str())
            .with_author(self.author.as_str())
            .within_days(self.from, self.to)
            .with_status(Some(PostStatus::Published))
    }
}

/// Published posts, most recent first
#[tracing::instrument(skip_all)]
pub async fn list_published(state: &AppState, query: &PostListQuery) -> Result<Vec<Post>, AppError> {
    enter(state, Route::Posts)?;

    let mut posts = state.api.list_posts(&query.to_filter()).await?;
    posts.reverse();
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use newsroom_domain::post::PostId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{StubApi, post, state_with_session, state_without_session};

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, d)
    }

    #[tokio::test]
    async fn test_lists_published_posts_newest_first() {
        let api = StubApi::default()
            .with_post(post(1, "alice", PostStatus::Published))
            .with_post(post(2, "alice", PostStatus::Draft))
            .with_post(post(3, "carol", PostStatus::Published));
        let state = state_with_session("bob", "gebruiker", api);

        let posts = list_published(&state, &PostListQuery::default()).await.unwrap();

        let ids: Vec<PostId> = posts.iter().map(Post::id).collect();
        assert_eq!(ids, vec![PostId::new(3), PostId::new(1)]);
    }

    #[tokio::test]
    async fn test_sends_filter_with_full_day_bounds() {
        let api = StubApi::default();
        let state = state_with_session("bob", "gebruiker", api.clone());
        let query = PostListQuery {
            content: "budget".to_string(),
            author:  String::new(),
            from:    day(1),
            to:      day(31),
        };

        list_published(&state, &query).await.unwrap();

        let sent = api.filters().remove(0);
        assert_eq!(
            sent.query_pairs(),
            vec![
                ("content", "budget".to_string()),
                ("fromDate", "2024-03-01T00:00:00".to_string()),
                ("toDate", "2024-03-31T23:59:59".to_string()),
                ("status", "PUBLISHED".to_string()),
            ]
        );
    }

    #[test]
    fn test_inverted_dates_drop_to_date() {
        let query = PostListQuery {
            from: day(10),
            to: day(9),
            ..PostListQuery::default()
        };

        assert_eq!(query.to_filter().to_date(), None);
    }

    #[tokio::test]
    async fn test_requires_a_session() {
        let api = StubApi::default();
        let state = state_without_session(api.clone());

        let result = list_published(&state, &PostListQuery::default()).await;

        assert!(matches!(
            result,
            Err(AppError::AccessDenied {
                redirect: Route::Login,
                ..
            })
        ));
        assert!(api.calls().is_empty());
    }
}
