//! Unit tests for the blog crate

// ============================================================================
// In-memory repository double
// ============================================================================

mod support {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;
    use kernel::id::{CategoryId, CommentId, PostId, UserId};

    use crate::domain::entity::{
        Category, Comment, CommentView, CommentWithPost, NewComment, NewPost, Post, PostFilter,
        PostPatch, PostView,
    };
    use crate::domain::repository::{CategoryRepository, CommentRepository, PostRepository};
    use crate::error::BlogResult;

    /// In-memory blog store for use-case tests
    #[derive(Default)]
    pub struct MemoryBlogRepository {
        inner: Mutex<MemoryInner>,
    }

    #[derive(Default)]
    struct MemoryInner {
        posts: HashMap<i64, Post>,
        comments: HashMap<i64, Comment>,
        categories: HashMap<i64, Category>,
        usernames: HashMap<i64, String>,
        next_id: i64,
    }

    impl MemoryInner {
        fn next(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }
    }

    impl MemoryBlogRepository {
        /// Register a username so joins have something to resolve
        pub fn add_user(&self, id: UserId, name: &str) {
            let mut inner = self.inner.lock().unwrap();
            inner.usernames.insert(id.as_i64(), name.to_string());
        }

        pub fn category_count(&self) -> usize {
            self.inner.lock().unwrap().categories.len()
        }

        fn view_of(inner: &MemoryInner, post: &Post) -> PostView {
            PostView {
                post: post.clone(),
                author_name: inner
                    .usernames
                    .get(&post.author_id.as_i64())
                    .cloned()
                    .unwrap_or_default(),
                category_name: post
                    .category_id
                    .and_then(|c| inner.categories.get(&c.as_i64()))
                    .map(|c| c.name.clone()),
            }
        }
    }

    impl PostRepository for MemoryBlogRepository {
        async fn insert(&self, post: &NewPost) -> BlogResult<PostId> {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next();
            let now = Utc::now();
            inner.posts.insert(
                id,
                Post {
                    id: PostId::from_i64(id),
                    title: post.title.clone(),
                    content: post.content.clone(),
                    cover: post.cover.clone(),
                    tags: post.tags.clone(),
                    views: 0,
                    category_id: post.category_id,
                    author_id: post.author_id,
                    created_at: now,
                    updated_at: now,
                },
            );
            Ok(PostId::from_i64(id))
        }

        async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.posts.get(&id.as_i64()).cloned())
        }

        async fn find_view(&self, id: PostId) -> BlogResult<Option<PostView>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .posts
                .get(&id.as_i64())
                .map(|p| Self::view_of(&inner, p)))
        }

        async fn increment_views(&self, id: PostId) -> BlogResult<bool> {
            let mut inner = self.inner.lock().unwrap();
            match inner.posts.get_mut(&id.as_i64()) {
                Some(post) => {
                    post.views += 1;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn list(
            &self,
            filter: &PostFilter,
            limit: i64,
            offset: i64,
        ) -> BlogResult<Vec<PostView>> {
            let inner = self.inner.lock().unwrap();
            let mut matching: Vec<&Post> = inner
                .posts
                .values()
                .filter(|p| matches_filter(p, filter))
                .collect();
            matching.sort_by(|a, b| b.id.as_i64().cmp(&a.id.as_i64()));
            Ok(matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|p| Self::view_of(&inner, p))
                .collect())
        }

        async fn count(&self, filter: &PostFilter) -> BlogResult<i64> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .posts
                .values()
                .filter(|p| matches_filter(p, filter))
                .count() as i64)
        }

        async fn update(&self, id: PostId, patch: &PostPatch) -> BlogResult<()> {
            let mut inner = self.inner.lock().unwrap();
            if let Some(post) = inner.posts.get_mut(&id.as_i64()) {
                post.title = patch.title.clone();
                post.content = patch.content.clone();
                post.cover = patch.cover.clone();
                post.tags = patch.tags.clone();
                post.category_id = patch.category_id;
                post.updated_at = Utc::now();
            }
            Ok(())
        }

        async fn delete(&self, id: PostId) -> BlogResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.posts.remove(&id.as_i64());
            inner.comments.retain(|_, c| c.post_id != id);
            Ok(())
        }
    }

    fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
        if let Some(cat) = filter.category_id {
            if post.category_id != Some(cat) {
                return false;
            }
        }
        if let Some(keyword) = &filter.keyword {
            let keyword = keyword.to_lowercase();
            if !post.title.to_lowercase().contains(&keyword)
                && !post.content.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        true
    }

    impl CommentRepository for MemoryBlogRepository {
        async fn insert(&self, comment: &NewComment) -> BlogResult<CommentId> {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next();
            inner.comments.insert(
                id,
                Comment {
                    id: CommentId::from_i64(id),
                    post_id: comment.post_id,
                    user_id: comment.user_id,
                    content: comment.content.clone(),
                    created_at: Utc::now(),
                },
            );
            Ok(CommentId::from_i64(id))
        }

        async fn find_by_id(&self, id: CommentId) -> BlogResult<Option<Comment>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.comments.get(&id.as_i64()).cloned())
        }

        async fn list_by_post(&self, post_id: PostId) -> BlogResult<Vec<CommentView>> {
            let inner = self.inner.lock().unwrap();
            let mut matching: Vec<&Comment> = inner
                .comments
                .values()
                .filter(|c| c.post_id == post_id)
                .collect();
            matching.sort_by_key(|c| c.id.as_i64());
            Ok(matching
                .into_iter()
                .map(|c| CommentView {
                    comment: c.clone(),
                    username: inner
                        .usernames
                        .get(&c.user_id.as_i64())
                        .cloned()
                        .unwrap_or_default(),
                })
                .collect())
        }

        async fn list_by_user(
            &self,
            user_id: UserId,
            limit: i64,
            offset: i64,
        ) -> BlogResult<Vec<CommentWithPost>> {
            let inner = self.inner.lock().unwrap();
            let mut matching: Vec<&Comment> = inner
                .comments
                .values()
                .filter(|c| c.user_id == user_id)
                .collect();
            matching.sort_by(|a, b| b.id.as_i64().cmp(&a.id.as_i64()));
            Ok(matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|c| CommentWithPost {
                    comment: c.clone(),
                    post_title: inner
                        .posts
                        .get(&c.post_id.as_i64())
                        .map(|p| p.title.clone())
                        .unwrap_or_default(),
                })
                .collect())
        }

        async fn count_by_user(&self, user_id: UserId) -> BlogResult<i64> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .comments
                .values()
                .filter(|c| c.user_id == user_id)
                .count() as i64)
        }

        async fn delete(&self, id: CommentId) -> BlogResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.comments.remove(&id.as_i64());
            Ok(())
        }
    }

    impl CategoryRepository for MemoryBlogRepository {
        async fn list_all(&self) -> BlogResult<Vec<Category>> {
            let inner = self.inner.lock().unwrap();
            let mut all: Vec<Category> = inner.categories.values().cloned().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn find_by_id(&self, id: CategoryId) -> BlogResult<Option<Category>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.categories.get(&id.as_i64()).cloned())
        }

        async fn find_by_name(&self, name: &str) -> BlogResult<Option<Category>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.categories.values().find(|c| c.name == name).cloned())
        }

        async fn find_or_create_by_name(&self, name: &str) -> BlogResult<CategoryId> {
            let mut inner = self.inner.lock().unwrap();
            if let Some(existing) = inner.categories.values().find(|c| c.name == name) {
                return Ok(existing.id);
            }
            let id = inner.next();
            inner.categories.insert(
                id,
                Category {
                    id: CategoryId::from_i64(id),
                    name: name.to_string(),
                },
            );
            Ok(CategoryId::from_i64(id))
        }
    }
}

// ============================================================================
// Post use cases
// ============================================================================

#[cfg(test)]
mod post_tests {
    use std::sync::Arc;

    use auth::domain::entity::Identity;
    use kernel::id::{PostId, UserId};

    use crate::application::category::CategoryRef;
    use crate::application::posts::{
        CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput,
        ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
    };
    use crate::domain::repository::PostRepository;
    use crate::error::BlogError;

    use super::support::MemoryBlogRepository;

    fn identity(id: i64, name: &str) -> Identity {
        Identity {
            id: UserId::from_i64(id),
            username: name.to_string(),
        }
    }

    fn repo_with_users() -> Arc<MemoryBlogRepository> {
        let repo = Arc::new(MemoryBlogRepository::default());
        repo.add_user(UserId::from_i64(1), "alice");
        repo.add_user(UserId::from_i64(2), "bob");
        repo
    }

    fn post_input(title: &str) -> CreatePostInput {
        CreatePostInput {
            title: title.to_string(),
            content: "Some content".to_string(),
            cover: None,
            tags: None,
            category: None,
        }
    }

    fn update_input(title: &str) -> UpdatePostInput {
        UpdatePostInput {
            title: title.to_string(),
            content: "Edited content".to_string(),
            cover: None,
            tags: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_create_stamps_author_from_identity() {
        let repo = repo_with_users();
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&identity(1, "alice"), post_input("Hello"))
            .await
            .unwrap();

        let post = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.author_id.as_i64(), 1);
        assert_eq!(post.views, 0);
    }

    #[tokio::test]
    async fn test_create_requires_title_and_content() {
        let repo = repo_with_users();
        let use_case = CreatePostUseCase::new(repo);

        let err = use_case
            .execute(&identity(1, "alice"), post_input("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_detail_read_is_not_idempotent() {
        let repo = repo_with_users();
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&identity(1, "alice"), post_input("Views"))
            .await
            .unwrap();

        let use_case = GetPostUseCase::new(repo.clone());
        use_case.execute(id).await.unwrap();
        let second = use_case.execute(id).await.unwrap();

        // Two reads bump the counter by exactly two
        assert_eq!(second.post.views, 2);
    }

    #[tokio::test]
    async fn test_detail_missing_is_not_found() {
        let repo = repo_with_users();
        let err = GetPostUseCase::new(repo)
            .execute(PostId::from_i64(999))
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_never_forbidden() {
        let repo = repo_with_users();
        // Identity 2 owns nothing; a missing id still reports NotFound
        let err = UpdatePostUseCase::new(repo)
            .execute(&identity(2, "bob"), PostId::from_i64(999), update_input("X"))
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound));
    }

    #[tokio::test]
    async fn test_non_owner_update_is_forbidden_and_unchanged() {
        let repo = repo_with_users();
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&identity(1, "alice"), post_input("Original"))
            .await
            .unwrap();

        let err = UpdatePostUseCase::new(repo.clone())
            .execute(&identity(2, "bob"), id, update_input("Hijacked"))
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::NotOwner));

        let post = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.title, "Original");
    }

    #[tokio::test]
    async fn test_owner_update_is_visible_on_refetch() {
        let repo = repo_with_users();
        let alice = identity(1, "alice");
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&alice, post_input("Original"))
            .await
            .unwrap();

        UpdatePostUseCase::new(repo.clone())
            .execute(&alice, id, update_input("Edited"))
            .await
            .unwrap();

        let post = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.title, "Edited");
        assert_eq!(post.content, "Edited content");
    }

    #[tokio::test]
    async fn test_non_owner_delete_is_forbidden() {
        let repo = repo_with_users();
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&identity(1, "alice"), post_input("Keep"))
            .await
            .unwrap();

        let err = DeletePostUseCase::new(repo.clone())
            .execute(&identity(2, "bob"), id)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::NotOwner));
        assert!(repo.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_owner_delete_removes_post() {
        let repo = repo_with_users();
        let alice = identity(1, "alice");
        let id = CreatePostUseCase::new(repo.clone())
            .execute(&alice, post_input("Gone"))
            .await
            .unwrap();

        DeletePostUseCase::new(repo.clone())
            .execute(&alice, id)
            .await
            .unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let repo = repo_with_users();
        let alice = identity(1, "alice");
        let create = CreatePostUseCase::new(repo.clone());

        for i in 0..15 {
            create
                .execute(&alice, post_input(&format!("Post {i}")))
                .await
                .unwrap();
        }
        let mut rust_post = post_input("About Rust");
        rust_post.category = Some(CategoryRef::ByName("rust".to_string()));
        create.execute(&alice, rust_post).await.unwrap();

        let list = ListPostsUseCase::new(repo.clone());

        // Default page size is 10, newest first
        let page1 = list.execute(ListPostsInput::default()).await.unwrap();
        assert_eq!(page1.total, 16);
        assert_eq!(page1.posts.len(), 10);
        assert_eq!(page1.posts[0].post.title, "About Rust");

        let page2 = list
            .execute(ListPostsInput {
                page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page2.posts.len(), 6);

        // Category filter by name
        let filtered = list
            .execute(ListPostsInput {
                category: Some(CategoryRef::ByName("rust".to_string())),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(filtered.total, 1);
        assert_eq!(filtered.posts[0].category_name.as_deref(), Some("rust"));

        // Unknown category name yields an empty page, not an error
        let empty = list
            .execute(ListPostsInput {
                category: Some(CategoryRef::ByName("missing".to_string())),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(empty.total, 0);
        assert!(empty.posts.is_empty());

        // Keyword search matches title case-insensitively
        let keyword = list
            .execute(ListPostsInput {
                keyword: Some("about RUST".to_lowercase()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(keyword.total, 1);
    }

    #[tokio::test]
    async fn test_list_far_page_is_empty() {
        let repo = repo_with_users();
        let alice = identity(1, "alice");
        CreatePostUseCase::new(repo.clone())
            .execute(&alice, post_input("Only one"))
            .await
            .unwrap();

        // An absurd page number must not wrap the offset
        let page = ListPostsUseCase::new(repo)
            .execute(ListPostsInput {
                page: Some(i64::MAX),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert!(page.posts.is_empty());
    }
}

// ============================================================================
// Category resolution
// ============================================================================

#[cfg(test)]
mod category_tests {
    use std::sync::Arc;

    use kernel::id::CategoryId;

    use crate::application::category::CategoryRef;
    use crate::domain::repository::CategoryRepository;
    use crate::error::BlogError;

    use super::support::MemoryBlogRepository;

    #[test]
    fn test_parse_numeric_string_is_id() {
        assert_eq!(
            CategoryRef::parse("42"),
            CategoryRef::ById(CategoryId::from_i64(42))
        );
        assert_eq!(
            CategoryRef::parse(" 7 "),
            CategoryRef::ById(CategoryId::from_i64(7))
        );
        assert_eq!(
            CategoryRef::parse("rust"),
            CategoryRef::ByName("rust".to_string())
        );
        assert_eq!(
            CategoryRef::parse("2nd-edition"),
            CategoryRef::ByName("2nd-edition".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_by_name_creates_once() {
        let repo = Arc::new(MemoryBlogRepository::default());

        let first = CategoryRef::ByName("rust".to_string())
            .resolve_or_create(&*repo)
            .await
            .unwrap();
        let second = CategoryRef::ByName("rust".to_string())
            .resolve_or_create(&*repo)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.category_count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_by_unknown_id_fails() {
        let repo = Arc::new(MemoryBlogRepository::default());

        let err = CategoryRef::ById(CategoryId::from_i64(99))
            .resolve_or_create(&*repo)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_resolve_by_known_id_succeeds() {
        let repo = Arc::new(MemoryBlogRepository::default());
        let id = repo.find_or_create_by_name("life").await.unwrap();

        let resolved = CategoryRef::ById(id).resolve_or_create(&*repo).await.unwrap();
        assert_eq!(resolved, id);
    }
}

// ============================================================================
// Comment use cases
// ============================================================================

#[cfg(test)]
mod comment_tests {
    use std::sync::Arc;

    use auth::domain::entity::Identity;
    use kernel::id::{CommentId, PostId, UserId};

    use crate::application::comments::{
        CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
        MyCommentsUseCase,
    };
    use crate::application::posts::{CreatePostInput, CreatePostUseCase};
    use crate::domain::repository::CommentRepository;
    use crate::error::BlogError;

    use super::support::MemoryBlogRepository;

    fn identity(id: i64, name: &str) -> Identity {
        Identity {
            id: UserId::from_i64(id),
            username: name.to_string(),
        }
    }

    async fn repo_with_post() -> (Arc<MemoryBlogRepository>, PostId) {
        let repo = Arc::new(MemoryBlogRepository::default());
        repo.add_user(UserId::from_i64(1), "alice");
        repo.add_user(UserId::from_i64(2), "bob");

        let post_id = CreatePostUseCase::new(repo.clone())
            .execute(
                &identity(1, "alice"),
                CreatePostInput {
                    title: "A post".to_string(),
                    content: "Content".to_string(),
                    cover: None,
                    tags: None,
                    category: None,
                },
            )
            .await
            .unwrap();

        (repo, post_id)
    }

    #[tokio::test]
    async fn test_comment_on_missing_post_is_not_found() {
        let repo = Arc::new(MemoryBlogRepository::default());

        let err = CreateCommentUseCase::new(repo)
            .execute(
                &identity(2, "bob"),
                CreateCommentInput {
                    post_id: PostId::from_i64(999),
                    content: "hello".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound));
    }

    #[tokio::test]
    async fn test_comment_requires_content() {
        let (repo, post_id) = repo_with_post().await;

        let err = CreateCommentUseCase::new(repo)
            .execute(
                &identity(2, "bob"),
                CreateCommentInput {
                    post_id,
                    content: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_comments_list_oldest_first_with_usernames() {
        let (repo, post_id) = repo_with_post().await;
        let create = CreateCommentUseCase::new(repo.clone());

        create
            .execute(
                &identity(2, "bob"),
                CreateCommentInput {
                    post_id,
                    content: "first".to_string(),
                },
            )
            .await
            .unwrap();
        create
            .execute(
                &identity(1, "alice"),
                CreateCommentInput {
                    post_id,
                    content: "second".to_string(),
                },
            )
            .await
            .unwrap();

        let comments = ListCommentsUseCase::new(repo)
            .execute(post_id)
            .await
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].comment.content, "first");
        assert_eq!(comments[0].username, "bob");
        assert_eq!(comments[1].username, "alice");
    }

    #[tokio::test]
    async fn test_delete_missing_comment_is_not_found() {
        let (repo, _) = repo_with_post().await;

        let err = DeleteCommentUseCase::new(repo)
            .execute(&identity(2, "bob"), CommentId::from_i64(999))
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::CommentNotFound));
    }

    #[tokio::test]
    async fn test_post_author_cannot_delete_others_comment() {
        let (repo, post_id) = repo_with_post().await;

        // Bob comments on Alice's post
        let comment_id = CreateCommentUseCase::new(repo.clone())
            .execute(
                &identity(2, "bob"),
                CreateCommentInput {
                    post_id,
                    content: "bob's words".to_string(),
                },
            )
            .await
            .unwrap();

        // Alice owns the post but not the comment
        let err = DeleteCommentUseCase::new(repo.clone())
            .execute(&identity(1, "alice"), comment_id)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::NotOwner));
        assert!(repo.find_by_id(comment_id).await.unwrap().is_some());

        // The author can
        DeleteCommentUseCase::new(repo.clone())
            .execute(&identity(2, "bob"), comment_id)
            .await
            .unwrap();
        assert!(repo.find_by_id(comment_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_my_comments_pagination() {
        let (repo, post_id) = repo_with_post().await;
        let create = CreateCommentUseCase::new(repo.clone());
        let bob = identity(2, "bob");

        for i in 0..7 {
            create
                .execute(
                    &bob,
                    CreateCommentInput {
                        post_id,
                        content: format!("comment {i}"),
                    },
                )
                .await
                .unwrap();
        }

        let use_case = MyCommentsUseCase::new(repo);

        let page1 = use_case.execute(&bob, Some(1), Some(3)).await.unwrap();
        assert_eq!(page1.total, 7);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.comments.len(), 3);
        // Newest first, joined with the post title
        assert_eq!(page1.comments[0].comment.content, "comment 6");
        assert_eq!(page1.comments[0].post_title, "A post");

        let page3 = use_case.execute(&bob, Some(3), Some(3)).await.unwrap();
        assert_eq!(page3.comments.len(), 1);

        // 7 comments at limit 7 is exactly one page
        let exact = use_case.execute(&bob, Some(1), Some(7)).await.unwrap();
        assert_eq!(exact.total_pages, 1);

        // An absurd page number must not wrap the offset
        let far = use_case.execute(&bob, Some(i64::MAX), Some(3)).await.unwrap();
        assert_eq!(far.total, 7);
        assert!(far.comments.is_empty());

        // Another user sees none of them
        let alice_page = use_case
            .execute(&identity(1, "alice"), None, None)
            .await
            .unwrap();
        assert_eq!(alice_page.total, 0);
        assert_eq!(alice_page.total_pages, 0);
    }
}

// ============================================================================
// Upload validation
// ============================================================================

#[cfg(test)]
mod upload_tests {
    use std::sync::Arc;

    use crate::application::config::BlogConfig;
    use crate::application::upload::{ImageUpload, UploadImageUseCase};
    use crate::error::BlogError;

    fn config(dir: &std::path::Path) -> Arc<BlogConfig> {
        Arc::new(BlogConfig::with_upload_dir(dir))
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("blog-upload-test-{name}-{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let dir = temp_dir("mime");
        let use_case = UploadImageUseCase::new(config(&dir));

        let err = use_case
            .execute(ImageUpload {
                file_name: Some("notes.txt".to_string()),
                content_type: Some("text/plain".to_string()),
                data: vec![1, 2, 3],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upload_rejects_oversize() {
        let dir = temp_dir("size");
        let mut cfg = BlogConfig::with_upload_dir(&dir);
        cfg.max_upload_bytes = 16;
        let use_case = UploadImageUseCase::new(Arc::new(cfg));

        let err = use_case
            .execute(ImageUpload {
                file_name: Some("big.png".to_string()),
                content_type: Some("image/png".to_string()),
                data: vec![0u8; 17],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::UploadTooLarge));
    }

    #[tokio::test]
    async fn test_upload_writes_file_and_returns_url() {
        let dir = temp_dir("write");
        let use_case = UploadImageUseCase::new(config(&dir));

        let stored = use_case
            .execute(ImageUpload {
                file_name: Some("photo.png".to_string()),
                content_type: Some("image/png".to_string()),
                data: vec![0x89, 0x50, 0x4e, 0x47],
            })
            .await
            .unwrap();

        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.file_name.ends_with(".png"));

        let on_disk = tokio::fs::read(dir.join(&stored.file_name)).await.unwrap();
        assert_eq!(on_disk, vec![0x89, 0x50, 0x4e, 0x47]);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
