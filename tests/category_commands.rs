// tests/category_commands.rs
use vesturo::application::commands::categories::{DeleteCategoryCommand, UpdateCategoryCommand};
use vesturo::application::error::ApplicationError;
use vesturo::application::queries::categories::{GetCategoryBySlugQuery, ListCategoriesQuery};

mod support;
use support::{TestApp, actor_without, admin_actor, category_command};

#[tokio::test]
async fn create_derives_slug_from_name() {
    let app = TestApp::new();
    let category = app.category("Street Style").await;

    assert_eq!(category.slug, "street-style");
    assert_eq!(category.post_count, 0);
    assert!(category.is_active);
}

#[tokio::test]
async fn duplicate_name_is_case_insensitive_conflict() {
    let app = TestApp::new();
    app.category("Street Style").await;

    let err = app
        .services
        .category_commands
        .create_category(&admin_actor(), category_command("STREET style"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Conflict(ref msg) if msg == "category with this name already exists"),
        "{err:?}"
    );
}

#[tokio::test]
async fn distinct_names_with_same_slug_conflict() {
    let app = TestApp::new();
    app.category("Street Style").await;

    let err = app
        .services
        .category_commands
        .create_category(&admin_actor(), category_command("Street-Style!"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Conflict(ref msg) if msg == "category slug already exists"),
        "{err:?}"
    );
}

#[tokio::test]
async fn rename_updates_slug_and_allows_own_name() {
    let app = TestApp::new();
    let category = app.category("Street Style").await;

    let same = app
        .services
        .category_commands
        .update_category(
            &admin_actor(),
            UpdateCategoryCommand {
                id: category.id,
                name: Some("Street Style".into()),
                sort_order: Some(4),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.slug, "street-style");
    assert_eq!(same.sort_order, 4);

    let renamed = app
        .services
        .category_commands
        .update_category(
            &admin_actor(),
            UpdateCategoryCommand {
                id: category.id,
                name: Some("Urban Looks".into()),
                description: Some(String::new()),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "urban-looks");
    assert!(renamed.description.is_none());
}

#[tokio::test]
async fn rename_onto_other_category_conflicts() {
    let app = TestApp::new();
    app.category("Street Style").await;
    let formal = app.category("Formal").await;

    let err = app
        .services
        .category_commands
        .update_category(
            &admin_actor(),
            UpdateCategoryCommand {
                id: formal.id,
                name: Some("street style".into()),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn delete_is_refused_while_posts_reference_category() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    app.post("Draft Look", category.id, false).await;
    assert_eq!(app.post_count(category.id), 0, "drafts are not counted");

    let err = app
        .services
        .category_commands
        .delete_category(&admin_actor(), DeleteCategoryCommand { id: category.id })
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Conflict(ref msg)
            if msg == "cannot delete category. it has 1 posts associated with it"),
        "{err:?}"
    );
    assert!(app.store.category(category.id).is_some());
}

#[tokio::test]
async fn delete_ignores_stale_cached_count() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    app.store.corrupt_post_count(category.id, 5);

    app.services
        .category_commands
        .delete_category(&admin_actor(), DeleteCategoryCommand { id: category.id })
        .await
        .unwrap();
    assert!(app.store.category(category.id).is_none());
}

#[tokio::test]
async fn delete_requires_capability() {
    let app = TestApp::new();
    let category = app.category("Street").await;

    let err = app
        .services
        .category_commands
        .delete_category(
            &actor_without("categories", "delete"),
            DeleteCategoryCommand { id: category.id },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn listing_hides_inactive_and_orders_by_sort_order() {
    let app = TestApp::new();
    let b = app.category("Boho").await;
    let a = app.category("Athleisure").await;
    let hidden = app.category("Archive").await;
    app.services
        .category_commands
        .update_category(
            &admin_actor(),
            UpdateCategoryCommand {
                id: hidden.id,
                is_active: Some(false),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap();
    app.services
        .category_commands
        .update_category(
            &admin_actor(),
            UpdateCategoryCommand {
                id: b.id,
                sort_order: Some(-1),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap();

    let page = app
        .services
        .category_queries
        .list_categories(ListCategoriesQuery::default())
        .await
        .unwrap();
    let ids: Vec<i64> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert_eq!(page.total, 2);
    assert_eq!(page.pagination.pages, 1);

    let everything = app
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            active_only: false,
            page: 2,
            limit: 2,
        })
        .await
        .unwrap();
    assert_eq!(everything.total, 3);
    assert_eq!(everything.count, 1);
    assert_eq!(everything.pagination.pages, 2);
}

#[tokio::test]
async fn lookup_by_slug() {
    let app = TestApp::new();
    let category = app.category("Street Style").await;

    let found = app
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery {
            slug: "street-style".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, category.id);

    let missing = app
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery {
            slug: "nope".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, ApplicationError::NotFound(_)));
}
