// tests/slug_generation.rs
use std::sync::Arc;
use vesturo::application::commands::posts::UpdatePostCommand;
use vesturo::application::error::ApplicationError;
use vesturo::domain::post::{PostId, PostTitle, services::PostSlugService};
use vesturo::infrastructure::util::DefaultSlugGenerator;

mod support;
use support::{MemoryPostRepo, TestApp, admin_actor, post_command};

#[tokio::test]
async fn same_title_gets_numeric_suffixes() {
    let app = TestApp::new();
    let category = app.category("Street").await;

    let first = app.post("Street Style", category.id, true).await;
    let second = app.post("Street Style", category.id, true).await;
    let third = app.post("street   style!!", category.id, false).await;

    assert_eq!(first.slug, "street-style");
    assert_eq!(second.slug, "street-style-1");
    assert_eq!(third.slug, "street-style-2");
}

#[tokio::test]
async fn punctuation_only_title_falls_back_to_post() {
    let app = TestApp::new();
    let category = app.category("Street").await;

    let post = app.post("!!! ???", category.id, true).await;
    assert_eq!(post.slug, "post");
    let again = app.post("***", category.id, true).await;
    assert_eq!(again.slug, "post-1");
}

#[tokio::test]
async fn unrelated_update_keeps_slug() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    let post = app.post("Street Style", category.id, true).await;
    app.store.reset_slug_probes();

    let updated = app
        .services
        .post_commands
        .update_post(
            &admin_actor(),
            UpdatePostCommand {
                id: post.id,
                description: Some("Rewritten caption".into()),
                title: Some("Street Style".into()),
                ..UpdatePostCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "street-style");
    assert_eq!(updated.description, "Rewritten caption");
    assert_eq!(app.store.slug_probes(), 0, "unchanged title must not probe slugs");
}

#[tokio::test]
async fn retitled_post_ignores_its_own_slug() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    let post = app.post("Street Style", category.id, true).await;

    let updated = app
        .services
        .post_commands
        .update_post(
            &admin_actor(),
            UpdatePostCommand {
                id: post.id,
                title: Some("Street STYLE".into()),
                ..UpdatePostCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Street STYLE");
    assert_eq!(updated.slug, "street-style");
}

#[tokio::test]
async fn retitle_onto_taken_slug_gets_suffix() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    app.post("Denim Days", category.id, true).await;
    let post = app.post("Linen Weekend", category.id, true).await;

    let updated = app
        .services
        .post_commands
        .update_post(
            &admin_actor(),
            UpdatePostCommand {
                id: post.id,
                title: Some("Denim Days".into()),
                ..UpdatePostCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "denim-days-1");
}

#[tokio::test]
async fn exhausted_attempts_is_a_conflict() {
    let app = TestApp::with_slug_attempts(3);
    let category = app.category("Street").await;
    for _ in 0..3 {
        app.post("Street Style", category.id, true).await;
    }

    let err = app
        .services
        .post_commands
        .create_post(&admin_actor(), post_command("Street Style", category.id, true))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
    assert_eq!(app.post_count(category.id), 3);
}

#[tokio::test]
async fn service_probes_until_free_candidate() {
    let app = TestApp::new();
    let category = app.category("Street").await;
    app.post("Street Style", category.id, true).await;
    app.post("Street Style", category.id, true).await;

    let service = PostSlugService::new(
        Arc::new(MemoryPostRepo(app.store.clone())),
        Arc::new(DefaultSlugGenerator),
        10,
    );
    let title = PostTitle::new("Street Style").unwrap();
    app.store.reset_slug_probes();

    let slug = service.generate_unique_slug(&title, None).await.unwrap();
    assert_eq!(slug.as_str(), "street-style-2");
    assert_eq!(app.store.slug_probes(), 3);

    let first_id = PostId::new(2).unwrap();
    let own = service
        .generate_unique_slug(&title, Some(first_id))
        .await
        .unwrap();
    assert_eq!(own.as_str(), "street-style");
}

#[tokio::test]
async fn zero_attempt_cap_still_probes_once() {
    let app = TestApp::new();
    let service = PostSlugService::new(
        Arc::new(MemoryPostRepo(app.store.clone())),
        Arc::new(DefaultSlugGenerator),
        0,
    );
    let title = PostTitle::new("Fresh Look").unwrap();
    let slug = service.generate_unique_slug(&title, None).await.unwrap();
    assert_eq!(slug.as_str(), "fresh-look");
    assert_eq!(app.store.slug_probes(), 1);
}
