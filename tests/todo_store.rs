use std::collections::HashSet;
use std::sync::Arc;

use sqlx::PgPool;

use todo_service::application::cache::SnapshotCache;
use todo_service::application::repos::{RepoError, TodosRepo};
use todo_service::application::snapshot::TODOS_CACHE_KEY;
use todo_service::application::todos::TodoService;
use todo_service::domain::todos::{DeleteTodo, Todo, UpdateTodoStatus};
use todo_service::infra::cache::InMemoryCache;
use todo_service::infra::db::PostgresRepositories;

fn todo(id: &str) -> Todo {
    Todo {
        id: id.into(),
        topic: format!("topic {id}"),
        description: format!("description {id}"),
        status: "Pending".into(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn todos_index_exists(pool: PgPool) {
    let rows: Vec<String> = sqlx::query_scalar(
        "SELECT indexname FROM pg_indexes WHERE schemaname = 'public' AND tablename = 'todos'",
    )
    .fetch_all(&pool)
    .await
    .expect("fetch todo indexes");

    let indexes: HashSet<String> = rows.into_iter().collect();
    assert!(
        indexes.contains("todos_created_at_idx"),
        "missing todos_created_at_idx"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn save_then_find_all_preserves_insertion_order(pool: PgPool) {
    let repo = PostgresRepositories::new(pool);

    repo.save(&todo("b")).await.expect("save b");
    repo.save(&todo("a")).await.expect("save a");

    let ids: Vec<String> = repo
        .find_all()
        .await
        .expect("find all")
        .into_iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_ids_are_rejected(pool: PgPool) {
    let repo = PostgresRepositories::new(pool);

    repo.save(&todo("a1")).await.expect("first save");
    let err = repo.save(&todo("a1")).await.expect_err("duplicate save");

    assert!(matches!(err, RepoError::Duplicate { .. }), "got {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_and_delete_report_missing_rows(pool: PgPool) {
    let repo = PostgresRepositories::new(pool);
    repo.save(&todo("a1")).await.expect("save");

    repo.update_status(&UpdateTodoStatus {
        id: "a1".into(),
        status: "Done".into(),
    })
    .await
    .expect("update existing");
    assert_eq!(repo.find_all().await.expect("find all")[0].status, "Done");

    let missing_update = repo
        .update_status(&UpdateTodoStatus {
            id: "nope".into(),
            status: "Done".into(),
        })
        .await;
    assert!(matches!(missing_update, Err(RepoError::NotFound)));

    repo.delete(&DeleteTodo { id: "a1".into() })
        .await
        .expect("delete existing");
    assert!(repo.find_all().await.expect("find all").is_empty());

    let missing_delete = repo.delete(&DeleteTodo { id: "a1".into() }).await;
    assert!(matches!(missing_delete, Err(RepoError::NotFound)));
}

#[sqlx::test(migrations = "./migrations")]
async fn health_check_succeeds_on_live_pool(pool: PgPool) {
    let repo = PostgresRepositories::new(pool);
    repo.health_check().await.expect("select 1");
}

#[sqlx::test(migrations = "./migrations")]
async fn coordinator_rebuilds_snapshot_from_postgres(pool: PgPool) {
    let repo = Arc::new(PostgresRepositories::new(pool));
    let cache = Arc::new(InMemoryCache::new());

    let repo_port: Arc<dyn TodosRepo> = repo.clone();
    let cache_port: Arc<dyn SnapshotCache> = cache.clone();
    let service = TodoService::new(repo_port, cache_port);

    service.create(todo("a1")).await.expect("create");
    assert_eq!(
        cache.peek(TODOS_CACHE_KEY).as_deref(),
        Some(
            r#"[{"id":"a1","topic":"topic a1","description":"description a1","status":"Pending"}]"#
        )
    );

    cache.del(TODOS_CACHE_KEY).await.expect("drop snapshot");
    let todos = service.find_all().await.expect("find all");
    assert_eq!(todos, vec![todo("a1")]);
}
