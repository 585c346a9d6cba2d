use shop_backoffice::framework::ActorClient;
use shop_backoffice::lifecycle::ShopSystem;
use shop_backoffice::user_actor::AuthError;

#[tokio::test]
async fn test_token_is_reused_across_logins() {
    let system = ShopSystem::new();
    system.user_client.register("alice", "s3cret").await.unwrap();

    let first = system
        .user_client
        .issue_or_reuse_token("alice", "s3cret")
        .await
        .unwrap();
    let second = system
        .user_client
        .issue_or_reuse_token("alice", "s3cret")
        .await
        .unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    let user = system.user_client.authenticate(&first).await.unwrap();
    assert_eq!(user.username, "alice");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_each_user_gets_its_own_token() {
    let system = ShopSystem::new();
    system.user_client.register("alice", "a").await.unwrap();
    system.user_client.register("bob", "b").await.unwrap();

    let alice = system.user_client.issue_or_reuse_token("alice", "a").await.unwrap();
    let bob = system.user_client.issue_or_reuse_token("bob", "b").await.unwrap();
    assert_ne!(alice, bob);
    assert_eq!(
        system.user_client.authenticate(&bob).await.unwrap().username,
        "bob"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wrong_password_always_fails() {
    let system = ShopSystem::new();
    system.user_client.register("alice", "s3cret").await.unwrap();

    for _ in 0..2 {
        let result = system
            .user_client
            .issue_or_reuse_token("alice", "guess")
            .await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    // A failed login does not mint a token as a side effect.
    system
        .user_client
        .issue_or_reuse_token("alice", "s3cret")
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let system = ShopSystem::new();

    let result = system
        .user_client
        .issue_or_reuse_token("nobody", "pw")
        .await;
    assert_eq!(result, Err(AuthError::NotFound("nobody".to_string())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_token_is_rejected() {
    let system = ShopSystem::new();
    system.user_client.register("alice", "s3cret").await.unwrap();

    let result = system.user_client.authenticate("not-a-token").await;
    assert_eq!(result, Err(AuthError::InvalidToken));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_registration_rules() {
    let system = ShopSystem::new();
    system.user_client.register("alice", "s3cret").await.unwrap();

    assert!(matches!(
        system.user_client.register("alice", "other").await,
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        system.user_client.register("", "pw").await,
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        system.user_client.register("bob", "").await,
        Err(AuthError::Validation(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_keep_usernames_unique() {
    let system = ShopSystem::new();

    let (first, second) = tokio::join!(
        system.user_client.register("dup", "one"),
        system.user_client.register("dup", "two"),
    );
    assert_eq!(
        [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
        1
    );

    let accounts = system.user_client.list().await.unwrap();
    assert_eq!(accounts.iter().filter(|u| u.username == "dup").count(), 1);

    // The account that won can log in with its own password.
    let password = if first.is_ok() { "one" } else { "two" };
    system
        .user_client
        .issue_or_reuse_token("dup", password)
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}
