use anyhow::Context;
use tasknest_core::core::crypto::HashManager;
use tasknest_core::shared::constants::STATUS_IN_PROGRESS;
use tasknest_core::shared::utils::{abbreviate, current_timestamp};
use tasknest_core::{init_tasknest_core, CredentialHasher, Task};

const DEMO_PASSWORD: &str = "mySecurePassword123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tasknest_core::init();

    println!("TaskNest Password Security Demo\n");

    let hasher = CredentialHasher::new_default();
    let config = hasher.config();
    println!(
        "{} over a {}-byte salt, {}-byte stored credential\n",
        config.algorithm,
        config.salt_length,
        config.credential_length()
    );

    println!("1. Hashing the same password twice:");
    let first = hasher.hash_password(DEMO_PASSWORD)?;
    let second = hasher.hash_password(DEMO_PASSWORD)?;
    println!("  First:  {}", first);
    println!("  Second: {}", second);
    println!("  Different salts produce different credentials: {}\n", first != second);

    println!("2. Verifying:");
    println!("  Correct password vs first:  {}", hasher.verify_password(DEMO_PASSWORD, &first));
    println!("  Correct password vs second: {}", hasher.verify_password(DEMO_PASSWORD, &second));
    println!("  Wrong password vs first:    {}\n", hasher.verify_password("wrongPassword", &first));

    println!("3. Different passwords:");
    for password in ["password123", "Password123"] {
        let credential = hasher.hash_credential(password)?;
        println!(
            "  {:<12} -> {} (salt {})",
            password,
            abbreviate(&credential.encode(), 20),
            hex::encode(&credential.salt()[..4])
        );
    }
    println!();

    println!("4. Session tokens:");
    let digests = HashManager::new();
    for _ in 0..2 {
        let token = hasher.generate_session_token()?;
        let fingerprint = digests.hash_to_hex(token.as_str().as_bytes());
        println!("  {} (fingerprint {})", abbreviate(token.as_str(), 20), &fingerprint[..16]);
    }
    println!();

    println!("5. Persisting a user with a task:");
    let core = init_tasknest_core().await?;
    let user = core
        .register_user("demo-user", DEMO_PASSWORD)
        .await
        .context("registering demo user")?;

    let mut task = Task::titled("Implement secure authentication");
    task.set_description("Replace plaintext storage with salted credentials");
    task.set_status(STATUS_IN_PROGRESS);
    task.set_created_at(current_timestamp());
    task.set_tags(vec!["security".to_string(), "authentication".to_string()]);
    core.add_task(user.id(), user.username(), task).await?;

    let tasks = core.tasks_for(user.id()).await;
    println!("  Saved {} task(s) for {}", tasks.len(), user.username());
    for task in &tasks {
        println!("  {}", task);
    }

    let token = core.login(user.id(), user.username(), DEMO_PASSWORD).await?;
    println!("  Reloaded credential verifies: {}", token.is_some());
    let rejected = core.login(user.id(), user.username(), "wrongPassword").await?;
    println!("  Wrong password rejected: {}", rejected.is_none());

    core.delete_user(user.id()).await.context("removing demo user")?;
    println!("\nDemo user removed.");
    Ok(())
}
