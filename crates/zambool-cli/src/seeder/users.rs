//! Instructor and student seeding.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use zambool_models::UserRole;

use super::models::{SEED_USERNAME_PREFIX, UserSeed};

/// Builds a seed username that survives the signup username rules.
pub fn seed_username(first_name: &str, last_name: &str, role: UserRole, idx: usize) -> String {
    let slug: String = format!("{}.{}", first_name, last_name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .take(24)
        .collect();

    format!("{}{}.{}{}", SEED_USERNAME_PREFIX, slug, role.as_str(), idx)
}

/// Generates `count` users of one role in parallel.
pub fn generate_users(count: usize, role: UserRole, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            UserSeed {
                username: seed_username(&first_name, &last_name, role, idx),
                name: format!("{} {}", first_name, last_name),
                password_hash: password_hash.to_string(),
                role,
            }
        })
        .collect()
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    role: UserRole,
    password_hash: &str,
) -> Result<Vec<UserSeed>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} {}s...", count, role);

    let users = generate_users(count, role, password_hash);
    let inserted = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} {}s in {:?}",
        inserted,
        role,
        start_time.elapsed()
    );

    Ok(users)
}

/// Inserts users in batches; existing usernames are skipped.
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per user
    const BATCH_SIZE: usize = 1000;
    let mut inserted = 0;

    for chunk in users.chunks(BATCH_SIZE) {
        inserted += insert_users_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(0);
    }

    let mut query = String::from("INSERT INTO users (username, password, name, role) VALUES ");

    for (i, _) in users.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    query.push_str(" ON CONFLICT (username) DO NOTHING");

    let mut q = sqlx::query(&query);
    for user in users {
        q = q
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(user.role);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}

/// Deletes every seeded account.
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let result = sqlx::query("DELETE FROM users WHERE username LIKE $1")
        .bind(format!("{}%", SEED_USERNAME_PREFIX))
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
