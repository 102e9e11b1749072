//! Fixture data for integration tests.
//!
//! | review_id | category | votes | comments |
//! |-----------|----------|-------|----------|
//! | 1 | euro game | 1 | 0 |
//! | 2 | dexterity | 5 | 3 (ids 1, 4, 5) |
//! | 3 | social deduction | 5 | 3 (ids 2, 3, 6) |
//! | 4-13 | social deduction | mixed | 0 |
//! | 14 | dexterity | 1 | 0 |
//! | 15 | dexterity | 9 | 0 |
//!
//! `children's games` exists but has no reviews. Comment 1 starts at 16 votes.

use meeple_data::{connect, DatabaseConfig};
use sqlx::SqlitePool;

pub const CATEGORIES: &[(&str, &str)] = &[
    ("euro game", "Abstact games that involve little luck"),
    ("social deduction", "Players attempt to uncover each other's hidden role"),
    ("dexterity", "Games involving physical skill"),
    ("children's games", "Games suitable for children"),
];

pub const USERS: &[(&str, &str, &str)] = &[
    (
        "mallionaire",
        "haz",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "philippaclaire9",
        "philippa",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "bainesface",
        "sarah",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "dav3rid",
        "dave",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

/// `(title, designer, owner, category, votes, created_at)`
pub const REVIEWS: &[(&str, &str, &str, &str, i64, &str)] = &[
    ("Agricola", "Uwe Rosenberg", "mallionaire", "euro game", 1, "2021-01-18 10:00:20"),
    ("Jenga", "Leslie Scott", "philippaclaire9", "dexterity", 5, "2021-01-18 10:01:41"),
    ("Ultimate Werewolf", "Akihisa Okui", "bainesface", "social deduction", 5, "2021-01-18 10:02:11"),
    ("Dolor reprehenderit", "Gamey McGameface", "mallionaire", "social deduction", 7, "2021-01-22 11:35:50"),
    ("Proident tempor et.", "Seymour Buttz", "mallionaire", "social deduction", 5, "2021-01-07 09:06:08"),
    ("Occaecat consequat officia in quis commodo.", "Ollie Tabooger", "mallionaire", "social deduction", 8, "2020-09-13 14:19:28"),
    ("Mollit elit qui incididunt veniam occaecat cupidatat", "Avery Wunzboogerz", "mallionaire", "social deduction", 9, "2021-01-25 11:16:54"),
    ("One Night Ultimate Werewolf", "Akihisa Okui", "mallionaire", "social deduction", 5, "2021-01-18 10:03:30"),
    ("A truly Quacking Game; Quacks of Quedlinburg", "Wolfgang Warsch", "mallionaire", "social deduction", 10, "2021-01-18 10:04:10"),
    ("Build you own tour de Yorkshire", "Asger Harding Granerud", "mallionaire", "social deduction", 10, "2021-01-18 10:05:00"),
    ("That's just what an evil person would say!", "Fiona Lohoar", "mallionaire", "social deduction", 8, "2021-01-18 10:06:30"),
    ("Scythe; you're gonna need a bigger table!", "Jamey Stegmaier", "mallionaire", "social deduction", 100, "2021-01-22 10:37:04"),
    ("Settlers of Catan: Don't Settle For Less", "Klaus Teuber", "mallionaire", "social deduction", 16, "1970-01-10 02:08:38"),
    ("Tiptoe Tower", "Anna Stack", "dav3rid", "dexterity", 1, "2021-02-05 09:15:00"),
    ("Crokinole Classic", "Joe Wyatt", "bainesface", "dexterity", 9, "2020-12-01 18:45:12"),
];

/// `(body, author, review_id, votes, created_at)`
pub const COMMENTS: &[(&str, &str, i64, i64, &str)] = &[
    ("I loved this game too!", "bainesface", 2, 16, "2017-11-22 12:43:33"),
    ("My dog loved this game too!", "mallionaire", 3, 13, "2021-01-18 10:09:05"),
    ("I didn't know dogs could play games", "philippaclaire9", 3, 10, "2021-01-18 10:09:48"),
    ("EPIC board game!", "bainesface", 2, 16, "2017-11-22 12:36:03"),
    ("Now this is a story all about how, board games turned my life upside down", "mallionaire", 2, 13, "2021-01-18 10:24:05"),
    ("Not sure about dogs, but my cat likes to get involved with board games", "philippaclaire9", 3, 10, "2021-03-27 19:49:48"),
];

/// Insert the fixture rows in one transaction. Ids start at 1 in list order.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for &(slug, description) in CATEGORIES {
        sqlx::query("INSERT INTO categories (slug, description) VALUES ($1, $2)")
            .bind(slug)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    for &(username, name, avatar_url) in USERS {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(name)
            .bind(avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    for &(title, designer, owner, category, votes, created_at) in REVIEWS {
        sqlx::query(
            "INSERT INTO reviews (title, review_body, designer, owner, category, votes, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(title)
        .bind(format!("A review of {title}."))
        .bind(designer)
        .bind(owner)
        .bind(category)
        .bind(votes)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }

    for &(body, author, review_id, votes, created_at) in COMMENTS {
        sqlx::query(
            "INSERT INTO comments (body, author, review_id, votes, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(body)
        .bind(author)
        .bind(review_id)
        .bind(votes)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await
}

/// A fresh in-memory store with the schema created and the fixtures loaded.
pub async fn seeded_pool() -> SqlitePool {
    let pool = connect(&DatabaseConfig::default())
        .await
        .expect("failed to open in-memory store");
    seed(&pool).await.expect("failed to seed fixtures");
    pool
}
