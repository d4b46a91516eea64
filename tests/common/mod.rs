#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sql_types::{Double, Integer, Nullable, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use product_catalog::db::{
    ConnectionOptions, DbPool, establish_connection_pool, establish_pool_with,
};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite database removed together with its directory on drop.
pub struct TestDb {
    _dir: TempDir,
    writer: DbPool,
    reader: DbPool,
}

impl TestDb {
    /// Creates a database with the `product` table in place.
    pub fn new(filename: &str) -> Self {
        let test_db = Self::without_schema(filename);
        let mut conn = test_db.writer.get().expect("writer connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        drop(conn);
        test_db
    }

    /// Creates an empty database file with no tables at all.
    pub fn without_schema(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 path");
        let writer =
            establish_pool_with(url, ConnectionOptions::read_write()).expect("writer pool");
        let reader = establish_connection_pool(url).expect("reader pool");
        Self {
            _dir: dir,
            writer,
            reader,
        }
    }

    /// Creates a database whose `product` table is defined by `ddl`, the way
    /// an externally provisioned schema may look.
    pub fn with_table(filename: &str, ddl: &str) -> Self {
        let test_db = Self::without_schema(filename);
        test_db.execute_sql(ddl);
        test_db
    }

    /// Read-only pool, the same kind the server hands to the repository.
    pub fn pool(&self) -> DbPool {
        self.reader.clone()
    }

    pub fn insert_product(&self, id: i32, name: Option<&str>, price: Option<f64>) {
        let mut conn = self.writer.get().expect("writer connection");
        diesel::sql_query("INSERT INTO product (id, name, price) VALUES (?, ?, ?)")
            .bind::<Integer, _>(id)
            .bind::<Nullable<Text>, _>(name)
            .bind::<Nullable<Double>, _>(price)
            .execute(&mut conn)
            .expect("insert product");
    }

    pub fn delete_products(&self) {
        self.execute_sql("DELETE FROM product");
    }

    pub fn execute_sql(&self, sql: &str) {
        let mut conn = self.writer.get().expect("writer connection");
        diesel::sql_query(sql)
            .execute(&mut conn)
            .expect("statement should run");
    }
}
