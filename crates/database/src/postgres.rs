use super::*;
use const_format::concatcp;
use tokio::sync::Mutex;
use tokio_postgres::Client;

/// Table holding every collection.
#[rustfmt::skip]
const DOCUMENTS: &str = "documents";

#[rustfmt::skip]
const CREATES: &str = concatcp!(
    "CREATE TABLE IF NOT EXISTS ", DOCUMENTS, " (
        collection  TEXT  NOT NULL,
        key         TEXT  NOT NULL,
        doc         JSONB NOT NULL,
        PRIMARY KEY (collection, key)
    );"
);

/// PostgreSQL repository over a single connection.
/// The connection is held exclusively for the duration of each call,
/// which lets `update` run inside its own transaction.
pub struct Postgres {
    client: Mutex<Client>,
}

impl Postgres {
    /// Connects and ensures the documents table exists.
    pub async fn connect(url: &str) -> Result<Self, DataError> {
        log::info!("connecting to database");
        let tls = tokio_postgres::tls::NoTls;
        let (client, connection) = tokio_postgres::connect(url, tls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("database connection closed: {}", e);
            }
        });
        client.batch_execute("SET client_min_messages TO WARNING").await?;
        client.batch_execute(CREATES).await?;
        Ok(Self {
            client: Mutex::new(client),
        })
    }
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Repository for Postgres {
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, DataError> {
        bounded(async {
            let client = self.client.lock().await;
            let row = match filter {
                Filter::Key(key) => {
                    const SQL: &str = concatcp!(
                        "SELECT doc ",
                        "FROM   ", DOCUMENTS, " ",
                        "WHERE  collection = $1 ",
                        "AND    key = $2"
                    );
                    client.query_opt(SQL, &[&collection, key]).await?
                }
                Filter::Field(field, value) => {
                    const SQL: &str = concatcp!(
                        "SELECT   doc ",
                        "FROM     ", DOCUMENTS, " ",
                        "WHERE    collection = $1 ",
                        "AND      doc ->> $2 = $3 ",
                        "ORDER BY key ",
                        "LIMIT    1"
                    );
                    client.query_opt(SQL, &[&collection, field, value]).await?
                }
            };
            row.map(|r| r.try_get::<_, Document>(0)).transpose().map_err(DataError::from)
        })
        .await
    }
    async fn insert(&self, collection: &str, key: &str, doc: Document) -> Result<Document, DataError> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", DOCUMENTS, " (collection, key, doc) ",
            "VALUES      ($1, $2, $3) ",
            "ON CONFLICT DO NOTHING"
        );
        bounded(async {
            let client = self.client.lock().await;
            match client.execute(SQL, &[&collection, &key, &doc]).await? {
                0 => Err::<Document, _>(DataError::Duplicate),
                _ => Ok(doc),
            }
        })
        .await
    }
    async fn update(&self, collection: &str, key: &str, mutator: Mutator<'_>) -> Result<Document, DataError> {
        const LOCK: &str = concatcp!(
            "SELECT doc ",
            "FROM   ", DOCUMENTS, " ",
            "WHERE  collection = $1 ",
            "AND    key = $2 ",
            "FOR UPDATE"
        );
        const SQL: &str = concatcp!(
            "UPDATE ", DOCUMENTS, " ",
            "SET    doc = $3 ",
            "WHERE  collection = $1 ",
            "AND    key = $2"
        );
        bounded(async {
            let mut client = self.client.lock().await;
            let tx = client.transaction().await?;
            let mut doc = tx
                .query_opt(LOCK, &[&collection, &key])
                .await?
                .ok_or(DataError::NotFound)?
                .try_get::<_, Document>(0)?;
            mutator(&mut doc)?;
            tx.execute(SQL, &[&collection, &key, &doc]).await?;
            tx.commit().await?;
            Ok::<_, DataError>(doc)
        })
        .await
    }
    async fn delete_one(&self, collection: &str, key: &str) -> Result<(), DataError> {
        const SQL: &str = concatcp!(
            "DELETE FROM ", DOCUMENTS, " ",
            "WHERE       collection = $1 ",
            "AND         key = $2"
        );
        bounded(async {
            let client = self.client.lock().await;
            client.execute(SQL, &[&collection, &key]).await?;
            Ok::<_, DataError>(())
        })
        .await
    }
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DataError> {
        const SQL: &str = concatcp!(
            "SELECT   doc ",
            "FROM     ", DOCUMENTS, " ",
            "WHERE    collection = $1 ",
            "ORDER BY key"
        );
        bounded(async {
            let client = self.client.lock().await;
            client
                .query(SQL, &[&collection])
                .await?
                .into_iter()
                .map(|row| row.try_get::<_, Document>(0).map_err(DataError::from))
                .collect::<Result<Vec<_>, DataError>>()
        })
        .await
    }
    async fn ping(&self) -> Result<(), DataError> {
        bounded(async {
            let client = self.client.lock().await;
            client.execute("SELECT 1", &[]).await?;
            Ok::<_, DataError>(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    /// Connects to `DB_URL` and claims a collection no other run shares.
    async fn live() -> Option<(Arc<Postgres>, String)> {
        let url = std::env::var("DB_URL").ok()?;
        let repo = Postgres::connect(&url).await.unwrap();
        let collection = format!("test-{}", nanos());
        Some((Arc::new(repo), collection))
    }
    fn nanos() -> u128 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    }

    #[tokio::test]
    #[ignore = "needs a live database at DB_URL"]
    async fn insert_conflict_is_duplicate() {
        let Some((repo, collection)) = live().await else { return };
        repo.insert(&collection, "alice", json!({ "v": 1 })).await.unwrap();
        let again = repo.insert(&collection, "alice", json!({ "v": 2 })).await;
        assert_eq!(again, Err(DataError::Duplicate));
        let found = repo.find_one(&collection, &Filter::key("alice")).await.unwrap();
        assert_eq!(found, Some(json!({ "v": 1 })));
        repo.delete_one(&collection, "alice").await.unwrap();
    }
    #[tokio::test]
    #[ignore = "needs a live database at DB_URL"]
    async fn concurrent_updates_do_not_lose_writes() {
        let Some((repo, collection)) = live().await else { return };
        repo.insert(&collection, "alice", json!({ "n": 0 })).await.unwrap();
        let tasks = (0..16)
            .map(|_| {
                let repo = repo.clone();
                let collection = collection.clone();
                tokio::spawn(async move {
                    repo.update(
                        &collection,
                        "alice",
                        Box::new(|doc| {
                            let n = doc["n"].as_u64().unwrap_or_default();
                            doc["n"] = json!(n + 1);
                            Ok(())
                        }),
                    )
                    .await
                })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        let found = repo.find_one(&collection, &Filter::key("alice")).await.unwrap();
        assert_eq!(found, Some(json!({ "n": 16 })));
        let rejected = repo
            .update(&collection, "alice", Box::new(|_| Err(DataError::Rejected)))
            .await;
        assert_eq!(rejected, Err(DataError::Rejected));
        let found = repo.find_one(&collection, &Filter::key("alice")).await.unwrap();
        assert_eq!(found, Some(json!({ "n": 16 })));
        repo.delete_one(&collection, "alice").await.unwrap();
    }
}
