use super::*;
use prodle_database::*;
use std::sync::Arc;

/// Key of the single rotation document.
const SLOT: &str = "daily";

/// Word pool manager. Owns the dictionary and the rotation document;
/// the current word changes only through [`WordPool::rotate`].
pub struct WordPool {
    repo: Arc<dyn Repository>,
    dictionary: Dictionary,
}

impl WordPool {
    pub fn new(repo: Arc<dyn Repository>, dictionary: Dictionary) -> Self {
        Self { repo, dictionary }
    }
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl WordPool {
    /// Creates the rotation document on first start.
    /// Returns false if a pool already exists, which is left untouched.
    pub async fn seed<I>(&self, words: I) -> Result<bool, PoolError>
    where
        I: IntoIterator<Item = String>,
    {
        let rotation = Rotation::new(words);
        match self.repo.insert(ROTATION, SLOT, encode(&rotation)?).await {
            Ok(_) => {
                log::info!("seeded daily pool with {} words", rotation.available.len());
                Ok(true)
            }
            Err(DataError::Duplicate) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
    /// Adds unseen words to the available pool, seeding it if absent.
    /// Returns how many were added.
    pub async fn restock<I>(&self, words: I) -> Result<usize, PoolError>
    where
        I: IntoIterator<Item = String>,
    {
        let words = words.into_iter().collect::<Vec<_>>();
        let added = match self.append(&words).await {
            Err(DataError::NotFound) => match self.seed(words.iter().cloned()).await? {
                true => self.remaining().await?,
                false => self.append(&words).await?,
            },
            added => added?,
        };
        log::info!("restocked daily pool with {} words", added);
        Ok(added)
    }
    async fn append(&self, words: &[String]) -> Result<usize, DataError> {
        let mut added = 0;
        self.repo
            .update(
                ROTATION,
                SLOT,
                Box::new(|doc| {
                    let mut rotation = decode::<Rotation>(doc.clone())?;
                    added = rotation.restock(words.iter().cloned());
                    *doc = encode(&rotation)?;
                    Ok(())
                }),
            )
            .await?;
        Ok(added)
    }
    /// Retires one available word and publishes it, in one atomic update.
    /// Fails [`PoolError::PoolExhausted`] rather than reuse a retired word.
    pub async fn rotate(&self) -> Result<String, PoolError> {
        let doc = self
            .repo
            .update(
                ROTATION,
                SLOT,
                Box::new(|doc| {
                    let mut rotation = decode::<Rotation>(doc.clone())?;
                    rotation
                        .advance(&mut rand::rng())
                        .ok_or(DataError::Rejected)?;
                    *doc = encode(&rotation)?;
                    Ok(())
                }),
            )
            .await
            .map_err(|e| match e {
                DataError::Rejected => PoolError::PoolExhausted,
                DataError::NotFound => PoolError::PoolExhausted,
                e => PoolError::Data(e),
            })?;
        decode::<Rotation>(doc)?
            .current
            .ok_or(PoolError::NoWordSet)
    }
    /// The word of the day.
    pub async fn current(&self) -> Result<String, PoolError> {
        self.load()
            .await?
            .current
            .ok_or(PoolError::NoWordSet)
    }
    /// Words still eligible for rotation.
    pub async fn remaining(&self) -> Result<usize, PoolError> {
        Ok(self.load().await?.available.len())
    }
    async fn load(&self) -> Result<Rotation, PoolError> {
        Ok(self
            .repo
            .find_one(ROTATION, &Filter::key(SLOT))
            .await?
            .map(decode::<Rotation>)
            .transpose()?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{}", i)).collect()
    }
    fn pool() -> WordPool {
        WordPool::new(Arc::new(Memory::new()), Dictionary::parse("crane\nslate"))
    }

    #[tokio::test]
    async fn current_before_rotation_is_unset() {
        let pool = pool();
        assert_eq!(pool.current().await, Err(PoolError::NoWordSet));
        pool.seed(words(3)).await.unwrap();
        assert_eq!(pool.current().await, Err(PoolError::NoWordSet));
    }
    #[tokio::test]
    async fn current_reflects_latest_rotation() {
        let pool = pool();
        pool.seed(words(3)).await.unwrap();
        let word = pool.rotate().await.unwrap();
        assert_eq!(pool.current().await.unwrap(), word);
        let next = pool.rotate().await.unwrap();
        assert_ne!(next, word);
        assert_eq!(pool.current().await.unwrap(), next);
    }
    #[tokio::test]
    async fn n_rotations_drain_pool_of_n() {
        let pool = pool();
        pool.seed(words(12)).await.unwrap();
        let mut drawn = HashSet::new();
        for _ in 0..12 {
            assert!(drawn.insert(pool.rotate().await.unwrap()));
        }
        assert_eq!(drawn, words(12).into_iter().collect::<HashSet<_>>());
        assert_eq!(pool.remaining().await.unwrap(), 0);
        let last = pool.current().await.unwrap();
        assert_eq!(pool.rotate().await, Err(PoolError::PoolExhausted));
        assert_eq!(pool.current().await.unwrap(), last);
    }
    #[tokio::test]
    async fn unseeded_pool_is_exhausted() {
        assert_eq!(pool().rotate().await, Err(PoolError::PoolExhausted));
    }
    #[tokio::test]
    async fn reseeding_keeps_existing_pool() {
        let pool = pool();
        assert!(pool.seed(words(3)).await.unwrap());
        let word = pool.rotate().await.unwrap();
        assert!(!pool.seed(words(10)).await.unwrap());
        assert_eq!(pool.remaining().await.unwrap(), 2);
        assert_eq!(pool.current().await.unwrap(), word);
    }
    #[tokio::test]
    async fn restock_revives_exhausted_pool() {
        let pool = pool();
        pool.seed(words(1)).await.unwrap();
        let gone = pool.rotate().await.unwrap();
        assert_eq!(pool.rotate().await, Err(PoolError::PoolExhausted));
        let added = pool.restock(vec![gone.clone(), "fresh".to_string()]).await.unwrap();
        assert_eq!(added, 1);
        assert_eq!(pool.rotate().await.unwrap(), "fresh");
    }
    #[tokio::test]
    async fn restock_of_existing_pool_adds_only_unseen_words() {
        let pool = pool();
        pool.seed(words(3)).await.unwrap();
        let word = pool.rotate().await.unwrap();
        assert_eq!(pool.restock(words(5)).await.unwrap(), 2);
        assert_eq!(pool.remaining().await.unwrap(), 4);
        assert_eq!(pool.current().await.unwrap(), word);
        assert_eq!(pool.restock(words(5)).await.unwrap(), 0);
    }
    #[tokio::test]
    async fn restock_without_pool_seeds_it() {
        let pool = pool();
        assert_eq!(pool.restock(words(4)).await.unwrap(), 4);
        assert_eq!(pool.remaining().await.unwrap(), 4);
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_rotations_never_share_a_word() {
        let pool = Arc::new(pool());
        pool.seed(words(40)).await.unwrap();
        let tasks = (0..40)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { pool.rotate().await })
            })
            .collect::<Vec<_>>();
        let mut drawn = HashSet::new();
        for task in tasks {
            assert!(drawn.insert(task.await.unwrap().unwrap()));
        }
        assert_eq!(drawn.len(), 40);
        assert_eq!(pool.rotate().await, Err(PoolError::PoolExhausted));
    }
    #[tokio::test]
    async fn dictionary_is_independent_of_pool() {
        let pool = pool();
        pool.seed(words(1)).await.unwrap();
        pool.rotate().await.unwrap();
        assert_eq!(pool.dictionary().words(), ["crane", "slate"]);
    }
}
