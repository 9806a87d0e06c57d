/// JSON flat-file implementation of the user storage port
use async_trait::async_trait;
use chirp_core::{
    error::{CoreError, Result},
    store::UserStore,
    types::{User, UserId},
};
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

/// User store backed by a single JSON array file.
///
/// Reads tolerate a missing file (empty collection). Writes serialize the
/// full collection to a temporary file in the same directory, fsync it, and
/// rename it over the target, so the backing file always holds a complete
/// collection. The lock serializes callers within this process; it does not
/// defend against other processes writing the same file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create the parent directory of the backing file if it is missing.
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_collection(&self) -> Result<Vec<User>> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                CoreError::store_corrupt(format!("{}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    async fn write_collection(&self, users: &[User]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(users)?;
        let tmp = self.temp_path();

        let mut file = fs::File::create(&tmp)
            .await
            .map_err(|e| CoreError::store_write(format!("{}: {e}", tmp.display())))?;

        if let Err(e) = write_and_sync(&mut file, &bytes).await {
            drop(file);
            let _ = fs::remove_file(&tmp).await;
            return Err(CoreError::store_write(format!("{}: {e}", tmp.display())));
        }
        drop(file);

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(CoreError::store_write(format!(
                "{}: {e}",
                self.path.display()
            )));
        }

        Ok(())
    }

    // Writers are serialized by the lock, so a per-process name is enough.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "users.json".to_string(), |n| n.to_string_lossy().into_owned());
        self.path
            .with_file_name(format!(".{file_name}.tmp.{}", std::process::id()))
    }
}

async fn write_and_sync(file: &mut fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn append(&self, user: User) -> Result<User> {
        let _guard = self.lock.lock().await;

        let mut users = self.read_collection().await?;

        if users.iter().any(|u| u.id == user.id) {
            return Err(CoreError::duplicate(format!("user id {}", user.id)));
        }
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(CoreError::duplicate(format!("email {}", user.email)));
        }

        users.push(user.clone());
        self.write_collection(&users).await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let _guard = self.lock.lock().await;
        self.read_collection().await
    }

    async fn get(&self, id: UserId) -> Result<Option<User>> {
        let _guard = self.lock.lock().await;
        let users = self.read_collection().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn update(&self, user: User) -> Result<User> {
        let _guard = self.lock.lock().await;

        let mut users = self.read_collection().await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| CoreError::not_found("user", user.id.to_string()))?;

        *slot = user.clone();
        self.write_collection(&users).await?;

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut users = self.read_collection().await?;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CoreError::not_found("user", id.to_string()))?;

        users.remove(index);
        self.write_collection(&users).await
    }
}
