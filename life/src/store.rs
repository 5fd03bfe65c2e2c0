//! Board files on disk.
//!
//! Boards live in two directories under the data dir: `boards/` and
//! `favourites/`. Lookups search both, in that order; new boards are always
//! written to `boards/`.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    codec::BoardCodec,
    config::LifeConfig,
    error::{LifeError, Result},
    grid::{Board, ensure_persistable},
};

/// A board file found by [`BoardStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoredBoard {
    /// File name including the extension.
    pub name: String,
    pub favourite: bool,
}

/// Reads and writes board files.
#[derive(Debug, Clone)]
pub struct BoardStore {
    boards_dir: PathBuf,
    favourites_dir: PathBuf,
    codec: BoardCodec,
}

impl BoardStore {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            boards_dir: config.boards_dir(),
            favourites_dir: config.favourites_dir(),
            codec: BoardCodec::new(config),
        }
    }

    pub fn codec(&self) -> &BoardCodec {
        &self.codec
    }

    /// Create the board directories if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.boards_dir)?;
        fs::create_dir_all(&self.favourites_dir)?;
        Ok(())
    }

    /// Raw text of a stored board.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.locate(name)?;
        debug!(path = %path.display(), "reading board");
        Ok(fs::read_to_string(path)?)
    }

    /// Write raw board text into `boards/`, replacing any existing file.
    pub fn write(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.boards_dir.join(self.file_name(name)?);
        fs::write(&path, text)?;
        debug!(path = %path.display(), bytes = text.len(), "board written");
        Ok(path)
    }

    /// Read and parse a stored board.
    pub fn load(&self, name: &str) -> Result<Board> {
        self.codec.parse(&self.read(name)?)
    }

    /// Serialize and store a board. Saved boards must be at least 2x2.
    pub fn save(&self, name: &str, board: &Board) -> Result<PathBuf> {
        ensure_persistable(board.height(), board.width())?;
        self.write(name, &self.codec.serialize(board))
    }

    /// Every stored board, sorted by name.
    pub fn list(&self) -> Result<Vec<StoredBoard>> {
        let mut boards = self.list_dir(&self.boards_dir, false)?;
        boards.extend(self.list_dir(&self.favourites_dir, true)?);
        boards.sort();
        Ok(boards)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.locate(name)?;
        fs::remove_file(&path)?;
        info!(path = %path.display(), "board deleted");
        Ok(())
    }

    /// Move a board from `boards/` to `favourites/`.
    pub fn favourite(&self, name: &str) -> Result<PathBuf> {
        self.move_between(name, &self.boards_dir, &self.favourites_dir)
    }

    /// Move a board from `favourites/` back to `boards/`.
    pub fn unfavourite(&self, name: &str) -> Result<PathBuf> {
        self.move_between(name, &self.favourites_dir, &self.boards_dir)
    }

    /// File name for a board; anything other than a single plain path component is refused.
    fn file_name(&self, name: &str) -> Result<String> {
        let mut components = Path::new(name).components();
        let plain = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none()
            && !name.contains(['/', '\\'])
            && !name.contains("..");
        if !plain {
            return Err(LifeError::InvalidName { name: name.to_owned() });
        }
        Ok(self.codec.add_extension(name))
    }

    fn locate(&self, name: &str) -> Result<PathBuf> {
        let file_name = self.file_name(name)?;
        let found = [&self.boards_dir, &self.favourites_dir]
            .into_iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file());
        found.ok_or(LifeError::NotFound { name: file_name })
    }

    fn move_between(&self, name: &str, from: &Path, to: &Path) -> Result<PathBuf> {
        let file_name = self.file_name(name)?;
        let source = from.join(&file_name);
        if !source.is_file() {
            return Err(LifeError::NotFound { name: file_name });
        }

        fs::create_dir_all(to)?;
        let target = to.join(&file_name);
        fs::rename(&source, &target)?;
        info!(from = %source.display(), to = %target.display(), "board moved");
        Ok(target)
    }

    fn list_dir(&self, dir: &Path, favourite: bool) -> Result<Vec<StoredBoard>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut boards = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file() && self.codec.add_extension(&name) == name {
                boards.push(StoredBoard { name, favourite });
            }
        }
        Ok(boards)
    }
}
