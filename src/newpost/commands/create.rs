use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewpostError, Result};
use crate::model::{Post, PostStamp};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

pub fn run(dir: &Path) -> Result<CmdResult> {
    let post = create_post(dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post created: {}",
        post.path.display()
    )));
    Ok(result.with_post(post))
}

/// Creates `<uuid>.rst` in `dir` stamped with today's date and timezone.
pub fn create_post(dir: &Path) -> Result<Post> {
    create_post_with(dir, PostStamp::now())
}

/// Creates the post file for a given stamp.
///
/// The file is opened with `create_new`, so an existing file at the computed
/// path is never touched and is reported as [`NewpostError::FileCollision`].
pub fn create_post_with(dir: &Path, stamp: PostStamp) -> Result<Post> {
    let path = dir.join(stamp.file_name());
    debug!(id = %stamp.id, path = %path.display(), "creating post");

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(NewpostError::FileCollision(path));
        }
        Err(e) => return Err(NewpostError::Io(e)),
    };

    file.write_all(stamp.to_metadata().as_bytes())?;
    file.flush()?;

    info!(path = %path.display(), "post created");
    Ok(Post::from_stamp(stamp, path))
}
