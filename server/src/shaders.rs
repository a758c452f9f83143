//! Same-origin access to the GLSL sources the WebGL sketches compile.

use actix_web::{HttpResponse, web};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::{AppState, ServerError};

/// Resolves `name` to a file directly inside `dir`. Anything that is not a
/// single plain file name (separators, `..`, absolute paths) resolves to
/// nothing.
pub fn resolve_shader_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(file)), None) => Some(dir.join(file)),
        _ => None,
    }
}

pub async fn get_shader(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let name = name.into_inner();
    let Some(path) = resolve_shader_path(&state.shader_dir, &name) else {
        log::warn!("rejected shader name {name:?}");
        return Err(ServerError::ShaderNotFound(name));
    };

    match read_shader(&path).await {
        Ok(Some(source)) => Ok(HttpResponse::Ok().content_type("text/plain").body(source)),
        Ok(None) => {
            log::warn!("shader {} not found", path.display());
            Err(ServerError::ShaderNotFound(name))
        }
        Err(source) => {
            log::error!("failed to read shader {}: {source}", path.display());
            Err(ServerError::ShaderRead { name, source })
        }
    }
}

/// Raw bytes of a regular file, `None` when nothing or only a directory sits
/// at `path`.
async fn read_shader(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => tokio::fs::read(path).await.map(Some),
        Ok(_) => Ok(None),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
