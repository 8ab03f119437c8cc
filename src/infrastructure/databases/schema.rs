use include_dir::{Dir, File, include_dir};
use surrealdb::{Error, Surreal, engine::any::Any};

static SCHEMA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/schema");

fn definitions() -> Vec<&'static File<'static>> {
    let mut files = SCHEMA_DIR
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "surql"))
        .collect::<Vec<_>>();

    files.sort_by_key(|file| file.path());
    files
}

/// Runs every embedded `.surql` definition file in file-name order.
/// Definitions use `OVERWRITE`, so applying them on every start is safe.
pub async fn apply(db: &Surreal<Any>) -> Result<(), Error> {
    for file in definitions() {
        let Some(statements) = file.contents_utf8() else {
            tracing::warn!(file = %file.path().display(), "skipping non utf-8 schema file");
            continue;
        };

        tracing::debug!(file = %file.path().display(), "applying schema");

        db.query(statements).await?.check()?;
    }

    Ok(())
}
