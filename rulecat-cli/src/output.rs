//! Writing extracted catalog data to an output directory.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use rulecat_types::{CatalogData, DataIndex, LibraryInfo};
use serde::Serialize;
use tracing::{debug, info};

pub const INDEX_FILE_NAME: &str = "versions.json";

pub fn write_json<T: Serialize>(path: &Utf8Path, value: &T, pretty: bool) -> anyhow::Result<()> {
    let mut s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    s.push('\n');
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

pub fn read_index(out_dir: &Utf8Path) -> anyhow::Result<DataIndex> {
    let path = out_dir.join(INDEX_FILE_NAME);
    if !path.exists() {
        debug!("no index at {}, starting fresh", path);
        return Ok(DataIndex::default());
    }
    let contents = fs::read_to_string(&path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path))
}

/// Path of the data file for `version` inside `out_dir`.
pub fn data_file_path(out_dir: &Utf8Path, version: &str) -> Utf8PathBuf {
    out_dir.join(format!("{version}.json"))
}

/// Writes `<version>.json` and records `info` in `versions.json`.
///
/// Index entries for other versions are preserved.
pub fn write_catalog(
    out_dir: &Utf8Path,
    catalog: &CatalogData,
    info: &LibraryInfo,
    pretty: bool,
) -> anyhow::Result<Utf8PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;

    let data_path = data_file_path(out_dir, &info.version);
    write_json(&data_path, catalog, pretty)?;

    let mut index = read_index(out_dir)?;
    index.upsert(info.clone());
    write_json(&out_dir.join(INDEX_FILE_NAME), &index, pretty)?;

    info!(
        "wrote {} ({} fixers, {} sets)",
        data_path,
        catalog.fixers.len(),
        catalog.sets.len()
    );
    Ok(data_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn info(version: &str) -> LibraryInfo {
        LibraryInfo {
            version: version.to_string(),
            indent: "    ".to_string(),
            line_ending: "\n".to_string(),
        }
    }

    fn temp_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn test_write_catalog_creates_data_and_index() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp_root(&temp).join("data");

        let path = write_catalog(&out, &CatalogData::default(), &info("1.0.0"), true)
            .expect("write catalog");
        assert_eq!(path, out.join("1.0.0.json"));

        let data: CatalogData =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(data, CatalogData::default());

        let index = read_index(&out).expect("index");
        assert_eq!(index.versions, vec![info("1.0.0")]);
    }

    #[test]
    fn test_index_keeps_other_versions() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp_root(&temp);

        write_catalog(&out, &CatalogData::default(), &info("2.0.0"), false).expect("write");
        write_catalog(&out, &CatalogData::default(), &info("1.0.0"), false).expect("write");
        write_catalog(&out, &CatalogData::default(), &info("2.0.0"), false).expect("write");

        let versions: Vec<_> = read_index(&out)
            .expect("index")
            .versions
            .into_iter()
            .map(|v| v.version)
            .collect();
        assert_eq!(versions, ["1.0.0", "2.0.0"]);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp_root(&temp).join("x.json");
        write_json(&path, &info("1.0.0"), false).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"lineEnding\""));
    }

    #[test]
    fn test_corrupt_index_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp_root(&temp);
        std::fs::write(out.join(INDEX_FILE_NAME), "not json").expect("write");
        let err = read_index(&out).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
