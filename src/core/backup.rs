use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Back up the repairs workbook and the history ledger.
    ///
    /// Without `--compress` the destination is a directory receiving plain
    /// copies; with it, a single archive is written (.tar.gz / .tgz by
    /// extension, .zip otherwise).
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check data files exist
        let sources: Vec<PathBuf> = [cfg.repairs_file(), cfg.history_file()]
            .into_iter()
            .filter(|p| p.exists())
            .collect();

        if sources.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "No data files to back up in {}",
                    cfg.data_dir_path().display()
                ),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // ⛔ 2.5️⃣ If destination already holds a backup → ask confirmation
        let clash = if compress {
            dest.exists().then(|| dest.to_path_buf())
        } else {
            sources
                .iter()
                .filter_map(|s| s.file_name().map(|n| dest.join(n)))
                .find(|t| t.exists())
        };

        if let Some(existing) = clash {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                existing.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(()); // ← exit safely
            }
            println!();
        }

        // 3️⃣ Copy or archive
        let final_path = if compress {
            compress_backup(&sources, dest)?
        } else {
            fs::create_dir_all(dest)?;
            for src in &sources {
                if let Some(name) = src.file_name() {
                    fs::copy(src, dest.join(name))?;
                }
            }
            dest.to_path_buf()
        };
        println!("✅ Backup created: {}", final_path.display());

        // 4️⃣ Internal log (best effort)
        audit::record(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

/// Compress the data files into a single archive.
fn compress_backup(sources: &[PathBuf], dest: &Path) -> AppResult<PathBuf> {
    let name = dest.to_string_lossy().to_lowercase();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = fs::File::create(dest)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for src in sources {
            if let Some(file_name) = src.file_name() {
                builder.append_path_with_name(src, file_name)?;
            }
        }

        builder.into_inner()?.finish()?;

        println!("📦 Compressed: {}", dest.display());
        return Ok(dest.to_path_buf());
    }

    let zip_path = if name.ends_with(".zip") {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    };

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let mut f = fs::File::open(src)?;
        zip.start_file(src.file_name().unwrap().to_string_lossy(), options)
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
