//! Multipart intake and transient storage of uploaded résumés.
//!
//! The client filename is validated but never used as a path: each upload is
//! written to a randomly-named temp file inside the upload directory, and the
//! file is deleted when `UploadedResume` is dropped, whatever the exit path.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Multipart field that carries the résumé.
pub const RESUME_FIELD: &str = "resume";

pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const NO_FILE_SELECTED: &str = "No file selected";
pub const NOT_A_PDF: &str = "Please upload a PDF file";

/// A validated upload read out of the request body.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub data: Bytes,
}

/// An upload persisted to disk for the lifetime of this value.
#[derive(Debug)]
pub struct UploadedResume {
    pub filename: String,
    pub size: usize,
    file: NamedTempFile,
}

impl UploadedResume {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the temp file now, reporting failures instead of swallowing them on drop.
    pub fn close(self) -> std::io::Result<()> {
        self.file.close()
    }
}

/// Checks the client-supplied filename: non-empty, `.pdf` (any case).
pub fn validate_filename(name: &str) -> Result<&str, AppError> {
    if name.is_empty() {
        return Err(AppError::Validation(NO_FILE_SELECTED.to_string()));
    }

    if !name.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(NOT_A_PDF.to_string()));
    }

    Ok(name)
}

/// Pulls the first `resume` file part out of the multipart body.
/// Other fields, and a `resume` part sent without a filename, are not uploads and are skipped.
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name() else {
            continue;
        };

        let filename = validate_filename(filename)?.to_string();
        let data = field.bytes().await?;

        return Ok(ResumeUpload { filename, data });
    }

    Err(AppError::Validation(NO_FILE_UPLOADED.to_string()))
}

/// Writes the upload into `upload_dir` under a fresh random name.
/// Creates the directory first if it does not exist yet.
pub async fn save_upload(upload_dir: &Path, upload: ResumeUpload) -> Result<UploadedResume, AppError> {
    let dir: PathBuf = upload_dir.to_path_buf();
    let ResumeUpload { filename, data } = upload;
    let size = data.len();

    let file = tokio::task::spawn_blocking(move || -> anyhow::Result<NamedTempFile> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;

        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile_in(&dir)
            .context("Failed to create temp file for upload")?;
        file.write_all(&data).context("Failed to write upload")?;
        file.flush().context("Failed to flush upload")?;
        Ok(file)
    })
    .await
    .context("Upload task failed")??;

    Ok(UploadedResume {
        filename,
        size,
        file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filename_is_rejected() {
        let err = validate_filename("").unwrap_err();
        assert_eq!(err.to_string(), NO_FILE_SELECTED);
    }

    #[test]
    fn test_non_pdf_extension_is_rejected() {
        for name in ["resume.docx", "resume.pdf.txt", "resume", "pdf"] {
            let err = validate_filename(name).unwrap_err();
            assert_eq!(err.to_string(), NOT_A_PDF, "accepted {name}");
        }
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        assert_eq!(validate_filename("CV.PDF").unwrap(), "CV.PDF");
        assert_eq!(validate_filename("cv.Pdf").unwrap(), "cv.Pdf");
    }

    #[tokio::test]
    async fn test_save_upload_uses_random_name_and_cleans_up_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");

        let saved = save_upload(
            &upload_dir,
            ResumeUpload {
                filename: "../../etc/passwd.pdf".to_string(),
                data: Bytes::from_static(b"%PDF-1.4"),
            },
        )
        .await
        .unwrap();

        let path = saved.path().to_path_buf();
        assert!(path.starts_with(&upload_dir));
        assert_ne!(path.file_name().unwrap(), "passwd.pdf");
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
        assert_eq!(saved.size, 8);

        drop(saved);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_same_filename_uploads_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let upload = || ResumeUpload {
            filename: "resume.pdf".to_string(),
            data: Bytes::from_static(b"%PDF"),
        };

        let first = save_upload(dir.path(), upload()).await.unwrap();
        let second = save_upload(dir.path(), upload()).await.unwrap();

        assert_ne!(first.path(), second.path());
        first.close().unwrap();
        assert!(second.path().exists());
    }
}
