use crate::api::{ApiError, DocType, Document, DocumentUpload};
use crate::listing::Filterable;
use chrono::NaiveDateTime;
use leptos::*;

pub const DOC_TYPE_OPTIONS: [&str; 2] = ["Public", "Private"];

impl Filterable for Document {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.document_name.as_deref(), self.employee_id.as_deref()]
    }

    fn type_value(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.created_at.map(|at| at.naive_utc())
    }
}

/// File picked in the upload form, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
pub async fn read_file(file: web_sys::File) -> Result<SelectedFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Could not read the selected file."))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(SelectedFile {
        name: file.name(),
        content_type,
        bytes,
    })
}

#[derive(Clone, Copy)]
pub struct UploadFormState {
    doc_type: RwSignal<String>,
    document_name: RwSignal<String>,
    employee_id: RwSignal<String>,
    file: RwSignal<Option<SelectedFile>>,
}

impl Default for UploadFormState {
    fn default() -> Self {
        Self {
            doc_type: create_rw_signal(DocType::Private.as_str().to_string()),
            document_name: create_rw_signal(String::new()),
            employee_id: create_rw_signal(String::new()),
            file: create_rw_signal(None),
        }
    }
}

impl UploadFormState {
    pub fn doc_type_signal(&self) -> RwSignal<String> {
        self.doc_type
    }

    pub fn name_signal(&self) -> RwSignal<String> {
        self.document_name
    }

    pub fn employee_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn file_signal(&self) -> RwSignal<Option<SelectedFile>> {
        self.file
    }

    pub fn reset(&self) {
        self.doc_type.set(DocType::Private.as_str().to_string());
        self.document_name.set(String::new());
        self.employee_id.set(String::new());
        self.file.set(None);
    }

    pub fn to_upload(&self) -> Result<DocumentUpload, ApiError> {
        let doc_type = match self.doc_type.get_untracked().as_str() {
            "Public" => DocType::Public,
            "Private" => DocType::Private,
            other => {
                return Err(ApiError::validation(format!(
                    "Unknown document type: {}",
                    other
                )))
            }
        };
        let document_name = self.document_name.get_untracked().trim().to_string();
        if document_name.is_empty() {
            return Err(ApiError::validation("Document name is required."));
        }
        let file = self
            .file
            .get_untracked()
            .ok_or_else(|| ApiError::validation("Choose a file to upload."))?;
        if file.bytes.is_empty() {
            return Err(ApiError::validation("The selected file is empty."));
        }
        Ok(DocumentUpload {
            doc_type,
            document_name,
            employee_id: self.employee_id.get_untracked().trim().to_string(),
            file_name: file.name,
            content_type: file.content_type,
            bytes: file.bytes,
        })
    }
}
